use std::borrow::Cow;

/// Schemes that never render as a link target.
const BLOCKED_SCHEMES: [&str; 4] = ["javascript", "vbscript", "file", "data"];

/// `data:` media types an image may still use.
const SAFE_IMAGE_DATA: [&str; 4] = ["image/png", "image/gif", "image/jpeg", "image/webp"];

/// Whether `url` is safe to emit as a link (`image == false`) or image source.
///
/// Browsers ignore tabs and line breaks inside URLs, so they are dropped
/// before the scheme is inspected.
pub fn is_safe(url: &str, image: bool) -> bool {
    let cleaned: String = url
        .trim_start_matches(|c: char| c.is_ascii_whitespace() || c.is_ascii_control())
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect();

    let Some(scheme) = scheme(&cleaned) else {
        return true;
    };
    if !BLOCKED_SCHEMES.contains(&scheme.as_str()) {
        return true;
    }
    if image && scheme == "data" {
        let rest = cleaned[scheme.len() + 1..].to_ascii_lowercase();
        return SAFE_IMAGE_DATA.iter().any(|t| rest.starts_with(t));
    }
    false
}

/// Lowercased URL scheme, if `url` starts with one.
fn scheme(url: &str) -> Option<String> {
    let (scheme, _) = url.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic()
        || !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        return None;
    }
    Some(scheme.to_ascii_lowercase())
}

/// Percent-encodes bytes that cannot appear literally in a URL attribute.
///
/// Existing `%` escapes pass through untouched.
pub fn percent_encode(url: &str) -> Cow<'_, str> {
    let needs_encoding = |b: u8| {
        matches!(
            b,
            b' ' | b'\\' | b'<' | b'>' | b'"' | b'`' | 0x00..=0x1F | 0x7F..=0xFF
        )
    };
    if !url.bytes().any(needs_encoding) {
        return Cow::Borrowed(url);
    }
    let mut encoded = String::with_capacity(url.len() + 8);
    for &byte in url.as_bytes() {
        if needs_encoding(byte) {
            encoded.push_str(&format!("%{byte:02X}"));
        } else {
            encoded.push(char::from(byte));
        }
    }
    Cow::Owned(encoded)
}
