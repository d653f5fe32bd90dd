// Shared by the bench targets in this directory; each target uses a subset,
// so unused ones would otherwise warn.
#![allow(dead_code)]

/// A typical document: every block kind once, repeated `size` times.
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with *some* **content** and a [link](https://example.com).\n\n- Bullet point\n  - Nested item\n- Another item\n\n> Quoted `code` text\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

/// Sections mixing the constructs the block builder tracks state for:
/// quotes several levels deep, lists nested `list_depth` levels, ordered
/// lists with a custom start and links with titles.
pub fn generate_complex_markdown(sections: usize, list_depth: usize) -> String {
    let mut content = String::new();
    for section in 0..sections {
        content.push_str(&format!("## Section {section}\n\n"));
        content.push_str(&nested_quote(section % 4 + 1));
        content.push_str(&nested_list(list_depth));
        content.push_str(&format!(
            "{start}. ordered with [a link](https://example.com/{section} \"Title {section}\")\n\
             {next}. and ![an image](img/{section}.png)\n\n",
            start = section + 1,
            next = section + 2,
        ));
    }
    content
}

fn nested_quote(depth: usize) -> String {
    (1..=depth)
        .map(|d| format!("{} level {d} with _emphasis_ and `code`\n", ">".repeat(d)))
        .collect::<String>()
        + "\n"
}

fn nested_list(depth: usize) -> String {
    (0..depth)
        .map(|d| format!("{}- item at depth {d} with **strong** text\n", "  ".repeat(d)))
        .collect::<String>()
        + "\n"
}

/// Delimiter soup that forces the inline parser to open and flatten many
/// frames.
pub fn generate_pathological_inline(repeats: usize) -> String {
    "*a _b [c `d **e ".repeat(repeats)
}
