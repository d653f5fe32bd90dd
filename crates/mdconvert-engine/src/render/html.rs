use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{
    document::{Block, Inline, ListKind},
    options::RenderOptions,
};

use super::url;

/// Output buffer plus the options that shape it.
///
/// Output is deterministic: LF newlines, one block per line, no indentation.
pub struct HtmlWriter<'o> {
    out: String,
    options: &'o RenderOptions,
}

impl<'o> HtmlWriter<'o> {
    pub fn new(options: &'o RenderOptions) -> Self {
        Self {
            out: String::new(),
            options,
        }
    }

    pub fn finish(self) -> String {
        self.out
    }

    /// Renders a block sequence, rebuilding lists from flat items.
    ///
    /// `lists` holds the open list levels; each has an open `<li>`.
    pub fn blocks(&mut self, blocks: &[Block]) {
        let mut lists: Vec<ListKind> = Vec::new();
        for block in blocks {
            self.block(&mut lists, block);
        }
        self.close_lists(&mut lists, 0);
    }

    fn block(&mut self, lists: &mut Vec<ListKind>, block: &Block) {
        if !matches!(block, Block::ListItem { .. }) {
            self.close_lists(lists, 0);
        }
        match block {
            Block::ListItem {
                list,
                depth,
                content,
            } => {
                self.list_item(lists, *list, *depth);
                self.inlines(content);
            }
            Block::Paragraph { content } => {
                self.out.push_str("<p>");
                self.inlines(content);
                self.out.push_str("</p>\n");
            }
            Block::Heading { level, content } => {
                self.out.push_str(&format!("<h{level}>"));
                self.inlines(content);
                self.out.push_str(&format!("</h{level}>\n"));
            }
            Block::CodeBlock { lang, raw } => {
                self.out.push_str("<pre><code");
                if let Some(lang) = lang {
                    let class = format!("{}{lang}", self.options.language_class_prefix);
                    self.out.push_str(" class=\"");
                    self.out.push_str(&encode_double_quoted_attribute(&class));
                    self.out.push('"');
                }
                self.out.push('>');
                self.out.push_str(&encode_text(raw));
                self.out.push_str("</code></pre>\n");
            }
            Block::BlockQuote { blocks } => {
                self.out.push_str("<blockquote>\n");
                self.blocks(blocks);
                self.out.push_str("</blockquote>\n");
            }
            Block::ThematicBreak => self.out.push_str("<hr />\n"),
        }
    }

    /// Opens an `<li>` for an item at `depth`, closing or opening list
    /// levels as needed.
    fn list_item(&mut self, lists: &mut Vec<ListKind>, list: ListKind, depth: usize) {
        self.close_lists(lists, depth + 1);

        if lists.len() == depth + 1 {
            if lists.last().is_some_and(|open| open.continues(list)) {
                self.out.push_str("</li>\n");
            } else {
                self.close_lists(lists, depth);
                self.open_list(lists, list);
            }
        }
        // Missing intermediate levels get empty items.
        while lists.len() < depth + 1 {
            self.open_list(lists, list);
            if lists.len() < depth + 1 {
                self.out.push_str("<li>");
            }
        }
        self.out.push_str("<li>");
    }

    fn open_list(&mut self, lists: &mut Vec<ListKind>, list: ListKind) {
        if !lists.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
        match list {
            ListKind::Unordered { .. } => self.out.push_str("<ul>\n"),
            ListKind::Ordered { start: 1, .. } => self.out.push_str("<ol>\n"),
            ListKind::Ordered { start, .. } => {
                self.out.push_str(&format!("<ol start=\"{start}\">\n"))
            }
        }
        lists.push(list);
    }

    /// Closes list levels until only `keep` remain.
    fn close_lists(&mut self, lists: &mut Vec<ListKind>, keep: usize) {
        while lists.len() > keep {
            let Some(list) = lists.pop() else {
                return;
            };
            self.out.push_str("</li>\n");
            self.out.push_str(match list {
                ListKind::Unordered { .. } => "</ul>\n",
                ListKind::Ordered { .. } => "</ol>\n",
            });
        }
    }

    fn inlines(&mut self, nodes: &[Inline]) {
        for node in nodes {
            self.inline(node);
        }
    }

    fn inline(&mut self, node: &Inline) {
        match node {
            Inline::Text(text) => self.out.push_str(&encode_text(text)),
            Inline::Emphasis(children) => {
                self.out.push_str("<em>");
                self.inlines(children);
                self.out.push_str("</em>");
            }
            Inline::Strong(children) => {
                self.out.push_str("<strong>");
                self.inlines(children);
                self.out.push_str("</strong>");
            }
            Inline::CodeSpan(code) => {
                self.out.push_str("<code>");
                self.out.push_str(&encode_text(code));
                self.out.push_str("</code>");
            }
            Inline::Link {
                href,
                title,
                children,
            } => {
                self.out.push_str("<a href=\"");
                self.url_attr(href, false);
                self.out.push('"');
                self.title_attr(title.as_deref());
                self.out.push('>');
                self.inlines(children);
                self.out.push_str("</a>");
            }
            Inline::Image { src, alt, title } => {
                self.out.push_str("<img src=\"");
                self.url_attr(src, true);
                self.out.push_str("\" alt=\"");
                self.out.push_str(&encode_double_quoted_attribute(alt));
                self.out.push('"');
                self.title_attr(title.as_deref());
                self.out.push_str(" />");
            }
            Inline::LineBreak => self.out.push_str("<br />\n"),
        }
    }

    fn url_attr(&mut self, url: &str, image: bool) {
        if self.options.sanitize_urls && !url::is_safe(url, image) {
            log::debug!("dropped unsafe url {url:?}");
            return;
        }
        let encoded = url::percent_encode(url);
        self.out
            .push_str(&encode_double_quoted_attribute(encoded.as_ref()));
    }

    fn title_attr(&mut self, title: Option<&str>) {
        if let Some(title) = title {
            self.out.push_str(" title=\"");
            self.out.push_str(&encode_double_quoted_attribute(title));
            self.out.push('"');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::render::render_html;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Vec<Inline> {
        vec![Inline::Text(s.to_string())]
    }

    fn bullet(depth: usize, s: &str) -> Block {
        Block::ListItem {
            list: ListKind::Unordered { bullet: '-' },
            depth,
            content: text(s),
        }
    }

    fn render(blocks: Vec<Block>) -> String {
        render_html(&Document { blocks }, &RenderOptions::default())
    }

    #[test]
    fn flat_items_become_nested_lists() {
        let html = render(vec![
            bullet(0, "one"),
            bullet(1, "nested"),
            bullet(2, "deeper"),
            bullet(0, "two"),
        ]);
        assert_eq!(
            html,
            "<ul>\n<li>one\n<ul>\n<li>nested\n<ul>\n<li>deeper</li>\n</ul>\n</li>\n</ul>\n</li>\n<li>two</li>\n</ul>\n"
        );
    }

    #[test]
    fn marker_change_starts_a_new_list() {
        let html = render(vec![
            bullet(0, "a"),
            Block::ListItem {
                list: ListKind::Ordered {
                    start: 3,
                    delimiter: '.',
                },
                depth: 0,
                content: text("b"),
            },
        ]);
        assert_eq!(
            html,
            "<ul>\n<li>a</li>\n</ul>\n<ol start=\"3\">\n<li>b</li>\n</ol>\n"
        );
    }

    #[test]
    fn list_closes_before_other_blocks() {
        let html = render(vec![bullet(0, "a"), Block::ThematicBreak]);
        assert_eq!(html, "<ul>\n<li>a</li>\n</ul>\n<hr />\n");
    }

    #[test]
    fn depth_gap_gets_empty_items() {
        let html = render(vec![bullet(1, "x")]);
        assert_eq!(html, "<ul>\n<li>\n<ul>\n<li>x</li>\n</ul>\n</li>\n</ul>\n");
    }

    #[test]
    fn code_block_escapes_and_labels() {
        let html = render(vec![Block::CodeBlock {
            lang: Some("rust".to_string()),
            raw: "a < b && c\n".to_string(),
        }]);
        assert_eq!(
            html,
            "<pre><code class=\"language-rust\">a &lt; b &amp;&amp; c\n</code></pre>\n"
        );
    }

    #[test]
    fn custom_language_prefix() {
        let options = RenderOptions {
            language_class_prefix: "lang-".to_string(),
            ..RenderOptions::default()
        };
        let doc = Document {
            blocks: vec![Block::CodeBlock {
                lang: Some("py".to_string()),
                raw: String::new(),
            }],
        };
        assert_eq!(
            render_html(&doc, &options),
            "<pre><code class=\"lang-py\"></code></pre>\n"
        );
    }

    #[test]
    fn quotes_wrap_their_blocks() {
        let html = render(vec![Block::BlockQuote {
            blocks: vec![Block::Paragraph { content: text("q") }, bullet(0, "i")],
        }]);
        assert_eq!(
            html,
            "<blockquote>\n<p>q</p>\n<ul>\n<li>i</li>\n</ul>\n</blockquote>\n"
        );
    }

    #[test]
    fn inline_markup() {
        let html = render(vec![Block::Paragraph {
            content: vec![
                Inline::Strong(vec![Inline::Emphasis(text("x"))]),
                Inline::LineBreak,
                Inline::Link {
                    href: "/a b".to_string(),
                    title: Some("T".to_string()),
                    children: vec![Inline::CodeSpan("<c>".to_string())],
                },
                Inline::Image {
                    src: "i.png".to_string(),
                    alt: "alt".to_string(),
                    title: None,
                },
            ],
        }]);
        assert_eq!(
            html,
            "<p><strong><em>x</em></strong><br />\n<a href=\"/a%20b\" title=\"T\"><code>&lt;c&gt;</code></a><img src=\"i.png\" alt=\"alt\" /></p>\n"
        );
    }

    #[test]
    fn unsafe_urls_are_blanked_unless_disabled() {
        let doc = Document {
            blocks: vec![Block::Paragraph {
                content: vec![Inline::Link {
                    href: "javascript:alert(1)".to_string(),
                    title: None,
                    children: text("x"),
                }],
            }],
        };
        assert_eq!(
            render_html(&doc, &RenderOptions::default()),
            "<p><a href=\"\">x</a></p>\n"
        );
        let raw = RenderOptions {
            sanitize_urls: false,
            ..RenderOptions::default()
        };
        assert_eq!(
            render_html(&doc, &raw),
            "<p><a href=\"javascript:alert(1)\">x</a></p>\n"
        );
    }
}
