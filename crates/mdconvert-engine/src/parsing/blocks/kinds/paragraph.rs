/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default leaf block when no
/// other block opener matches. Inline parsing is applied to their content.
pub struct Paragraph;

impl Paragraph {
    /// Joins the collected lines into the text handed to the inline parser.
    ///
    /// Leading whitespace of every line is dropped; trailing whitespace is kept
    /// on inner lines (two trailing spaces mean a hard break) and dropped on
    /// the last one.
    pub fn join_lines(lines: &[&str]) -> String {
        let mut out = String::new();
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(line.trim_start());
        }
        let trimmed_len = out.trim_end().len();
        out.truncate(trimmed_len);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_newlines() {
        assert_eq!(Paragraph::join_lines(&["a", "  b", "c  "]), "a\nb\nc");
    }

    #[test]
    fn keeps_inner_trailing_spaces() {
        assert_eq!(Paragraph::join_lines(&["a  ", "b"]), "a  \nb");
    }

    #[test]
    fn empty() {
        assert_eq!(Paragraph::join_lines(&[]), "");
    }
}
