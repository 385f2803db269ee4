/// Inline markdown to styled runs for native UI label strings
pub mod ast;
pub mod parser;
pub mod renderer;
pub mod styled;

use parser::Parser;
use renderer::StyledRenderer;
use styled::StyledText;

/// Parse an inline markdown string and flatten it into a styled run.
///
/// Total over all inputs: malformed markup degrades to literal text and
/// is never an error.
pub fn markdown_to_styled(markdown: &str) -> StyledText {
    let parser = Parser::new();
    let ast = parser.parse(markdown);
    let renderer = StyledRenderer::new();
    renderer.render(&ast)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styled::{StyleKind, StyleSpan};

    #[test]
    fn test_empty_input() {
        let result = markdown_to_styled("");
        assert_eq!(result.text, "");
        assert!(result.spans.is_empty());
    }

    #[test]
    fn test_bold_offsets() {
        let result = markdown_to_styled("Hello **world**!");
        assert_eq!(result.text, "Hello world!");
        assert_eq!(
            result.spans,
            vec![StyleSpan {
                start: 6,
                length: 5,
                kind: StyleKind::Bold,
            }]
        );
    }

    #[test]
    fn test_link() {
        let result = markdown_to_styled("See [docs](https://example.com) now");
        assert_eq!(result.text, "See docs now");
        assert_eq!(
            result.spans,
            vec![StyleSpan {
                start: 4,
                length: 4,
                kind: StyleKind::Link("https://example.com".to_string()),
            }]
        );
    }
}
