/// Styled-run renderer for the inline markdown AST
use crate::ast::Node;
use crate::styled::{StyleKind, StyleSpan, StyledText};

pub struct StyledRenderer;

impl StyledRenderer {
    pub fn new() -> Self {
        StyledRenderer
    }

    /// Walk the document depth first, appending leaf text to one growing
    /// buffer and recording a byte-offset span for each styled node.
    pub fn render(&self, node: &Node) -> StyledText {
        let mut out = StyledText::new();
        render_node(node, &mut out);
        out
    }
}

impl Default for StyledRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn render_node(node: &Node, out: &mut StyledText) {
    match node {
        Node::Document(children) => {
            for child in children {
                render_node(child, out);
            }
        }
        Node::Text(content) => out.text.push_str(content),
        Node::Emphasis(children) => append_styled(children, StyleKind::Italic, out),
        Node::Strong(children) => append_styled(children, StyleKind::Bold, out),
        Node::Link {
            destination,
            children,
            ..
        } => match destination {
            Some(url) => append_styled(children, StyleKind::Link(url.clone()), out),
            // No valid destination: the display text stays plain
            None => append_plain(children, out),
        },
    }
}

/// Append the flattened plain text of `children` and span it with `kind`.
/// The span start is the buffer length before the append, its length the
/// number of bytes appended. Empty content records no span.
fn append_styled(children: &[Node], kind: StyleKind, out: &mut StyledText) {
    let start = out.text.len();
    append_plain(children, out);
    let length = out.text.len() - start;
    if length > 0 {
        out.spans.push(StyleSpan {
            start,
            length,
            kind,
        });
    }
}

fn append_plain(children: &[Node], out: &mut StyledText) {
    for child in children {
        child.collect_plain_text(&mut out.text);
    }
}
