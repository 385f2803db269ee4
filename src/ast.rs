/// AST node types for inline markdown fragments
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Document(Vec<Node>),
    // Inline nodes
    Text(String),
    Emphasis(Vec<Node>), // italic span
    Strong(Vec<Node>),   // bold span
    Link {
        /// `None` when the written destination is not a well-formed URL;
        /// the display text is still kept.
        destination: Option<String>,
        title: Option<String>,
        children: Vec<Node>,
    },
}

impl Node {
    /// The flattened literal text of this subtree, in document order.
    /// Markup inside emphasis/strong/link contributes only its text.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_plain_text(&mut out);
        out
    }

    pub(crate) fn collect_plain_text(&self, out: &mut String) {
        match self {
            Node::Text(content) => out.push_str(content),
            Node::Document(children)
            | Node::Emphasis(children)
            | Node::Strong(children)
            | Node::Link { children, .. } => {
                for child in children {
                    child.collect_plain_text(out);
                }
            }
        }
    }
}
