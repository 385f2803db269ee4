/// Styled-run output types: a flat string plus offset-tagged style spans
use serde::{Deserialize, Serialize};
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleKind {
    Bold,
    Italic,
    /// Hyperlink with its destination URL, as written in the source.
    Link(String),
}

/// A contiguous styled range over [`StyledText::text`]. `start` and
/// `length` are byte offsets; both always fall on char boundaries since
/// spans are recorded around whole appended strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSpan {
    pub start: usize,
    pub length: usize,
    pub kind: StyleKind,
}

impl StyleSpan {
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.length
    }
}

/// Plain text paired with the style spans to lay over it, ordered by
/// ascending `start`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledText {
    pub text: String,
    pub spans: Vec<StyleSpan>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
