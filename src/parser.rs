/// Inline markdown parser
use crate::ast::Node;
use url::Url;

pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Parser
    }

    /// Parse an inline markdown fragment into a document.
    ///
    /// Total over all inputs: anything that is not well-formed markup is
    /// kept as literal text.
    pub fn parse(&self, input: &str) -> Node {
        let chars: Vec<char> = input.chars().collect();
        Node::Document(self.parse_inline(&chars, 0, chars.len()))
    }

    /// Scan `chars[start..end]` left to right. Constructs are matched
    /// greedily: the first valid closing delimiter wins and scanning
    /// resumes after it, so spans never overlap.
    fn parse_inline(&self, chars: &[char], start: usize, end: usize) -> Vec<Node> {
        let mut nodes = Vec::new();
        let mut text = String::new();
        let mut i = start;

        while i < end {
            // Backslash escape: ASCII punctuation loses its delimiter
            // meaning, anything else keeps the backslash literal
            if chars[i] == '\\' && i + 1 < end {
                if chars[i + 1].is_ascii_punctuation() {
                    text.push(chars[i + 1]);
                    i += 2;
                } else {
                    text.push('\\');
                    i += 1;
                }
                continue;
            }

            if chars[i] == '['
                && let Some((link_node, new_i)) = self.try_parse_link(chars, i, end)
            {
                flush_text(&mut text, &mut nodes);
                nodes.push(link_node);
                i = new_i;
                continue;
            }

            if (chars[i] == '*' || chars[i] == '_')
                && let Some((emphasis_node, new_i)) = self.try_parse_emphasis(chars, i, end)
            {
                flush_text(&mut text, &mut nodes);
                nodes.push(emphasis_node);
                i = new_i;
                continue;
            }

            text.push(chars[i]);
            i += 1;
        }

        flush_text(&mut text, &mut nodes);
        nodes
    }

    /// Emphasis and strong emphasis. A run of two or more delimiters opens
    /// strong emphasis, a single delimiter opens emphasis. Returns `None`
    /// when no closing delimiter exists; the caller then emits one literal
    /// delimiter character and rescans, so `**foo*` degrades to a literal
    /// `*` followed by emphasized `foo`.
    fn try_parse_emphasis(
        &self,
        chars: &[char],
        start: usize,
        end: usize,
    ) -> Option<(Node, usize)> {
        let delimiter = chars[start];

        // Underscores only open at a word boundary, so snake_case text
        // passes through untouched
        if delimiter == '_' && start > 0 {
            let before = chars[start - 1];
            if !before.is_whitespace() && !before.is_ascii_punctuation() {
                return None;
            }
        }

        let mut run = 0;
        while start + run < end && chars[start + run] == delimiter {
            run += 1;
        }

        if run >= 2
            && let Some(close) = self.find_closing_run(chars, start + 2, end, delimiter, 2)
        {
            let children = self.parse_inline(chars, start + 2, close);
            return Some((Node::Strong(children), close + 2));
        }

        if run == 1
            && let Some(close) = self.find_closing_run(chars, start + 1, end, delimiter, 1)
        {
            let children = self.parse_inline(chars, start + 1, close);
            return Some((Node::Emphasis(children), close + 1));
        }

        None
    }

    /// First position of `width` consecutive `delimiter` characters in
    /// `chars[from..end]`, skipping backslash-escaped characters.
    fn find_closing_run(
        &self,
        chars: &[char],
        from: usize,
        end: usize,
        delimiter: char,
        width: usize,
    ) -> Option<usize> {
        let mut i = from;
        while i + width <= end {
            if chars[i] == '\\' && i + 1 < end {
                i += 2;
                continue;
            }
            if chars[i..i + width].iter().all(|&c| c == delimiter) {
                return Some(i);
            }
            i += 1;
        }
        None
    }

    /// Inline link: `[text](target)`. The target runs to the
    /// paren-balanced `)` and holds a destination plus an optional quoted
    /// title. A destination that does not parse as a URL is dropped while
    /// the display text is kept, so the node degrades to plain text.
    fn try_parse_link(&self, chars: &[char], start: usize, end: usize) -> Option<(Node, usize)> {
        // Find the closing ']' for the link text
        let mut i = start + 1;
        let text_start = i;
        let mut bracket_depth = 1;
        while i < end {
            if chars[i] == '\\' && i + 1 < end {
                i += 1; // Skip escaped character
            } else if chars[i] == '[' {
                bracket_depth += 1;
            } else if chars[i] == ']' {
                bracket_depth -= 1;
                if bracket_depth == 0 {
                    break;
                }
            }
            i += 1;
        }
        if i >= end || chars[i] != ']' {
            return None; // No closing bracket
        }
        let text_end = i;
        i += 1; // Move past ']'

        if i >= end || chars[i] != '(' {
            return None; // Bare bracketed text, not a link
        }
        i += 1; // Move past '('

        // Capture the raw target up to the balanced ')'
        let target_start = i;
        let mut paren_depth = 0;
        while i < end {
            if chars[i] == '\\' && i + 1 < end {
                i += 1; // Skip escaped character
            } else if chars[i] == '(' {
                paren_depth += 1;
            } else if chars[i] == ')' {
                if paren_depth == 0 {
                    break;
                }
                paren_depth -= 1;
            }
            i += 1;
        }
        if i >= end || chars[i] != ')' {
            return None; // Unclosed target
        }

        let target: String = chars[target_start..i].iter().collect();
        let (destination, title) = self.split_link_target(&target);
        let destination = self.unescape(&destination);
        let children = self.parse_inline(chars, text_start, text_end);

        Some((
            Node::Link {
                destination: self.validate_destination(&destination),
                title: title.map(|t| self.unescape(&t)),
                children,
            },
            i + 1,
        ))
    }

    /// Split a raw link target into destination and optional title.
    ///
    /// The destination is either a `<...>` angle form or the run up to the
    /// first whitespace; the remainder must be a single quoted title.
    /// A remainder that is not a quoted title means the whole target is
    /// the destination candidate, so `[bad](not a url)` reaches URL
    /// validation instead of being rejected structurally.
    fn split_link_target(&self, target: &str) -> (String, Option<String>) {
        let trimmed = target.trim();

        if let Some(rest) = trimmed.strip_prefix('<')
            && let Some(close) = rest.find('>')
        {
            let destination = rest[..close].to_string();
            let title = self.parse_title(rest[close + 1..].trim_start());
            return (destination, title);
        }

        match trimmed.find(char::is_whitespace) {
            Some(split) => {
                let rest = trimmed[split..].trim_start();
                match self.parse_title(rest) {
                    Some(title) => (trimmed[..split].to_string(), Some(title)),
                    None => (trimmed.to_string(), None),
                }
            }
            None => (trimmed.to_string(), None),
        }
    }

    /// A link title spanning the whole remainder: `"..."`, `'...'` or
    /// `(...)`.
    fn parse_title(&self, rest: &str) -> Option<String> {
        let open = rest.chars().next()?;
        let close = match open {
            '"' => '"',
            '\'' => '\'',
            '(' => ')',
            _ => return None,
        };
        let inner = &rest[open.len_utf8()..];
        let inner_end = inner.find(close)?;
        // The quote must close at the end of the target
        if !inner[inner_end + close.len_utf8()..].is_empty() {
            return None;
        }
        Some(inner[..inner_end].to_string())
    }

    /// Remove backslash escapes from a link destination or title.
    fn unescape(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut i = 0;
        while i < chars.len() {
            if chars[i] == '\\' && i + 1 < chars.len() && chars[i + 1].is_ascii_punctuation() {
                out.push(chars[i + 1]);
                i += 2;
            } else {
                out.push(chars[i]);
                i += 1;
            }
        }
        out
    }

    /// Keep the destination as written when it parses as a URL; malformed
    /// destinations degrade the link to its display text.
    fn validate_destination(&self, destination: &str) -> Option<String> {
        Url::parse(destination).ok().map(|_| destination.to_string())
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

fn flush_text(text: &mut String, nodes: &mut Vec<Node>) {
    if !text.is_empty() {
        nodes.push(Node::Text(std::mem::take(text)));
    }
}
