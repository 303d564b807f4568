use serde::{Deserialize, Serialize};

/// Content within a paragraph, heading or table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineNode {
    Text(String),
    /// A source line break inside a paragraph; rendered as a space.
    SoftBreak,
    /// A hard line break (trailing backslash or two spaces).
    LineBreak,
    Code(String),
    Html(String),
    Emphasis(Vec<InlineNode>),
    Strong(Vec<InlineNode>),
    Strikethrough(Vec<InlineNode>),
    Link {
        destination: String,
        children: Vec<InlineNode>,
    },
    Image {
        source: String,
        /// Alternative text.
        children: Vec<InlineNode>,
    },
    /// LaTeX source of an inline or display math expression.
    Math(String),
    Footnote {
        destination: String,
        children: Vec<InlineNode>,
    },
}

impl InlineNode {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Concatenated plain text of this node and its descendants.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_plain_text(&mut out);
        out
    }

    fn collect_plain_text(&self, out: &mut String) {
        match self {
            Self::Text(s) | Self::Code(s) | Self::Html(s) | Self::Math(s) => out.push_str(s),
            Self::SoftBreak => out.push(' '),
            Self::LineBreak => out.push('\n'),
            Self::Emphasis(children)
            | Self::Strong(children)
            | Self::Strikethrough(children)
            | Self::Link { children, .. }
            | Self::Image { children, .. }
            | Self::Footnote { children, .. } => {
                for child in children {
                    child.collect_plain_text(out);
                }
            }
        }
    }
}

/// Plain text of an inline sequence.
pub fn plain_text(nodes: &[InlineNode]) -> String {
    nodes.iter().map(InlineNode::plain_text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_flattens_nested_wrappers() {
        let nodes = vec![
            InlineNode::text("a "),
            InlineNode::Strong(vec![InlineNode::Emphasis(vec![InlineNode::text("b")])]),
            InlineNode::SoftBreak,
            InlineNode::Link {
                destination: "https://example.com".into(),
                children: vec![InlineNode::Code("c".into())],
            },
        ];

        assert_eq!(plain_text(&nodes), "a b c");
    }

    #[test]
    fn plain_text_of_math_is_its_source() {
        assert_eq!(InlineNode::Math("x^2".into()).plain_text(), "x^2");
    }
}
