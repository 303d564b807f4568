use crate::models::InlineNode;

use super::{
    styled::{FontRole, StyledText},
    theme::Theme,
};

pub fn render_inlines(nodes: &[InlineNode], theme: &Theme) -> StyledText {
    let mut out = StyledText::new();
    for node in nodes {
        out.append(render_inline(node, theme));
    }
    out
}

pub fn render_inline(node: &InlineNode, theme: &Theme) -> StyledText {
    match node {
        InlineNode::Text(text) => StyledText::plain(text, theme.body()),
        InlineNode::SoftBreak => StyledText::plain(" ", theme.body()),
        InlineNode::LineBreak => StyledText::plain("\n", theme.body()),
        InlineNode::Code(code) | InlineNode::Html(code) => {
            StyledText::plain(code, theme.inline_code())
        }
        InlineNode::Emphasis(children) => {
            let mut out = render_inlines(children, theme);
            out.apply(|attrs| attrs.underline = Some(theme.colors.emphasis));
            out
        }
        InlineNode::Strong(children) => {
            let mut out = render_inlines(children, theme);
            out.apply(|attrs| attrs.font = FontRole::Bold);
            out
        }
        InlineNode::Strikethrough(children) => {
            let mut out = render_inlines(children, theme);
            out.apply(|attrs| attrs.strikethrough = true);
            out
        }
        InlineNode::Link {
            destination,
            children,
        } => {
            let mut out = render_inlines(children, theme);
            out.apply(|attrs| {
                attrs.link = Some(destination.clone());
                attrs.foreground = theme.colors.highlight;
            });
            out
        }
        InlineNode::Image { source, .. } => {
            let mut attrs = theme.body();
            attrs.link = Some(source.clone());
            StyledText::plain(source, attrs)
        }
        // No typesetting here: the source is shown as code and kept for preview.
        InlineNode::Math(latex) => {
            let mut attrs = theme.inline_code();
            attrs.math_latex = Some(latex.clone());
            StyledText::plain(latex, attrs)
        }
        InlineNode::Footnote {
            destination,
            children,
        } => {
            let mut out = render_inlines(children, theme);
            out.apply(|attrs| {
                attrs.link = Some(destination.clone());
                attrs.foreground = theme.colors.footnote;
                attrs.background = Some(theme.colors.footnote_background);
            });
            out
        }
    }
}
