pub mod inspect;
pub mod models;
pub mod normalize;
pub mod parsing;
pub mod render;
pub mod selection;

// Re-export key types for easier usage
pub use models::{BlockNode, InlineNode, ListItem, TaskListItem};
pub use normalize::normalize;
pub use parsing::parse_markdown;
pub use render::{Attributes, FontRole, Rgb, StyledText, Theme, render_blocks, render_inlines};
pub use selection::{MathPreview, MenuItem, Selection, math_preview};

/// Parses, normalizes and renders a markdown document in one go.
pub fn render_markdown(text: &str, theme: &Theme) -> StyledText {
    let parsed = parse_markdown(text);
    let parsed_len = parsed.len();
    let blocks = normalize(parsed);
    log::debug!(
        "rendering {} top-level blocks ({parsed_len} before normalization)",
        blocks.len()
    );
    render_blocks(&blocks, theme)
}
