//! Turns the block tree into attributed text.
//!
//! The output is a single [`StyledText`]: a plain string plus byte-ranged
//! attribute runs. Front ends map the runs onto whatever styling they have
//! (terminal colours in the CLI). Math is never typeset; its LaTeX source is
//! shown in code style and kept on the run for preview.

pub mod block;
pub mod inline;
pub mod styled;
pub mod theme;

pub use block::{render_block, render_blocks};
pub use inline::{render_inline, render_inlines};
pub use styled::{Attributes, FontRole, StyledRun, StyledText};
pub use theme::{ParseColorError, Rgb, Theme, ThemeColors};
