use crate::render::StyledText;

pub const MATH_PREVIEW_TITLE: &str = "Math Equation";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathPreview {
    pub title: &'static str,
    pub latex: String,
}

/// The equation under `offset`, if that byte belongs to a math run.
pub fn math_preview(text: &StyledText, offset: usize) -> Option<MathPreview> {
    let latex = text.run_at(offset)?.attributes.math_latex.clone()?;
    Some(MathPreview {
        title: MATH_PREVIEW_TITLE,
        latex,
    })
}
