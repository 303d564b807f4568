use std::ops::Range;

use super::theme::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Body,
    Bold,
    CodeInline,
    CodeBlock,
    /// Heading font for levels 1 to 6.
    Heading(u8),
}

/// Paint attributes for one run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attributes {
    pub font: FontRole,
    pub foreground: Rgb,
    pub background: Option<Rgb>,
    /// Underline colour, when underlined.
    pub underline: Option<Rgb>,
    pub strikethrough: bool,
    pub link: Option<String>,
    /// LaTeX source for math runs, kept for copy and preview.
    pub math_latex: Option<String>,
}

impl Attributes {
    pub fn new(font: FontRole, foreground: Rgb) -> Self {
        Self {
            font,
            foreground,
            background: None,
            underline: None,
            strikethrough: false,
            link: None,
            math_latex: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    /// Byte range into [`StyledText::text`].
    pub range: Range<usize>,
    pub attributes: Attributes,
}

/// A string plus non-overlapping attribute runs covering all of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    text: String,
    runs: Vec<StyledRun>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: &str, attributes: Attributes) -> Self {
        let mut styled = Self::new();
        styled.push_str(text, attributes);
        styled
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Appends `text`, extending the last run when the attributes match.
    pub fn push_str(&mut self, text: &str, attributes: Attributes) {
        if text.is_empty() {
            return;
        }
        let start = self.text.len();
        self.text.push_str(text);
        let end = self.text.len();

        match self.runs.last_mut() {
            Some(last) if last.range.end == start && last.attributes == attributes => {
                last.range.end = end;
            }
            _ => self.runs.push(StyledRun {
                range: start..end,
                attributes,
            }),
        }
    }

    pub fn append(&mut self, other: StyledText) {
        let offset = self.text.len();
        self.text.push_str(&other.text);

        let mut runs = other.runs.into_iter();
        if let Some(first) = runs.next() {
            let shifted = first.range.start + offset..first.range.end + offset;
            match self.runs.last_mut() {
                Some(last) if last.range.end == shifted.start && last.attributes == first.attributes => {
                    last.range.end = shifted.end;
                }
                _ => self.runs.push(StyledRun {
                    range: shifted,
                    attributes: first.attributes,
                }),
            }
        }
        self.runs.extend(runs.map(|run| StyledRun {
            range: run.range.start + offset..run.range.end + offset,
            attributes: run.attributes,
        }));
    }

    /// Updates the attributes of every run, the way a wrapper such as emphasis
    /// styles everything it contains.
    pub fn apply(&mut self, mut update: impl FnMut(&mut Attributes)) {
        for run in &mut self.runs {
            update(&mut run.attributes);
        }
    }

    /// The run covering byte `offset`, if any.
    pub fn run_at(&self, offset: usize) -> Option<&StyledRun> {
        self.runs
            .iter()
            .find(|run| run.range.start <= offset && offset < run.range.end)
    }

    /// Runs that overlap `range`.
    pub fn runs_in(&self, range: Range<usize>) -> impl Iterator<Item = &StyledRun> {
        self.runs
            .iter()
            .filter(move |run| run.range.start < range.end && range.start < run.range.end)
    }

    /// Copies `range` out with its runs clipped. The range must fall on char
    /// boundaries.
    pub fn slice(&self, range: Range<usize>) -> StyledText {
        let mut out = StyledText::new();
        for run in self.runs_in(range.clone()) {
            let start = run.range.start.max(range.start);
            let end = run.range.end.min(range.end);
            out.push_str(&self.text[start..end], run.attributes.clone());
        }
        out
    }
}
