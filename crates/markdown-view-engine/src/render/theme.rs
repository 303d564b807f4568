use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::styled::{Attributes, FontRole};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("colour must look like #rrggbb, got {0:?}")]
    InvalidFormat(String),
}

/// An opaque RGB colour, written as `#rrggbb` in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseColorError::InvalidFormat(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Colours used when painting styled text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub body: Rgb,
    pub heading: Rgb,
    pub emphasis: Rgb,
    /// Link text.
    pub highlight: Rgb,
    pub code: Rgb,
    pub code_background: Rgb,
    pub quote: Rgb,
    pub footnote: Rgb,
    pub footnote_background: Rgb,
    /// Thematic breaks, table separators and list markers.
    pub rule: Rgb,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            body: Rgb(0xdc, 0xdc, 0xd7),
            heading: Rgb(0xff, 0xd7, 0x64),
            emphasis: Rgb(0xe0, 0x9c, 0x5a),
            highlight: Rgb(0x5a, 0xa9, 0xe6),
            code: Rgb(0xb4, 0xb4, 0xb4),
            code_background: Rgb(0x2d, 0x2d, 0x2d),
            quote: Rgb(0x9a, 0x9a, 0x9a),
            footnote: Rgb(0x1e, 0x1e, 0x1e),
            footnote_background: Rgb(0x8a, 0xb4, 0xf8),
            rule: Rgb(0x64, 0x64, 0x64),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub colors: ThemeColors,
}

impl Theme {
    pub fn body(&self) -> Attributes {
        Attributes::new(FontRole::Body, self.colors.body)
    }

    pub fn inline_code(&self) -> Attributes {
        Attributes {
            background: Some(self.colors.code_background),
            ..Attributes::new(FontRole::CodeInline, self.colors.code)
        }
    }

    pub fn code_block(&self) -> Attributes {
        Attributes {
            background: Some(self.colors.code_background),
            ..Attributes::new(FontRole::CodeBlock, self.colors.code)
        }
    }

    pub fn rule(&self) -> Attributes {
        Attributes::new(FontRole::Body, self.colors.rule)
    }
}
