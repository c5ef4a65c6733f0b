//! Paragraph types.

use serde::{Deserialize, Serialize};

/// Deepest heading level a style can declare.
pub const MAX_HEADING_LEVEL: u8 = 9;

/// A paragraph of text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph text as exposed by the provider
    pub text: String,

    /// Declared paragraph style
    #[serde(default)]
    pub style: ParagraphStyle,
}

impl Paragraph {
    /// Create an empty body paragraph.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            style: ParagraphStyle::Body,
        }
    }

    /// Create a body paragraph with text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: ParagraphStyle::Body,
        }
    }

    /// Create a heading paragraph.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Self {
            text: text.into(),
            style: ParagraphStyle::heading(level),
        }
    }

    /// Check if the paragraph carries no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the style declares a heading.
    pub fn is_heading(&self) -> bool {
        self.style.heading_level().is_some()
    }

    /// Get the declared heading level or None.
    pub fn heading_level(&self) -> Option<u8> {
        self.style.heading_level()
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Paragraph style as far as layout is concerned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "level", rename_all = "lowercase")]
pub enum ParagraphStyle {
    /// Ordinary flowed text
    #[default]
    Body,
    /// Heading of the given level (1-9)
    Heading(u8),
}

impl ParagraphStyle {
    /// Create a heading style, clamping the level into 1..=9.
    pub fn heading(level: u8) -> Self {
        ParagraphStyle::Heading(level.clamp(1, MAX_HEADING_LEVEL))
    }

    /// Derive a style from a word-processor style name such as `"Heading 2"`.
    ///
    /// Any name containing "heading" (case-insensitive) is a heading. The
    /// level is read from the trailing digit and defaults to 1 when the name
    /// does not end in one.
    pub fn from_style_name(name: &str) -> Self {
        let lower = name.trim().to_lowercase();
        if !lower.contains("heading") {
            return ParagraphStyle::Body;
        }

        let level = lower
            .chars()
            .last()
            .and_then(|c| c.to_digit(10))
            .map(|d| d as u8)
            .filter(|&d| d >= 1)
            .unwrap_or(1);
        ParagraphStyle::heading(level)
    }

    /// Get the heading level, if this is a heading style.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            ParagraphStyle::Body => None,
            ParagraphStyle::Heading(level) => Some((*level).clamp(1, MAX_HEADING_LEVEL)),
        }
    }
}
