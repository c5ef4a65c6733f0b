//! Heading and paragraph formatting.

use super::anchor::{anchor_heading, is_pseudo_heading};
use super::options::LayoutOptions;
use crate::layout::wrap_paragraph;
use crate::model::{Paragraph, MAX_HEADING_LEVEL};

/// Level given to outline-numbered paragraphs with a command tag.
pub const PSEUDO_HEADING_LEVEL: u8 = 3;

/// How a paragraph was rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormattedKind {
    /// Declared heading style
    Heading,
    /// Body paragraph promoted to a heading by its outline number and tag
    PseudoHeading,
    /// Wrapped body text
    Text,
    /// Empty paragraph or empty heading
    Blank,
}

impl FormattedKind {
    /// Check if the paragraph was rendered as a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, FormattedKind::Heading | FormattedKind::PseudoHeading)
    }
}

/// Rendered paragraph output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedBlock {
    /// Output text, including trailing newlines
    pub content: String,
    /// How the paragraph was rendered
    pub kind: FormattedKind,
}

/// Formats paragraphs and headings according to layout options.
#[derive(Debug, Clone, Copy)]
pub struct BlockFormatter<'a> {
    options: &'a LayoutOptions,
}

impl<'a> BlockFormatter<'a> {
    /// Create a formatter borrowing the options.
    pub fn new(options: &'a LayoutOptions) -> Self {
        Self { options }
    }

    /// Render a heading: anchor line, level marker and normalized text.
    ///
    /// Heading text that is empty after trimming renders nothing.
    pub fn heading(&self, text: &str, level: u8) -> String {
        let Some(heading) = anchor_heading(text) else {
            return String::new();
        };

        let level = level.clamp(1, MAX_HEADING_LEVEL) as usize;
        let marker: String = std::iter::repeat(self.options.heading_prefix)
            .take(level)
            .collect();

        format!("{}\n{} {}\n\n", heading.anchor.marker(), marker, heading.text)
    }

    /// Wrap body text at the configured width and indent.
    pub fn body(&self, text: &str) -> String {
        let lines = wrap_paragraph(text.trim(), self.options.text_width, &self.options.text_indent);
        let mut content = lines.join("\n");
        content.push_str("\n\n");
        content
    }

    /// Render a paragraph block.
    pub fn paragraph(&self, paragraph: &Paragraph) -> FormattedBlock {
        if let Some(level) = paragraph.heading_level() {
            let content = self.heading(&paragraph.text, level);
            let kind = if content.is_empty() {
                FormattedKind::Blank
            } else {
                FormattedKind::Heading
            };
            return FormattedBlock { content, kind };
        }

        let text = paragraph.text.trim();
        if text.is_empty() {
            return FormattedBlock {
                content: "\n".to_string(),
                kind: FormattedKind::Blank,
            };
        }

        if is_pseudo_heading(text) {
            return FormattedBlock {
                content: self.heading(text, PSEUDO_HEADING_LEVEL),
                kind: FormattedKind::PseudoHeading,
            };
        }

        FormattedBlock {
            content: self.body(text),
            kind: FormattedKind::Text,
        }
    }
}
