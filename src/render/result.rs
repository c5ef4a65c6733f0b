//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered text
    pub content: String,

    /// Layout statistics
    pub stats: LayoutStats,

    /// Why rendering stopped early, if the provider failed mid-document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partial: Option<String>,
}

impl RenderResult {
    /// Create a complete render result.
    pub fn new(content: String, stats: LayoutStats) -> Self {
        Self {
            content,
            stats,
            partial: None,
        }
    }

    /// Create a result holding the output rendered before a failure.
    pub fn partial(content: String, stats: LayoutStats, reason: impl Into<String>) -> Self {
        Self {
            content,
            stats,
            partial: Some(reason.into()),
        }
    }

    /// Check if rendering stopped before the end of the document.
    pub fn is_partial(&self) -> bool {
        self.partial.is_some()
    }
}

/// Statistics collected while laying out a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Blocks consumed from the provider
    pub block_count: u32,

    /// Paragraph blocks, headings included
    pub paragraph_count: u32,

    /// Paragraphs rendered as headings (declared or outline-numbered)
    pub heading_count: u32,

    /// Table blocks
    pub table_count: u32,

    /// Tables replaced by the failure placeholder
    pub failed_table_count: u32,

    /// Tables carrying merge metadata
    pub merged_table_count: u32,

    /// Output lines
    pub line_count: u32,
}

impl LayoutStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.block_count += 1;
        self.paragraph_count += 1;
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment table count.
    pub fn add_table(&mut self) {
        self.block_count += 1;
        self.table_count += 1;
    }

    /// Increment failed table count.
    pub fn add_failed_table(&mut self) {
        self.failed_table_count += 1;
    }

    /// Increment merged table count.
    pub fn add_merged_table(&mut self) {
        self.merged_table_count += 1;
    }

    /// Count lines of rendered output.
    pub fn count_lines(&mut self, content: &str) {
        self.line_count += content.matches('\n').count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &LayoutStats) {
        self.block_count += other.block_count;
        self.paragraph_count += other.paragraph_count;
        self.heading_count += other.heading_count;
        self.table_count += other.table_count;
        self.failed_table_count += other.failed_table_count;
        self.merged_table_count += other.merged_table_count;
        self.line_count += other.line_count;
    }
}
