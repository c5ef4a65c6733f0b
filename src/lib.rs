//! # undocx
//!
//! Fixed-width text layout for flowed documents.
//!
//! This library takes a document as a flat sequence of paragraphs and
//! tables and lays it out as deterministic, monospaced text: paragraphs are
//! wrapped by display width, headings get stable anchors, and tables with
//! merged cells become bordered ASCII grids.
//!
//! ## Quick Start
//!
//! ```
//! use undocx::model::{Document, Paragraph, Table, TableRow};
//! use undocx::render_document;
//!
//! let mut doc = Document::new();
//! doc.add_paragraph(Paragraph::heading("Overview", 1));
//! doc.add_table(Table::with_rows(vec![
//!     TableRow::from_strings(["Name", "Age"]),
//!     TableRow::from_strings(["Alice", "30"]),
//! ]));
//!
//! let text = render_document(&doc)?;
//! assert!(text.contains("# Overview"));
//! assert!(text.contains("| Alice         | 30            |"));
//! # Ok::<(), undocx::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Display width**: double-width accounting for CJK and other non-ASCII text
//! - **Merged cells**: vertical merges inferred from sparse restart/continue markers
//! - **Column tiers**: column widths quantized to a few fixed sizes
//! - **Stable anchors**: command-tag or content-hash anchors for headings
//! - **Partial results**: output survives provider failures mid-document
//! - **Parallel batches**: independent documents rendered with Rayon

pub mod error;
pub mod layout;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Block, BlockKind, Document, DocumentProvider, Paragraph, ParagraphStyle, RawCell, Table,
    TableRow, VerticalMerge,
};
pub use render::{
    LayoutEngine, LayoutOptions, LayoutStats, RenderEvent, RenderListener, RenderResult,
};

use std::path::Path;

/// Render a document with default options and return the text.
///
/// Output from a document whose provider failed partway through is
/// returned as is; use [`LayoutEngine::render`] to tell the two apart.
pub fn render_document<P: DocumentProvider + ?Sized>(provider: &P) -> Result<String> {
    render_document_with_options(provider, &LayoutOptions::default())
}

/// Render a document with custom options.
///
/// # Example
///
/// ```
/// use undocx::{render_document_with_options, Document, LayoutOptions, Paragraph};
///
/// let mut doc = Document::new();
/// doc.add_paragraph(Paragraph::with_text("alpha beta gamma delta"));
///
/// let options = LayoutOptions::new().with_text_width(14).with_indent("  ");
/// let text = render_document_with_options(&doc, &options)?;
/// assert_eq!(text, "  alpha beta\n  gamma delta\n\n");
/// # Ok::<(), undocx::Error>(())
/// ```
pub fn render_document_with_options<P: DocumentProvider + ?Sized>(
    provider: &P,
    options: &LayoutOptions,
) -> Result<String> {
    let engine = LayoutEngine::new(options.clone());
    Ok(engine.render(provider)?.content)
}

/// Load a JSON document model and render it with default options.
///
/// # Example
///
/// ```no_run
/// use undocx::render_file;
///
/// let text = render_file("document.json").unwrap();
/// println!("{}", text);
/// ```
pub fn render_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = Document::from_json_file(path)?;
    render_document(&doc)
}

/// Render a JSON document model held in memory.
///
/// # Example
///
/// ```
/// let json = r#"{"blocks": [{"type": "paragraph", "text": "3.2 (cmd=007)"}]}"#;
/// let text = undocx::render_json(json)?;
/// assert_eq!(text, "<a id=\"cmd-007\"></a>\n### 3.2 (cmd=007) [cmd=007]\n\n");
/// # Ok::<(), undocx::Error>(())
/// ```
pub fn render_json(json: &str) -> Result<String> {
    let doc = Document::from_json_str(json)?;
    render_document(&doc)
}

/// Builder for loading and rendering documents.
///
/// # Example
///
/// ```no_run
/// use undocx::Undocx;
///
/// let result = Undocx::new()
///     .with_text_width(100)
///     .with_base_column_width(12)
///     .load("document.json")?
///     .render()?;
/// if let Some(reason) = &result.partial {
///     eprintln!("incomplete: {}", reason);
/// }
/// # Ok::<(), undocx::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Undocx {
    options: LayoutOptions,
}

impl Undocx {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all layout options.
    pub fn with_options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self
    }

    /// Load layout options from a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        self.options = LayoutOptions::from_json_file(path)?;
        Ok(self)
    }

    /// Set the paragraph wrap width.
    pub fn with_text_width(mut self, width: u32) -> Self {
        self.options = self.options.with_text_width(width);
        self
    }

    /// Set the paragraph indent.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.options = self.options.with_indent(indent);
        self
    }

    /// Set the base column width.
    pub fn with_base_column_width(mut self, width: u32) -> Self {
        self.options = self.options.with_base_column_width(width);
        self
    }

    /// Load a JSON document model.
    pub fn load<P: AsRef<Path>>(self, path: P) -> Result<UndocxResult> {
        let document = Document::from_json_file(path)?;
        Ok(self.document(document))
    }

    /// Parse a JSON document model held in memory.
    pub fn load_json(self, json: &str) -> Result<UndocxResult> {
        let document = Document::from_json_str(json)?;
        Ok(self.document(document))
    }

    /// Wrap an existing document.
    pub fn document(self, document: Document) -> UndocxResult {
        UndocxResult {
            document,
            options: self.options,
        }
    }
}

/// A loaded document together with the options to render it.
#[derive(Debug, Clone)]
pub struct UndocxResult {
    document: Document,
    options: LayoutOptions,
}

impl UndocxResult {
    /// Get the loaded document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Get the layout options.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Render with statistics and partial-result information.
    pub fn render(&self) -> Result<RenderResult> {
        LayoutEngine::new(self.options.clone()).render(&self.document)
    }

    /// Render and return only the text.
    pub fn to_text(&self) -> Result<String> {
        Ok(self.render()?.content)
    }

    /// Consume the wrapper and return the document.
    pub fn into_document(self) -> Document {
        self.document
    }
}
