//! Document model types consumed by the layout engine.
//!
//! This module defines the block-level representation produced by a
//! document model provider: paragraphs with an optional heading style and
//! tables whose cells still carry their raw merge markers. The layout
//! engine reads these types through [`DocumentProvider`] only.

mod document;
mod paragraph;
mod provider;
mod table;

pub use document::{Block, BlockKind, Document};
pub use paragraph::{Paragraph, ParagraphStyle, MAX_HEADING_LEVEL};
pub use provider::{BlockIter, DocumentProvider};
pub use table::{RawCell, Table, TableRow, VerticalMerge};
