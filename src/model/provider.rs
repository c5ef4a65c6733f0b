//! Document model provider abstraction.
//!
//! The layout engine never touches a concrete document format. It reads
//! blocks through [`DocumentProvider`], which exposes exactly what layout
//! needs: the ordered block sequence, paragraph text with its style, and
//! table rows of raw cells with their merge descriptors.

use super::{Block, Document};
use crate::error::Result;

/// Iterator over the blocks of a document.
///
/// Each item is fallible: an `Err` item means the provider hit a broken
/// internal reference partway through the document.
pub type BlockIter<'a> = Box<dyn Iterator<Item = Result<Block>> + 'a>;

/// Read-only access to a document's block sequence.
pub trait DocumentProvider {
    /// Open the block sequence.
    ///
    /// An error here means the document cannot be read at all.
    fn blocks(&self) -> Result<BlockIter<'_>>;

    /// Total number of blocks, when known up front.
    fn block_count_hint(&self) -> Option<usize> {
        None
    }
}

impl DocumentProvider for Document {
    fn blocks(&self) -> Result<BlockIter<'_>> {
        Ok(Box::new(self.blocks.iter().cloned().map(Ok)))
    }

    fn block_count_hint(&self) -> Option<usize> {
        Some(self.blocks.len())
    }
}

impl<P: DocumentProvider + ?Sized> DocumentProvider for &P {
    fn blocks(&self) -> Result<BlockIter<'_>> {
        (**self).blocks()
    }

    fn block_count_hint(&self) -> Option<usize> {
        (**self).block_count_hint()
    }
}
