//! Per-block progress events.
//!
//! The layout engine reports progress through a [`RenderListener`]; any
//! `FnMut(&RenderEvent)` closure is a listener.
//!
//! # Example
//!
//! ```
//! use undocx::model::{Document, Paragraph};
//! use undocx::render::{LayoutEngine, LayoutOptions, RenderEvent};
//!
//! let mut doc = Document::new();
//! doc.add_paragraph(Paragraph::with_text("Hello"));
//!
//! let engine = LayoutEngine::new(LayoutOptions::default());
//! let mut done = 0;
//! engine
//!     .render_with_listener(&doc, &mut |event: &RenderEvent| {
//!         if event.is_block() {
//!             done += 1;
//!         }
//!     })
//!     .unwrap();
//! assert_eq!(done, 1);
//! ```

use crate::model::BlockKind;

/// Events emitted while a document is laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    /// Rendering has started.
    DocumentStart {
        /// Number of blocks, if the provider knows it
        block_count: Option<usize>,
    },

    /// A block has been rendered.
    Block {
        /// 0-indexed position in the document
        index: usize,
        /// Kind of block
        kind: BlockKind,
        /// Bytes of output the block produced
        output_len: usize,
    },

    /// A table failed and was replaced by the placeholder.
    TableFailed {
        /// 0-indexed position in the document
        index: usize,
        /// Failure message
        reason: String,
    },

    /// Rendering has finished.
    DocumentEnd {
        /// Blocks rendered
        rendered: usize,
        /// Set when the provider failed before the end
        partial: Option<String>,
    },
}

impl RenderEvent {
    /// Check if this event marks a rendered block.
    pub fn is_block(&self) -> bool {
        matches!(self, RenderEvent::Block { .. })
    }

    /// Check if this is a document boundary event.
    pub fn is_document_boundary(&self) -> bool {
        matches!(
            self,
            RenderEvent::DocumentStart { .. } | RenderEvent::DocumentEnd { .. }
        )
    }

    /// Block index carried by the event.
    pub fn block_index(&self) -> Option<usize> {
        match self {
            RenderEvent::Block { index, .. } | RenderEvent::TableFailed { index, .. } => {
                Some(*index)
            }
            _ => None,
        }
    }
}

/// Receiver of render events.
pub trait RenderListener {
    /// Called for every event, in order.
    fn on_event(&mut self, event: &RenderEvent);
}

impl<F> RenderListener for F
where
    F: FnMut(&RenderEvent),
{
    fn on_event(&mut self, event: &RenderEvent) {
        self(event)
    }
}

/// Listener that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl RenderListener for NoopListener {
    fn on_event(&mut self, _event: &RenderEvent) {}
}

/// Listener that records every event.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    /// Events in the order received
    pub events: Vec<RenderEvent>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of block events received.
    pub fn block_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_block()).count()
    }
}

impl RenderListener for EventLog {
    fn on_event(&mut self, event: &RenderEvent) {
        self.events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_helpers() {
        let start = RenderEvent::DocumentStart {
            block_count: Some(3),
        };
        assert!(start.is_document_boundary());
        assert!(!start.is_block());
        assert_eq!(start.block_index(), None);

        let block = RenderEvent::Block {
            index: 2,
            kind: BlockKind::Table,
            output_len: 10,
        };
        assert!(block.is_block());
        assert_eq!(block.block_index(), Some(2));
    }

    #[test]
    fn test_closure_listener() {
        let mut seen = Vec::new();
        {
            let mut listener = |event: &RenderEvent| seen.push(event.clone());
            listener.on_event(&RenderEvent::DocumentEnd {
                rendered: 0,
                partial: None,
            });
        }
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn test_event_log() {
        let mut log = EventLog::new();
        log.on_event(&RenderEvent::Block {
            index: 0,
            kind: BlockKind::Paragraph,
            output_len: 1,
        });
        NoopListener.on_event(&RenderEvent::DocumentStart { block_count: None });
        assert_eq!(log.block_count(), 1);
    }
}
