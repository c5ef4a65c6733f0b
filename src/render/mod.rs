//! Rendering: block formatting, anchors and the document walker.

pub mod anchor;
mod block;
pub mod events;
mod options;
mod result;
mod walker;

pub use anchor::{anchor_heading, derive_anchor, normalize_heading, Anchor, AnchoredHeading};
pub use block::{BlockFormatter, FormattedBlock, FormattedKind, PSEUDO_HEADING_LEVEL};
pub use events::{EventLog, NoopListener, RenderEvent, RenderListener};
pub use options::{LayoutOptions, DEFAULT_TABLE_FAILURE_PLACEHOLDER, MAX_COLUMN_WIDTH};
pub use result::{LayoutStats, RenderResult};
pub use walker::LayoutEngine;
