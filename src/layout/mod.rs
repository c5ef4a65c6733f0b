//! Layout primitives: display width, wrapping, merge resolution and table
//! geometry.
//!
//! Everything here is a pure function of its inputs. A table is laid out in
//! four steps: ragged rows are padded ([`merge::pad_rows`]), merge spans are
//! resolved ([`merge::resolve`]), columns are sized by tier
//! ([`columns::column_widths`]), and cells are wrapped and drawn
//! ([`table::TableLayout`]).

pub mod columns;
pub mod merge;
pub mod segment;
pub mod table;
pub mod width;
pub mod wrap;

pub use columns::{column_widths, spanned_width, ColumnTiers};
pub use merge::{resolve, ResolvedCell};
pub use segment::segment;
pub use table::{render_table, TableGeometry, TableLayout};
pub use width::{char_width, str_width};
pub use wrap::{wrap_cell, wrap_paragraph, wrap_units};
