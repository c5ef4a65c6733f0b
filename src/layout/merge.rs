//! Merged-cell topology resolution.
//!
//! Vertical merge markers say where a merge starts and that a cell
//! continues *some* merge, but not how many rows a merge covers. The span
//! of every merge is inferred here from the markers plus a text
//! compatibility check: two cells belong to the same merge only when one of
//! them is empty or both hold the same text.

use super::width::str_width;
use super::wrap::clean_cell_text;
use crate::model::{RawCell, Table, VerticalMerge};

/// A grid position after merge resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCell {
    /// Cleaned cell text
    pub text: String,

    /// Rendered lines; filled by the table renderer
    pub lines: Vec<String>,

    /// 0 = absorbed by an origin above, 1 = standalone, >1 = merge origin
    pub vertical_span: u32,

    /// Number of grid columns the cell covers
    pub horizontal_span: u32,

    /// Widest line of the cleaned text, before wrapping
    pub max_line_width: u32,
}

impl ResolvedCell {
    fn from_raw(raw: &RawCell, vertical_span: u32) -> Self {
        let text = clean_cell_text(&raw.text);
        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        let max_line_width = lines.iter().map(|l| str_width(l)).max().unwrap_or(0);
        Self {
            text,
            lines,
            vertical_span,
            horizontal_span: raw.span(),
            max_line_width,
        }
    }

    /// Create an empty placeholder for a position covered by a merge.
    pub fn absorbed(horizontal_span: u32) -> Self {
        Self {
            text: String::new(),
            lines: Vec::new(),
            vertical_span: 0,
            horizontal_span,
            max_line_width: 0,
        }
    }

    /// Check if the position is covered by a merge origin above.
    pub fn is_absorbed(&self) -> bool {
        self.vertical_span == 0
    }

    /// Check if the cell starts a vertical merge.
    pub fn is_origin(&self) -> bool {
        self.vertical_span > 1
    }

    fn absorb(&mut self) {
        self.text.clear();
        self.lines.clear();
        self.vertical_span = 0;
        self.max_line_width = 0;
    }
}

/// Pad ragged rows with empty cells so every row has `column_count` cells.
pub fn pad_rows(table: &Table) -> Vec<Vec<RawCell>> {
    let column_count = table.column_count();
    table
        .rows
        .iter()
        .map(|row| {
            let mut cells = row.cells.clone();
            cells.resize_with(column_count, RawCell::empty);
            cells
        })
        .collect()
}

/// Resolve the effective spans of every grid position.
///
/// `grid` must be rectangular (see [`pad_rows`]). The result has the same
/// shape. Contradictory metadata never fails: a continuation without a
/// compatible origin becomes a standalone cell.
pub fn resolve(grid: &[Vec<RawCell>]) -> Vec<Vec<ResolvedCell>> {
    let mut resolved: Vec<Vec<ResolvedCell>> = grid
        .iter()
        .enumerate()
        .map(|(row_idx, row)| {
            row.iter()
                .enumerate()
                .map(|(col_idx, cell)| {
                    let span = vertical_span(grid, row_idx, col_idx);
                    ResolvedCell::from_raw(cell, span)
                })
                .collect()
        })
        .collect();

    reconcile(&mut resolved);
    resolved
}

/// Effective vertical span of the cell at `(row, col)`.
pub fn vertical_span(grid: &[Vec<RawCell>], row: usize, col: usize) -> u32 {
    let cell = &grid[row][col];
    let own_text = cell.text.trim();

    match cell.vertical_merge {
        None => 1,
        Some(VerticalMerge::Restart) => {
            let continued = grid[row + 1..]
                .iter()
                .map(|r| &r[col])
                .take_while(|next| {
                    matches!(next.vertical_merge, Some(VerticalMerge::Continue))
                        && texts_compatible(own_text, next.text.trim())
                })
                .count();
            1 + continued as u32
        }
        Some(VerticalMerge::Continue) => {
            let has_origin = grid[..row].iter().rev().map(|r| &r[col]).any(|prev| {
                matches!(prev.vertical_merge, Some(VerticalMerge::Restart))
                    && texts_compatible(own_text, prev.text.trim())
            });
            if has_origin {
                0
            } else {
                1
            }
        }
    }
}

/// Two merge candidates are compatible when either is empty or both match.
fn texts_compatible(a: &str, b: &str) -> bool {
    a.is_empty() || b.is_empty() || a == b
}

/// Make the per-column spans partition the rows exactly once.
///
/// Positions inside an origin's span are absorbed; absorbed positions that
/// no origin covers become standalone again.
fn reconcile(grid: &mut [Vec<ResolvedCell>]) {
    let row_count = grid.len();
    let column_count = grid.first().map(Vec::len).unwrap_or(0);

    for col in 0..column_count {
        let mut covered_until = 0;
        for row in 0..row_count {
            if row < covered_until {
                if !grid[row][col].is_absorbed() {
                    log::debug!("absorbing cell ({}, {}) inside a merge", row, col);
                }
                grid[row][col].absorb();
                continue;
            }

            let cell = &mut grid[row][col];
            if cell.is_absorbed() {
                log::debug!(
                    "cell ({}, {}) continues no merge, treating as standalone",
                    row,
                    col
                );
                cell.vertical_span = 1;
            } else if cell.is_origin() {
                covered_until = row + cell.vertical_span as usize;
            }
        }
    }
}
