//! Column width tiering.

use super::merge::ResolvedCell;

/// Discrete column width tiers.
///
/// A column is as wide as the smallest tier that holds its widest unmerged
/// line. Content wider than the top tier is wrapped instead of widening the
/// column further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnTiers {
    /// Width of the first tier
    pub base: u32,
    /// Multiplier of the second tier
    pub level_2: u32,
    /// Multiplier of the third (top) tier
    pub level_3: u32,
}

impl ColumnTiers {
    /// Create tiers from a base width and two multipliers.
    pub fn new(base: u32, level_2: u32, level_3: u32) -> Self {
        Self {
            base,
            level_2,
            level_3,
        }
    }

    /// Width assigned to a column whose widest content is `content_width`.
    pub fn width_for(&self, content_width: u32) -> u32 {
        let tiers = [
            self.base,
            self.base.saturating_mul(self.level_2),
            self.base.saturating_mul(self.level_3),
        ];
        tiers
            .iter()
            .copied()
            .find(|&tier| content_width <= tier)
            .unwrap_or(tiers[2])
    }
}

impl Default for ColumnTiers {
    fn default() -> Self {
        Self::new(15, 2, 3)
    }
}

/// Widest unmerged content per column.
///
/// Only cells spanning a single column count, so one wide merged cell does
/// not inflate every column it touches. Absorbed cells carry no content.
pub fn max_content_widths(grid: &[Vec<ResolvedCell>], column_count: usize) -> Vec<u32> {
    let mut widths = vec![0; column_count];
    for row in grid {
        for (col, cell) in row.iter().enumerate().take(column_count) {
            if cell.horizontal_span == 1 {
                widths[col] = widths[col].max(cell.max_line_width);
            }
        }
    }
    widths
}

/// Assign a tiered width to every column.
pub fn column_widths(
    grid: &[Vec<ResolvedCell>],
    column_count: usize,
    tiers: &ColumnTiers,
) -> Vec<u32> {
    max_content_widths(grid, column_count)
        .into_iter()
        .map(|w| tiers.width_for(w))
        .collect()
}

/// Total width of a cell starting at `col` and spanning `span` columns,
/// including the border characters between the spanned columns.
///
/// Spans running past the last column are clipped.
pub fn spanned_width(widths: &[u32], col: usize, span: u32) -> u32 {
    let end = (col + span.max(1) as usize).min(widths.len());
    let covered = &widths[col.min(end)..end];
    let borders = covered.len().saturating_sub(1) as u32;
    covered
        .iter()
        .fold(borders, |total, &width| total.saturating_add(width))
}
