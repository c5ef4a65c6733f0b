//! Fixed-width table rendering.

use super::columns::{column_widths, spanned_width, ColumnTiers};
use super::merge::{pad_rows, resolve, ResolvedCell};
use super::width::str_width;
use super::wrap::wrap_cell;
use crate::error::{Error, Result};
use crate::model::Table;

/// Fence placed around rendered tables so they stay monospaced.
pub const TABLE_FENCE: &str = "```";

/// Geometry parameters for table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableGeometry {
    /// Column width tiers
    pub tiers: ColumnTiers,
    /// Total horizontal padding inside a cell
    pub cell_padding: u32,
    /// Spaces before the text of each cell line
    pub cell_left_padding: u32,
}

impl Default for TableGeometry {
    fn default() -> Self {
        Self {
            tiers: ColumnTiers::default(),
            cell_padding: 2,
            cell_left_padding: 1,
        }
    }
}

/// A table after merge resolution, column sizing and cell wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    /// Resolved grid with wrapped lines
    pub grid: Vec<Vec<ResolvedCell>>,
    /// Rendering width of every column
    pub widths: Vec<u32>,
}

impl TableLayout {
    /// Resolve, size and wrap a table.
    pub fn build(table: &Table, geometry: &TableGeometry) -> Result<Self> {
        let column_count = table.column_count();
        if column_count == 0 {
            return Err(Error::TableRender(format!(
                "table has {} rows but no cells",
                table.row_count()
            )));
        }

        let raw = pad_rows(table);
        let mut grid = resolve(&raw);
        let widths = column_widths(&grid, column_count, &geometry.tiers);

        log::debug!(
            "table layout: {} rows x {} columns, widths {:?}",
            grid.len(),
            column_count,
            widths
        );

        wrap_origins(&mut grid, &widths, geometry.cell_padding);
        wrap_standalone(&mut grid, &widths, geometry.cell_padding);

        Ok(Self { grid, widths })
    }

    /// Horizontal border line.
    pub fn separator(&self) -> String {
        let mut line = String::from("+");
        for &width in &self.widths {
            line.push_str(&"-".repeat(width as usize));
            line.push('+');
        }
        line
    }

    /// Render the grid as bordered text lines.
    pub fn lines(&self, geometry: &TableGeometry) -> Vec<String> {
        let separator = self.separator();
        let mut out = Vec::new();

        for (row_idx, row) in self.grid.iter().enumerate() {
            let cells: Vec<(usize, &ResolvedCell)> = row_cells(row).collect();

            let has_absorbed = cells.iter().any(|(_, c)| c.is_absorbed());
            let has_origin = cells.iter().any(|(_, c)| c.is_origin());
            if row_idx == 0 || !has_absorbed || has_origin {
                out.push(separator.clone());
            }

            let line_count = cells
                .iter()
                .filter(|(_, c)| !c.is_absorbed())
                .map(|(_, c)| c.lines.len())
                .max()
                .unwrap_or(1)
                .max(1);

            for line_idx in 0..line_count {
                out.push(self.format_line(&cells, line_idx, geometry));
            }
        }

        out.push(separator);
        out
    }

    fn format_line(
        &self,
        cells: &[(usize, &ResolvedCell)],
        line_idx: usize,
        geometry: &TableGeometry,
    ) -> String {
        let mut line = String::from("|");
        for &(col, cell) in cells {
            let total = spanned_width(&self.widths, col, cell.horizontal_span);
            let text = if cell.is_absorbed() {
                ""
            } else {
                cell.lines.get(line_idx).map(String::as_str).unwrap_or("")
            };

            let right = total
                .saturating_sub(str_width(text))
                .saturating_sub(geometry.cell_left_padding);
            line.push_str(&" ".repeat(geometry.cell_left_padding as usize));
            line.push_str(text);
            line.push_str(&" ".repeat(right as usize));
            line.push('|');
        }
        line
    }
}

/// Render a table as a fenced, bordered text block.
///
/// A table without rows renders as a single blank line.
pub fn render_table(table: &Table, geometry: &TableGeometry) -> Result<String> {
    if table.is_empty() {
        return Ok("\n".to_string());
    }

    let layout = TableLayout::build(table, geometry)?;
    let mut output = String::new();
    output.push_str(TABLE_FENCE);
    output.push('\n');
    for line in layout.lines(geometry) {
        output.push_str(&line);
        output.push('\n');
    }
    output.push_str(TABLE_FENCE);
    output.push_str("\n\n");
    Ok(output)
}

/// Cells of a row that start a rendered cell, with their column index.
///
/// Positions covered by a horizontally spanning cell to their left are
/// skipped.
fn row_cells(row: &[ResolvedCell]) -> impl Iterator<Item = (usize, &ResolvedCell)> {
    let mut next = 0;
    row.iter().enumerate().filter(move |(col, cell)| {
        if *col < next {
            return false;
        }
        next = col + cell.horizontal_span.max(1) as usize;
        true
    })
}

/// Wrap merge origins at their full width and blank out the positions
/// beneath them.
fn wrap_origins(grid: &mut [Vec<ResolvedCell>], widths: &[u32], cell_padding: u32) {
    for row_idx in 0..grid.len() {
        let origins: Vec<usize> = row_cells(&grid[row_idx])
            .filter(|(_, c)| c.is_origin())
            .map(|(col, _)| col)
            .collect();

        for col in origins {
            let (vertical_span, horizontal_span) = {
                let cell = &mut grid[row_idx][col];
                let total = spanned_width(widths, col, cell.horizontal_span);
                if !cell.text.is_empty() {
                    cell.lines = wrap_cell(&cell.text, total, cell_padding);
                }
                (cell.vertical_span as usize, cell.horizontal_span)
            };

            let end = (row_idx + vertical_span).min(grid.len());
            for below in grid[row_idx + 1..end].iter_mut() {
                below[col] = ResolvedCell::absorbed(horizontal_span);
            }
        }
    }
}

/// Wrap every standalone cell at its own, possibly spanned, width.
fn wrap_standalone(grid: &mut [Vec<ResolvedCell>], widths: &[u32], cell_padding: u32) {
    for row in grid.iter_mut() {
        let standalone: Vec<usize> = row_cells(row.as_slice())
            .filter(|(_, c)| c.vertical_span == 1)
            .map(|(col, _)| col)
            .collect();

        for col in standalone {
            let cell = &mut row[col];
            let total = spanned_width(widths, col, cell.horizontal_span);
            cell.lines = wrap_cell(&cell.text, total, cell_padding);
        }
    }
}
