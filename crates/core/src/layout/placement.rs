//! Row-span inference for renderers.
//!
//! A block at row `r` covering columns `[start, end]` grows downward into
//! every following row that has nothing overlapping those columns, and
//! stops at the first row that does. A tall form next to a short column
//! therefore fills the space beside it without the author spelling out a
//! row span.

use serde::Serialize;

use super::block::Block;
use super::columns::column_count;
use super::organizer::{organize_with_columns, Row};
use super::section::Section;
use super::span::{calculate_span, grid_placement, GridPlacement};

/// A block with its final position on the section grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedBlock<'a> {
    pub row_index: usize,
    pub col_index: usize,
    pub col_span: usize,
    pub row_span: usize,
    pub placement: GridPlacement,
    /// CSS `grid-column` value for `placement`.
    pub grid_column: String,
    pub block: &'a Block,
}

impl PlacedBlock<'_> {
    /// Last column index covered, inclusive.
    pub fn col_end(&self) -> usize {
        self.col_index + self.col_span - 1
    }
}

/// Inclusive column interval of the cell at `col_index`.
fn column_interval(block: &Block, col_index: usize, columns: usize) -> (usize, usize) {
    if block.kind().is_full_width() {
        return (0, columns.saturating_sub(1));
    }
    let span = calculate_span(block, columns);
    (col_index, (col_index + span - 1).min(columns.saturating_sub(1)))
}

/// Number of rows a block starting at `row_index` covering `[start, end]`
/// extends over, itself included.
pub fn infer_row_span(
    rows: &[Row<'_>],
    row_index: usize,
    start: usize,
    end: usize,
    columns: usize,
) -> usize {
    let blocked = |row: &Row<'_>| {
        row.occupied().any(|cell| {
            let (s, e) = column_interval(cell.block, cell.col_index, columns);
            s <= end && start <= e
        })
    };

    1 + rows
        .iter()
        .skip(row_index + 1)
        .take_while(|row| !blocked(row))
        .count()
}

/// Organize a section and place every visible block on its grid, row by
/// row and left to right.
pub fn place_blocks(section: &Section) -> Vec<PlacedBlock<'_>> {
    let columns = column_count(section);
    let rows = organize_with_columns(section, columns);

    let mut placed = Vec::new();
    for row in &rows {
        for cell in row.occupied() {
            let full_width = cell.block.kind().is_full_width();
            let (start, end) = column_interval(cell.block, cell.col_index, columns);
            let col_span = end - start + 1;
            let placement = grid_placement(start, col_span, full_width);

            placed.push(PlacedBlock {
                row_index: row.row_index,
                col_index: start,
                col_span,
                row_span: infer_row_span(&rows, row.row_index, start, end, columns),
                grid_column: placement.to_string(),
                placement,
                block: cell.block,
            });
        }
    }
    placed
}
