//! Row organizer: turns a section's column-major block lists into a
//! row-major grid.
//!
//! Authors fill a section column by column, but the page renders row by
//! row. Each block's effective row index is the join key between the two
//! orderings: its explicit `rowIndex` when usable, otherwise its position
//! among the visible blocks of its column.

use std::collections::HashMap;

use serde::Serialize;

use super::block::Block;
use super::columns::column_count;
use super::section::Section;

/// An occupied grid cell. Borrows the block from the section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell<'a> {
    pub col_index: usize,
    pub block: &'a Block,
}

/// One row of the organized grid. `cells` has exactly one entry per
/// column; `None` marks an empty slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Row<'a> {
    pub row_index: usize,
    pub cells: Vec<Option<Cell<'a>>>,
}

impl<'a> Row<'a> {
    /// Occupied cells, left to right.
    pub fn occupied(&self) -> impl Iterator<Item = Cell<'a>> + '_ {
        self.cells.iter().flatten().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

/// A visible block annotated with where the organizer puts it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedBlock<'a> {
    pub col_index: usize,
    /// Position among the visible blocks of its column.
    pub position: usize,
    /// Explicit `rowIndex` if usable, else `position`.
    pub row: usize,
    pub block: &'a Block,
}

/// Effective row index of a block found at `position` in its column.
///
/// Explicit indices above [`MAX_ROW_INDEX`](super::block::MAX_ROW_INDEX)
/// are ignored, which bounds the grid height by the limit or the column
/// length.
pub fn effective_row_index(block: &Block, position: usize) -> usize {
    block.explicit_row_index().unwrap_or(position)
}

/// Annotate every visible block in the first `column_count` columns with
/// its effective row, in column order then block order.
///
/// Columns past `column_count` are not part of the grid and are skipped.
pub fn index_blocks(section: &Section, column_count: usize) -> Vec<IndexedBlock<'_>> {
    section
        .cols
        .iter()
        .take(column_count)
        .enumerate()
        .flat_map(|(col_index, column)| {
            column.visible_blocks().map(move |(position, block)| IndexedBlock {
                col_index,
                position,
                row: effective_row_index(block, position),
                block,
            })
        })
        .collect()
}

/// Build the row-major grid for a section.
///
/// Returns `max_row + 1` rows of exactly `column_count` cells each, or no
/// rows at all when the section has no visible blocks. When two blocks of
/// one column claim the same row, the later one wins.
pub fn organize_into_rows(section: &Section) -> Vec<Row<'_>> {
    organize_with_columns(section, column_count(section))
}

/// [`organize_into_rows`] with an already-resolved column count.
pub fn organize_with_columns(section: &Section, column_count: usize) -> Vec<Row<'_>> {
    let indexed = index_blocks(section, column_count);

    let Some(max_row) = indexed.iter().map(|ib| ib.row).max() else {
        return Vec::new();
    };

    let lookup: HashMap<(usize, usize), &Block> = indexed
        .iter()
        .map(|ib| ((ib.col_index, ib.row), ib.block))
        .collect();

    (0..=max_row)
        .map(|row_index| Row {
            row_index,
            cells: (0..column_count)
                .map(|col_index| {
                    lookup
                        .get(&(col_index, row_index))
                        .map(|&block| Cell { col_index, block })
                })
                .collect(),
        })
        .collect()
}
