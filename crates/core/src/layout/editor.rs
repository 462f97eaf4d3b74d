//! Reorder operations backing the editor's drag-and-drop lists.

use serde::{Deserialize, Serialize};

use super::section::Section;
use crate::error::CoreError;

/// A block slot: column index and position within that column's list
/// (hidden blocks included).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockPosition {
    pub column: usize,
    pub index: usize,
}

impl BlockPosition {
    pub fn new(column: usize, index: usize) -> Self {
        Self { column, index }
    }
}

/// Move the block at `from` to `to`.
///
/// The target index is clamped to the end of the destination list, so
/// dropping past the last block appends. Row annotations are left alone;
/// call [`normalize_row_indices`] afterwards to re-derive them.
pub fn move_block(
    section: &mut Section,
    from: BlockPosition,
    to: BlockPosition,
) -> Result<(), CoreError> {
    let column_total = section.cols.len();
    for position in [from, to] {
        if position.column >= column_total {
            return Err(CoreError::Validation(format!(
                "Column {} does not exist in section '{}' ({column_total} columns)",
                position.column, section.id
            )));
        }
    }

    let source = &mut section.cols[from.column].blocks;
    if from.index >= source.len() {
        return Err(CoreError::NotFound {
            entity: "Block",
            id: format!("{}[{}][{}]", section.id, from.column, from.index),
        });
    }
    let block = source.remove(from.index);

    let target = &mut section.cols[to.column].blocks;
    let index = to.index.min(target.len());
    target.insert(index, block);
    Ok(())
}

/// Rewrite every visible block's `rowIndex` to its position among the
/// visible blocks of its column. Hidden blocks keep whatever they had.
///
/// Discards deliberate gaps; afterwards the section validates clean.
pub fn normalize_row_indices(section: &mut Section) {
    for column in &mut section.cols {
        for (position, block) in column.blocks.iter_mut().filter(|b| b.visible).enumerate() {
            block.row_index = i64::try_from(position).ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use crate::layout::organizer::tests::{block, ids, section};
    use crate::layout::organizer::organize_into_rows;
    use crate::layout::validator::validate_section;

    fn column_ids(section: &Section, column: usize) -> Vec<&str> {
        section.cols[column]
            .blocks
            .iter()
            .map(|b| b.id.as_str())
            .collect()
    }

    // -- move_block ---------------------------------------------------------

    #[test]
    fn moves_within_a_column() {
        let mut s = section(vec![vec![block("a", None), block("b", None), block("c", None)]]);
        move_block(&mut s, BlockPosition::new(0, 0), BlockPosition::new(0, 2)).unwrap();
        assert_eq!(column_ids(&s, 0), vec!["b", "c", "a"]);
    }

    #[test]
    fn moves_across_columns() {
        let mut s = section(vec![vec![block("a", None), block("b", None)], vec![block("c", None)]]);
        move_block(&mut s, BlockPosition::new(0, 1), BlockPosition::new(1, 0)).unwrap();
        assert_eq!(column_ids(&s, 0), vec!["a"]);
        assert_eq!(column_ids(&s, 1), vec!["b", "c"]);
    }

    #[test]
    fn target_index_past_end_appends() {
        let mut s = section(vec![vec![block("a", None)], vec![block("c", None)]]);
        move_block(&mut s, BlockPosition::new(0, 0), BlockPosition::new(1, 99)).unwrap();
        assert!(s.cols[0].blocks.is_empty());
        assert_eq!(column_ids(&s, 1), vec!["c", "a"]);
    }

    #[test]
    fn missing_source_block_is_not_found() {
        let mut s = section(vec![vec![block("a", None)]]);
        let err = move_block(&mut s, BlockPosition::new(0, 3), BlockPosition::new(0, 0)).unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "Block", .. });
        assert_eq!(column_ids(&s, 0), vec!["a"]);
    }

    #[test]
    fn unknown_column_is_rejected() {
        let mut s = section(vec![vec![block("a", None)]]);
        let err = move_block(&mut s, BlockPosition::new(0, 0), BlockPosition::new(2, 0)).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
        assert_eq!(column_ids(&s, 0), vec!["a"], "failed move must not drop the block");
    }

    // -- normalize_row_indices ----------------------------------------------

    #[test]
    fn normalization_clears_issues() {
        let mut hidden = block("h", Some(7));
        hidden.visible = false;
        let mut s = section(vec![
            vec![block("a", Some(3)), hidden, block("b", Some(3))],
            vec![block("c", Some(-1)), block("d", Some(5))],
        ]);
        assert!(!validate_section(&s).is_valid);

        normalize_row_indices(&mut s);

        let rows: Vec<_> = s.blocks().map(|b| (b.id.as_str(), b.row_index)).collect();
        assert_eq!(
            rows,
            vec![
                ("a", Some(0)),
                ("h", Some(7)),
                ("b", Some(1)),
                ("c", Some(0)),
                ("d", Some(1)),
            ]
        );
        assert!(validate_section(&s).is_valid);
    }

    #[test]
    fn move_then_normalize_reflows_grid() {
        let mut s = section(vec![
            vec![block("a", Some(0)), block("b", Some(1))],
            vec![block("c", Some(0))],
        ]);
        move_block(&mut s, BlockPosition::new(0, 0), BlockPosition::new(1, 1)).unwrap();
        normalize_row_indices(&mut s);

        assert_eq!(
            ids(&organize_into_rows(&s)),
            vec![vec![Some("b"), Some("c")], vec![None, Some("a")]]
        );
    }
}
