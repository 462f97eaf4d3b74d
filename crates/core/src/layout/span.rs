//! Horizontal sizing of blocks within a section grid.

use serde::Serialize;

use super::block::Block;

/// Number of grid columns a block occupies in a section of
/// `section_columns` columns.
///
/// Full-width kinds always take the whole row. Everything else uses its
/// `colSpan` (default 1) saturated into `1..=section_columns`.
pub fn calculate_span(block: &Block, section_columns: usize) -> usize {
    let section_columns = section_columns.max(1);

    if block.kind().is_full_width() {
        return section_columns;
    }

    let requested = block.col_span.unwrap_or(1);
    let upper = i64::try_from(section_columns).unwrap_or(i64::MAX);
    // `upper >= 1`, so the clamp bounds are ordered and the cast is lossless.
    requested.clamp(1, upper) as usize
}

/// Where a cell sits on the row's grid tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridPlacement {
    /// Occupies every track of the row.
    FullRow,
    /// Starts at the 1-based track `start` and covers `span` tracks.
    Span { start: usize, span: usize },
}

/// Map a zero-based column index and span onto grid tracks.
pub fn grid_placement(col_index: usize, span: usize, full_width: bool) -> GridPlacement {
    if full_width {
        GridPlacement::FullRow
    } else {
        GridPlacement::Span {
            start: col_index + 1,
            span: span.max(1),
        }
    }
}

/// Renders the CSS `grid-column` shorthand.
impl std::fmt::Display for GridPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FullRow => f.write_str("1 / -1"),
            Self::Span { start, span } => write!(f, "{start} / span {span}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::block::{BlockData, BlockKind, HeroData, RecentPostsData, ServicesData, TextData};

    fn text(col_span: Option<i64>) -> Block {
        let mut block = Block::new("t", BlockData::Text(TextData::default()));
        block.col_span = col_span;
        block
    }

    // -- calculate_span -----------------------------------------------------

    #[test]
    fn defaults_to_one() {
        assert_eq!(calculate_span(&text(None), 3), 1);
    }

    #[test]
    fn requested_span_within_range_kept() {
        assert_eq!(calculate_span(&text(Some(2)), 3), 2);
        assert_eq!(calculate_span(&text(Some(3)), 3), 3);
    }

    #[test]
    fn out_of_range_span_saturates() {
        for cols in 1..=3 {
            for requested in [-5, -1, 0, 1, 2, 3, 4, 99, i64::MIN, i64::MAX] {
                let span = calculate_span(&text(Some(requested)), cols);
                assert!(
                    (1..=cols).contains(&span),
                    "span {span} out of range for colSpan {requested} in {cols} columns"
                );
            }
        }
        assert_eq!(calculate_span(&text(Some(0)), 2), 1);
        assert_eq!(calculate_span(&text(Some(-3)), 2), 1);
        assert_eq!(calculate_span(&text(Some(5)), 2), 2);
    }

    #[test]
    fn full_width_kinds_ignore_col_span() {
        let kinds = [
            BlockData::Hero(HeroData::default()),
            BlockData::RecentPosts(RecentPostsData::default()),
            BlockData::Services(ServicesData::default()),
        ];
        for data in kinds {
            for requested in [None, Some(1), Some(-2), Some(9)] {
                let mut block = Block::new("f", data.clone());
                block.col_span = requested;
                for cols in 1..=3 {
                    assert_eq!(calculate_span(&block, cols), cols);
                }
            }
        }
    }

    #[test]
    fn other_kinds_are_not_full_width() {
        let narrow = BlockKind::ALL.iter().filter(|k| !k.is_full_width()).count();
        assert_eq!(narrow, 13);
    }

    // -- grid_placement -----------------------------------------------------

    #[test]
    fn full_width_placement() {
        let placement = grid_placement(1, 1, true);
        assert_eq!(placement, GridPlacement::FullRow);
        assert_eq!(placement.to_string(), "1 / -1");
    }

    #[test]
    fn span_placement_is_one_based() {
        let placement = grid_placement(1, 2, false);
        assert_eq!(placement, GridPlacement::Span { start: 2, span: 2 });
        assert_eq!(placement.to_string(), "2 / span 2");
    }
}
