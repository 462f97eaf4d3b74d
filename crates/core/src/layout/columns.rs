//! Effective column count of a section.
//!
//! A section can state its width in three places. They are consulted in a
//! fixed order and the first usable value wins:
//!
//! 1. `settings.columnsLayout`
//! 2. `columnsLayout`
//! 3. `columns`
//! 4. [`DEFAULT_COLUMNS`]

use serde::Serialize;

use super::section::Section;

/// Column count used when a section states none.
pub const DEFAULT_COLUMNS: usize = 2;

/// Widest grid a section can render.
pub const MAX_COLUMNS: usize = 3;

/// Which field the effective column count came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnCountSource {
    Settings,
    SectionLayout,
    Columns,
    Default,
}

/// The resolved column count together with its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedColumns {
    pub count: usize,
    pub source: ColumnCountSource,
}

/// Resolve the number of grid columns a section renders with.
///
/// Zero at any level reads as absent. The result is clamped to
/// `1..=MAX_COLUMNS`.
pub fn resolve_column_count(section: &Section) -> ResolvedColumns {
    let candidates = [
        (
            section.settings.as_ref().and_then(|s| s.columns_layout),
            ColumnCountSource::Settings,
        ),
        (section.columns_layout, ColumnCountSource::SectionLayout),
        (section.columns, ColumnCountSource::Columns),
    ];

    candidates
        .into_iter()
        .find_map(|(value, source)| {
            value.filter(|&v| v > 0).map(|v| ResolvedColumns {
                count: (v as usize).min(MAX_COLUMNS),
                source,
            })
        })
        .unwrap_or(ResolvedColumns {
            count: DEFAULT_COLUMNS,
            source: ColumnCountSource::Default,
        })
}

/// Shorthand for `resolve_column_count(section).count`.
pub fn column_count(section: &Section) -> usize {
    resolve_column_count(section).count
}
