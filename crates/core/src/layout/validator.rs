//! Ordering diagnostics for section layouts.
//!
//! Re-derives effective row indices exactly as the organizer does and
//! reports anything that looks stale or hand-edited. Findings are plain
//! strings for whoever is debugging a page; a finding is not necessarily a
//! bug. Nothing here mutates its input.

use std::collections::HashMap;

use serde::Serialize;

use super::block::MAX_ROW_INDEX;
use super::columns::column_count;
use super::organizer::{index_blocks, organize_with_columns, Row};
use super::page::{validate_version, PageLayout};
use super::section::Section;

/// Outcome of a layout consistency check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutValidation {
    pub is_valid: bool,
    pub issues: Vec<String>,
}

impl LayoutValidation {
    fn from_issues(issues: Vec<String>) -> Self {
        Self {
            is_valid: issues.is_empty(),
            issues,
        }
    }
}

/// Check a single section.
pub fn validate_section(section: &Section) -> LayoutValidation {
    LayoutValidation::from_issues(section_issues(section))
}

/// Check every section of a page, plus page-wide invariants (document
/// version, unique block ids). Section findings are prefixed with the
/// section id.
pub fn validate_page(page: &PageLayout) -> LayoutValidation {
    let mut issues = Vec::new();

    if let Err(err) = validate_version(page.version) {
        issues.push(err.to_string());
    }

    for id in page.duplicate_block_ids() {
        issues.push(format!("Block id '{id}' is used more than once on the page"));
    }

    for section in &page.sections {
        issues.extend(
            section_issues(section)
                .into_iter()
                .map(|issue| format!("Section '{}': {issue}", section.id)),
        );
    }

    LayoutValidation::from_issues(issues)
}

/// Report rows whose index does not match their position in the sequence.
///
/// The organizer never produces such a sequence; this exists to catch a
/// renderer that builds rows some other way.
pub fn row_sequence_issues(rows: &[Row<'_>]) -> Vec<String> {
    rows.iter()
        .enumerate()
        .filter(|(position, row)| row.row_index != *position)
        .map(|(position, row)| {
            format!(
                "Row at position {position} has rowIndex {}, expected {position}",
                row.row_index
            )
        })
        .collect()
}

fn section_issues(section: &Section) -> Vec<String> {
    let columns = column_count(section);
    let mut issues = Vec::new();

    for (col_index, column) in section.cols.iter().enumerate().skip(columns) {
        let visible_count = column.visible_blocks().count();
        if visible_count > 0 {
            issues.push(format!(
                "Column {col_index} ('{}') is outside the {columns}-column grid; \
                 its {visible_count} visible block(s) are not rendered",
                column.id
            ));
        }
    }

    let indexed = index_blocks(section, columns);
    let mut claimed: HashMap<(usize, usize), &str> = HashMap::new();

    for ib in &indexed {
        let id = ib.block.id.as_str();

        match (ib.block.row_index, ib.block.explicit_row_index()) {
            (Some(raw), None) if raw < 0 => issues.push(format!(
                "Block '{id}' in column {} has invalid rowIndex {raw}; using position {}",
                ib.col_index, ib.position
            )),
            (Some(raw), None) => issues.push(format!(
                "Block '{id}' in column {} has rowIndex {raw} above the limit of \
                 {MAX_ROW_INDEX}; using position {}",
                ib.col_index, ib.position
            )),
            (_, Some(explicit)) if explicit != ib.position => issues.push(format!(
                "Block '{id}' in column {} has rowIndex {explicit} but sits at position {}",
                ib.col_index, ib.position
            )),
            _ => {}
        }

        if let Some(previous) = claimed.insert((ib.col_index, ib.row), id) {
            issues.push(format!(
                "Blocks '{previous}' and '{id}' in column {} both claim row {}; '{id}' is rendered",
                ib.col_index, ib.row
            ));
        }
    }

    let rows = organize_with_columns(section, columns);
    issues.extend(row_sequence_issues(&rows));

    issues
}
