//! Handlers for the section layout grid.
//!
//! Every endpoint takes the layout JSON in the request body and answers
//! from it alone; nothing is stored.

use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use sitegrid_core::layout::editor::{self, BlockPosition};
use sitegrid_core::layout::{
    organize_into_rows, place_blocks, resolve_column_count, validate_page, validate_section,
    ColumnCountSource, PageLayout, Row, Section,
};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;

// ---------------------------------------------------------------------------
// Response / request types
// ---------------------------------------------------------------------------

/// A section's row-major grid together with the column count it was built
/// for.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizedSection<'a> {
    pub section_id: &'a str,
    pub column_count: usize,
    pub column_source: ColumnCountSource,
    pub rows: Vec<Row<'a>>,
}

impl<'a> OrganizedSection<'a> {
    fn build(section: &'a Section) -> Self {
        let resolved = resolve_column_count(section);
        Self {
            section_id: &section.id,
            column_count: resolved.count,
            column_source: resolved.source,
            rows: organize_into_rows(section),
        }
    }
}

/// Body of `POST /layout/sections/move`.
#[derive(Debug, Deserialize)]
pub struct MoveBlockRequest {
    pub section: Section,
    pub from: BlockPosition,
    pub to: BlockPosition,
    /// Re-derive row indices after the move.
    #[serde(default)]
    pub normalize: bool,
}

/// Encode a borrowed response payload up front so it can outlive the
/// request body it points into.
fn encode<T: Serialize>(payload: &T) -> AppResult<serde_json::Value> {
    serde_json::to_value(payload)
        .map_err(|e| AppError::InternalError(format!("Failed to encode response: {e}")))
}

// ---------------------------------------------------------------------------
// Section endpoints
// ---------------------------------------------------------------------------

/// POST /api/v1/layout/sections/organize
///
/// Build the row-major grid for a section.
pub async fn organize_section(Json(section): Json<Section>) -> AppResult<impl IntoResponse> {
    let organized = OrganizedSection::build(&section);

    tracing::debug!(
        section_id = %section.id,
        columns = organized.column_count,
        rows = organized.rows.len(),
        "Section organized",
    );

    Ok(Json(DataResponse {
        data: encode(&organized)?,
    }))
}

/// POST /api/v1/layout/sections/placements
///
/// Grid placement (column start, column span, inferred row span) of every
/// visible block in a section.
pub async fn place_section(Json(section): Json<Section>) -> AppResult<impl IntoResponse> {
    let placed = place_blocks(&section);

    tracing::debug!(section_id = %section.id, blocks = placed.len(), "Section placed");

    Ok(Json(DataResponse {
        data: encode(&placed)?,
    }))
}

/// POST /api/v1/layout/sections/validate
///
/// Report ordering inconsistencies in a section.
pub async fn check_section(Json(section): Json<Section>) -> AppResult<impl IntoResponse> {
    let result = validate_section(&section);

    if !result.is_valid {
        tracing::info!(
            section_id = %section.id,
            issues = result.issues.len(),
            "Section layout has ordering issues",
        );
    }

    Ok(Json(DataResponse { data: result }))
}

/// POST /api/v1/layout/sections/move
///
/// Move a block between slots and return the updated section.
pub async fn move_block(Json(input): Json<MoveBlockRequest>) -> AppResult<impl IntoResponse> {
    let MoveBlockRequest {
        mut section,
        from,
        to,
        normalize,
    } = input;

    editor::move_block(&mut section, from, to)?;
    if normalize {
        editor::normalize_row_indices(&mut section);
    }

    tracing::info!(
        section_id = %section.id,
        from_column = from.column,
        from_index = from.index,
        to_column = to.column,
        to_index = to.index,
        normalize,
        "Block moved",
    );

    Ok(Json(DataResponse { data: section }))
}

/// POST /api/v1/layout/sections/normalize
///
/// Rewrite row indices to match block positions.
pub async fn normalize_section(Json(mut section): Json<Section>) -> AppResult<impl IntoResponse> {
    editor::normalize_row_indices(&mut section);

    tracing::info!(section_id = %section.id, "Section row indices normalized");

    Ok(Json(DataResponse { data: section }))
}

// ---------------------------------------------------------------------------
// Page endpoints
// ---------------------------------------------------------------------------

/// POST /api/v1/layout/pages/organize
///
/// Organize every section of a page. The document must be the current
/// layout version with unique block ids.
pub async fn organize_page(Json(document): Json<serde_json::Value>) -> AppResult<impl IntoResponse> {
    if !document.is_object() {
        return Err(AppError::BadRequest(
            "Layout document must be a JSON object".to_string(),
        ));
    }

    let page = PageLayout::from_value(document)?;
    let sections: Vec<_> = page.sections.iter().map(OrganizedSection::build).collect();

    tracing::debug!(sections = sections.len(), "Page organized");

    Ok(Json(DataResponse {
        data: encode(&sections)?,
    }))
}

/// POST /api/v1/layout/pages/validate
///
/// Report page-wide and per-section inconsistencies. Unlike
/// `pages/organize`, a wrong version or repeated block id is reported as
/// an issue rather than rejected.
pub async fn check_page(Json(page): Json<PageLayout>) -> AppResult<impl IntoResponse> {
    let result = validate_page(&page);

    if !result.is_valid {
        tracing::info!(
            sections = page.sections.len(),
            issues = result.issues.len(),
            "Page layout has issues",
        );
    }

    Ok(Json(DataResponse { data: result }))
}
