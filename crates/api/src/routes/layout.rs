//! Route definitions for the section layout grid, mounted at `/layout`.

use axum::routing::post;
use axum::Router;

use crate::handlers::layout;
use crate::state::AppState;

/// Layout routes mounted at `/layout`.
///
/// ```text
/// POST /sections/organize    -> organize_section
/// POST /sections/placements  -> place_section
/// POST /sections/validate    -> check_section
/// POST /sections/move        -> move_block
/// POST /sections/normalize   -> normalize_section
/// POST /pages/organize       -> organize_page
/// POST /pages/validate       -> check_page
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sections/organize", post(layout::organize_section))
        .route("/sections/placements", post(layout::place_section))
        .route("/sections/validate", post(layout::check_section))
        .route("/sections/move", post(layout::move_block))
        .route("/sections/normalize", post(layout::normalize_section))
        .route("/pages/organize", post(layout::organize_page))
        .route("/pages/validate", post(layout::check_page))
}
