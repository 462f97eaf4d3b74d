pub mod health;
pub mod layout;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /layout/sections/organize                        row-major grid (POST)
/// /layout/sections/placements                      block placements (POST)
/// /layout/sections/validate                        ordering diagnostics (POST)
/// /layout/sections/move                            reorder a block (POST)
/// /layout/sections/normalize                       re-derive row indices (POST)
/// /layout/pages/organize                           grids for a whole page (POST)
/// /layout/pages/validate                           page diagnostics (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/layout", layout::router())
}
