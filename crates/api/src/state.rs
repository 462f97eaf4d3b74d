use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The service is stateless apart from its configuration, so this is a
/// cheap `Arc` clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}
