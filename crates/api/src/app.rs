//! Router assembly shared by the binary and the integration tests.

use std::sync::Arc;
use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";
const CORS_MAX_AGE: Duration = Duration::from_secs(3600);

/// A configured CORS origin that is not a valid header value.
#[derive(Debug, thiserror::Error)]
#[error("Invalid CORS origin '{origin}'")]
pub struct InvalidCorsOrigin {
    pub origin: String,
}

/// Build the service router with its middleware stack.
///
/// Layers run outermost first on a request: CORS, request id assignment,
/// tracing, request id propagation, timeout, panic recovery.
pub fn build_app(config: &ServerConfig) -> Result<Router, InvalidCorsOrigin> {
    let cors = cors_layer(&config.cors_origins)?;
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let state = AppState {
        config: Arc::new(config.clone()),
    };

    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(cors)
        .with_state(state);

    Ok(app)
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer, InvalidCorsOrigin> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| InvalidCorsOrigin {
                origin: origin.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE))
}
