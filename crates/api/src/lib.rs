//! Layout preview service library.
//!
//! Exposes the router builder and its parts (config, state, error handling,
//! routes) so integration tests and the binary entrypoint share one stack.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;
