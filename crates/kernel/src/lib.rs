//! Shelf navigation kernel.
//!
//! Builds the role-filtered sidebar for the asset-management app and serves
//! it over HTTP. The `shelf` binary is the main entry point; this library
//! exposes the internals for integration testing.

pub mod cli;
pub mod config;
pub mod error;
pub mod menu;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod theme;

use axum::Router;
use axum::http::Method;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use state::AppState;

/// Build the application router with all routes and shared layers.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(state.config());

    Router::new()
        .merge(routes::navigation::router())
        .merge(routes::health::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for the read-only navigation endpoints.
fn cors_layer(config: &Config) -> CorsLayer {
    let origins = match config.cors_origins() {
        Some(origins) => AllowOrigin::list(origins),
        None => AllowOrigin::any(),
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}
