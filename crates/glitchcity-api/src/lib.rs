//! Glitch City API — library crate exposing modules for integration tests.

pub mod config;
pub mod error;
pub mod narrative_client;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the full application router.
pub fn app(app_state: AppState) -> Router {
    // TODO: Replace CorsLayer::permissive() with the presentation layer's origin once it is hosted.
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/game", routes::game::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
