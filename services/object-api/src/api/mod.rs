//! HTTP API handlers and routing.

mod health;
mod v1;

use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the main API router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Extractors in oidkit-http word rejections through this pipe.
    let pipe = state.pipe().clone();

    Router::new()
        // Health endpoints
        .merge(health::routes())
        // API v1 routes
        .nest("/v1", v1::routes())
        // Middleware
        .layer(Extension(pipe))
        .layer(TraceLayer::new_for_http())
        // Application state
        .with_state(state)
}
