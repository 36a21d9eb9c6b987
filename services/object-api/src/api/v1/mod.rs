//! API v1 routes.

mod links;
mod objects;

use axum::Router;

use crate::state::AppState;

/// Create API v1 routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/objects", objects::routes())
        .nest("/links", links::routes())
}
