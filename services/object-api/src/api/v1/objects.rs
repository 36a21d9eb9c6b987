//! ObjectId endpoints.
//!
//! Parse, validate, generate, and bulk-check ObjectIds.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use oidkit_http::{ApiError, ObjectIdPath, RequestId};
use oidkit_id::ObjectId;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Create object routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(generate_object_id))
        .route("/check", post(check_fields))
        .route("/{object_id}", get(describe_object_id))
        .route("/{object_id}/validity", get(validity))
}

// =============================================================================
// Request/Response Types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ObjectIdResponse {
    /// Canonical lowercase hex form.
    pub id: ObjectId,

    /// Embedded creation time, seconds since the Unix epoch.
    pub timestamp: u32,
}

impl From<ObjectId> for ObjectIdResponse {
    fn from(id: ObjectId) -> Self {
        Self {
            id,
            timestamp: id.timestamp(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidityResponse {
    /// The id exactly as received.
    pub id: String,
    pub valid: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResponse {
    /// Parsed id per configured field; `null` for absent optional fields.
    pub ids: BTreeMap<String, Option<ObjectId>>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Generate a fresh ObjectId.
///
/// POST /v1/objects
async fn generate_object_id() -> Response {
    let id = ObjectId::new();
    tracing::debug!(%id, "generated ObjectId");
    (StatusCode::CREATED, Json(ObjectIdResponse::from(id))).into_response()
}

/// Parse an ObjectId from the path.
///
/// GET /v1/objects/{object_id}
async fn describe_object_id(ObjectIdPath(id): ObjectIdPath) -> Json<ObjectIdResponse> {
    Json(ObjectIdResponse::from(id))
}

/// Report whether the path segment is a well-formed ObjectId.
///
/// GET /v1/objects/{object_id}/validity
async fn validity(Path(id): Path<String>) -> Json<ValidityResponse> {
    let valid = oidkit_id::is_valid(&id);
    Json(ValidityResponse { id, valid })
}

/// Check the configured ObjectId fields of an arbitrary JSON document.
///
/// POST /v1/objects/check
async fn check_fields(
    State(state): State<AppState>,
    request_id: RequestId,
    Json(document): Json<serde_json::Value>,
) -> Result<Json<CheckResponse>, ApiError> {
    let ids = state.rules().coerce(&document).map_err(|errors| {
        state
            .pipe()
            .reject_all(&errors)
            .with_request_id(request_id.to_string())
    })?;

    Ok(Json(CheckResponse {
        ids: ids.into_iter().collect(),
    }))
}
