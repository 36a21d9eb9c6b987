//! Link endpoints.
//!
//! A link joins an owner to a target. The owner id is checked by a
//! `validator` rule and the target id is coerced while deserializing.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use oidkit_http::{ApiError, RequestId, ValidatedJson};
use oidkit_id::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::state::AppState;

/// Create link routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", post(create_link))
}

/// Request to create a link.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// Owner ObjectId, kept as text until validated.
    #[validate(custom(function = "oidkit_id::validate_object_id"))]
    pub owner_id: String,

    /// Target ObjectId, parsed during deserialization.
    pub target_id: ObjectId,

    #[serde(default)]
    #[validate(length(max = 100, message = "label cannot exceed 100 characters"))]
    pub label: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LinkResponse {
    pub id: ObjectId,
    pub owner_id: ObjectId,
    pub target_id: ObjectId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Create a link.
///
/// POST /v1/links
async fn create_link(
    State(state): State<AppState>,
    request_id: RequestId,
    ValidatedJson(req): ValidatedJson<CreateLinkRequest>,
) -> Result<Response, ApiError> {
    let owner_id = state
        .pipe()
        .transform_field("owner_id", &req.owner_id)
        .map_err(|e| e.with_request_id(request_id.to_string()))?;

    let link = LinkResponse {
        id: ObjectId::new(),
        owner_id,
        target_id: req.target_id,
        label: req.label,
    };
    tracing::info!(link_id = %link.id, %owner_id, target_id = %link.target_id, "link created");

    Ok((StatusCode::CREATED, Json(link)).into_response())
}
