//! axum extractors that validate ObjectIds before a handler runs.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{request::Parts, Extensions, HeaderMap},
    Json,
};
use oidkit_id::{InvalidObjectId, ObjectId, OBJECT_ID_CODE};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::{ApiError, FieldError};
use crate::message::ErrorMessage;
use crate::pipe::ObjectIdPipe;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// The last path parameter, parsed into an [`ObjectId`].
///
/// For `/orgs/{org_id}/objects/{object_id}` this is `object_id`. The
/// rejection names the parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectIdPath(pub ObjectId);

/// The last path parameter, validated and passed through as a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidObjectIdPath(pub String);

/// A JSON body checked with [`Validate`] before the handler sees it.
///
/// Fields validated with [`oidkit_id::validate_object_id`] are worded through
/// the active [`ObjectIdPipe`].
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

/// The caller's `x-request-id`, or a freshly generated one.
///
/// Handlers take this to tag errors they raise themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let id = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .unwrap_or_else(|| ObjectId::new().to_string());
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The request id already settled for this request, settling one if needed.
fn settled_request_id(headers: &HeaderMap, extensions: &mut Extensions) -> RequestId {
    if let Some(id) = extensions.get::<RequestId>() {
        return id.clone();
    }
    let id = RequestId::from_headers(headers);
    extensions.insert(id.clone());
    id
}

impl<S> FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(settled_request_id(&parts.headers, &mut parts.extensions))
    }
}

/// The pipe installed on the request, or a field-templated one.
fn active_pipe(extensions: &Extensions) -> ObjectIdPipe {
    extensions
        .get::<ObjectIdPipe>()
        .cloned()
        .unwrap_or_else(|| ObjectIdPipe::with_policy(ErrorMessage::FieldTemplate))
}

async fn last_path_param<S>(
    parts: &mut Parts,
    state: &S,
    request_id: &str,
) -> Result<(String, String), ApiError>
where
    S: Send + Sync,
{
    let Path(mut params) = Path::<Vec<(String, String)>>::from_request_parts(parts, state)
        .await
        .map_err(|rejection| {
            ApiError::bad_request("invalid_request", rejection.body_text())
                .with_request_id(request_id)
        })?;

    params.pop().ok_or_else(|| {
        tracing::error!("ObjectId extractor used on a route without path parameters");
        ApiError::internal("internal_error", "Route has no path parameters")
            .with_request_id(request_id)
    })
}

impl<S> FromRequestParts<S> for ObjectIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let request_id = settled_request_id(&parts.headers, &mut parts.extensions).0;
        let (field, value) = last_path_param(parts, state, &request_id).await?;

        active_pipe(&parts.extensions)
            .transform_field(&field, &value)
            .map(Self)
            .map_err(|e| e.with_request_id(request_id))
    }
}

impl<S> FromRequestParts<S> for ValidObjectIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let request_id = settled_request_id(&parts.headers, &mut parts.extensions).0;
        let (field, value) = last_path_param(parts, state, &request_id).await?;

        active_pipe(&parts.extensions)
            .check_field(&field, &value)
            .map(Self)
            .map_err(|e| e.with_request_id(request_id))
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(mut req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let request_id = match req.extensions().get::<RequestId>() {
            Some(id) => id.0.clone(),
            None => {
                let id = RequestId::from_headers(req.headers());
                req.extensions_mut().insert(id.clone());
                id.0
            }
        };
        let pipe = active_pipe(req.extensions());

        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ApiError::bad_request("invalid_request", rejection.body_text())
                .with_request_id(request_id.clone())
        })?;

        value
            .validate()
            .map_err(|errors| validation_error(&errors, &pipe).with_request_id(request_id))?;

        Ok(Self(value))
    }
}

/// Flattens field errors into one 400 problem, ordered by field name.
fn validation_error(errors: &ValidationErrors, pipe: &ObjectIdPipe) -> ApiError {
    let mut details: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let field = field.to_string();
            field_errors.iter().map(move |err| {
                let message = if err.code == OBJECT_ID_CODE {
                    let value = err
                        .params
                        .get("value")
                        .and_then(|v| v.as_str())
                        .unwrap_or_default();
                    pipe.policy()
                        .render(&InvalidObjectId::new(value).with_field(field.clone()))
                } else {
                    err.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("failed {} check", err.code))
                };
                FieldError {
                    field: field.clone(),
                    message,
                }
            })
        })
        .collect();
    details.sort_by(|a, b| a.field.cmp(&b.field));

    tracing::debug!(fields = details.len(), "request validation failed");
    ApiError::bad_request("validation_failed", "Request validation failed").with_details(details)
}
