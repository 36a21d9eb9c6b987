//! Request pipes: validate or coerce a single incoming value.

use oidkit_id::{InvalidObjectId, ObjectId};

use crate::error::{ApiError, FieldError};
use crate::message::ErrorMessage;

/// Problem code for a rejected ObjectId.
pub const INVALID_OBJECT_ID: &str = "invalid_object_id";

/// Validates or coerces incoming ObjectId strings, rejecting bad input with
/// a 400 problem worded by the configured [`ErrorMessage`].
///
/// Install one as a request extension to change the wording used by the
/// extractors in this crate:
///
/// ```ignore
/// Router::new()
///     .route("/objects/{object_id}", get(handler))
///     .layer(Extension(ObjectIdPipe::with_message("Unknown object")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjectIdPipe {
    message: ErrorMessage,
}

impl ObjectIdPipe {
    /// A pipe using the generic `Invalid ObjectId` message.
    pub fn new() -> Self {
        Self::default()
    }

    /// A pipe that always answers with `message`.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self::with_policy(ErrorMessage::fixed(message))
    }

    pub fn with_policy(message: ErrorMessage) -> Self {
        Self { message }
    }

    pub fn policy(&self) -> &ErrorMessage {
        &self.message
    }

    /// Passes a valid value through unchanged.
    pub fn check(&self, value: &str) -> Result<String, ApiError> {
        if oidkit_id::is_valid(value) {
            Ok(value.to_string())
        } else {
            Err(self.reject(&InvalidObjectId::new(value)))
        }
    }

    /// Like [`ObjectIdPipe::check`], naming the field in the rejection.
    pub fn check_field(&self, field: &str, value: &str) -> Result<String, ApiError> {
        if oidkit_id::is_valid(value) {
            Ok(value.to_string())
        } else {
            Err(self.reject(&InvalidObjectId::new(value).with_field(field)))
        }
    }

    /// Converts a valid value into an [`ObjectId`].
    pub fn transform(&self, value: &str) -> Result<ObjectId, ApiError> {
        oidkit_id::parse(value).map_err(|e| self.reject(&e))
    }

    /// Like [`ObjectIdPipe::transform`], naming the field in the rejection.
    pub fn transform_field(&self, field: &str, value: &str) -> Result<ObjectId, ApiError> {
        oidkit_id::parse_field(field, value).map_err(|e| self.reject(&e))
    }

    /// Maps one rejected value to a 400 problem.
    pub fn reject(&self, err: &InvalidObjectId) -> ApiError {
        tracing::debug!(field = ?err.field, value = %err.value, "rejected ObjectId");
        let mut api_err = ApiError::bad_request(INVALID_OBJECT_ID, self.message.render(err));
        if let Some(field) = &err.field {
            api_err = api_err.with_details(vec![FieldError {
                field: field.clone(),
                message: self.message.render(err),
            }]);
        }
        api_err
    }

    /// Maps several rejected values to a single 400 problem with one detail
    /// per field.
    pub fn reject_all(&self, errors: &[InvalidObjectId]) -> ApiError {
        match errors {
            [single] => self.reject(single),
            _ => {
                tracing::debug!(count = errors.len(), "rejected ObjectIds");
                let details = errors
                    .iter()
                    .map(|err| FieldError {
                        field: err.field.clone().unwrap_or_default(),
                        message: self.message.render(err),
                    })
                    .collect();
                ApiError::bad_request(INVALID_OBJECT_ID, "One or more ObjectIds are invalid")
                    .with_details(details)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    const VALID: &str = "507f1f77bcf86cd799439011";

    #[test]
    fn test_check_passes_value_through() {
        let pipe = ObjectIdPipe::new();
        assert_eq!(pipe.check("507F1F77BCF86CD799439011").unwrap(), "507F1F77BCF86CD799439011");
    }

    #[test]
    fn test_check_rejects_with_default_message() {
        let err = ObjectIdPipe::new().check("not-an-id").unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.problem.code, INVALID_OBJECT_ID);
        assert_eq!(err.detail(), "Invalid ObjectId");
        assert!(err.problem.details.is_none());
    }

    #[test]
    fn test_configured_message() {
        let err = ObjectIdPipe::with_message("Bad owner").transform("nope").unwrap_err();
        assert_eq!(err.detail(), "Bad owner");
    }

    #[test]
    fn test_transform() {
        let id = ObjectIdPipe::new().transform(VALID).unwrap();
        assert_eq!(id.to_string(), VALID);
    }

    #[test]
    fn test_transform_field_templated() {
        let pipe = ObjectIdPipe::with_policy(ErrorMessage::FieldTemplate);
        let err = pipe.transform_field("owner_id", "nope").unwrap_err();
        assert_eq!(err.detail(), r#"Invalid ObjectId for property "owner_id": nope"#);
        assert_eq!(
            err.problem.details.as_deref(),
            Some(
                &[FieldError {
                    field: "owner_id".to_string(),
                    message: r#"Invalid ObjectId for property "owner_id": nope"#.to_string(),
                }][..]
            )
        );
    }

    #[test]
    fn test_check_field_valid() {
        let pipe = ObjectIdPipe::new();
        assert_eq!(pipe.check_field("owner_id", VALID).unwrap(), VALID);
    }

    #[test]
    fn test_reject_all() {
        let pipe = ObjectIdPipe::with_policy(ErrorMessage::FieldTemplate);
        let errors = vec![
            InvalidObjectId::new("a").with_field("first"),
            InvalidObjectId::new("b").with_field("second"),
        ];
        let err = pipe.reject_all(&errors);
        let details = err.problem.details.unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details[1].field, "second");
        assert_eq!(details[1].message, r#"Invalid ObjectId for property "second": b"#);
    }
}
