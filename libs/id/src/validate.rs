//! Hook for `validator`'s derive.
//!
//! ```ignore
//! #[derive(Validate)]
//! struct CreateLink {
//!     #[validate(custom(function = "oidkit_id::validate_object_id"))]
//!     owner_id: String,
//! }
//! ```

use validator::ValidationError;

use crate::codec;

/// Error code attached to rejected fields.
pub const OBJECT_ID_CODE: &str = "object_id";

/// Checks one field value against the ObjectId grammar.
///
/// The rejected input is recorded under the `value` param. No message is
/// set, the caller decides the wording.
pub fn validate_object_id(value: &str) -> Result<(), ValidationError> {
    if codec::is_valid(value) {
        return Ok(());
    }

    let mut err = ValidationError::new(OBJECT_ID_CODE);
    err.add_param("value".into(), &value);
    Err(err)
}
