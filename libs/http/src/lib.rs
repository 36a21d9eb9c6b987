//! # oidkit-http
//!
//! Transport adapters over [`oidkit_id`]: they call the codec and turn an
//! [`oidkit_id::InvalidObjectId`] into a `400 Bad Request` problem response.
//!
//! - [`ObjectIdPipe`] validates (`check`) or coerces (`transform`) one value.
//! - [`ObjectIdPath`] / [`ValidObjectIdPath`] do the same for a path parameter.
//! - [`ValidatedJson`] runs `validator` rules on a JSON body.
//!
//! Wording is chosen by [`ErrorMessage`]; the codec never picks it.

pub mod error;
mod extract;
mod message;
mod pipe;

pub use error::{ApiError, FieldError, ProblemDetails};
pub use extract::{ObjectIdPath, RequestId, ValidObjectIdPath, ValidatedJson, REQUEST_ID_HEADER};
pub use message::{ErrorMessage, DEFAULT_MESSAGE};
pub use pipe::{ObjectIdPipe, INVALID_OBJECT_ID};
