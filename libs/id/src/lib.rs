//! # oidkit-id
//!
//! ObjectId validation and coercion.
//!
//! ## ID Format
//!
//! An ObjectId is a 12-byte value written as 24 hex characters:
//!
//! - `507f1f77bcf86cd799439011`
//! - `507F1F77BCF86CD799439011` (accepted, canonicalized to lowercase)
//!
//! ## Operations
//!
//! - [`is_valid`] answers whether a string is a well-formed ObjectId and
//!   never fails.
//! - [`parse`] turns a well-formed string into an [`ObjectId`] or returns
//!   [`InvalidObjectId`] carrying the offending value.
//!
//! Mapping a failure to a transport response is left to the caller.

mod codec;
mod error;
mod object_id;
mod rules;
mod validate;

pub use codec::{is_valid, is_valid_opt, is_valid_value, parse, parse_field, parse_value};
pub use error::InvalidObjectId;
pub use object_id::ObjectId;
pub use rules::{FieldRule, FieldRules, Presence, MISSING_VALUE};
pub use validate::{validate_object_id, OBJECT_ID_CODE};
