//! Grammar check and coercion from the text form.
//!
//! A string is a valid ObjectId iff it is exactly 24 ASCII hex digits, in
//! either case. Nothing in this module panics or performs I/O.

use serde_json::Value;

use crate::{InvalidObjectId, ObjectId};

/// Returns true if `candidate` is a well-formed ObjectId string.
pub fn is_valid(candidate: &str) -> bool {
    candidate.len() == ObjectId::HEX_LEN && candidate.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Like [`is_valid`], treating a missing value as invalid.
pub fn is_valid_opt(candidate: Option<&str>) -> bool {
    candidate.is_some_and(is_valid)
}

/// Like [`is_valid`] for an arbitrary JSON value.
///
/// Only strings can be valid; `null`, numbers, booleans, arrays and objects
/// are simply invalid.
pub fn is_valid_value(candidate: &Value) -> bool {
    candidate.as_str().is_some_and(is_valid)
}

/// Converts a well-formed string into an [`ObjectId`].
pub fn parse(candidate: &str) -> Result<ObjectId, InvalidObjectId> {
    if !is_valid(candidate) {
        return Err(InvalidObjectId::new(candidate));
    }

    let mut bytes = [0u8; ObjectId::LEN];
    hex::decode_to_slice(candidate, &mut bytes).map_err(|_| InvalidObjectId::new(candidate))?;
    Ok(ObjectId::from_bytes(bytes))
}

/// Like [`parse`], recording `field` on the error.
pub fn parse_field(field: &str, candidate: &str) -> Result<ObjectId, InvalidObjectId> {
    parse(candidate).map_err(|e| e.with_field(field))
}

/// Like [`parse_field`] for an arbitrary JSON value.
pub fn parse_value(field: &str, candidate: &Value) -> Result<ObjectId, InvalidObjectId> {
    match candidate.as_str() {
        Some(s) => parse_field(field, s),
        None => Err(InvalidObjectId::new(candidate.to_string()).with_field(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("507f1f77bcf86cd799439011", true)]
    #[case("507F1F77BCF86CD799439011", true)]
    #[case("000000000000000000000000", true)]
    #[case("not-an-id", false)]
    #[case("", false)]
    #[case("507f1f77bcf86cd79943901", false)]
    #[case("507f1f77bcf86cd7994390111", false)]
    #[case("507f1f77bcf86cd79943901g", false)]
    #[case("507f1f77bcf86cd79943901 ", false)]
    #[case("aaaaaaaaaaaa", false)]
    #[case("ééééééééééää", false)]
    fn test_is_valid(#[case] candidate: &str, #[case] expected: bool) {
        assert_eq!(is_valid(candidate), expected);
    }

    #[test]
    fn test_is_valid_opt() {
        assert!(!is_valid_opt(None));
        assert!(!is_valid_opt(Some("")));
        assert!(is_valid_opt(Some("507f1f77bcf86cd799439011")));
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!(12))]
    #[case(json!(true))]
    #[case(json!(["507f1f77bcf86cd799439011"]))]
    #[case(json!({"id": "507f1f77bcf86cd799439011"}))]
    #[case(json!(""))]
    fn test_is_valid_value_rejects(#[case] candidate: Value) {
        assert!(!is_valid_value(&candidate));
    }

    #[test]
    fn test_is_valid_value_accepts_string() {
        assert!(is_valid_value(&json!("507f1f77bcf86cd799439011")));
    }

    #[test]
    fn test_parse_valid() {
        let id = parse("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(id.to_string(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn test_parse_uppercase_canonicalizes() {
        let id = parse("507F1F77BCF86CD799439011").unwrap();
        assert_eq!(id.to_string(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn test_parse_invalid() {
        let err = parse("not-an-id").unwrap_err();
        assert_eq!(err, InvalidObjectId::new("not-an-id"));
        assert!(err.field.is_none());
    }

    #[test]
    fn test_parse_field_records_field() {
        let err = parse_field("owner_id", "nope").unwrap_err();
        assert_eq!(err.field.as_deref(), Some("owner_id"));
        assert_eq!(err.value, "nope");
    }

    #[test]
    fn test_parse_value_non_string() {
        let err = parse_value("owner_id", &json!(null)).unwrap_err();
        assert_eq!(err.value, "null");
        assert_eq!(err.field.as_deref(), Some("owner_id"));
    }

    proptest! {
        #[test]
        fn prop_wrong_length_is_invalid(s in ".*") {
            prop_assume!(s.len() != ObjectId::HEX_LEN);
            prop_assert!(!is_valid(&s));
        }

        #[test]
        fn prop_hex_of_right_length_is_valid(s in "[0-9a-fA-F]{24}") {
            prop_assert!(is_valid(&s));
        }

        #[test]
        fn prop_one_non_hex_char_is_invalid(
            s in "[0-9a-f]{23}",
            pos in 0usize..24,
            bad in "[g-zG-Z_\\-. ]",
        ) {
            let mut candidate = s.clone();
            candidate.insert_str(pos, &bad);
            prop_assert!(!is_valid(&candidate));
        }

        #[test]
        fn prop_parse_restringifies_lowercase(s in "[0-9a-fA-F]{24}") {
            let id = parse(&s).unwrap();
            prop_assert_eq!(id.to_string(), s.to_lowercase());
        }

        #[test]
        fn prop_is_valid_never_panics(s in "\\PC*") {
            let _ = is_valid(&s);
            let _ = parse(&s);
        }
    }
}
