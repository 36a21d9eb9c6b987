//! Client-facing wording for rejected ObjectIds.

use oidkit_id::InvalidObjectId;

/// Message used when nothing more specific is configured or known.
pub const DEFAULT_MESSAGE: &str = "Invalid ObjectId";

/// How a rejection is worded for the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ErrorMessage {
    /// `Invalid ObjectId`.
    #[default]
    Default,
    /// A configured message, used verbatim.
    Fixed(String),
    /// `Invalid ObjectId for property "{field}": {value}`.
    ///
    /// Falls back to [`ErrorMessage::Default`] when the field is unknown.
    FieldTemplate,
}

impl ErrorMessage {
    /// A fixed message, or the default when `message` is empty.
    pub fn fixed(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            Self::Default
        } else {
            Self::Fixed(message)
        }
    }

    pub fn render(&self, err: &InvalidObjectId) -> String {
        match (self, err.field.as_deref()) {
            (Self::Fixed(message), _) => message.clone(),
            (Self::FieldTemplate, Some(field)) => {
                format!(r#"Invalid ObjectId for property "{field}": {}"#, err.value)
            }
            (Self::FieldTemplate, None) | (Self::Default, _) => DEFAULT_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ErrorMessage::Default, None, "Invalid ObjectId")]
    #[case(ErrorMessage::Default, Some("owner_id"), "Invalid ObjectId")]
    #[case(ErrorMessage::fixed("owner must be an id"), Some("owner_id"), "owner must be an id")]
    #[case(ErrorMessage::FieldTemplate, None, "Invalid ObjectId")]
    #[case(
        ErrorMessage::FieldTemplate,
        Some("owner_id"),
        r#"Invalid ObjectId for property "owner_id": nope"#
    )]
    fn test_render(
        #[case] policy: ErrorMessage,
        #[case] field: Option<&str>,
        #[case] expected: &str,
    ) {
        let mut err = InvalidObjectId::new("nope");
        if let Some(field) = field {
            err = err.with_field(field);
        }
        assert_eq!(policy.render(&err), expected);
    }

    #[test]
    fn test_empty_fixed_message_is_default() {
        assert_eq!(ErrorMessage::fixed(""), ErrorMessage::Default);
    }

    #[test]
    fn test_whitespace_fixed_message_is_kept() {
        let policy = ErrorMessage::fixed("  ");
        assert_eq!(policy, ErrorMessage::Fixed("  ".to_string()));
        assert_eq!(policy.render(&InvalidObjectId::new("nope")), "  ");
    }
}
