//! Field rule tables.
//!
//! A [`FieldRules`] maps field names to an ObjectId rule and is built once at
//! startup. [`FieldRules::check`] walks the table over a JSON document, so
//! no per-field code is needed at the call site.

use serde_json::Value;

use crate::{codec, InvalidObjectId, ObjectId};

/// Whether a field must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Missing or `null` is a violation.
    Required,
    /// Missing or `null` is accepted; any other value must be valid.
    Optional,
}

/// Value recorded for a required field that is absent from the document.
pub const MISSING_VALUE: &str = "undefined";

/// One entry of a [`FieldRules`] table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    /// Top-level key looked up in the document.
    pub field: String,

    /// Whether the key must be present.
    pub presence: Presence,
}

/// Table of ObjectId fields to check on a JSON object.
#[derive(Debug, Clone, Default)]
pub struct FieldRules {
    rules: Vec<FieldRule>,
}

impl FieldRules {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field that must hold a valid ObjectId.
    #[must_use]
    pub fn required(mut self, field: impl Into<String>) -> Self {
        self.push(field.into(), Presence::Required);
        self
    }

    /// Adds a field that may be absent but, if present, must be valid.
    #[must_use]
    pub fn optional(mut self, field: impl Into<String>) -> Self {
        self.push(field.into(), Presence::Optional);
        self
    }

    /// Returns the registered rules in insertion order.
    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Checks every rule against `document`, collecting all violations.
    ///
    /// A document that is not a JSON object has no fields, so every
    /// required rule fails with the whole document as the value.
    pub fn check(&self, document: &Value) -> Result<(), Vec<InvalidObjectId>> {
        let errors: Vec<_> = self
            .rules
            .iter()
            .filter_map(|rule| check_rule(rule, document).err())
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Checks the table and returns the parsed ids in rule order.
    ///
    /// Optional fields that are absent yield `None`.
    pub fn coerce(
        &self,
        document: &Value,
    ) -> Result<Vec<(String, Option<ObjectId>)>, Vec<InvalidObjectId>> {
        self.check(document)?;
        Ok(self
            .rules
            .iter()
            .map(|rule| {
                let id = lookup(document, &rule.field)
                    .and_then(Value::as_str)
                    .and_then(|s| codec::parse(s).ok());
                (rule.field.clone(), id)
            })
            .collect())
    }

    fn push(&mut self, field: String, presence: Presence) {
        // Last registration for a field wins.
        self.rules.retain(|r| r.field != field);
        self.rules.push(FieldRule { field, presence });
    }
}

fn check_rule(rule: &FieldRule, document: &Value) -> Result<(), InvalidObjectId> {
    let Some(object) = document.as_object() else {
        return match rule.presence {
            Presence::Required => {
                Err(InvalidObjectId::new(document.to_string()).with_field(&rule.field))
            }
            Presence::Optional => Ok(()),
        };
    };

    match (object.get(&rule.field), rule.presence) {
        (None | Some(Value::Null), Presence::Optional) => Ok(()),
        (None, Presence::Required) => {
            Err(InvalidObjectId::new(MISSING_VALUE).with_field(&rule.field))
        }
        (Some(value), _) => codec::parse_value(&rule.field, value).map(|_| ()),
    }
}

fn lookup<'a>(document: &'a Value, field: &str) -> Option<&'a Value> {
    document.as_object().and_then(|o| o.get(field))
}
