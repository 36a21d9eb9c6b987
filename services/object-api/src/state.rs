//! Shared application state.

use std::sync::Arc;

use oidkit_http::{ErrorMessage, ObjectIdPipe};
use oidkit_id::FieldRules;

use crate::config::Config;

#[derive(Debug, Clone)]
pub struct AppState {
    pipe: ObjectIdPipe,
    rules: Arc<FieldRules>,
}

impl AppState {
    pub fn new(pipe: ObjectIdPipe, rules: FieldRules) -> Self {
        Self {
            pipe,
            rules: Arc::new(rules),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let pipe = match &config.invalid_id_message {
            Some(message) => ObjectIdPipe::with_message(message.clone()),
            None => ObjectIdPipe::with_policy(ErrorMessage::FieldTemplate),
        };

        let rules = config
            .required_fields
            .iter()
            .fold(FieldRules::new(), |rules, field| rules.required(field.as_str()));
        let rules = config
            .optional_fields
            .iter()
            .fold(rules, |rules, field| rules.optional(field.as_str()));

        Self::new(pipe, rules)
    }

    pub fn pipe(&self) -> &ObjectIdPipe {
        &self.pipe
    }

    pub fn rules(&self) -> &FieldRules {
        &self.rules
    }
}
