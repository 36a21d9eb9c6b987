use std::net::SocketAddr;

use anyhow::Result;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub log_level: String,
    /// Fixed message for rejected ObjectIds; field-templated when unset.
    pub invalid_id_message: Option<String>,
    /// Fields that `POST /v1/objects/check` requires.
    pub required_fields: Vec<String>,
    /// Fields that `POST /v1/objects/check` accepts when present.
    pub optional_fields: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let listen_addr = std::env::var("OIDKIT_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()?;

        let log_level = std::env::var("OIDKIT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let invalid_id_message = std::env::var("OIDKIT_INVALID_ID_MESSAGE")
            .ok()
            .filter(|m| !m.is_empty());

        let required_fields = std::env::var("OIDKIT_REQUIRED_FIELDS")
            .map(|v| split_fields(&v))
            .unwrap_or_else(|_| vec!["id".to_string()]);

        let optional_fields = std::env::var("OIDKIT_OPTIONAL_FIELDS")
            .map(|v| split_fields(&v))
            .unwrap_or_default();

        Ok(Self {
            listen_addr,
            log_level,
            invalid_id_message,
            required_fields,
            optional_fields,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            log_level: "info".to_string(),
            invalid_id_message: None,
            required_fields: vec!["id".to_string()],
            optional_fields: Vec::new(),
        }
    }
}

/// Splits a comma-separated field list, dropping blanks.
fn split_fields(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect()
}
