//! Configuration errors

use serde_json::Value;

use super::effective::is_secret_key;

/// Stable error classification, for callers that match on kind only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidConfigField,
    IncompleteFieldGroup,
    Io,
    Parse,
}

/// Configuration errors
///
/// None of these are retryable: the input is malformed and has to be
/// corrected by the caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A recognized field has the wrong type or an undeclared enum value.
    #[error("Invalid config field '{path}': expected {expected}, received {received}")]
    InvalidConfigField {
        path: String,
        expected: String,
        received: Value,
    },

    /// Part of an all-or-nothing field group was supplied.
    #[error("Incomplete field group '{group}': missing {}", .missing.join(", "))]
    IncompleteFieldGroup { group: String, missing: Vec<String> },

    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl ConfigError {
    /// Build an `InvalidConfigField`, hiding the received value of secret fields.
    pub fn invalid_field(path: impl Into<String>, expected: impl Into<String>, received: Value) -> Self {
        let path = path.into();
        let leaf = path.rsplit('.').next().unwrap_or_default();
        let received = if is_secret_key(leaf) {
            Value::String("[REDACTED]".to_string())
        } else {
            received
        };
        Self::InvalidConfigField {
            path,
            expected: expected.into(),
            received,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidConfigField { .. } => ErrorKind::InvalidConfigField,
            Self::IncompleteFieldGroup { .. } => ErrorKind::IncompleteFieldGroup,
            Self::Io(_) => ErrorKind::Io,
            Self::Parse(_) => ErrorKind::Parse,
        }
    }

    /// Offending field path, for `InvalidConfigField`.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::InvalidConfigField { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Missing sibling paths, for `IncompleteFieldGroup`.
    pub fn missing_fields(&self) -> &[String] {
        match self {
            Self::IncompleteFieldGroup { missing, .. } => missing,
            _ => &[],
        }
    }
}
