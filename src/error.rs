//! Error types for model-defaults
//!
//! The rule engine itself is total and never fails. Errors only come from
//! loading configuration and from parsing user-supplied side names; the
//! binary converts them to `anyhow` at its boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Missing required configuration: {field}")]
    Missing { field: String },

    #[error("Failed to parse '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A side name that is neither `t`, `ct` nor (where accepted) `all`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown side '{input}', expected one of: {expected}")]
pub struct ParseSideError {
    pub input: String,
    pub expected: &'static str,
}

impl ParseSideError {
    pub fn new(input: impl Into<String>, expected: &'static str) -> Self {
        Self {
            input: input.into(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_side_error_message() {
        let err = ParseSideError::new("terrorist", "t, ct");
        let msg = err.to_string();
        assert!(msg.contains("terrorist"));
        assert!(msg.contains("t, ct"));
    }

    #[test]
    fn test_parse_error_mentions_path() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ConfigError::Parse {
            path: PathBuf::from("/tmp/DefaultModels.json"),
            source,
        };
        assert!(err.to_string().contains("DefaultModels.json"));
    }
}
