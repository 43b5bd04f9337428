//! Error types for galaxy requests.
//!
//! Layout itself never fails: placement exhaustion is absorbed by the fallback
//! ring. Errors only come from decoding a request or from a config whose
//! geometry cannot hold the layout invariants.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalaxyError {
    #[error("invalid galaxy request: {0}")]
    Request(#[from] serde_json::Error),

    #[error("invalid layout config: {field} {reason}")]
    Config { field: &'static str, reason: String },
}

impl GalaxyError {
    pub fn config(field: &'static str, reason: impl Into<String>) -> Self {
        GalaxyError::Config {
            field,
            reason: reason.into(),
        }
    }

    /// Short machine-readable tag for the front-end.
    pub fn kind(&self) -> &'static str {
        match self {
            GalaxyError::Request(_) => "request",
            GalaxyError::Config { .. } => "config",
        }
    }
}

/// Failure reported by a lexical source. Callers treat it as "no related words".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("word '{0}' not found")]
    NotFound(String),

    #[error("lexical source unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = GalaxyError::config("max_attempts", "must be at least 1");
        assert_eq!(err.to_string(), "invalid layout config: max_attempts must be at least 1");
        assert_eq!(err.kind(), "config");
    }

    #[test]
    fn test_request_error_from_json() {
        let err: GalaxyError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert_eq!(err.kind(), "request");
        assert!(err.to_string().starts_with("invalid galaxy request:"));
    }
}
