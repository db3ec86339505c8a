//! Error types for parsing transaction configuration.
//!
//! Building a `BEGIN` command never fails; these errors only come from
//! turning external text into typed configuration.

use thiserror::Error;

/// Result type for configuration parsing.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// An isolation level name that matches no registry member.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown isolation level: {0}")]
pub struct ParseIsolationLevelError(pub String);

/// Errors that can occur while reading a transaction mode configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input was not valid JSON or did not match the record shape.
    #[error("invalid transaction mode config: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Line and column of the offending input, when known.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            ConfigError::Json(e) if e.line() > 0 => Some((e.line(), e.column())),
            ConfigError::Json(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = ParseIsolationLevelError("snapshot".to_string());
        assert_eq!(err.to_string(), "unknown isolation level: snapshot");
    }

    #[test]
    fn test_config_error_position() {
        let err: ConfigError = serde_json::from_str::<serde_json::Value>("{\n  oops")
            .unwrap_err()
            .into();
        assert_eq!(err.position().map(|(line, _)| line), Some(2));
        assert!(err.to_string().starts_with("invalid transaction mode config:"));
    }
}
