//! Error types for tomata.

use thiserror::Error;

/// Errors that can occur in tomata.
#[derive(Debug, Error)]
pub enum TomataError {
    /// Configuration problem (bad file, bad value, unusable environment).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database problem.
    #[error("Database error: {0}")]
    Database(String),

    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TomataError::Config("bad value".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad value");

        let err = TomataError::Database("no such table".to_string());
        assert_eq!(err.to_string(), "Database error: no such table");
    }

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: TomataError = io.into();
        assert!(matches!(err, TomataError::Io(_)));
    }
}
