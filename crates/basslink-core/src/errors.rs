//! Unified error system for BassLink core
//!
//! A single error type shared by every BassLink crate. Denied access is not an
//! error; these variants only cover configuration, storage and parsing faults.

use serde::{Deserialize, Serialize};

/// Unified error type for all BassLink operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum BassLinkError {
    /// Invalid input
    #[error("Invalid: {message}")]
    Invalid {
        /// Error message describing the invalid input
        message: String,
    },

    /// Storage operation failed
    #[error("Storage error: {message}")]
    Storage {
        /// Error message describing the storage failure
        message: String,
    },

    /// Configuration could not be loaded or failed validation
    #[error("Config error: {message}")]
    Config {
        /// Error message describing the configuration problem
        message: String,
    },
}

impl BassLinkError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Standard Result type for BassLink operations
pub type Result<T> = std::result::Result<T, BassLinkError>;

impl From<toml::de::Error> for BassLinkError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = BassLinkError::invalid("test message");
        assert!(matches!(err, BassLinkError::Invalid { .. }));
        assert_eq!(err.to_string(), "Invalid: test message");
    }

    #[test]
    fn test_storage_error_display() {
        let err = BassLinkError::storage("tab storage unavailable");
        assert_eq!(err.to_string(), "Storage error: tab storage unavailable");
    }

    #[test]
    fn test_toml_error_becomes_config_error() {
        let parse = toml::from_str::<toml::Value>("= broken");
        let err = BassLinkError::from(parse.unwrap_err());
        assert!(matches!(err, BassLinkError::Config { .. }));
    }
}
