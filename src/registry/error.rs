//! Error types and handling
//!
//! Registry operations themselves never fail. These errors cover the edges:
//! configuration, roster files and serialized output.

use thiserror::Error;

use crate::types::{ConfigError, ConfigValidationError};

/// Errors raised while setting up or reporting on a registry
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Roster could not be loaded
    #[error("Roster error: {0}")]
    RosterError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<ConfigError> for RegistryError {
    fn from(error: ConfigError) -> Self {
        RegistryError::ConfigurationError(error.to_string())
    }
}

impl From<ConfigValidationError> for RegistryError {
    fn from(error: ConfigValidationError) -> Self {
        RegistryError::ConfigurationError(error.to_string())
    }
}

impl RegistryError {
    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Create a roster error
    pub fn roster_error(msg: impl Into<String>) -> Self {
        Self::RosterError(msg.into())
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            RegistryError::ConfigurationError(_) => "Configuration",
            RegistryError::RosterError(_) => "Roster",
            RegistryError::IoError(_) => "IO",
            RegistryError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for fallible registry setup and reporting
pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_creation() {
        let error = RegistryError::configuration_error("bad value");
        assert!(matches!(error, RegistryError::ConfigurationError(_)));
        assert_eq!(error.to_string(), "Configuration error: bad value");

        let error = RegistryError::roster_error("missing");
        assert_eq!(error.to_string(), "Roster error: missing");
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: RegistryError = io_error.into();
        assert!(matches!(error, RegistryError::IoError(_)));
        assert_eq!(error.category(), "IO");
    }

    #[test]
    fn test_error_from_config_errors() {
        let error: RegistryError = ConfigValidationError::InvalidTemporaryPassDays(0).into();
        assert_eq!(error.category(), "Configuration");
        assert!(error.to_string().contains("greater than 0"));

        let error: RegistryError = ConfigError::FileNotFound("x.json".to_string()).into();
        assert!(error.to_string().contains("x.json"));
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(RegistryError::configuration_error("x").category(), "Configuration");
        assert_eq!(RegistryError::roster_error("x").category(), "Roster");
        let json_error = serde_json::from_str::<u8>("nope").unwrap_err();
        assert_eq!(RegistryError::from(json_error).category(), "Serialization");
    }
}
