//! Error types and handling for the `AeroAdvisor` application

use thiserror::Error;

/// Main error type for the `AeroAdvisor` application
#[derive(Error, Debug)]
pub enum AeroAdvisorError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Selected airport is not part of the reference directory
    #[error("Unknown airport: {airport_id}")]
    AirportNotFound { airport_id: String },

    /// Advisory service communication errors
    #[error("Advisory service error: {message}")]
    Upstream { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl AeroAdvisorError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new airport lookup error
    pub fn airport_not_found<S: Into<String>>(airport_id: S) -> Self {
        Self::AirportNotFound {
            airport_id: airport_id.into(),
        }
    }

    /// Create a new advisory service error
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AeroAdvisorError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            AeroAdvisorError::AirportNotFound { airport_id } => {
                format!(
                    "Airport '{airport_id}' is not in the reference directory. Run 'aeroadvisor airports' to list known airports."
                )
            }
            AeroAdvisorError::Upstream { .. } => {
                "Unable to reach the advisory service. Please check your internet connection and API key, then try again."
                    .to_string()
            }
            AeroAdvisorError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            AeroAdvisorError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = AeroAdvisorError::config("missing API key");
        assert!(matches!(config_err, AeroAdvisorError::Config { .. }));

        let upstream_err = AeroAdvisorError::upstream("connection failed");
        assert!(matches!(upstream_err, AeroAdvisorError::Upstream { .. }));

        let lookup_err = AeroAdvisorError::airport_not_found("Gwadar (OPGD)");
        assert!(matches!(lookup_err, AeroAdvisorError::AirportNotFound { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = AeroAdvisorError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let upstream_err = AeroAdvisorError::upstream("test");
        assert!(upstream_err.user_message().contains("advisory service"));

        let lookup_err = AeroAdvisorError::airport_not_found("Gwadar (OPGD)");
        assert!(lookup_err.user_message().contains("Gwadar (OPGD)"));

        let validation_err = AeroAdvisorError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let advisor_err: AeroAdvisorError = io_err.into();
        assert!(matches!(advisor_err, AeroAdvisorError::Io { .. }));
    }
}
