//! Error types for the Pay Raise Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while calculating raises,
//! loading configuration and talking to the storage backends.

use thiserror::Error;

/// The main error type for the Pay Raise Engine.
///
/// Lookups that find nothing return `Option::None` rather than an error;
/// this type only covers conditions the caller has to act on.
///
/// # Example
///
/// ```
/// use payraise_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "currentPay".to_string(),
///     message: "must be greater than zero".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid input 'currentPay': must be greater than zero");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A request field was missing, malformed or out of range.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A user with the same username already exists.
    #[error("Username already taken: {username}")]
    DuplicateUsername {
        /// The username that collided.
        username: String,
    },

    /// A benchmark row for the same industry and year already exists.
    #[error("Benchmark already exists for {industry} in {year}")]
    DuplicateBenchmark {
        /// The industry of the rejected row.
        industry: String,
        /// The year of the rejected row.
        year: i32,
    },

    /// The storage backend failed while executing an operation.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },

    /// The configured storage backend could not be reached.
    #[error("Storage backend unavailable: {message}")]
    BackendUnavailable {
        /// Why the backend could not be used.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for EngineError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                EngineError::BackendUnavailable {
                    message: error.to_string(),
                }
            }
            other => EngineError::Storage {
                message: other.to_string(),
            },
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/payraise.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/payraise.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::invalid_input("mode", "unknown raise mode 'bonus'");
        assert_eq!(
            error.to_string(),
            "Invalid input 'mode': unknown raise mode 'bonus'"
        );
    }

    #[test]
    fn test_duplicate_benchmark_displays_industry_and_year() {
        let error = EngineError::DuplicateBenchmark {
            industry: "Technology".to_string(),
            year: 2025,
        };
        assert_eq!(
            error.to_string(),
            "Benchmark already exists for Technology in 2025"
        );
    }

    #[test]
    fn test_pool_timeout_maps_to_backend_unavailable() {
        let error: EngineError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(error, EngineError::BackendUnavailable { .. }));
    }

    #[test]
    fn test_row_not_found_maps_to_storage() {
        let error: EngineError = sqlx::Error::RowNotFound.into();
        assert!(matches!(error, EngineError::Storage { .. }));
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid() -> EngineResult<()> {
            Err(EngineError::invalid_input("currentPay", "must be positive"))
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
