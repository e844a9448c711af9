use std::path::PathBuf;
use std::process;

use thiserror::Error;

/// Errors that can occur during configuration resolution
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable unset or empty
    #[error("environment variable '{name}' is not set")]
    MissingVar { name: String },

    /// Environment variable set but not a base-10 integer
    #[error("environment variable '{name}' has invalid integer value '{value}'")]
    InvalidInt { name: String, value: String },

    /// Environment variable set but not a valid duration string
    #[error("environment variable '{name}' has invalid duration value '{value}': {reason}")]
    InvalidDuration {
        name: String,
        value: String,
        reason: String,
    },

    /// Secret file missing or unreadable; callers may fall back
    #[error("failed to read secret file '{path}': {message}")]
    SecretUnreadable { path: PathBuf, message: String },

    /// Required secret missing, unreadable, or empty
    #[error("secret '{name}' not configured")]
    MissingSecret { name: String },

    /// Neither a secret file nor an environment variable fallback present
    #[error("'{name}' not configured")]
    NotConfigured { name: String },
}

impl ConfigError {
    /// Create a missing-variable error
    pub fn missing_var(name: impl Into<String>) -> Self {
        Self::MissingVar { name: name.into() }
    }

    /// Create a missing-secret error
    pub fn missing_secret(name: impl Into<String>) -> Self {
        Self::MissingSecret { name: name.into() }
    }

    /// Whether this error is unrecoverable for the process.
    ///
    /// Only [`ConfigError::SecretUnreadable`] is recoverable: callers may
    /// fall back to an environment variable. Everything else means required
    /// configuration is missing or malformed and the process must not start.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ConfigError::SecretUnreadable { .. })
    }
}

/// Unwrap a resolution result, terminating the process on error.
///
/// The sole exit point of the crate: resolution functions always return
/// errors, so fatal conditions stay testable as error kinds.
pub fn or_exit<T>(result: Result<T, ConfigError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::error!("{err}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_unreadable_is_recoverable() {
        let err = ConfigError::SecretUnreadable {
            path: PathBuf::from("/var/run/secrets/PROD_APIKEY"),
            message: "No such file or directory".to_string(),
        };
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_missing_var_is_fatal() {
        assert!(ConfigError::missing_var("DATABASE_URL").is_fatal());
    }

    #[test]
    fn test_error_messages_name_the_key() {
        let err = ConfigError::missing_var("DATABASE_URL");
        assert_eq!(
            err.to_string(),
            "environment variable 'DATABASE_URL' is not set"
        );

        let err = ConfigError::NotConfigured {
            name: "API_KEY".to_string(),
        };
        assert_eq!(err.to_string(), "'API_KEY' not configured");
    }
}
