//! Configuration resolution with fallback precedence
//!
//! Secrets are mounted files named `{ENV}_{NAME}` upper-cased, where `ENV`
//! is the deployment environment prefix (`dev`, `prod`, ...). The secret
//! store takes priority over environment variables; absence of a required
//! value in both is fatal.
//!
//! An explicitly-set-but-empty variable is treated the same as unset
//! everywhere. `ENV` itself must be set before any secret filename is
//! constructed.

use std::path::PathBuf;
use std::time::Duration;

use crate::duration;
use crate::env::{Environment, ProcessEnv};
use crate::error::ConfigError;

/// Directory where the orchestrator mounts secret files
const DEFAULT_SECRETS_DIR: &str = "/var/run/secrets";

/// Environment variable holding the deployment environment prefix
const ENV_KEY: &str = "ENV";

/// Resolves startup configuration from the environment and mounted secrets.
///
/// Stateless: every call re-reads the environment and filesystem, so results
/// always reflect the current process state.
#[derive(Debug)]
pub struct ConfigResolver<E = ProcessEnv> {
    env: E,
    secrets_dir: PathBuf,
}

impl ConfigResolver<ProcessEnv> {
    /// Create a resolver over the real process environment
    pub fn new() -> Self {
        Self::with_env(ProcessEnv)
    }
}

impl Default for ConfigResolver<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Environment> ConfigResolver<E> {
    /// Create a resolver over a custom environment source
    pub fn with_env(env: E) -> Self {
        Self {
            env,
            secrets_dir: PathBuf::from(DEFAULT_SECRETS_DIR),
        }
    }

    /// Override the secrets directory
    pub fn with_secrets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.secrets_dir = dir.into();
        self
    }

    /// Look up an environment variable, treating empty as unset
    fn lookup(&self, name: &str) -> Option<String> {
        self.env.var(name).filter(|v| !v.is_empty())
    }

    /// Return the value of environment variable `name` if set and non-empty,
    /// else `default`.
    pub fn get_or_default(&self, name: &str, default: &str) -> String {
        self.lookup(name)
            .unwrap_or_else(|| default.to_string())
    }

    /// Return the value of environment variable `name`, failing if it is
    /// unset or empty.
    pub fn require_string(&self, name: &str) -> Result<String, ConfigError> {
        self.lookup(name)
            .ok_or_else(|| ConfigError::missing_var(name))
    }

    /// Return environment variable `name` parsed as a base-10 integer.
    ///
    /// Unset yields `default`; a set-but-unparseable value is an error.
    pub fn require_int(&self, name: &str, default: i64) -> Result<i64, ConfigError> {
        match self.lookup(name) {
            None => Ok(default),
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidInt {
                name: name.to_string(),
                value,
            }),
        }
    }

    /// Return environment variable `name` parsed as a duration string
    /// (`"5s"`, `"2h30m"`).
    ///
    /// Unset yields `default`; a set-but-unparseable value is an error.
    pub fn require_duration(&self, name: &str, default: Duration) -> Result<Duration, ConfigError> {
        match self.lookup(name) {
            None => Ok(default),
            Some(value) => {
                duration::parse(&value).map_err(|reason| ConfigError::InvalidDuration {
                    name: name.to_string(),
                    value,
                    reason,
                })
            }
        }
    }

    /// Path of the secret file for `name`: `secrets_dir/{ENV}_{name}`
    /// upper-cased. Fails if `ENV` is unset.
    fn secret_path(&self, name: &str) -> Result<PathBuf, ConfigError> {
        let prefix = self.require_string(ENV_KEY)?;
        let file = format!("{prefix}_{name}").to_uppercase();
        Ok(self.secrets_dir.join(file))
    }

    /// Read the secret file for `name` and return its raw content.
    ///
    /// A missing or unreadable file is a recoverable
    /// [`ConfigError::SecretUnreadable`]; a missing `ENV` variable is fatal.
    pub fn read_secret(&self, name: &str) -> Result<String, ConfigError> {
        let path = self.secret_path(name)?;
        tracing::debug!(secret = name, path = %path.display(), "reading secret");
        std::fs::read_to_string(&path).map_err(|e| ConfigError::SecretUnreadable {
            path,
            message: e.to_string(),
        })
    }

    /// Read the secret file for `name`, trimming surrounding whitespace
    pub fn read_secret_trimmed(&self, name: &str) -> Result<String, ConfigError> {
        self.read_secret(name).map(|s| s.trim().to_string())
    }

    /// Read the secret for `name`, failing if it is unreadable or empty
    pub fn require_secret(&self, name: &str) -> Result<String, ConfigError> {
        match self.read_secret(name) {
            Ok(secret) if !secret.is_empty() => Ok(secret),
            Err(err) if err.is_fatal() => Err(err),
            _ => Err(ConfigError::missing_secret(name)),
        }
    }

    /// Resolve `name` with fallback precedence: secret file first, then the
    /// plain environment variable.
    ///
    /// A present, non-empty secret wins even when the environment variable
    /// is also set. Absence of both is an error.
    pub fn require_config(&self, name: &str) -> Result<String, ConfigError> {
        match self.read_secret(name) {
            Ok(secret) if !secret.is_empty() => return Ok(secret),
            Err(err) if err.is_fatal() => return Err(err),
            _ => {
                tracing::debug!(key = name, "secret not found, falling back to environment");
            }
        }
        self.lookup(name).ok_or_else(|| ConfigError::NotConfigured {
            name: name.to_string(),
        })
    }
}
