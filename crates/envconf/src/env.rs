//! Environment variable access
//!
//! Resolution logic never touches `std::env` directly; it goes through the
//! [`Environment`] trait so tests can substitute an in-memory mapping
//! instead of mutating process-wide state.

use std::collections::HashMap;

/// Key-value lookup over environment variables.
pub trait Environment {
    /// Return the value of `name`, or `None` if unset.
    ///
    /// An empty value is reported as-is; callers decide whether empty counts
    /// as unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
