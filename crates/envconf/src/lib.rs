//! Startup configuration resolution from environment variables and mounted
//! secret files.
//!
//! Values are resolved with a fixed fallback precedence:
//!
//! - **Secret files** (`/var/run/secrets`): mounted by a container
//!   orchestrator, named `{ENV}_{NAME}` upper-cased, where `ENV` is the
//!   deployment environment (`dev`, `prod`, ...)
//! - **Environment variables**: consulted when no secret file is present
//!
//! Missing *required* configuration is unrecoverable at startup: each
//! `require_*` operation returns a fatal [`ConfigError`], and the thin
//! [`or_exit`] entry point is the only place that terminates the process.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//!
//! use envconf::{or_exit, ConfigResolver};
//!
//! let resolver = ConfigResolver::new();
//! let listen = resolver.get_or_default("LISTEN_ADDR", ":8080");
//! let api_key = or_exit(resolver.require_config("API_KEY"));
//! let timeout = or_exit(resolver.require_duration("TIMEOUT", Duration::from_secs(30)));
//! ```
//!
//! Every call re-reads the environment and filesystem; nothing is cached, so
//! results always reflect the current process state.

mod duration;
mod env;
mod error;
mod resolver;

pub use env::{Environment, ProcessEnv};
pub use error::{or_exit, ConfigError};
pub use resolver::ConfigResolver;
