// system-tests/src/config/error.rs
// ============================================================================
// Module: Suite Configuration Errors
// Description: Error type for environment and harness file configuration.
// Dependencies: thiserror
// ============================================================================

//! Configuration error type.

use thiserror::Error;

/// Configuration errors raised while building [`super::SuiteConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Invalid environment variable value.
    #[error("config env error: {0}")]
    Env(String),
    /// I/O failure while reading the harness file.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}
