// system-tests/src/config/env.rs
// ============================================================================
// Module: Suite Environment
// Description: Environment-backed overrides for the contract suite.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8 fails closed. Canonical keys are parsed
//! strictly; the short aliases (`DEBUG_TESTS`, `CI`) are set by CI systems
//! and shells with arbitrary values, so any non-false value enables them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use super::ConfigError;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for suite configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteEnv {
    /// GraphQL endpoint URL.
    Endpoint,
    /// Per-test timeout in seconds (positive integer).
    TimeoutSeconds,
    /// Verbose request logging to stderr.
    Debug,
    /// Skip remaining tests after the first failure.
    FailFast,
    /// Artifact run root override.
    RunRoot,
    /// Optional JSON-lines request log path.
    EventLog,
    /// Optional TOML harness file.
    ConfigPath,
}

impl SuiteEnv {
    /// Every key, in resolution order.
    pub const ALL: [Self; 7] = [
        Self::Endpoint,
        Self::TimeoutSeconds,
        Self::Debug,
        Self::FailFast,
        Self::RunRoot,
        Self::EventLog,
        Self::ConfigPath,
    ];

    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Endpoint => "GRAPHQLZERO_SYSTEM_TEST_ENDPOINT",
            Self::TimeoutSeconds => "GRAPHQLZERO_SYSTEM_TEST_TIMEOUT_SEC",
            Self::Debug => "GRAPHQLZERO_SYSTEM_TEST_DEBUG",
            Self::FailFast => "GRAPHQLZERO_SYSTEM_TEST_CI",
            Self::RunRoot => "GRAPHQLZERO_SYSTEM_TEST_RUN_ROOT",
            Self::EventLog => "GRAPHQLZERO_SYSTEM_TEST_EVENT_LOG",
            Self::ConfigPath => "GRAPHQLZERO_SYSTEM_TEST_CONFIG",
        }
    }

    /// Returns the conventional alias honoured when the canonical key is unset.
    #[must_use]
    pub const fn alias(self) -> Option<&'static str> {
        match self {
            Self::Debug => Some("DEBUG_TESTS"),
            Self::FailFast => Some("CI"),
            _ => None,
        }
    }
}

// ============================================================================
// SECTION: Override Types
// ============================================================================

/// Values supplied through the environment. `None` means "not set".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuiteEnvOverrides {
    /// Endpoint URL override.
    pub endpoint: Option<String>,
    /// Per-test timeout override.
    pub timeout: Option<Duration>,
    /// Debug logging override.
    pub debug: Option<bool>,
    /// Fail-fast override.
    pub fail_fast: Option<bool>,
    /// Run root override.
    pub run_root: Option<PathBuf>,
    /// Event log path override.
    pub event_log: Option<PathBuf>,
    /// Harness file path.
    pub config_path: Option<PathBuf>,
}

impl SuiteEnvOverrides {
    /// Loads overrides from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Env`] when a value is not valid UTF-8, is empty,
    /// or fails validation (for example, an invalid timeout or boolean value).
    pub fn load() -> Result<Self, ConfigError> {
        let endpoint = read_env_nonempty(SuiteEnv::Endpoint.as_str())?;
        let timeout = read_env_nonempty(SuiteEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(SuiteEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        let debug = read_flag(SuiteEnv::Debug)?;
        let fail_fast = read_flag(SuiteEnv::FailFast)?;
        let run_root = read_env_nonempty(SuiteEnv::RunRoot.as_str())?.map(PathBuf::from);
        let event_log = read_env_nonempty(SuiteEnv::EventLog.as_str())?.map(PathBuf::from);
        let config_path = read_env_nonempty(SuiteEnv::ConfigPath.as_str())?.map(PathBuf::from);
        Ok(Self {
            endpoint,
            timeout,
            debug,
            fail_fast,
            run_root,
            event_log,
            config_path,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, ConfigError> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string()
            .map(Some)
            .map_err(|_| ConfigError::Env(format!("{name} must be valid UTF-8")))
    })
}

/// Reads an environment variable and rejects empty values.
fn read_env_nonempty(name: &str) -> Result<Option<String>, ConfigError> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => {
            Err(ConfigError::Env(format!("{name} must not be empty")))
        }
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Reads a flag from its canonical key, falling back to the alias.
fn read_flag(key: SuiteEnv) -> Result<Option<bool>, ConfigError> {
    if let Some(value) = read_env_nonempty(key.as_str())? {
        return parse_bool(key.as_str(), &value).map(Some);
    }
    let Some(alias) = key.alias() else {
        return Ok(None);
    };
    Ok(read_env_strict(alias)?.map(|value| alias_truthy(&value)))
}

/// Parses a positive timeout value in seconds.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, ConfigError> {
    let secs: u64 = raw.trim().parse().map_err(|_| {
        ConfigError::Env(format!("{name} must be a positive integer number of seconds"))
    })?;
    if secs == 0 {
        return Err(ConfigError::Env(format!("{name} must be greater than zero")));
    }
    Ok(Duration::from_secs(secs))
}

/// Parses a strict boolean literal.
fn parse_bool(name: &str, raw: &str) -> Result<bool, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
        return Ok(true);
    }
    if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
        return Ok(false);
    }
    Err(ConfigError::Env(format!("{name} must be 1, 0, true, or false")))
}

/// Lenient truthiness for alias variables.
pub(crate) fn alias_truthy(raw: &str) -> bool {
    let trimmed = raw.trim();
    !(trimmed.is_empty()
        || trimmed == "0"
        || trimmed.eq_ignore_ascii_case("false")
        || trimmed.eq_ignore_ascii_case("no")
        || trimmed.eq_ignore_ascii_case("off"))
}
