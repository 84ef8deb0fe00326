// system-tests/src/config/harness.rs
// ============================================================================
// Module: Suite Configuration
// Description: Resolved, validated configuration for the contract suite.
// Purpose: Merge defaults, an optional TOML harness file, and env overrides.
// Dependencies: serde, toml, url
// ============================================================================

//! ## Overview
//! Resolution order is defaults, then the harness file named by
//! `GRAPHQLZERO_SYSTEM_TEST_CONFIG`, then environment overrides. The result is
//! validated once and cached process-wide by [`SuiteConfig::global`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use super::ConfigError;
use super::SuiteEnvOverrides;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Public GraphQLZero endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://graphqlzero.almansi.me/api";
/// Default per-test ceiling.
pub const DEFAULT_TEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Maximum accepted harness file size in bytes.
pub(crate) const MAX_HARNESS_FILE_SIZE: usize = 64 * 1024;

// ============================================================================
// SECTION: Harness File
// ============================================================================

/// Optional TOML harness file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessFile {
    /// GraphQL endpoint URL.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Per-test timeout in seconds.
    #[serde(default)]
    pub timeout_sec: Option<u64>,
    /// Verbose request logging.
    #[serde(default)]
    pub debug: Option<bool>,
    /// Skip remaining tests after the first failure.
    #[serde(default)]
    pub fail_fast: Option<bool>,
    /// Artifact run root.
    #[serde(default)]
    pub run_root: Option<PathBuf>,
    /// JSON-lines request log path.
    #[serde(default)]
    pub event_log: Option<PathBuf>,
}

impl HarnessFile {
    /// Loads a harness file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, exceeds the size
    /// limit, is not UTF-8, or does not parse.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let bytes = fs::read(path)
            .map_err(|err| ConfigError::Io(format!("{}: {err}", path.display())))?;
        if bytes.len() > MAX_HARNESS_FILE_SIZE {
            return Err(ConfigError::Invalid("harness file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("harness file must be utf-8".to_string()))?;
        Self::parse(content)
    }

    /// Parses harness file contents.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))
    }
}

// ============================================================================
// SECTION: Suite Config
// ============================================================================

/// Process-wide suite configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    /// GraphQL endpoint URL.
    pub endpoint: String,
    /// Per-test ceiling, also used as the HTTP request timeout.
    pub test_timeout: Duration,
    /// Verbose request logging to stderr.
    pub debug: bool,
    /// Skip remaining tests after the first failure.
    pub fail_fast: bool,
    /// Artifact run root override.
    pub run_root: Option<PathBuf>,
    /// JSON-lines request log path.
    pub event_log: Option<PathBuf>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            test_timeout: DEFAULT_TEST_TIMEOUT,
            debug: false,
            fail_fast: false,
            run_root: None,
            event_log: None,
        }
    }
}

impl SuiteConfig {
    /// Loads configuration from the environment and optional harness file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when any source is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let env = SuiteEnvOverrides::load()?;
        let file = match &env.config_path {
            Some(path) => HarnessFile::load(path)?,
            None => HarnessFile::default(),
        };
        Self::resolve(file, env)
    }

    /// Merges a harness file and environment overrides over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the merged result fails validation.
    pub fn resolve(file: HarnessFile, env: SuiteEnvOverrides) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let file_timeout = match file.timeout_sec {
            Some(0) => {
                return Err(ConfigError::Invalid("timeout_sec must be greater than zero".to_string()));
            }
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };
        let config = Self {
            endpoint: env.endpoint.or(file.endpoint).unwrap_or(defaults.endpoint),
            test_timeout: env.timeout.or(file_timeout).unwrap_or(defaults.test_timeout),
            debug: env.debug.or(file.debug).unwrap_or(defaults.debug),
            fail_fast: env.fail_fast.or(file.fail_fast).unwrap_or(defaults.fail_fast),
            run_root: env.run_root.or(file.run_root),
            event_log: env.event_log.or(file.event_log),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a non-HTTP(S) endpoint or a zero
    /// timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.endpoint)
            .map_err(|err| ConfigError::Invalid(format!("endpoint {}: {err}", self.endpoint)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "endpoint scheme must be http or https, got {}",
                url.scheme()
            )));
        }
        if url.host_str().is_none() {
            return Err(ConfigError::Invalid("endpoint must include a host".to_string()));
        }
        if self.test_timeout.is_zero() {
            return Err(ConfigError::Invalid("test timeout must be greater than zero".to_string()));
        }
        Ok(())
    }

    /// Returns the process-wide configuration, loading it on first use.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from the first load; it is cached too.
    pub fn global() -> Result<&'static Self, ConfigError> {
        static CONFIG: OnceLock<Result<SuiteConfig, ConfigError>> = OnceLock::new();
        CONFIG.get_or_init(Self::load).as_ref().map_err(Clone::clone)
    }
}
