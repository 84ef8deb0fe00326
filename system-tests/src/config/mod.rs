// system-tests/src/config/mod.rs
// ============================================================================
// Module: Suite Configuration
// Description: Centralized configuration for the GraphQLZero contract suite.
// Purpose: Provide typed access to endpoint, timeout, and reporting settings.
// Dependencies: serde, thiserror, toml, url
// ============================================================================

//! ## Overview
//! Suite configuration is read from environment variables and an optional
//! TOML harness file, then mapped into one immutable [`SuiteConfig`] shared by
//! every test in the process.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod env;
mod error;
mod harness;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use env::SuiteEnv;
pub use env::SuiteEnvOverrides;
pub use env::read_env_strict;
pub use error::ConfigError;
pub use harness::DEFAULT_ENDPOINT;
pub use harness::DEFAULT_TEST_TIMEOUT;
pub use harness::HarnessFile;
pub use harness::SuiteConfig;
