// system-tests/src/gate.rs
// ============================================================================
// Module: Fail-Fast Gate
// Description: Process-wide switch that skips tests after the first failure.
// Purpose: Stop hammering the remote API once a CI run is already red.
// Dependencies: std
// ============================================================================

//! ## Overview
//! With fail-fast enabled, the first failing live test trips the gate and
//! every later test reports itself as skipped, naming that first failure.
//! The gate is shared by all tests in one test binary.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Mutex;
use std::sync::OnceLock;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

// ============================================================================
// SECTION: Gate
// ============================================================================

/// Records the first failure and tells later tests to skip.
#[derive(Debug, Default)]
pub struct FailFastGate {
    /// Whether fail-fast is enabled.
    enabled: bool,
    /// Set once any test fails.
    tripped: AtomicBool,
    /// Name of the first failed test.
    first_failure: Mutex<Option<String>>,
}

impl FailFastGate {
    /// Creates a gate.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    /// Returns the process-wide gate, created from `enabled` on first use.
    pub fn global(enabled: bool) -> &'static Self {
        static GATE: OnceLock<FailFastGate> = OnceLock::new();
        GATE.get_or_init(|| Self::new(enabled))
    }

    /// Records a failed test.
    pub fn record_failure(&self, test: &str) {
        if !self.tripped.swap(true, Ordering::SeqCst)
            && let Ok(mut first) = self.first_failure.lock()
        {
            *first = Some(test.to_string());
        }
    }

    /// Returns the reason to skip, when fail-fast is on and a test has failed.
    #[must_use]
    pub fn skip_reason(&self) -> Option<String> {
        if !self.enabled || !self.tripped.load(Ordering::SeqCst) {
            return None;
        }
        let first = self
            .first_failure
            .lock()
            .ok()
            .and_then(|first| first.clone())
            .unwrap_or_else(|| "an earlier test".to_string());
        Some(format!("fail-fast: skipped after failure in {first}"))
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
