// system-tests/src/outcome.rs
// ============================================================================
// Module: Outcome Decisions
// Description: Either-outcome combinator for backend-dependent scenarios.
// Purpose: Accept success or rejection explicitly, and record which happened.
// Dependencies: graphqlzero-client, serde, serde_json
// ============================================================================

//! ## Overview
//! Some operations succeed on one backend and fail validation on another.
//! [`OutcomeLog::accept_either`] accepts both, but never silently: the success
//! branch runs hard structural checks, the rejection branch may require a
//! message substring, and every decision is kept for the test summary and
//! written to stderr as an `outcome_decision` JSON line.
//!
//! Only GraphQL-level rejections count as an accepted rejection. Transport,
//! HTTP, and decode failures mean nothing was exercised and fail the test.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use graphqlzero_client::GraphQlError;
use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Which way a soft scenario went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeBranch {
    /// The backend accepted the request and the success checks passed.
    Succeeded,
    /// The backend rejected the request with a GraphQL error.
    Rejected,
    /// The backend behaved differently from the documented expectation.
    Deviated,
}

/// A recorded decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeDecision {
    /// Event identifier.
    pub event: &'static str,
    /// Decision timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Test that made the decision.
    pub test: String,
    /// Scenario label within the test.
    pub scenario: String,
    /// Branch taken.
    pub branch: OutcomeBranch,
    /// Rejection message or deviation detail.
    pub detail: Option<String>,
}

impl OutcomeDecision {
    /// Renders the decision as a one-line summary note.
    #[must_use]
    pub fn note(&self) -> String {
        let branch = match self.branch {
            OutcomeBranch::Succeeded => "accepted success",
            OutcomeBranch::Rejected => "accepted rejection",
            OutcomeBranch::Deviated => "deviation",
        };
        match &self.detail {
            Some(detail) => format!("{}: {branch} ({detail})", self.scenario),
            None => format!("{}: {branch}", self.scenario),
        }
    }
}

/// Result of a soft scenario.
#[derive(Debug)]
pub enum Outcome<T> {
    /// The request succeeded and passed the success checks.
    Accepted(T),
    /// The request was rejected with a GraphQL error.
    Rejected(GraphQlError),
}

impl<T> Outcome<T> {
    /// Returns the accepted value, if any.
    #[must_use]
    pub fn accepted(self) -> Option<T> {
        match self {
            Self::Accepted(value) => Some(value),
            Self::Rejected(_) => None,
        }
    }

    /// Returns true when the request succeeded.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

// ============================================================================
// SECTION: Log
// ============================================================================

/// Per-test record of soft decisions and free-form notes.
#[derive(Debug)]
pub struct OutcomeLog {
    /// Owning test name.
    test: String,
    /// Whether decisions are echoed to stderr.
    echo: bool,
    /// Decisions in order.
    decisions: Mutex<Vec<OutcomeDecision>>,
    /// Free-form notes in order.
    notes: Mutex<Vec<String>>,
}

impl OutcomeLog {
    /// Creates a log that echoes decisions to stderr.
    #[must_use]
    pub fn new(test: impl Into<String>) -> Self {
        Self {
            test: test.into(),
            echo: true,
            decisions: Mutex::new(Vec::new()),
            notes: Mutex::new(Vec::new()),
        }
    }

    /// Creates a log that keeps decisions in memory only.
    #[must_use]
    pub fn quiet(test: impl Into<String>) -> Self {
        Self {
            echo: false,
            ..Self::new(test)
        }
    }

    /// Accepts success or a GraphQL rejection.
    ///
    /// # Errors
    ///
    /// Returns the `on_success` failure, or a message for non-GraphQL errors.
    pub fn accept_either<T, F>(
        &self,
        scenario: &str,
        result: Result<T, GraphQlError>,
        on_success: F,
    ) -> Result<Outcome<T>, String>
    where
        F: FnOnce(&T) -> Result<(), String>,
    {
        self.accept_either_or_rejection(scenario, result, on_success, |_| Ok(()))
    }

    /// Accepts success or a GraphQL rejection that passes `on_rejection`.
    ///
    /// # Errors
    ///
    /// Returns the failing branch check's message, or a message for
    /// non-GraphQL errors.
    pub fn accept_either_or_rejection<T, F, R>(
        &self,
        scenario: &str,
        result: Result<T, GraphQlError>,
        on_success: F,
        on_rejection: R,
    ) -> Result<Outcome<T>, String>
    where
        F: FnOnce(&T) -> Result<(), String>,
        R: FnOnce(&GraphQlError) -> Result<(), String>,
    {
        match result {
            Ok(value) => {
                on_success(&value).map_err(|err| format!("{scenario}: {err}"))?;
                self.record(scenario, OutcomeBranch::Succeeded, None);
                Ok(Outcome::Accepted(value))
            }
            Err(error) if error.is_graphql() => {
                on_rejection(&error).map_err(|err| format!("{scenario}: {err}"))?;
                self.record(scenario, OutcomeBranch::Rejected, Some(error.message()));
                Ok(Outcome::Rejected(error))
            }
            Err(error) => Err(format!("{scenario}: {} failure: {error}", error.kind())),
        }
    }

    /// Records a backend deviation that does not fail the test.
    pub fn note_deviation(&self, scenario: &str, detail: impl Into<String>) {
        self.record(scenario, OutcomeBranch::Deviated, Some(detail.into()));
    }

    /// Adds a free-form summary note.
    pub fn note(&self, note: impl Into<String>) {
        if let Ok(mut notes) = self.notes.lock() {
            notes.push(note.into());
        }
    }

    /// Returns the recorded decisions.
    #[must_use]
    pub fn decisions(&self) -> Vec<OutcomeDecision> {
        self.decisions.lock().map_or_else(|_| Vec::new(), |decisions| decisions.clone())
    }

    /// Returns decision notes followed by free-form notes.
    #[must_use]
    pub fn notes(&self) -> Vec<String> {
        let mut out: Vec<String> = self.decisions().iter().map(OutcomeDecision::note).collect();
        if let Ok(notes) = self.notes.lock() {
            out.extend(notes.iter().cloned());
        }
        out
    }

    /// Stores and optionally echoes a decision.
    fn record(&self, scenario: &str, branch: OutcomeBranch, detail: Option<String>) {
        let decision = OutcomeDecision {
            event: "outcome_decision",
            timestamp_ms: SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis(),
            test: self.test.clone(),
            scenario: scenario.to_string(),
            branch,
            detail,
        };
        if self.echo
            && let Ok(payload) = serde_json::to_string(&decision)
        {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
        if let Ok(mut decisions) = self.decisions.lock() {
            decisions.push(decision);
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
