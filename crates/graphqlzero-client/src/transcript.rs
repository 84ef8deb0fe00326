// crates/graphqlzero-client/src/transcript.rs
// ============================================================================
// Module: Request Transcript
// Description: Append-only record of GraphQL request/response exchanges.
// Purpose: Let test reports include every exchange a client performed.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Every exchange a [`crate::GraphQlClient`] performs is appended here in
//! completion order. Clones share one log, so a client handed to concurrent
//! tasks still produces a single transcript for the test report.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;

use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Types
// ============================================================================

/// One recorded request/response exchange.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptEntry {
    /// One-based sequence number within the transcript.
    pub sequence: u64,
    /// Operation name, or `anonymous`.
    pub operation: String,
    /// Request body as sent.
    pub request: Value,
    /// Response body as received (`null` when none was read).
    pub response: Value,
    /// HTTP status when a response arrived.
    pub status: Option<u16>,
    /// Error message when the exchange failed.
    pub error: Option<String>,
}

/// Shared, cloneable transcript. Clones append to the same log.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    /// Recorded entries in completion order.
    entries: Arc<Mutex<Vec<TranscriptEntry>>>,
}

impl Transcript {
    /// Creates an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an exchange.
    pub fn record(
        &self,
        operation: &str,
        request: Value,
        response: Value,
        status: Option<u16>,
        error: Option<String>,
    ) {
        let Ok(mut guard) = self.entries.lock() else {
            return;
        };
        let sequence = u64::try_from(guard.len()).unwrap_or(u64::MAX).saturating_add(1);
        guard.push(TranscriptEntry {
            sequence,
            operation: operation.to_string(),
            request,
            response,
            status,
            error,
        });
    }

    /// Returns a snapshot of the entries.
    #[must_use]
    pub fn snapshot(&self) -> Vec<TranscriptEntry> {
        self.entries.lock().map_or_else(|_| Vec::new(), |entries| entries.clone())
    }

    /// Returns the number of recorded exchanges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |entries| entries.len())
    }

    /// Returns true when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
