// crates/graphqlzero-client/src/events.rs
// ============================================================================
// Module: Request Event Logging
// Description: Structured JSON events for GraphQL request handling.
// Purpose: Emit one log line per request without a hard logging dependency.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Each request produces a [`GraphQlRequestEvent`]. Sinks decide where it
//! goes: stderr, an append-only JSON-lines file, memory (tests), or nowhere.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Request outcome classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestOutcome {
    /// `data` returned without errors.
    Ok,
    /// Server answered with a GraphQL `errors` array.
    GraphqlError,
    /// Non-success HTTP status without a GraphQL envelope.
    HttpError,
    /// Request could not be sent or read.
    TransportError,
    /// Response body could not be decoded.
    DecodeError,
}

/// GraphQL request event payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphQlRequestEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Operation name, or `anonymous`.
    pub operation: String,
    /// Endpoint URL.
    pub endpoint: String,
    /// Request outcome.
    pub outcome: RequestOutcome,
    /// Error message when the request failed.
    pub error: Option<String>,
    /// Wall-clock request duration in milliseconds.
    pub duration_ms: u128,
}

/// Inputs for constructing a [`GraphQlRequestEvent`].
#[derive(Debug, Clone)]
pub struct RequestEventParams {
    /// Operation name, or `anonymous`.
    pub operation: String,
    /// Endpoint URL.
    pub endpoint: String,
    /// Request outcome.
    pub outcome: RequestOutcome,
    /// Error message when the request failed.
    pub error: Option<String>,
    /// Wall-clock request duration.
    pub duration: Duration,
}

impl GraphQlRequestEvent {
    /// Creates a new request event stamped with the current time.
    #[must_use]
    pub fn new(params: RequestEventParams) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        Self {
            event: "graphql_request",
            timestamp_ms,
            operation: params.operation,
            endpoint: params.endpoint,
            outcome: params.outcome,
            error: params.error,
            duration_ms: params.duration.as_millis(),
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Sink for request events.
pub trait EventSink: Send + Sync {
    /// Record a request event.
    fn record(&self, event: &GraphQlRequestEvent);
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Event sink that logs JSON lines to stderr.
pub struct StderrEventSink;

impl EventSink for StderrEventSink {
    fn record(&self, event: &GraphQlRequestEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Event sink that appends JSON lines to a file.
pub struct FileEventSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileEventSink {
    /// Opens the event log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl EventSink for FileEventSink {
    fn record(&self, event: &GraphQlRequestEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// Event sink that keeps events in memory.
#[derive(Default)]
pub struct MemoryEventSink {
    /// Recorded events in arrival order.
    events: Mutex<Vec<GraphQlRequestEvent>>,
}

impl MemoryEventSink {
    /// Creates an empty memory sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<GraphQlRequestEvent> {
        self.events.lock().map_or_else(|_| Vec::new(), |events| events.clone())
    }
}

impl EventSink for MemoryEventSink {
    fn record(&self, event: &GraphQlRequestEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

/// No-op event sink.
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn record(&self, _event: &GraphQlRequestEvent) {}
}

// ============================================================================
// SECTION: Tests
// ============================================================================
