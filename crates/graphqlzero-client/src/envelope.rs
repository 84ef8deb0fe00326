// crates/graphqlzero-client/src/envelope.rs
// ============================================================================
// Module: GraphQL Envelope
// Description: Request and response envelopes for GraphQL over HTTP.
// Purpose: Serialize documents with variables and decode `{data, errors}`.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Wire types for the standard GraphQL-over-HTTP envelope. Documents are sent
//! verbatim; the only inspection performed is extracting the operation name so
//! requests can be labelled in logs and transcripts.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Outgoing GraphQL request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    /// GraphQL document text.
    pub query: String,
    /// Operation name extracted from the document, when it has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    /// Variables object, omitted entirely when not supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
}

impl GraphQlRequest {
    /// Builds a request, deriving the operation name from the document.
    #[must_use]
    pub fn new(document: &str, variables: Option<Value>) -> Self {
        Self {
            query: document.to_string(),
            operation_name: operation_name(document),
            variables,
        }
    }
}

/// Incoming GraphQL response envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphQlResponse {
    /// Result data; `None` when absent or `null`.
    #[serde(default)]
    pub data: Option<Value>,
    /// Errors reported by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GraphQlErrorEntry>>,
}

impl GraphQlResponse {
    /// Returns the error entries, empty when none were reported.
    #[must_use]
    pub fn error_entries(&self) -> &[GraphQlErrorEntry] {
        self.errors.as_deref().unwrap_or_default()
    }
}

/// A single entry of the `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQlErrorEntry {
    /// Human-readable error message.
    pub message: String,
    /// Source locations within the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<ErrorLocation>>,
    /// Response path the error applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Value>>,
    /// Server-specific extensions (error codes, stack traces).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

/// Line/column location inside a GraphQL document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorLocation {
    /// One-based line number.
    pub line: u32,
    /// One-based column number.
    pub column: u32,
}

// ============================================================================
// SECTION: Operation Names
// ============================================================================

/// Operation keywords that may precede an operation name.
const OPERATION_KEYWORDS: [&str; 3] = ["query", "mutation", "subscription"];

/// Extracts the operation name of the first definition in a document.
///
/// Returns `None` for shorthand (`{ ... }`) and anonymous operations.
#[must_use]
pub fn operation_name(document: &str) -> Option<String> {
    let body = skip_ignored(document);
    let rest = OPERATION_KEYWORDS.iter().find_map(|keyword| body.strip_prefix(keyword))?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let name: String =
        rest.trim_start().chars().take_while(|c| c.is_ascii_alphanumeric() || *c == '_').collect();
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    Some(name)
}

/// Skips leading whitespace and `#` comment lines.
fn skip_ignored(document: &str) -> &str {
    let mut rest = document.trim_start();
    while let Some(comment) = rest.strip_prefix('#') {
        rest = comment.split_once('\n').map_or("", |(_, tail)| tail).trim_start();
    }
    rest
}

// ============================================================================
// SECTION: Tests
// ============================================================================
