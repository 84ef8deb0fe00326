// crates/graphqlzero-client/src/error.rs
// ============================================================================
// Module: GraphQL Client Errors
// Description: Error taxonomy for GraphQL requests over HTTP.
// Purpose: Separate transport, HTTP, decode, and GraphQL-level failures.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! A request fails in exactly one of these ways. Only
//! [`GraphQlError::Response`] means the server understood the request and
//! answered with an `errors` array; its message is the first entry's message.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::envelope::GraphQlErrorEntry;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// GraphQL request errors.
#[derive(Debug, Error)]
pub enum GraphQlError {
    /// The underlying HTTP client could not be constructed.
    #[error("graphql client build failed: {0}")]
    Build(String),
    /// The request body or its variables could not be serialized.
    #[error("graphql encode error: {0}")]
    Encode(String),
    /// The request could not be sent or the body could not be read.
    #[error("graphql transport error: {0}")]
    Transport(String),
    /// Non-success HTTP status without a GraphQL error envelope.
    #[error("graphql http status {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for logging.
        body: String,
    },
    /// The body was not a GraphQL envelope, or `data` did not decode.
    #[error("graphql decode error: {0}")]
    Decode(String),
    /// The server answered with a non-empty `errors` array.
    #[error("{message}")]
    Response {
        /// Message of the first error entry.
        message: String,
        /// All error entries in server order.
        errors: Vec<GraphQlErrorEntry>,
    },
    /// The envelope carried neither `data` nor `errors`.
    #[error("graphql response carried neither data nor errors")]
    MissingData,
}

impl GraphQlError {
    /// Builds a response error from a non-empty list of entries.
    ///
    /// Returns `None` when `errors` is empty.
    #[must_use]
    pub fn from_entries(errors: Vec<GraphQlErrorEntry>) -> Option<Self> {
        let message = errors.first()?.message.clone();
        Some(Self::Response {
            message,
            errors,
        })
    }

    /// Returns the human-readable message used in assertions and logs.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Response {
                message, ..
            } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Returns true when the message contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.message().contains(needle)
    }

    /// Returns true when any GraphQL error entry contains `needle`.
    #[must_use]
    pub fn any_entry_contains(&self, needle: &str) -> bool {
        self.entries().iter().any(|entry| entry.message.contains(needle))
    }

    /// Returns the GraphQL error entries, empty for non-GraphQL failures.
    #[must_use]
    pub fn entries(&self) -> &[GraphQlErrorEntry] {
        match self {
            Self::Response {
                errors, ..
            } => errors,
            _ => &[],
        }
    }

    /// Returns true when the server answered with GraphQL errors.
    #[must_use]
    pub const fn is_graphql(&self) -> bool {
        matches!(self, Self::Response { .. })
    }

    /// Returns a stable label for the failure kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Build(_) => "build",
            Self::Encode(_) => "encode",
            Self::Transport(_) => "transport",
            Self::Http {
                ..
            } => "http",
            Self::Decode(_) => "decode",
            Self::Response {
                ..
            } => "graphql",
            Self::MissingData => "missing_data",
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
