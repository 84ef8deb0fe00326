// crates/graphqlzero-client/src/lib.rs
// ============================================================================
// Module: GraphQLZero Client Library
// Description: Public API surface for the thin GraphQL request client.
// Purpose: Expose the HTTP client, envelope types, errors, and log sinks.
// Dependencies: crate::{client, envelope, error, events, transcript}
// ============================================================================

//! ## Overview
//! A minimal GraphQL-over-HTTP client: a document plus optional variables is
//! POSTed as JSON, the `{data, errors}` envelope is decoded, and a non-empty
//! `errors` array is surfaced as [`GraphQlError::Response`] carrying the first
//! error's message. There is no retry, batching, caching, or schema handling.
//!
//! Every exchange is captured in a [`Transcript`] and reported to an
//! [`EventSink`] as a structured JSON event.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod client;
pub mod envelope;
pub mod error;
pub mod events;
pub mod transcript;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use client::GraphQlClient;
pub use envelope::ErrorLocation;
pub use envelope::GraphQlErrorEntry;
pub use envelope::GraphQlRequest;
pub use envelope::GraphQlResponse;
pub use envelope::operation_name;
pub use error::GraphQlError;
pub use events::EventSink;
pub use events::FileEventSink;
pub use events::GraphQlRequestEvent;
pub use events::MemoryEventSink;
pub use events::NoopEventSink;
pub use events::RequestEventParams;
pub use events::RequestOutcome;
pub use events::StderrEventSink;
pub use transcript::Transcript;
pub use transcript::TranscriptEntry;
