// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for the GraphQLZero contract suites.
// Purpose: Provide the live harness, artifact reporting, and a local stub.
// Dependencies: system-tests, graphqlzero-client, axum
// ============================================================================

//! ## Overview
//! Shared helpers for the contract suites.
//! Invariants:
//! - Every test leaves a summary, even when it panics or is skipped.
//! - Remote responses are untrusted and decoded defensively.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test binaries.")]
