// system-tests/src/lib.rs
// ============================================================================
// Module: GraphQLZero System Tests Library
// Description: Shared configuration and helpers for the contract suite.
// Purpose: Provide typed API access, fixtures, and assertion tooling.
// Dependencies: graphqlzero-client, serde, tokio
// ============================================================================

//! ## Overview
//! This crate hosts the shared pieces used by the test binaries in
//! `system-tests/tests`: configuration, the typed users/albums API, unique
//! fixtures, contract checks, the either-outcome combinator, concurrent
//! fan-out, the fail-fast gate, and mutation target provisioning.
//! The remote API is untrusted; every response is decoded defensively and
//! checked explicitly.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod api;
pub mod checks;
pub mod config;
pub mod documents;
pub mod fanout;
pub mod fixtures;
pub mod gate;
pub mod models;
pub mod outcome;
pub mod provision;
