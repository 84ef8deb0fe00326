// system-tests/src/fanout.rs
// ============================================================================
// Module: Concurrent Fan-Out
// Description: Run independent requests in parallel on a tokio JoinSet.
// Purpose: Provide settle-all and all-or-nothing joins for concurrency tests.
// Dependencies: graphqlzero-client, thiserror, tokio
// ============================================================================

//! ## Overview
//! [`settle_all`] waits for every request and returns each outcome in input
//! order. [`join_all_ok`] fails on the first error to complete and aborts the
//! rest when the set is dropped.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::future::Future;
use std::pin::Pin;

use graphqlzero_client::GraphQlError;
use thiserror::Error;
use tokio::task::JoinSet;

// ============================================================================
// SECTION: Types
// ============================================================================

/// A boxed request future suitable for heterogeneous fan-out.
pub type BoxedRequest<T> = Pin<Box<dyn Future<Output = Result<T, GraphQlError>> + Send>>;

/// Fan-out failures.
#[derive(Debug, Error)]
pub enum FanOutError {
    /// A request returned an error.
    #[error("request {index} failed: {source}")]
    Request {
        /// Input position of the request.
        index: usize,
        /// Request error.
        #[source]
        source: GraphQlError,
    },
    /// A task panicked or was cancelled.
    #[error("request task did not complete: {0}")]
    Join(String),
}

// ============================================================================
// SECTION: Joins
// ============================================================================

/// Runs every request and returns their outcomes in input order.
pub async fn settle_all<T, F, I>(requests: I) -> Vec<Result<T, FanOutError>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, GraphQlError>> + Send + 'static,
    T: Send + 'static,
{
    let mut joins = spawn_indexed(requests);
    let mut slots: Vec<Option<Result<T, FanOutError>>> = (0..joins.len()).map(|_| None).collect();
    let mut orphaned = Vec::new();
    while let Some(joined) = joins.join_next().await {
        match joined {
            Ok((index, result)) => {
                if let Some(slot) = slots.get_mut(index) {
                    *slot = Some(result.map_err(|source| FanOutError::Request {
                        index,
                        source,
                    }));
                }
            }
            Err(err) => orphaned.push(err.to_string()),
        }
    }
    let mut orphaned = orphaned.into_iter();
    slots
        .into_iter()
        .map(|slot| {
            slot.unwrap_or_else(|| {
                Err(FanOutError::Join(orphaned.next().unwrap_or_else(|| "task lost".to_string())))
            })
        })
        .collect()
}

/// Runs every request and returns all values, or the first error to occur.
///
/// # Errors
///
/// Returns [`FanOutError`] for the first failed or panicked request.
pub async fn join_all_ok<T, F, I>(requests: I) -> Result<Vec<T>, FanOutError>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, GraphQlError>> + Send + 'static,
    T: Send + 'static,
{
    let mut joins = spawn_indexed(requests);
    let mut slots: Vec<Option<T>> = (0..joins.len()).map(|_| None).collect();
    while let Some(joined) = joins.join_next().await {
        let (index, result) = joined.map_err(|err| FanOutError::Join(err.to_string()))?;
        let value = result.map_err(|source| FanOutError::Request {
            index,
            source,
        })?;
        if let Some(slot) = slots.get_mut(index) {
            *slot = Some(value);
        }
    }
    slots
        .into_iter()
        .map(|slot| slot.ok_or_else(|| FanOutError::Join("task lost".to_string())))
        .collect()
}

/// Counts fulfilled outcomes.
#[must_use]
pub fn fulfilled_count<T>(outcomes: &[Result<T, FanOutError>]) -> usize {
    outcomes.iter().filter(|outcome| outcome.is_ok()).count()
}

/// Spawns each request tagged with its input position.
fn spawn_indexed<T, F, I>(requests: I) -> JoinSet<(usize, Result<T, GraphQlError>)>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, GraphQlError>> + Send + 'static,
    T: Send + 'static,
{
    let mut joins = JoinSet::new();
    for (index, request) in requests.into_iter().enumerate() {
        joins.spawn(async move { (index, request.await) });
    }
    joins
}

// ============================================================================
// SECTION: Tests
// ============================================================================
