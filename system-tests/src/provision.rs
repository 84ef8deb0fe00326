// system-tests/src/provision.rs
// ============================================================================
// Module: Mutation Target Provisioning
// Description: Per-test records for update/delete scenarios.
// Purpose: Keep mutation tests off shared seeded ids where the backend allows.
// Dependencies: graphqlzero-client
// ============================================================================

//! ## Overview
//! A provisioned target is a record created for one test and read back to
//! confirm it persisted. The public GraphQLZero backend echoes creations
//! without storing them, so the read-back usually misses; the target then
//! falls back to the seeded id and carries a note explaining why. A GraphQL
//! rejection of either the creation or the read-back counts as a miss.

// ============================================================================
// SECTION: Imports
// ============================================================================

use graphqlzero_client::GraphQlError;

use crate::api::ZeroApi;
use crate::fixtures::UniqueTestData;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Seeded user expected to exist on a fresh backend.
pub const SEEDED_USER_ID: &str = "1";
/// Seeded album expected to exist on a fresh backend.
pub const SEEDED_ALBUM_ID: &str = "1";

// ============================================================================
// SECTION: Types
// ============================================================================

/// Where a mutation target came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSource {
    /// Created by this test and confirmed by a read.
    Created,
    /// The seeded record, because the creation did not persist.
    SeededFallback,
}

/// A record a test may mutate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationTarget {
    /// Record id.
    pub id: String,
    /// Provenance.
    pub source: TargetSource,
    /// Explanation when the seeded fallback was used.
    pub note: Option<String>,
}

impl MutationTarget {
    /// Target backed by a freshly created record.
    fn created(id: String) -> Self {
        Self {
            id,
            source: TargetSource::Created,
            note: None,
        }
    }

    /// Target backed by the seeded record.
    fn seeded(id: &str, note: String) -> Self {
        Self {
            id: id.to_string(),
            source: TargetSource::SeededFallback,
            note: Some(note),
        }
    }
}

// ============================================================================
// SECTION: Provisioning
// ============================================================================

/// Creates a user for this test, falling back to the seeded user.
///
/// # Errors
///
/// Returns non-GraphQL [`GraphQlError`]s; GraphQL rejections fall back.
pub async fn provision_user(
    api: &ZeroApi,
    data: &UniqueTestData,
) -> Result<MutationTarget, GraphQlError> {
    let created = match api.create_user(&data.full_user_input()).await {
        Ok(user) => user.and_then(|user| user.id),
        Err(err) if err.is_graphql() => {
            return Ok(MutationTarget::seeded(
                SEEDED_USER_ID,
                format!("user creation rejected ({}); using seeded user", err.message()),
            ));
        }
        Err(err) => return Err(err),
    };
    let Some(id) = created else {
        return Ok(MutationTarget::seeded(
            SEEDED_USER_ID,
            "user creation returned no id; using seeded user".to_string(),
        ));
    };
    let read_back = match api.user(&id).await {
        Ok(user) => user.and_then(|user| user.id),
        Err(err) if err.is_graphql() => {
            return Ok(MutationTarget::seeded(
                SEEDED_USER_ID,
                format!(
                    "created user {id} could not be read back ({}); using seeded user {SEEDED_USER_ID}",
                    err.message()
                ),
            ));
        }
        Err(err) => return Err(err),
    };
    if read_back.as_deref() == Some(id.as_str()) {
        return Ok(MutationTarget::created(id));
    }
    Ok(MutationTarget::seeded(
        SEEDED_USER_ID,
        format!("created user {id} was not persisted; using seeded user {SEEDED_USER_ID}"),
    ))
}

/// Creates an album owned by `owner_id`, falling back to the seeded album.
///
/// # Errors
///
/// Returns non-GraphQL [`GraphQlError`]s; GraphQL rejections fall back.
pub async fn provision_album(
    api: &ZeroApi,
    data: &UniqueTestData,
    owner_id: &str,
) -> Result<MutationTarget, GraphQlError> {
    let created = match api.create_album(&data.album_input(owner_id)).await {
        Ok(album) => album.and_then(|album| album.id),
        Err(err) if err.is_graphql() => {
            return Ok(MutationTarget::seeded(
                SEEDED_ALBUM_ID,
                format!("album creation rejected ({}); using seeded album", err.message()),
            ));
        }
        Err(err) => return Err(err),
    };
    let Some(id) = created else {
        return Ok(MutationTarget::seeded(
            SEEDED_ALBUM_ID,
            "album creation returned no id; using seeded album".to_string(),
        ));
    };
    let read_back = match api.album(&id).await {
        Ok(album) => album.and_then(|album| album.id),
        Err(err) if err.is_graphql() => {
            return Ok(MutationTarget::seeded(
                SEEDED_ALBUM_ID,
                format!(
                    "created album {id} could not be read back ({}); using seeded album {SEEDED_ALBUM_ID}",
                    err.message()
                ),
            ));
        }
        Err(err) => return Err(err),
    };
    if read_back.as_deref() == Some(id.as_str()) {
        return Ok(MutationTarget::created(id));
    }
    Ok(MutationTarget::seeded(
        SEEDED_ALBUM_ID,
        format!("created album {id} was not persisted; using seeded album {SEEDED_ALBUM_ID}"),
    ))
}
