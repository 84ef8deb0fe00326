// system-tests/src/models.rs
// ============================================================================
// Module: GraphQLZero Models
// Description: Typed views of the users/albums resources and their inputs.
// Purpose: Decode selected fields and encode mutation inputs with serde.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Response models mirror only what a document selects, so every field is
//! optional: an unselected field is absent and a missing record comes back as
//! `null` fields. Collections are [`Page`]s of `{ data, meta }`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Resources
// ============================================================================

/// A user record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Login name.
    #[serde(default)]
    pub username: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Website URL.
    #[serde(default)]
    pub website: Option<String>,
    /// Albums owned by the user, when selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub albums: Option<Page<Album>>,
}

impl User {
    /// Returns true when the API answered with an all-null placeholder.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        self.id.is_none() && self.name.is_none()
    }

    /// Returns the owned albums, empty when not selected.
    #[must_use]
    pub fn album_list(&self) -> &[Album] {
        self.albums.as_ref().map(|page| page.data.as_slice()).unwrap_or_default()
    }
}

/// An album record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Opaque identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Album title.
    #[serde(default)]
    pub title: Option<String>,
    /// Owning user, when selected. `null` in several edge cases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl Album {
    /// Returns the owner id, when the owner and its id are present.
    #[must_use]
    pub fn owner_id(&self) -> Option<&str> {
        self.user.as_ref().and_then(|user| user.id.as_deref())
    }
}

// ============================================================================
// SECTION: Pages
// ============================================================================

/// A paginated collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Records on this page.
    pub data: Vec<T>,
    /// Collection metadata, when selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

impl<T> Page<T> {
    /// Returns the total count reported by `meta`, when selected.
    #[must_use]
    pub fn total_count(&self) -> Option<i64> {
        self.meta.as_ref().and_then(|meta| meta.total_count)
    }
}

/// Collection metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Total records across all pages.
    #[serde(default)]
    pub total_count: Option<i64>,
}

/// Query options accepted by collection fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQueryOptions {
    /// Pagination window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paginate: Option<PaginateOptions>,
}

impl PageQueryOptions {
    /// Options selecting `page` with `limit` records per page.
    #[must_use]
    pub const fn page(page: u32, limit: u32) -> Self {
        Self {
            paginate: Some(PaginateOptions {
                page: Some(page),
                limit: Some(limit),
            }),
        }
    }

    /// Options limiting the first page to `limit` records.
    #[must_use]
    pub const fn limit(limit: u32) -> Self {
        Self {
            paginate: Some(PaginateOptions {
                page: None,
                limit: Some(limit),
            }),
        }
    }
}

/// `{page, limit}` pagination parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginateOptions {
    /// One-based page number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Records per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

// ============================================================================
// SECTION: Inputs
// ============================================================================

/// Input for `createUser`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserInput {
    /// Display name.
    pub name: String,
    /// Login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Website URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Input for `updateUser`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserInput {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Login name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Website URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Input for `createAlbum`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlbumInput {
    /// Album title.
    pub title: String,
    /// Owning user id.
    pub user_id: String,
}

/// Input for `updateAlbum`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAlbumInput {
    /// Album title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Owning user id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

// ============================================================================
// SECTION: Tests
// ============================================================================
