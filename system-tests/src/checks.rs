// system-tests/src/checks.rs
// ============================================================================
// Module: Contract Checks
// Description: Assertion helpers returning `Result` instead of panicking.
// Purpose: Express contract expectations as composable, reportable checks.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Every check returns `Result<(), String>` so tests can use `?` and the
//! harness records the failure message in the test summary.

#![allow(clippy::use_debug, reason = "Failure messages render compared values with Debug.")]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Debug;

use crate::models::Album;
use crate::models::CreateAlbumInput;
use crate::models::CreateUserInput;
use crate::models::Page;
use crate::models::User;

// ============================================================================
// SECTION: Primitives
// ============================================================================

/// Fails with `message` unless `condition` holds.
///
/// # Errors
///
/// Returns `message` when the condition is false.
pub fn require(condition: bool, message: impl Into<String>) -> Result<(), String> {
    if condition { Ok(()) } else { Err(message.into()) }
}

/// Fails unless `left == right`.
///
/// # Errors
///
/// Returns a message naming `context` and both values.
pub fn require_eq<T: PartialEq + Debug + ?Sized>(
    left: &T,
    right: &T,
    context: &str,
) -> Result<(), String> {
    if left == right { Ok(()) } else { Err(format!("{context}: left={left:?} right={right:?}")) }
}

/// Fails unless `haystack` contains `needle`.
///
/// # Errors
///
/// Returns a message naming `context`, the needle, and the haystack.
pub fn require_contains(haystack: &str, needle: &str, context: &str) -> Result<(), String> {
    require(haystack.contains(needle), format!("{context}: {haystack:?} does not contain {needle:?}"))
}

/// Fails unless `value` is present and non-empty.
///
/// # Errors
///
/// Returns a message naming `context`.
pub fn require_truthy(value: Option<&str>, context: &str) -> Result<(), String> {
    match value {
        Some(text) if !text.is_empty() => Ok(()),
        other => Err(format!("{context}: expected a non-empty value, got {other:?}")),
    }
}

/// Unwraps `value` or fails naming `context`.
///
/// # Errors
///
/// Returns a message when `value` is `None`.
pub fn require_some<T>(value: Option<T>, context: &str) -> Result<T, String> {
    value.ok_or_else(|| format!("{context}: expected a value, got null"))
}

/// Returns true for `local@domain.tld` with no whitespace or extra `@`.
#[must_use]
pub fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(index, c)| c == '.' && index > 0 && index + 1 < domain.len())
}

// ============================================================================
// SECTION: Pages
// ============================================================================

/// Fails unless the page holds at most `limit` records.
///
/// # Errors
///
/// Returns a message naming `context` and the observed length.
pub fn require_page_within<T>(page: &Page<T>, limit: usize, context: &str) -> Result<(), String> {
    require(
        page.data.len() <= limit,
        format!("{context}: expected at most {limit} records, got {}", page.data.len()),
    )
}

/// Fails unless the page is empty.
///
/// # Errors
///
/// Returns a message naming `context` and the observed length.
pub fn require_empty_page<T>(page: &Page<T>, context: &str) -> Result<(), String> {
    require(
        page.data.is_empty(),
        format!("{context}: expected an empty page, got {} records", page.data.len()),
    )
}

/// Fails unless `meta.totalCount` is present and positive.
///
/// # Errors
///
/// Returns a message naming `context`.
pub fn require_positive_total<T>(page: &Page<T>, context: &str) -> Result<(), String> {
    match page.total_count() {
        Some(total) if total > 0 => Ok(()),
        other => Err(format!("{context}: expected positive totalCount, got {other:?}")),
    }
}

// ============================================================================
// SECTION: Records
// ============================================================================

/// Fails unless every field of `input` is echoed by `user`, with a non-empty id.
///
/// # Errors
///
/// Returns the first mismatching field.
pub fn require_user_echo(user: &User, input: &CreateUserInput) -> Result<(), String> {
    require_truthy(user.id.as_deref(), "created user id")?;
    require_eq(&user.name.as_deref(), &Some(input.name.as_str()), "user name echo")?;
    require_eq(&user.username.as_deref(), &Some(input.username.as_str()), "user username echo")?;
    require_eq(&user.email.as_deref(), &Some(input.email.as_str()), "user email echo")?;
    if let Some(phone) = &input.phone {
        require_eq(&user.phone.as_deref(), &Some(phone.as_str()), "user phone echo")?;
    }
    if let Some(website) = &input.website {
        require_eq(&user.website.as_deref(), &Some(website.as_str()), "user website echo")?;
    }
    Ok(())
}

/// Whether an album's owner must be present for the echo check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerEcho {
    /// `user.id` must equal the input owner.
    Required,
    /// `user.id` must equal the input owner when `user` is non-null.
    WhenPresent,
}

/// Fails unless `album` echoes `input`'s title and owner.
///
/// # Errors
///
/// Returns the first mismatching field.
pub fn require_album_echo(
    album: &Album,
    input: &CreateAlbumInput,
    owner: OwnerEcho,
) -> Result<(), String> {
    require_truthy(album.id.as_deref(), "created album id")?;
    require_eq(&album.title.as_deref(), &Some(input.title.as_str()), "album title echo")?;
    match (owner, album.user.as_ref()) {
        (OwnerEcho::WhenPresent, None) => Ok(()),
        (_, user) => require_eq(
            &user.and_then(|user| user.id.as_deref()),
            &Some(input.user_id.as_str()),
            "album owner echo",
        ),
    }
}

/// Fails when `album` reports any owner id.
///
/// A `null` album, `null` owner, or owner without id are all acceptable.
///
/// # Errors
///
/// Returns a message naming the reported owner.
pub fn require_unowned(album: Option<&Album>, context: &str) -> Result<(), String> {
    match album.and_then(Album::owner_id) {
        Some(owner) => Err(format!("{context}: album reports owner {owner}, expected none")),
        None => Ok(()),
    }
}

/// Fails unless the user is the all-null placeholder returned for unknown ids.
///
/// # Errors
///
/// Returns a message when the user is `null` or has a non-null id or name.
pub fn require_placeholder_user(user: Option<&User>, context: &str) -> Result<(), String> {
    let user = require_some(user, context)?;
    require(user.is_placeholder(), format!("{context}: expected null id and name, got {user:?}"))
}

/// Fails unless every album in `albums` is owned by `owner_id` when its owner is present.
///
/// # Errors
///
/// Returns the first album whose owner differs.
pub fn require_owned_albums(albums: &[Album], owner_id: &str) -> Result<(), String> {
    for album in albums {
        require_truthy(album.id.as_deref(), "owned album id")?;
        require_truthy(album.title.as_deref(), "owned album title")?;
        if let Some(owner) = album.owner_id() {
            require_eq(owner, owner_id, "owned album owner")?;
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
