// system-tests/src/fixtures.rs
// ============================================================================
// Module: Test Data Fixtures
// Description: Unique per-test input data for mutation scenarios.
// Purpose: Avoid collisions between tests sharing the remote API.
// Dependencies: rand
// ============================================================================

//! ## Overview
//! [`UniqueTestData`] combines a wall-clock timestamp, a process-wide
//! sequence number, and a random id. The sequence keeps names distinct when
//! parallel tests generate data within the same millisecond.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use rand::Rng;

use crate::models::CreateAlbumInput;
use crate::models::CreateUserInput;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Upper bound (exclusive) for the random id embedded in names.
const RANDOM_ID_LIMIT: u32 = 10_000;
/// Upper bound (exclusive) for [`uid`].
const UID_LIMIT: u32 = 100_000;

/// Process-wide fixture sequence.
static SEQUENCE: AtomicU64 = AtomicU64::new(0);

// ============================================================================
// SECTION: Unique Data
// ============================================================================

/// Unique names, emails, and titles for one test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueTestData {
    /// Random id used in display names.
    pub user_id: u32,
    /// Unique username.
    pub user_name: String,
    /// Unique email address.
    pub user_email: String,
    /// Unique album title.
    pub album_title: String,
}

impl UniqueTestData {
    /// Generates fresh data from the clock, sequence, and RNG.
    #[must_use]
    pub fn generate() -> Self {
        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX));
        let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let random_id = rand::thread_rng().gen_range(0..RANDOM_ID_LIMIT);
        Self::from_parts(timestamp_ms, sequence, random_id)
    }

    /// Builds data deterministically from its parts.
    #[must_use]
    pub fn from_parts(timestamp_ms: u64, sequence: u64, random_id: u32) -> Self {
        let stamp = format!("{timestamp_ms}_{sequence}");
        Self {
            user_id: random_id,
            user_name: format!("testuser_{stamp}"),
            user_email: format!("test_{stamp}@example.com"),
            album_title: format!("Test Album {stamp}"),
        }
    }

    /// Create input with every optional field populated.
    #[must_use]
    pub fn full_user_input(&self) -> CreateUserInput {
        CreateUserInput {
            name: format!("Test User {}", self.user_id),
            username: self.user_name.clone(),
            email: self.user_email.clone(),
            phone: Some("123-456-7890".to_string()),
            website: Some("https://example.com".to_string()),
        }
    }

    /// Create input with only the required fields.
    #[must_use]
    pub fn minimal_user_input(&self) -> CreateUserInput {
        CreateUserInput {
            name: format!("Minimal User {}", self.user_id),
            username: format!("minimal_{}", self.user_name),
            email: format!("minimal_{}", self.user_email),
            phone: None,
            website: None,
        }
    }

    /// Album input owned by `user_id`.
    #[must_use]
    pub fn album_input(&self, user_id: &str) -> CreateAlbumInput {
        CreateAlbumInput {
            title: self.album_title.clone(),
            user_id: user_id.to_string(),
        }
    }
}

/// Returns a random number for ad hoc unique-ish names.
#[must_use]
pub fn uid() -> u32 {
    rand::thread_rng().gen_range(0..UID_LIMIT)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
