//! # Core Traits (Ports)
//!
//! Any storage adapter must implement these traits to be wired into the
//! binary. Deterministic negative outcomes (duplicate id, bad credentials,
//! overlapping range) are values, not errors; `Err` is reserved for
//! infrastructure faults (`EngineError::Unavailable`) and missing
//! references.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{Listing, NewReservation, Reservation};

/// Account storage and credential verification.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Creates an account. Fails closed: returns `Ok(false)` if `id` is
    /// already taken, without touching the existing account. The password
    /// is hashed with a salted slow hash before storage.
    async fn signup(&self, id: &str, password: &str, name: &str) -> Result<bool>;

    /// Returns `Ok(true)` only if `id` exists and `password` verifies
    /// against the stored hash. Unknown id and wrong password are
    /// indistinguishable to the caller, and the unknown-id path performs a
    /// dummy verification so both failures cost comparable time.
    async fn login(&self, id: &str, password: &str) -> Result<bool>;

    /// Whether an account with this id exists. Used by the booking
    /// coordinator to validate reservation requests.
    async fn exists(&self, id: &str) -> Result<bool>;
}

/// Read-only listing catalog.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ListingCatalog: Send + Sync {
    /// Returns the slice `[page*limit, (page+1)*limit)` of the catalog in
    /// its stable total order (ascending id). Pages past the end yield an
    /// empty Vec, never an error.
    async fn page(&self, page: u64, limit: u64) -> Result<Vec<Listing>>;

    /// Looks up a single listing.
    async fn get(&self, listing_id: u64) -> Result<Option<Listing>>;

    /// Nightly rate in minor units; `NotFound` for an unknown listing.
    async fn price_per_night(&self, listing_id: u64) -> Result<u64>;

    /// Total number of listings in the catalog.
    async fn count(&self) -> Result<u64>;
}

/// Source of truth for committed reservations.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ReservationLedger: Send + Sync {
    /// True iff any committed reservation for `listing_id` intersects the
    /// half-open range `[check_in, check_out)`. Touching intervals (one
    /// checkout equal to another's check-in) do not overlap.
    async fn overlaps(
        &self,
        listing_id: u64,
        check_in: DateTime<Utc>,
        check_out: DateTime<Utc>,
    ) -> Result<bool>;

    /// Appends a reservation atomically, assigning `id` and `created_at`.
    /// Never partially visible to concurrent readers.
    async fn commit(&self, draft: NewReservation) -> Result<Reservation>;

    /// All reservations for a user, ascending by id.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Reservation>>;
}
