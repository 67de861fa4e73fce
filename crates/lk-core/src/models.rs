//! # Domain Models
//!
//! These structs represent the core entities of Lodgekeeper. Identifiers
//! follow the wire contract: accounts are keyed by a caller-supplied string
//! (email or phone), listings and reservations by ledger-assigned `u64`s.
//!
//! Timestamps cross the service boundary as signed 64-bit nanosecond epoch
//! offsets and are stored at full nanosecond precision; the overlap check in
//! the ledger compares them exactly, so no field here may round or truncate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user account.
///
/// `password_hash` is an argon2 PHC string; the plaintext password never
/// touches storage and the hash never leaves the engine.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub id: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
}

/// A rentable property. Read-only to the engine: listings are created by the
/// seed/import path at startup and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub location: String,
    /// Nightly rate in minor currency units (cents). Never a float.
    pub price_per_night: u64,
    pub photos: Vec<String>,
    pub amenities: Vec<String>,
}

/// A confirmed booking of a listing for a half-open `[check_in, check_out)`
/// range. Immutable once committed; `id` and `created_at` are assigned by
/// the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: u64,
    pub listing_id: u64,
    pub user_id: String,
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub check_in: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub check_out: DateTime<Utc>,
    pub guests: u32,
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub created_at: DateTime<Utc>,
}

/// Everything the ledger needs to mint a [`Reservation`]. Produced by the
/// booking coordinator only after validation and the conflict check passed.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub listing_id: u64,
    pub user_id: String,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub guests: u32,
}

/// Price breakdown for a stay, in minor currency units throughout.
///
/// `service_fee` and `taxes` are percentages of the subtotal rounded
/// half-up on integer cents, so the same stay always quotes identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub nights: u64,
    pub price_per_night: u64,
    pub subtotal: u64,
    pub service_fee: u64,
    pub taxes: u64,
    pub total: u64,
}
