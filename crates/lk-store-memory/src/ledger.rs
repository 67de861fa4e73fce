//! Reservation ledger: the source of truth for conflict checks.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lk_core::{EngineError, NewReservation, Reservation, ReservationLedger, Result};

/// In-memory [`ReservationLedger`].
///
/// Each commit happens under the write lock, so readers observe either the
/// ledger before the reservation or after it, never a torn state. Ordering
/// of check-then-commit across requests is the booking coordinator's
/// per-listing mutex, not this type.
pub struct MemoryReservationLedger {
    reservations: RwLock<BTreeMap<u64, Reservation>>,
    next_id: AtomicU64,
}

impl MemoryReservationLedger {
    pub fn new() -> Self {
        Self {
            reservations: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for MemoryReservationLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// Half-open interval intersection: `[a_start, a_end)` meets
/// `[b_start, b_end)`. Touching endpoints do not intersect.
fn ranges_overlap(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && b_start < a_end
}

#[async_trait]
impl ReservationLedger for MemoryReservationLedger {
    async fn overlaps(
        &self,
        listing_id: u64,
        check_in: DateTime<Utc>,
        check_out: DateTime<Utc>,
    ) -> Result<bool> {
        let reservations = self
            .reservations
            .read()
            .map_err(|_| EngineError::unavailable("reservation ledger lock poisoned"))?;
        Ok(reservations.values().any(|r| {
            r.listing_id == listing_id
                && ranges_overlap(r.check_in, r.check_out, check_in, check_out)
        }))
    }

    async fn commit(&self, draft: NewReservation) -> Result<Reservation> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let reservation = Reservation {
            id,
            listing_id: draft.listing_id,
            user_id: draft.user_id,
            check_in: draft.check_in,
            check_out: draft.check_out,
            guests: draft.guests,
            created_at: Utc::now(),
        };

        let mut reservations = self
            .reservations
            .write()
            .map_err(|_| EngineError::unavailable("reservation ledger lock poisoned"))?;
        reservations.insert(id, reservation.clone());
        tracing::info!(
            reservation = reservation.id,
            listing = reservation.listing_id,
            "reservation committed"
        );
        Ok(reservation)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Reservation>> {
        let reservations = self
            .reservations
            .read()
            .map_err(|_| EngineError::unavailable("reservation ledger lock poisoned"))?;
        // BTreeMap iteration is id-ascending, which is the contract's order.
        Ok(reservations
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }
}
