//! The booking coordinator: validation, pricing, and the serialized
//! check-then-commit against the reservation ledger.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use lk_core::{
    EngineError, IdentityStore, ListingCatalog, NewReservation, Quote, Reservation,
    ReservationLedger, Result,
};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::pricing;

/// A reservation request as it arrives over the wire: timestamps are signed
/// 64-bit nanosecond epoch offsets.
#[derive(Debug, Clone, Deserialize)]
pub struct ReserveRequest {
    pub user_id: String,
    pub listing_id: u64,
    pub check_in: i64,
    pub check_out: i64,
    pub guests: u32,
}

/// Orchestrates `reserve`: validates the request, prices the stay, then
/// takes a mutex keyed by `listing_id` to re-check for overlap and commit.
///
/// The per-listing keying means requests for different listings never
/// contend, while two requests for the same listing are strictly ordered:
/// whichever acquires the lock second sees the first one's commit and gets
/// `Conflict`. The lock guard drops on every exit path.
pub struct BookingCoordinator {
    identity: Arc<dyn IdentityStore>,
    catalog: Arc<dyn ListingCatalog>,
    ledger: Arc<dyn ReservationLedger>,
    listing_locks: DashMap<u64, Arc<Mutex<()>>>,
}

impl BookingCoordinator {
    pub fn new(
        identity: Arc<dyn IdentityStore>,
        catalog: Arc<dyn ListingCatalog>,
        ledger: Arc<dyn ReservationLedger>,
    ) -> Self {
        Self {
            identity,
            catalog,
            ledger,
            listing_locks: DashMap::new(),
        }
    }

    fn exclusion_scope(&self, listing_id: u64) -> Arc<Mutex<()>> {
        self.listing_locks
            .entry(listing_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    pub async fn reserve(&self, req: ReserveRequest) -> Result<(Reservation, Quote)> {
        if !self.identity.exists(&req.user_id).await? {
            return Err(EngineError::not_found("account", &req.user_id));
        }
        // Also the listing-existence check: unknown ids surface NotFound here.
        let price_per_night = self.catalog.price_per_night(req.listing_id).await?;

        if req.guests == 0 {
            return Err(EngineError::invalid_input("guests must be at least 1"));
        }
        if req.check_out <= req.check_in {
            return Err(EngineError::invalid_input(
                "check-out must be after check-in",
            ));
        }

        let check_in: DateTime<Utc> = DateTime::from_timestamp_nanos(req.check_in);
        let check_out: DateTime<Utc> = DateTime::from_timestamp_nanos(req.check_out);

        let nights = pricing::nights(check_in, check_out);
        let quote = pricing::quote(price_per_night, nights)?;

        // Check and commit must be one unit: without this scope, two
        // overlapping requests could both pass the check and both commit.
        let scope = self.exclusion_scope(req.listing_id);
        let _guard = scope.lock().await;

        if self
            .ledger
            .overlaps(req.listing_id, check_in, check_out)
            .await?
        {
            tracing::debug!(
                listing = req.listing_id,
                "reservation rejected: dates overlap an existing booking"
            );
            return Err(EngineError::conflict(
                "listing is already booked for part of the requested dates",
            ));
        }

        let reservation = self
            .ledger
            .commit(NewReservation {
                listing_id: req.listing_id,
                user_id: req.user_id,
                check_in,
                check_out,
                guests: req.guests,
            })
            .await?;
        Ok((reservation, quote))
    }

    /// Advisory availability probe for the given half-open range. Takes no
    /// lock, since the commit path re-checks. An inverted or empty range is
    /// simply not available.
    pub async fn availability(
        &self,
        listing_id: u64,
        check_in: i64,
        check_out: i64,
    ) -> Result<bool> {
        if self.catalog.get(listing_id).await?.is_none() {
            return Err(EngineError::not_found("listing", listing_id));
        }
        if check_out <= check_in {
            return Ok(false);
        }
        let taken = self
            .ledger
            .overlaps(
                listing_id,
                DateTime::from_timestamp_nanos(check_in),
                DateTime::from_timestamp_nanos(check_out),
            )
            .await?;
        Ok(!taken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lk_core::{MockIdentityStore, MockListingCatalog, MockReservationLedger};

    fn coordinator_with(
        identity: MockIdentityStore,
        catalog: MockListingCatalog,
        ledger: MockReservationLedger,
    ) -> BookingCoordinator {
        BookingCoordinator::new(Arc::new(identity), Arc::new(catalog), Arc::new(ledger))
    }

    fn request() -> ReserveRequest {
        ReserveRequest {
            user_id: "guest@example.com".to_string(),
            listing_id: 1,
            check_in: 0,
            check_out: 86_400_000_000_000,
            guests: 2,
        }
    }

    #[tokio::test]
    async fn unknown_user_is_not_found_and_never_reaches_the_ledger() {
        let mut identity = MockIdentityStore::new();
        identity.expect_exists().returning(|_| Ok(false));
        let mut ledger = MockReservationLedger::new();
        ledger.expect_overlaps().never();
        ledger.expect_commit().never();

        let coordinator = coordinator_with(identity, MockListingCatalog::new(), ledger);
        let err = coordinator.reserve(request()).await.unwrap_err();
        assert!(matches!(err, EngineError::NotFound(kind, _) if kind == "account"));
    }

    #[tokio::test]
    async fn unknown_listing_is_not_found() {
        let mut identity = MockIdentityStore::new();
        identity.expect_exists().returning(|_| Ok(true));
        let mut catalog = MockListingCatalog::new();
        catalog
            .expect_price_per_night()
            .returning(|id| Err(EngineError::not_found("listing", id)));

        let coordinator = coordinator_with(identity, catalog, MockReservationLedger::new());
        let err = coordinator.reserve(request()).await.unwrap_err();
        assert!(matches!(err, EngineError::NotFound(kind, _) if kind == "listing"));
    }

    #[tokio::test]
    async fn zero_guests_and_inverted_dates_are_invalid_input() {
        for (guests, check_in, check_out) in [(0, 0, 100), (2, 100, 100), (2, 200, 100)] {
            let mut identity = MockIdentityStore::new();
            identity.expect_exists().returning(|_| Ok(true));
            let mut catalog = MockListingCatalog::new();
            catalog.expect_price_per_night().returning(|_| Ok(100));
            let mut ledger = MockReservationLedger::new();
            ledger.expect_commit().never();

            let coordinator = coordinator_with(identity, catalog, ledger);
            let err = coordinator
                .reserve(ReserveRequest {
                    guests,
                    check_in,
                    check_out,
                    ..request()
                })
                .await
                .unwrap_err();
            assert!(matches!(err, EngineError::InvalidInput(_)));
        }
    }

    #[tokio::test]
    async fn overlap_is_conflict_with_no_commit() {
        let mut identity = MockIdentityStore::new();
        identity.expect_exists().returning(|_| Ok(true));
        let mut catalog = MockListingCatalog::new();
        catalog.expect_price_per_night().returning(|_| Ok(100));
        let mut ledger = MockReservationLedger::new();
        ledger.expect_overlaps().returning(|_, _, _| Ok(true));
        ledger.expect_commit().never();

        let coordinator = coordinator_with(identity, catalog, ledger);
        let err = coordinator.reserve(request()).await.unwrap_err();
        assert!(matches!(err, EngineError::Conflict(_)));
    }

    #[tokio::test]
    async fn availability_rejects_unknown_listing_and_inverted_range() {
        let identity = MockIdentityStore::new();
        let mut catalog = MockListingCatalog::new();
        catalog.expect_get().returning(|_| Ok(None));
        let coordinator = coordinator_with(identity, catalog, MockReservationLedger::new());
        assert!(matches!(
            coordinator.availability(9, 0, 100).await,
            Err(EngineError::NotFound(_, _))
        ));

        let mut catalog = MockListingCatalog::new();
        catalog.expect_get().returning(|_| {
            Ok(Some(lk_core::Listing {
                id: 1,
                title: String::new(),
                description: String::new(),
                location: String::new(),
                price_per_night: 100,
                photos: vec![],
                amenities: vec![],
            }))
        });
        let coordinator = coordinator_with(
            MockIdentityStore::new(),
            catalog,
            MockReservationLedger::new(),
        );
        assert!(!coordinator.availability(1, 100, 100).await.expect("probe"));
    }
}
