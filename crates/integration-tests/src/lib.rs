//! Shared fixtures for the integration test targets: a fully wired engine
//! with the seed catalog, an empty identity store, and an empty ledger.

use std::sync::Arc;

use lk_api::AppState;
use lk_engine::BookingCoordinator;
use lk_store_memory::{seed, MemoryIdentityStore, MemoryListingCatalog, MemoryReservationLedger};

pub const NIGHT_NS: i64 = 24 * 60 * 60 * 1_000_000_000;

/// Fixed password used by every test account.
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Builds a complete engine wired the same way the binary wires it.
pub fn fresh_state() -> AppState {
    let identity = Arc::new(MemoryIdentityStore::new().expect("identity store"));
    let catalog = Arc::new(MemoryListingCatalog::new(seed::sample_listings()));
    let ledger = Arc::new(MemoryReservationLedger::new());
    let coordinator = Arc::new(BookingCoordinator::new(
        identity.clone(),
        catalog.clone(),
        ledger.clone(),
    ));
    AppState {
        identity,
        catalog,
        ledger,
        coordinator,
    }
}

/// Registers a test account and asserts the signup succeeded.
pub async fn signup(state: &AppState, id: &str) {
    let ok = state
        .identity
        .signup(id, TEST_PASSWORD, "Test Guest")
        .await
        .expect("signup call");
    assert!(ok, "fixture signup for {id} should succeed");
}
