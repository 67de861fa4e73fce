//! # Lodgekeeper Binary
//!
//! The entry point that assembles the reservation engine: in-memory stores
//! seeded with the starter catalog, the booking coordinator over them, and
//! the axum facade on top. Stores live exactly as long as the process.

use std::sync::Arc;

use lk_api::AppState;
use lk_configs::Settings;
use lk_engine::BookingCoordinator;
use lk_store_memory::{seed, MemoryIdentityStore, MemoryListingCatalog, MemoryReservationLedger};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&settings.log_filter)?)
        .init();

    // 1. Stores: identity, catalog (seeded), ledger.
    let identity = Arc::new(MemoryIdentityStore::new()?);
    let listings = seed::sample_listings();
    tracing::info!(count = listings.len(), "seeding listing catalog");
    let catalog = Arc::new(MemoryListingCatalog::new(listings));
    let ledger = Arc::new(MemoryReservationLedger::new());

    // 2. Coordinator owning the per-listing exclusion scopes.
    let coordinator = Arc::new(BookingCoordinator::new(
        identity.clone(),
        catalog.clone(),
        ledger.clone(),
    ));

    // 3. Facade.
    let state = AppState {
        identity,
        catalog,
        ledger,
        coordinator,
    };
    let app = lk_api::router(state);

    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "lodgekeeper listening");
    axum::serve(listener, app).await?;
    Ok(())
}
