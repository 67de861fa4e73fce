//! Read-only listing catalog over a sorted map.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use lk_core::{EngineError, Listing, ListingCatalog, Result};

/// In-memory [`ListingCatalog`]. The `BTreeMap` keeps the catalog in
/// ascending-id order, which is the stable total order pagination slices.
pub struct MemoryListingCatalog {
    listings: RwLock<BTreeMap<u64, Listing>>,
}

impl MemoryListingCatalog {
    pub fn new(seed: Vec<Listing>) -> Self {
        let listings = seed.into_iter().map(|l| (l.id, l)).collect();
        Self {
            listings: RwLock::new(listings),
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, BTreeMap<u64, Listing>>> {
        self.listings
            .read()
            .map_err(|_| EngineError::unavailable("listing catalog lock poisoned"))
    }
}

#[async_trait]
impl ListingCatalog for MemoryListingCatalog {
    async fn page(&self, page: u64, limit: u64) -> Result<Vec<Listing>> {
        let listings = self.read()?;
        // Saturating arithmetic keeps absurd page numbers from wrapping;
        // an offset past the end simply yields an empty page.
        let offset = page.saturating_mul(limit);
        let slice = listings
            .values()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect();
        Ok(slice)
    }

    async fn get(&self, listing_id: u64) -> Result<Option<Listing>> {
        Ok(self.read()?.get(&listing_id).cloned())
    }

    async fn price_per_night(&self, listing_id: u64) -> Result<u64> {
        self.read()?
            .get(&listing_id)
            .map(|l| l.price_per_night)
            .ok_or_else(|| EngineError::not_found("listing", listing_id))
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.read()?.len() as u64)
    }
}
