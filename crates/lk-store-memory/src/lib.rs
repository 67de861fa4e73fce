//! # lk-store-memory
//!
//! In-memory implementations of the lk-core ports. The stores are owned by
//! the binary for the lifetime of the process: constructed (and seeded) at
//! startup, dropped at shutdown, never implicit globals.
//!
//! Identity and catalog are read-mostly and sit behind `std::sync::RwLock`;
//! serialization of the check-then-commit sequence is the booking
//! coordinator's job, not the ledger's, so the ledger only guarantees that
//! individual commits are atomic and never partially visible.

mod catalog;
mod identity;
mod ledger;
pub mod seed;

pub use catalog::MemoryListingCatalog;
pub use identity::MemoryIdentityStore;
pub use ledger::MemoryReservationLedger;
