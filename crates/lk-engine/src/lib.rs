//! # lk-engine
//!
//! Orchestration logic over the lk-core ports: stay pricing and the
//! booking coordinator that owns the per-listing exclusion scopes.

pub mod booking;
pub mod pricing;

pub use booking::{BookingCoordinator, ReserveRequest};
