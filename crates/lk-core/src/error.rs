//! # EngineError
//!
//! Centralized error taxonomy for the Lodgekeeper engine. Every variant is
//! a deterministic, caller-visible outcome; nothing here is retried
//! internally or logged-and-swallowed.
//!
//! Duplicate signup and failed login are deliberately *not* errors: the
//! identity port reports them as plain `false` so callers cannot
//! distinguish cause (and login cannot leak account existence).

use thiserror::Error;

/// The primary error type for all engine operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Referenced resource does not exist (e.g., Account, Listing).
    #[error("{0} not found: {1}")]
    NotFound(String, String),

    /// Validation failure (e.g., zero guests, inverted date range).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Requested date range overlaps a committed reservation.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Infrastructure failure (e.g., store unreachable). Safe to retry
    /// from the caller's side; the ledger is unchanged.
    #[error("unavailable: {0}")]
    Unavailable(String),
}

impl EngineError {
    pub fn not_found(kind: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound(kind.into(), id.to_string())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// A specialized Result type for engine logic.
pub type Result<T> = std::result::Result<T, EngineError>;
