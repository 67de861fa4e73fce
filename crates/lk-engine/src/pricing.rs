//! Deterministic stay pricing in integer minor currency units.

use chrono::{DateTime, Utc};
use lk_core::{EngineError, Quote, Result};

/// Service fee and tax rates, in percent of the subtotal.
const SERVICE_FEE_PCT: u128 = 14;
const TAX_PCT: u128 = 12;

const NANOS_PER_NIGHT: i64 = 24 * 60 * 60 * 1_000_000_000;

/// Number of billable nights for `[check_in, check_out)`: the ceiling of
/// the duration in 24-hour units, with a floor of one night. A stay shorter
/// than 24 hours still bills a full night; zero nights is never billed.
///
/// Caller must have validated `check_out > check_in`.
pub fn nights(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> u64 {
    let span_ns = (check_out - check_in).num_nanoseconds().unwrap_or(i64::MAX);
    if span_ns <= 0 {
        return 1;
    }
    let whole = span_ns / NANOS_PER_NIGHT;
    let partial = i64::from(span_ns % NANOS_PER_NIGHT != 0);
    (whole + partial).max(1) as u64
}

/// Rounds `value * pct / 100` half-up on integer cents.
fn pct_round_half_up(value: u128, pct: u128) -> u128 {
    (value * pct + 50) / 100
}

/// Price breakdown for a stay. A breakdown that will not fit into `u64`
/// cents is rejected as invalid input, never wrapped.
///
/// The subtotal is narrowed before the percentage step: with it capped at
/// `u64::MAX`, the widened `value * pct + 50` fits `u128` with room to
/// spare, so no intermediate can overflow.
pub fn quote(price_per_night: u64, nights: u64) -> Result<Quote> {
    let narrow = |v: u128| {
        u64::try_from(v)
            .map_err(|_| EngineError::invalid_input("stay total exceeds representable amount"))
    };

    let subtotal = narrow(u128::from(price_per_night) * u128::from(nights))?;
    let service_fee = narrow(pct_round_half_up(u128::from(subtotal), SERVICE_FEE_PCT))?;
    let taxes = narrow(pct_round_half_up(u128::from(subtotal), TAX_PCT))?;
    let total = narrow(u128::from(subtotal) + u128::from(service_fee) + u128::from(taxes))?;

    Ok(Quote {
        nights,
        price_per_night,
        subtotal,
        service_fee,
        taxes,
        total,
    })
}
