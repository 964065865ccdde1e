//! Fee calculation.
//!
//! Charges are derived from elapsed "units": whole minutes between entry and
//! exit, rounded up. Billing treats each unit as an hour when applying the
//! hourly rates and the 24-unit full-day charge. Downstream tooling and the
//! published fee table depend on the amounts this produces, so the unit is
//! not converted.

use chrono::{DateTime, Utc};

use crate::models::SlotSize;

/// Floor charge applied to every settled stay.
pub const MINIMUM_CHARGE: i64 = 40;

/// Flat charge per completed 24-unit span.
pub const FULL_DAY_CHARGE: i64 = 5000;

/// Units per full-day span.
pub const FULL_DAY_UNITS: i64 = 24;

/// Leading units of each remainder that are not billed.
pub const FREE_UNITS: i64 = 3;

/// Re-entry within this many units keeps the original rate running.
pub const GRACE_UNITS: i64 = 1;

/// Whole elapsed units between entry and now, rounded up.
pub fn elapsed_units(entry_time: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (now - entry_time).num_milliseconds();
    if millis <= 0 {
        return 0;
    }
    (millis as u64).div_ceil(60_000) as i64
}

/// Total charge for a stay of `elapsed` units in a slot of the given size.
///
/// Every completed 24-unit span is billed at the flat full-day charge; the
/// remainder gets its first [`FREE_UNITS`] units free and the rest at the
/// slot's hourly rate. The result never drops below [`MINIMUM_CHARGE`].
pub fn total_charge(size: SlotSize, elapsed: i64) -> i64 {
    let full_days = elapsed / FULL_DAY_UNITS;
    let remainder = elapsed % FULL_DAY_UNITS;
    let chargeable = (remainder - FREE_UNITS).max(0);

    let total = full_days * FULL_DAY_CHARGE + chargeable * size.hourly_rate();
    total.max(MINIMUM_CHARGE)
}
