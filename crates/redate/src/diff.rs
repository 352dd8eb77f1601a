//! Calendar-aware difference between two instants.

use chrono::{DateTime, Datelike, FixedOffset};
use serde::Serialize;

use crate::calendar::days_in_month;

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Decomposition of the span between two instants.
///
/// The year/month/week/day fields come from calendar subtraction with
/// borrowing; for `from <= to` they satisfy `months ∈ [0,11]`,
/// `days ∈ [0,6]` (after the week split), `hours ∈ [0,23]`,
/// `minutes ∈ [0,59]`, `seconds ∈ [0,59]`.
///
/// The sub-day fields are **not** carried against the calendar fields: they
/// are modulo remainders of the raw millisecond delta, so a breakdown can
/// report `weeks: 2` alongside `hours: 23` without the hours lying "inside"
/// the last day. [`phrase`](crate::phrase::phrase) only ever reads the one
/// dominant field, so the inconsistency is never user-visible; it is kept
/// as observed behavior rather than normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Compute the [`Breakdown`] of `to - from`.
///
/// Calendar fields read each instant in its own fixed offset, matching
/// calendar subtraction semantics: the day borrow adds the length of
/// `from`'s month, not `to`'s. `to` is expected to be at or after `from`;
/// for `to < from` the field invariants above do not hold and callers
/// should clamp first (see [`redate_with_parsers`](crate::redate_with_parsers)).
pub fn relative_difference(from: DateTime<FixedOffset>, to: DateTime<FixedOffset>) -> Breakdown {
    let millis = to.signed_duration_since(from).num_milliseconds();
    let seconds = (millis % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND;
    let minutes = (millis % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE;
    let hours = (millis % MILLIS_PER_DAY) / MILLIS_PER_HOUR;

    let mut years = i64::from(to.year() - from.year());
    let mut months = i64::from(to.month0() as i32 - from.month0() as i32);
    if months < 0 {
        years -= 1;
        months += 12;
    }

    let mut days = i64::from(to.day() as i32 - from.day() as i32);
    if days < 0 {
        months -= 1;
        days += days_in_month(from.year(), from.month0());
    }
    let weeks = days / 7;
    let days = days % 7;

    Breakdown {
        years,
        months,
        weeks,
        days,
        hours,
        minutes,
        seconds,
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
