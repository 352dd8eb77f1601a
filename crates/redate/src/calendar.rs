//! Proleptic-Gregorian calendar arithmetic helpers.

/// Day counts for the twelve months of a common (non-leap) year.
const MONTH_DAYS: [i64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true if `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the given month of the given year.
///
/// `month0` is zero-based (January = 0, December = 11), matching chrono's
/// [`Datelike::month0`](chrono::Datelike::month0). February reports 29 days
/// in leap years. Passing `month0 > 11` is a caller bug and panics.
pub fn days_in_month(year: i32, month0: u32) -> i64 {
    if month0 == 1 && is_leap_year(year) {
        29
    } else {
        MONTH_DAYS[month0 as usize]
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
