//! Rendering a [`Breakdown`] as a relative phrase.

use crate::diff::Breakdown;

/// The period name used for the large dominant units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Period {
    Years,
    Months,
    Weeks,
}

impl Period {
    fn plural(self) -> &'static str {
        match self {
            Period::Years => "years",
            Period::Months => "months",
            Period::Weeks => "weeks",
        }
    }

    fn singular(self) -> &'static str {
        match self {
            Period::Years => "year",
            Period::Months => "month",
            Period::Weeks => "week",
        }
    }
}

/// Render `diff` as a relative phrase such as "3 weeks ago" or "just now".
///
/// The dominant unit is the first non-zero field in the order years →
/// months → weeks → days → hours → minutes; an all-zero breakdown renders
/// "just now". With `include_half`, the large units gain an "and a half"
/// refinement when the remainder toward the next unit is more than half
/// (years: `months >= 6`; months: `weeks >= 2`; weeks: `days > 3`).
///
/// Fields are assumed non-negative; the pipeline clamps future instants
/// before differencing.
pub fn phrase(diff: &Breakdown, include_half: bool) -> String {
    if diff.years != 0 || diff.months != 0 || diff.weeks != 0 {
        let (value, period) = if diff.years != 0 {
            (diff.years, Period::Years)
        } else if diff.months != 0 {
            (diff.months, Period::Months)
        } else {
            (diff.weeks, Period::Weeks)
        };
        let half = include_half
            && match period {
                Period::Years => diff.months >= 6,
                Period::Months => diff.weeks >= 2,
                Period::Weeks => diff.days > 3,
            };
        if value == 1 && !half {
            format!("a {} ago", period.singular())
        } else if half {
            format!("{value} and a half {} ago", period.plural())
        } else {
            format!("{value} {} ago", period.plural())
        }
    } else if diff.days != 0 {
        if diff.days == 1 {
            "yesterday".to_string()
        } else {
            format!("{} days ago", diff.days)
        }
    } else if diff.hours != 0 {
        if diff.hours == 1 {
            "an hour ago".to_string()
        } else {
            format!("{} hours ago", diff.hours)
        }
    } else if diff.minutes != 0 {
        if diff.minutes == 1 {
            "a minute ago".to_string()
        } else {
            format!("{} minutes ago", diff.minutes)
        }
    } else {
        "just now".to_string()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown() -> Breakdown {
        Breakdown {
            years: 0,
            months: 0,
            weeks: 0,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }

    #[test]
    fn test_weeks_dominant() {
        let diff = Breakdown {
            weeks: 2,
            ..breakdown()
        };
        assert_eq!(phrase(&diff, false), "2 weeks ago");
    }

    #[test]
    fn test_weeks_with_half() {
        let diff = Breakdown {
            weeks: 2,
            days: 4,
            ..breakdown()
        };
        assert_eq!(phrase(&diff, true), "2 and a half weeks ago");
        // Refinement is opt-in.
        assert_eq!(phrase(&diff, false), "2 weeks ago");
    }

    #[test]
    fn test_half_threshold_is_strict_for_weeks() {
        // days must exceed 3 for the week refinement.
        let diff = Breakdown {
            weeks: 2,
            days: 3,
            ..breakdown()
        };
        assert_eq!(phrase(&diff, true), "2 weeks ago");
    }

    #[test]
    fn test_years_with_half() {
        let diff = Breakdown {
            years: 28,
            months: 6,
            ..breakdown()
        };
        assert_eq!(phrase(&diff, true), "28 and a half years ago");
    }

    #[test]
    fn test_months_with_half() {
        let diff = Breakdown {
            months: 3,
            weeks: 2,
            ..breakdown()
        };
        assert_eq!(phrase(&diff, true), "3 and a half months ago");
    }

    #[test]
    fn test_singular_irregular_forms() {
        assert_eq!(
            phrase(
                &Breakdown {
                    years: 1,
                    ..breakdown()
                },
                false
            ),
            "a year ago"
        );
        assert_eq!(
            phrase(
                &Breakdown {
                    months: 1,
                    ..breakdown()
                },
                false
            ),
            "a month ago"
        );
        assert_eq!(
            phrase(
                &Breakdown {
                    weeks: 1,
                    ..breakdown()
                },
                false
            ),
            "a week ago"
        );
    }

    #[test]
    fn test_half_overrides_singular_article() {
        let diff = Breakdown {
            years: 1,
            months: 7,
            ..breakdown()
        };
        assert_eq!(phrase(&diff, true), "1 and a half years ago");
    }

    #[test]
    fn test_yesterday() {
        let diff = Breakdown {
            days: 1,
            ..breakdown()
        };
        assert_eq!(phrase(&diff, false), "yesterday");
    }

    #[test]
    fn test_plural_days() {
        let diff = Breakdown {
            days: 5,
            ..breakdown()
        };
        assert_eq!(phrase(&diff, false), "5 days ago");
    }

    #[test]
    fn test_hours_and_minutes() {
        assert_eq!(
            phrase(
                &Breakdown {
                    hours: 1,
                    ..breakdown()
                },
                false
            ),
            "an hour ago"
        );
        assert_eq!(
            phrase(
                &Breakdown {
                    hours: 7,
                    ..breakdown()
                },
                false
            ),
            "7 hours ago"
        );
        assert_eq!(
            phrase(
                &Breakdown {
                    minutes: 1,
                    ..breakdown()
                },
                false
            ),
            "a minute ago"
        );
        assert_eq!(
            phrase(
                &Breakdown {
                    minutes: 42,
                    ..breakdown()
                },
                false
            ),
            "42 minutes ago"
        );
    }

    #[test]
    fn test_seconds_alone_are_just_now() {
        let diff = Breakdown {
            seconds: 59,
            ..breakdown()
        };
        assert_eq!(phrase(&diff, false), "just now");
    }

    #[test]
    fn test_all_zero_is_just_now() {
        assert_eq!(phrase(&breakdown(), false), "just now");
        assert_eq!(phrase(&breakdown(), true), "just now");
    }

    #[test]
    fn test_dominant_unit_priority() {
        // A non-zero larger unit wins even with large smaller fields.
        let diff = Breakdown {
            months: 2,
            weeks: 3,
            days: 6,
            hours: 23,
            ..breakdown()
        };
        assert_eq!(phrase(&diff, false), "2 months ago");
    }
}
