//! Fallback-chain date parsing.
//!
//! A [`ParserChain`] tries a fixed sequence of parsers against the input
//! text and stops at the first hit: the host platform's RFC 2822 parser
//! first, then a loose ISO 8601 calendar-date subset. A parser that cannot
//! interpret the text is a *miss*, not an error — `None` from the whole
//! chain means the caller should leave the original text untouched.
//!
//! The ISO subset covers calendar dates only (week dates and ordinal dates
//! are not supported): a 4-digit year, optional 2-digit month and day
//! (hyphens optional), an optional whitespace-separated time of day
//! (colons optional), and an optional zone designator (`Z` or a signed
//! `hh[:?mm]` offset). When the input carries no zone designator the
//! chain's configured default offset is assumed.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Offset, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Structural validation pattern for the ISO calendar-date subset.
///
/// Anything that does not match is rejected before field extraction; the
/// named groups then feed extraction directly, so validation and parsing
/// agree by construction.
static ISO_CALENDAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^\s*
        (?P<year>\d{4})
        (?: -? (?P<month>\d{2}) (?: -? (?P<day>\d{2}) )? )?
        \s*
        (?:
            (?P<hour>\d{2})
            (?: :? (?P<minute>\d{2}) (?: :? (?P<second>\d{2}) )? )?
            \s*
            (?:
                (?P<zsign>[+-]) (?P<zhour>\d{2}) (?: :? (?P<zminute>\d{2}) )?
                | (?P<zulu>Z)
            )?
        )?
        \s*$",
    )
    .expect("ISO calendar pattern is valid")
});

/// The local environment's UTC offset, computed once on first use.
///
/// Deliberately *not* recomputed per call: every zone-less ISO parse in the
/// life of the process sees the same fallback offset, even across a DST
/// transition. Embedders who need deterministic behavior should inject an
/// explicit offset via [`ParserChain::new`] instead of relying on this.
pub fn local_utc_offset() -> FixedOffset {
    static LOCAL_OFFSET: Lazy<FixedOffset> = Lazy::new(|| Local::now().offset().fix());
    *LOCAL_OFFSET
}

/// An ordered chain of date parsers sharing one piece of configuration:
/// the UTC offset assumed for ISO input that carries no zone designator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserChain {
    default_offset: FixedOffset,
}

impl ParserChain {
    /// A chain that assumes `default_offset` for zone-less ISO input.
    pub fn new(default_offset: FixedOffset) -> Self {
        Self { default_offset }
    }

    /// A chain using the process-wide cached local offset
    /// ([`local_utc_offset`]).
    pub fn from_local_offset() -> Self {
        Self::new(local_utc_offset())
    }

    /// The offset assumed for zone-less ISO input.
    pub fn default_offset(&self) -> FixedOffset {
        self.default_offset
    }

    /// Try each parser in registration order; the first hit wins.
    ///
    /// Returns `None` when no parser can interpret `text` (total parse
    /// failure).
    pub fn parse(&self, text: &str) -> Option<DateTime<FixedOffset>> {
        try_rfc2822(text).or_else(|| self.try_iso(text))
    }

    /// Parse the ISO calendar-date subset described in the module docs.
    ///
    /// Missing month and day default to 1; missing minute and second
    /// default to 0. Input that matches the pattern structurally but does
    /// not name a real calendar date or time of day (month 13, hour 25)
    /// is a miss, not a panic.
    fn try_iso(&self, text: &str) -> Option<DateTime<FixedOffset>> {
        let caps = ISO_CALENDAR.captures(text)?;

        let year: i32 = caps["year"].parse().ok()?;
        let month: u32 = match caps.name("month") {
            Some(m) => m.as_str().parse().ok()?,
            None => 1,
        };
        let day: u32 = match caps.name("day") {
            Some(d) => d.as_str().parse().ok()?,
            None => 1,
        };

        let hour: u32 = match caps.name("hour") {
            Some(h) => h.as_str().parse().ok()?,
            None => 0,
        };
        let minute: u32 = match caps.name("minute") {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };
        let second: u32 = match caps.name("second") {
            Some(s) => s.as_str().parse().ok()?,
            None => 0,
        };

        let offset = if caps.name("zulu").is_some() {
            Utc.fix()
        } else if let (Some(sign), Some(zh)) = (caps.name("zsign"), caps.name("zhour")) {
            let hours: i32 = zh.as_str().parse().ok()?;
            let minutes: i32 = match caps.name("zminute") {
                Some(zm) => zm.as_str().parse().ok()?,
                None => 0,
            };
            let mut seconds = hours * 3600 + minutes * 60;
            if sign.as_str() == "-" {
                seconds = -seconds;
            }
            FixedOffset::east_opt(seconds)?
        } else {
            self.default_offset
        };

        let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)?;
        offset.from_local_datetime(&naive).single()
    }
}

impl Default for ParserChain {
    fn default() -> Self {
        Self::from_local_offset()
    }
}

/// Delegate loose "natural" formats to chrono's stock RFC 2822 parser.
fn try_rfc2822(text: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc2822(text.trim()).ok()
}

// ── Tests ───────────────────────────────────────────────────────────────────
