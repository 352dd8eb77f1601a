//! # redate
//!
//! Calendar-aware relative date phrasing.
//!
//! Turns an absolute timestamp in loose textual form ("2010-03-16
//! 13:24:01-0500", "Tue, 16 Mar 2010 13:24:01 -0500") into a
//! human-readable phrase relative to a caller-supplied "now" instant
//! ("2 weeks ago", "yesterday", "just now"). The caller provides the
//! anchor — there is no hidden system-clock access in the pipeline — so
//! results are deterministic and testable.
//!
//! Hosts that display timestamps (a page adapter, a TUI, a log viewer)
//! feed each element's text through [`redate`] and either substitute the
//! returned phrase or, on [`RedateError::Unrecognized`], leave the
//! original text untouched.
//!
//! ## Modules
//!
//! - [`parse`] — fallback chain of date parsers (RFC 2822, then an ISO 8601 calendar subset)
//! - [`diff`] — calendar-aware difference breakdown between two instants
//! - [`phrase`] — dominant-unit selection and phrase rendering
//! - [`calendar`] — leap years and month lengths
//! - [`error`] — error types

pub mod calendar;
pub mod diff;
pub mod error;
pub mod parse;
pub mod phrase;

pub use diff::{relative_difference, Breakdown};
pub use error::{RedateError, Result};
pub use parse::{local_utc_offset, ParserChain};
pub use phrase::phrase;

use chrono::{DateTime, FixedOffset};

/// Options for [`redate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RedateOptions {
    /// Refine the large units with "and a half" when the remainder toward
    /// the next unit is more than half ("2 and a half weeks ago").
    pub include_half: bool,
}

/// Rephrase a textual date as a relative phrase against `now`.
///
/// Convenience form of [`redate_with_parsers`] using a parser chain whose
/// zone-less ISO fallback is the process-wide cached local offset
/// ([`local_utc_offset`]). Embedders and tests that need deterministic
/// zone handling should build a [`ParserChain`] with an explicit offset
/// and call [`redate_with_parsers`] directly.
///
/// # Errors
///
/// Returns [`RedateError::Unrecognized`] when no parser can interpret
/// `text`; the caller should leave the original text as is.
pub fn redate(text: &str, now: DateTime<FixedOffset>, options: &RedateOptions) -> Result<String> {
    redate_with_parsers(text, now, &ParserChain::from_local_offset(), options)
}

/// Rephrase a textual date as a relative phrase against `now`, with an
/// explicit parser chain.
///
/// An instant strictly after `now` clamps to `"just now"`: every phrase
/// template is "ago"-shaped, so future dates clamp rather than render
/// with a sign.
///
/// # Arguments
///
/// * `text` — The raw display text (surrounding whitespace tolerated)
/// * `now` — The reference instant the phrase is relative to
/// * `parsers` — The parser chain, carrying the zone-less ISO fallback offset
/// * `options` — Phrasing options
///
/// # Errors
///
/// Returns [`RedateError::Unrecognized`] when no parser can interpret
/// `text`.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use redate::{redate_with_parsers, ParserChain, RedateOptions};
///
/// let offset = FixedOffset::west_opt(5 * 3600).unwrap();
/// let now = offset.with_ymd_and_hms(2010, 4, 1, 0, 0, 0).unwrap();
/// let parsers = ParserChain::new(offset);
///
/// let out = redate_with_parsers(
///     "2010-03-16 13:24:01-0500",
///     now,
///     &parsers,
///     &RedateOptions::default(),
/// )
/// .unwrap();
/// assert_eq!(out, "2 weeks ago");
/// ```
pub fn redate_with_parsers(
    text: &str,
    now: DateTime<FixedOffset>,
    parsers: &ParserChain,
    options: &RedateOptions,
) -> Result<String> {
    let date = parsers
        .parse(text)
        .ok_or_else(|| RedateError::Unrecognized(text.trim().to_string()))?;
    if date > now {
        return Ok("just now".to_string());
    }
    Ok(phrase(&relative_difference(date, now), options.include_half))
}

// ── Tests ───────────────────────────────────────────────────────────────────
