//! Lenient ISO-8601 instant parsing with one canonical output form
//!
//! The tracker emits instants in several ISO-8601 spellings depending on
//! deployment version: with fractional seconds, without, and occasionally
//! with no UTC designator at all. Parsing accepts all of them; formatting
//! always emits the fractional-seconds UTC form, so repeated
//! `format(parse(x))` round-trips converge on a single canonical string.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// Fallback spelling for instants that arrive without an offset. Treated
/// as UTC, matching what the server stores.
const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse an ISO-8601 instant. RFC 3339 forms (with or without fractional
/// seconds) are preferred; an offset-less `YYYY-MM-DDTHH:MM:SS` form is the
/// second attempt. Returns `None` when neither attempt recognizes the input.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT).ok().map(|naive| naive.and_utc())
}

/// Format an instant in the canonical wire form: UTC, fractional seconds,
/// `Z` designator (e.g. `2024-01-01T00:00:00.000Z`).
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
