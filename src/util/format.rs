//! Display formatting for dates, excerpts and avatars.
//!
//! DESIGN
//! ======
//! Timestamps arrive as ISO 8601 strings, sometimes without an offset. Every
//! formatter takes the raw string and degrades to a fixed placeholder when it
//! does not parse, so a bad timestamp never breaks a page.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::ApiError;

/// Characters of the title used when an article has no excerpt.
pub const EXCERPT_FALLBACK_CHARS: usize = 150;

/// Parse an ISO 8601 timestamp; offset-less values are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// `Mar 05, 2024`
pub fn short_date(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(String::new, |ts| ts.format("%b %d, %Y").to_string())
}

/// `March 05, 2024`
pub fn long_date(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(String::new, |ts| ts.format("%B %d, %Y").to_string())
}

/// `Joined March 2024`
pub fn joined_label(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| "Joined recently".to_owned(), |ts| format!("Joined {}", ts.format("%B %Y")))
}

/// Distance from `raw` to `now` in words, e.g. `3 days ago`.
pub fn relative_time(raw: &str, now: DateTime<Utc>) -> String {
    let Some(ts) = parse_timestamp(raw) else {
        return "Recently".to_owned();
    };
    let seconds = (now - ts).num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    let months = days / 30;
    let years = days / 365;

    if minutes < 1 {
        "less than a minute ago".to_owned()
    } else if hours < 1 {
        plural_ago(minutes, "minute", "")
    } else if days < 1 {
        plural_ago(hours, "hour", "about ")
    } else if months < 1 {
        plural_ago(days, "day", "")
    } else if years < 1 {
        plural_ago(months, "month", "about ")
    } else {
        plural_ago(years, "year", "about ")
    }
}

fn plural_ago(count: i64, unit: &str, approx: &str) -> String {
    if count == 1 {
        format!("{approx}1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// `relative_time` against the current clock.
pub fn time_ago(raw: &str) -> String {
    relative_time(raw, Utc::now())
}

/// First `max` characters of `text`, never splitting a character.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Excerpt to save with an article: the typed excerpt, or the start of the title.
pub fn excerpt_or_title(excerpt: &str, title: &str) -> String {
    let excerpt = excerpt.trim();
    if excerpt.is_empty() {
        truncate_chars(title.trim(), EXCERPT_FALLBACK_CHARS)
    } else {
        excerpt.to_owned()
    }
}

/// Uppercased first character of `name`, or `fallback` for an empty name.
pub fn initial(name: &str, fallback: char) -> String {
    name.trim().chars().next().unwrap_or(fallback).to_uppercase().collect()
}

/// Page-level text for a failed load: `not_found` for a 404, `fallback` otherwise.
pub fn load_failure(err: &ApiError, not_found: &str, fallback: &str) -> String {
    if err.is_not_found() { not_found.to_owned() } else { fallback.to_owned() }
}
