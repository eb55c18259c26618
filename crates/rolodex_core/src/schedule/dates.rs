//! Pure date utilities for formatting, relative time and follow-up math.
//!
//! # Responsibility
//! - Parse the ISO-8601 date strings carried on contact records.
//! - Compute follow-up schedules, overdue state and date orderings.
//!
//! # Invariants
//! - Every function is total: absent input yields a sentinel ("N/A",
//!   "Never"), unparseable input yields "Invalid date" or a fallback value.
//! - Wall-clock entry points (`relative_time`, `is_overdue`,
//!   `next_contact_date`) evaluate "now" at call time; the `*_at` variants
//!   take an explicit clock for deterministic callers.

use crate::model::contact::Contact;
use chrono::{Days, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Default outreach cadence when the caller does not choose one.
pub const DEFAULT_FOLLOW_UP_INTERVAL_DAYS: u32 = 90;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Typed result of interpreting an optional date string.
///
/// Callers that need to distinguish "no date" from "bad date" match on this
/// instead of re-parsing; the convenience functions below collapse both
/// cases into their documented sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateParse {
    /// No value was present.
    Missing,
    /// A value was present but not a recognizable date.
    Invalid,
    /// Parsed date-time. Bare dates are anchored at midnight.
    Valid(NaiveDateTime),
}

impl DateParse {
    /// Returns the parsed date-time, if any.
    pub fn valid(self) -> Option<NaiveDateTime> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Missing | Self::Invalid => None,
        }
    }
}

/// Interprets an optional date string.
///
/// Accepts RFC 3339 timestamps (with offset), plain `YYYY-MM-DDTHH:MM:SS`
/// timestamps and bare `YYYY-MM-DD` dates.
pub fn parse_date(value: Option<&str>) -> DateParse {
    let Some(raw) = value else {
        return DateParse::Missing;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DateParse::Invalid;
    }

    if let Ok(with_offset) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return DateParse::Valid(with_offset.naive_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return DateParse::Valid(naive);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return DateParse::Valid(date.and_time(NaiveTime::MIN));
    }

    DateParse::Invalid
}

/// Formats a date for display, e.g. "May 15, 2023".
///
/// Returns "N/A" for absent input and "Invalid date" for unparseable input.
/// Never fails.
pub fn format_date(value: Option<&str>) -> String {
    match parse_date(value) {
        DateParse::Missing => "N/A".to_string(),
        DateParse::Invalid => "Invalid date".to_string(),
        DateParse::Valid(date) => date.format("%b %-d, %Y").to_string(),
    }
}

/// Buckets elapsed time since `value` into a human-readable phrase.
///
/// Evaluated against the wall clock at call time; the same input produces
/// different output on different days.
pub fn relative_time(value: Option<&str>) -> String {
    relative_time_at(value, Local::now().naive_local())
}

/// Clock-injected variant of [`relative_time`].
///
/// Bucket boundaries are floor divisions of whole elapsed days: 0 "Today",
/// 1 "Yesterday", 2-6 days, 7-29 weeks, 30-364 months, >=365 years. Dates
/// in the future bucket as "Today".
pub fn relative_time_at(value: Option<&str>, now: NaiveDateTime) -> String {
    let date = match parse_date(value) {
        DateParse::Missing => return "Never".to_string(),
        DateParse::Invalid => return "Invalid date".to_string(),
        DateParse::Valid(date) => date,
    };

    let days = (now - date).num_milliseconds().div_euclid(MS_PER_DAY);
    if days <= 0 {
        "Today".to_string()
    } else if days == 1 {
        "Yesterday".to_string()
    } else if days < 7 {
        format!("{days} days ago")
    } else if days < 30 {
        format!("{} weeks ago", days / 7)
    } else if days < 365 {
        format!("{} months ago", days / 30)
    } else {
        format!("{} years ago", days / 365)
    }
}

/// Computes the next outreach date: `last` plus `interval_days` calendar
/// days.
///
/// Falls back to today's date when `last` is absent or unparseable. The
/// fallback is a documented contract, not an error path.
pub fn next_contact_date(last: Option<&str>, interval_days: u32) -> NaiveDate {
    next_contact_date_at(last, interval_days, Local::now().date_naive())
}

/// Clock-injected variant of [`next_contact_date`].
pub fn next_contact_date_at(last: Option<&str>, interval_days: u32, today: NaiveDate) -> NaiveDate {
    match parse_date(last) {
        DateParse::Valid(date) => {
            let base = date.date();
            base.checked_add_days(Days::new(u64::from(interval_days)))
                .unwrap_or(base)
        }
        DateParse::Missing | DateParse::Invalid => today,
    }
}

/// Returns whether `value` is strictly before the start of the current
/// calendar day.
///
/// The candidate keeps its full precision while "today" is normalized to
/// midnight, so any time-of-day on today's date is not overdue and a bare
/// date of today sits exactly on the (non-overdue) boundary.
pub fn is_overdue(value: Option<&str>) -> bool {
    is_overdue_at(value, Local::now().naive_local())
}

/// Clock-injected variant of [`is_overdue`].
pub fn is_overdue_at(value: Option<&str>, now: NaiveDateTime) -> bool {
    let start_of_today = now.date().and_time(NaiveTime::MIN);
    match parse_date(value) {
        DateParse::Valid(date) => date < start_of_today,
        DateParse::Missing | DateParse::Invalid => false,
    }
}

/// Sortable date fields of a contact record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    LastContactDate,
    NextContactDate,
    CreatedAt,
    UpdatedAt,
}

impl DateField {
    /// Reads the named raw field off a contact.
    pub fn value_of<'a>(&self, contact: &'a Contact) -> Option<&'a str> {
        match self {
            Self::LastContactDate => contact.last_contact_date.as_deref(),
            Self::NextContactDate => contact.next_contact_date.as_deref(),
            Self::CreatedAt => Some(contact.created_at.as_str()),
            Self::UpdatedAt => Some(contact.updated_at.as_str()),
        }
    }
}

/// Returns a new sequence of contacts ordered by the named date field.
///
/// The sort is stable and non-mutating. Absent or invalid dates key as
/// epoch zero, so they gather at the earliest position.
pub fn sort_by_date(contacts: &[Contact], field: DateField, ascending: bool) -> Vec<Contact> {
    let mut sorted = contacts.to_vec();
    sorted.sort_by(|a, b| {
        let key_a = date_sort_key(field.value_of(a));
        let key_b = date_sort_key(field.value_of(b));
        if ascending {
            key_a.cmp(&key_b)
        } else {
            key_b.cmp(&key_a)
        }
    });
    sorted
}

fn date_sort_key(value: Option<&str>) -> i64 {
    parse_date(value)
        .valid()
        .map_or(0, |date| date.and_utc().timestamp_millis())
}
