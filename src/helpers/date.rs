//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Date-time layouts accepted in frontmatter, tried in order
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Date-only layouts accepted in frontmatter
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y"];

/// Parse a date-like frontmatter string into a calendar date
///
/// Values carrying an offset are converted to UTC before the date is taken.
/// Returns `None` when nothing matches.
///
/// # Examples
/// ```ignore
/// normalize_date("2024-01-15 10:30:00") // -> Some(2024-01-15)
/// ```
pub fn normalize_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    None
}

/// The current date, used whenever a post carries no usable date
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Format a date for display (like "January 5, 2024")
pub fn format_display(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
