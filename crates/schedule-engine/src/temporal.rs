//! Parsing and comparison of the textual time fields found on course sections.
//!
//! Every parser treats an empty (or all-whitespace) string as "no fixed value"
//! and returns `Ok(None)`. Any other input must match its format exactly; a
//! malformed value is an error, never a silent `None`.
//!
//! # Formats
//!
//! - Time of day: `HH:MM AM` / `HH:MM PM` (e.g., `"08:00 AM"`, `"11:59 PM"`)
//! - Calendar date: `YYYY-MM-DD HH:MM:SS`, 24-hour clock (e.g., `"2024-01-01 08:00:00"`)
//! - Time range: `<time> - <time>` (e.g., `"08:00 AM - 09:00 AM"`)
//! - Weekday list: comma separated codes from `M T W Th F Sa Su` (e.g., `"M, W, F"`)

use chrono::{NaiveDateTime, NaiveTime, Timelike, Weekday};

use crate::error::ScheduleError;

const TIME_FORMAT: &str = "%I:%M %p";
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ── Temporal parser ─────────────────────────────────────────────────────────

/// Parse a 12-hour clock string with an AM/PM suffix.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidTime`] if the input is non-empty and is not
/// a valid `HH:MM AM|PM` time.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use schedule_engine::temporal::parse_time_of_day;
///
/// assert_eq!(parse_time_of_day("11:59 PM").unwrap(), NaiveTime::from_hms_opt(23, 59, 0));
/// assert_eq!(parse_time_of_day("").unwrap(), None);
/// ```
pub fn parse_time_of_day(text: &str) -> Result<Option<NaiveTime>, ScheduleError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    // chrono's format space also matches no space at all; records always
    // separate the AM/PM suffix.
    let spaced_suffix = text
        .get(..text.len().saturating_sub(2))
        .is_some_and(|clock| clock.ends_with(char::is_whitespace));
    if !spaced_suffix {
        return Err(ScheduleError::InvalidTime(format!(
            "'{}': expected 'HH:MM AM' or 'HH:MM PM'",
            text
        )));
    }

    NaiveTime::parse_from_str(text, TIME_FORMAT)
        .map(Some)
        .map_err(|e| ScheduleError::InvalidTime(format!("'{}': {}", text, e)))
}

/// Parse a `YYYY-MM-DD HH:MM:SS` semester bound.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidDate`] if the input is non-empty and does not
/// match the format.
pub fn parse_calendar_date(text: &str) -> Result<Option<NaiveDateTime>, ScheduleError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    NaiveDateTime::parse_from_str(text, DATE_FORMAT)
        .map(Some)
        .map_err(|e| ScheduleError::InvalidDate(format!("'{}': {}", text, e)))
}

/// Parse a `START - END` clock range.
///
/// An empty input means the section has no fixed meeting time and yields
/// `Ok(None)`. Otherwise both sides must be present, and `END` may not come
/// before `START`.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidTimeRange`] if the separator is missing or
/// repeated, a side is empty, or the range runs backwards. Returns
/// [`ScheduleError::InvalidTime`] if a side is not a valid time.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use schedule_engine::temporal::parse_time_range;
///
/// let (start, end) = parse_time_range("08:00 AM - 09:00 AM").unwrap().unwrap();
/// assert_eq!(start, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
/// assert_eq!(end, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
/// ```
pub fn parse_time_range(text: &str) -> Result<Option<(NaiveTime, NaiveTime)>, ScheduleError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let parts: Vec<&str> = text.split('-').collect();
    if parts.len() != 2 {
        return Err(ScheduleError::InvalidTimeRange(format!(
            "'{}': expected exactly one '-' separator",
            text
        )));
    }

    let start = parse_time_of_day(parts[0])?;
    let end = parse_time_of_day(parts[1])?;
    match (start, end) {
        (Some(start), Some(end)) => {
            ensure_ordered(start, end)?;
            Ok(Some((start, end)))
        }
        _ => Err(ScheduleError::InvalidTimeRange(format!(
            "'{}': both start and end are required",
            text
        ))),
    }
}

/// Parse a comma-separated weekday list, keeping the order as written.
///
/// Codes are matched case-insensitively, so `"T, TH"` and `"T, Th"` are the same.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidWeekday`] for an unknown or empty code.
pub fn parse_weekdays(text: &str) -> Result<Vec<Weekday>, ScheduleError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.split(',')
        .map(|code| {
            parse_weekday_code(code.trim()).ok_or_else(|| {
                ScheduleError::InvalidWeekday(format!("'{}' in '{}'", code.trim(), text))
            })
        })
        .collect()
}

/// The canonical code for a weekday (`M`, `T`, `W`, `Th`, `F`, `Sa`, `Su`).
pub fn weekday_code(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "M",
        Weekday::Tue => "T",
        Weekday::Wed => "W",
        Weekday::Thu => "Th",
        Weekday::Fri => "F",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

/// Render a time of day the way section records spell it (`"08:00 AM"`).
pub fn format_time_of_day(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Reject a range whose end comes before its start.
pub(crate) fn ensure_ordered(start: NaiveTime, end: NaiveTime) -> Result<(), ScheduleError> {
    if end < start {
        return Err(ScheduleError::InvalidTimeRange(format!(
            "end {} is before start {}",
            format_time_of_day(end),
            format_time_of_day(start)
        )));
    }
    Ok(())
}

fn parse_weekday_code(code: &str) -> Option<Weekday> {
    match code.to_ascii_lowercase().as_str() {
        "m" => Some(Weekday::Mon),
        "t" => Some(Weekday::Tue),
        "w" => Some(Weekday::Wed),
        "th" => Some(Weekday::Thu),
        "f" => Some(Weekday::Fri),
        "sa" => Some(Weekday::Sat),
        "su" => Some(Weekday::Sun),
        _ => None,
    }
}

// ── Interval comparator ─────────────────────────────────────────────────────

/// Signed minute difference `a - b`, ignoring seconds.
///
/// Both operands are present times; a section without a fixed time has to be
/// filtered out before calling this.
pub fn minutes_between(a: NaiveTime, b: NaiveTime) -> i64 {
    minute_of_day(a) - minute_of_day(b)
}

/// Whether two half-open intervals `[start_a, end_a)` and `[start_b, end_b)` overlap.
///
/// Intervals that merely touch (`end_a == start_b`) do not overlap.
pub fn overlaps<T: PartialOrd>(start_a: T, end_a: T, start_b: T, end_b: T) -> bool {
    start_a < end_b && start_b < end_a
}

fn minute_of_day(t: NaiveTime) -> i64 {
    i64::from(t.hour()) * 60 + i64::from(t.minute())
}

// ── Tests ───────────────────────────────────────────────────────────────────
