//! Course sections and the raw records they are built from.

use std::fmt;

use chrono::{NaiveDateTime, NaiveTime, Weekday};
use serde::Deserialize;

use crate::error::ScheduleError;
use crate::temporal::{
    ensure_ordered, parse_calendar_date, parse_time_of_day, parse_time_range, parse_weekdays,
    weekday_code,
};

// ── WeekdaySet ──────────────────────────────────────────────────────────────

/// The days a section meets, in the order the record lists them.
///
/// The listed order matters: the first day is the section's primary meeting
/// day for display ordering. The original text is kept so reports echo the
/// record verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekdaySet {
    days: Vec<Weekday>,
    label: String,
}

impl WeekdaySet {
    /// Parse a comma-separated code list such as `"M, W, F"`.
    pub fn parse(text: &str) -> Result<Self, ScheduleError> {
        let days = parse_weekdays(text)?;
        Ok(Self {
            days,
            label: text.trim().to_string(),
        })
    }

    /// Build a set from days directly, labelled with canonical codes.
    pub fn from_days(days: &[Weekday]) -> Self {
        let label = days
            .iter()
            .map(|d| weekday_code(*d))
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            days: days.to_vec(),
            label,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// The first day as listed (not the earliest in the week).
    pub fn first(&self) -> Option<Weekday> {
        self.days.first().copied()
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Whether the two sets share at least one day.
    pub fn intersects(&self, other: &WeekdaySet) -> bool {
        self.days.iter().any(|d| other.contains(*d))
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

// ── Section ─────────────────────────────────────────────────────────────────

/// One scheduled offering of a course.
///
/// `None` times, dates and an empty [`WeekdaySet`] mean the section has no
/// fixed value for that field (online, internship, independent study).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub course_name: String,
    pub name: String,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub days: WeekdaySet,
    /// Delivery method tag, e.g. `LEC`, `ONLIN`, `INTRN`.
    pub method: String,
    /// Duration label, e.g. `Full Semester`.
    pub duration: String,
}

impl Section {
    /// A section with no fixed meeting pattern or term bounds.
    pub fn new(course_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            course_name: course_name.into(),
            name: name.into(),
            start_time: None,
            end_time: None,
            start_date: None,
            end_date: None,
            days: WeekdaySet::default(),
            method: String::new(),
            duration: String::new(),
        }
    }

    pub fn with_meeting(mut self, days: WeekdaySet, start: NaiveTime, end: NaiveTime) -> Self {
        self.days = days;
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    pub fn with_term(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Start and end clock times, if both are present.
    pub fn clock_interval(&self) -> Option<(NaiveTime, NaiveTime)> {
        Some((self.start_time?, self.end_time?))
    }

    /// Start and end semester bounds, if both are present.
    pub fn term_interval(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        Some((self.start_date?, self.end_date?))
    }

    /// True iff the section meets on at least one day at a known clock interval.
    pub fn has_fixed_meeting(&self) -> bool {
        !self.days.is_empty() && self.clock_interval().is_some()
    }
}

// ── SectionRecord ───────────────────────────────────────────────────────────

/// A raw section row as supplied by the catalog loader.
///
/// Field names follow the upstream column names. A missing key, `null` and
/// `""` all mean "no fixed value".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SectionRecord {
    #[serde(rename = "Course_Name", default)]
    pub course_name: Option<String>,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "STime", default)]
    pub start_time: Option<String>,
    #[serde(rename = "ETime", default)]
    pub end_time: Option<String>,
    /// Combined `START - END` form, used only when `STime` is absent.
    #[serde(rename = "Time", default)]
    pub time_range: Option<String>,
    #[serde(rename = "SDate", default)]
    pub start_date: Option<String>,
    #[serde(rename = "EDate", default)]
    pub end_date: Option<String>,
    #[serde(rename = "Mtg_Days", default)]
    pub meeting_days: Option<String>,
    #[serde(rename = "Method", default)]
    pub method: Option<String>,
    #[serde(rename = "Duration", default)]
    pub duration: Option<String>,
}

impl TryFrom<SectionRecord> for Section {
    type Error = ScheduleError;

    fn try_from(record: SectionRecord) -> Result<Self, Self::Error> {
        let field = |value: &Option<String>| value.as_deref().unwrap_or("").to_string();

        let mut start_time = parse_time_of_day(&field(&record.start_time))?;
        let mut end_time = parse_time_of_day(&field(&record.end_time))?;
        if start_time.is_none() && end_time.is_none() {
            if let Some((start, end)) = parse_time_range(&field(&record.time_range))? {
                start_time = Some(start);
                end_time = Some(end);
            }
        }

        match (start_time, end_time) {
            (Some(start), Some(end)) => ensure_ordered(start, end)?,
            (None, None) => {}
            _ => {
                return Err(ScheduleError::InvalidTimeRange(format!(
                    "section '{}' has only one of start and end time",
                    record.name
                )))
            }
        }

        let start_date = parse_calendar_date(&field(&record.start_date))?;
        let end_date = parse_calendar_date(&field(&record.end_date))?;
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                return Err(ScheduleError::InvalidDate(format!(
                    "section '{}' ends {} before it starts {}",
                    record.name, end, start
                )));
            }
        }

        Ok(Section {
            course_name: field(&record.course_name),
            start_time,
            end_time,
            start_date,
            end_date,
            days: WeekdaySet::parse(&field(&record.meeting_days))?,
            method: field(&record.method),
            duration: field(&record.duration),
            name: record.name,
        })
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
