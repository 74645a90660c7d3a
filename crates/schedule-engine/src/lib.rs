//! # schedule-engine
//!
//! Deterministic time-conflict detection and display ordering for course
//! schedules.
//!
//! Given course sections parsed from their catalog records, the engine decides
//! whether a candidate combination has a time conflict, orders the sections of
//! a combination for display, and renders a ranked list of scored combinations
//! as text. Generating and scoring combinations is left to the caller.
//!
//! ## Modules
//!
//! - [`temporal`] — Time, date, range and weekday parsing; interval comparison
//! - [`section`] — Sections, weekday sets and raw section records
//! - [`combination`] — Scored combinations and the scorer's record
//! - [`conflict`] — Detect overlapping sections in a combination
//! - [`sort`] — Display ordering within a combination
//! - [`report`] — Human-readable summary of scored combinations
//! - [`error`] — Error types

pub mod combination;
pub mod conflict;
pub mod error;
pub mod report;
pub mod section;
pub mod sort;
pub mod temporal;

pub use combination::{ScoreInfo, ScoredCombination, ScoredCombinationRecord};
pub use conflict::{find_conflicts, has_time_conflict, sections_conflict, Conflict};
pub use error::{Result, ScheduleError};
pub use report::{format_section_line, print_summary, write_summary};
pub use section::{Section, SectionRecord, WeekdaySet};
pub use sort::{display_key, display_order, sort_combination, DisplayKey};
pub use temporal::{
    format_time_of_day, minutes_between, overlaps, parse_calendar_date, parse_time_of_day,
    parse_time_range, parse_weekdays,
};
