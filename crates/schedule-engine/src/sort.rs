//! Display ordering of the sections within one combination.

use std::cmp::Ordering;

use chrono::NaiveTime;

use crate::section::Section;

/// Composite ordering key for a section in a printed schedule.
///
/// Fields compare in declaration order:
///
/// 1. Sections with a primary meeting day and a start time come first.
/// 2. Rank of the first listed day, Monday (0) through Sunday (6).
/// 3. Start time.
/// 4. Course name.
/// 5. Section name, so two sections of one course still order the same way
///    whatever order they arrive in.
///
/// Untimed sections carry `None` for the day and time, so among themselves
/// they order by course name, then section name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DisplayKey<'a> {
    untimed: bool,
    day_rank: Option<u32>,
    start: Option<NaiveTime>,
    course_name: &'a str,
    name: &'a str,
}

/// Build the [`DisplayKey`] for a section.
pub fn display_key(section: &Section) -> DisplayKey<'_> {
    match (section.days.first(), section.start_time) {
        (Some(day), Some(start)) => DisplayKey {
            untimed: false,
            day_rank: Some(day.num_days_from_monday()),
            start: Some(start),
            course_name: &section.course_name,
            name: &section.name,
        },
        _ => DisplayKey {
            untimed: true,
            day_rank: None,
            start: None,
            course_name: &section.course_name,
            name: &section.name,
        },
    }
}

/// Compare two sections by their display keys.
pub fn display_order(a: &Section, b: &Section) -> Ordering {
    display_key(a).cmp(&display_key(b))
}

/// Return a copy of the combination ordered for display.
///
/// The input is left untouched. Sorting the result again returns it unchanged.
pub fn sort_combination(sections: &[Section]) -> Vec<Section> {
    let mut sorted = sections.to_vec();
    sorted.sort_by(display_order);
    sorted
}

// ── Tests ───────────────────────────────────────────────────────────────────
