//! Time-conflict detection between course sections.
//!
//! Two sections conflict only when all three axes overlap:
//!
//! 1. **Weekday**: both meet on at least one common day.
//! 2. **Clock**: their `[start, end)` times overlap. Back-to-back sections do not.
//! 3. **Term**: their semester ranges overlap. Missing term bounds count as
//!    overlapping, so dates can only narrow a conflict, never create one.
//!
//! A section without fixed meeting days or times never conflicts with anything.

use tracing::{debug, trace};

use crate::section::Section;
use crate::temporal::overlaps;

/// A pair of conflicting sections, as indices into the checked slice (`first < second`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict {
    pub first: usize,
    pub second: usize,
}

/// Whether any two sections in the slice conflict.
///
/// Stops at the first conflicting pair. Zero or one section never conflicts.
pub fn has_time_conflict(sections: &[Section]) -> bool {
    conflicting_pairs(sections).next().is_some()
}

/// Every conflicting pair, in scan order.
pub fn find_conflicts(sections: &[Section]) -> Vec<Conflict> {
    conflicting_pairs(sections).collect()
}

/// Whether two individual sections conflict.
pub fn sections_conflict(a: &Section, b: &Section) -> bool {
    if !a.days.intersects(&b.days) {
        return false;
    }

    let clock = match (a.clock_interval(), b.clock_interval()) {
        (Some((start_a, end_a)), Some((start_b, end_b))) => {
            overlaps(start_a, end_a, start_b, end_b)
        }
        _ => false,
    };

    clock && terms_overlap(a, b)
}

fn terms_overlap(a: &Section, b: &Section) -> bool {
    match (a.term_interval(), b.term_interval()) {
        (Some((start_a, end_a)), Some((start_b, end_b))) => {
            overlaps(start_a, end_a, start_b, end_b)
        }
        _ => true,
    }
}

fn conflicting_pairs(sections: &[Section]) -> impl Iterator<Item = Conflict> + '_ {
    (0..sections.len())
        .flat_map(move |i| (i + 1..sections.len()).map(move |j| (i, j)))
        .filter(move |&(i, j)| {
            let (a, b) = (&sections[i], &sections[j]);
            let conflict = sections_conflict(a, b);
            trace!(first = %a.name, second = %b.name, conflict, "checked pair");
            if conflict {
                debug!(first = %a.name, second = %b.name, "time conflict");
            }
            conflict
        })
        .map(|(first, second)| Conflict { first, second })
}

// ── Tests ───────────────────────────────────────────────────────────────────
