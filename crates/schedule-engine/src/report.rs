//! Human-readable summary of scored combinations.

use std::io::{self, Write};

use tracing::debug;

use crate::combination::ScoredCombination;
use crate::error::ScheduleError;
use crate::section::Section;
use crate::temporal::format_time_of_day;

/// Write the summary for `combinations` to stdout.
///
/// See [`write_summary`] for the layout.
pub fn print_summary(combinations: &[ScoredCombination]) -> Result<(), ScheduleError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_summary(&mut out, combinations)
}

/// Write the summary for `combinations` to `out`.
///
/// Combinations are printed in the order given and are assumed to be best
/// first already. Sections are printed in the order stored; apply
/// [`sort_combination`](crate::sort::sort_combination) beforehand for display
/// order.
///
/// ```text
/// Generated valid schedule combinations: 2
///
/// Option 1: Score = 1
///   BIO-151-101 (M, W, F 08:00 AM - 09:00 AM)
///   PSY-103-101 (ONLIN, no fixed meeting time)
/// ```
pub fn write_summary<W: Write>(
    out: &mut W,
    combinations: &[ScoredCombination],
) -> Result<(), ScheduleError> {
    debug!(combinations = combinations.len(), "writing summary");

    writeln!(
        out,
        "Generated valid schedule combinations: {}",
        combinations.len()
    )?;
    for (index, combination) in combinations.iter().enumerate() {
        writeln!(out)?;
        writeln!(
            out,
            "Option {}: Score = {}",
            index + 1,
            combination.score_info.score()
        )?;
        for section in &combination.sections {
            writeln!(out, "  {}", format_section_line(section))?;
        }
    }
    out.flush()?;
    Ok(())
}

/// One report line for a section.
pub fn format_section_line(section: &Section) -> String {
    match section.clock_interval() {
        Some((start, end)) if !section.days.is_empty() => format!(
            "{} ({} {} - {})",
            section.name,
            section.days,
            format_time_of_day(start),
            format_time_of_day(end)
        ),
        _ => {
            let method = if section.method.is_empty() {
                "TBA"
            } else {
                section.method.as_str()
            };
            format!("{} ({}, no fixed meeting time)", section.name, method)
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combination::ScoreInfo;
    use crate::section::WeekdaySet;
    use chrono::NaiveTime;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn lecture(name: &str, days: &str, start: NaiveTime, end: NaiveTime) -> Section {
        Section::new(&name[..7], name)
            .with_meeting(WeekdaySet::parse(days).unwrap(), start, end)
            .with_method("LEC")
    }

    fn render(combinations: &[ScoredCombination]) -> String {
        let mut buf = Vec::new();
        write_summary(&mut buf, combinations).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn two_options() -> Vec<ScoredCombination> {
        vec![
            ScoredCombination::new(
                vec![
                    lecture("BIO-151-101", "M, W, F", hm(8, 0), hm(9, 0)),
                    lecture("CHE-171-102", "M, W, F", hm(8, 0), hm(9, 0)),
                ],
                ScoreInfo::new(1.0),
            ),
            ScoredCombination::new(
                vec![
                    lecture("CHE-171-101", "T, TH", hm(10, 0), hm(11, 0)),
                    lecture("CHE-151-102", "T, TH", hm(10, 0), hm(11, 0)),
                ],
                ScoreInfo::new(2.0),
            ),
        ]
    }

    #[test]
    fn test_summary_contents() {
        let out = render(&two_options());
        assert!(out.contains("Generated valid schedule combinations: 2"));
        assert!(out.contains("Option 1: Score = 1\n"));
        assert!(out.contains("BIO-151-101 (M, W, F 08:00 AM - 09:00 AM)"));
        assert!(out.contains("Option 2: Score = 2\n"));
        assert!(out.contains("CHE-171-101 (T, TH 10:00 AM - 11:00 AM)"));
    }

    #[test]
    fn test_summary_preserves_given_order() {
        let mut options = two_options();
        options.reverse();
        let out = render(&options);
        let first = out.find("Option 1: Score = 2").unwrap();
        let second = out.find("Option 2: Score = 1").unwrap();
        assert!(first < second);
        assert!(out.find("CHE-171-101").unwrap() < out.find("BIO-151-101").unwrap());
    }

    #[test]
    fn test_summary_header_first() {
        let out = render(&two_options());
        assert!(out.starts_with("Generated valid schedule combinations: 2\n"));
    }

    #[test]
    fn test_summary_empty_list() {
        assert_eq!(render(&[]), "Generated valid schedule combinations: 0\n");
    }

    #[test]
    fn test_summary_fractional_score() {
        let out = render(&[ScoredCombination::new(vec![], ScoreInfo::new(2.5))]);
        assert!(out.contains("Option 1: Score = 2.5"));
    }

    #[test]
    fn test_untimed_section_line_names_method() {
        let online = Section::new("PSY-103", "PSY-103-101").with_method("ONLIN");
        assert_eq!(
            format_section_line(&online),
            "PSY-103-101 (ONLIN, no fixed meeting time)"
        );
    }

    #[test]
    fn test_untimed_section_line_without_method() {
        let section = Section::new("BMC-190", "BMC-190-101");
        assert_eq!(
            format_section_line(&section),
            "BMC-190-101 (TBA, no fixed meeting time)"
        );
    }
}
