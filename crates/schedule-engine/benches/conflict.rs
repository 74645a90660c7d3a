use std::hint::black_box;

use chrono::{NaiveDate, NaiveTime};
use criterion::{criterion_group, criterion_main, Criterion};
use schedule_engine::{has_time_conflict, sort_combination, Section, WeekdaySet};

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn semester_schedule() -> Vec<Section> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 8)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 5, 3)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let timed = [
        ("ENG-103", "M, W, F", hm(8, 0), hm(8, 50)),
        ("CHE-171", "M, W", hm(10, 0), hm(11, 15)),
        ("BIO-151", "T, TH", hm(9, 0), hm(10, 15)),
        ("MAT-201", "T, TH", hm(13, 0), hm(14, 15)),
        ("HIS-110", "M, W, F", hm(11, 0), hm(11, 50)),
        ("CHE-171L", "F", hm(13, 0), hm(16, 0)),
    ];
    let mut sections: Vec<Section> = timed
        .into_iter()
        .map(|(course, days, s, e)| {
            Section::new(course, format!("{course}-101"))
                .with_meeting(WeekdaySet::parse(days).unwrap(), s, e)
                .with_term(start, end)
                .with_method("LEC")
        })
        .collect();
    sections.push(Section::new("PSY-103", "PSY-103-OL1").with_method("ONLIN"));
    sections.push(Section::new("BMC-190", "BMC-190-101").with_method("INTRN"));
    sections
}

fn bench_conflict(c: &mut Criterion) {
    let sections = semester_schedule();
    c.bench_function("has_time_conflict/8_sections", |b| {
        b.iter(|| has_time_conflict(black_box(&sections)))
    });
    c.bench_function("sort_combination/8_sections", |b| {
        b.iter(|| sort_combination(black_box(&sections)))
    });
}

criterion_group!(benches, bench_conflict);
criterion_main!(benches);
