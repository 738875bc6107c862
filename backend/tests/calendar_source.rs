use std::{collections::BTreeSet, io::Write, time::Duration};

use leadtime_backend::{
    error::WorkdayError,
    models::workday::HolidaySet,
    services::calendar::{
        CalendarSource, FileCalendarSource, HttpCalendarSource, StaticCalendarSource,
    },
};

mod support;
use support::date;

const FEED: &str = r#"{
    "england-and-wales": {
        "division": "england-and-wales",
        "events": [
            {"title": "Boxing Day", "date": "2023-12-26", "notes": "", "bunting": true},
            {"title": "Good Friday", "date": "2024-03-29", "notes": "", "bunting": false},
            {"title": "Easter Monday", "date": "2024-04-01", "notes": "", "bunting": true},
            {"title": "New Year's Day", "date": "2025-01-01", "notes": "", "bunting": true}
        ]
    },
    "scotland": {
        "division": "scotland",
        "events": [
            {"title": "St Andrew's Day", "date": "2024-12-02", "notes": "Substitute day", "bunting": true}
        ]
    }
}"#;

fn window() -> BTreeSet<i32> {
    [2024, 2025].into_iter().collect()
}

fn feed_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write feed");
    file
}

#[tokio::test]
async fn file_source_reads_configured_division_within_window() {
    let file = feed_file(FEED);
    let source = FileCalendarSource::new(file.path(), "england-and-wales");

    let set = source.holidays_for(&window()).await.expect("load holidays");
    assert_eq!(
        set.iter().collect::<Vec<_>>(),
        vec![date(2024, 3, 29), date(2024, 4, 1), date(2025, 1, 1)]
    );
}

#[tokio::test]
async fn file_source_switches_division() {
    let file = feed_file(FEED);
    let source = FileCalendarSource::new(file.path(), "scotland");

    let set = source.holidays_for(&window()).await.expect("load holidays");
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![date(2024, 12, 2)]);
}

#[tokio::test]
async fn file_source_missing_file_is_calendar_unavailable() {
    let dir = tempfile::tempdir().expect("temp dir");
    let source = FileCalendarSource::new(dir.path().join("absent.json"), "england-and-wales");

    let err = source.holidays_for(&window()).await.unwrap_err();
    assert!(matches!(err, WorkdayError::CalendarUnavailable(_)));
}

#[tokio::test]
async fn file_source_rejects_truncated_payload() {
    let file = feed_file(&FEED[..FEED.len() / 2]);
    let source = FileCalendarSource::new(file.path(), "england-and-wales");

    let err = source.holidays_for(&window()).await.unwrap_err();
    assert!(matches!(err, WorkdayError::CalendarUnavailable(_)));
}

#[tokio::test]
async fn static_source_applies_year_window() {
    let source = StaticCalendarSource::new(HolidaySet::new([
        date(2023, 12, 25),
        date(2024, 12, 25),
        date(2026, 12, 25),
    ]));

    let set = source.holidays_for(&window()).await.unwrap();
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![date(2024, 12, 25)]);
}

#[tokio::test]
async fn http_source_unreachable_host_is_calendar_unavailable() {
    // Port 9 (discard) on loopback is not expected to serve HTTP.
    let source = HttpCalendarSource::new(
        "http://127.0.0.1:9/bank-holidays.json",
        "england-and-wales",
        Duration::from_secs(1),
    )
    .expect("build client");

    let err = source.holidays_for(&window()).await.unwrap_err();
    assert!(matches!(err, WorkdayError::CalendarUnavailable(_)));
}
