use async_trait::async_trait;
use std::{collections::BTreeSet, sync::Arc};

use leadtime_backend::{
    error::WorkdayError,
    models::workday::{EngineSettings, HolidaySet},
    services::calendar::CalendarSource,
};

mod support;
use support::{at, date, england_and_wales, midnight, service_with, static_service};

struct UnreachableCalendar;

#[async_trait]
impl CalendarSource for UnreachableCalendar {
    async fn holidays_for(&self, _years: &BTreeSet<i32>) -> Result<HolidaySet, WorkdayError> {
        Err(WorkdayError::CalendarUnavailable("connection refused".into()))
    }
}

#[tokio::test]
async fn latest_start_requires_an_end_time() {
    let service = static_service(
        EngineSettings::default(),
        HolidaySet::default(),
        at(2024, 5, 1, 9, 0),
    );

    let err = service.latest_start_times(None).await.unwrap_err();
    assert!(matches!(err, WorkdayError::MissingAnchorDate(_)));
}

#[tokio::test]
async fn earliest_end_requires_an_end_time() {
    let service = static_service(
        EngineSettings::default(),
        HolidaySet::default(),
        at(2024, 5, 1, 9, 0),
    );

    let err = service
        .earliest_end_times(Some(at(2024, 5, 1, 9, 0)), None)
        .await
        .unwrap_err();
    assert!(matches!(err, WorkdayError::MissingAnchorDate(_)));
}

#[tokio::test]
async fn latest_start_report_carries_upload_and_outcome_messages() {
    let service = static_service(
        EngineSettings::new(2, 12).unwrap(),
        HolidaySet::new([date(2024, 5, 9)]),
        at(2024, 5, 1, 9, 0),
    );

    let report = service
        .latest_start_times(Some(midnight(2024, 5, 10)))
        .await
        .expect("latest start report");

    assert_eq!(report.cutoff, "12PM");
    assert_eq!(
        report.sequence.days(),
        &[midnight(2024, 5, 10), midnight(2024, 5, 8), midnight(2024, 5, 7)]
    );
    assert_eq!(report.upload_messages.len(), 2);
    assert_eq!(
        report.upload_messages[0].message,
        "Work should be submitted before 12PM on Wednesday 8th May, 2024."
    );
    assert_eq!(
        report.upload_messages[1].message,
        "Work should be submitted before 12PM on Tuesday 7th May, 2024."
    );
    assert_eq!(report.outcome_messages.len(), 2);
}

#[tokio::test]
async fn earliest_end_defaults_start_to_clock_now() {
    let now = at(2024, 5, 11, 9, 0);
    let service = static_service(EngineSettings::new(2, 12).unwrap(), HolidaySet::default(), now);

    let report = service
        .earliest_end_times(None, Some(midnight(2024, 5, 15)))
        .await
        .expect("earliest end report");

    assert_eq!(report.requested_start, now);
    assert_eq!(
        report.sequence.days(),
        &[midnight(2024, 5, 13), midnight(2024, 5, 14), midnight(2024, 5, 15)]
    );
    assert_eq!(report.feasibility.is_feasible(1), Some(true));
    assert_eq!(report.feasibility.is_feasible(2), Some(false));
    assert_eq!(
        report.eligibility_messages[1].message,
        "A 2-day lead time cannot be met before the deadline."
    );
}

#[tokio::test]
async fn holidays_outside_current_and_next_year_are_ignored() {
    // Today is 2024-12-30, so only 2024 and 2025 holidays count; 2026-01-02 is
    // present upstream but outside the window.
    let service = static_service(
        EngineSettings::new(1, 12).unwrap(),
        HolidaySet::new([date(2026, 1, 2), date(2025, 12, 31)]),
        at(2024, 12, 30, 9, 0),
    );

    let report = service
        .latest_start_times(Some(midnight(2026, 1, 5)))
        .await
        .unwrap();
    assert_eq!(report.sequence.get(1), Some(midnight(2026, 1, 2)));

    let holidays = service.current_holidays().await.unwrap();
    assert_eq!(holidays.iter().collect::<Vec<_>>(), vec![date(2025, 12, 31)]);
}

#[tokio::test]
async fn calendar_failure_aborts_the_computation() {
    let service = service_with(
        EngineSettings::default(),
        Arc::new(UnreachableCalendar),
        at(2024, 5, 1, 9, 0),
    );

    let err = service
        .latest_start_times(Some(midnight(2024, 5, 10)))
        .await
        .unwrap_err();
    assert!(matches!(err, WorkdayError::CalendarUnavailable(_)));
}

#[tokio::test]
async fn refresh_reloads_for_the_active_window() {
    let service = static_service(
        EngineSettings::default(),
        england_and_wales(),
        at(2025, 2, 3, 9, 0),
    );

    let before = service.current_holidays().await.unwrap();
    let after = service.refresh_holidays().await.unwrap();
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(after.len(), 8);
    assert!(after.iter().all(|d| d >= date(2025, 1, 1)));
}
