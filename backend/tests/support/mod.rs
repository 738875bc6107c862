#![allow(dead_code)]
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;

use leadtime_backend::{
    config::Config,
    models::workday::{EngineSettings, HolidaySet},
    services::{
        calendar::{CalendarSource, StaticCalendarSource},
        holiday_cache::{HolidayCache, StalePolicy},
        lead_time::LeadTimeService,
    },
    state::AppState,
    utils::time::FixedClock,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).expect("valid time")
}

pub fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
    at(y, m, d, 0, 0)
}

/// England and Wales bank holidays for 2024 and 2025.
pub fn england_and_wales() -> HolidaySet {
    HolidaySet::new([
        date(2024, 1, 1),
        date(2024, 3, 29),
        date(2024, 4, 1),
        date(2024, 5, 6),
        date(2024, 5, 27),
        date(2024, 8, 26),
        date(2024, 12, 25),
        date(2024, 12, 26),
        date(2025, 1, 1),
        date(2025, 4, 18),
        date(2025, 4, 21),
        date(2025, 5, 5),
        date(2025, 5, 26),
        date(2025, 8, 25),
        date(2025, 12, 25),
        date(2025, 12, 26),
    ])
}

pub fn test_config() -> Config {
    Config {
        bind_addr: "127.0.0.1:0".into(),
        time_zone: chrono_tz::Europe::London,
        engine: EngineSettings::default(),
        bank_holidays_url: "http://127.0.0.1:9/bank-holidays.json".into(),
        bank_holidays_division: "england-and-wales".into(),
        bank_holidays_file: None,
        bank_holidays_timeout_seconds: 1,
        bank_holidays_reuse_stale: false,
    }
}

pub fn service_with(
    settings: EngineSettings,
    source: Arc<dyn CalendarSource>,
    now: NaiveDateTime,
) -> LeadTimeService {
    let cache = Arc::new(HolidayCache::new(source, StalePolicy::Fail));
    LeadTimeService::new(settings, cache, Arc::new(FixedClock(now)))
}

pub fn static_service(
    settings: EngineSettings,
    holidays: HolidaySet,
    now: NaiveDateTime,
) -> LeadTimeService {
    service_with(
        settings,
        Arc::new(StaticCalendarSource::new(holidays)),
        now,
    )
}

pub fn app_state(service: LeadTimeService) -> AppState {
    AppState::new(test_config(), service)
}
