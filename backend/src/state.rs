use std::{sync::Arc, time::Duration};

use crate::{
    config::Config,
    error::WorkdayError,
    services::{
        calendar::{CalendarSource, FileCalendarSource, HttpCalendarSource},
        holiday_cache::HolidayCache,
        lead_time::LeadTimeService,
    },
    utils::time::SystemClock,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub lead_times: LeadTimeService,
}

impl AppState {
    pub fn new(config: Config, lead_times: LeadTimeService) -> Self {
        Self { config, lead_times }
    }

    /// Wires the configured calendar source, cache and system clock.
    pub fn from_config(config: Config) -> Result<Self, WorkdayError> {
        let source: Arc<dyn CalendarSource> = match &config.bank_holidays_file {
            Some(path) => Arc::new(FileCalendarSource::new(
                path.clone(),
                config.bank_holidays_division.clone(),
            )),
            None => Arc::new(HttpCalendarSource::new(
                config.bank_holidays_url.clone(),
                config.bank_holidays_division.clone(),
                Duration::from_secs(config.bank_holidays_timeout_seconds),
            )?),
        };
        let cache = Arc::new(HolidayCache::new(source, config.stale_policy()));
        let clock = Arc::new(SystemClock::new(config.time_zone));
        let lead_times = LeadTimeService::new(config.engine, cache, clock);
        Ok(Self::new(config, lead_times))
    }
}
