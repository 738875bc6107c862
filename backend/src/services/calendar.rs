use async_trait::async_trait;
use reqwest::Client;
use std::{collections::BTreeSet, path::PathBuf, time::Duration};

use crate::{
    error::WorkdayError,
    models::{bank_holiday::BankHolidayFeed, workday::HolidaySet},
};

pub const GOV_UK_BANK_HOLIDAYS_URL: &str = "https://www.gov.uk/bank-holidays.json";

/// Supplies bank holidays for a set of calendar years.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CalendarSource: Send + Sync {
    async fn holidays_for(&self, years: &BTreeSet<i32>) -> Result<HolidaySet, WorkdayError>;
}

/// Fetches the bank holiday JSON feed over HTTP.
pub struct HttpCalendarSource {
    client: Client,
    url: String,
    division: String,
}

impl HttpCalendarSource {
    pub fn new(
        url: impl Into<String>,
        division: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, WorkdayError> {
        let client = Client::builder()
            .user_agent("leadtime-backend/1.0")
            .timeout(timeout)
            .build()
            .map_err(|e: reqwest::Error| {
                WorkdayError::CalendarUnavailable(format!(
                    "Failed to initialize HTTP client: {}",
                    e
                ))
            })?;

        Ok(Self {
            client,
            url: url.into(),
            division: division.into(),
        })
    }

    async fn fetch(&self) -> Result<String, WorkdayError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e: reqwest::Error| {
                WorkdayError::CalendarUnavailable(format!(
                    "Failed to fetch bank holidays from {}: {}",
                    self.url, e
                ))
            })?;

        resp.text().await.map_err(|e: reqwest::Error| {
            WorkdayError::CalendarUnavailable(format!("Failed to read bank holidays: {}", e))
        })
    }
}

#[async_trait]
impl CalendarSource for HttpCalendarSource {
    async fn holidays_for(&self, years: &BTreeSet<i32>) -> Result<HolidaySet, WorkdayError> {
        let payload = self.fetch().await?;
        let set = BankHolidayFeed::parse(&payload)?.holidays_for(&self.division, years)?;
        tracing::info!(
            url = %self.url,
            division = %self.division,
            ?years,
            count = set.len(),
            "Loaded bank holidays from remote feed"
        );
        Ok(set)
    }
}

/// Reads a local copy of the bank holiday feed.
pub struct FileCalendarSource {
    path: PathBuf,
    division: String,
}

impl FileCalendarSource {
    pub fn new(path: impl Into<PathBuf>, division: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            division: division.into(),
        }
    }
}

#[async_trait]
impl CalendarSource for FileCalendarSource {
    async fn holidays_for(&self, years: &BTreeSet<i32>) -> Result<HolidaySet, WorkdayError> {
        let payload = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            WorkdayError::CalendarUnavailable(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))
        })?;
        let set = BankHolidayFeed::parse(&payload)?.holidays_for(&self.division, years)?;
        tracing::info!(
            path = %self.path.display(),
            division = %self.division,
            count = set.len(),
            "Loaded bank holidays from local copy"
        );
        Ok(set)
    }
}

/// A pre-fetched holiday set handed in by the caller.
#[derive(Debug, Clone, Default)]
pub struct StaticCalendarSource {
    holidays: HolidaySet,
}

impl StaticCalendarSource {
    pub fn new(holidays: HolidaySet) -> Self {
        Self { holidays }
    }
}

#[async_trait]
impl CalendarSource for StaticCalendarSource {
    async fn holidays_for(&self, years: &BTreeSet<i32>) -> Result<HolidaySet, WorkdayError> {
        Ok(HolidaySet::within_years(self.holidays.iter(), years))
    }
}
