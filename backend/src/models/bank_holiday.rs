use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use utoipa::ToSchema;

use crate::{error::WorkdayError, models::workday::HolidaySet};

pub const DEFAULT_DIVISION: &str = "england-and-wales";

/// The bank holiday feed, keyed by division (`england-and-wales`,
/// `scotland`, `northern-ireland`).
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct BankHolidayFeed {
    pub divisions: HashMap<String, Division>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Division {
    #[serde(default)]
    pub division: String,
    pub events: Vec<BankHolidayEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BankHolidayEvent {
    pub date: NaiveDate,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub bunting: bool,
}

impl BankHolidayFeed {
    pub fn parse(payload: &str) -> Result<Self, WorkdayError> {
        serde_json::from_str(payload).map_err(|e| {
            WorkdayError::CalendarUnavailable(format!("malformed bank holiday payload: {}", e))
        })
    }

    pub fn events(&self, division: &str) -> Result<&[BankHolidayEvent], WorkdayError> {
        self.divisions
            .get(division)
            .map(|d| d.events.as_slice())
            .ok_or_else(|| {
                WorkdayError::CalendarUnavailable(format!(
                    "division '{}' missing from bank holiday payload",
                    division
                ))
            })
    }

    /// Holidays of `division` whose year is one of `years`.
    pub fn holidays_for(
        &self,
        division: &str,
        years: &BTreeSet<i32>,
    ) -> Result<HolidaySet, WorkdayError> {
        let events = self.events(division)?;
        let set = HolidaySet::within_years(events.iter().map(|e| e.date), years);
        tracing::debug!(
            division,
            total = events.len(),
            kept = set.len(),
            "Filtered bank holidays to year window"
        );
        Ok(set)
    }
}

/// Current year and the following one.
pub fn holiday_window(today: NaiveDate) -> BTreeSet<i32> {
    [today.year(), today.year() + 1].into_iter().collect()
}
