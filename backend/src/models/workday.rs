use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use utoipa::ToSchema;

use crate::error::WorkdayError;

pub const DEFAULT_MAX_LEAD_DAYS: u32 = 4;
pub const DEFAULT_CUTOFF_HOUR: u32 = 12;

/// Engine configuration: how many lead times to compute and the hour after
/// which today no longer counts as a start day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "RawEngineSettings")]
pub struct EngineSettings {
    max_lead_days: u32,
    cutoff_hour: u32,
}

impl EngineSettings {
    pub fn new(max_lead_days: u32, cutoff_hour: u32) -> Result<Self, WorkdayError> {
        if max_lead_days < 1 {
            return Err(WorkdayError::InvalidConfiguration(format!(
                "max lead days must be at least 1 (got {})",
                max_lead_days
            )));
        }
        if cutoff_hour > 23 {
            return Err(WorkdayError::InvalidConfiguration(format!(
                "cutoff hour must be between 0 and 23 (got {})",
                cutoff_hour
            )));
        }
        Ok(Self {
            max_lead_days,
            cutoff_hour,
        })
    }

    pub fn max_lead_days(&self) -> u32 {
        self.max_lead_days
    }

    pub fn cutoff_hour(&self) -> u32 {
        self.cutoff_hour
    }
}

#[derive(Deserialize)]
struct RawEngineSettings {
    max_lead_days: u32,
    cutoff_hour: u32,
}

impl TryFrom<RawEngineSettings> for EngineSettings {
    type Error = WorkdayError;

    fn try_from(raw: RawEngineSettings) -> Result<Self, Self::Error> {
        Self::new(raw.max_lead_days, raw.cutoff_hour)
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            max_lead_days: DEFAULT_MAX_LEAD_DAYS,
            cutoff_hour: DEFAULT_CUTOFF_HOUR,
        }
    }
}

/// Bank holidays loaded for one computation window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Keeps only the dates falling in one of `years`.
    pub fn within_years(
        dates: impl IntoIterator<Item = NaiveDate>,
        years: &BTreeSet<i32>,
    ) -> Self {
        Self::new(dates.into_iter().filter(|d| years.contains(&d.year())))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum WalkDirection {
    Forward,
    Backward,
}

/// Working days walked from an anchor. Index 0 is the anchor and index `k` is
/// the `k`-th working day away from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct WorkdaySequence {
    direction: WalkDirection,
    #[schema(value_type = Vec<String>)]
    days: Vec<NaiveDateTime>,
}

impl WorkdaySequence {
    pub fn new(direction: WalkDirection, days: Vec<NaiveDateTime>) -> Self {
        Self { direction, days }
    }

    pub fn direction(&self) -> WalkDirection {
        self.direction
    }

    pub fn days(&self) -> &[NaiveDateTime] {
        &self.days
    }

    pub fn anchor(&self) -> Option<NaiveDateTime> {
        self.days.first().copied()
    }

    pub fn get(&self, lead_days: u32) -> Option<NaiveDateTime> {
        self.days.get(lead_days as usize).copied()
    }

    /// `(k, day)` pairs for `k = 1..=N`.
    pub fn lead_times(&self) -> impl Iterator<Item = (u32, NaiveDateTime)> + '_ {
        self.days
            .iter()
            .copied()
            .enumerate()
            .skip(1)
            .map(|(k, day)| (k as u32, day))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Whether the deadline is still reachable for each lead time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct FeasibilityTable {
    pub entries: BTreeMap<u32, bool>,
}

impl FeasibilityTable {
    pub fn is_feasible(&self, lead_days: u32) -> Option<bool> {
        self.entries.get(&lead_days).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, bool)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }
}
