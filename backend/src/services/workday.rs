//! Working-day arithmetic: weekend and bank holiday tests, the forward and
//! backward working-day walk, the cutoff rule for today's start date, and the
//! feasibility table derived from them.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use std::sync::Arc;

use crate::{
    error::WorkdayError,
    models::workday::{
        EngineSettings, FeasibilityTable, HolidaySet, WalkDirection, WorkdaySequence,
    },
    utils::time::{calendar_date, reset_to_midnight},
};

/// Stateless engine over one holiday set and one configuration. Cheap to
/// clone; every call returns fresh results.
#[derive(Debug, Clone)]
pub struct WorkdayEngine {
    settings: EngineSettings,
    holidays: Arc<HolidaySet>,
}

impl WorkdayEngine {
    pub fn new(settings: EngineSettings, holidays: Arc<HolidaySet>) -> Self {
        Self { settings, holidays }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Saturday or Sunday (ISO weekday 6 or 7).
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        date.weekday().number_from_monday() > 5
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(date)
    }

    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    pub fn next_working_day(&self, instant: NaiveDateTime) -> Result<NaiveDateTime, WorkdayError> {
        self.walk(instant, WalkDirection::Forward)
    }

    pub fn prev_working_day(&self, instant: NaiveDateTime) -> Result<NaiveDateTime, WorkdayError> {
        self.walk(instant, WalkDirection::Backward)
    }

    /// Steps at least one day in `direction` and keeps stepping while the
    /// date is a weekend or a holiday. Only the date changes.
    fn walk(
        &self,
        instant: NaiveDateTime,
        direction: WalkDirection,
    ) -> Result<NaiveDateTime, WorkdayError> {
        let mut cursor = step_day(instant, direction)?;
        while !self.is_working_day(cursor.date()) {
            if self.is_holiday(cursor.date()) {
                tracing::debug!(date = %cursor.date(), ?direction, "Skipping bank holiday");
            }
            cursor = step_day(cursor, direction)?;
        }
        Ok(cursor)
    }

    /// The effective start for work requested at `start`: rolled to the next
    /// working day when past the cutoff hour or not itself a working day.
    pub fn work_start_date(&self, start: NaiveDateTime) -> Result<NaiveDateTime, WorkdayError> {
        let after_cutoff = start.hour() >= self.settings.cutoff_hour();
        let date = calendar_date(start);
        if after_cutoff || self.is_weekend(date) || self.is_holiday(date) {
            let rolled = self.next_working_day(start)?;
            tracing::debug!(
                %start,
                %rolled,
                after_cutoff,
                "Rolled start to next working day"
            );
            Ok(rolled)
        } else {
            Ok(start)
        }
    }

    fn sequence(
        &self,
        anchor: NaiveDateTime,
        direction: WalkDirection,
    ) -> Result<WorkdaySequence, WorkdayError> {
        let n = self.settings.max_lead_days() as usize;
        let mut days = Vec::with_capacity(n + 1);
        days.push(anchor);
        let mut cursor = anchor;
        for _ in 0..n {
            cursor = self.walk(cursor, direction)?;
            days.push(cursor);
        }
        Ok(WorkdaySequence::new(direction, days))
    }

    /// Latest start days for each lead time, walking back from the deadline's
    /// midnight.
    pub fn latest_start_times(&self, end: NaiveDateTime) -> Result<WorkdaySequence, WorkdayError> {
        self.sequence(reset_to_midnight(end), WalkDirection::Backward)
    }

    /// Working days from the cutoff-adjusted start, without a deadline.
    pub fn earliest_working_days(
        &self,
        start: NaiveDateTime,
    ) -> Result<WorkdaySequence, WorkdayError> {
        let start = reset_to_midnight(self.work_start_date(start)?);
        self.sequence(start, WalkDirection::Forward)
    }

    pub fn earliest_end_times(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<(WorkdaySequence, FeasibilityTable), WorkdayError> {
        let sequence = self.earliest_working_days(start)?;
        let table = feasibility(&sequence, reset_to_midnight(end));
        Ok((sequence, table))
    }
}

fn step_day(
    instant: NaiveDateTime,
    direction: WalkDirection,
) -> Result<NaiveDateTime, WorkdayError> {
    let date = match direction {
        WalkDirection::Forward => instant.date().succ_opt(),
        WalkDirection::Backward => instant.date().pred_opt(),
    };
    date.map(|d| d.and_time(instant.time())).ok_or_else(|| {
        WorkdayError::InvalidDate(format!(
            "date out of range: cannot step {:?} from {}",
            direction, instant
        ))
    })
}

/// `table[k]` is true iff the deadline falls strictly after `sequence[k]`.
pub fn feasibility(sequence: &WorkdaySequence, end: NaiveDateTime) -> FeasibilityTable {
    FeasibilityTable {
        entries: sequence
            .lead_times()
            .map(|(k, day)| (k, end > day))
            .collect(),
    }
}
