use chrono::NaiveDateTime;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::{
    error::WorkdayError,
    models::{
        bank_holiday::holiday_window,
        workday::{EngineSettings, FeasibilityTable, HolidaySet, WorkdaySequence},
    },
    services::{
        holiday_cache::HolidayCache,
        messages::{self, LeadTimeMessage},
        workday::WorkdayEngine,
    },
    utils::time::Clock,
};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LatestStartReport {
    pub cutoff: String,
    pub sequence: WorkdaySequence,
    pub upload_messages: Vec<LeadTimeMessage>,
    pub outcome_messages: Vec<LeadTimeMessage>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EarliestEndReport {
    pub cutoff: String,
    #[schema(value_type = String)]
    pub requested_start: NaiveDateTime,
    pub sequence: WorkdaySequence,
    pub feasibility: FeasibilityTable,
    pub eligibility_messages: Vec<LeadTimeMessage>,
    pub outcome_messages: Vec<LeadTimeMessage>,
}

/// Entry point for both lead-time computations. Acquires the holiday set once
/// per call and builds a fresh engine over it.
#[derive(Clone)]
pub struct LeadTimeService {
    settings: EngineSettings,
    holidays: Arc<HolidayCache>,
    clock: Arc<dyn Clock>,
}

impl LeadTimeService {
    pub fn new(settings: EngineSettings, holidays: Arc<HolidayCache>, clock: Arc<dyn Clock>) -> Self {
        Self {
            settings,
            holidays,
            clock,
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn cutoff_label(&self) -> String {
        messages::humanize_cutoff(self.settings.cutoff_hour())
    }

    /// Holidays for the window containing today.
    pub async fn current_holidays(&self) -> Result<Arc<HolidaySet>, WorkdayError> {
        self.holidays.load(&holiday_window(self.clock.today())).await
    }

    pub async fn refresh_holidays(&self) -> Result<Arc<HolidaySet>, WorkdayError> {
        self.holidays
            .refresh(&holiday_window(self.clock.today()))
            .await
    }

    async fn engine(&self) -> Result<WorkdayEngine, WorkdayError> {
        let holidays = self.current_holidays().await?;
        Ok(WorkdayEngine::new(self.settings, holidays))
    }

    pub async fn latest_start_times(
        &self,
        end: Option<NaiveDateTime>,
    ) -> Result<LatestStartReport, WorkdayError> {
        let end = end.ok_or(WorkdayError::MissingAnchorDate(
            "an end time is required to work backwards from",
        ))?;
        let engine = self.engine().await?;
        let sequence = engine.latest_start_times(end)?;
        let cutoff = self.cutoff_label();

        tracing::debug!(%end, days = ?sequence.days(), "Computed latest start times");

        Ok(LatestStartReport {
            upload_messages: messages::upload_messages(&sequence, &cutoff),
            outcome_messages: messages::outcome_messages(self.settings.max_lead_days(), &cutoff),
            sequence,
            cutoff,
        })
    }

    /// `start` defaults to the clock's current instant, time of day included.
    pub async fn earliest_end_times(
        &self,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> Result<EarliestEndReport, WorkdayError> {
        let end = end.ok_or(WorkdayError::MissingAnchorDate(
            "an end time is required to judge feasibility",
        ))?;
        let requested_start = start.unwrap_or_else(|| self.clock.now());
        let engine = self.engine().await?;
        let (sequence, feasibility) = engine.earliest_end_times(requested_start, end)?;
        let cutoff = self.cutoff_label();

        tracing::debug!(
            %requested_start,
            %end,
            days = ?sequence.days(),
            "Computed earliest end times"
        );

        Ok(EarliestEndReport {
            eligibility_messages: messages::eligibility_messages(&feasibility, &sequence),
            outcome_messages: messages::outcome_messages(self.settings.max_lead_days(), &cutoff),
            requested_start,
            sequence,
            feasibility,
            cutoff,
        })
    }
}
