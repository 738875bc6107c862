use std::{collections::BTreeSet, sync::Arc};
use tokio::sync::RwLock;

use crate::{error::WorkdayError, models::workday::HolidaySet, services::calendar::CalendarSource};

/// What to do when the calendar source fails after a set has been loaded once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StalePolicy {
    #[default]
    Fail,
    ReuseLastLoaded,
}

#[derive(Debug, Clone)]
struct Loaded {
    years: BTreeSet<i32>,
    holidays: Arc<HolidaySet>,
}

/// Process-wide memo of the holiday set for the active year window.
pub struct HolidayCache {
    source: Arc<dyn CalendarSource>,
    policy: StalePolicy,
    current: RwLock<Option<Loaded>>,
    last_good: RwLock<Option<Loaded>>,
}

impl HolidayCache {
    pub fn new(source: Arc<dyn CalendarSource>, policy: StalePolicy) -> Self {
        Self {
            source,
            policy,
            current: RwLock::new(None),
            last_good: RwLock::new(None),
        }
    }

    pub fn policy(&self) -> StalePolicy {
        self.policy
    }

    /// Returns the memoized set for `years`, fetching it when absent or when
    /// the window has moved.
    pub async fn load(&self, years: &BTreeSet<i32>) -> Result<Arc<HolidaySet>, WorkdayError> {
        if let Some(loaded) = self.current.read().await.as_ref() {
            if &loaded.years == years {
                return Ok(Arc::clone(&loaded.holidays));
            }
        }

        let mut current = self.current.write().await;
        // Another task may have filled it while we waited for the lock.
        if let Some(loaded) = current.as_ref() {
            if &loaded.years == years {
                return Ok(Arc::clone(&loaded.holidays));
            }
        }

        match self.source.holidays_for(years).await {
            Ok(set) => {
                let loaded = Loaded {
                    years: years.clone(),
                    holidays: Arc::new(set),
                };
                *self.last_good.write().await = Some(loaded.clone());
                let holidays = Arc::clone(&loaded.holidays);
                *current = Some(loaded);
                Ok(holidays)
            }
            Err(err) => self.fallback(err).await,
        }
    }

    async fn fallback(&self, err: WorkdayError) -> Result<Arc<HolidaySet>, WorkdayError> {
        if self.policy == StalePolicy::ReuseLastLoaded {
            if let Some(stale) = self.last_good.read().await.as_ref() {
                tracing::warn!(
                    error = %err,
                    years = ?stale.years,
                    "Calendar source failed; reusing last loaded bank holidays"
                );
                return Ok(Arc::clone(&stale.holidays));
            }
        }
        Err(err)
    }

    /// Drops the memo; the next `load` refetches. The last good set is kept
    /// for `StalePolicy::ReuseLastLoaded`.
    pub async fn invalidate(&self) {
        *self.current.write().await = None;
        tracing::info!("Bank holiday cache invalidated");
    }

    pub async fn refresh(&self, years: &BTreeSet<i32>) -> Result<Arc<HolidaySet>, WorkdayError> {
        self.invalidate().await;
        self.load(years).await
    }
}
