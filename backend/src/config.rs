use anyhow::anyhow;
use chrono_tz::Tz;
use serde::Serialize;
use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use crate::{
    models::{
        bank_holiday::DEFAULT_DIVISION,
        workday::{EngineSettings, DEFAULT_CUTOFF_HOUR, DEFAULT_MAX_LEAD_DAYS},
    },
    services::{calendar::GOV_UK_BANK_HOLIDAYS_URL, holiday_cache::StalePolicy},
};

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub bind_addr: String,
    pub time_zone: Tz,
    pub engine: EngineSettings,
    pub bank_holidays_url: String,
    pub bank_holidays_division: String,
    pub bank_holidays_file: Option<PathBuf>,
    pub bank_holidays_timeout_seconds: u64,
    pub bank_holidays_reuse_stale: bool,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("APP_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let time_zone_name =
            env::var("APP_TIMEZONE").unwrap_or_else(|_| "Europe/London".to_string());
        let time_zone: Tz = time_zone_name
            .parse()
            .map_err(|_| anyhow!("Invalid APP_TIMEZONE value: {}", time_zone_name))?;

        let max_lead_days = parse_env("MAX_LEAD_DAYS", DEFAULT_MAX_LEAD_DAYS)?;
        let cutoff_hour = parse_env("CUTOFF_HOUR", DEFAULT_CUTOFF_HOUR)?;
        let engine = EngineSettings::new(max_lead_days, cutoff_hour)?;

        let bank_holidays_url =
            env::var("BANK_HOLIDAYS_URL").unwrap_or_else(|_| GOV_UK_BANK_HOLIDAYS_URL.to_string());

        let bank_holidays_division =
            env::var("BANK_HOLIDAYS_DIVISION").unwrap_or_else(|_| DEFAULT_DIVISION.to_string());

        let bank_holidays_file = env::var("BANK_HOLIDAYS_FILE")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let bank_holidays_timeout_seconds =
            parse_env("BANK_HOLIDAYS_TIMEOUT_SECONDS", DEFAULT_TIMEOUT_SECONDS)?;

        let bank_holidays_reuse_stale = env::var("BANK_HOLIDAYS_REUSE_STALE")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Config {
            bind_addr,
            time_zone,
            engine,
            bank_holidays_url,
            bank_holidays_division,
            bank_holidays_file,
            bank_holidays_timeout_seconds,
            bank_holidays_reuse_stale,
        })
    }

    pub fn stale_policy(&self) -> StalePolicy {
        if self.bank_holidays_reuse_stale {
            StalePolicy::ReuseLastLoaded
        } else {
            StalePolicy::Fail
        }
    }
}

const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Numeric settings must parse; a typo stops startup rather than falling back
/// to the default.
fn parse_env<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    parse_setting(key, env::var(key).ok(), default)
}

fn parse_setting<T>(key: &str, raw: Option<String>, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|err| anyhow!("Invalid {} value: {} ({})", key, raw, err)),
        None => Ok(default),
    }
}
