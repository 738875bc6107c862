use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppError, models::workday::HolidaySet, state::AppState};

#[derive(Debug, Serialize, ToSchema)]
pub struct HolidayListResponse {
    pub division: String,
    pub count: usize,
    pub dates: Vec<NaiveDate>,
}

impl HolidayListResponse {
    fn new(division: &str, holidays: &HolidaySet) -> Self {
        Self {
            division: division.to_string(),
            count: holidays.len(),
            dates: holidays.iter().collect(),
        }
    }
}

pub async fn list_bank_holidays(
    State(state): State<AppState>,
) -> Result<Json<HolidayListResponse>, AppError> {
    let holidays = state.lead_times.current_holidays().await?;
    Ok(Json(HolidayListResponse::new(
        &state.config.bank_holidays_division,
        &holidays,
    )))
}

pub async fn refresh_bank_holidays(
    State(state): State<AppState>,
) -> Result<Json<HolidayListResponse>, AppError> {
    let holidays = state.lead_times.refresh_holidays().await?;
    tracing::info!(count = holidays.len(), "Bank holidays refreshed on request");
    Ok(Json(HolidayListResponse::new(
        &state.config.bank_holidays_division,
        &holidays,
    )))
}
