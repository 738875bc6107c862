use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppError,
    services::lead_time::{EarliestEndReport, LatestStartReport},
    state::AppState,
};

use super::common::parse_optional_instant;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LatestStartQuery {
    /// Deadline, `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM[:SS]`.
    pub end: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EarliestEndQuery {
    /// Requested start; defaults to now.
    pub start: Option<String>,
    /// Deadline the work must complete before.
    pub end: Option<String>,
}

pub async fn latest_start(
    State(state): State<AppState>,
    Query(q): Query<LatestStartQuery>,
) -> Result<Json<LatestStartReport>, AppError> {
    let end = parse_optional_instant("end", q.end.as_deref())?;
    let report = state.lead_times.latest_start_times(end).await?;
    Ok(Json(report))
}

pub async fn earliest_end(
    State(state): State<AppState>,
    Query(q): Query<EarliestEndQuery>,
) -> Result<Json<EarliestEndReport>, AppError> {
    let start = parse_optional_instant("start", q.start.as_deref())?;
    let end = parse_optional_instant("end", q.end.as_deref())?;
    let report = state.lead_times.earliest_end_times(start, end).await?;
    Ok(Json(report))
}
