use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct EngineConfigResponse {
    pub max_lead_days: u32,
    pub cutoff_hour: u32,
    pub cutoff: String,
    pub time_zone: String,
}

pub async fn get_engine_config(State(state): State<AppState>) -> Json<EngineConfigResponse> {
    let settings = state.lead_times.settings();
    Json(EngineConfigResponse {
        max_lead_days: settings.max_lead_days(),
        cutoff_hour: settings.cutoff_hour(),
        cutoff: state.lead_times.cutoff_label(),
        time_zone: state.config.time_zone.to_string(),
    })
}
