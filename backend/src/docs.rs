#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{
    handlers::{
        config::EngineConfigResponse,
        holidays::HolidayListResponse,
        lead_times::{EarliestEndQuery, LatestStartQuery},
    },
    models::workday::{FeasibilityTable, WalkDirection, WorkdaySequence},
    services::{
        lead_time::{EarliestEndReport, LatestStartReport},
        messages::LeadTimeMessage,
    },
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        latest_start_doc,
        earliest_end_doc,
        list_holidays_doc,
        refresh_holidays_doc,
        engine_config_doc
    ),
    components(
        schemas(
            LatestStartReport,
            EarliestEndReport,
            WorkdaySequence,
            WalkDirection,
            FeasibilityTable,
            LeadTimeMessage,
            HolidayListResponse,
            EngineConfigResponse
        )
    ),
    tags(
        (name = "LeadTimes", description = "Working-day deadlines per lead time"),
        (name = "Holidays", description = "Bank holiday calendar"),
        (name = "Config", description = "Engine settings")
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/api/lead-times/latest-start",
    params(LatestStartQuery),
    responses(
        (status = 200, description = "Latest start day per lead time", body = LatestStartReport),
        (status = 400, description = "Missing or malformed end time"),
        (status = 503, description = "Bank holiday calendar unavailable")
    ),
    tag = "LeadTimes"
)]
fn latest_start_doc() {}

#[utoipa::path(
    get,
    path = "/api/lead-times/earliest-end",
    params(EarliestEndQuery),
    responses(
        (status = 200, description = "Earliest completion per lead time", body = EarliestEndReport),
        (status = 400, description = "Missing or malformed dates"),
        (status = 503, description = "Bank holiday calendar unavailable")
    ),
    tag = "LeadTimes"
)]
fn earliest_end_doc() {}

#[utoipa::path(
    get,
    path = "/api/holidays",
    responses((status = 200, body = HolidayListResponse)),
    tag = "Holidays"
)]
fn list_holidays_doc() {}

#[utoipa::path(
    post,
    path = "/api/holidays/refresh",
    responses(
        (status = 200, body = HolidayListResponse),
        (status = 503, description = "Bank holiday calendar unavailable")
    ),
    tag = "Holidays"
)]
fn refresh_holidays_doc() {}

#[utoipa::path(
    get,
    path = "/api/config",
    responses((status = 200, body = EngineConfigResponse)),
    tag = "Config"
)]
fn engine_config_doc() {}
