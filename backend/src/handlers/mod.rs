pub mod common;
pub mod config;
pub mod holidays;
pub mod lead_times;

use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{docs::ApiDoc, state::AppState};

/// Full HTTP surface with shared layers (trace, CORS) and state applied.
pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/api/lead-times/latest-start", get(lead_times::latest_start))
        .route("/api/lead-times/earliest-end", get(lead_times::earliest_end))
        .route("/api/holidays", get(holidays::list_bank_holidays))
        .route("/api/holidays/refresh", post(holidays::refresh_bank_holidays))
        .route("/api/config", get(config::get_engine_config));

    Router::new()
        .merge(api_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                        .allow_headers(Any)
                        .max_age(std::time::Duration::from_secs(24 * 60 * 60)),
                ),
        )
        .with_state(state)
}
