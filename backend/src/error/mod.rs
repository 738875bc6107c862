use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Failures of the working-day computations.
#[derive(Debug, Error)]
pub enum WorkdayError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("bank holiday calendar unavailable: {0}")]
    CalendarUnavailable(String),
    #[error("missing anchor date: {0}")]
    MissingAnchorDate(&'static str),
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    ServiceUnavailable(String),
    InternalServerError(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, code) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, "BAD_REQUEST"),
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!("Service unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, msg, "SERVICE_UNAVAILABLE")
            }
            AppError::InternalServerError(err) => {
                tracing::error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    "INTERNAL_SERVER_ERROR",
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
            code: code.to_string(),
            details: None,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalServerError(err)
    }
}

impl From<WorkdayError> for AppError {
    fn from(err: WorkdayError) -> Self {
        match err {
            WorkdayError::CalendarUnavailable(_) => AppError::ServiceUnavailable(err.to_string()),
            WorkdayError::InvalidConfiguration(_)
            | WorkdayError::MissingAnchorDate(_)
            | WorkdayError::InvalidDate(_) => AppError::BadRequest(err.to_string()),
        }
    }
}
