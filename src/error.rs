use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
};
use serde_json::json;
use axum::Json;
use axum::extract::rejection::QueryRejection;
use polars::prelude::PolarsError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to load table: {0}")]
    LoadError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("DataFrame error: {0}")]
    DataFrameError(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PolarsError> for AppError {
    fn from(err: PolarsError) -> Self {
        AppError::DataFrameError(err.to_string())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::LoadError(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::DataFrameError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_is_bad_request() {
        let response = AppError::LoadError("ragged row".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_polars_error_maps_to_server_error() {
        let err: AppError = PolarsError::ComputeError("boom".into()).into();
        assert!(matches!(err, AppError::DataFrameError(_)));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
