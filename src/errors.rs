use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("InfluxDB query error: {0}")]
    InfluxQuery(String),
}

/// Helper for mapping any backend failure into an InfluxQuery error
pub fn backend_error<E: ToString>(err: E) -> AppError {
    AppError::InfluxQuery(err.to_string())
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Choose status codes per variant
        let status = match self {
            AppError::MissingParameter(_) | AppError::InvalidParameter(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::InfluxQuery(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // String provided by thiserror → safe JSON message
        let body = Json(json!({
            "detail": self.to_string()
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_maps_to_400() {
        let response = AppError::MissingParameter("tag".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn backend_error_maps_to_500() {
        let response = backend_error(anyhow::anyhow!("connection refused")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
