use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use premium_guide_domain::services::PremiumServiceError;

/// Error response format for API
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code - machine-readable identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details about the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a validation error response
    pub fn validation_error(message: &str, details: Option<serde_json::Value>) -> Self {
        Self {
            error: "validation_error".to_string(),
            message: message.to_string(),
            details,
        }
    }

    /// Create a prediction error response
    pub fn prediction_error(message: &str) -> Self {
        Self {
            error: "prediction_error".to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    /// Create an internal error response
    pub fn internal_error() -> Self {
        Self {
            error: "internal_error".to_string(),
            message: "An unexpected error occurred".to_string(),
            details: None,
        }
    }

    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self.error.as_str() {
            "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

impl From<PremiumServiceError> for ErrorResponse {
    fn from(err: PremiumServiceError) -> Self {
        match err {
            PremiumServiceError::ValidationError(msg) => {
                ErrorResponse::validation_error(&msg, None)
            }
            PremiumServiceError::PredictionError(msg) => {
                error!("Prediction failed: {}", msg);
                ErrorResponse::prediction_error(&msg)
            }
            other => {
                error!("Premium service error: {}", other);
                ErrorResponse::internal_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorResponse::validation_error("bad", None).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorResponse::prediction_error("nan").status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ErrorResponse::internal_error().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_service_error_conversion() {
        let response = ErrorResponse::from(PremiumServiceError::ValidationError(
            "age: Age must be between 0 and 200".to_string(),
        ));
        assert_eq!(response.error, "validation_error");
        assert!(response.message.contains("age"));

        let response = ErrorResponse::from(PremiumServiceError::SessionError("poisoned".to_string()));
        assert_eq!(response.error, "internal_error");
    }
}
