//! HTTP response handling for errors

use super::types::GatewayError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Auth(_) => StatusCode::UNAUTHORIZED,
            GatewayError::Forbidden(_) => StatusCode::FORBIDDEN,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::Validation(_)
            | GatewayError::BadRequest(_)
            | GatewayError::Serialization(_) => StatusCode::BAD_REQUEST,
            GatewayError::Network(_) | GatewayError::HttpClient(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error_code, message) = match self {
            GatewayError::Config(_) => ("CONFIG_ERROR", self.to_string()),
            GatewayError::Database(_) => ("DATABASE_ERROR", "Database operation failed".to_string()),
            GatewayError::HttpClient(_) => ("UPSTREAM_ERROR", "Upstream request failed".to_string()),
            GatewayError::Serialization(_) => ("SERIALIZATION_ERROR", self.to_string()),
            GatewayError::Auth(_) => ("AUTH_ERROR", self.to_string()),
            GatewayError::Validation(_) => ("VALIDATION_ERROR", self.to_string()),
            GatewayError::NotFound(_) => ("NOT_FOUND", self.to_string()),
            GatewayError::BadRequest(_) => ("BAD_REQUEST", self.to_string()),
            GatewayError::Forbidden(_) => ("FORBIDDEN", self.to_string()),
            GatewayError::Network(_) => ("NETWORK_ERROR", self.to_string()),
            GatewayError::Parsing(_) => ("PARSING_ERROR", self.to_string()),
            _ => ("INTERNAL_ERROR", "An internal error occurred".to_string()),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}
