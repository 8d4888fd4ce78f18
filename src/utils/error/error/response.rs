//! HTTP response handling for errors

use super::types::AccessError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for AccessError {
    fn status_code(&self) -> StatusCode {
        match self {
            AccessError::Validation { .. } => StatusCode::BAD_REQUEST,
            AccessError::NotFound(_) => StatusCode::NOT_FOUND,
            AccessError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AccessError::Forbidden(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error_code, message) = match self {
            AccessError::Validation { message, .. } => ("VALIDATION_ERROR", message.clone()),
            AccessError::NotFound(_) => ("NOT_FOUND", self.to_string()),
            AccessError::Unauthorized(_) => ("UNAUTHORIZED", self.to_string()),
            AccessError::Forbidden(_) => ("FORBIDDEN", self.to_string()),
            AccessError::Config(_) => ("CONFIG_ERROR", self.to_string()),
            AccessError::Storage(_) => ("STORAGE_ERROR", "Storage operation failed".to_string()),
            _ => ("INTERNAL_ERROR", "An internal error occurred".to_string()),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                field: self.field().map(str::to_string),
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub timestamp: i64,
}
