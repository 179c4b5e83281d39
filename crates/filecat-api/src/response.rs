//! Uniform error envelope
//!
//! Every endpoint reports failures as
//! `{ "error": { "code", "message", "details"? } }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use filecat_core::error::{DomainError, FieldError};

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

#[derive(Debug)]
pub struct ErrorResponse {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
    pub details: Option<Vec<FieldError>>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, code: &'static str, message: &str) -> Self {
        Self {
            status,
            code,
            message: message.to_string(),
            details: None,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let body = ErrorEnvelope {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
                details: self.details,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        let message = err.to_string();
        match err {
            DomainError::Validation(details) => {
                let message = details
                    .first()
                    .map(|d| d.message.clone())
                    .unwrap_or(message);
                Self {
                    status: StatusCode::BAD_REQUEST,
                    code: "VALIDATION_ERROR",
                    message,
                    details: Some(details),
                }
            }
            DomainError::CategoryNotFound(_) => Self {
                status: StatusCode::NOT_FOUND,
                code: "CATEGORY_NOT_FOUND",
                message,
                details: None,
            },
            DomainError::CategoryExists(_) => Self {
                status: StatusCode::CONFLICT,
                code: "CATEGORY_EXISTS",
                message,
                details: None,
            },
            DomainError::CategoryInUse(_) => Self {
                status: StatusCode::BAD_REQUEST,
                code: "CATEGORY_IN_USE",
                message,
                details: None,
            },
            DomainError::DatabaseError(e) => {
                error!("Store failure surfaced to caller: {}", e);
                Self {
                    status: StatusCode::SERVICE_UNAVAILABLE,
                    code: "SERVICE_UNAVAILABLE",
                    message: "Service temporarily unavailable, please retry".to_string(),
                    details: None,
                }
            }
        }
    }
}
