//! Application error type and HTTP error formatting.
//!
//! Every fallible operation in the service returns [`AppError`]. Handlers
//! return it directly; axum turns it into a JSON body of the form:
//!
//! ```json
//! {
//!   "error": {
//!     "code": "validation_error",
//!     "message": "Request validation failed",
//!     "details": { "errors": { "email": "Customer email is not a valid email address" } }
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use validator::{ValidationErrors, ValidationErrorsKind};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error description embedded in error responses.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Field-level validation failures keyed by field path.
///
/// Nested fields use dotted paths and list elements use indices,
/// e.g. `products[1].quantity`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub errors: BTreeMap<String, String>,
}

impl ErrorResponse {
    /// Builds a single-field error map.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.into(), message.into());
        Self { errors }
    }
}

impl From<&ValidationErrors> for ErrorResponse {
    fn from(errors: &ValidationErrors) -> Self {
        let mut out = BTreeMap::new();
        flatten_validation_errors(errors, None, &mut out);
        Self { errors: out }
    }
}

fn flatten_validation_errors(
    errors: &ValidationErrors,
    prefix: Option<&str>,
    out: &mut BTreeMap<String, String>,
) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(p) => format!("{p}.{field}"),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                // First message wins; later rules on the same field are usually redundant.
                if let Some(first) = field_errors.first() {
                    let message = first
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("invalid value ({})", first.code));
                    out.entry(path).or_insert(message);
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                flatten_validation_errors(nested, Some(&path), out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    let item_path = format!("{path}[{index}]");
                    flatten_validation_errors(nested, Some(&item_path), out);
                }
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Validation error whose details are a field-to-message map.
    pub fn invalid_fields(message: impl Into<String>, errors: ErrorResponse) -> Self {
        Self::Validation {
            message: message.into(),
            details: json!(errors),
        }
    }

    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Conflict { .. } => (StatusCode::CONFLICT, "conflict"),
            AppError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.parts().0
    }

    /// Converts the error into its serializable description.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code) = self.parts();
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Conflict { message, details }
            | AppError::Internal { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::invalid_fields("Request validation failed", ErrorResponse::from(&errors))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Malformed request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::conflict(
                    "Unique constraint violation",
                    json!({ "constraint": db.constraint() }),
                );
            }
            if db.is_foreign_key_violation() {
                return AppError::conflict(
                    "Record is still referenced",
                    json!({ "constraint": db.constraint() }),
                );
            }
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}
