//! Application error type and its mapping onto the wire contract.
//!
//! The error taxonomy is deliberately small:
//!
//! - malformed body / validation failure -> 400, with per-field `details`
//!   for validation so callers can highlight every offending field at once
//! - configuration fault (missing SMTP credentials) -> 500, generic message
//! - delivery failure -> 500, generic message; transport detail is logged
//!   server-side only

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

#[derive(Debug)]
pub enum AppError {
    /// Client error: unparseable body or schema violations.
    Validation {
        message: String,
        details: Option<Value>,
    },
    /// Operator misconfiguration, distinct from a transient delivery fault.
    Configuration { message: String },
    /// The mail transport rejected or timed out on the one delivery attempt.
    Delivery { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            details: None,
        }
    }

    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details: Some(details),
        }
    }

    /// Single field-level violation, shaped like the validator-derived list.
    pub fn field_violation(field: &str, message: impl Into<String>) -> Self {
        Self::validation(
            "Invalid form data",
            json!([{ "field": field, "message": message.into() }]),
        )
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn delivery(message: impl Into<String>) -> Self {
        Self::Delivery {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            AppError::Validation { message, details } => {
                (StatusCode::BAD_REQUEST, message, details)
            }
            // Server-side categories share a shape: generic message, no details.
            AppError::Configuration { message }
            | AppError::Delivery { message }
            | AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message, None),
        };

        let body = ErrorBody {
            error: message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Flattens validator output into a field-sorted violation list.
///
/// Every invalid field contributes its own entry so the client can surface
/// all of them at once rather than just the first.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details = Vec::new();

        for (field, field_errors) in errors.field_errors() {
            // validator reports Rust field names; the wire contract is camelCase
            let field = wire_field_name(field.as_ref());
            for error in field_errors {
                let message = error
                    .message
                    .as_deref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| format!("Invalid value for '{field}'"));

                details.push(json!({ "field": field.as_str(), "message": message }));
            }
        }

        details.sort_by(|a, b| a["field"].as_str().cmp(&b["field"].as_str()));

        Self::validation("Invalid form data", Value::Array(details))
    }
}

/// Maps a snake_case Rust field name onto its camelCase wire name.
fn wire_field_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;

    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }

    out
}
