//! Data Transfer Objects for API requests and responses.
//!
//! All request DTOs use Serde for JSON deserialization and validator for
//! input validation. Every field defaults when absent so a request missing
//! several required fields reports one violation per field instead of
//! failing on the first missing key.

pub mod careers;
pub mod contact;
pub mod health;
pub mod referral;

use serde::Serialize;

/// Confirmation body returned by all three submission endpoints.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub message: &'static str,
}

/// Normalizes an optional free-text field: absent and empty/whitespace-only
/// values both count as "not provided" so templates omit the block entirely.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
