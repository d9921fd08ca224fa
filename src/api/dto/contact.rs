//! DTO for the contact form endpoint.

use serde::Deserialize;
use validator::Validate;

use crate::api::dto::non_empty;
use crate::domain::ContactSubmission;

/// Contact form payload.
///
/// Unknown extra fields are ignored; missing fields default to empty strings
/// so every constraint violation is reported at once.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ContactRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    pub phone: Option<String>,

    #[validate(length(min = 5, message = "Subject must be at least 5 characters"))]
    pub subject: String,

    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}

impl ContactRequest {
    /// Converts the validated payload into its transient domain form.
    pub fn into_submission(self) -> ContactSubmission {
        ContactSubmission {
            name: self.name,
            email: self.email,
            phone: non_empty(self.phone),
            subject: self.subject,
            message: self.message,
        }
    }
}
