//! DTO for the career application endpoint.

use serde::Deserialize;
use validator::Validate;

use crate::api::dto::non_empty;
use crate::domain::{CareerSubmission, ResumeAttachment};

/// Career application payload.
///
/// The resume travels as a base64 string with its original filename and
/// declared MIME type; decoding happens in the handler so its failure modes
/// (non-fatal decode error, size/type rejection) stay at the HTTP boundary.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct CareerRequest {
    #[validate(length(min = 2, message = "First name must be at least 2 characters"))]
    pub first_name: String,

    #[validate(length(min = 2, message = "Last name must be at least 2 characters"))]
    pub last_name: String,

    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 10, message = "Please enter a valid phone number"))]
    pub phone: String,

    /// Drawn from a fixed set of role titles on the form, but free-form here.
    #[validate(length(min = 2, message = "Please select a position"))]
    pub position: String,

    #[validate(length(min = 1, message = "Please specify your years of experience"))]
    pub experience: String,

    #[validate(length(min = 2, message = "Please specify your availability"))]
    pub availability: String,

    pub message: Option<String>,

    /// Base64-encoded resume content.
    pub resume: Option<String>,
    pub resume_file_name: Option<String>,
    pub resume_file_type: Option<String>,
}

impl CareerRequest {
    /// Converts the validated payload, pairing it with the already-decoded
    /// resume attachment (if any survived decoding).
    pub fn into_submission(self, resume: Option<ResumeAttachment>) -> CareerSubmission {
        CareerSubmission {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            position: self.position,
            experience: self.experience,
            availability: self.availability,
            message: non_empty(self.message),
            resume,
        }
    }
}
