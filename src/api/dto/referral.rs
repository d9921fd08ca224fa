//! DTO for the client referral endpoint.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::api::dto::non_empty;
use crate::domain::{ReferralSubmission, Urgency};
use crate::error::AppError;

/// Client referral payload: referrer block, patient block, care details.
///
/// `urgency` stays a string at this level so an unknown token surfaces as a
/// field-level violation next to any other invalid fields instead of failing
/// the whole body parse.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ReferralRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub referrer_name: String,

    #[validate(email(message = "Please enter a valid email address"))]
    pub referrer_email: String,

    pub referrer_phone: Option<String>,

    #[validate(length(min = 2, message = "Patient name must be at least 2 characters"))]
    pub patient_name: String,

    #[validate(length(min = 10, message = "Please enter a valid phone number"))]
    pub patient_phone: String,

    #[validate(length(min = 10, message = "Please enter a complete address"))]
    pub patient_address: String,

    #[validate(length(min = 5, message = "Please specify services needed"))]
    pub services_needed: String,

    #[validate(custom(function = validate_urgency))]
    pub urgency: String,

    #[validate(length(min = 5, message = "Please provide insurance information"))]
    pub insurance_info: String,

    pub additional_info: Option<String>,
}

impl ReferralRequest {
    /// Converts the validated payload into its transient domain form.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the urgency token is unknown, which
    /// validation has already ruled out.
    pub fn into_submission(self) -> Result<ReferralSubmission, AppError> {
        let urgency = Urgency::from_token(&self.urgency)
            .ok_or_else(|| AppError::internal("Internal server error"))?;

        Ok(ReferralSubmission {
            referrer_name: self.referrer_name,
            referrer_email: self.referrer_email,
            referrer_phone: non_empty(self.referrer_phone),
            patient_name: self.patient_name,
            patient_phone: self.patient_phone,
            patient_address: self.patient_address,
            services_needed: self.services_needed,
            urgency,
            insurance_info: self.insurance_info,
            additional_info: non_empty(self.additional_info),
        })
    }
}

fn validate_urgency(value: &str) -> Result<(), ValidationError> {
    if Urgency::from_token(value).is_some() {
        return Ok(());
    }

    let mut error = ValidationError::new("urgency");
    error.message =
        Some("Urgency must be one of: immediate, within_week, within_month, flexible".into());
    Err(error)
}
