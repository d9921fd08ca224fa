//! Handler for the contact form endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::SubmissionResponse;
use crate::api::dto::contact::ContactRequest;
use crate::api::extract::AppJson;
use crate::error::AppError;
use crate::state::AppState;

/// Relays a contact form submission to the site mailbox.
///
/// # Endpoint
///
/// `POST /api/contact`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Jo Smith",
///   "email": "jo@example.com",
///   "phone": "5550001111",      // optional
///   "subject": "Hi there",
///   "message": "I would like to know more about your services."
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "message": "Message sent successfully" }
/// ```
///
/// # Errors
///
/// Returns 400 with a per-field `details` list if validation fails, and 500
/// if the mail transport is unconfigured or the delivery attempt fails.
pub async fn contact_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ContactRequest>,
) -> Result<Json<SubmissionResponse>, AppError> {
    payload.validate()?;

    if !state.notifications.is_configured() {
        tracing::error!("SMTP credentials not configured");
        return Err(AppError::configuration("Email service not configured"));
    }

    let submission = payload.into_submission();
    state.notifications.send_contact(&submission).await?;

    Ok(Json(SubmissionResponse {
        message: "Message sent successfully",
    }))
}
