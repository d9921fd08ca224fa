//! Handler for the client referral endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::SubmissionResponse;
use crate::api::dto::referral::ReferralRequest;
use crate::api::extract::AppJson;
use crate::error::AppError;
use crate::state::AppState;

/// Relays a client referral to the site mailbox.
///
/// # Endpoint
///
/// `POST /api/referral`
///
/// # Request Body
///
/// Referrer block (`referrerName`, `referrerEmail`, optional `referrerPhone`),
/// patient block (`patientName`, `patientPhone`, `patientAddress`) and care
/// details (`servicesNeeded`, `urgency`, `insuranceInfo`, optional
/// `additionalInfo`). `urgency` must be one of `immediate`, `within_week`,
/// `within_month`, `flexible`.
///
/// # Response
///
/// ```json
/// { "message": "Referral submitted successfully" }
/// ```
///
/// # Errors
///
/// Returns 400 with a per-field `details` list if validation fails, and 500
/// if the mail transport is unconfigured or the delivery attempt fails.
pub async fn referral_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ReferralRequest>,
) -> Result<Json<SubmissionResponse>, AppError> {
    payload.validate()?;

    if !state.notifications.is_configured() {
        tracing::error!("SMTP credentials not configured");
        return Err(AppError::configuration("Email service not configured"));
    }

    let submission = payload.into_submission()?;
    state.notifications.send_referral(&submission).await?;

    Ok(Json(SubmissionResponse {
        message: "Referral submitted successfully",
    }))
}
