//! Handler for the career application endpoint.

use axum::{Json, extract::State};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use validator::Validate;

use crate::api::dto::SubmissionResponse;
use crate::api::dto::careers::CareerRequest;
use crate::api::extract::AppJson;
use crate::domain::ResumeAttachment;
use crate::error::AppError;
use crate::state::AppState;

/// MIME types accepted for a resume: PDF and the two Word formats the
/// careers form offers for upload.
const ALLOWED_RESUME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Relays a career application to the site mailbox, with the resume as an
/// attachment when one was uploaded.
///
/// # Endpoint
///
/// `POST /api/careers`
///
/// # Resume Handling
///
/// The resume arrives base64-encoded with its original filename and declared
/// MIME type. A payload that fails to decode is logged and dropped - the
/// application still goes through, flagged as having no attachment. A decoded
/// resume over the configured size cap or with an unsupported declared type
/// is rejected as a field violation, independently of any client-side check.
///
/// # Response
///
/// ```json
/// { "message": "Application submitted successfully" }
/// ```
///
/// # Errors
///
/// Returns 400 with a per-field `details` list if validation fails, and 500
/// if the mail transport is unconfigured or the delivery attempt fails.
pub async fn careers_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CareerRequest>,
) -> Result<Json<SubmissionResponse>, AppError> {
    payload.validate()?;

    if !state.notifications.is_configured() {
        tracing::error!("SMTP credentials not configured");
        return Err(AppError::configuration("Email service not configured"));
    }

    let resume = decode_resume(
        payload.resume.as_deref(),
        payload.resume_file_name.as_deref(),
        payload.resume_file_type.as_deref(),
        state.max_attachment_bytes,
    )?;

    let submission = payload.into_submission(resume);
    state.notifications.send_career(&submission).await?;

    Ok(Json(SubmissionResponse {
        message: "Application submitted successfully",
    }))
}

/// Decodes the transported resume into a binary attachment.
///
/// Returns `Ok(None)` when no resume was sent, when the filename is missing
/// (an attachment must carry one), or when the base64 payload is corrupt;
/// in that last case the application still goes through without a file.
/// Size and declared-type limits are hard failures.
fn decode_resume(
    resume: Option<&str>,
    file_name: Option<&str>,
    file_type: Option<&str>,
    max_bytes: usize,
) -> Result<Option<ResumeAttachment>, AppError> {
    let (Some(data), Some(filename)) = (resume, file_name) else {
        return Ok(None);
    };
    if filename.is_empty() {
        return Ok(None);
    }

    let content = match BASE64.decode(data) {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!("failed to decode resume attachment: {err}");
            return Ok(None);
        }
    };

    if content.len() > max_bytes {
        return Err(AppError::field_violation(
            "resume",
            format!("Resume must be {max_bytes} bytes or smaller"),
        ));
    }

    let content_type = file_type.unwrap_or("application/pdf");
    if !ALLOWED_RESUME_TYPES.contains(&content_type) {
        return Err(AppError::field_violation(
            "resume",
            "Resume must be a PDF or Word document",
        ));
    }

    Ok(Some(ResumeAttachment {
        filename: filename.to_string(),
        content,
        content_type: content_type.to_string(),
    }))
}
