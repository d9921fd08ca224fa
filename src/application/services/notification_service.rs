//! Submission-to-notification orchestration.

use std::sync::Arc;

use crate::domain::{CareerSubmission, ContactSubmission, ReferralSubmission};
use crate::email::{self, EmailContent};
use crate::error::AppError;
use crate::mailer::{EmailAttachment, Mailer, MailerError, OutgoingEmail};

/// Service that turns a validated submission into one delivered email.
///
/// Owns the process-wide mail transport handle plus the fixed destination
/// and sender addresses. Injected into handlers through
/// [`crate::state::AppState`] so tests can substitute a fake transport.
pub struct NotificationService {
    mailer: Arc<dyn Mailer>,
    mail_to: String,
    mail_from: String,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(mailer: Arc<dyn Mailer>, mail_to: String, mail_from: String) -> Self {
        Self {
            mailer,
            mail_to,
            mail_from,
        }
    }

    /// Whether the underlying transport has delivery credentials.
    pub fn is_configured(&self) -> bool {
        self.mailer.is_configured()
    }

    /// Relays a contact-form submission.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] when credentials are missing and
    /// [`AppError::Delivery`] when the single transport attempt fails.
    pub async fn send_contact(&self, submission: &ContactSubmission) -> Result<(), AppError> {
        let content = email::contact_email(submission).map_err(render_error)?;
        self.dispatch(content, Vec::new()).await?;

        // Operational log: submitter plus a non-sensitive discriminator only
        tracing::info!(
            email = %submission.email,
            subject = %submission.subject,
            "contact form submitted"
        );
        metrics::counter!("form_submissions_total", "kind" => "contact").increment(1);

        Ok(())
    }

    /// Relays a career application, attaching the resume when present.
    pub async fn send_career(&self, submission: &CareerSubmission) -> Result<(), AppError> {
        let content = email::career_email(submission).map_err(render_error)?;

        let attachments = submission
            .resume
            .iter()
            .map(|resume| EmailAttachment {
                filename: resume.filename.clone(),
                content: resume.content.clone(),
                content_type: resume.content_type.clone(),
            })
            .collect();

        self.dispatch(content, attachments).await?;

        tracing::info!(
            email = %submission.email,
            position = %submission.position,
            "career application submitted"
        );
        metrics::counter!("form_submissions_total", "kind" => "career").increment(1);

        Ok(())
    }

    /// Relays a client referral.
    pub async fn send_referral(&self, submission: &ReferralSubmission) -> Result<(), AppError> {
        let content = email::referral_email(submission).map_err(render_error)?;
        self.dispatch(content, Vec::new()).await?;

        tracing::info!(
            email = %submission.referrer_email,
            patient = %submission.patient_name,
            "referral submitted"
        );
        metrics::counter!("form_submissions_total", "kind" => "referral").increment(1);

        Ok(())
    }

    /// Exactly one delivery attempt; transport detail never reaches the client.
    async fn dispatch(
        &self,
        content: EmailContent,
        attachments: Vec<EmailAttachment>,
    ) -> Result<(), AppError> {
        let outgoing = OutgoingEmail {
            to: self.mail_to.clone(),
            from: self.mail_from.clone(),
            subject: content.subject,
            html: content.html,
            text: content.text,
            attachments,
        };

        self.mailer.send(outgoing).await.map_err(|err| match err {
            MailerError::NotConfigured => {
                tracing::error!("SMTP credentials not configured");
                AppError::configuration("Email service not configured")
            }
            other => {
                tracing::error!("email delivery failed: {other}");
                AppError::delivery("Failed to send email")
            }
        })
    }
}

fn render_error(err: askama::Error) -> AppError {
    tracing::error!("email template rendering failed: {err}");
    AppError::internal("Internal server error")
}
