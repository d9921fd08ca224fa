//! SMTP mailer backed by lettre's async transport.

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpSettings;
use crate::mailer::service::{Mailer, MailerError, MailerResult, OutgoingEmail};

/// SMTP transport owning one pooled connection set for the process lifetime.
///
/// The connection may be reused across submissions; correctness does not
/// depend on ordering between distinct sends.
#[derive(Debug)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Builds the transport from settings loaded at startup.
    ///
    /// The secure flag selects implicit TLS (typically port 465) versus a
    /// STARTTLS upgrade (typically port 587). The timeout bounds each send
    /// so a hung relay cannot pin a request handler.
    ///
    /// # Errors
    ///
    /// Returns [`MailerError::NotConfigured`] when credentials are absent and
    /// [`MailerError::Transport`] when the relay host cannot be resolved into
    /// transport parameters.
    pub fn new(settings: &SmtpSettings) -> MailerResult<Self> {
        let credentials = settings
            .credentials
            .as_ref()
            .ok_or(MailerError::NotConfigured)?;

        let builder = if settings.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
        }
        .map_err(|e| MailerError::Transport(e.to_string()))?;

        let transport = builder
            .port(settings.port)
            .credentials(Credentials::new(
                credentials.user.clone(),
                credentials.pass.clone(),
            ))
            .timeout(Some(Duration::from_secs(settings.timeout_seconds)))
            .build();

        Ok(Self { transport })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    fn is_configured(&self) -> bool {
        true
    }

    async fn send(&self, email: OutgoingEmail) -> MailerResult<()> {
        let message = build_message(email)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailerError::Transport(e.to_string()))?;

        Ok(())
    }
}

/// Assembles the MIME message: a plain/HTML alternative pair, wrapped in a
/// mixed multipart when attachments are present.
fn build_message(email: OutgoingEmail) -> MailerResult<Message> {
    let from: Mailbox = email
        .from
        .parse()
        .map_err(|e| MailerError::InvalidMessage(format!("sender address: {e}")))?;
    let to: Mailbox = email
        .to
        .parse()
        .map_err(|e| MailerError::InvalidMessage(format!("recipient address: {e}")))?;

    let alternative = MultiPart::alternative_plain_html(email.text, email.html);

    let body = if email.attachments.is_empty() {
        alternative
    } else {
        let mut mixed = MultiPart::mixed().multipart(alternative);
        for attachment in email.attachments {
            // Fall back rather than reject: the declared type was already
            // validated upstream for resumes.
            let content_type = match ContentType::parse(&attachment.content_type) {
                Ok(content_type) => content_type,
                Err(_) => ContentType::parse("application/octet-stream").map_err(|e| {
                    MailerError::InvalidMessage(format!("attachment content type: {e}"))
                })?,
            };

            mixed = mixed.singlepart(
                Attachment::new(attachment.filename).body(attachment.content, content_type),
            );
        }
        mixed
    };

    Message::builder()
        .from(from)
        .to(to)
        .subject(email.subject)
        .multipart(body)
        .map_err(|e| MailerError::InvalidMessage(e.to_string()))
}
