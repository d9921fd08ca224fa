//! Mailer trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while handing a message to the transport.
#[derive(Debug, Error)]
pub enum MailerError {
    /// SMTP credentials were never supplied. Operator misconfiguration,
    /// not a transient fault.
    #[error("SMTP credentials are not configured")]
    NotConfigured,
    /// The message itself could not be assembled (bad address, bad header).
    #[error("invalid message: {0}")]
    InvalidMessage(String),
    /// The transport rejected the message or the connection failed/timed out.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Result type for mailer operations.
pub type MailerResult<T> = Result<T, MailerError>;

/// A fully formed notification ready for dispatch.
///
/// Both renderings carry the same content; the receiving client picks one.
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub html: String,
    pub text: String,
    pub attachments: Vec<EmailAttachment>,
}

/// Binary attachment passed through to the transport unmodified.
#[derive(Debug, Clone)]
pub struct EmailAttachment {
    pub filename: String,
    pub content: Vec<u8>,
    pub content_type: String,
}

/// Trait for the outbound mail transport.
///
/// Implementations must be thread-safe; the service holds one instance for
/// the process lifetime and shares it across concurrent submissions. There
/// is no ordering requirement between distinct sends.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Whether delivery credentials are present.
    ///
    /// Endpoints check this before rendering so an operator misconfiguration
    /// surfaces as a distinct fault without a network attempt.
    fn is_configured(&self) -> bool;

    /// Performs exactly one delivery attempt.
    ///
    /// # Errors
    ///
    /// Any transport-level failure is returned as [`MailerError::Transport`]
    /// with a human-readable reason. Callers must not expect a retry.
    async fn send(&self, email: OutgoingEmail) -> MailerResult<()>;
}
