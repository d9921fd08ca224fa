//! Fallback mailer used when SMTP credentials are absent.

use async_trait::async_trait;

use crate::mailer::service::{Mailer, MailerError, MailerResult, OutgoingEmail};

/// Installed at startup when `SMTP_USER` / `SMTP_PASS` are missing.
///
/// Every send fails with [`MailerError::NotConfigured`] without a network
/// attempt, so all endpoints surface the configuration fault deterministically.
#[derive(Debug, Default)]
pub struct UnconfiguredMailer;

impl UnconfiguredMailer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Mailer for UnconfiguredMailer {
    fn is_configured(&self) -> bool {
        false
    }

    async fn send(&self, _email: OutgoingEmail) -> MailerResult<()> {
        Err(MailerError::NotConfigured)
    }
}
