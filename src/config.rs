//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! None. The service starts without SMTP credentials, but every submission
//! endpoint then answers with the configuration-fault error until `SMTP_USER`
//! and `SMTP_PASS` are both set.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SMTP_HOST` - Mail relay host (default: `smtp.bizmail.yahoo.com`)
//! - `SMTP_PORT` - Mail relay port (default: `465`)
//! - `SMTP_SECURE` - `true` for implicit TLS, `false` for STARTTLS (default: `true`)
//! - `SMTP_USER` / `SMTP_PASS` - Relay credentials
//! - `SMTP_TIMEOUT_SECONDS` - Outbound send timeout (default: `30`)
//! - `MAIL_TO` - Destination mailbox (default: `info@care-on-call.com`)
//! - `MAIL_FROM` - Sender address (default: `no-reply@care-on-call.com`)
//! - `MAX_ATTACHMENT_BYTES` - Server-side resume size cap (default: 5 MB)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Outbound SMTP transport settings.
    pub smtp: SmtpSettings,
    /// Mailbox that receives every form submission.
    pub mail_to: String,
    /// Sender address stamped on outgoing notifications.
    pub mail_from: String,
    /// Upper bound for a decoded resume attachment in bytes
    /// (`MAX_ATTACHMENT_BYTES`, default: 5 MB). Enforced server-side on the
    /// decoded payload.
    pub max_attachment_bytes: usize,
}

/// SMTP transport settings.
///
/// Credentials are optional: their absence is an operator misconfiguration
/// surfaced per request, not a startup failure.
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    /// When true, connects with implicit TLS; otherwise upgrades via STARTTLS.
    pub secure: bool,
    pub credentials: Option<SmtpCredentials>,
    /// Bound on a single outbound send so a hung relay cannot pin a handler.
    pub timeout_seconds: u64,
}

/// Relay authentication pair from `SMTP_USER` / `SMTP_PASS`.
#[derive(Clone)]
pub struct SmtpCredentials {
    pub user: String,
    pub pass: String,
}

impl std::fmt::Debug for SmtpCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpCredentials")
            .field("user", &self.user)
            .field("pass", &"***")
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let smtp = SmtpSettings {
            host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.bizmail.yahoo.com".to_string()),
            port: env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(465),
            secure: env::var("SMTP_SECURE")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(true),
            credentials: Self::load_smtp_credentials(),
            timeout_seconds: env::var("SMTP_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        };

        let mail_to = env::var("MAIL_TO").unwrap_or_else(|_| "info@care-on-call.com".to_string());
        let mail_from =
            env::var("MAIL_FROM").unwrap_or_else(|_| "no-reply@care-on-call.com".to_string());

        let max_attachment_bytes = env::var("MAX_ATTACHMENT_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5 * 1024 * 1024);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            smtp,
            mail_to,
            mail_from,
            max_attachment_bytes,
        })
    }

    /// Loads SMTP credentials if both halves are present and non-empty.
    ///
    /// Returns `None` otherwise; the mailer layer then reports the
    /// configuration fault on every delivery attempt.
    fn load_smtp_credentials() -> Option<SmtpCredentials> {
        let user = env::var("SMTP_USER").ok().filter(|v| !v.is_empty())?;
        let pass = env::var("SMTP_PASS").ok().filter(|v| !v.is_empty())?;
        Some(SmtpCredentials { user, pass })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - SMTP port/timeout or the attachment cap are out of range
    /// - a mail address is obviously malformed
    pub fn validate(&self) -> Result<()> {
        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // Validate listen address format
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.smtp.host.is_empty() {
            anyhow::bail!("SMTP_HOST must not be empty");
        }

        if self.smtp.port == 0 {
            anyhow::bail!("SMTP_PORT must be non-zero");
        }

        if self.smtp.timeout_seconds == 0 || self.smtp.timeout_seconds > 300 {
            anyhow::bail!(
                "SMTP_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.smtp.timeout_seconds
            );
        }

        // Validate destination and sender mailboxes
        if !self.mail_to.contains('@') {
            anyhow::bail!("MAIL_TO must be a mail address, got '{}'", self.mail_to);
        }
        if !self.mail_from.contains('@') {
            anyhow::bail!("MAIL_FROM must be a mail address, got '{}'", self.mail_from);
        }

        // Validate attachment cap (25 MB is already past what most relays accept)
        if self.max_attachment_bytes == 0 || self.max_attachment_bytes > 25 * 1024 * 1024 {
            anyhow::bail!(
                "MAX_ATTACHMENT_BYTES must be between 1 and 26214400, got {}",
                self.max_attachment_bytes
            );
        }

        Ok(())
    }

    /// Returns whether SMTP delivery is configured.
    pub fn is_mail_configured(&self) -> bool {
        self.smtp.credentials.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!(
            "  SMTP relay: {}:{} (secure: {})",
            self.smtp.host,
            self.smtp.port,
            self.smtp.secure
        );

        if self.is_mail_configured() {
            tracing::info!("  SMTP credentials: configured");
        } else {
            tracing::warn!("  SMTP credentials: missing (submissions will fail)");
        }

        tracing::info!("  Mail to: {}", self.mail_to);
        tracing::info!("  Mail from: {}", self.mail_from);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Attachment cap: {} bytes", self.max_attachment_bytes);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
