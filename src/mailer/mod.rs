//! Outbound mail transport.
//!
//! The delivery contract is a single attempt per call: no queuing, no
//! batching, no retry. Transport errors are converted into [`MailerError`]
//! at this boundary and never propagate as unhandled faults.
//!
//! # Implementations
//!
//! - [`SmtpMailer`] - lettre-backed SMTP transport with a bounded timeout
//! - [`UnconfiguredMailer`] - installed when credentials are absent; fails
//!   deterministically without touching the network

pub mod service;
pub mod smtp;
pub mod unconfigured;

pub use service::{EmailAttachment, Mailer, MailerError, MailerResult, OutgoingEmail};
pub use smtp::SmtpMailer;
pub use unconfigured::UnconfiguredMailer;
