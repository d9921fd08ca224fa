//! # Homecare Forms
//!
//! Backend for the lead-generation forms of a home healthcare marketing site.
//!
//! The site itself is static content; the only server logic is the
//! form-submission pipeline exposed by three JSON endpoints:
//!
//! - `POST /api/contact` - general contact form
//! - `POST /api/careers` - career application (optional resume attachment)
//! - `POST /api/referral` - client referral form
//!
//! Each submission is validated, rendered into an HTML + plain-text email and
//! relayed once over SMTP to a fixed mailbox. Nothing is persisted and no
//! delivery is retried: one submission means at most one delivery attempt.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Transient submission entities
//! - **Application Layer** ([`application`]) - Notification service orchestrating
//!   rendering and dispatch
//! - **Mailer Layer** ([`mailer`]) - SMTP transport behind the [`mailer::Mailer`] trait
//! - **Email Layer** ([`email`]) - Askama templates for message bodies
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # SMTP credentials enable delivery; without them the endpoints
//! # respond with a configuration error.
//! export SMTP_USER="mailer@example.com"
//! export SMTP_PASS="secret"
//! export MAIL_TO="inbox@example.com"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod email;
pub mod error;
pub mod mailer;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::NotificationService;
    pub use crate::domain::{
        CareerSubmission, ContactSubmission, ReferralSubmission, ResumeAttachment, Urgency,
    };
    pub use crate::error::AppError;
    pub use crate::mailer::{Mailer, MailerError, OutgoingEmail};
    pub use crate::state::AppState;
}
