//! Core domain entities.
//!
//! Submissions are transient: constructed from a validated request, consumed
//! by the email renderer, and discarded once the response is sent. Nothing
//! here has an identity or a stored lifecycle.

pub mod submission;

pub use submission::{
    CareerSubmission, ContactSubmission, ReferralSubmission, ResumeAttachment, Urgency,
};
