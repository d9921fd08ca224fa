//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one form endpoint plus the health check.

pub mod careers;
pub mod contact;
pub mod health;
pub mod referral;

pub use careers::careers_handler;
pub use contact::contact_handler;
pub use health::health_handler;
pub use referral::referral_handler;
