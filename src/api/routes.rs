//! API route configuration.
//!
//! All three submission endpoints are public: the site has no accounts and
//! submissions carry no credentials.

use crate::api::handlers::{careers_handler, contact_handler, referral_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Form submission routes.
///
/// # Endpoints
///
/// - `POST /contact`  - Contact form
/// - `POST /careers`  - Career application (optional resume attachment)
/// - `POST /referral` - Client referral
pub fn submission_routes() -> Router<AppState> {
    Router::new()
        .route("/contact", post(contact_handler))
        .route("/careers", post(careers_handler))
        .route("/referral", post(referral_handler))
}
