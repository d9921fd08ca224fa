//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`  - Health check: mail transport state (public)
//! - `/api/*`        - Form submission endpoints (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//!
//! Trailing-slash normalization is applied by the server when it wraps this
//! router, so tests can drive the router directly.

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::submission_routes())
        .with_state(state)
        .layer(tracing::layer())
}
