//! HTTP server initialization and runtime setup.
//!
//! Builds the mail transport once at startup, wires it into shared state,
//! and runs the Axum server.

use crate::application::services::NotificationService;
use crate::config::Config;
use crate::mailer::{Mailer, SmtpMailer, UnconfiguredMailer};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SMTP transport (or the unconfigured fallback when credentials are absent)
/// - Notification service and shared state
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Transport construction fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let mailer: Arc<dyn Mailer> = if config.is_mail_configured() {
        let mailer = SmtpMailer::new(&config.smtp)?;
        tracing::info!("SMTP transport ready ({}:{})", config.smtp.host, config.smtp.port);
        Arc::new(mailer)
    } else {
        tracing::warn!(
            "SMTP credentials not configured; submissions will fail until SMTP_USER and SMTP_PASS are set"
        );
        Arc::new(UnconfiguredMailer::new())
    };

    let notifications = Arc::new(NotificationService::new(
        mailer,
        config.mail_to.clone(),
        config.mail_from.clone(),
    ));

    let state = AppState {
        notifications,
        max_attachment_bytes: config.max_attachment_bytes,
    };

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
