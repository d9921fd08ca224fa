//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::NotificationService;

#[derive(Clone)]
pub struct AppState {
    /// Process-wide notification service owning the mail transport.
    pub notifications: Arc<NotificationService>,
    /// Server-side cap for a decoded resume attachment.
    pub max_attachment_bytes: usize,
}
