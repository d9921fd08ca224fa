#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use tokio::sync::Mutex;

use homecare_forms::application::services::NotificationService;
use homecare_forms::mailer::{Mailer, MailerError, MailerResult, OutgoingEmail, UnconfiguredMailer};
use homecare_forms::routes::app_router;
use homecare_forms::state::AppState;

pub const TEST_ATTACHMENT_CAP: usize = 5 * 1024 * 1024;

/// Mailer that records every outgoing email instead of sending it.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl RecordingMailer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    fn is_configured(&self) -> bool {
        true
    }

    async fn send(&self, email: OutgoingEmail) -> MailerResult<()> {
        self.sent.lock().await.push(email);
        Ok(())
    }
}

/// Mailer that fails every delivery attempt at the transport level.
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    fn is_configured(&self) -> bool {
        true
    }

    async fn send(&self, _email: OutgoingEmail) -> MailerResult<()> {
        Err(MailerError::Transport("connection refused".to_string()))
    }
}

pub fn test_state(mailer: Arc<dyn Mailer>) -> AppState {
    let notifications = Arc::new(NotificationService::new(
        mailer,
        "inbox@example.com".to_string(),
        "no-reply@example.com".to_string(),
    ));

    AppState {
        notifications,
        max_attachment_bytes: TEST_ATTACHMENT_CAP,
    }
}

/// Full router backed by a recording mailer; returns the mailer handle for
/// delivery assertions.
pub fn test_server() -> (TestServer, Arc<RecordingMailer>) {
    let mailer = RecordingMailer::new();
    let server = TestServer::new(app_router(test_state(mailer.clone()))).unwrap();
    (server, mailer)
}

/// Router whose mail transport has no credentials configured.
pub fn unconfigured_server() -> TestServer {
    TestServer::new(app_router(test_state(Arc::new(UnconfiguredMailer::new())))).unwrap()
}

/// Router whose mail transport fails every send.
pub fn failing_server() -> TestServer {
    TestServer::new(app_router(test_state(Arc::new(FailingMailer)))).unwrap()
}
