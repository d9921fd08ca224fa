//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Mailer**: Whether SMTP delivery credentials are configured
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "mailer": {
///       "status": "ok",
///       "message": "SMTP transport configured"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let mailer_check = check_mailer(&state);

    let all_healthy = mailer_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            mailer: mailer_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Reports whether the mail transport can deliver at all.
fn check_mailer(state: &AppState) -> CheckStatus {
    if state.notifications.is_configured() {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("SMTP transport configured".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("SMTP credentials not configured".to_string()),
        }
    }
}
