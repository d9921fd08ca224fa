mod common;

use axum::http::StatusCode;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::json;

fn valid_payload() -> serde_json::Value {
    json!({
        "firstName": "Dana",
        "lastName": "Lee",
        "email": "dana@example.com",
        "phone": "5551234567",
        "position": "Registered Nurse",
        "experience": "5",
        "availability": "Weekdays"
    })
}

#[tokio::test]
async fn test_careers_valid_submission_without_resume() {
    let (server, mailer) = common::test_server();

    let response = server.post("/api/careers").json(&valid_payload()).await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["message"], "Application submitted successfully");

    let sent = mailer.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].subject,
        "Career Application: Registered Nurse - Dana Lee"
    );
    assert!(sent[0].attachments.is_empty());
    assert!(sent[0].text.contains("Resume Attached: No"));
}

#[tokio::test]
async fn test_careers_resume_is_attached_with_original_filename() {
    let (server, mailer) = common::test_server();

    let mut payload = valid_payload();
    payload["resume"] = json!(BASE64.encode(b"%PDF-1.4 resume body"));
    payload["resumeFileName"] = json!("dana-lee-resume.pdf");
    payload["resumeFileType"] = json!("application/pdf");

    server.post("/api/careers").json(&payload).await.assert_status_ok();

    let sent = mailer.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].attachments.len(), 1);
    assert_eq!(sent[0].attachments[0].filename, "dana-lee-resume.pdf");
    assert_eq!(sent[0].attachments[0].content, b"%PDF-1.4 resume body");
    assert!(sent[0].text.contains("Resume Attached: Yes"));
}

#[tokio::test]
async fn test_careers_corrupt_resume_degrades_to_no_attachment() {
    let (server, mailer) = common::test_server();

    let mut payload = valid_payload();
    payload["resume"] = json!("this is @@ not // base64 !!");
    payload["resumeFileName"] = json!("resume.pdf");

    // Decode failure is non-fatal: the application still goes through
    server.post("/api/careers").json(&payload).await.assert_status_ok();

    let sent = mailer.sent().await;
    assert_eq!(sent.len(), 1);
    assert!(sent[0].attachments.is_empty());
    assert!(sent[0].text.contains("Resume Attached: No"));
}

#[tokio::test]
async fn test_careers_oversized_resume_is_rejected() {
    let (server, mailer) = common::test_server();

    let mut payload = valid_payload();
    payload["resume"] = json!(BASE64.encode(vec![0u8; common::TEST_ATTACHMENT_CAP + 1]));
    payload["resumeFileName"] = json!("resume.pdf");

    let response = server.post("/api/careers").json(&payload).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["details"][0]["field"], "resume");

    assert!(mailer.sent().await.is_empty());
}

#[tokio::test]
async fn test_careers_unsupported_resume_type_is_rejected() {
    let (server, mailer) = common::test_server();

    let mut payload = valid_payload();
    payload["resume"] = json!(BASE64.encode(b"GIF89a"));
    payload["resumeFileName"] = json!("resume.gif");
    payload["resumeFileType"] = json!("image/gif");

    let response = server.post("/api/careers").json(&payload).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["details"][0]["field"], "resume");

    assert!(mailer.sent().await.is_empty());
}

#[tokio::test]
async fn test_careers_missing_fields_list_every_violation() {
    let (server, mailer) = common::test_server();

    let response = server.post("/api/careers").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body = response.json::<serde_json::Value>();
    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();

    // Violations use the wire field names
    for field in [
        "firstName",
        "lastName",
        "email",
        "phone",
        "position",
        "experience",
        "availability",
    ] {
        assert!(fields.contains(&field), "missing violation for {field}");
    }

    assert!(mailer.sent().await.is_empty());
}

#[tokio::test]
async fn test_careers_without_credentials_is_a_configuration_fault() {
    let server = common::unconfigured_server();

    let response = server.post("/api/careers").json(&valid_payload()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Email service not configured");
}
