use axum::http::StatusCode;
use chrono::Utc;
use messenger::{ReqwestWebhook, WebhookClient};
use pretty_assertions::assert_eq;
use shared_types::ReportErrorKind;
use std::time::Duration;

use crate::common::{filled_form, spawn_webhook, spawn_webhook_with_delay};

#[tokio::test]
async fn not_found_is_rejected_with_status() {
    let hook = spawn_webhook(StatusCode::NOT_FOUND).await;
    let payload = filled_form().to_payload("CM-20261016-AB12", Utc::now());

    let err = ReqwestWebhook::new()
        .post_report(&hook.url, &payload)
        .await
        .unwrap_err();

    assert_eq!(err.kind, ReportErrorKind::Rejected);
    assert_eq!(err.status, Some(404));
    assert!(err.message.contains("404"), "{}", err.message);
}

#[tokio::test]
async fn any_2xx_is_accepted() {
    for status in [StatusCode::OK, StatusCode::CREATED, StatusCode::ACCEPTED] {
        let hook = spawn_webhook(status).await;
        let payload = filled_form().to_payload("CM-20261016-AB12", Utc::now());
        let outcome = ReqwestWebhook::new().post_report(&hook.url, &payload).await;
        assert!(outcome.is_ok(), "{status} should count as delivered");
    }
}

#[tokio::test]
async fn hung_endpoint_times_out_as_transport_error() {
    let hook = spawn_webhook_with_delay(StatusCode::OK, Duration::from_secs(5)).await;
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let payload = filled_form().to_payload("CM-20261016-AB12", Utc::now());

    let err = ReqwestWebhook::with_client(client)
        .post_report(&hook.url, &payload)
        .await
        .unwrap_err();

    assert_eq!(err.kind, ReportErrorKind::Transport);
    assert!(err.message.contains("non ha risposto in tempo"), "{}", err.message);
}

#[tokio::test]
async fn exactly_one_request_per_report() {
    let hook = spawn_webhook(StatusCode::SERVICE_UNAVAILABLE).await;
    let payload = filled_form().to_payload("CM-20261016-AB12", Utc::now());

    let _ = ReqwestWebhook::new().post_report(&hook.url, &payload).await;

    // no retry on failure
    assert_eq!(hook.received().await.len(), 1);
}
