use crate::common::{create_client, create_test_config, JOB_ID, PAGE_URL};
use serde_json::json;
use std::time::Duration;
use wayback_save::{ErrorKind, JobHandle, PollError, SaveResult};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn status_path() -> String {
    format!("/save/status/{}", JOB_ID)
}

#[tokio::test]
async fn test_poll_gives_up_after_max_attempts() {
    let mock_server = MockServer::start().await;

    // Verified on drop: exactly 20 requests, never a 21st
    Mock::given(method("GET"))
        .and(path(status_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "pending"})))
        .expect(20)
        .mount(&mock_server)
        .await;

    let client = create_client(&create_test_config(&mock_server));
    let err = client
        .poll_until_done(&JobHandle::new(JOB_ID), PAGE_URL)
        .await
        .unwrap_err();

    assert!(matches!(err, PollError::Timeout { attempts: 20 }));
    assert_eq!(err.kind(), ErrorKind::Timeout);
}

#[tokio::test]
async fn test_poll_succeeds_on_last_attempt() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(status_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "pending"})))
        .up_to_n_times(19)
        .expect(19)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(status_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "timestamp": "20240101123045"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&create_test_config(&mock_server));
    let result = client
        .poll_until_done(&JobHandle::new(JOB_ID), PAGE_URL)
        .await
        .expect("Poll failed");

    assert!(matches!(result, SaveResult::Ok { .. }));
    assert_eq!(
        result.snapshot().unwrap().datetime_iso(),
        "2024-01-01 12:30:45"
    );
}

#[tokio::test]
async fn test_configured_attempt_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(status_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "pending"})))
        .expect(3)
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(&mock_server);
    config.poller.max_attempts = 3;
    let client = create_client(&config);
    let err = client
        .poll_until_done(&JobHandle::new(JOB_ID), PAGE_URL)
        .await
        .unwrap_err();

    assert!(matches!(err, PollError::Timeout { attempts: 3 }));
}

#[tokio::test]
async fn test_retry_after_delays_next_poll() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(status_path()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "pending"}))
                .insert_header("Retry-After", "3600"),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(status_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "timestamp": "20240101123045"
        })))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_client(&create_test_config(&mock_server));
    let job = JobHandle::new(JOB_ID);

    // The server asked for an hour between polls; the 1ms default no longer applies
    let outcome = tokio::time::timeout(
        Duration::from_millis(500),
        client.poll_until_done(&job, PAGE_URL),
    )
    .await;

    assert!(outcome.is_err(), "Poll should still be waiting");
}

#[tokio::test]
async fn test_unparseable_retry_after_keeps_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(status_path()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "pending"}))
                .insert_header("Retry-After", "later"),
        )
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(status_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "timestamp": "20240101123045"
        })))
        .mount(&mock_server)
        .await;

    let client = create_client(&create_test_config(&mock_server));
    let outcome = tokio::time::timeout(
        Duration::from_secs(5),
        client.poll_until_done(&JobHandle::new(JOB_ID), PAGE_URL),
    )
    .await
    .expect("Poll should not be delayed");

    assert!(outcome.is_ok());
}

#[tokio::test]
async fn test_poll_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(status_path()))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&create_test_config(&mock_server));
    let err = client
        .poll_until_done(&JobHandle::new(JOB_ID), PAGE_URL)
        .await
        .unwrap_err();

    assert!(matches!(err, PollError::Transport { status: 502 }));
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_poll_unexpected_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(status_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "message": "Cannot resolve host example.com."
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&create_test_config(&mock_server));
    let err = client
        .poll_until_done(&JobHandle::new(JOB_ID), PAGE_URL)
        .await
        .unwrap_err();

    assert!(matches!(err, PollError::CaptureFailed { .. }));
    assert_eq!(err.kind(), ErrorKind::Protocol);
}

#[tokio::test]
async fn test_poll_bad_timestamp() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(status_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "timestamp": "2024"
        })))
        .mount(&mock_server)
        .await;

    let client = create_client(&create_test_config(&mock_server));
    let err = client
        .poll_until_done(&JobHandle::new(JOB_ID), PAGE_URL)
        .await
        .unwrap_err();

    assert!(matches!(err, PollError::BadTimestamp(_)));
}
