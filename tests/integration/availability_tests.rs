use crate::common::{create_client, create_test_config, PAGE_URL};
use serde_json::json;
use wayback_save::config::AvailabilitySource;
use wayback_save::{AvailabilityError, AvailabilityResult};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_sparkline_archived() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/__wb/sparkline"))
        .and(query_param("collection", "web"))
        .and(query_param("output", "json"))
        .and(query_param("url", PAGE_URL))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "years": {"2024": [0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0]},
            "first_ts": "20240615093000",
            "last_ts": "20240615093000"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&create_test_config(&mock_server));
    let result = client
        .check_availability(PAGE_URL)
        .await
        .expect("Check failed");

    let snapshot = result.snapshot().expect("Expected a snapshot");
    assert_eq!(snapshot.datetime_iso(), "2024-06-15 09:30:00");
    assert_eq!(
        snapshot.url(),
        "https://web.archive.org/web/20240615093000/https%3A%2F%2Fexample.com%2Fpage%3Fid%3D7"
    );
}

#[tokio::test]
async fn test_sparkline_not_archived() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/__wb/sparkline"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "years": {},
            "first_ts": null,
            "last_ts": null
        })))
        .mount(&mock_server)
        .await;

    let client = create_client(&create_test_config(&mock_server));
    let result = client
        .check_availability(PAGE_URL)
        .await
        .expect("Check failed");

    assert_eq!(result, AvailabilityResult::NotArchived);
}

#[tokio::test]
async fn test_uncached_check_bypasses_caches() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/__wb/sparkline"))
        .and(header("cache-control", "no-cache"))
        .and(header("pragma", "no-cache"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"last_ts": "20240101123045"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&create_test_config(&mock_server));
    let result = client
        .check_availability_uncached(PAGE_URL)
        .await
        .expect("Check failed");

    assert!(result.is_archived());
}

#[tokio::test]
async fn test_closest_archived() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wayback/available"))
        .and(query_param("url", PAGE_URL))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": PAGE_URL,
            "archived_snapshots": {
                "closest": {
                    "status": "200",
                    "available": true,
                    "url": "http://web.archive.org/web/20240101123045/https://example.com/page?id=7",
                    "timestamp": "20240101123045"
                }
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(&mock_server);
    config.endpoints.availability_source = AvailabilitySource::Closest;
    let client = create_client(&config);
    let result = client
        .check_availability(PAGE_URL)
        .await
        .expect("Check failed");

    let snapshot = result.snapshot().expect("Expected a snapshot");
    assert_eq!(snapshot.datetime_iso(), "2024-01-01 12:30:45");
    assert_eq!(
        snapshot.url(),
        "https://web.archive.org/web/20240101123045/https%3A%2F%2Fexample.com%2Fpage%3Fid%3D7"
    );
}

#[tokio::test]
async fn test_closest_not_archived() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wayback/available"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": PAGE_URL,
            "archived_snapshots": {}
        })))
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(&mock_server);
    config.endpoints.availability_source = AvailabilitySource::Closest;
    let client = create_client(&config);
    let result = client
        .check_availability(PAGE_URL)
        .await
        .expect("Check failed");

    assert_eq!(result, AvailabilityResult::NotArchived);
}

#[tokio::test]
async fn test_availability_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/__wb/sparkline"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = create_client(&create_test_config(&mock_server));
    let err = client.check_availability(PAGE_URL).await.unwrap_err();

    assert!(matches!(err, AvailabilityError::Transport { status: 500 }));
}

#[tokio::test]
async fn test_availability_malformed_timestamp() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/__wb/sparkline"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"last_ts": "2024-01-01"})))
        .mount(&mock_server)
        .await;

    let client = create_client(&create_test_config(&mock_server));
    let err = client.check_availability(PAGE_URL).await.unwrap_err();

    assert!(matches!(err, AvailabilityError::BadTimestamp(_)));
}
