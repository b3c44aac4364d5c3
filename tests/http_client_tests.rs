//! Integration tests for the HTTP client.
//!
//! These tests run the client against a mock shop and verify retry of
//! throttled responses, call-limit recording, authentication headers, and
//! error handling.

use std::time::Duration;

use shopify_client::clients::{HttpClient, HttpMethod, HttpRequest, CALL_LIMIT_HEADER};
use shopify_client::{
    ApiKey, ApiSecretKey, BackoffConfig, Credentials, HostUrl, HttpError, RetryPolicy,
    ShopDomain, ShopifyConfig,
};
use wiremock::matchers::{basic_auth, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BACKOFF_MAX: Duration = Duration::from_millis(50);

/// Creates a config that routes requests to the mock server with a short backoff.
fn mock_config(server: &MockServer) -> ShopifyConfig {
    ShopifyConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .api_secret_key(ApiSecretKey::new("test-secret").unwrap())
        .api_host(HostUrl::new(server.uri()).unwrap())
        .retry_policy(RetryPolicy {
            max_retries: 3,
            backoff: BackoffConfig {
                min: Duration::from_millis(10),
                max: BACKOFF_MAX,
                factor: 2.0,
                jitter: true,
            },
        })
        .build()
        .unwrap()
}

fn token_client(server: &MockServer) -> HttpClient {
    let credentials =
        Credentials::with_access_token(ShopDomain::new("test-shop").unwrap(), "test-token")
            .unwrap();
    HttpClient::new(credentials, Some(&mock_config(server)))
}

fn get_shop() -> HttpRequest {
    HttpRequest::builder(HttpMethod::Get, "/admin/shop.json")
        .build()
        .unwrap()
}

fn throttled() -> ResponseTemplate {
    ResponseTemplate::new(429).set_body_json(serde_json::json!({"errors": "Exceeded 2 calls per second for api client. Reduce request rates to resume uninterrupted service."}))
}

// ============================================================================
// Throttling and Retry
// ============================================================================

#[tokio::test]
async fn test_throttled_request_is_retried_until_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/shop.json"))
        .respond_with(throttled())
        .up_to_n_times(3)
        .expect(3)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/shop.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"shop": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = token_client(&server);
    let response = client.request(get_shop()).await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.attempts(), 4);
    assert_eq!(response.retry_delays.len(), 3);

    for pair in response.retry_delays.windows(2) {
        assert!(pair[0] <= pair[1], "delays decreased: {pair:?}");
    }
    for delay in &response.retry_delays {
        assert!(*delay >= Duration::from_millis(10));
        assert!(*delay <= BACKOFF_MAX);
    }
}

#[tokio::test]
async fn test_throttling_past_max_retries_returns_last_429() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/shop.json"))
        .respond_with(throttled())
        .expect(4)
        .mount(&server)
        .await;

    let client = token_client(&server);
    let response = client.request(get_shop()).await.unwrap();

    assert!(response.is_throttled());
    assert_eq!(response.attempts(), 4);
}

#[tokio::test]
async fn test_per_request_max_retries_overrides_policy() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/shop.json"))
        .respond_with(throttled())
        .expect(2)
        .mount(&server)
        .await;

    let client = token_client(&server);
    let request = HttpRequest::builder(HttpMethod::Get, "/admin/shop.json")
        .max_retries(1)
        .build()
        .unwrap();
    let response = client.request(request).await.unwrap();

    assert!(response.is_throttled());
    assert_eq!(response.retry_delays.len(), 1);
}

#[tokio::test]
async fn test_each_call_gets_a_fresh_retry_budget() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/shop.json"))
        .respond_with(throttled())
        .expect(8)
        .mount(&server)
        .await;

    let client = token_client(&server);
    let first = client.request(get_shop()).await.unwrap();
    let second = client.request(get_shop()).await.unwrap();

    assert_eq!(first.attempts(), 4);
    assert_eq!(second.attempts(), 4);
}

#[tokio::test]
async fn test_server_errors_are_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/shop.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .expect(1)
        .mount(&server)
        .await;

    let client = token_client(&server);
    let response = client.request(get_shop()).await.unwrap();

    assert_eq!(response.code, 500);
    assert_eq!(response.attempts(), 1);
    assert_eq!(response.text(), "oops");
}

#[tokio::test]
async fn test_timeout_covers_retry_waits() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/shop.json"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let client = token_client(&server);
    let request = HttpRequest::builder(HttpMethod::Get, "/admin/shop.json")
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let result = client.request(request).await;

    assert!(matches!(result, Err(HttpError::Timeout { .. })));
}

// ============================================================================
// Call Limit
// ============================================================================

#[tokio::test]
async fn test_call_limit_is_recorded_from_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/shop.json"))
        .respond_with(ResponseTemplate::new(200).insert_header(CALL_LIMIT_HEADER, "32/40"))
        .mount(&server)
        .await;

    let client = token_client(&server);
    assert_eq!(client.api_call_limit().request_count, 0);
    assert_eq!(client.api_call_limit().bucket_size, 40);

    let response = client.request(get_shop()).await.unwrap();

    assert_eq!(response.api_call_limit.request_count, 32);
    assert_eq!(client.api_call_limit().request_count, 32);
    assert_eq!(client.api_call_limit().bucket_size, 40);
    assert_eq!(client.api_call_limit().calls_remaining(), 8);
}

#[tokio::test]
async fn test_malformed_call_limit_is_recorded_as_unknown() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/shop.json"))
        .respond_with(ResponseTemplate::new(200).insert_header(CALL_LIMIT_HEADER, "lots"))
        .mount(&server)
        .await;

    let client = token_client(&server);
    client.request(get_shop()).await.unwrap();

    assert!(client.api_call_limit().is_unknown());
    assert_eq!(client.api_call_limit().request_count, 0);
    assert_eq!(client.api_call_limit().bucket_size, 0);
}

#[tokio::test]
async fn test_call_limit_is_recorded_on_throttled_responses() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/shop.json"))
        .respond_with(throttled().insert_header(CALL_LIMIT_HEADER, "40/40"))
        .mount(&server)
        .await;

    let client = token_client(&server);
    let request = HttpRequest::builder(HttpMethod::Get, "/admin/shop.json")
        .max_retries(0)
        .build()
        .unwrap();
    client.request(request).await.unwrap();

    assert_eq!(client.api_call_limit().calls_remaining(), 0);
}

// ============================================================================
// Authentication and Headers
// ============================================================================

#[tokio::test]
async fn test_access_token_is_sent_in_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/shop.json"))
        .and(header("X-Shopify-Access-Token", "test-token"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = token_client(&server);
    let response = client.request(get_shop()).await.unwrap();

    assert_eq!(response.code, 200);
}

#[tokio::test]
async fn test_basic_auth_uses_api_key_and_password() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/shop.json"))
        .and(basic_auth("private-key", "private-password"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let credentials = Credentials::with_api_key(
        ShopDomain::new("test-shop").unwrap(),
        "private-key",
        "private-password",
    )
    .unwrap();
    let client = HttpClient::new(credentials, Some(&mock_config(&server)));

    let response = client.request(get_shop()).await.unwrap();

    assert_eq!(response.code, 200);
    assert!(!client
        .default_headers()
        .contains_key("X-Shopify-Access-Token"));
}

#[tokio::test]
async fn test_json_body_and_query_are_sent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/products.json"))
        .and(header("Content-Type", "application/json"))
        .and(wiremock::matchers::query_param("notify", "true"))
        .and(wiremock::matchers::body_json(
            serde_json::json!({"product": {"title": "Board"}}),
        ))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = token_client(&server);
    let request = HttpRequest::builder(HttpMethod::Post, "/admin/products.json")
        .body(serde_json::json!({"product": {"title": "Board"}}))
        .query_param("notify", "true")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();

    assert_eq!(response.code, 201);
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_transport_failure_is_network_error() {
    // Nothing listens on the discard port
    let config = ShopifyConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .api_secret_key(ApiSecretKey::new("test-secret").unwrap())
        .api_host(HostUrl::new("http://127.0.0.1:9").unwrap())
        .build()
        .unwrap();
    let credentials =
        Credentials::with_access_token(ShopDomain::new("test-shop").unwrap(), "test-token")
            .unwrap();
    let client = HttpClient::new(credentials, Some(&config));

    let result = client.request(get_shop()).await;

    assert!(matches!(result, Err(HttpError::Network(_))));
}

#[tokio::test]
async fn test_invalid_request_is_rejected_before_sending() {
    let server = MockServer::start().await;
    let client = token_client(&server);

    let request = HttpRequest {
        http_method: HttpMethod::Get,
        path: String::new(),
        body: None,
        query: None,
        extra_headers: None,
        max_retries: None,
        timeout: None,
    };

    let result = client.request(request).await;

    assert!(matches!(result, Err(HttpError::InvalidRequest(_))));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}
