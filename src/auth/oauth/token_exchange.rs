//! Exchange of an OAuth authorization code for a permanent access token.
//!
//! After the merchant approves the app, Shopify redirects back with a `code`.
//! [`exchange_access_token`] trades it for an access token with a single POST
//! to `/admin/oauth/access_token.json`. The call is never retried and does not
//! touch any client's call-limit state.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_client::{ShopifyConfig, ShopDomain, ApiKey, ApiSecretKey};
//! use shopify_client::auth::oauth::exchange_access_token;
//!
//! let config = ShopifyConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .api_secret_key(ApiSecretKey::new("your-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let shop = ShopDomain::new("my-store").unwrap();
//! let token = exchange_access_token(&config, &shop, "code-from-callback").await?;
//! ```

use serde::Serialize;

use crate::auth::oauth::OAuthError;
use crate::clients::{base_uri, HttpResponseError};
use crate::config::{ShopDomain, ShopifyConfig};

/// Path of the token endpoint on the shop.
pub const ACCESS_TOKEN_PATH: &str = "/admin/oauth/access_token.json";

#[derive(Serialize)]
struct TokenExchangeRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    code: &'a str,
}

/// Exchanges an authorization `code` for an access token.
///
/// # Errors
///
/// - [`OAuthError::TokenExchange`] when the reply has an `error` field; the
///   message carries its value
/// - [`OAuthError::TokenMissing`] when a JSON reply has no `access_token`
/// - [`OAuthError::Decode`] when a successful reply is not a JSON object
/// - [`OAuthError::Http`] for transport failures, a non-2xx reply that is not
///   JSON (raw body as message), or a non-2xx reply with an `errors` field
///   (its value as message)
pub async fn exchange_access_token(
    config: &ShopifyConfig,
    shop: &ShopDomain,
    code: &str,
) -> Result<String, OAuthError> {
    let token_url = format!("{}{ACCESS_TOKEN_PATH}", base_uri(shop, config.api_host()));

    let request_body = TokenExchangeRequest {
        client_id: config.api_key().as_ref(),
        client_secret: config.api_secret_key().as_ref(),
        code,
    };

    // Unauthenticated one-shot request, so no HttpClient
    let client = reqwest::Client::builder().use_rustls_tls().build()?;
    let mut request = client
        .post(&token_url)
        .header("Accept", "application/json")
        .json(&request_body);
    if config.api_host().is_some() {
        request = request.header("Host", shop.as_ref());
    }

    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    let parsed = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(&body);
    let fields = match parsed {
        Ok(fields) => fields,
        Err(_) if !status.is_success() => {
            return Err(OAuthError::Http(
                HttpResponseError {
                    code: status.as_u16(),
                    message: body,
                    error_reference: None,
                }
                .into(),
            ));
        }
        Err(e) => return Err(OAuthError::Decode(e)),
    };

    if let Some(error) = fields.get("error") {
        let message = error
            .as_str()
            .map_or_else(|| error.to_string(), ToString::to_string);
        tracing::debug!(shop = %shop, %message, "Token exchange rejected");
        return Err(OAuthError::TokenExchange { message });
    }

    if let Some(errors) = fields.get("errors").filter(|_| !status.is_success()) {
        return Err(OAuthError::Http(
            HttpResponseError {
                code: status.as_u16(),
                message: errors
                    .as_str()
                    .map_or_else(|| errors.to_string(), ToString::to_string),
                error_reference: None,
            }
            .into(),
        ));
    }

    fields
        .get("access_token")
        .and_then(serde_json::Value::as_str)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .ok_or(OAuthError::TokenMissing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpError;
    use crate::config::{ApiKey, ApiSecretKey, HostUrl};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_config(server: &MockServer) -> ShopifyConfig {
        ShopifyConfig::builder()
            .api_key(ApiKey::new("test-api-key").unwrap())
            .api_secret_key(ApiSecretKey::new("test-secret").unwrap())
            .api_host(HostUrl::new(server.uri()).unwrap())
            .build()
            .unwrap()
    }

    fn shop() -> ShopDomain {
        ShopDomain::new("test-shop").unwrap()
    }

    #[tokio::test]
    async fn test_exchange_returns_access_token() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/oauth/access_token.json"))
            .and(body_json(serde_json::json!({
                "client_id": "test-api-key",
                "client_secret": "test-secret",
                "code": "auth-code-123"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "tok",
                "scope": "read_products"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = create_test_config(&mock_server);
        let token = exchange_access_token(&config, &shop(), "auth-code-123")
            .await
            .unwrap();

        assert_eq!(token, "tok");
    }

    #[tokio::test]
    async fn test_exchange_surfaces_remote_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/oauth/access_token.json"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"error": "invalid_request"})),
            )
            .mount(&mock_server)
            .await;

        let config = create_test_config(&mock_server);
        let result = exchange_access_token(&config, &shop(), "bad-code").await;

        match result {
            Err(OAuthError::TokenExchange { message }) => {
                assert!(message.contains("invalid_request"));
            }
            other => panic!("Expected TokenExchange error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_exchange_without_token_is_token_missing() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/oauth/access_token.json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"scope": "read"})),
            )
            .mount(&mock_server)
            .await;

        let config = create_test_config(&mock_server);
        let result = exchange_access_token(&config, &shop(), "code").await;

        assert!(matches!(result, Err(OAuthError::TokenMissing)));
    }

    #[tokio::test]
    async fn test_exchange_with_undecodable_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/oauth/access_token.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&mock_server)
            .await;

        let config = create_test_config(&mock_server);
        let result = exchange_access_token(&config, &shop(), "code").await;

        assert!(matches!(result, Err(OAuthError::Decode(_))));
    }

    #[tokio::test]
    async fn test_exchange_non_json_error_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/oauth/access_token.json"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&mock_server)
            .await;

        let config = create_test_config(&mock_server);
        let result = exchange_access_token(&config, &shop(), "code").await;

        match result {
            Err(OAuthError::Http(HttpError::Response(e))) => {
                assert_eq!(e.code, 502);
                assert_eq!(e.message, "Bad Gateway");
            }
            other => panic!("Expected HTTP response error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_exchange_rejection_with_errors_field_keeps_its_value() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/oauth/access_token.json"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(serde_json::json!({"errors": "bad"})),
            )
            .mount(&mock_server)
            .await;

        let config = create_test_config(&mock_server);
        let result = exchange_access_token(&config, &shop(), "code").await;

        match result {
            Err(OAuthError::Http(HttpError::Response(e))) => {
                assert_eq!(e.code, 400);
                assert_eq!(e.message, "bad");
            }
            other => panic!("Expected HTTP response error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_exchange_rejection_without_token_is_token_missing() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/oauth/access_token.json"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        let config = create_test_config(&mock_server);
        let result = exchange_access_token(&config, &shop(), "code").await;

        assert!(matches!(result, Err(OAuthError::TokenMissing)));
    }

    #[tokio::test]
    async fn test_exchange_transport_failure() {
        // nothing listens on the discard port
        let config = ShopifyConfig::builder()
            .api_key(ApiKey::new("test-api-key").unwrap())
            .api_secret_key(ApiSecretKey::new("test-secret").unwrap())
            .api_host(HostUrl::new("http://127.0.0.1:9").unwrap())
            .build()
            .unwrap();

        let result = exchange_access_token(&config, &shop(), "code").await;

        assert!(matches!(
            result,
            Err(OAuthError::Http(HttpError::Network(_)))
        ));
    }
}
