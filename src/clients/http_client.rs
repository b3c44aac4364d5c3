//! HTTP client for Shopify API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to a shop, with automatic retry of throttled (429) responses.

use std::collections::HashMap;

use parking_lot::Mutex;
use tokio::sync::OnceCell;
use url::Url;

use crate::auth::{AuthMode, Credentials};
use crate::clients::backoff::{Backoff, RetryPolicy};
use crate::clients::errors::{HttpError, InvalidHttpRequestError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::clients::rate_limit::ApiCallLimit;
use crate::config::{HostUrl, ShopDomain, ShopifyConfig};

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the permanent access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// HTTP client for making requests to one shop.
///
/// The client handles:
/// - Base URI construction from the shop domain or `api_host`
/// - Default headers (JSON content type, User-Agent) and authentication
/// - Retrying 429 responses with exponential backoff
/// - Recording the last call-limit snapshot
///
/// The underlying `reqwest::Client` is created on the first request and
/// reused afterwards, so connections are pooled across calls.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. Concurrent calls each get their own retry
/// budget; only the call-limit snapshot is shared.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_client::{Credentials, ShopDomain};
/// use shopify_client::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let credentials = Credentials::with_access_token(
///     ShopDomain::new("my-store").unwrap(),
///     "shpat_xxx",
/// )?;
/// let client = HttpClient::new(credentials, None);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/admin/shop.json")
///     .build()
///     .unwrap();
/// let response = client.request(request).await?;
/// println!("{} calls left", response.api_call_limit.calls_remaining());
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: OnceCell<reqwest::Client>,
    base_uri: String,
    credentials: Credentials,
    default_headers: HashMap<String, String>,
    retry_policy: RetryPolicy,
    call_limit: Mutex<ApiCallLimit>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client for the shop in `credentials`.
    ///
    /// `config` supplies `api_host`, `user_agent_prefix`, and the retry
    /// policy; without it the defaults apply.
    #[must_use]
    pub fn new(credentials: Credentials, config: Option<&ShopifyConfig>) -> Self {
        let api_host = config.and_then(ShopifyConfig::api_host);
        let base_uri = base_uri(&credentials.shop, api_host);

        let user_agent_prefix = config
            .and_then(ShopifyConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Shopify REST Client v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        // Proxies and mock servers route on Host
        if api_host.is_some() {
            default_headers.insert("Host".to_string(), credentials.shop.as_ref().to_string());
        }

        Self {
            client: OnceCell::new(),
            base_uri,
            credentials,
            default_headers,
            retry_policy: config.map(|c| *c.retry_policy()).unwrap_or_default(),
            call_limit: Mutex::new(ApiCallLimit::default()),
        }
    }

    /// Uses a caller-provided `reqwest::Client` instead of building one.
    #[must_use]
    pub fn with_reqwest_client(mut self, client: reqwest::Client) -> Self {
        self.client = OnceCell::new_with(Some(client));
        self
    }

    /// Replaces the retry policy taken from the configuration.
    #[must_use]
    pub const fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Returns the base URI, e.g. `https://my-store.myshopify.com`.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the credentials this client authenticates with.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the default headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the retry policy for throttled responses.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// Returns the call-limit snapshot from the most recent response.
    ///
    /// Before any response has been seen this reports the default budget of
    /// [`DEFAULT_CALL_LIMIT`](crate::clients::DEFAULT_CALL_LIMIT) calls.
    #[must_use]
    pub fn api_call_limit(&self) -> ApiCallLimit {
        *self.call_limit.lock()
    }

    /// Sends a request to the shop.
    ///
    /// A 429 response is retried up to the policy's `max_retries` (or the
    /// request's override), sleeping for the next backoff delay between
    /// attempts. If the shop is still throttling after the last retry, that
    /// 429 response is returned as `Ok`; callers check
    /// [`HttpResponse::is_throttled`]. Any other status is returned as-is.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A transport error occurs (`Network`); these are never retried
    /// - The request `timeout` elapses, retry waits included (`Timeout`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        match request.timeout {
            Some(after) => tokio::time::timeout(after, self.execute(&request))
                .await
                .map_err(|_| HttpError::Timeout { after })?,
            None => self.execute(&request).await,
        }
    }

    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        let client = self.reqwest_client().await?;
        let url = self.build_url(request)?;

        let max_retries = request.max_retries.unwrap_or(self.retry_policy.max_retries);
        let mut backoff = Backoff::new(self.retry_policy.backoff);
        let mut retry_delays = Vec::new();
        let mut retries: u32 = 0;

        loop {
            let mut req_builder = client.request(request.http_method.as_reqwest(), url.clone());

            for (key, value) in &self.default_headers {
                req_builder = req_builder.header(key, value);
            }
            if let Some(extra) = &request.extra_headers {
                for (key, value) in extra {
                    req_builder = req_builder.header(key, value);
                }
            }

            req_builder = match &self.credentials.auth {
                AuthMode::AccessToken(token) => {
                    req_builder.header(ACCESS_TOKEN_HEADER, token.as_ref())
                }
                AuthMode::Basic { api_key, password } => {
                    req_builder.basic_auth(api_key.as_ref(), Some(password.as_ref()))
                }
            };

            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body = res.bytes().await?.to_vec();

            let mut response = HttpResponse::new(code, res_headers, body);
            self.record_call_limit(response.api_call_limit);

            if let Some(reason) = response.deprecation_reason() {
                tracing::warn!(
                    "Deprecated request to Shopify API at {}, received reason: {}",
                    request.path,
                    reason
                );
            }

            if response.is_throttled() && retries < max_retries {
                retries += 1;
                let delay = backoff.next_delay();
                tracing::debug!(
                    path = %request.path,
                    retry = retries,
                    max_retries,
                    ?delay,
                    "Throttled by Shopify, retrying"
                );
                retry_delays.push(delay);
                tokio::time::sleep(delay).await;
                continue;
            }

            if response.is_throttled() {
                tracing::warn!(
                    path = %request.path,
                    retries,
                    "Still throttled after retries, returning 429 response"
                );
            }

            response.retry_delays = retry_delays;
            return Ok(response);
        }
    }

    async fn reqwest_client(&self) -> Result<&reqwest::Client, reqwest::Error> {
        self.client
            .get_or_try_init(|| async { reqwest::Client::builder().use_rustls_tls().build() })
            .await
    }

    fn build_url(&self, request: &HttpRequest) -> Result<Url, InvalidHttpRequestError> {
        let raw = if request.path.starts_with('/') {
            format!("{}{}", self.base_uri, request.path)
        } else {
            format!("{}/{}", self.base_uri, request.path)
        };
        let mut url = Url::parse(&raw).map_err(|_| InvalidHttpRequestError::InvalidUrl {
            url: raw.clone(),
        })?;

        if let Some(query) = request.query.as_ref().filter(|q| !q.is_empty()) {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    fn record_call_limit(&self, limit: ApiCallLimit) {
        tracing::debug!(
            used = limit.request_count,
            total = limit.bucket_size,
            "Recorded API call limit"
        );
        *self.call_limit.lock() = limit;
    }

    /// Parses response headers into a `HashMap` keyed by lower-cased name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

/// Origin requests are sent to: `api_host` when configured, else the shop.
pub(crate) fn base_uri(shop: &ShopDomain, api_host: Option<&HostUrl>) -> String {
    api_host.map_or_else(|| format!("https://{}", shop.as_ref()), HostUrl::origin)
}
