//! REST client implementation for the Shopify Admin API.

use std::collections::BTreeMap;

use crate::auth::Credentials;
use crate::clients::{
    ApiCallLimit, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse,
    InvalidHttpRequestError,
};
use crate::config::ShopifyConfig;

/// REST client for the Shopify Admin API.
///
/// Provides `get`, `post`, `put` and `delete` over an [`HttpClient`]. Paths
/// are normalized to `/admin/{path}.json`, and any non-2xx response (a 429
/// that outlasted the retries included) becomes [`HttpError::Response`].
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_client::{Credentials, RestClient, ShopDomain};
///
/// let credentials = Credentials::with_access_token(
///     ShopDomain::new("my-store").unwrap(),
///     "shpat_xxx",
/// )?;
/// let client = RestClient::new(credentials, None);
///
/// let response = client.get("products", None).await?;
///
/// let body = serde_json::json!({"product": {"title": "New Product"}});
/// let response = client.post("products", Some(body)).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a REST client for the shop in `credentials`.
    #[must_use]
    pub fn new(credentials: Credentials, config: Option<&ShopifyConfig>) -> Self {
        Self {
            http_client: HttpClient::new(credentials, config),
        }
    }

    /// Wraps an already configured [`HttpClient`].
    #[must_use]
    pub const fn from_http_client(http_client: HttpClient) -> Self {
        Self { http_client }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the call-limit snapshot from the most recent response.
    #[must_use]
    pub fn api_call_limit(&self) -> ApiCallLimit {
        self.http_client.api_call_limit()
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] for an empty path,
    /// [`HttpError::Response`] for a non-2xx status, and
    /// [`HttpError::Network`] for transport failures.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut query = BTreeMap::new();
    /// query.insert("limit".to_string(), "50".to_string());
    /// let response = client.get("products", Some(query)).await?;
    /// ```
    pub async fn get(
        &self,
        path: &str,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request, with or without a JSON body.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn post(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Post, path, body, None).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Put, path, Some(body), None)
            .await
    }

    /// Sends a DELETE request, with optional query parameters.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn delete(
        &self,
        path: &str,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Delete, path, None, query).await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);
        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }
        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        let request = builder.build()?;
        self.http_client.request(request).await?.error_for_status()
    }
}

/// Normalizes a REST path to `/admin/{path}.json`.
///
/// Leading slashes, an `admin/` prefix and a `.json` suffix are accepted and
/// not duplicated.
fn normalize_path(path: &str) -> Result<String, InvalidHttpRequestError> {
    let path = path.trim_start_matches('/');
    let path = path.strip_prefix("admin/").unwrap_or(path);
    let path = path.strip_suffix(".json").unwrap_or(path);

    if path.is_empty() {
        return Err(InvalidHttpRequestError::EmptyPath);
    }

    Ok(format!("/admin/{path}.json"))
}
