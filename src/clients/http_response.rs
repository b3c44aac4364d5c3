//! HTTP response types.
//!
//! [`HttpResponse`] keeps the raw body bytes so callers can decode it into
//! whatever shape the endpoint returns.

use std::collections::HashMap;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::rate_limit::{ApiCallLimit, CALL_LIMIT_HEADER};

const REQUEST_ID_HEADER: &str = "x-request-id";
const DEPRECATION_HEADER: &str = "x-shopify-api-deprecated-reason";

/// A response from the shop.
///
/// Header names are stored lower-cased; a header may carry several values.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lower-cased name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
    /// Snapshot of the call-limit header. [`ApiCallLimit::unknown`] when the
    /// header was missing or malformed.
    pub api_call_limit: ApiCallLimit,
    /// Delays slept before each retry of this call, in order.
    pub retry_delays: Vec<Duration>,
}

impl HttpResponse {
    /// Creates a response, parsing the call-limit header.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Vec<u8>) -> Self {
        let api_call_limit = headers
            .get(CALL_LIMIT_HEADER)
            .and_then(|values| values.first())
            .and_then(|value| ApiCallLimit::parse(value))
            .unwrap_or_else(ApiCallLimit::unknown);

        Self {
            code,
            headers,
            body,
            api_call_limit,
            retry_delays: Vec::new(),
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` for 429 Too Many Requests.
    #[must_use]
    pub const fn is_throttled(&self) -> bool {
        self.code == 429
    }

    /// Number of attempts made for this call (1 + retries).
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.retry_delays.len() + 1
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header(REQUEST_ID_HEADER)
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header value.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header(DEPRECATION_HEADER)
    }

    /// Returns the body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Decode`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Converts a non-2xx response into an error.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] carrying the status and the `errors`
    /// value from the body (or the raw body when it has none).
    pub fn error_for_status(self) -> Result<Self, HttpError> {
        if self.is_ok() {
            return Ok(self);
        }
        Err(HttpError::Response(HttpResponseError {
            code: self.code,
            message: self.error_message(),
            error_reference: self.request_id().map(String::from),
        }))
    }

    fn error_message(&self) -> String {
        let errors = serde_json::from_slice::<serde_json::Value>(&self.body)
            .ok()
            .and_then(|body| body.get("errors").cloned());

        match errors {
            Some(serde_json::Value::String(message)) => message,
            Some(other) => other.to_string(),
            None => self.text(),
        }
    }
}
