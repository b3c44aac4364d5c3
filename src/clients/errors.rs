//! HTTP-level error types.
//!
//! - [`HttpResponseError`]: a non-2xx status where the caller required 2xx
//! - [`InvalidHttpRequestError`]: a request rejected before it was sent
//! - [`HttpError`]: the unified error returned by the clients
//!
//! A 429 that is still throttled after the last retry is *not* an error at the
//! [`HttpClient`](crate::clients::HttpClient) level: the response is returned
//! and the caller inspects its status code.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_client::clients::HttpError;
//!
//! match client.get("shop", None).await {
//!     Ok(response) => println!("{}", response.text()),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(other) => println!("{other}"),
//! }
//! ```

use std::time::Duration;

use thiserror::Error;

/// Error returned when a response had an unexpected (non-2xx) status.
///
/// `message` holds the value of the body's `errors` field verbatim (a string
/// stays a string, a map is rendered as JSON). When the body does not decode
/// as such an object, `message` holds the raw body text.
///
/// ```rust
/// use shopify_client::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "Not Found".to_string(),
///     error_reference: None,
/// };
/// assert_eq!(error.to_string(), "Status 404: Not Found");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Status {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The `errors` value from the body, or the raw body.
    pub message: String,
    /// Request id from the `X-Request-Id` header, for support reports.
    pub error_reference: Option<String>,
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path was empty.
    #[error("Request path cannot be empty.")]
    EmptyPath,

    /// The request path was an absolute URL instead of a path on the shop.
    #[error("Request path '{path}' must be relative to the shop, not an absolute URL.")]
    AbsolutePath {
        /// The rejected path.
        path: String,
    },

    /// The assembled URL could not be parsed.
    #[error("Invalid request URL '{url}'.")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
    },
}

/// Unified error type for HTTP operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response where the caller required success.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The request was rejected before sending.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network, DNS, or TLS failure. Never retried.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not the JSON the caller expected.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The whole call, retries included, exceeded the request timeout.
    #[error("Request timed out after {after:?}")]
    Timeout {
        /// The timeout that elapsed.
        after: Duration,
    },
}

impl HttpError {
    /// Returns the HTTP status code for [`HttpError::Response`] errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_includes_status_code() {
        let error = HttpResponseError {
            code: 422,
            message: r#"{"title":["can't be blank"]}"#.to_string(),
            error_reference: None,
        };
        assert_eq!(
            error.to_string(),
            r#"Status 422: {"title":["can't be blank"]}"#
        );
    }

    #[test]
    fn test_status_accessor() {
        let error = HttpError::Response(HttpResponseError {
            code: 404,
            message: "Not Found".to_string(),
            error_reference: None,
        });
        assert_eq!(error.status(), Some(404));

        let error = HttpError::Timeout {
            after: Duration::from_secs(1),
        };
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_invalid_request_messages() {
        assert_eq!(
            InvalidHttpRequestError::EmptyPath.to_string(),
            "Request path cannot be empty."
        );
        let error = InvalidHttpRequestError::AbsolutePath {
            path: "https://evil.example.com".to_string(),
        };
        assert!(error.to_string().contains("https://evil.example.com"));
    }

    #[test]
    fn test_decode_error_wraps_serde_json() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = HttpError::from(source);
        assert!(error.to_string().starts_with("Failed to decode response body"));
    }
}
