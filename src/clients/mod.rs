//! HTTP client types for Shopify Admin API communication.
//!
//! This module provides the request layer: building authenticated requests,
//! retrying throttled responses, and recording the shop's call budget.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async client; one per shop
//! - [`HttpRequest`] / [`HttpResponse`]: a logical call and its final response
//! - [`Backoff`] / [`RetryPolicy`]: delay schedule for 429 retries
//! - [`ApiCallLimit`]: parsed `X-Shopify-Shop-Api-Call-Limit` snapshot
//! - [`rest::RestClient`]: path-normalizing REST layer on top of `HttpClient`
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_client::{Credentials, ShopDomain};
//! use shopify_client::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let credentials = Credentials::with_access_token(
//!     ShopDomain::new("my-store").unwrap(),
//!     "shpat_xxx",
//! )?;
//! let client = HttpClient::new(credentials, None);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/admin/shop.json")
//!     .build()
//!     .unwrap();
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! - **429 (Throttled)**: retried up to `max_retries` times (default 3) with
//!   exponential backoff; the final 429 is returned as a normal response
//! - **Everything else**: returned immediately, never retried
//! - **Transport errors**: returned immediately as [`HttpError::Network`]
//!
//! Retry state belongs to the call, so concurrent calls never share a budget.

mod backoff;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod rate_limit;
pub mod rest;

pub use backoff::{Backoff, BackoffConfig, RetryPolicy, MAX_RETRIES};
pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, ACCESS_TOKEN_HEADER, SDK_VERSION};
pub(crate) use http_client::base_uri;
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use rate_limit::{ApiCallLimit, CALL_LIMIT_HEADER, DEFAULT_CALL_LIMIT};

pub use rest::RestClient;
