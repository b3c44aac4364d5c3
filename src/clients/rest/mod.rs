//! REST client for the Shopify Admin API.
//!
//! [`RestClient`] is a thin layer over [`HttpClient`](crate::clients::HttpClient)
//! that normalizes paths and turns non-2xx responses into errors.
//!
//! # Path Normalization
//!
//! - Leading slashes are stripped: `/products` -> `/admin/products.json`
//! - A trailing `.json` is not duplicated: `products.json` -> `/admin/products.json`
//! - An `admin/` prefix is not duplicated: `admin/shop` -> `/admin/shop.json`
//!
//! # Retry Behavior
//!
//! Throttled (429) responses are retried by the underlying `HttpClient`
//! according to the configured [`RetryPolicy`](crate::clients::RetryPolicy).
//! When every retry is throttled too, the REST methods return
//! [`HttpError::Response`](crate::clients::HttpError::Response) with code 429.

mod client;

pub use client::RestClient;
