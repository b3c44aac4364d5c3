//! # Shopify REST Client
//!
//! An async client for the Shopify Admin REST API, with typed configuration,
//! rate-limit aware retries, OAuth install helpers, and request signature
//! verification for Shopify apps.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ShopifyConfig`] and [`ShopifyConfigBuilder`]
//! - Validated newtypes for credentials and domain values
//! - [`Credentials`] for access-token or private-app (Basic) authentication
//! - [`HttpClient`]: retries throttled (429) responses with exponential
//!   [`Backoff`] and records the shop's [`ApiCallLimit`]
//! - [`RestClient`] and the [`rest`] resources (products, pages, themes,
//!   assets, the shop, recurring charges)
//! - [`auth::oauth`]: authorize URL, code-for-token exchange, and the
//!   [`Signer`](auth::oauth::Signer) for HMAC, legacy MD5 and app-proxy
//!   signatures
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_client::{ApiKey, ApiSecretKey, HostUrl, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .api_secret_key(ApiSecretKey::new("your-api-secret").unwrap())
//!     .redirect_uri(HostUrl::new("https://your-app.com/callback").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert!(!config.ignore_signature());
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use shopify_client::{Credentials, RestClient, ShopDomain};
//! use shopify_client::rest::RestResource;
//! use shopify_client::rest::resources::{Product, Shop};
//!
//! let shop = ShopDomain::new("my-store")?;
//! let client = RestClient::new(Credentials::with_access_token(shop, "shpat_...")?, None);
//!
//! let shop = Shop::current(&client).await?;
//! let products = Product::all(&client, None).await?;
//!
//! println!("{} calls used", client.api_call_limit().request_count);
//! ```
//!
//! ## OAuth Install Flow
//!
//! ```rust,ignore
//! use shopify_client::auth::oauth::{authorize_url, exchange_access_token, Signer};
//!
//! // Step 1: Redirect the merchant
//! let url = authorize_url(&config, &shop, "read_products,write_orders")?;
//!
//! // Step 2: Verify the callback and trade the code for a token
//! if Signer::new(&config).verify_hmac_signature(&callback_url) {
//!     let token = exchange_access_token(&config, &shop, code).await?;
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is passed explicitly
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Thread-safe**: clients are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{AuthMode, Credentials};
pub use config::{
    AccessToken, ApiKey, ApiSecretKey, HostUrl, ShopDomain, ShopifyConfig, ShopifyConfigBuilder,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiCallLimit, Backoff, BackoffConfig, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, HttpResponseError, InvalidHttpRequestError, RestClient,
    RetryPolicy,
};

// Re-export resource types
pub use rest::{ResourceError, RestResource};
