//! Configuration error types.
//!
//! The credential newtypes, [`ShopifyConfigBuilder`](crate::ShopifyConfigBuilder)
//! and [`Credentials`](crate::Credentials) all fail with [`ConfigError`], so a
//! bad key or shop domain is caught before a client is built.
//!
//! # Example
//!
//! ```rust
//! use shopify_client::{ConfigError, ShopDomain};
//!
//! let err = ShopDomain::new("burnsmod.example.com").unwrap_err();
//! assert!(matches!(err, ConfigError::InvalidShopDomain { .. }));
//! ```

use thiserror::Error;

/// Rejected configuration or credential value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The app's API key was empty.
    #[error("API key must not be empty; copy it from the app's Partner Dashboard settings.")]
    EmptyApiKey,

    /// The app's shared secret was empty.
    #[error("API secret key must not be empty; copy it from the app's Partner Dashboard settings.")]
    EmptyApiSecretKey,

    /// The shop access token was empty.
    #[error("Access token must not be empty.")]
    EmptyAccessToken,

    /// The shop domain was not a `myshopify.com` host.
    #[error("'{domain}' is not a shop domain; use 'shop-name' or 'shop-name.myshopify.com'.")]
    InvalidShopDomain {
        /// Domain as given (trimmed and lowercased).
        domain: String,
    },

    /// The builder was missing a required setting.
    #[error("ShopifyConfig requires '{field}' to be set.")]
    MissingRequiredField {
        /// Builder setting that was never called.
        field: &'static str,
    },

    /// Neither an access token nor an API key/secret pair was supplied.
    #[error("Missing credentials: provide an access token or an API key and secret pair.")]
    MissingCredentials,

    /// The redirect URI or API host was not an absolute URL.
    #[error("'{url}' is not an absolute URL; include the scheme and host (for example 'http://localhost:4000').")]
    InvalidHostUrl {
        /// URL as given.
        url: String,
    },
}
