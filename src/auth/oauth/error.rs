//! OAuth-specific error types.
//!
//! - [`OAuthError::TokenExchange`]: the shop rejected the authorization code
//! - [`OAuthError::TokenMissing`]: the reply carried no access token
//! - [`OAuthError::MissingRedirectUri`]: no redirect URI configured
//! - [`OAuthError::Decode`]: the reply was not a JSON object
//! - [`OAuthError::Http`]: transport or request error
//!
//! # Example
//!
//! ```rust
//! use shopify_client::auth::oauth::OAuthError;
//!
//! let error = OAuthError::TokenExchange {
//!     message: "invalid_request".to_string(),
//! };
//! assert!(error.to_string().contains("invalid_request"));
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Errors that can occur during OAuth operations.
///
/// # Thread Safety
///
/// `OAuthError` is `Send + Sync`, making it safe to use across async boundaries.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// The token endpoint answered with an `error` field.
    #[error("Token exchange failed: {message}")]
    TokenExchange {
        /// The `error` value returned by the shop.
        message: String,
    },

    /// The token endpoint answered without an `access_token`.
    #[error("Token exchange response did not contain an access token")]
    TokenMissing,

    /// `authorize_url` needs a redirect URI in `ShopifyConfig`.
    #[error("Redirect URI must be configured in ShopifyConfig for OAuth")]
    MissingRedirectUri,

    /// The token endpoint's body was not a JSON object.
    #[error("Failed to decode token response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Wrapped HTTP client error.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl From<reqwest::Error> for OAuthError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(HttpError::Network(error))
    }
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};
