//! OAuth helpers for Shopify apps.
//!
//! - [`authorize_url`]: where to send the merchant to approve the app
//! - [`exchange_access_token`]: trade the callback `code` for a token
//! - [`Signer`]: verify signed requests Shopify sends to the app
//!
//! # Security Features
//!
//! - **Constant-Time Comparison**: digest comparisons use constant-time
//!   algorithms to prevent timing attacks
//! - **Key Rotation Support**: an old API secret key can be configured so
//!   requests signed before a rotation still verify
//!
//! # Example: Install Flow
//!
//! ```rust,ignore
//! use shopify_client::auth::oauth::{authorize_url, exchange_access_token, Signer};
//!
//! // 1. Redirect the merchant
//! let url = authorize_url(&config, &shop, "read_products")?;
//!
//! // 2. Verify the callback and exchange the code
//! if Signer::new(&config).verify_hmac_signature(&callback_url) {
//!     let token = exchange_access_token(&config, &shop, &code).await?;
//! }
//! ```

mod authorize;
mod error;
mod signature;
mod token_exchange;

pub use authorize::authorize_url;
pub use error::OAuthError;
pub use signature::{
    canonical_query, compute_legacy_signature, compute_signature, constant_time_compare,
    SignatureInput, Signer, HMAC_PARAM, SIGNATURE_PARAM,
};
pub use token_exchange::{exchange_access_token, ACCESS_TOKEN_PATH};
