//! Authentication types.
//!
//! - [`Credentials`] / [`AuthMode`]: how API requests authenticate
//! - [`oauth`]: install flow and request signature verification
//!
//! # Auth Modes
//!
//! A client uses exactly one mode:
//!
//! - **Access token**: a permanent token from the OAuth install flow, sent in
//!   the `X-Shopify-Access-Token` header
//! - **Basic**: a private app's API key and password
//!
//! # Example
//!
//! ```rust
//! use shopify_client::{AuthMode, Credentials, ShopDomain};
//!
//! let credentials = Credentials::with_api_key(
//!     ShopDomain::new("my-store").unwrap(),
//!     "api-key",
//!     "password",
//! )
//! .unwrap();
//!
//! assert!(matches!(credentials.auth, AuthMode::Basic { .. }));
//! ```

mod credentials;
pub mod oauth;

pub use credentials::{
    AuthMode, Credentials, ACCESS_TOKEN_ENV, API_KEY_ENV, PASSWORD_ENV, SHOP_ENV,
};
