//! Configuration types for the client.
//!
//! - [`ShopifyConfig`]: app credentials plus client behaviour settings
//! - [`ShopifyConfigBuilder`]: builder for [`ShopifyConfig`]
//! - [`ApiKey`], [`ApiSecretKey`], [`AccessToken`]: validated credentials
//! - [`ShopDomain`], [`HostUrl`]: validated domains and URLs
//!
//! # Example
//!
//! ```rust
//! use shopify_client::{ShopifyConfig, ApiKey, ApiSecretKey, HostUrl};
//!
//! let config = ShopifyConfig::builder()
//!     .api_key(ApiKey::new("asdf").unwrap())
//!     .api_secret_key(ApiSecretKey::new("1234").unwrap())
//!     .redirect_uri(HostUrl::new("http://localhost:4000").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert!(!config.ignore_signature());
//! ```

mod newtypes;

pub use newtypes::{AccessToken, ApiKey, ApiSecretKey, HostUrl, ShopDomain};

use crate::clients::RetryPolicy;
use crate::error::ConfigError;

/// Configuration shared by the OAuth helpers, the signer, and the HTTP client.
///
/// `ShopifyConfig` is `Clone + Send + Sync`.
///
/// # Key Rotation
///
/// When `old_api_secret_key` is set, HMAC and app-proxy signature checks that
/// fail with the primary secret are retried with the old one.
#[derive(Clone, Debug)]
pub struct ShopifyConfig {
    api_key: ApiKey,
    api_secret_key: ApiSecretKey,
    old_api_secret_key: Option<ApiSecretKey>,
    redirect_uri: Option<HostUrl>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    ignore_signature: bool,
    retry_policy: RetryPolicy,
}

impl ShopifyConfig {
    /// Starts a [`ShopifyConfigBuilder`].
    #[must_use]
    pub fn builder() -> ShopifyConfigBuilder {
        ShopifyConfigBuilder::new()
    }

    /// The app's client id.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// The shared secret used for signing and token exchange.
    #[must_use]
    pub const fn api_secret_key(&self) -> &ApiSecretKey {
        &self.api_secret_key
    }

    /// Secret accepted alongside the current one while rotating keys.
    #[must_use]
    pub const fn old_api_secret_key(&self) -> Option<&ApiSecretKey> {
        self.old_api_secret_key.as_ref()
    }

    /// Where the shop sends the merchant after the install grant.
    #[must_use]
    pub const fn redirect_uri(&self) -> Option<&HostUrl> {
        self.redirect_uri.as_ref()
    }

    /// Returns the API host override, if configured.
    ///
    /// When set, requests go to this origin instead of `https://{shop}` and
    /// the shop domain is sent in the `Host` header.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Text placed before this crate's own `User-Agent` value.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns `true` if inbound signature verification is disabled.
    #[must_use]
    pub const fn ignore_signature(&self) -> bool {
        self.ignore_signature
    }

    /// Returns the retry policy applied to throttled requests.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyConfig>();
};

/// Builder for [`ShopifyConfig`].
///
/// `api_key` and `api_secret_key` are required. Defaults:
///
/// - `ignore_signature`: `false`
/// - `retry_policy`: [`RetryPolicy::default`] (3 retries, 100ms..2s backoff)
/// - everything else: `None`
#[derive(Debug, Default)]
pub struct ShopifyConfigBuilder {
    api_key: Option<ApiKey>,
    api_secret_key: Option<ApiSecretKey>,
    old_api_secret_key: Option<ApiSecretKey>,
    redirect_uri: Option<HostUrl>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    ignore_signature: bool,
    retry_policy: Option<RetryPolicy>,
}

impl ShopifyConfigBuilder {
    /// Same as [`ShopifyConfig::builder`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Required.
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Required.
    #[must_use]
    pub fn api_secret_key(mut self, key: ApiSecretKey) -> Self {
        self.api_secret_key = Some(key);
        self
    }

    /// Keeps verifying signatures made with a retired secret.
    #[must_use]
    pub fn old_api_secret_key(mut self, key: ApiSecretKey) -> Self {
        self.old_api_secret_key = Some(key);
        self
    }

    /// Redirect URI embedded in the authorize URL.
    #[must_use]
    pub fn redirect_uri(mut self, uri: HostUrl) -> Self {
        self.redirect_uri = Some(uri);
        self
    }

    /// Routes API traffic to another origin (proxy or mock server).
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Prefixes the `User-Agent` header, e.g. `"MyApp/2.1"`.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Disables inbound signature verification.
    ///
    /// Only for trusted, internal, or test contexts: every verification call
    /// then succeeds.
    #[must_use]
    pub const fn ignore_signature(mut self, ignore: bool) -> Self {
        self.ignore_signature = ignore;
        self
    }

    /// Sets the retry policy for throttled (429) responses.
    #[must_use]
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = Some(policy);
        self
    }

    /// Builds the [`ShopifyConfig`].
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingRequiredField`] naming whichever of `api_key`
    /// and `api_secret_key` was never set.
    pub fn build(self) -> Result<ShopifyConfig, ConfigError> {
        let missing = |field| ConfigError::MissingRequiredField { field };
        let api_key = self.api_key.ok_or_else(|| missing("api_key"))?;
        let api_secret_key = self
            .api_secret_key
            .ok_or_else(|| missing("api_secret_key"))?;

        Ok(ShopifyConfig {
            api_key,
            api_secret_key,
            old_api_secret_key: self.old_api_secret_key,
            redirect_uri: self.redirect_uri,
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
            ignore_signature: self.ignore_signature,
            retry_policy: self.retry_policy.unwrap_or_default(),
        })
    }
}
