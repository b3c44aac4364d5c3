//! Newtypes for app credentials, shop domains and callback URLs.
//!
//! These wrappers validate their contents on construction so that an invalid
//! key, token, or domain is rejected before any request is built.

use std::fmt;

use url::Url;

use crate::error::ConfigError;

/// A validated Shopify API key (the app's client id).
///
/// # Example
///
/// ```rust
/// use shopify_client::ApiKey;
///
/// let key = ApiKey::new("0f1e2d3c").unwrap();
/// assert_eq!(key.as_ref(), "0f1e2d3c");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a non-empty API key.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyApiKey`] when `key` is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Shopify API secret.
///
/// The `Debug` implementation masks the value so secrets never end up in logs.
///
/// ```rust
/// use shopify_client::ApiSecretKey;
///
/// let secret = ApiSecretKey::new("shpss_abc").unwrap();
/// assert_eq!(format!("{secret:?}"), "ApiSecretKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSecretKey(String);

impl ApiSecretKey {
    /// Wraps a non-empty shared secret.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyApiSecretKey`] when `key` is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiSecretKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiSecretKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecretKey(*****)")
    }
}

/// A permanent per-shop access token.
///
/// Masked in `Debug` output like [`ApiSecretKey`].
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// The `*.myshopify.com` host of a shop.
///
/// Short names are normalized to the full `shop-name.myshopify.com` form.
///
/// ```rust
/// use shopify_client::ShopDomain;
///
/// let domain = ShopDomain::new("Burnsmod").unwrap();
/// assert_eq!(domain.as_ref(), "burnsmod.myshopify.com");
/// assert_eq!(domain.shop_name(), "burnsmod");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShopDomain {
    full_domain: String,
    shop_name_end: usize,
}

impl ShopDomain {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Parses and lowercases a shop name or full `myshopify.com` domain.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidShopDomain`] for foreign domains and for names
    /// with characters outside `[a-z0-9-]`.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into().trim().to_lowercase();

        let (shop_name, full_domain) = match domain.strip_suffix(Self::SUFFIX) {
            Some(shop_name) => (shop_name.to_string(), domain.clone()),
            None if domain.contains('.') => {
                return Err(ConfigError::InvalidShopDomain { domain });
            }
            None => (domain.clone(), format!("{domain}{}", Self::SUFFIX)),
        };

        if !Self::is_shop_handle(&shop_name) {
            return Err(ConfigError::InvalidShopDomain {
                domain: full_domain,
            });
        }

        Ok(Self {
            shop_name_end: shop_name.len(),
            full_domain,
        })
    }

    /// The part before `.myshopify.com`.
    #[must_use]
    pub fn shop_name(&self) -> &str {
        &self.full_domain[..self.shop_name_end]
    }

    // lowercase alphanumerics and inner hyphens
    fn is_shop_handle(name: &str) -> bool {
        !name.is_empty()
            && !name.starts_with('-')
            && !name.ends_with('-')
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.full_domain
    }
}

impl fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_domain)
    }
}

/// A validated absolute URL, used for the OAuth redirect URI and for the
/// `api_host` override.
///
/// The original string is preserved verbatim, so `http://localhost:4000`
/// does not gain a trailing slash when it is embedded in a query string.
///
/// ```rust
/// use shopify_client::HostUrl;
///
/// let url = HostUrl::new("http://localhost:4000").unwrap();
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.origin(), "http://localhost:4000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    raw: String,
    parsed: Url,
}

impl HostUrl {
    /// Parses an absolute URL, keeping the input text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the value is not an absolute
    /// URL with a host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into().trim().to_string();
        let parsed = Url::parse(&raw).map_err(|_| ConfigError::InvalidHostUrl { url: raw.clone() })?;
        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(ConfigError::InvalidHostUrl { url: raw });
        }
        Ok(Self { raw, parsed })
    }

    /// Returns the URL scheme (e.g. `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.parsed.scheme()
    }

    /// Returns the host name.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.parsed.host_str()
    }

    /// Returns `scheme://host[:port]` without a trailing slash.
    #[must_use]
    pub fn origin(&self) -> String {
        self.parsed.origin().ascii_serialization()
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_key_is_rejected() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn debug_output_hides_secrets() {
        let secret = ApiSecretKey::new("shpss_0123").unwrap();
        assert_eq!(format!("{secret:?}"), "ApiSecretKey(*****)");

        let token = AccessToken::new("shpat_123").unwrap();
        assert_eq!(format!("{token:?}"), "AccessToken(*****)");
    }

    #[test]
    fn empty_access_token_is_rejected() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn bare_shop_name_gains_myshopify_suffix() {
        let domain = ShopDomain::new("burnsmod").unwrap();
        assert_eq!(domain.as_ref(), "burnsmod.myshopify.com");
        assert_eq!(domain.shop_name(), "burnsmod");
        assert_eq!(domain.to_string(), "burnsmod.myshopify.com");
    }

    #[test]
    fn full_domain_is_lowercased() {
        let domain = ShopDomain::new("Demo-3.myshopify.com").unwrap();
        assert_eq!(domain.as_ref(), "demo-3.myshopify.com");
        assert_eq!(domain.shop_name(), "demo-3");
    }

    #[test]
    fn malformed_shop_domains_are_rejected() {
        for input in [
            "",
            "burns mod",
            "burns_mod",
            "-burnsmod",
            "burnsmod-",
            "burnsmod.example.com",
            ".myshopify.com",
        ] {
            assert!(
                matches!(ShopDomain::new(input), Err(ConfigError::InvalidShopDomain { .. })),
                "{input:?} was accepted"
            );
        }
    }

    #[test]
    fn host_url_keeps_input_text_and_origin() {
        let url = HostUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
        assert_eq!(url.origin(), "http://127.0.0.1:8080");
        assert_eq!(url.host_name(), Some("127.0.0.1"));

        let url = HostUrl::new("https://app.example.org/shopify/callback").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.origin(), "https://app.example.org");
    }

    #[test]
    fn relative_or_hostless_urls_are_rejected() {
        assert!(HostUrl::new("app.example.org").is_err());
        assert!(HostUrl::new("https://").is_err());
        assert!(HostUrl::new("/auth/callback").is_err());
    }
}
