//! Shop credentials used to authenticate API requests.

use crate::config::{AccessToken, ApiKey, ApiSecretKey, ShopDomain};
use crate::error::ConfigError;

/// Environment variable holding the shop domain.
pub const SHOP_ENV: &str = "SHOPIFY_API_SHOP";
/// Environment variable holding a permanent access token.
pub const ACCESS_TOKEN_ENV: &str = "SHOPIFY_API_PERM_TOKEN";
/// Environment variable holding a private-app API key.
pub const API_KEY_ENV: &str = "SHOPIFY_API_TOKEN";
/// Environment variable holding a private-app password.
pub const PASSWORD_ENV: &str = "SHOPIFY_API_SECRET";

/// How requests are authenticated.
#[derive(Clone, Debug)]
pub enum AuthMode {
    /// Sent in the `X-Shopify-Access-Token` header.
    AccessToken(AccessToken),
    /// HTTP Basic auth with a private app's key and password.
    Basic {
        /// The app's API key (the Basic auth user name).
        api_key: ApiKey,
        /// The app's password.
        password: ApiSecretKey,
    },
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// A shop plus the credentials for it.
///
/// # Example
///
/// ```rust
/// use shopify_client::{AuthMode, Credentials, ShopDomain};
///
/// let credentials = Credentials::from_parts(
///     ShopDomain::new("my-store").unwrap(),
///     Some("shpat_token"),
///     Some("key"),
///     Some("password"),
/// )
/// .unwrap();
///
/// // a permanent token wins over a key/password pair
/// assert!(matches!(credentials.auth, AuthMode::AccessToken(_)));
/// ```
#[derive(Clone, Debug)]
pub struct Credentials {
    /// The shop requests go to.
    pub shop: ShopDomain,
    /// The active authentication mode.
    pub auth: AuthMode,
}

impl Credentials {
    /// Credentials using a permanent access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if `token` is empty.
    pub fn with_access_token(
        shop: ShopDomain,
        token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            shop,
            auth: AuthMode::AccessToken(AccessToken::new(token)?),
        })
    }

    /// Credentials using HTTP Basic auth.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either value is empty.
    pub fn with_api_key(
        shop: ShopDomain,
        api_key: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            shop,
            auth: AuthMode::Basic {
                api_key: ApiKey::new(api_key)?,
                password: ApiSecretKey::new(password)?,
            },
        })
    }

    /// Picks an auth mode from optional parts.
    ///
    /// A non-empty access token takes precedence; otherwise both `api_key`
    /// and `password` must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] if neither mode is usable.
    pub fn from_parts(
        shop: ShopDomain,
        access_token: Option<&str>,
        api_key: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if let Some(token) = present(access_token) {
            return Self::with_access_token(shop, token);
        }
        match (present(api_key), present(password)) {
            (Some(key), Some(password)) => Self::with_api_key(shop, key, password),
            _ => Err(ConfigError::MissingCredentials),
        }
    }

    /// Reads credentials through `lookup`, using the `SHOPIFY_API_*` names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] when no shop is set, a
    /// [`ConfigError::InvalidShopDomain`] for a bad one, and
    /// [`ConfigError::MissingCredentials`] when no auth mode is usable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let shop = lookup(SHOP_ENV).ok_or(ConfigError::MissingRequiredField { field: SHOP_ENV })?;
        let access_token = lookup(ACCESS_TOKEN_ENV);
        let api_key = lookup(API_KEY_ENV);
        let password = lookup(PASSWORD_ENV);

        Self::from_parts(
            ShopDomain::new(shop)?,
            access_token.as_deref(),
            api_key.as_deref(),
            password.as_deref(),
        )
    }

    /// Reads credentials from the process environment.
    ///
    /// # Errors
    ///
    /// See [`from_lookup`](Self::from_lookup).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }
}
