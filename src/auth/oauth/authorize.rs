//! Authorization URL for the OAuth install flow.

use url::form_urlencoded;

use crate::auth::oauth::OAuthError;
use crate::config::{ShopDomain, ShopifyConfig};

/// Builds the URL the merchant is sent to in order to approve the app.
///
/// The query holds `client_id`, `redirect_uri` and `scope`, in key order and
/// form-encoded. The URL always points at the shop itself, even when
/// `api_host` is configured, since the merchant's browser opens it.
///
/// # Errors
///
/// Returns [`OAuthError::MissingRedirectUri`] when the configuration has no
/// redirect URI.
///
/// # Example
///
/// ```rust
/// use shopify_client::{ApiKey, ApiSecretKey, HostUrl, ShopDomain, ShopifyConfig};
/// use shopify_client::auth::oauth::authorize_url;
///
/// let config = ShopifyConfig::builder()
///     .api_key(ApiKey::new("asdf").unwrap())
///     .api_secret_key(ApiSecretKey::new("1234").unwrap())
///     .redirect_uri(HostUrl::new("http://localhost:4000").unwrap())
///     .build()
///     .unwrap();
/// let shop = ShopDomain::new("burnsmod.myshopify.com").unwrap();
///
/// assert_eq!(
///     authorize_url(&config, &shop, "read_orders").unwrap(),
///     "https://burnsmod.myshopify.com/admin/oauth/authorize?client_id=asdf&redirect_uri=http%3A%2F%2Flocalhost%3A4000&scope=read_orders",
/// );
/// ```
pub fn authorize_url(
    config: &ShopifyConfig,
    shop: &ShopDomain,
    scopes: &str,
) -> Result<String, OAuthError> {
    let redirect_uri = config.redirect_uri().ok_or(OAuthError::MissingRedirectUri)?;

    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("client_id", config.api_key().as_ref())
        .append_pair("redirect_uri", redirect_uri.as_ref())
        .append_pair("scope", scopes)
        .finish();

    Ok(format!("https://{shop}/admin/oauth/authorize?{query}"))
}
