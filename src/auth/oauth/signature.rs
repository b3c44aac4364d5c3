//! Signature verification for requests Shopify sends to the app.
//!
//! Shopify signs OAuth callbacks, embedded-app loads and app-proxy requests
//! by adding a signature to the query string. All three schemes sign the same
//! canonical string: every other parameter, sorted by key, first value per
//! key, joined as `key=value` with `&`.
//!
//! | Scheme    | Parameter   | Digest                              |
//! |-----------|-------------|-------------------------------------|
//! | OAuth     | `hmac`      | HMAC-SHA256(secret, canonical), hex |
//! | Legacy    | `signature` | MD5(secret + canonical), hex        |
//! | App proxy | `signature` | HMAC-SHA256(secret, canonical), hex |
//!
//! # Security
//!
//! All digest comparisons use constant-time comparison to prevent timing
//! attacks. Verification falls back to `old_api_secret_key` when one is
//! configured, so a secret can be rotated without rejecting in-flight
//! requests.
//!
//! # Example
//!
//! ```rust
//! use shopify_client::auth::oauth::Signer;
//! use url::Url;
//!
//! let signer = Signer::from_secret("1234", false);
//! let url = Url::parse(
//!     "https://app.example.com/auth?code=asdf&shop=burnsmod.myshopify.com&timestamp=1337178173\
//!      &hmac=89f3e7c84239719b8f5dc2c7bf743e884d7dc49c9de2847d3e3c38d1b4ad7b93",
//! )
//! .unwrap();
//!
//! assert!(signer.verify_hmac_signature(&url));
//! ```

use std::collections::BTreeMap;

use hmac::{Hmac, Mac};
use md5::{Digest, Md5};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use url::Url;

use crate::config::ShopifyConfig;

type HmacSha256 = Hmac<Sha256>;

/// Query parameter carrying the OAuth HMAC.
pub const HMAC_PARAM: &str = "hmac";
/// Query parameter carrying the legacy or app-proxy signature.
pub const SIGNATURE_PARAM: &str = "signature";

/// Computes an HMAC-SHA256 signature, returned as lowercase hex.
///
/// # Example
///
/// ```rust
/// use shopify_client::auth::oauth::compute_signature;
///
/// let sig = compute_signature("message", "key");
/// assert_eq!(sig, "6e9ef29b75fffc5b7abae527d58fdadb2fe42e7219011976917343065f58ed4a");
/// ```
#[must_use]
pub fn compute_signature(message: &str, secret: &str) -> String {
    // HMAC accepts keys of any length
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return String::new();
    };
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Computes the legacy MD5 signature of `secret + message`, as lowercase hex.
#[must_use]
pub fn compute_legacy_signature(message: &str, secret: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(secret.as_bytes());
    hasher.update(message.as_bytes());
    hex::encode(hasher.finalize())
}

/// Performs constant-time comparison of two strings.
#[must_use]
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    // ConstantTimeEq handles different lengths securely
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Returns the canonical signing string for a URL's query.
///
/// ```rust
/// use shopify_client::auth::oauth::canonical_query;
/// use url::Url;
///
/// let url = Url::parse("https://x.test/?timestamp=1&shop=a&hmac=zz&code=c").unwrap();
/// assert_eq!(canonical_query(&url), "code=c&shop=a&timestamp=1");
/// ```
#[must_use]
pub fn canonical_query(url: &Url) -> String {
    SignatureInput::from_url(url).canonical()
}

/// Decoded query parameters, first value per key, ordered by key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignatureInput {
    params: BTreeMap<String, String>,
}

impl SignatureInput {
    /// Collects the query parameters of `url`.
    #[must_use]
    pub fn from_url(url: &Url) -> Self {
        Self::from_pairs(url.query_pairs())
    }

    /// Collects already-decoded `(key, value)` pairs.
    ///
    /// When a key repeats, the first value wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = BTreeMap::new();
        for (key, value) in pairs {
            params.entry(key.into()).or_insert_with(|| value.into());
        }
        Self { params }
    }

    /// Returns the value of a parameter.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Joins every parameter except `hmac` and `signature` as `k=v&k=v`.
    #[must_use]
    pub fn canonical(&self) -> String {
        self.params
            .iter()
            .filter(|(key, _)| key.as_str() != HMAC_PARAM && key.as_str() != SIGNATURE_PARAM)
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Verifies signed requests from Shopify with the app's secret.
///
/// When `ignore_signature` is set every check passes. Only use that in
/// trusted or test environments.
#[derive(Clone)]
pub struct Signer {
    secret: String,
    old_secret: Option<String>,
    ignore_signature: bool,
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("secret", &"*****")
            .field("has_old_secret", &self.old_secret.is_some())
            .field("ignore_signature", &self.ignore_signature)
            .finish()
    }
}

impl Signer {
    /// Creates a signer from the configured secret(s) and `ignore_signature`.
    #[must_use]
    pub fn new(config: &ShopifyConfig) -> Self {
        Self {
            secret: config.api_secret_key().as_ref().to_string(),
            old_secret: config
                .old_api_secret_key()
                .map(|key| key.as_ref().to_string()),
            ignore_signature: config.ignore_signature(),
        }
    }

    /// Creates a signer from a bare secret.
    #[must_use]
    pub fn from_secret(secret: impl Into<String>, ignore_signature: bool) -> Self {
        Self {
            secret: secret.into(),
            old_secret: None,
            ignore_signature,
        }
    }

    /// Returns the canonical string, optionally prefixed with the secret as
    /// the legacy scheme signs it.
    #[must_use]
    pub fn signature_string(&self, input: &SignatureInput, prepend_secret: bool) -> String {
        let canonical = input.canonical();
        if prepend_secret {
            format!("{}{canonical}", self.secret)
        } else {
            canonical
        }
    }

    /// Verifies the `hmac` parameter of an OAuth callback URL.
    ///
    /// The parameter must be the lowercase hex digest Shopify sends; the
    /// comparison is case-sensitive, so an upper-cased value is rejected.
    #[must_use]
    pub fn verify_hmac_signature(&self, url: &Url) -> bool {
        self.verify_hmac_params(&SignatureInput::from_url(url))
    }

    /// Verifies the legacy MD5 `signature` parameter of a URL.
    ///
    /// The whole parameter value is compared with the computed digest, case
    /// included.
    #[must_use]
    pub fn verify_admin_signature(&self, url: &Url) -> bool {
        self.verify_admin_params(&SignatureInput::from_url(url))
    }

    /// Verifies the `signature` parameter of an app-proxy request URL.
    #[must_use]
    pub fn verify_app_proxy_signature(&self, url: &Url) -> bool {
        self.verify_app_proxy_params(&SignatureInput::from_url(url))
    }

    /// [`verify_hmac_signature`](Self::verify_hmac_signature) for parameters
    /// a web framework has already parsed.
    #[must_use]
    pub fn verify_hmac_params(&self, input: &SignatureInput) -> bool {
        self.verify(input, HMAC_PARAM, compute_signature)
    }

    /// [`verify_admin_signature`](Self::verify_admin_signature) for parsed
    /// parameters.
    #[must_use]
    pub fn verify_admin_params(&self, input: &SignatureInput) -> bool {
        self.verify(input, SIGNATURE_PARAM, compute_legacy_signature)
    }

    /// [`verify_app_proxy_signature`](Self::verify_app_proxy_signature) for
    /// parsed parameters.
    #[must_use]
    pub fn verify_app_proxy_params(&self, input: &SignatureInput) -> bool {
        self.verify(input, SIGNATURE_PARAM, compute_signature)
    }

    fn verify(&self, input: &SignatureInput, param: &str, digest: fn(&str, &str) -> String) -> bool {
        if self.ignore_signature {
            return true;
        }

        let Some(received) = input.get(param).filter(|value| !value.is_empty()) else {
            return false;
        };
        let canonical = input.canonical();

        if constant_time_compare(&digest(&canonical, &self.secret), received) {
            return true;
        }

        // Fall back to old secret key if configured
        self.old_secret
            .as_deref()
            .is_some_and(|old| constant_time_compare(&digest(&canonical, old), received))
    }
}
