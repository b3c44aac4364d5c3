//! Asset resource implementation.
//!
//! Assets are the files that make up a theme: Liquid templates, stylesheets,
//! images and settings. They are scoped to a theme and addressed by `key`
//! (their path within the theme) rather than by numeric ID, so `Asset` has
//! its own theme-scoped operations instead of implementing
//! [`RestResource`](crate::rest::RestResource).
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_client::rest::resources::Asset;
//!
//! let assets = Asset::all(&client, 828155753).await?;
//!
//! let mut layout = Asset::find(&client, 828155753, "layout/theme.liquid").await?;
//! layout.value = Some("<html>...</html>".to_string());
//! let saved = layout.save(&client, 828155753).await?;
//!
//! Asset::delete(&client, 828155753, "assets/old.css").await?;
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::resource::{decode_keyed, wrap_body};
use crate::rest::ResourceError;

/// Query parameter selecting a single asset.
pub const ASSET_KEY_PARAM: &str = "asset[key]";

/// A file within a theme.
///
/// Content is carried in exactly one of `value` (text), `attachment`
/// (base64-encoded binary), `src` (a URL to fetch from) or `source_key` (an
/// existing asset to copy).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Asset {
    /// The path to the asset within the theme, e.g. `templates/index.liquid`.
    pub key: String,

    /// The text content of the asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// The base64-encoded binary content of the asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,

    /// A URL the shop downloads the asset content from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// The key of an existing asset to copy content from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_key: Option<String>,

    /// The public CDN URL for the asset.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub public_url: Option<String>,

    /// The MIME type of the asset.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub content_type: Option<String>,

    /// The size of the asset in bytes.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub size: Option<i64>,

    /// The MD5 checksum of the asset content.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub checksum: Option<String>,

    /// The ID of the theme this asset belongs to.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub theme_id: Option<u64>,

    /// When the asset was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the asset was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Asset {
    const NAME: &'static str = "Asset";

    /// Path of a theme's asset collection, relative to `/admin`.
    #[must_use]
    pub fn collection_path(theme_id: u64) -> String {
        format!("themes/{theme_id}/assets")
    }

    /// Lists the assets of a theme. Listed assets carry metadata only, not
    /// their content.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the theme doesn't exist.
    pub async fn all(client: &RestClient, theme_id: u64) -> Result<Vec<Self>, ResourceError> {
        let theme = theme_id.to_string();
        let response = client
            .get(&Self::collection_path(theme_id), None)
            .await
            .map_err(|e| ResourceError::from_http(e, "Theme", Some(&theme)))?;

        decode_keyed(&response, "assets", Self::NAME)
    }

    /// Fetches a single asset, including its content.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no asset has this key.
    pub async fn find(client: &RestClient, theme_id: u64, key: &str) -> Result<Self, ResourceError> {
        let response = client
            .get(&Self::collection_path(theme_id), Some(key_query(theme_id, key)))
            .await
            .map_err(|e| ResourceError::from_http(e, Self::NAME, Some(key)))?;

        decode_keyed(&response, "asset", Self::NAME)
    }

    /// Creates or replaces the asset with this key. Assets are always written
    /// with PUT.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the shop rejects the asset.
    pub async fn save(&self, client: &RestClient, theme_id: u64) -> Result<Self, ResourceError> {
        let body = wrap_body("asset", self, Self::NAME)?;

        let response = client
            .put(&Self::collection_path(theme_id), body)
            .await
            .map_err(|e| ResourceError::from_http(e, Self::NAME, Some(&self.key)))?;

        decode_keyed(&response, "asset", Self::NAME)
    }

    /// Deletes the asset with this key.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no asset has this key. Assets a
    /// theme requires (such as `layout/theme.liquid`) cannot be deleted and
    /// fail with a 403 [`ResourceError::Http`].
    pub async fn delete(client: &RestClient, theme_id: u64, key: &str) -> Result<(), ResourceError> {
        client
            .delete(&Self::collection_path(theme_id), Some(key_query(theme_id, key)))
            .await
            .map_err(|e| ResourceError::from_http(e, Self::NAME, Some(key)))?;

        Ok(())
    }

    /// Returns whether this asset carries binary content.
    #[must_use]
    pub const fn is_binary(&self) -> bool {
        self.attachment.is_some()
    }
}

fn key_query(theme_id: u64, key: &str) -> BTreeMap<String, String> {
    let mut query = BTreeMap::new();
    query.insert(ASSET_KEY_PARAM.to_string(), key.to_string());
    query.insert("theme_id".to_string(), theme_id.to_string());
    query
}
