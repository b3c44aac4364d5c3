//! Page resource implementation.
//!
//! Pages hold static storefront content like "About Us" or "Contact".
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_client::rest::RestResource;
//! use shopify_client::rest::resources::{Page, PageListParams};
//!
//! let params = PageListParams {
//!     published_status: Some("published".to_string()),
//!     ..Default::default()
//! };
//! let pages = Page::all(&client, Some(params)).await?;
//!
//! let about = Page {
//!     title: Some("About Us".to_string()),
//!     body_html: Some("<p>Welcome to our store!</p>".to_string()),
//!     ..Default::default()
//! };
//! let saved = about.save(&client).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rest::RestResource;

/// A static page in a Shopify store.
///
/// # Fields
///
/// ## Read-Only Fields
/// - `id`, `shop_id`, `created_at`, `updated_at`
///
/// ## Writable Fields
/// - `title`, `handle`, `body_html`, `author`, `template_suffix`,
///   `published_at`
/// - `metafield` - Sent only when creating a page
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Page {
    /// The unique identifier of the page.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The ID of the shop the page belongs to.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub shop_id: Option<u64>,

    /// The title of the page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The URL-friendly handle of the page.
    /// Auto-generated from the title if not specified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// The HTML content of the page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    /// The author of the page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// The suffix of the Liquid template used for the page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,

    /// When the page was or will be published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// A metafield to attach to the page on creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafield: Option<Value>,

    /// When the page was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the page was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Page {
    type Id = u64;
    type AllParams = PageListParams;
    type CountParams = PageCountParams;

    const NAME: &'static str = "Page";
    const KEY: &'static str = "page";
    const PLURAL: &'static str = "pages";

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Parameters for listing pages.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PageListParams {
    /// Filter by page title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Filter by page handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Filter by published status.
    /// Valid values: `published`, `unpublished`, `any`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<String>,

    /// Show pages created after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Show pages updated after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Maximum number of results to return (default: 50, max: 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Return pages after this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Parameters for counting pages.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PageCountParams {
    /// Filter by page title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Filter by published status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<String>,
}
