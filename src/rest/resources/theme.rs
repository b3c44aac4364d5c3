//! Theme resource implementation.
//!
//! Themes define the look and feel of an online store. A store can have
//! several, but only the `main` one is published.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_client::rest::RestResource;
//! use shopify_client::rest::resources::{Theme, ThemeRole};
//!
//! let themes = Theme::all(&client, None).await?;
//! let main = themes.iter().find(|t| t.role == Some(ThemeRole::Main));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::RestResource;

/// The role of a theme in a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeRole {
    /// The main (published) theme visible to customers.
    Main,
    /// An unpublished theme.
    #[default]
    Unpublished,
    /// A demo theme from the theme store.
    Demo,
    /// A development theme for theme development.
    Development,
    /// A role this client does not know about.
    #[serde(other)]
    Unknown,
}

/// A theme in a Shopify store.
///
/// `previewable` and `processing` are status fields the shop maintains.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Theme {
    /// The unique identifier of the theme.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The name of the theme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The role of the theme in the store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<ThemeRole>,

    /// A URL to a zip archive to install the theme from, on creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// The theme store ID, if the theme came from the theme store.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub theme_store_id: Option<u64>,

    /// Whether the theme can be previewed.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub previewable: Option<bool>,

    /// Whether the theme is currently being processed.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub processing: Option<bool>,

    /// When the theme was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the theme was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Theme {
    type Id = u64;
    type AllParams = ThemeListParams;
    type CountParams = ();

    const NAME: &'static str = "Theme";
    const KEY: &'static str = "theme";
    const PLURAL: &'static str = "themes";

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Parameters for listing themes.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ThemeListParams {
    /// Filter by theme role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<ThemeRole>,

    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resource::serialize_to_query;

    #[test]
    fn test_theme_role_serialization() {
        assert_eq!(serde_json::to_string(&ThemeRole::Main).unwrap(), "\"main\"");
        assert_eq!(
            serde_json::to_string(&ThemeRole::Development).unwrap(),
            "\"development\""
        );

        let role: ThemeRole = serde_json::from_str("\"unpublished\"").unwrap();
        assert_eq!(role, ThemeRole::Unpublished);
    }

    #[test]
    fn test_unrecognized_role_deserializes_as_unknown() {
        let role: ThemeRole = serde_json::from_str("\"locked\"").unwrap();
        assert_eq!(role, ThemeRole::Unknown);
    }

    #[test]
    fn test_theme_deserialization() {
        let json = r#"{
            "id": 828155753,
            "name": "Comfort",
            "role": "main",
            "theme_store_id": null,
            "previewable": true,
            "processing": false,
            "created_at": "2024-01-10T08:00:00-05:00",
            "updated_at": "2024-06-20T15:45:00-05:00"
        }"#;

        let theme: Theme = serde_json::from_str(json).unwrap();

        assert_eq!(theme.id, Some(828_155_753));
        assert_eq!(theme.role, Some(ThemeRole::Main));
        assert_eq!(theme.previewable, Some(true));

        let body = serde_json::to_value(&theme).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Comfort", "role": "main"}));
    }

    #[test]
    fn test_theme_list_params_to_query() {
        let params = ThemeListParams {
            role: Some(ThemeRole::Main),
            ..Default::default()
        };
        let query = serialize_to_query(&params, Theme::NAME).unwrap();
        assert_eq!(query["role"], "main");
    }
}
