//! Product resource implementation.
//!
//! A product is the good or service a merchant sells. Its variants and
//! options travel embedded in the product body, so they are plain structs
//! here rather than resources of their own.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_client::rest::RestResource;
//! use shopify_client::rest::resources::{Product, ProductListParams};
//!
//! // Find a single product
//! let product = Product::find(&client, 123).await?;
//! println!("Product: {}", product.title.as_deref().unwrap_or(""));
//!
//! // List products with filters
//! let params = ProductListParams {
//!     vendor: Some("Burton".to_string()),
//!     limit: Some(50),
//!     ..Default::default()
//! };
//! let products = Product::all(&client, Some(params)).await?;
//!
//! // Create a new product
//! let draft = Product {
//!     title: Some("My New Product".to_string()),
//!     vendor: Some("My Store".to_string()),
//!     ..Default::default()
//! };
//! let saved = draft.save(&client).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::RestResource;

/// A product in a Shopify store.
///
/// # Fields
///
/// ## Read-Only Fields
/// - `id`, `handle`, `created_at`, `updated_at`
///
/// ## Nested Data
/// - `variants` - The purchasable versions of the product
/// - `options` - The option names variants are built from (e.g. Size)
/// - `images` - The product's images
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    /// The unique identifier of the product.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The name of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The description of the product in HTML format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    /// The name of the product's vendor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// A categorization for the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// The URL-friendly name of the product.
    /// Read-only field - generated from the title.
    #[serde(skip_serializing)]
    pub handle: Option<String>,

    /// When the product was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the product was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// When the product was published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// Where the product is published.
    /// Valid values: "web", "global".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,

    /// A comma-separated list of tags for the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    /// The suffix of the Liquid template used for the product page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,

    /// The variants of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<Variant>>,

    /// The options of the product (e.g., Size, Color).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ProductOption>>,

    /// All images associated with the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ProductImage>>,
}

impl RestResource for Product {
    type Id = u64;
    type AllParams = ProductListParams;
    type CountParams = ProductCountParams;

    const NAME: &'static str = "Product";
    const KEY: &'static str = "product";
    const PLURAL: &'static str = "products";

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// A variant embedded within a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Variant {
    /// The unique identifier of the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The ID of the product this variant belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The title of the variant, built from its option values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The price of the variant, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// The original price of the variant for comparison.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<String>,

    /// The stock keeping unit (SKU) of the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// The barcode, UPC, or ISBN number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    /// The position of the variant in the product's variant list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    /// The weight in grams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grams: Option<i64>,

    /// The weight in `weight_unit`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// The unit of `weight`: "g", "kg", "oz" or "lb".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<String>,

    /// The fulfillment service handling this variant ("manual" by default).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_service: Option<String>,

    /// Whether inventory is tracked ("shopify") or not (absent).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_management: Option<String>,

    /// Whether orders are allowed when out of stock: "deny" or "continue".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_policy: Option<String>,

    /// The inventory quantity of the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_quantity: Option<i64>,

    /// The inventory quantity before the last change.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub old_inventory_quantity: Option<i64>,

    /// The value of the first option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option1: Option<String>,

    /// The value of the second option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option2: Option<String>,

    /// The value of the third option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option3: Option<String>,

    /// Whether a shipping address is needed at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,

    /// Whether taxes are charged for this variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,

    /// The ID of the image associated with this variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<u64>,

    /// When the variant was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the variant was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A product option, such as "Size" or "Color".
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductOption {
    /// The unique identifier of the option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The ID of the product this option belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The name of the option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The 1-based position of the option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    /// The values variants may take for this option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

/// An image attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductImage {
    /// The unique identifier of the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The ID of the product this image belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The position of the image in the product's image list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    /// The URL of the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Alternative text for the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// The IDs of the variants using this image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_ids: Option<Vec<u64>>,
}

/// Parameters for listing products.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductListParams {
    /// Return only products with the given IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,

    /// Maximum number of results to return (default: 50, max: 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// The page of results to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Return products after this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Filter by product title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Filter by product vendor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// Filter by product handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Filter by product type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// Filter by collection ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,

    /// Show products created after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Show products created before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Show products updated after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Show products updated before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    /// Show products published after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_min: Option<DateTime<Utc>>,

    /// Show products published before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_max: Option<DateTime<Utc>>,

    /// Filter by published status.
    /// Valid values: "published", "unpublished", "any".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<String>,

    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Parameters for counting products.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductCountParams {
    /// Filter by product vendor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// Filter by product type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// Filter by collection ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,

    /// Show products created after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Show products created before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Show products updated after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Show products updated before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    /// Show products published after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_min: Option<DateTime<Utc>>,

    /// Show products published before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_max: Option<DateTime<Utc>>,

    /// Filter by published status.
    /// Valid values: "published", "unpublished", "any".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resource::serialize_to_query;

    #[test]
    fn test_product_serialization_skips_read_only_fields() {
        let product = Product {
            id: Some(632_910_392),
            title: Some("IPod Nano - 8GB".to_string()),
            vendor: Some("Apple".to_string()),
            handle: Some("ipod-nano".to_string()),
            created_at: Some(
                DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
                    .unwrap()
                    .with_timezone(&Utc),
            ),
            ..Default::default()
        };

        let json: serde_json::Value = serde_json::to_value(&product).unwrap();

        assert_eq!(json["title"], "IPod Nano - 8GB");
        assert_eq!(json["vendor"], "Apple");
        assert!(json.get("id").is_none());
        assert!(json.get("handle").is_none());
        assert!(json.get("created_at").is_none());
        assert!(json.get("body_html").is_none());
    }

    #[test]
    fn test_product_deserialization_with_variants_and_options() {
        let json = r#"{
            "id": 632910392,
            "title": "IPod Nano - 8GB",
            "handle": "ipod-nano",
            "created_at": "2024-01-15T10:30:00-05:00",
            "variants": [
                {
                    "id": 808950810,
                    "product_id": 632910392,
                    "title": "Pink",
                    "price": "199.00",
                    "sku": "IPOD2008PINK",
                    "grams": 567,
                    "weight": 1.25,
                    "weight_unit": "lb",
                    "inventory_quantity": 10,
                    "old_inventory_quantity": 10,
                    "option1": "Pink",
                    "requires_shipping": true,
                    "taxable": true
                }
            ],
            "options": [
                {"id": 594680422, "product_id": 632910392, "name": "Color", "position": 1, "values": ["Pink"]}
            ],
            "images": [
                {"id": 850703190, "product_id": 632910392, "position": 1, "src": "https://cdn.example.com/ipod.png", "variant_ids": [808950810]}
            ]
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, Some(632_910_392));
        assert_eq!(product.handle.as_deref(), Some("ipod-nano"));
        assert!(product.created_at.is_some());

        let variants = product.variants.unwrap();
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].price.as_deref(), Some("199.00"));
        assert_eq!(variants[0].weight, Some(1.25));
        assert_eq!(variants[0].old_inventory_quantity, Some(10));
        assert_eq!(variants[0].requires_shipping, Some(true));

        let options = product.options.unwrap();
        assert_eq!(options[0].name.as_deref(), Some("Color"));
        assert_eq!(options[0].values, Some(vec!["Pink".to_string()]));

        let images = product.images.unwrap();
        assert_eq!(images[0].variant_ids, Some(vec![808_950_810]));
    }

    #[test]
    fn test_variant_keeps_id_when_nested_in_update() {
        let variant = Variant {
            id: Some(808_950_810),
            price: Some("10.00".to_string()),
            old_inventory_quantity: Some(3),
            ..Default::default()
        };

        let json = serde_json::to_value(&variant).unwrap();

        assert_eq!(json["id"], 808_950_810);
        assert_eq!(json["price"], "10.00");
        assert!(json.get("old_inventory_quantity").is_none());
    }

    #[test]
    fn test_product_list_params_to_query() {
        let params = ProductListParams {
            ids: Some(vec![1, 2]),
            limit: Some(50),
            vendor: Some("Apple".to_string()),
            created_at_min: Some(
                DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
                    .unwrap()
                    .with_timezone(&Utc),
            ),
            ..Default::default()
        };

        let query = serialize_to_query(&params, Product::NAME).unwrap();

        assert_eq!(query.get("ids").map(String::as_str), Some("1,2"));
        assert_eq!(query.get("limit").map(String::as_str), Some("50"));
        assert_eq!(query.get("vendor").map(String::as_str), Some("Apple"));
        assert_eq!(
            query.get("created_at_min").map(String::as_str),
            Some("2024-01-01T00:00:00Z")
        );
        assert!(!query.contains_key("page"));
    }

    #[test]
    fn test_product_count_params_to_query() {
        let params = ProductCountParams {
            published_status: Some("published".to_string()),
            ..Default::default()
        };

        let query = serialize_to_query(&params, Product::NAME).unwrap();

        assert_eq!(query.len(), 1);
        assert_eq!(query["published_status"], "published");
    }

    #[test]
    fn test_product_paths() {
        assert_eq!(Product::collection_path(), "products");
        assert_eq!(Product::member_path(&632_910_392), "products/632910392");
        assert_eq!(Product::default().id(), None);
    }
}
