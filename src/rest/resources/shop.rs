//! Shop resource implementation.
//!
//! The shop is a read-only singleton: there is exactly one per credential,
//! fetched with [`Shop::current`]. It has no ID-based CRUD.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_client::rest::resources::Shop;
//!
//! let shop = Shop::current(&client).await?;
//! println!("Shop: {}", shop.name.as_deref().unwrap_or(""));
//! println!("Plan: {}", shop.plan_name.as_deref().unwrap_or(""));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::resource::decode_keyed;
use crate::rest::ResourceError;

/// The shop the client's credentials belong to.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Shop {
    /// The unique identifier of the shop.
    pub id: Option<u64>,

    /// The name of the shop.
    pub name: Option<String>,

    /// The contact email of the shop owner.
    pub email: Option<String>,

    /// The email customers see in notifications.
    pub customer_email: Option<String>,

    /// The primary domain of the shop.
    pub domain: Option<String>,

    /// The `.myshopify.com` domain of the shop.
    pub myshopify_domain: Option<String>,

    /// The name of the shop owner.
    pub shop_owner: Option<String>,

    /// The internal name of the shop's plan.
    pub plan_name: Option<String>,

    /// The display name of the shop's plan.
    pub plan_display_name: Option<String>,

    /// Whether the storefront is password protected.
    pub password_enabled: Option<bool>,

    /// The first line of the shop's address.
    pub address1: Option<String>,

    /// The second line of the shop's address.
    pub address2: Option<String>,

    /// The city of the shop.
    pub city: Option<String>,

    /// The province or state of the shop.
    pub province: Option<String>,

    /// The two-letter province code.
    pub province_code: Option<String>,

    /// The country of the shop.
    pub country: Option<String>,

    /// The two-letter ISO country code.
    pub country_code: Option<String>,

    /// The full name of the country.
    pub country_name: Option<String>,

    /// The postal code of the shop.
    pub zip: Option<String>,

    /// The contact phone number.
    pub phone: Option<String>,

    /// The latitude of the shop's location.
    pub latitude: Option<f64>,

    /// The longitude of the shop's location.
    pub longitude: Option<f64>,

    /// The ID of the shop's primary location.
    pub primary_location_id: Option<u64>,

    /// The primary locale, e.g. "en".
    pub primary_locale: Option<String>,

    /// The three-letter currency code.
    pub currency: Option<String>,

    /// How prices are formatted, e.g. "${{amount}}".
    pub money_format: Option<String>,

    /// How prices are formatted with the currency, e.g. "${{amount}} USD".
    pub money_with_currency_format: Option<String>,

    /// The timezone name shown to the merchant.
    pub timezone: Option<String>,

    /// The IANA timezone, e.g. "America/New_York".
    pub iana_timezone: Option<String>,

    /// Whether prices include taxes.
    pub taxes_included: Option<bool>,

    /// Whether taxes are charged on shipping.
    pub tax_shipping: Option<bool>,

    /// Whether county taxes apply.
    pub county_taxes: Option<bool>,

    /// Whether the shop has any active discounts.
    pub has_discounts: Option<bool>,

    /// Whether the shop has any active gift cards.
    pub has_gift_cards: Option<bool>,

    /// Whether the shop has an online storefront.
    pub has_storefront: Option<bool>,

    /// Whether the shop can accept payments through Shopify Payments.
    pub eligible_for_payments: Option<bool>,

    /// Whether the shop must accept an extra payments agreement.
    pub requires_extra_payments_agreement: Option<bool>,

    /// Whether the shop still has setup steps to complete.
    pub setup_required: Option<bool>,

    /// Whether the storefront is served over SSL only.
    pub force_ssl: Option<bool>,

    /// The default weight unit.
    pub weight_unit: Option<String>,

    /// The channel the shop was created through.
    pub source: Option<String>,

    /// When the shop was created.
    pub created_at: Option<DateTime<Utc>>,

    /// When the shop was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Shop {
    /// Retrieves the current shop from `/admin/shop.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request fails and
    /// [`ResourceError::Decode`] if the body holds no `shop`.
    pub async fn current(client: &RestClient) -> Result<Self, ResourceError> {
        let response = client
            .get("shop", None)
            .await
            .map_err(|e| ResourceError::from_http(e, "Shop", None))?;

        decode_keyed(&response, "shop", "Shop")
    }
}
