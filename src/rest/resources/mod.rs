//! Shopify REST resources.
//!
//! - [`Product`] with its embedded [`Variant`], [`ProductOption`] and
//!   [`ProductImage`]
//! - [`Page`]
//! - [`Theme`] and its theme-scoped [`Asset`]s
//! - [`Shop`], a read-only singleton
//! - [`RecurringApplicationCharge`]
//!
//! Resources with numeric IDs implement
//! [`RestResource`](crate::rest::RestResource); `Asset` and `Shop` have
//! their own operations.

mod asset;
mod page;
mod product;
mod recurring_application_charge;
mod shop;
mod theme;

pub use asset::{Asset, ASSET_KEY_PARAM};
pub use page::{Page, PageCountParams, PageListParams};
pub use product::{
    Product, ProductCountParams, ProductImage, ProductListParams, ProductOption, Variant,
};
pub use recurring_application_charge::{
    ChargeStatus, RecurringApplicationCharge, RecurringApplicationChargeListParams,
};
pub use shop::Shop;
pub use theme::{Theme, ThemeListParams, ThemeRole};
