//! REST resources for the Shopify Admin API.
//!
//! This module provides:
//!
//! - **[`RestResource`] trait**: `find`, `all`, `count`, `save` and
//!   `delete` over a [`RestClient`](crate::RestClient)
//! - **[`ResourceError`]**: what those operations fail with
//! - **[`resources`]**: the concrete resources (Product, Page, Theme, ...)
//!
//! Resources are plain serde structs. They hold no reference to the client
//! that loaded them, and saving returns a new value rather than mutating the
//! old one.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_client::{Credentials, RestClient, ShopDomain};
//! use shopify_client::rest::RestResource;
//! use shopify_client::rest::resources::Product;
//!
//! let shop = ShopDomain::new("my-store")?;
//! let client = RestClient::new(Credentials::with_access_token(shop, "token")?, None);
//!
//! // Find a single product
//! let product = Product::find(&client, 123).await?;
//!
//! // Rename it; the returned value is the shop's copy
//! let renamed = Product { title: Some("Renamed".to_string()), ..product };
//! let saved = renamed.save(&client).await?;
//!
//! // Count and delete
//! let count = Product::count(&client, None).await?;
//! saved.delete(&client).await?;
//! ```

mod errors;
mod resource;

pub mod resources;

pub use errors::ResourceError;
pub use resource::RestResource;
