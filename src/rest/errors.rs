//! Resource-specific error types for REST API operations.
//!
//! The [`RestClient`](crate::clients::RestClient) already turns non-2xx
//! responses into [`HttpError::Response`]; this module gives a 404 on a
//! specific resource its own variant and adds the failure modes of the
//! resource layer itself.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_client::rest::{RestResource, ResourceError};
//!
//! match Product::find(&client, 123).await {
//!     Ok(product) => println!("Found: {:?}", product.title),
//!     Err(ResourceError::NotFound { resource, id }) => {
//!         println!("{resource} with id {id} not found");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource was not found (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The type name of the resource (e.g., "Product").
        resource: &'static str,
        /// The ID that was requested.
        id: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The resource could not be converted to or from JSON, or the response
    /// did not hold it.
    #[error("Invalid JSON for {resource}: {source}")]
    Decode {
        /// The type name of the resource.
        resource: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The operation needs a saved resource, but this one has no id.
    #[error("Cannot {operation} a {resource} that has no id")]
    MissingId {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "delete").
        operation: &'static str,
    },
}

impl ResourceError {
    /// Maps an HTTP error for `resource`, turning a 404 into [`Self::NotFound`].
    #[must_use]
    pub fn from_http(error: HttpError, resource: &'static str, id: Option<&str>) -> Self {
        match error {
            HttpError::Response(ref response) if response.code == 404 => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
            },
            other => Self::Http(other),
        }
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Http(HttpError::Response(e)) => e.error_reference.as_deref(),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
