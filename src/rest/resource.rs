//! REST Resource trait for CRUD operations.
//!
//! This module defines the [`RestResource`] trait, which provides a standardized
//! interface for Shopify REST resources. Resources that implement it gain
//! `find()`, `all()`, `count()`, `save()` and `delete()`.
//!
//! # Implementing a Resource
//!
//! 1. Define a struct with serde derives, `Option` fields and
//!    `skip_serializing_if = "Option::is_none"`
//! 2. Implement the `RestResource` trait with its constants
//! 3. The trait provides default implementations for CRUD operations
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_client::rest::RestResource;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Debug, Clone, Default, Serialize, Deserialize)]
//! pub struct Page {
//!     #[serde(skip_serializing)]
//!     pub id: Option<u64>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub title: Option<String>,
//! }
//!
//! impl RestResource for Page {
//!     type Id = u64;
//!     type AllParams = ();
//!     type CountParams = ();
//!
//!     const NAME: &'static str = "Page";
//!     const KEY: &'static str = "page";
//!     const PLURAL: &'static str = "pages";
//!
//!     fn id(&self) -> Option<Self::Id> {
//!         self.id
//!     }
//! }
//!
//! let page = Page::find(&client, 123).await?;
//! let pages = Page::all(&client, None).await?;
//! ```

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::{HttpResponse, RestClient};
use crate::rest::ResourceError;

/// A REST resource that can be fetched, created, updated, and deleted.
///
/// Saving never mutates the receiver: [`save`](Self::save) returns the
/// server's copy as a new value, and resources hold no reference to the
/// client that loaded them.
#[allow(async_fn_in_trait)]
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The type of the resource's identifier.
    type Id: Display + Clone + Send + Sync;

    /// Parameters for `all()` operations (filtering, pagination, etc.).
    ///
    /// Use `()` if no parameters are needed.
    type AllParams: Serialize + Default + Send + Sync;

    /// Parameters for `count()` operations.
    ///
    /// Use `()` if no parameters are needed.
    type CountParams: Serialize + Default + Send + Sync;

    /// The singular name of the resource (e.g., "Product"), for errors.
    const NAME: &'static str;

    /// The JSON key wrapping a single resource (e.g., "product").
    const KEY: &'static str;

    /// The plural name used in URL paths and list bodies (e.g., "products").
    const PLURAL: &'static str;

    /// Returns the resource's ID, or `None` if it has not been saved yet.
    fn id(&self) -> Option<Self::Id>;

    /// Path of the collection, relative to `/admin`.
    #[must_use]
    fn collection_path() -> String {
        Self::PLURAL.to_string()
    }

    /// Path of a single resource, relative to `/admin`.
    #[must_use]
    fn member_path(id: &Self::Id) -> String {
        format!("{}/{id}", Self::collection_path())
    }

    /// Finds a single resource by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let product = Product::find(&client, 123).await?;
    /// ```
    async fn find(client: &RestClient, id: Self::Id) -> Result<Self, ResourceError> {
        let id_str = id.to_string();
        let response = client
            .get(&Self::member_path(&id), None)
            .await
            .map_err(|e| ResourceError::from_http(e, Self::NAME, Some(&id_str)))?;

        decode_keyed(&response, Self::KEY, Self::NAME)
    }

    /// Lists resources matching the given parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for non-2xx responses.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// for product in Product::all(&client, None).await? {
    ///     println!("Product: {:?}", product.title);
    /// }
    /// ```
    async fn all(
        client: &RestClient,
        params: Option<Self::AllParams>,
    ) -> Result<Vec<Self>, ResourceError> {
        let query = params
            .map(|p| serialize_to_query(&p, Self::NAME))
            .transpose()?
            .filter(|q| !q.is_empty());

        let response = client
            .get(&Self::collection_path(), query)
            .await
            .map_err(|e| ResourceError::from_http(e, Self::NAME, None))?;

        decode_keyed(&response, Self::PLURAL, Self::NAME)
    }

    /// Counts resources matching the given parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if the body has no numeric `count`.
    async fn count(
        client: &RestClient,
        params: Option<Self::CountParams>,
    ) -> Result<u64, ResourceError> {
        let query = params
            .map(|p| serialize_to_query(&p, Self::NAME))
            .transpose()?
            .filter(|q| !q.is_empty());

        let response = client
            .get(&format!("{}/count", Self::collection_path()), query)
            .await
            .map_err(|e| ResourceError::from_http(e, Self::NAME, None))?;

        decode_keyed(&response, "count", Self::NAME)
    }

    /// Saves the resource: POST to the collection when it has no ID, PUT to
    /// the member path otherwise.
    ///
    /// # Returns
    ///
    /// The saved resource with any server-generated fields populated.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the shop rejects the request (e.g.
    /// 422 with validation errors in the message).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let draft = Product { title: Some("New".to_string()), ..Default::default() };
    /// let saved = draft.save(&client).await?;
    /// assert!(saved.id.is_some());
    /// ```
    async fn save(&self, client: &RestClient) -> Result<Self, ResourceError> {
        let body = wrap_body(Self::KEY, self, Self::NAME)?;

        let response = match self.id() {
            None => client
                .post(&Self::collection_path(), Some(body))
                .await
                .map_err(|e| ResourceError::from_http(e, Self::NAME, None))?,
            Some(id) => {
                let id_str = id.to_string();
                client
                    .put(&Self::member_path(&id), body)
                    .await
                    .map_err(|e| ResourceError::from_http(e, Self::NAME, Some(&id_str)))?
            }
        };

        decode_keyed(&response, Self::KEY, Self::NAME)
    }

    /// Deletes the resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] for an unsaved resource and
    /// [`ResourceError::NotFound`] if it no longer exists.
    async fn delete(&self, client: &RestClient) -> Result<(), ResourceError> {
        let id = self.id().ok_or(ResourceError::MissingId {
            resource: Self::NAME,
            operation: "delete",
        })?;
        let id_str = id.to_string();

        client
            .delete(&Self::member_path(&id), None)
            .await
            .map_err(|e| ResourceError::from_http(e, Self::NAME, Some(&id_str)))?;

        Ok(())
    }
}

/// Decodes `body[key]` from a response.
pub(crate) fn decode_keyed<T: DeserializeOwned>(
    response: &HttpResponse,
    key: &str,
    resource: &'static str,
) -> Result<T, ResourceError> {
    let decode_err = |source| ResourceError::Decode { resource, source };

    let mut body: Value = serde_json::from_slice(&response.body).map_err(decode_err)?;
    let value = body.get_mut(key).map(Value::take).ok_or_else(|| {
        decode_err(<serde_json::Error as serde::de::Error>::custom(format!(
            "response has no `{key}` field"
        )))
    })?;

    serde_json::from_value(value).map_err(decode_err)
}

/// Wraps a resource as `{ key: resource }` for a request body.
pub(crate) fn wrap_body<T: Serialize>(
    key: &str,
    resource: &T,
    name: &'static str,
) -> Result<Value, ResourceError> {
    let value = serde_json::to_value(resource).map_err(|source| ResourceError::Decode {
        resource: name,
        source,
    })?;

    let mut body_map = serde_json::Map::new();
    body_map.insert(key.to_string(), value);
    Ok(Value::Object(body_map))
}

/// Serializes a params struct to a query parameter map.
pub(crate) fn serialize_to_query<T: Serialize>(
    params: &T,
    resource: &'static str,
) -> Result<BTreeMap<String, String>, ResourceError> {
    let value =
        serde_json::to_value(params).map_err(|source| ResourceError::Decode { resource, source })?;

    let mut query = BTreeMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {} // Skip null values
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    // Convert arrays to comma-separated values
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
    struct Widget {
        #[serde(skip_serializing)]
        id: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    }

    impl RestResource for Widget {
        type Id = u64;
        type AllParams = ();
        type CountParams = ();

        const NAME: &'static str = "Widget";
        const KEY: &'static str = "widget";
        const PLURAL: &'static str = "widgets";

        fn id(&self) -> Option<u64> {
            self.id
        }
    }

    #[derive(Serialize, Default)]
    struct Params {
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        ids: Vec<u64>,
        published: Option<bool>,
    }

    fn response(body: &str) -> HttpResponse {
        HttpResponse::new(200, HashMap::new(), body.as_bytes().to_vec())
    }

    #[test]
    fn test_paths() {
        assert_eq!(Widget::collection_path(), "widgets");
        assert_eq!(Widget::member_path(&42), "widgets/42");
    }

    #[test]
    fn test_serialize_to_query_skips_nulls_and_joins_arrays() {
        let params = Params {
            limit: Some(50),
            title: None,
            ids: vec![1, 2, 3],
            published: None,
        };
        let query = serialize_to_query(&params, "Widget").unwrap();

        assert_eq!(query.get("limit"), Some(&"50".to_string()));
        assert_eq!(query.get("ids"), Some(&"1,2,3".to_string()));
        assert!(!query.contains_key("title"));
        assert!(!query.contains_key("published"));
    }

    #[test]
    fn test_serialize_unit_params_is_empty() {
        assert!(serialize_to_query(&(), "Widget").unwrap().is_empty());
    }

    #[test]
    fn test_decode_keyed() {
        let widget: Widget =
            decode_keyed(&response(r#"{"widget":{"id":1,"name":"a"}}"#), "widget", "Widget")
                .unwrap();
        assert_eq!(widget.id, Some(1));
        assert_eq!(widget.name.as_deref(), Some("a"));

        let count: u64 = decode_keyed(&response(r#"{"count":7}"#), "count", "Widget").unwrap();
        assert_eq!(count, 7);
    }

    #[test]
    fn test_decode_keyed_missing_key() {
        let result: Result<Widget, _> = decode_keyed(&response("{}"), "widget", "Widget");
        match result {
            Err(ResourceError::Decode { resource, source }) => {
                assert_eq!(resource, "Widget");
                assert!(source.to_string().contains("widget"));
            }
            other => panic!("Expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_wrap_body_omits_read_only_and_empty_fields() {
        let widget = Widget {
            id: Some(9),
            name: Some("gear".to_string()),
        };
        let body = wrap_body("widget", &widget, "Widget").unwrap();
        assert_eq!(body, serde_json::json!({"widget": {"name": "gear"}}));

        let body = wrap_body("widget", &Widget::default(), "Widget").unwrap();
        assert_eq!(body, serde_json::json!({"widget": {}}));
    }
}
