//! RecurringApplicationCharge resource implementation.
//!
//! Recurring charges bill a merchant for an app on a regular cycle. The
//! lifecycle is:
//!
//! 1. The app creates a charge with [`save`](crate::rest::RestResource::save)
//! 2. The merchant approves it at `confirmation_url`
//! 3. The app activates the accepted charge with
//!    [`activate`](RecurringApplicationCharge::activate)
//!
//! Charges cannot be updated after creation, only cancelled with `delete`.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_client::rest::RestResource;
//! use shopify_client::rest::resources::{ChargeStatus, RecurringApplicationCharge};
//!
//! let charge = RecurringApplicationCharge {
//!     name: Some("Pro Plan".to_string()),
//!     price: Some("29.99".to_string()),
//!     return_url: Some("https://myapp.com/charge-callback".to_string()),
//!     trial_days: Some(14),
//!     test: Some(true),
//!     ..Default::default()
//! };
//! let saved = charge.save(&client).await?;
//!
//! // Later, once the merchant has accepted:
//! let charge = RecurringApplicationCharge::find(&client, saved.id.unwrap()).await?;
//! if charge.status == Some(ChargeStatus::Accepted) {
//!     let active = charge.activate(&client).await?;
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::resource::decode_keyed;
use crate::rest::{ResourceError, RestResource};

/// The lifecycle state of a charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    /// The charge is awaiting merchant approval.
    #[default]
    Pending,
    /// The merchant accepted the charge; it still has to be activated.
    Accepted,
    /// The charge is active and billing.
    Active,
    /// The merchant declined the charge.
    Declined,
    /// The charge expired without action.
    Expired,
    /// The charge was cancelled.
    Cancelled,
    /// The charge is frozen because the shop is paused or closed.
    Frozen,
    /// A status this client does not know about.
    #[serde(other)]
    Unknown,
}

/// A recurring application charge (subscription).
///
/// The billing dates (`activated_on`, `billing_on`, `cancelled_on`,
/// `trial_ends_on`) are kept as the strings the shop sends, since they may be
/// plain dates or full timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RecurringApplicationCharge {
    /// The unique identifier of the charge.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The name of the charge, shown to the merchant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The recurring price, as a decimal string (e.g., "29.99").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// The current status of the charge.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub status: Option<ChargeStatus>,

    /// Whether this is a test charge that bills nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// Where the merchant is sent after approving or declining.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,

    /// `return_url` with the charge ID appended.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub decorated_return_url: Option<String>,

    /// Where the merchant approves or declines the charge.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub confirmation_url: Option<String>,

    /// The number of trial days before billing begins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_days: Option<u32>,

    /// The ID of the app that created the charge.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub api_client_id: Option<u64>,

    /// When the trial period ends.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub trial_ends_on: Option<String>,

    /// When the charge was activated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub activated_on: Option<String>,

    /// The next billing date.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub billing_on: Option<String>,

    /// When the charge was cancelled.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub cancelled_on: Option<String>,

    /// When the charge was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the charge was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RecurringApplicationCharge {
    /// Returns `true` if the charge is active and billing.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == Some(ChargeStatus::Active)
    }

    /// Returns `true` if this is a test charge.
    #[must_use]
    pub fn is_test(&self) -> bool {
        self.test.unwrap_or(false)
    }

    /// Activates a charge the merchant has accepted.
    ///
    /// Sends a bodiless POST to
    /// `/admin/recurring_application_charges/{id}/activate.json` and returns
    /// the activated charge.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the charge has no ID,
    /// [`ResourceError::NotFound`] if it doesn't exist, and
    /// [`ResourceError::Http`] if the shop refuses to activate it (for
    /// example, because the merchant declined).
    pub async fn activate(&self, client: &RestClient) -> Result<Self, ResourceError> {
        let id = self.id.ok_or(ResourceError::MissingId {
            resource: Self::NAME,
            operation: "activate",
        })?;
        let id_str = id.to_string();

        let response = client
            .post(&format!("{}/activate", Self::member_path(&id)), None)
            .await
            .map_err(|e| ResourceError::from_http(e, Self::NAME, Some(&id_str)))?;

        decode_keyed(&response, Self::KEY, Self::NAME)
    }
}

impl RestResource for RecurringApplicationCharge {
    type Id = u64;
    type AllParams = RecurringApplicationChargeListParams;
    type CountParams = ();

    const NAME: &'static str = "RecurringApplicationCharge";
    const KEY: &'static str = "recurring_application_charge";
    const PLURAL: &'static str = "recurring_application_charges";

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Parameters for listing recurring application charges.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RecurringApplicationChargeListParams {
    /// Return charges after this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_serialization_sends_writable_fields_only() {
        let charge = RecurringApplicationCharge {
            id: Some(455_696_195),
            name: Some("Super Duper Plan".to_string()),
            price: Some("10.00".to_string()),
            return_url: Some("http://super-duper.shopifyapps.com".to_string()),
            test: Some(true),
            status: Some(ChargeStatus::Pending),
            confirmation_url: Some("https://example.com/confirm".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&charge).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Super Duper Plan",
                "price": "10.00",
                "test": true,
                "return_url": "http://super-duper.shopifyapps.com"
            })
        );
    }

    #[test]
    fn test_charge_deserialization() {
        let json = r#"{
            "id": 455696195,
            "name": "Super Mega Plan",
            "api_client_id": 755357713,
            "price": "15.00",
            "status": "accepted",
            "return_url": "http://yourapp.com",
            "billing_on": "2024-02-01",
            "created_at": "2024-01-01T12:00:00-05:00",
            "updated_at": "2024-01-01T12:00:00-05:00",
            "test": null,
            "activated_on": null,
            "cancelled_on": null,
            "trial_days": 0,
            "trial_ends_on": null,
            "decorated_return_url": "http://yourapp.com?charge_id=455696195"
        }"#;

        let charge: RecurringApplicationCharge = serde_json::from_str(json).unwrap();

        assert_eq!(charge.id, Some(455_696_195));
        assert_eq!(charge.status, Some(ChargeStatus::Accepted));
        assert_eq!(charge.billing_on.as_deref(), Some("2024-02-01"));
        assert_eq!(charge.api_client_id, Some(755_357_713));
        assert!(!charge.is_active());
        assert!(!charge.is_test());
    }

    #[test]
    fn test_unrecognized_status_is_unknown() {
        let status: ChargeStatus = serde_json::from_str("\"on_hold\"").unwrap();
        assert_eq!(status, ChargeStatus::Unknown);
    }

    #[test]
    fn test_charge_paths() {
        assert_eq!(
            RecurringApplicationCharge::member_path(&455_696_195),
            "recurring_application_charges/455696195"
        );
    }
}
