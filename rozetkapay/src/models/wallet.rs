//! Customer wallet (saved payment methods) schemas and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    common::{PaymentMethod, PaymentUserAction},
    de::null_as_default,
    status::{PaymentMethodType, PaymentStatus},
};

/// Body of `POST customers/v1/wallet`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddWalletCustomerSchema {
    /// Callback address for the result. Falls back to the client configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    /// Where the customer is redirected afterwards. Falls back to the client
    /// configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_url: Option<String>,
    /// Method to save.
    pub payment_method: PaymentMethod,
}

impl AddWalletCustomerSchema {
    /// Schema that saves `payment_method`.
    #[must_use]
    pub fn new(payment_method: PaymentMethod) -> Self {
        Self { payment_method, ..Self::default() }
    }
}

/// Masked card stored in a wallet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    /// Card expiry.
    pub expires_at: Option<DateTime<Utc>>,
    /// Masked PAN, e.g. `424242******4242`.
    #[serde(deserialize_with = "null_as_default")]
    pub mask: String,
}

/// One saved payment method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletEntry {
    /// Card details for card methods.
    pub card: Option<Card>,
    /// Identifier used to pay with or delete this entry.
    #[serde(deserialize_with = "null_as_default")]
    pub option_id: String,
    /// Display name.
    pub name: Option<String>,
    /// Method type.
    #[serde(rename = "type")]
    pub kind: Option<PaymentMethodType>,
}

/// Result of adding a wallet entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddWalletCustomerResponse {
    /// Pending customer action such as card verification.
    pub action: Option<PaymentUserAction>,
    /// Whether the customer must complete `action`.
    #[serde(deserialize_with = "null_as_default")]
    pub action_required: bool,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// The saved entry.
    pub payment_method: Option<WalletEntry>,
    /// Operation status.
    pub status: Option<PaymentStatus>,
}

/// Body of `GET customers/v1/wallet`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs, reason = "contact fields are self-describing")]
pub struct GetWalletInfoResponse {
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub external_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub patronym: Option<String>,
    pub phone: Option<String>,
    pub postal_code: Option<String>,
    /// Gateway customer id.
    pub rid: Option<String>,
    /// Saved payment methods.
    #[serde(deserialize_with = "null_as_default")]
    pub wallet: Vec<WalletEntry>,
}

/// Body of `DELETE customers/v1/wallet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteWalletCustomerSchema {
    /// Entry to delete.
    pub option_id: String,
    /// Type of the entry.
    #[serde(rename = "type")]
    pub kind: PaymentMethodType,
}

/// Result of deleting a wallet entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteWalletCustomerResponse {
    /// Whether the entry was deleted.
    #[serde(deserialize_with = "null_as_default")]
    pub delete: bool,
    /// Deleted entry.
    #[serde(deserialize_with = "null_as_default")]
    pub option_id: String,
    /// Type of the deleted entry.
    #[serde(rename = "type")]
    pub kind: Option<PaymentMethodType>,
}
