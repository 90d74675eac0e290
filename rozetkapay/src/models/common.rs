//! Payload blocks shared by several requests and responses.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::status::{CheckoutLocale, ColorMode, PaymentMethodType};

/// Browser data used by the gateway for 3-D Secure risk assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserFingerprint {
    /// `Accept` header sent by the payer's browser.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_accept_header: Option<String>,
    /// Screen color depth in bits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_color_depth: Option<String>,
    /// Payer IP address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_ip_address: Option<String>,
    /// Whether Java is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_java_enabled: Option<String>,
    /// Browser language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_language: Option<String>,
    /// Screen height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_screen_height: Option<String>,
    /// Time zone name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_time_zone: Option<String>,
    /// Time zone offset in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_time_zone_offset: Option<String>,
    /// `User-Agent` header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_user_agent: Option<String>,
}

/// Token-based payment method (card token, Apple Pay, Google Pay).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMethod {
    /// Browser data for 3-D Secure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_fingerprint: Option<BrowserFingerprint>,
    /// Payment token.
    #[serde(default)]
    pub token: String,
    /// Request the 3-D Secure flow.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub use_3ds_flow: bool,
}

/// Payment method previously saved in the customer wallet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletMethod {
    /// Browser data for 3-D Secure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_fingerprint: Option<BrowserFingerprint>,
    /// Identifier of the saved method.
    #[serde(default)]
    pub option_id: String,
    /// Request the 3-D Secure flow.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub use_3ds_flow: bool,
}

/// Payment method block.
///
/// `kind` selects which of the nested blocks the gateway reads. The
/// constructors fill both consistently.
///
/// # Examples
///
/// ```
/// use rozetkapay::models::{PaymentMethod, PaymentMethodType};
///
/// let method = PaymentMethod::cc_token("tok_123");
/// assert_eq!(method.kind, Some(PaymentMethodType::CC_TOKEN));
///
/// let json = serde_json::to_value(&method)?;
/// assert_eq!(json["type"], "cc_token");
/// assert_eq!(json["cc_token"]["token"], "tok_123");
/// assert!(json.get("wallet").is_none());
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Apple Pay token data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_pay: Option<TokenMethod>,
    /// Card token data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc_token: Option<TokenMethod>,
    /// Google Pay token data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_pay: Option<TokenMethod>,
    /// Method type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<PaymentMethodType>,
    /// Saved wallet method data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet: Option<WalletMethod>,
}

impl PaymentMethod {
    /// Card token payment.
    #[must_use]
    pub fn cc_token(token: impl Into<String>) -> Self {
        Self {
            cc_token: Some(TokenMethod { token: token.into(), ..TokenMethod::default() }),
            kind: Some(PaymentMethodType::CC_TOKEN),
            ..Self::default()
        }
    }

    /// Apple Pay payment.
    #[must_use]
    pub fn apple_pay(token: impl Into<String>) -> Self {
        Self {
            apple_pay: Some(TokenMethod { token: token.into(), ..TokenMethod::default() }),
            kind: Some(PaymentMethodType::APPLE_PAY),
            ..Self::default()
        }
    }

    /// Google Pay payment.
    #[must_use]
    pub fn google_pay(token: impl Into<String>) -> Self {
        Self {
            google_pay: Some(TokenMethod { token: token.into(), ..TokenMethod::default() }),
            kind: Some(PaymentMethodType::GOOGLE_PAY),
            ..Self::default()
        }
    }

    /// Payment with a method saved in the customer wallet.
    #[must_use]
    pub fn wallet(option_id: impl Into<String>) -> Self {
        Self {
            wallet: Some(WalletMethod { option_id: option_id.into(), ..WalletMethod::default() }),
            kind: Some(PaymentMethodType::WALLET),
            ..Self::default()
        }
    }
}

/// Product or service line in an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Currency code (ISO 4217).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Product description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Merchant product identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Product name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Amount without VAT.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub net_amount: Option<Decimal>,
    /// Quantity, as the gateway accepts it (a string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    /// Product page URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// VAT amount.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub vat_amount: Option<Decimal>,
}

/// Recipient of funds (p2p transfers) or payer details in payment info.
#[allow(missing_docs, reason = "contact fields are self-describing")]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Partner-side identifier of the person.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patronym: Option<String>,
    /// Payout method of the recipient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// Payer information block of a new payment.
#[allow(missing_docs, reason = "contact fields are self-describing")]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerData {
    /// Checkout theme for hosted payments; the gateway default applies when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_mode: Option<ColorMode>,
    /// Checkout locale for hosted payments; the browser locale applies when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<CheckoutLocale>,
    /// Personal account number when topping up services.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Partner-side payer identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patronym: Option<String>,
    /// Payer's payment method. Required in direct mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// Follow-up step the payer must complete, such as a 3-D Secure redirect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentUserAction {
    /// Action kind, e.g. `url`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Action payload, e.g. the redirect address.
    pub value: String,
}

/// Fee charged for an operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fee {
    /// Decimal amount as a string.
    pub amount: String,
    /// Currency code (ISO 4217).
    pub currency: String,
}

/// Free-form key/value parameters attached to an operation.
pub type Properties = HashMap<String, String>;
