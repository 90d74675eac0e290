//! Payment request schemas and responses.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    common::{CustomerData, Fee, PaymentMethod, PaymentUserAction, Product, Properties, Recipient},
    de::{from_object_slice, null_as_default},
    status::{CallbackResendOperation, PaymentMode, PaymentStatus, PaymentStatusCode},
};
use crate::error::{Error, Result};

/// Body of `POST payments/v1/new`.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rozetkapay::models::{CreatePaymentSchema, PaymentMode};
///
/// let schema = CreatePaymentSchema {
///     description: Some("Order #42".to_owned()),
///     ..CreatePaymentSchema::new(Decimal::new(19999, 2), "UAH", "order-42", PaymentMode::HOSTED)
/// };
///
/// let json = serde_json::to_value(&schema)?;
/// assert_eq!(json["amount"], serde_json::json!(199.99));
/// assert_eq!(json["mode"], "hosted");
/// assert!(json["customer"].is_null());
/// assert!(json.get("products").is_none());
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePaymentSchema {
    /// Order amount.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// Order currency (ISO 4217).
    pub currency: String,

    /// Unique order number.
    pub external_id: String,

    /// `hosted` returns a payment page link; `direct` is host-to-host and
    /// requires `customer.payment_method`.
    pub mode: PaymentMode,

    /// Callback address for operation status. Falls back to the client
    /// configuration when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,

    /// Where the payer is redirected after paying. Falls back to the client
    /// configuration when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_url: Option<String>,

    /// `true` debits immediately; `false` holds funds until
    /// [`confirm_payment`](crate::Client::confirm_payment).
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub confirm: bool,

    /// Order description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Opaque merchant data, up to 4000 characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,

    /// Payer information. Always sent, `null` when absent.
    #[serde(default)]
    pub customer: Option<CustomerData>,

    /// Order lines.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<Product>,

    /// Recipient of funds for p2p transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<Recipient>,

    /// Additional key/value parameters.
    #[serde(default, skip_serializing_if = "Properties::is_empty")]
    pub properties: Properties,
}

impl CreatePaymentSchema {
    /// Creates a schema with the required fields set and everything else empty.
    #[must_use]
    pub fn new(
        amount: Decimal,
        currency: impl Into<String>,
        external_id: impl Into<String>,
        mode: PaymentMode,
    ) -> Self {
        Self {
            amount,
            currency: currency.into(),
            external_id: external_id.into(),
            mode,
            callback_url: None,
            result_url: None,
            confirm: false,
            description: None,
            payload: None,
            customer: None,
            products: Vec::new(),
            recipient: None,
            properties: Properties::new(),
        }
    }

    /// Checks constraints the gateway would otherwise reject.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] when `mode` is `direct` and no
    /// customer payment method is given.
    pub fn validate(&self) -> Result<()> {
        if self.mode == PaymentMode::DIRECT
            && self.customer.as_ref().and_then(|c| c.payment_method.as_ref()).is_none()
        {
            return Err(Error::InvalidRequest(
                "direct mode requires customer.payment_method".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Body shared by confirm, cancel and refund operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOperationSchema {
    /// Order number the operation applies to.
    pub external_id: String,

    /// Partial amount; the full amount is used when unset.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Decimal>,

    /// Callback address for this operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,

    /// Currency of `amount`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Opaque merchant data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

impl PaymentOperationSchema {
    /// Operation on the whole amount of `external_id`.
    #[must_use]
    pub fn new(external_id: impl Into<String>) -> Self {
        Self { external_id: external_id.into(), ..Self::default() }
    }
}

/// Body of `POST payments/v1/confirm` (two-step payments).
pub type ConfirmPaymentSchema = PaymentOperationSchema;

/// Body of `POST payments/v1/cancel` (two-step payments).
pub type CancelPaymentSchema = PaymentOperationSchema;

/// Body of `POST payments/v1/refund`.
pub type RefundPaymentSchema = PaymentOperationSchema;

/// Body of `POST payments/v1/callback/resend`.
///
/// Without `operation` the callback of the last operation is re-sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentCallbackResendSchema {
    /// Order number.
    pub external_id: String,
    /// Operation whose callback to re-send.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<CallbackResendOperation>,
}

/// Payer details echoed in payment responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs, reason = "contact fields are self-describing")]
pub struct PaymentResponseCustomer {
    pub browser_user_agent: Option<String>,
    pub email: Option<String>,
    pub external_id: Option<String>,
    pub first_name: Option<String>,
    pub ip_address: Option<String>,
    pub last_name: Option<String>,
    pub patronym: Option<String>,
    pub phone: Option<String>,
}

/// Details of a single operation (purchase, confirmation, cancellation, refund).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationDetails {
    /// Decimal amount as a string.
    #[serde(deserialize_with = "null_as_default")]
    pub amount: String,
    /// Acquirer order id.
    pub billing_order_id: Option<String>,
    /// When the operation was created.
    pub created_at: Option<DateTime<Utc>>,
    /// Currency code (ISO 4217).
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    /// Operation description.
    pub description: Option<String>,
    /// Gateway order id.
    pub gateway_order_id: Option<String>,
    /// Merchant payload.
    pub payload: Option<String>,
    /// Gateway payment id.
    pub payment_id: Option<String>,
    /// When processing finished.
    pub processed_at: Option<DateTime<Utc>>,
    /// Additional parameters.
    #[serde(deserialize_with = "null_as_default")]
    pub properties: Properties,
    /// Retrieval reference number.
    pub rrn: Option<String>,
    /// Operation status.
    pub status: Option<PaymentStatus>,
    /// Gateway status code.
    pub status_code: Option<PaymentStatusCode>,
    /// Human-readable status.
    pub status_description: Option<String>,
    /// Acquirer transaction id.
    pub transaction_id: Option<String>,
    /// Authorization code.
    pub auth_code: Option<String>,
    /// Fee charged.
    pub fee: Option<Fee>,
    /// Terminal that processed the operation.
    pub terminal_name: Option<String>,
}

/// Result of create/confirm/cancel/refund, and the body of payment callbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentResponse {
    /// Gateway payment id.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// Filled when `action_required` is `true`: redirect the payer to
    /// `action.value` to finish the operation (3-D Secure). Only for direct mode.
    pub action: Option<PaymentUserAction>,

    /// Whether additional payer steps are needed.
    #[serde(deserialize_with = "null_as_default")]
    pub action_required: bool,

    /// Details of the operation.
    #[serde(deserialize_with = "null_as_default")]
    pub details: OperationDetails,

    /// Unique order number.
    #[serde(deserialize_with = "null_as_default")]
    pub external_id: String,

    /// Whether the operation succeeded.
    #[serde(deserialize_with = "null_as_default")]
    pub is_success: bool,

    /// Receipt page.
    pub receipt_url: Option<String>,

    /// Payment method used.
    pub payment_method: Option<PaymentMethod>,

    /// Payer details.
    pub customer: Option<PaymentResponseCustomer>,
}

impl PaymentResponse {
    /// Decodes a payment callback body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Deserialization`] if `body` is not a JSON payment response.
    ///
    /// # Examples
    ///
    /// ```
    /// use rozetkapay::models::{PaymentResponse, PaymentStatus};
    ///
    /// let body = br#"{"id":"p1","external_id":"order-1","is_success":true,
    ///     "details":{"amount":"100.00","currency":"UAH","status":"success"}}"#;
    /// let callback = PaymentResponse::from_slice(body)?;
    ///
    /// assert!(callback.is_success);
    /// assert_eq!(callback.details.status, Some(PaymentStatus::SUCCESS));
    /// # Ok::<(), rozetkapay::Error>(())
    /// ```
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        from_object_slice(body).map_err(Error::Deserialization)
    }
}

/// Body of `GET payments/v1/info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentInfoResponse {
    /// Pending payer action, if any.
    pub action: Option<PaymentUserAction>,
    /// Whether additional payer steps are needed.
    #[serde(deserialize_with = "null_as_default")]
    pub action_required: bool,
    /// Total amount.
    #[serde(deserialize_with = "null_as_default")]
    pub amount: String,
    /// Cancelled amount.
    pub amount_canceled: Option<String>,
    /// Confirmed amount.
    pub amount_confirmed: Option<String>,
    /// Refunded amount.
    pub amount_refunded: Option<String>,
    /// Whether the payment was cancelled.
    #[serde(deserialize_with = "null_as_default")]
    pub canceled: bool,
    /// Cancellation operations.
    #[serde(deserialize_with = "null_as_default")]
    pub cancellation_details: Vec<OperationDetails>,
    /// Confirmation operations.
    #[serde(deserialize_with = "null_as_default")]
    pub confirmation_details: Vec<OperationDetails>,
    /// Whether the payment was confirmed.
    #[serde(deserialize_with = "null_as_default")]
    pub confirmed: bool,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Currency code (ISO 4217).
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    /// Unique order number.
    #[serde(deserialize_with = "null_as_default")]
    pub external_id: String,
    /// Gateway payment id.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Purchase operations.
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_details: Vec<OperationDetails>,
    /// Whether funds were debited.
    #[serde(deserialize_with = "null_as_default")]
    pub purchased: bool,
    /// Receipt page.
    pub receipt_url: Option<String>,
    /// Refund operations.
    #[serde(deserialize_with = "null_as_default")]
    pub refund_details: Vec<OperationDetails>,
    /// Whether the payment was refunded.
    #[serde(deserialize_with = "null_as_default")]
    pub refunded: bool,
    /// Payer details.
    pub customer: Option<Recipient>,
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn sample_response() -> PaymentResponse {
        PaymentResponse {
            id: "pay-1".to_owned(),
            action: Some(PaymentUserAction {
                kind: "url".to_owned(),
                value: "https://3ds.example.com/redirect".to_owned(),
            }),
            action_required: true,
            details: OperationDetails {
                amount: "150.00".to_owned(),
                currency: "UAH".to_owned(),
                created_at: DateTime::parse_from_rfc3339("2024-03-01T10:15:00Z")
                    .ok()
                    .map(|t| t.with_timezone(&Utc)),
                status: Some(PaymentStatus::PENDING),
                status_code: Some(PaymentStatusCode::WAITING_FOR_VERIFICATION),
                properties: Properties::from([("k".to_owned(), "v".to_owned())]),
                fee: Some(Fee { amount: "1.50".to_owned(), currency: "UAH".to_owned() }),
                ..OperationDetails::default()
            },
            external_id: "order-1".to_owned(),
            is_success: false,
            receipt_url: None,
            payment_method: Some(PaymentMethod::cc_token("tok")),
            customer: Some(PaymentResponseCustomer {
                email: Some("payer@example.com".to_owned()),
                ..PaymentResponseCustomer::default()
            }),
        }
    }

    #[test]
    fn test_direct_mode_requires_payment_method() {
        let schema =
            CreatePaymentSchema::new(Decimal::ONE_HUNDRED, "UAH", "o-1", PaymentMode::DIRECT);
        assert!(matches!(schema.validate(), Err(Error::InvalidRequest(_))));

        let schema = CreatePaymentSchema {
            customer: Some(CustomerData::default()),
            ..schema
        };
        assert!(matches!(schema.validate(), Err(Error::InvalidRequest(_))));

        let schema = CreatePaymentSchema {
            customer: Some(CustomerData {
                payment_method: Some(PaymentMethod::cc_token("tok")),
                ..CustomerData::default()
            }),
            ..schema
        };
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_hosted_mode_needs_no_customer() {
        let schema =
            CreatePaymentSchema::new(Decimal::ONE_HUNDRED, "UAH", "o-1", PaymentMode::HOSTED);
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_create_payment_omits_unset_fields() {
        let schema = CreatePaymentSchema::new(Decimal::new(50, 0), "UAH", "o-2", PaymentMode::HOSTED);
        let json = serde_json::to_value(&schema).unwrap();
        let object = json.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["amount", "currency", "customer", "external_id", "mode"]);
    }

    #[test]
    fn test_operation_schema_minimal() {
        let json = serde_json::to_string(&RefundPaymentSchema::new("o-3")).unwrap();
        assert_eq!(json, r#"{"external_id":"o-3"}"#);

        let partial = ConfirmPaymentSchema {
            amount: Some(Decimal::new(2550, 2)),
            currency: Some("UAH".to_owned()),
            ..ConfirmPaymentSchema::new("o-3")
        };
        let json = serde_json::to_value(&partial).unwrap();
        assert_eq!(json["amount"], serde_json::json!(25.5));
    }

    #[test]
    fn test_callback_resend_operation_optional() {
        let schema = PaymentCallbackResendSchema { external_id: "o-4".to_owned(), operation: None };
        assert_eq!(serde_json::to_string(&schema).unwrap(), r#"{"external_id":"o-4"}"#);

        let schema = PaymentCallbackResendSchema {
            operation: Some(CallbackResendOperation::PAYMENT),
            ..schema
        };
        assert_eq!(
            serde_json::to_string(&schema).unwrap(),
            r#"{"external_id":"o-4","operation":"payment"}"#
        );
    }

    #[test]
    fn test_callback_round_trip() {
        let response = sample_response();
        let bytes = serde_json::to_vec(&response).unwrap();
        let parsed = PaymentResponse::from_slice(&bytes).unwrap();
        assert_eq!(parsed, response);
    }

    #[test]
    fn test_callback_rejects_invalid_json() {
        let result = PaymentResponse::from_slice(b"not json");
        assert!(matches!(result, Err(Error::Deserialization(_))));
    }

    #[test]
    fn test_payment_response_tolerates_nulls_and_missing_keys() {
        let body = br#"{"id":"p","details":null,"action":null,"external_id":null}"#;
        let response = PaymentResponse::from_slice(body).unwrap();
        assert_eq!(response.id, "p");
        assert_eq!(response.details, OperationDetails::default());
        assert!(response.external_id.is_empty());
        assert!(!response.is_success);
    }

    #[test]
    fn test_callback_must_be_an_object() {
        assert!(matches!(PaymentResponse::from_slice(b"[]"), Err(Error::Deserialization(_))));
        assert!(matches!(
            PaymentResponse::from_slice(br#"["pay-1", null, true]"#),
            Err(Error::Deserialization(_))
        ));
        assert!(matches!(PaymentResponse::from_slice(b"null"), Err(Error::Deserialization(_))));
    }

    #[test]
    fn test_null_flags_decode_as_false() {
        let body = br#"{"id":"p","is_success":null,"action_required":null,"details":{}}"#;
        let response = PaymentResponse::from_slice(body).unwrap();
        assert!(!response.is_success);
        assert!(!response.action_required);

        let info: PaymentInfoResponse = serde_json::from_str(
            r#"{"id":"p","canceled":null,"confirmed":null,"purchased":true,
                "refunded":null,"action_required":null}"#,
        )
        .unwrap();
        assert!(info.purchased);
        assert!(!info.canceled && !info.confirmed && !info.refunded && !info.action_required);
    }

    #[test]
    fn test_payment_info_response_decodes() {
        let body = r#"{
            "id": "pay-9",
            "external_id": "order-9",
            "amount": "300.00",
            "amount_refunded": "100.00",
            "currency": "UAH",
            "created_at": "2024-05-02T08:00:00+03:00",
            "purchased": true,
            "refunded": true,
            "purchase_details": [
                {"amount": "300.00", "currency": "UAH", "status": "success",
                 "status_code": "transaction_successful", "properties": null}
            ],
            "refund_details": [
                {"amount": "100.00", "currency": "UAH", "status": "success",
                 "status_code": "payment_was_refunded"}
            ],
            "cancellation_details": null,
            "customer": {"email": "payer@example.com"}
        }"#;

        let info: PaymentInfoResponse = serde_json::from_str(body).unwrap();
        assert_eq!(info.id, "pay-9");
        assert!(info.purchased && info.refunded && !info.canceled);
        assert_eq!(info.amount_refunded.as_deref(), Some("100.00"));
        assert_eq!(info.purchase_details.len(), 1);
        assert_eq!(
            info.purchase_details[0].status_code,
            Some(PaymentStatusCode::TRANSACTION_SUCCESSFUL)
        );
        assert!(info.purchase_details[0].properties.is_empty());
        assert_eq!(info.refund_details[0].status_code, Some(PaymentStatusCode::PAYMENT_WAS_REFUNDED));
        assert!(info.cancellation_details.is_empty());
        assert!(info.confirmation_details.is_empty());
        assert_eq!(
            info.created_at.map(|t| t.to_rfc3339()),
            Some("2024-05-02T05:00:00+00:00".to_owned())
        );
        assert_eq!(
            info.customer.and_then(|c| c.email).as_deref(),
            Some("payer@example.com")
        );
    }

    #[test]
    fn test_unknown_status_values_survive() {
        let body = br#"{"id":"p","details":{"status":"on_hold","status_code":"new_code_2030"}}"#;
        let response = PaymentResponse::from_slice(body).unwrap();
        assert_eq!(response.details.status.as_ref().map(PaymentStatus::as_str), Some("on_hold"));
        assert_eq!(
            response.details.status_code.as_ref().map(PaymentStatusCode::as_str),
            Some("new_code_2030")
        );

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["details"]["status_code"], "new_code_2030");
    }

    fn optional_text() -> impl Strategy<Value = Option<String>> {
        proptest::option::of("[a-zA-Z0-9 ._-]{1,24}")
    }

    prop_compose! {
        fn create_payment_schema()(
            cents in 1i64..10_000_000,
            currency in "[A-Z]{3}",
            external_id in "[a-z0-9-]{1,32}",
            hosted in any::<bool>(),
            confirm in any::<bool>(),
            description in optional_text(),
            payload in optional_text(),
            callback_url in optional_text(),
            token in "[a-z0-9]{8,16}",
        ) -> CreatePaymentSchema {
            let mode = if hosted { PaymentMode::HOSTED } else { PaymentMode::DIRECT };
            let customer = (!hosted).then(|| CustomerData {
                payment_method: Some(PaymentMethod::cc_token(token)),
                ..CustomerData::default()
            });
            CreatePaymentSchema {
                confirm,
                description,
                payload,
                callback_url,
                customer,
                ..CreatePaymentSchema::new(Decimal::new(cents, 2), currency, external_id, mode)
            }
        }
    }

    fn optional_timestamp() -> impl Strategy<Value = Option<DateTime<Utc>>> {
        proptest::option::of(0i64..4_000_000_000)
            .prop_map(|secs| secs.and_then(|secs| DateTime::from_timestamp(secs, 0)))
    }

    prop_compose! {
        fn operation_details()(
            amount in "[0-9]{1,6}\\.[0-9]{2}",
            currency in "[A-Z]{3}",
            created_at in optional_timestamp(),
            processed_at in optional_timestamp(),
            status in proptest::option::of("[a-z_]{1,20}"),
            status_code in proptest::option::of("[a-z_0-9]{1,32}"),
            properties in proptest::collection::hash_map("[a-z]{1,8}", "[a-z0-9]{0,8}", 0..4),
            fee in proptest::option::of("[0-9]{1,3}\\.[0-9]{2}"),
            description in optional_text(),
        ) -> OperationDetails {
            OperationDetails {
                fee: fee.map(|amount| Fee { amount, currency: currency.clone() }),
                amount,
                currency,
                created_at,
                processed_at,
                status: status.map(PaymentStatus::from),
                status_code: status_code.map(PaymentStatusCode::from),
                properties,
                description,
                ..OperationDetails::default()
            }
        }
    }

    prop_compose! {
        fn payment_response()(
            id in "[a-z0-9-]{1,24}",
            external_id in "[a-z0-9-]{1,32}",
            action_required in any::<bool>(),
            is_success in any::<bool>(),
            details in operation_details(),
            redirect in proptest::option::of("https://[a-z]{1,12}\\.example/[a-z0-9]{0,12}"),
            receipt_url in optional_text(),
            token in proptest::option::of("[a-z0-9]{8,16}"),
            email in optional_text(),
        ) -> PaymentResponse {
            PaymentResponse {
                id,
                action: redirect.map(|value| PaymentUserAction { kind: "url".to_owned(), value }),
                action_required,
                details,
                external_id,
                is_success,
                receipt_url,
                payment_method: token.map(PaymentMethod::cc_token),
                customer: email.map(|email| PaymentResponseCustomer {
                    email: Some(email),
                    ..PaymentResponseCustomer::default()
                }),
            }
        }
    }

    proptest! {
        #[test]
        fn test_callback_decodes_what_was_encoded(response in payment_response()) {
            let body = serde_json::to_vec(&response).unwrap();
            let parsed = crate::Client::parse_callback(&body).unwrap();
            prop_assert_eq!(parsed, response);
        }

        #[test]
        fn test_create_payment_schema_json_round_trip(schema in create_payment_schema()) {
            prop_assert!(schema.validate().is_ok());

            let json = serde_json::to_vec(&schema).unwrap();
            let back: CreatePaymentSchema = serde_json::from_slice(&json).unwrap();
            prop_assert_eq!(&back, &schema);

            let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
            prop_assert_eq!(value.get("description").is_some(), schema.description.is_some());
            prop_assert_eq!(value.get("confirm").is_some(), schema.confirm);
        }
    }
}
