//! Status and code registry.
//!
//! The gateway adds new values to its vocabularies without notice, so every
//! enumeration here is an *open* string newtype: the known values are exposed
//! as associated constants, and anything else still deserializes and
//! re-serializes verbatim.
//!
//! # Examples
//!
//! ```
//! use rozetkapay::models::PaymentStatusCode;
//!
//! let code: PaymentStatusCode = serde_json::from_str("\"transaction_declined\"")?;
//! assert_eq!(code, PaymentStatusCode::TRANSACTION_DECLINED);
//! assert!(code.is_known());
//!
//! let future: PaymentStatusCode = serde_json::from_str("\"brand_new_code\"")?;
//! assert_eq!(future.as_str(), "brand_new_code");
//! assert!(!future.is_known());
//! # Ok::<(), serde_json::Error>(())
//! ```

use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};

/// Declares an open, string-backed enumeration.
///
/// Generates the newtype, one associated constant per known value, a
/// `known()` table, conversions from `&str`/`String`, `Display`, and
/// transparent serde support.
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Cow<'static, str>);

        impl $name {
            $(
                $(#[$vmeta])*
                pub const $variant: Self = Self(Cow::Borrowed($value));
            )+

            const KNOWN: &'static [Self] = &[$(Self::$variant),+];

            /// Wraps an arbitrary value, known or not.
            #[must_use]
            pub fn new(value: impl Into<Cow<'static, str>>) -> Self {
                Self(value.into())
            }

            /// Returns the wire representation.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns `true` if the value is one of the documented constants.
            #[must_use]
            pub fn is_known(&self) -> bool {
                Self::KNOWN.contains(self)
            }

            /// All documented values, in declaration order.
            #[must_use]
            pub const fn known() -> &'static [Self] {
                Self::KNOWN
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(Cow::Owned(value.to_owned()))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(Cow::Owned(value))
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

open_enum! {
    /// Type of interaction with the gateway.
    pub struct PaymentMode {
        /// Host-to-host submission of the payment method.
        DIRECT = "direct",
        /// Gateway returns a link to its hosted payment page.
        HOSTED = "hosted",
    }
}

open_enum! {
    /// Lifecycle status of a transaction.
    pub struct PaymentStatus {
        /// Created, processing has not started yet.
        INIT = "init",
        /// In processing.
        PENDING = "pending",
        /// Successful.
        SUCCESS = "success",
        /// Not successful.
        FAILURE = "failure",
    }
}

open_enum! {
    /// Kind of payment method submitted or stored in a wallet.
    pub struct PaymentMethodType {
        /// Apple Pay token.
        APPLE_PAY = "apple_pay",
        /// Tokenized card.
        CC_TOKEN = "cc_token",
        /// Google Pay token.
        GOOGLE_PAY = "google_pay",
        /// Method previously saved in the customer wallet.
        WALLET = "wallet",
    }
}

open_enum! {
    /// Checkout page language for hosted payments.
    pub struct CheckoutLocale {
        /// Ukrainian.
        UK = "UK",
        /// English.
        EN = "EN",
        /// Spanish.
        ES = "ES",
        /// Polish.
        PL = "PL",
        /// French.
        FR = "FR",
        /// Slovak.
        SK = "SK",
        /// German.
        DE = "DE",
    }
}

open_enum! {
    /// Checkout page theme for hosted payments.
    pub struct ColorMode {
        /// Light theme.
        LIGHT = "light",
        /// Dark theme.
        DARK = "dark",
    }
}

open_enum! {
    /// Operation whose callback should be re-sent.
    pub struct CallbackResendOperation {
        /// The payment (purchase) operation.
        PAYMENT = "payment",
    }
}

open_enum! {
    /// Gateway status code identifying the precise outcome of an operation.
    ///
    /// This is the `code` of an [`ErrorResponse`](super::ErrorResponse) and
    /// the `status_code` of operation details. The table below is what the
    /// gateway documents today; it is not exhaustive.
    pub struct PaymentStatusCode {
        #[allow(missing_docs)] AUTHORIZATION_FAILED = "authorization_failed",
        #[allow(missing_docs)] CUSTOMER_AUTH_NOT_FOUND = "customer_auth_not_found",
        #[allow(missing_docs)] REQUEST_FAILED = "request_failed",
        #[allow(missing_docs)] INTERNAL_ERROR = "internal_error",
        #[allow(missing_docs)] ACCESS_NOT_ALLOWED = "access_not_allowed",
        #[allow(missing_docs)] INVALID_REQUEST_BODY = "invalid_request_body",
        #[allow(missing_docs)] PAYMENT_SETTINGS_NOT_FOUND = "payment_settings_not_found",
        #[allow(missing_docs)] TRANSACTION_ALREADY_PAID = "transaction_already_paid",
        #[allow(missing_docs)] ACTION_NOT_ALLOWED = "action_not_allowed",
        #[allow(missing_docs)] ACTION_ALREADY_DONE = "action_already_done",
        #[allow(missing_docs)] TRANSACTION_SUCCESS_PRIMARY_NOT_FOUND = "transaction_success_primary_not_found",
        #[allow(missing_docs)] PAYMENT_METHOD_NOT_ALLOWED = "payment_method_not_allowed",
        #[allow(missing_docs)] WALLET_NOT_CONFIGURED = "wallet_not_configured",
        #[allow(missing_docs)] PAYMENT_METHOD_ALREADY_CONFIRMED = "payment_method_already_confirmed",
        #[allow(missing_docs)] PAYMENT_METHOD_NOT_FOUND = "payment_method_not_found",
        #[allow(missing_docs)] INVALID_CARD_TOKEN = "invalid_card_token",
        #[allow(missing_docs)] CUSTOMER_AUTH_TOKEN_EXPIRED_OR_INVALID = "customer_auth_token_expired_or_invalid",
        #[allow(missing_docs)] CUSTOMER_PROFILE_NOT_FOUND = "customer_profile_not_found",
        #[allow(missing_docs)] CUSTOMER_ID_NOT_PASSED = "customer_id_not_passed",
        #[allow(missing_docs)] TRANSACTION_NOT_FOUND = "transaction_not_found",
        #[allow(missing_docs)] WAITING_FOR_VERIFICATION = "waiting_for_verification",
        #[allow(missing_docs)] TRANSACTION_AMOUNT_LIMIT = "transaction_amount_limit",
        #[allow(missing_docs)] INVALID_DATA = "invalid_data",
        #[allow(missing_docs)] TRANSACTION_DECLINED = "transaction_declined",
        #[allow(missing_docs)] AUTHORIZATION_ERROR = "authorization_error",
        #[allow(missing_docs)] TRANSACTION_REJECTED = "transaction_rejected",
        #[allow(missing_docs)] TRANSACTION_SUCCESSFUL = "transaction_successful",
        #[allow(missing_docs)] ANTI_FRAUD_CHECK = "anti_fraud_check",
        #[allow(missing_docs)] CARD_NOT_SUPPORTED = "card_not_supported",
        #[allow(missing_docs)] CONFIRMATION_TIMEOUT = "confirmation_timeout",
        #[allow(missing_docs)] INVALID_CARD_DATA = "invalid_card_data",
        #[allow(missing_docs)] INVALID_CURRENCY = "invalid_currency",
        #[allow(missing_docs)] PENDING = "pending",
        #[allow(missing_docs)] WAITING_FOR_COMPLETE = "waiting_for_complete",
        #[allow(missing_docs)] ACCESS_ERROR = "access_error",
        #[allow(missing_docs)] CARD_EXPIRED = "card_expired",
        #[allow(missing_docs)] RECEIVER_INFO_ERROR = "receiver_info_error",
        #[allow(missing_docs)] TRANSACTION_LIMIT_EXCEEDED = "transaction_limit_exceeded",
        #[allow(missing_docs)] TRANSACTION_NOT_SUPPORTED = "transaction_not_supported",
        #[allow(missing_docs)] THREE_DS_NOT_SUPPORTED = "3ds_not_supported",
        #[allow(missing_docs)] THREE_DS_REQUIRED = "3ds_required",
        #[allow(missing_docs)] FAILED_TO_CREATE_TRANSACTION = "failed_to_create_transaction",
        #[allow(missing_docs)] FAILED_TO_FINISH_TRANSACTION = "failed_to_finish_transaction",
        #[allow(missing_docs)] INSUFFICIENT_FUNDS = "insufficient_funds",
        #[allow(missing_docs)] INVALID_PHONE_NUMBER = "invalid_phone_number",
        #[allow(missing_docs)] CARD_HAS_CONSTRAINTS = "card_has_constraints",
        #[allow(missing_docs)] PIN_TRIES_EXCEEDED = "pin_tries_exceeded",
        #[allow(missing_docs)] SESSION_EXPIRED = "session_expired",
        #[allow(missing_docs)] TIMEOUT = "timeout",
        #[allow(missing_docs)] TRANSACTION_CREATED = "transaction_created",
        #[allow(missing_docs)] WAITING_FOR_REDIRECT = "waiting_for_redirect",
        #[allow(missing_docs)] WRONG_AMOUNT = "wrong_amount",
        #[allow(missing_docs)] TEST_TRANSACTION = "test_transaction",
        #[allow(missing_docs)] SUBSCRIPTION_SUCCESSFUL = "subscription_successful",
        #[allow(missing_docs)] UNSUBSCRIBED_SUCCESSFULLY = "unsubscribed_successfully",
        #[allow(missing_docs)] WRONG_PIN = "wrong_pin",
        #[allow(missing_docs)] WRONG_AUTHORIZATION_CODE = "wrong_authorization_code",
        #[allow(missing_docs)] WRONG_CAVV = "wrong_cavv",
        #[allow(missing_docs)] WRONG_CVV = "wrong_cvv",
        #[allow(missing_docs)] WRONG_ACCOUNT_NUMBER = "wrong_account_number",
        #[allow(missing_docs)] CONFIRM_REQUIRED = "confirm_required",
        #[allow(missing_docs)] CVV_IS_REQUIRED = "cvv_is_required",
        #[allow(missing_docs)] CONFIRMATION_REQUIRED = "confirmation_required",
        #[allow(missing_docs)] SENDER_INFO_REQUIRED = "sender_info_required",
        #[allow(missing_docs)] MISSED_PAYOUT_METHOD_DATA = "missed_payout_method_data",
        #[allow(missing_docs)] CARD_VERIFICATION_REQUIRED = "card_verification_required",
        #[allow(missing_docs)] INCORRECT_REFUND_SUM_OR_CURRENCY = "incorrect_refund_sum_or_currency",
        #[allow(missing_docs)] PAYMENT_CARD_HAS_INVALID_STATUS = "payment_card_has_invalid_status",
        #[allow(missing_docs)] WRONG_CARD_NUMBER = "wrong_card_number",
        #[allow(missing_docs)] USER_NOT_FOUND = "user_not_found",
        #[allow(missing_docs)] FAILED_TO_SEND_SMS = "failed_to_send_sms",
        #[allow(missing_docs)] WRONG_SMS_PASSWORD = "wrong_sms_password",
        #[allow(missing_docs)] CARD_NOT_FOUND = "card_not_found",
        #[allow(missing_docs)] PAYMENT_SYSTEM_NOT_SUPPORTED = "payment_system_not_supported",
        #[allow(missing_docs)] COUNTRY_NOT_SUPPORTED = "country_not_supported",
        #[allow(missing_docs)] NO_DISCOUNT_FOUND = "no_discount_found",
        #[allow(missing_docs)] FAILED_TO_LOAD_WALLET = "failed_to_load_wallet",
        #[allow(missing_docs)] INVALID_VERIFICATION_CODE = "invalid_verification_code",
        #[allow(missing_docs)] ADDITIONAL_INFORMATION_IS_PENDING = "additional_information_is_pending",
        #[allow(missing_docs)] TRANSACTION_IS_NOT_RECURRING = "transaction_is_not_recurring",
        #[allow(missing_docs)] CONFIRM_AMOUNT_CANNOT_BE_MORE_THAN_THE_TRANSACTION_AMOUNT = "confirm_amount_cannot_be_more_than_the_transaction_amount",
        #[allow(missing_docs)] CARD_BIN_NOT_FOUND = "card_bin_not_found",
        #[allow(missing_docs)] CURRENCY_RATE_NOT_FOUND = "currency_rate_not_found",
        #[allow(missing_docs)] INVALID_RECIPIENT_NAME = "invalid_recipient_name",
        #[allow(missing_docs)] DAILY_CARD_USAGE_LIMIT_REACHED = "daily_card_usage_limit_reached",
        #[allow(missing_docs)] INVALID_TRANSACTION_AMOUNT = "invalid_transaction_amount",
        #[allow(missing_docs)] CARD_TYPE_IS_NOT_SUPPORTED = "card_type_is_not_supported",
        #[allow(missing_docs)] STORE_IS_BLOCKED = "store_is_blocked",
        #[allow(missing_docs)] STORE_IS_NOT_ACTIVE = "store_is_not_active",
        #[allow(missing_docs)] TRANSACTION_CANNOT_BE_PROCESSED = "transaction_cannot_be_processed",
        #[allow(missing_docs)] INVALID_TRANSACTION_STATUS = "invalid_transaction_status",
        #[allow(missing_docs)] PUBLIC_KEY_NOT_FOUND = "public_key_not_found",
        #[allow(missing_docs)] TERMINAL_NOT_FOUND = "terminal_not_found",
        #[allow(missing_docs)] FEE_NOT_FOUND = "fee_not_found",
        #[allow(missing_docs)] FAILED_TO_VERIFY_CARD = "failed_to_verify_card",
        #[allow(missing_docs)] INVALID_TRANSACTION_TYPE = "invalid_transaction_type",
        #[allow(missing_docs)] RESTRICTED_IP = "restricted_ip",
        #[allow(missing_docs)] INVALID_TOKEN = "invalid_token",
        #[allow(missing_docs)] PREAUTH_NOT_ALLOWED = "preauth_not_allowed",
        #[allow(missing_docs)] TOKEN_DOES_NOT_EXIST = "token_does_not_exist",
        #[allow(missing_docs)] REACHED_THE_LIMIT_OF_ATTEMPTS_FOR_IP = "reached_the_limit_of_attempts_for_ip",
        #[allow(missing_docs)] CARD_BRANCH_IS_BLOCKED = "card_branch_is_blocked",
        #[allow(missing_docs)] CARD_BRANCH_DAILY_LIMIT_REACHED = "card_branch_daily_limit_reached",
        #[allow(missing_docs)] COMPLETION_LIMIT_REACHED = "completion_limit_reached",
        #[allow(missing_docs)] RECURRING_TRANSACTIONS_NOT_ALLOWED = "recurring_transactions_not_allowed",
        #[allow(missing_docs)] TRANSACTION_IS_CANCELED_BY_PAYER = "transaction_is_canceled_by_payer",
        #[allow(missing_docs)] PAYMENT_WAS_REFUNDED = "payment_was_refunded",
    }
}

impl Default for PaymentStatusCode {
    /// The empty code, used when an error body omits `code`.
    fn default() -> Self {
        Self(Cow::Borrowed(""))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_known_value_deserializes_to_constant() {
        let mode: PaymentMode = serde_json::from_str("\"direct\"").unwrap();
        assert_eq!(mode, PaymentMode::DIRECT);
        assert!(mode.is_known());
    }

    #[test]
    fn test_unknown_value_is_preserved() {
        let status: PaymentStatus = serde_json::from_str("\"on_hold\"").unwrap();
        assert_eq!(status.as_str(), "on_hold");
        assert!(!status.is_known());
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"on_hold\"");
    }

    #[test]
    fn test_owned_and_borrowed_compare_equal() {
        let owned = PaymentMethodType::from(String::from("cc_token"));
        assert_eq!(owned, PaymentMethodType::CC_TOKEN);
        assert_eq!(owned, "cc_token");
    }

    #[test]
    fn test_display_is_wire_value() {
        assert_eq!(PaymentStatusCode::THREE_DS_REQUIRED.to_string(), "3ds_required");
        assert_eq!(CheckoutLocale::UK.to_string(), "UK");
        assert_eq!(ColorMode::DARK.as_ref(), "dark");
    }

    #[test]
    fn test_status_code_table() {
        let known = PaymentStatusCode::known();
        assert_eq!(known.len(), 107);
        assert!(known.contains(&PaymentStatusCode::TRANSACTION_DECLINED));
        assert!(known.contains(&PaymentStatusCode::PAYMENT_WAS_REFUNDED));

        let mut values: Vec<&str> = known.iter().map(PaymentStatusCode::as_str).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), known.len(), "status codes must be unique");
    }

    #[test]
    fn test_status_code_default_is_empty() {
        assert_eq!(PaymentStatusCode::default().as_str(), "");
        assert!(!PaymentStatusCode::default().is_known());
    }

    #[test]
    fn test_from_str_never_fails() {
        let code: PaymentStatusCode = "whatever".parse().unwrap();
        assert_eq!(code.as_str(), "whatever");
    }

    proptest! {
        #[test]
        fn test_any_status_code_round_trips(value in "[a-z0-9_]{0,48}") {
            let json = serde_json::to_string(&value).unwrap();
            let code: PaymentStatusCode = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(code.as_str(), value.as_str());
            prop_assert_eq!(serde_json::to_string(&code).unwrap(), json);
        }

        #[test]
        fn test_any_locale_round_trips(value in "\\PC{0,16}") {
            let locale = CheckoutLocale::from(value.as_str());
            let json = serde_json::to_string(&locale).unwrap();
            let back: CheckoutLocale = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, locale);
        }
    }
}
