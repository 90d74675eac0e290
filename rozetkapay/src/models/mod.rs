//! Wire types for the RozetkaPay API.
//!
//! Request schemas serialize to exactly the JSON the gateway expects: optional
//! fields are omitted when unset and amounts are sent as JSON numbers.
//! Responses are decoded leniently. Missing keys and `null` values fall back to
//! defaults, and status enums keep values this crate does not know about.

mod common;
pub(crate) mod de;
mod error;
mod payment;
mod status;
mod wallet;

pub use common::{
    BrowserFingerprint, CustomerData, Fee, PaymentMethod, PaymentUserAction, Product, Properties,
    Recipient, TokenMethod, WalletMethod,
};
pub use error::ErrorResponse;
pub use payment::{
    CancelPaymentSchema, ConfirmPaymentSchema, CreatePaymentSchema, OperationDetails,
    PaymentCallbackResendSchema, PaymentInfoResponse, PaymentOperationSchema, PaymentResponse,
    PaymentResponseCustomer, RefundPaymentSchema,
};
pub use status::{
    CallbackResendOperation, CheckoutLocale, ColorMode, PaymentMethodType, PaymentMode,
    PaymentStatus, PaymentStatusCode,
};
pub use wallet::{
    AddWalletCustomerResponse, AddWalletCustomerSchema, Card, DeleteWalletCustomerResponse,
    DeleteWalletCustomerSchema, GetWalletInfoResponse, WalletEntry,
};
