//! RozetkaPay: async client for the RozetkaPay payment gateway.
//!
//! Covers the merchant REST API: one-step and two-step payments, refunds,
//! payment status lookup, callback re-delivery, and customer wallets (saved
//! payment methods). Incoming payment callbacks are decoded with
//! [`Client::parse_callback`].
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  typed schema   ┌──────────┐  Request   ┌───────────────┐
//! │    caller    │────────────────▶│  Client  │───────────▶│ HttpTransport │──▶ HTTPS + JSON
//! └──────────────┘◀────────────────└──────────┘◀───────────└───────────────┘
//!                  typed response    classifies   status + body
//!                  or Error          2xx / error
//! ```
//!
//! - [`models`]: wire types. Request schemas omit unset fields; responses
//!   decode leniently and keep unknown status values.
//! - [`Config`]: credentials, base URL, default callback/result URLs, debug flag.
//! - [`transport`]: request building and the reqwest-backed transport.
//! - [`Client`]: one method per gateway operation.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rust_decimal::Decimal;
//! use rozetkapay::{
//!     Client, Config,
//!     models::{CreatePaymentSchema, PaymentMode, PaymentOperationSchema},
//! };
//!
//! # async fn example() -> rozetkapay::Result<()> {
//! let config = Config::new("merchant-login", "merchant-password")
//!     .with_callback_url("https://shop.example.com/rozetkapay/callback")
//!     .with_result_url("https://shop.example.com/thanks");
//! let client = Client::new(config)?;
//!
//! // Hosted checkout: the response carries the payment page link.
//! let schema = CreatePaymentSchema::new(Decimal::new(25000, 2), "UAH", "order-17", PaymentMode::HOSTED);
//! let payment = client.create_payment(&schema).await?;
//! if let Some(action) = &payment.action {
//!     println!("send the payer to {}", action.value);
//! }
//!
//! // Later: refund part of it.
//! let refund = PaymentOperationSchema {
//!     amount: Some(Decimal::new(5000, 2)),
//!     ..PaymentOperationSchema::new("order-17")
//! };
//! client.refund_payment(&refund).await?;
//!
//! let info = client.get_payment_info("order-17").await?;
//! println!("refunded: {}", info.refunded);
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All operations return [`Result<T>`](error::Result). A gateway rejection
//! displays as its bare status code:
//!
//! ```rust,no_run
//! use rozetkapay::{
//!     Client, Config, Error,
//!     models::{PaymentOperationSchema, PaymentStatusCode},
//! };
//!
//! # async fn example(client: Client) {
//! match client.confirm_payment(&PaymentOperationSchema::new("order-17")).await {
//!     Ok(payment) => println!("confirmed: {}", payment.is_success),
//!     Err(e) if e.status_code() == Some(&PaymentStatusCode::TRANSACTION_DECLINED) => {
//!         eprintln!("declined");
//!     }
//!     Err(Error::Http(e)) => eprintln!("network error: {e}"),
//!     Err(e) => eprintln!("failed: {e}"),
//! }
//! # }
//! ```
//!
//! # Logging
//!
//! The crate emits [`tracing`] events and spans and never installs a
//! subscriber. With [`Config::with_debug`] each call logs its method, URL,
//! status and body size at `info`. Gateway errors are always logged at `warn`.
//! Credentials are never logged.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![allow(
    clippy::multiple_crate_versions,
    reason = "transitive dependencies from reqwest and wiremock"
)]

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;

pub use client::Client;
pub use config::{Config, ConfigSource};
pub use error::{Error, Result};
