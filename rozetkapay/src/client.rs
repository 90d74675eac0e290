//! RozetkaPay API client.

use reqwest::{
    Method,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{info, instrument, warn};
use url::Url;

use crate::{
    config::Config,
    error::{Error, Result},
    models::{
        AddWalletCustomerResponse, AddWalletCustomerSchema, CancelPaymentSchema,
        ConfirmPaymentSchema, CreatePaymentSchema, DeleteWalletCustomerResponse,
        DeleteWalletCustomerSchema, ErrorResponse, GetWalletInfoResponse,
        PaymentCallbackResendSchema, PaymentInfoResponse, PaymentResponse, RefundPaymentSchema,
        de::from_object_slice,
    },
    transport::{HttpTransport, Request, Transport, TransportResponse},
};

const CREATE_PAYMENT_PATH: &str = "payments/v1/new";
const CONFIRM_PAYMENT_PATH: &str = "payments/v1/confirm";
const CANCEL_PAYMENT_PATH: &str = "payments/v1/cancel";
const REFUND_PAYMENT_PATH: &str = "payments/v1/refund";
const PAYMENT_INFO_PATH: &str = "payments/v1/info";
const RESEND_CALLBACK_PATH: &str = "payments/v1/callback/resend";
const WALLET_PATH: &str = "customers/v1/wallet";

/// Client for the RozetkaPay payment gateway.
///
/// Every operation is one awaited HTTP round trip. Clones share the
/// configuration and the connection pool.
///
/// # Examples
///
/// ```no_run
/// use rust_decimal::Decimal;
/// use rozetkapay::{
///     Client, Config,
///     models::{CreatePaymentSchema, PaymentMode},
/// };
///
/// # async fn example() -> rozetkapay::Result<()> {
/// let client = Client::new(Config::development())?;
///
/// let schema = CreatePaymentSchema::new(Decimal::new(1000, 2), "UAH", "order-1", PaymentMode::HOSTED);
/// let payment = client.create_payment(&schema).await?;
///
/// if let Some(action) = payment.action {
///     println!("redirect the payer to {}", action.value);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    config: Config,
    transport: HttpTransport,
}

impl Client {
    /// Creates a client with its own HTTP transport built from
    /// [`Config::http`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP settings are invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let transport = HttpTransport::new(config.http())?;
        Ok(Self::with_transport(config, transport))
    }

    /// Creates a client over an existing transport.
    #[must_use]
    pub fn with_transport(config: Config, transport: HttpTransport) -> Self {
        Self { config, transport }
    }

    /// Client configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds a request for `path` under the configured base URL.
    ///
    /// `payload`, when given, becomes the JSON body. `query` pairs are
    /// appended URL-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `path` cannot be joined to the base URL
    /// or [`Error::Serialization`] if `payload` cannot be encoded.
    pub fn new_request<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&T>,
        query: &[(&str, &str)],
    ) -> Result<Request> {
        let url = Url::parse(self.config.base_url())?.join(path)?;
        let request = Request::new(method, url).query(query);
        match payload {
            Some(payload) => request.json(payload),
            None => Ok(request),
        }
    }

    /// Sends `request` and decodes a successful body into `T`.
    ///
    /// # Errors
    ///
    /// - [`Error::Http`] if the request could not be completed
    /// - [`Error::EmptyResponse`] for a non-2xx status with an empty body
    /// - [`Error::Gateway`] for a non-2xx status with an error body
    /// - [`Error::Deserialization`] if a body does not decode
    pub async fn send<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let response = self.round_trip(request).await?;

        if self.config.debug() {
            info!(
                status = response.status,
                bytes = response.body.len(),
                "RozetkaPay response received"
            );
        }

        from_object_slice(&response.body).map_err(Error::Deserialization)
    }

    /// Sends `request`, discarding a successful body.
    ///
    /// # Errors
    ///
    /// Same as [`Client::send`], except that success bodies are never decoded.
    pub async fn send_without_response(&self, request: Request) -> Result<()> {
        self.round_trip(request).await.map(drop)
    }

    /// Creates a payment.
    ///
    /// Unset `callback_url`/`result_url` are taken from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] without sending anything if `mode` is
    /// `direct` and `customer.payment_method` is missing, otherwise any error of
    /// [`Client::send`].
    #[instrument(skip(self, schema), fields(external_id = %schema.external_id))]
    pub async fn create_payment(&self, schema: &CreatePaymentSchema) -> Result<PaymentResponse> {
        schema.validate()?;

        let mut schema = schema.clone();
        self.config.apply_default_urls(&mut schema.callback_url, &mut schema.result_url);

        let request = self.new_request(Method::POST, CREATE_PAYMENT_PATH, Some(&schema), &[])?;
        self.send(request).await
    }

    /// Confirms a two-step payment.
    ///
    /// # Errors
    ///
    /// Any error of [`Client::send`].
    #[instrument(skip(self, schema), fields(external_id = %schema.external_id))]
    pub async fn confirm_payment(&self, schema: &ConfirmPaymentSchema) -> Result<PaymentResponse> {
        let request = self.new_request(Method::POST, CONFIRM_PAYMENT_PATH, Some(schema), &[])?;
        self.send(request).await
    }

    /// Cancels a two-step payment.
    ///
    /// # Errors
    ///
    /// Any error of [`Client::send`].
    #[instrument(skip(self, schema), fields(external_id = %schema.external_id))]
    pub async fn cancel_payment(&self, schema: &CancelPaymentSchema) -> Result<PaymentResponse> {
        let request = self.new_request(Method::POST, CANCEL_PAYMENT_PATH, Some(schema), &[])?;
        self.send(request).await
    }

    /// Refunds a payment, fully or partially.
    ///
    /// # Errors
    ///
    /// Any error of [`Client::send`].
    #[instrument(skip(self, schema), fields(external_id = %schema.external_id))]
    pub async fn refund_payment(&self, schema: &RefundPaymentSchema) -> Result<PaymentResponse> {
        let request = self.new_request(Method::POST, REFUND_PAYMENT_PATH, Some(schema), &[])?;
        self.send(request).await
    }

    /// Fetches the state of a payment and all its operations.
    ///
    /// # Errors
    ///
    /// Any error of [`Client::send`].
    #[instrument(skip(self))]
    pub async fn get_payment_info(&self, external_id: &str) -> Result<PaymentInfoResponse> {
        let request = self.new_request::<()>(
            Method::GET,
            PAYMENT_INFO_PATH,
            None,
            &[("external_id", external_id)],
        )?;
        self.send(request).await
    }

    /// Asks the gateway to deliver a payment callback again.
    ///
    /// # Errors
    ///
    /// Any error of [`Client::send_without_response`].
    #[instrument(skip(self, schema), fields(external_id = %schema.external_id))]
    pub async fn resend_payment_callback(&self, schema: &PaymentCallbackResendSchema) -> Result<()> {
        let request = self.new_request(Method::POST, RESEND_CALLBACK_PATH, Some(schema), &[])?;
        self.send_without_response(request).await
    }

    /// Saves a payment method to the wallet of `customer_id`.
    ///
    /// Unset `callback_url`/`result_url` are taken from the configuration.
    ///
    /// # Errors
    ///
    /// Any error of [`Client::send`].
    #[instrument(skip(self, schema))]
    pub async fn add_wallet_customer_payment(
        &self,
        customer_id: &str,
        schema: &AddWalletCustomerSchema,
    ) -> Result<AddWalletCustomerResponse> {
        let mut schema = schema.clone();
        self.config.apply_default_urls(&mut schema.callback_url, &mut schema.result_url);

        let request = self.new_request(
            Method::POST,
            WALLET_PATH,
            Some(&schema),
            &[("external_id", customer_id)],
        )?;
        self.send(request).await
    }

    /// Lists the saved payment methods of `customer_id`.
    ///
    /// # Errors
    ///
    /// Any error of [`Client::send`].
    #[instrument(skip(self))]
    pub async fn get_wallet_customer_payment_info(
        &self,
        customer_id: &str,
    ) -> Result<GetWalletInfoResponse> {
        let request = self.new_request::<()>(
            Method::GET,
            WALLET_PATH,
            None,
            &[("external_id", customer_id)],
        )?;
        self.send(request).await
    }

    /// Removes a saved payment method from the wallet of `customer_id`.
    ///
    /// # Errors
    ///
    /// Any error of [`Client::send`].
    #[instrument(skip(self, schema), fields(option_id = %schema.option_id))]
    pub async fn delete_wallet_customer_payment(
        &self,
        customer_id: &str,
        schema: &DeleteWalletCustomerSchema,
    ) -> Result<DeleteWalletCustomerResponse> {
        let request = self.new_request(
            Method::DELETE,
            WALLET_PATH,
            Some(schema),
            &[("external_id", customer_id)],
        )?;
        self.send(request).await
    }

    /// Decodes the body of a payment callback. No HTTP is involved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Deserialization`] if `body` is not a payment response.
    pub fn parse_callback(body: &[u8]) -> Result<PaymentResponse> {
        PaymentResponse::from_slice(body)
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut authorization = HeaderValue::from_str(&self.config.authorization_header())
            .map_err(|e| Error::Config(format!("invalid authorization header: {e}")))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::with_capacity(2);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, authorization);
        Ok(headers)
    }

    async fn round_trip(&self, request: Request) -> Result<TransportResponse> {
        let request = request.with_headers(self.headers()?);

        if self.config.debug() {
            info!(method = %request.method(), url = %request.url(), "sending RozetkaPay request");
        }

        let response = self.transport.execute(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(failure(&response))
        }
    }
}

fn failure(response: &TransportResponse) -> Error {
    let status = response.status;
    if response.body.is_empty() {
        warn!(status, "RozetkaPay returned an empty error response");
        return Error::EmptyResponse { status };
    }

    match from_object_slice::<ErrorResponse>(&response.body) {
        Ok(error) => {
            warn!(
                status,
                code = %error.code,
                message = %error.message,
                payment_id = %error.payment_id,
                kind = %error.kind,
                "RozetkaPay returned an error"
            );
            Error::Gateway { status, response: error }
        }
        Err(e) => Error::Deserialization(e),
    }
}
