//! Client configuration.
//!
//! A [`Config`] holds everything a [`Client`](crate::Client) needs besides the
//! HTTP client itself: base URL, basic-auth credential, default callback and
//! result URLs, the debug flag and HTTP tuning.
//!
//! # Examples
//!
//! ```
//! use rozetkapay::Config;
//!
//! let config = Config::new("merchant-login", "merchant-password")
//!     .with_callback_url("https://shop.example.com/rozetkapay/callback")
//!     .with_result_url("https://shop.example.com/thanks");
//!
//! assert_eq!(config.base_url(), "https://api.rozetkapay.com/api/");
//! assert!(config.authorization_header().starts_with("Basic "));
//! assert!(!config.debug());
//! ```
//!
//! Loading from TOML:
//!
//! ```
//! use rozetkapay::Config;
//!
//! let config = Config::from_toml(
//!     r#"
//!     login = "merchant-login"
//!     password = "merchant-password"
//!     callback_url = "https://shop.example.com/rozetkapay/callback"
//!     debug = true
//!
//!     [http]
//!     timeout_secs = 60
//!     "#,
//! )?;
//!
//! assert!(config.debug());
//! assert_eq!(config.http().timeout_secs, 60);
//! # Ok::<(), rozetkapay::Error>(())
//! ```

use std::fmt;

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::Deserialize;
use url::Url;
use zeroize::Zeroize;

use crate::{
    error::{Error, Result},
    transport::HttpConfig,
};

/// Production API root.
pub const BASE_URL: &str = "https://api.rozetkapay.com/api/";

/// Public sandbox login.
pub const DEVELOPMENT_LOGIN: &str = "a6a29002-dc68-4918-bc5d-51a6094b14a8";

/// Public sandbox password.
pub const DEVELOPMENT_PASSWORD: &str = "XChz3J8qrr";

/// Base64 `login:password` token.
#[derive(Clone, PartialEq, Eq)]
struct BasicAuth(String);

impl BasicAuth {
    fn encode(login: &str, password: &str) -> Self {
        let mut raw = format!("{login}:{password}");
        let token = STANDARD.encode(raw.as_bytes());
        raw.zeroize();
        Self(token)
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BasicAuth(<redacted>)")
    }
}

impl Drop for BasicAuth {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Gateway connection settings.
///
/// Immutable once built: the `with_*` methods consume and return the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
    basic_auth: BasicAuth,
    callback_url: Option<String>,
    result_url: Option<String>,
    debug: bool,
    http: HttpConfig,
}

impl Config {
    /// Production configuration for the given merchant credentials.
    #[must_use]
    pub fn new(login: &str, password: &str) -> Self {
        Self {
            base_url: BASE_URL.to_owned(),
            basic_auth: BasicAuth::encode(login, password),
            callback_url: None,
            result_url: None,
            debug: false,
            http: HttpConfig::default(),
        }
    }

    /// Configuration with the public sandbox credentials and debug tracing on.
    #[must_use]
    pub fn development() -> Self {
        Self::new(DEVELOPMENT_LOGIN, DEVELOPMENT_PASSWORD).with_debug(true)
    }

    /// Loads a configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the document does not parse, or any error
    /// of [`Config::try_from`] for its values.
    pub fn from_toml(source: &str) -> Result<Self> {
        let source: ConfigSource =
            toml::from_str(source).map_err(|e| Error::Config(e.to_string()))?;
        Self::try_from(source)
    }

    /// Default callback address for operations that take one.
    #[must_use]
    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    /// Default payer redirect address after payment.
    #[must_use]
    pub fn with_result_url(mut self, url: impl Into<String>) -> Self {
        self.result_url = Some(url.into());
        self
    }

    /// Enables request/response trace events.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Points the client at another API root, e.g. a staging host.
    ///
    /// A trailing `/` is added when missing so request paths join under it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `url` does not parse, or
    /// [`Error::Config`] if it cannot have paths joined to it.
    pub fn with_base_url(mut self, url: &str) -> Result<Self> {
        let mut parsed = Url::parse(url)?;
        if parsed.cannot_be_a_base() {
            return Err(Error::Config(format!("base URL cannot have paths: {url}")));
        }
        if !parsed.path().ends_with('/') {
            let path = format!("{}/", parsed.path());
            parsed.set_path(&path);
        }
        self.base_url = parsed.into();
        Ok(self)
    }

    /// HTTP tuning used when the client builds its own transport.
    #[must_use]
    pub fn with_http(mut self, http: HttpConfig) -> Self {
        self.http = http;
        self
    }

    /// API root, always ending with `/`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base64 `login:password` token.
    #[must_use]
    pub fn basic_auth(&self) -> &str {
        &self.basic_auth.0
    }

    /// `Authorization` header value.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Basic {}", self.basic_auth.0)
    }

    /// Default callback URL.
    #[must_use]
    pub fn callback_url(&self) -> Option<&str> {
        self.callback_url.as_deref()
    }

    /// Default result URL.
    #[must_use]
    pub fn result_url(&self) -> Option<&str> {
        self.result_url.as_deref()
    }

    /// Whether debug trace events are emitted.
    #[must_use]
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// HTTP tuning.
    #[must_use]
    pub fn http(&self) -> &HttpConfig {
        &self.http
    }

    /// Fills unset callback/result URLs from the defaults.
    pub(crate) fn apply_default_urls(
        &self,
        callback_url: &mut Option<String>,
        result_url: &mut Option<String>,
    ) {
        if callback_url.is_none() {
            callback_url.clone_from(&self.callback_url);
        }
        if result_url.is_none() {
            result_url.clone_from(&self.result_url);
        }
    }
}

/// Deserializable form of [`Config`].
///
/// ```toml
/// login = "merchant-login"
/// password = "merchant-password"
/// base_url = "https://api.rozetkapay.com/api/"
/// callback_url = "https://shop.example.com/callback"
/// result_url = "https://shop.example.com/thanks"
/// debug = false
///
/// [http]
/// timeout_secs = 30
/// ```
#[derive(Clone, Deserialize)]
pub struct ConfigSource {
    /// Merchant login.
    pub login: String,
    /// Merchant password.
    pub password: String,
    /// API root; production when absent.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Default callback URL.
    #[serde(default)]
    pub callback_url: Option<String>,
    /// Default result URL.
    #[serde(default)]
    pub result_url: Option<String>,
    /// Debug trace events.
    #[serde(default)]
    pub debug: bool,
    /// HTTP tuning.
    #[serde(default)]
    pub http: HttpConfig,
}

impl fmt::Debug for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigSource")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("callback_url", &self.callback_url)
            .field("result_url", &self.result_url)
            .field("debug", &self.debug)
            .field("http", &self.http)
            .finish()
    }
}

impl Drop for ConfigSource {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

impl TryFrom<ConfigSource> for Config {
    type Error = Error;

    fn try_from(source: ConfigSource) -> Result<Self> {
        source.http.validate()?;

        let mut config = Self::new(&source.login, &source.password)
            .with_debug(source.debug)
            .with_http(source.http.clone());
        if let Some(base_url) = &source.base_url {
            config = config.with_base_url(base_url)?;
        }
        config.callback_url.clone_from(&source.callback_url);
        config.result_url.clone_from(&source.result_url);
        Ok(config)
    }
}
