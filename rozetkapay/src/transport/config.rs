//! Connection settings for calls to the RozetkaPay gateway.
//!
//! Read from the `[http]` table of the client TOML; every key is optional.

use std::{ops::RangeInclusive, time::Duration};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Accepted `timeout_secs` values.
const TIMEOUT_SECS: RangeInclusive<u64> = 1..=300;

/// Accepted `connect_timeout_secs` values.
const CONNECT_TIMEOUT_SECS: RangeInclusive<u64> = 1..=60;

/// How the client reaches the gateway.
///
/// # Examples
///
/// ```toml
/// [http]
/// timeout_secs = 60          # a slow 3-D Secure confirmation
/// connect_timeout_secs = 5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Idle keep-alive connections kept open to the gateway host.
    pub pool_max_idle_per_host: usize,

    /// Upper bound on a whole gateway call, from connect to the last body byte.
    pub timeout_secs: u64,

    /// Upper bound on establishing the TLS connection.
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { pool_max_idle_per_host: 8, timeout_secs: 30, connect_timeout_secs: 10 }
    }
}

impl HttpConfig {
    /// Checks the timeouts before a transport is built from them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the offending key when `timeout_secs`
    /// is outside 1..=300 or `connect_timeout_secs` is outside 1..=60.
    pub fn validate(&self) -> Result<()> {
        check_range("http.timeout_secs", self.timeout_secs, &TIMEOUT_SECS)?;
        check_range("http.connect_timeout_secs", self.connect_timeout_secs, &CONNECT_TIMEOUT_SECS)
    }

    /// Gateway call timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connection timeout.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

fn check_range(key: &str, value: u64, range: &RangeInclusive<u64>) -> Result<()> {
    if range.contains(&value) {
        return Ok(());
    }
    Err(Error::Config(format!(
        "{key} = {value} is out of range, expected {}..={} seconds",
        range.start(),
        range.end()
    )))
}
