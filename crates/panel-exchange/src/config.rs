//! Configuration for the exchange client.
//!
//! Everything comes from environment variables (a local `.env` file is
//! loaded into the environment by the binary before this runs):
//!
//! - `BINANCE_API_KEY`      (default: empty)
//! - `BINANCE_SECRET_KEY`   (default: empty)
//! - `BINANCE_FUTURES_URL`  (default: the futures test environment)
//! - `BINANCE_RECV_WINDOW`  (default: "5000", milliseconds)
//!
//! Missing credentials are not an error: public market data still works
//! and the connection check reports the failure.

use std::env;
use std::fmt;
use std::str::FromStr;

use panel_protocol::wire_types::{DEFAULT_RECV_WINDOW_MS, TESTNET_BASE_URL};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// API key and secret, loaded once per process.
#[derive(Clone, Default)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.api_key.is_empty() || self.api_secret.is_empty()
    }
}

// The secret never reaches a log line.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Exchange client configuration.
#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    pub credentials: Credentials,

    /// REST base URL, without a trailing slash.
    pub base_url: String,

    /// Validity window for signed requests.
    pub recv_window_ms: u64,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            base_url: TESTNET_BASE_URL.to_string(),
            recv_window_ms: DEFAULT_RECV_WINDOW_MS,
        }
    }
}

impl ExchangeConfig {
    /// Construct an `ExchangeConfig` from environment variables, falling
    /// back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ExchangeConfig::from_env`] over an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("BINANCE_API_KEY").unwrap_or_default();
        let api_secret = lookup("BINANCE_SECRET_KEY").unwrap_or_default();
        let base_url = lookup("BINANCE_FUTURES_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| TESTNET_BASE_URL.to_string());
        let recv_window_ms =
            read_or_default(&lookup, "BINANCE_RECV_WINDOW", DEFAULT_RECV_WINDOW_MS)?;

        Ok(ExchangeConfig {
            credentials: Credentials::new(api_key.trim(), api_secret.trim()),
            base_url,
            recv_window_ms,
        })
    }
}

fn read_or_default<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(val) => val
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { key, value: val }),
        None => Ok(default),
    }
}
