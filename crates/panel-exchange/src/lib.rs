//! panel-exchange
//!
//! REST client for the futures exchange.
//!
//! Every public operation contains its own failures: symbol listing
//! degrades to an empty list, price lookup to `None`, order placement to
//! `OrderResult::Failed`. Callers never see an error from this crate once
//! a client exists.

pub mod config;
pub mod types;
pub mod client;
pub mod error;

pub use client::ExchangeClient;
pub use config::{ConfigError, Credentials, ExchangeConfig};
pub use error::ExchangeError;
pub use types::{ConnectionStatus, Exchange};
