//! panel-protocol
//!
//! Wire-level encoding/decoding for the futures REST API.
//!
//! This crate turns logical panel values (`panel_core::OrderRequest`,
//! `OrderAck`) into query strings and back out of JSON bodies.
//!
//! - [`wire_types`]  : endpoints, constants and JSON bodies
//! - [`query_codec`] : request parameters and response decoding
//! - [`signing`]     : HMAC-SHA256 signatures for private endpoints

pub mod wire_types;
pub mod query_codec;
pub mod signing;

mod error;

pub use error::ProtocolError;

pub use query_codec::{
    decode_order_ack,
    decode_price,
    decode_symbols,
    encode_query,
    order_params,
};

pub use signing::sign;
