//! Endpoints, constants and JSON bodies of the USD-M futures REST API.
//!
//! Only the fields the panel reads are modelled; everything else in a
//! response is ignored by serde.

use serde::Deserialize;

/// Futures test environment.
pub const TESTNET_BASE_URL: &str = "https://testnet.binancefuture.com";

/// Exchange metadata: every listed instrument.
pub const EXCHANGE_INFO_PATH: &str = "/fapi/v1/exchangeInfo";

/// Latest traded price for one symbol.
pub const TICKER_PRICE_PATH: &str = "/fapi/v1/ticker/price";

/// New order (signed).
pub const ORDER_PATH: &str = "/fapi/v1/order";

/// Account snapshot (signed). Used as the connection check.
pub const ACCOUNT_PATH: &str = "/fapi/v2/account";

/// Header carrying the API key on signed requests.
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Default validity window of a signed request, in milliseconds.
pub const DEFAULT_RECV_WINDOW_MS: u64 = 5000;

/// Good-til-cancelled, the only duration the panel sends for limit orders.
pub const TIME_IN_FORCE_GTC: &str = "GTC";

/// `GET /fapi/v1/exchangeInfo`
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeInfo {
    #[serde(default)]
    pub symbols: Vec<SymbolInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SymbolInfo {
    pub symbol: String,
}

/// `GET /fapi/v1/ticker/price?symbol=...`
///
/// Prices travel as decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerPrice {
    pub symbol: String,
    pub price: String,
}

/// `POST /fapi/v1/order`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: i64,
    pub status: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// `GET /fapi/v2/account`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSnapshot {
    #[serde(default)]
    pub can_trade: Option<bool>,
    #[serde(default)]
    pub total_wallet_balance: Option<String>,
}

/// Error body returned with any non-success status, e.g.
/// `{"code":-1121,"msg":"Invalid symbol."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub code: i64,
    pub msg: String,
}
