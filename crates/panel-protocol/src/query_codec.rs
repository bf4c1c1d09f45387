// crates/panel-protocol/src/query_codec.rs

//! Query-string codec.
//!
//! Request parameters (`OrderRequest` → ordered `key=value` pairs):
//!
//! - Market order:
//!   `symbol, side, type=MARKET, quantity`
//!
//! - Limit order:
//!   `symbol, side, type=LIMIT, quantity, price, timeInForce=GTC`
//!
//! Signed requests append `recvWindow` and `timestamp` before the pairs are
//! encoded and signed; see [`crate::signing`].
//!
//! Response decoding (JSON body → panel value):
//!
//! - exchange info → symbol names, ascending
//! - ticker price  → `f64`
//! - order         → `OrderAck` echoing the request

use panel_core::{OrderAck, OrderRequest, OrderType};
use url::form_urlencoded;

use crate::error::ProtocolError;
use crate::wire_types::{ExchangeInfo, OrderResponse, TickerPrice, TIME_IN_FORCE_GTC};

/// Parameters of a new-order request, in send order.
pub fn order_params(req: &OrderRequest) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("symbol", req.symbol.clone()),
        ("side", req.side.as_str().to_string()),
        ("type", req.order_type.as_str().to_string()),
        ("quantity", wire_amount(req.quantity)),
    ];

    if req.order_type == OrderType::Limit {
        if let Some(price) = req.price {
            params.push(("price", wire_amount(price)));
            params.push(("timeInForce", TIME_IN_FORCE_GTC.to_string()));
        }
    }

    params
}

/// Percent-encode pairs into `k1=v1&k2=v2`, preserving order.
pub fn encode_query<K, V>(params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
        .finish()
}

/// All symbol names in ascending lexical order.
///
/// Duplicates are kept: the list is what the exchange reported.
pub fn decode_symbols(info: ExchangeInfo) -> Vec<String> {
    let mut symbols: Vec<String> = info.symbols.into_iter().map(|s| s.symbol).collect();
    symbols.sort();
    symbols
}

pub fn decode_price(ticker: &TickerPrice) -> Result<f64, ProtocolError> {
    ticker
        .price
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| ProtocolError::InvalidNumber {
            field: "price",
            value: ticker.price.clone(),
        })
}

/// Acknowledgement for `req`; id and status are taken verbatim.
pub fn decode_order_ack(resp: OrderResponse, req: &OrderRequest) -> OrderAck {
    OrderAck {
        order_id: resp.order_id.to_string(),
        status: resp.status,
        symbol: resp.symbol.unwrap_or_else(|| req.symbol.clone()),
        side: req.side,
        order_type: req.order_type,
    }
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

// Shortest round-trip decimal: 0.01 -> "0.01", 50000.0 -> "50000".
fn wire_amount(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire_types::SymbolInfo;
    use panel_core::Side;

    #[test]
    fn market_params_carry_no_price() {
        let req = OrderRequest::market("BTCUSDT", Side::Buy, 0.01).unwrap();
        let params = order_params(&req);
        assert_eq!(encode_query(&params), "symbol=BTCUSDT&side=BUY&type=MARKET&quantity=0.01");
    }

    #[test]
    fn limit_params_carry_price_and_gtc() {
        let req = OrderRequest::limit("BTCUSDT", Side::Sell, 0.01, 50000.0).unwrap();
        let params = order_params(&req);
        assert_eq!(
            encode_query(&params),
            "symbol=BTCUSDT&side=SELL&type=LIMIT&quantity=0.01&price=50000&timeInForce=GTC"
        );
    }

    #[test]
    fn symbols_sorted_and_duplicates_kept() {
        let info = ExchangeInfo {
            symbols: ["XRPUSDT", "BTCUSDT", "ETHUSDT", "BTCUSDT"]
                .iter()
                .map(|s| SymbolInfo {
                    symbol: s.to_string(),
                })
                .collect(),
        };
        assert_eq!(
            decode_symbols(info),
            vec!["BTCUSDT", "BTCUSDT", "ETHUSDT", "XRPUSDT"]
        );
    }

    #[test]
    fn price_strings_decode() {
        let t = |p: &str| TickerPrice {
            symbol: "BTCUSDT".into(),
            price: p.into(),
        };
        assert_eq!(decode_price(&t("64210.10")), Ok(64210.10));
        assert_eq!(decode_price(&t("0.00000000")), Ok(0.0));
        assert!(decode_price(&t("n/a")).is_err());
        assert!(decode_price(&t("inf")).is_err());
    }

    #[test]
    fn order_body_decodes_with_unknown_fields() {
        let body = r#"{
            "orderId": 4061267,
            "symbol": "BTCUSDT",
            "status": "NEW",
            "clientOrderId": "x-abc",
            "price": "0",
            "avgPrice": "0.00000",
            "origQty": "0.010",
            "side": "BUY",
            "type": "MARKET",
            "updateTime": 1700000000000
        }"#;
        let resp: OrderResponse = serde_json::from_str(body).unwrap();
        let req = OrderRequest::market("BTCUSDT", Side::Buy, 0.01).unwrap();
        let ack = decode_order_ack(resp, &req);
        assert_eq!(ack.order_id, "4061267");
        assert_eq!(ack.status, "NEW");
        assert_eq!(ack.symbol, "BTCUSDT");
    }
}
