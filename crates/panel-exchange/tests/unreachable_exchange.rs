// crates/panel-exchange/tests/unreachable_exchange.rs
//
// Nothing listens on port 1: every call fails at the transport layer and
// must come back as a sentinel.
mod common;

use panel_core::{OrderRequest, OrderResult, Side};
use panel_exchange::{ConnectionStatus, Credentials, Exchange, ExchangeClient, ExchangeConfig};

use common::LogCapture;

fn unreachable_config() -> ExchangeConfig {
    ExchangeConfig {
        credentials: Credentials::new("key", "secret"),
        base_url: "http://127.0.0.1:1".to_string(),
        recv_window_ms: 5000,
    }
}

#[tokio::test]
async fn connect_failure_is_not_fatal() {
    let client = ExchangeClient::connect(unreachable_config()).await;
    assert!(matches!(client.status(), ConnectionStatus::Failed(_)));
    assert!(!client.status().is_connected());
}

#[tokio::test]
async fn symbols_degrade_to_empty_list() {
    let client = ExchangeClient::new(unreachable_config());
    assert!(client.list_symbols().await.is_empty());
}

#[tokio::test]
async fn price_degrades_to_none() {
    let client = ExchangeClient::new(unreachable_config());
    assert_eq!(client.get_price("BTCUSDT").await, None);
}

#[tokio::test]
async fn order_degrades_to_failed_result() {
    let client = ExchangeClient::new(unreachable_config());
    let req = OrderRequest::market("BTCUSDT", Side::Buy, 0.01).unwrap();

    match client.place_order(&req).await {
        OrderResult::Failed { message } => assert!(!message.is_empty()),
        other => panic!("expected a failed result, got {:?}", other),
    }
}

#[tokio::test]
async fn every_degraded_call_leaves_a_log_line() {
    let logs = LogCapture::start();

    let client = ExchangeClient::connect(unreachable_config()).await;
    client.list_symbols().await;
    client.get_price("BTCUSDT").await;
    let req = OrderRequest::market("BTCUSDT", Side::Buy, 0.01).unwrap();
    client.place_order(&req).await;

    assert_eq!(logs.lines_with("Connection failed: ").len(), 1);
    assert_eq!(logs.lines_with("Failed to fetch symbols: ").len(), 1);
    assert_eq!(logs.lines_with("Failed to fetch price for BTCUSDT: ").len(), 1);
    assert_eq!(logs.lines_with("Order Failed : ").len(), 1);
}
