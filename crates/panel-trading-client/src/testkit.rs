// crates/panel-trading-client/src/testkit.rs

//! In-memory exchange for exercising the form without a network, and a
//! log capture that formats lines the way the log file does.

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use panel_core::{OrderAck, OrderRequest, OrderResult};
use panel_exchange::Exchange;
use tracing::subscriber::DefaultGuard;

use crate::logging::LogLineFormat;

pub struct FakeExchange {
    pub symbols: Vec<String>,
    pub prices: HashMap<String, f64>,
    /// `None` accepts every order with id 4061267 / status NEW.
    pub reject_with: Option<String>,
    pub orders: Mutex<Vec<OrderRequest>>,
    pub price_calls: AtomicUsize,
}

impl FakeExchange {
    pub fn new() -> Self {
        Self {
            symbols: vec!["BTCUSDT".into(), "ETHUSDT".into(), "XRPUSDT".into()],
            prices: HashMap::from([("BTCUSDT".to_string(), 64210.1), ("ETHUSDT".to_string(), 3120.5)]),
            reject_with: None,
            orders: Mutex::new(Vec::new()),
            price_calls: AtomicUsize::new(0),
        }
    }

    pub fn rejecting(message: &str) -> Self {
        Self {
            reject_with: Some(message.to_string()),
            ..Self::new()
        }
    }

    pub fn order_count(&self) -> usize {
        self.orders.lock().unwrap().len()
    }

    pub fn last_order(&self) -> Option<OrderRequest> {
        self.orders.lock().unwrap().last().cloned()
    }

    pub fn price_call_count(&self) -> usize {
        self.price_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Exchange for FakeExchange {
    async fn list_symbols(&self) -> Vec<String> {
        self.symbols.clone()
    }

    async fn get_price(&self, symbol: &str) -> Option<f64> {
        self.price_calls.fetch_add(1, Ordering::SeqCst);
        self.prices.get(symbol).copied()
    }

    async fn place_order(&self, request: &OrderRequest) -> OrderResult {
        self.orders.lock().unwrap().push(request.clone());
        match &self.reject_with {
            Some(message) => OrderResult::failed(message.clone()),
            None => OrderResult::Accepted(OrderAck {
                order_id: "4061267".to_string(),
                status: "NEW".to_string(),
                symbol: request.symbol.clone(),
                side: request.side,
                order_type: request.order_type,
            }),
        }
    }
}

#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Thread-local subscriber writing log-file lines into memory until dropped.
pub struct LogCapture {
    buf: SharedBuf,
    _guard: DefaultGuard,
}

impl LogCapture {
    pub fn start() -> Self {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .event_format(LogLineFormat)
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .finish();

        Self {
            buf,
            _guard: tracing::subscriber::set_default(subscriber),
        }
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.buf.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }
}
