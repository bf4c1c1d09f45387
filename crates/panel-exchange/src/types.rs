use async_trait::async_trait;
use panel_core::{OrderRequest, OrderResult};

/// Outcome of the startup connection check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Not checked yet.
    Unknown,
    Connected,
    Failed(String),
}

impl ConnectionStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionStatus::Connected)
    }
}

/// The three calls the order-entry form makes.
///
/// Implementations must not fail: errors are logged and turned into the
/// sentinel each method documents.
#[async_trait]
pub trait Exchange: Send + Sync {
    /// Tradable symbols, ascending. Empty on failure.
    async fn list_symbols(&self) -> Vec<String>;

    /// Latest traded price. `None` on failure.
    async fn get_price(&self, symbol: &str) -> Option<f64>;

    /// Submit an order. Failures come back as `OrderResult::Failed`.
    async fn place_order(&self, request: &OrderRequest) -> OrderResult;
}
