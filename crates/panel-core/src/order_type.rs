//! Order type (Market vs Limit).
//!
//! A limit order is the only kind that carries a price; the panel keeps
//! its price field enabled exactly when `requires_price()` is true.

use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum OrderType {
    #[default]
    Market,
    Limit,
}

impl OrderType {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderType::Market => "MARKET",
            OrderType::Limit => "LIMIT",
        }
    }

    pub fn requires_price(self) -> bool {
        matches!(self, OrderType::Limit)
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
