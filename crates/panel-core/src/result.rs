//! What comes back from the exchange boundary for a submitted order.
//!
//! The exchange client never raises: every submission ends in exactly one
//! of these variants.

use crate::order_type::OrderType;
use crate::side::Side;

/// Exchange acknowledgement of a new order.
///
/// `order_id` and `status` are the exchange's values, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderAck {
    pub order_id: String,
    pub status: String,
    pub symbol: String,
    pub side: Side,
    pub order_type: OrderType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderResult {
    Accepted(OrderAck),
    Failed { message: String },
}

impl OrderResult {
    pub fn failed(message: impl Into<String>) -> Self {
        OrderResult::Failed {
            message: message.into(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, OrderResult::Accepted(_))
    }
}
