//! Order ticket formatting for the output log.
//!
//! Accepted order:
//!
//! ```text
//! --- NEW ORDER ---
//! Symbol: BTCUSDT
//! Order ID: 4061267
//! Side: SELL
//! Quantity: 0.01
//! Type: LIMIT
//! Status: NEW
//! Price: 50000.0
//! -----------------
//! ```
//!
//! The `Price` line only appears for limit orders. A failed order is a
//! single line, `Order Fail : <message>`, followed by the same rule.

use crate::order::OrderRequest;
use crate::result::OrderResult;

pub const TICKET_RULE: &str = "-----------------";

/// Render a quantity or price the way the operator typed it: shortest
/// round-trip decimal, never in exponent form, always with a fractional
/// part (`0.01`, `0.00001`, `50000.0`). Digits match what goes on the wire.
pub fn format_amount(value: f64) -> String {
    let mut out = value.to_string();
    if value.is_finite() && !out.contains('.') {
        out.push_str(".0");
    }
    out
}

/// Render the output-log block for one submission.
pub fn format_ticket(request: &OrderRequest, result: &OrderResult) -> String {
    let mut out = String::new();

    match result {
        OrderResult::Accepted(ack) => {
            out.push_str("--- NEW ORDER ---\n");
            out.push_str(&format!("Symbol: {}\n", request.symbol));
            out.push_str(&format!("Order ID: {}\n", ack.order_id));
            out.push_str(&format!("Side: {}\n", request.side));
            out.push_str(&format!("Quantity: {}\n", format_amount(request.quantity)));
            out.push_str(&format!("Type: {}\n", request.order_type));
            out.push_str(&format!("Status: {}\n", ack.status));
            if let Some(price) = request.price {
                out.push_str(&format!("Price: {}\n", format_amount(price)));
            }
        }
        OrderResult::Failed { message } => {
            out.push_str(&format!("Order Fail : {}\n", message));
        }
    }

    out.push_str(TICKET_RULE);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_keep_a_fractional_part() {
        assert_eq!(format_amount(0.01), "0.01");
        assert_eq!(format_amount(50000.0), "50000.0");
        assert_eq!(format_amount(3.5), "3.5");
    }

    #[test]
    fn tiny_and_large_amounts_stay_decimal() {
        assert_eq!(format_amount(0.00001), "0.00001");
        assert_eq!(format_amount(0.000001), "0.000001");
        assert_eq!(format_amount(100000.0), "100000.0");
        assert_eq!(format_amount(1e16), "10000000000000000.0");
    }

    #[test]
    fn ticket_quantity_matches_typed_digits() {
        let req = OrderRequest::market("BTCUSDT", crate::Side::Buy, 0.00001).unwrap();
        let ticket = format_ticket(&req, &OrderResult::failed("rejected"));
        assert!(ticket.starts_with("Order Fail : rejected"));

        let ack = crate::OrderAck {
            order_id: "1".into(),
            status: "NEW".into(),
            symbol: req.symbol.clone(),
            side: req.side,
            order_type: req.order_type,
        };
        let ticket = format_ticket(&req, &OrderResult::Accepted(ack));
        assert!(ticket.contains("Quantity: 0.00001\n"));
    }
}
