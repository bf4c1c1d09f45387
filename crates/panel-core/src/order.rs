//! An order request as the panel submits it to the exchange.
//!
//! Requests are built fresh for every submission and only through
//! [`OrderRequest::new`], so a value of this type has already passed local
//! validation:
//! - the symbol is non-empty and upper-cased,
//! - `0 < quantity <= MAX_QUANTITY`,
//! - a limit order carries `0 < price <= MAX_LIMIT_PRICE`,
//! - a market order carries no price at all.

use crate::error::ValidationError;
use crate::order_type::OrderType;
use crate::side::Side;

/// Upper bound on order quantity accepted by the panel.
pub const MAX_QUANTITY: f64 = 100_000.0;

/// Upper bound on a limit price accepted by the panel.
pub const MAX_LIMIT_PRICE: f64 = 1_000_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub symbol: String,
    pub side: Side,
    pub order_type: OrderType,
    pub quantity: f64,
    /// `Some` exactly when `order_type` is `Limit`.
    pub price: Option<f64>,
}

impl OrderRequest {
    /// Validate form input and build a request.
    ///
    /// `price` is whatever the price field currently holds; it is ignored
    /// for market orders, where the field is inert.
    pub fn new(
        symbol: &str,
        side: Side,
        order_type: OrderType,
        quantity: f64,
        price: Option<f64>,
    ) -> Result<Self, ValidationError> {
        let symbol = symbol.trim().to_ascii_uppercase();
        if symbol.is_empty() {
            return Err(ValidationError::MissingSymbol);
        }

        // NaN fails this comparison too.
        if !(quantity > 0.0) {
            return Err(ValidationError::NonPositiveQuantity);
        }
        if quantity > MAX_QUANTITY {
            return Err(ValidationError::QuantityTooLarge { max: MAX_QUANTITY });
        }

        let price = match order_type {
            OrderType::Market => None,
            OrderType::Limit => {
                let p = price.filter(|p| *p > 0.0).ok_or(ValidationError::MissingLimitPrice)?;
                if p > MAX_LIMIT_PRICE {
                    return Err(ValidationError::LimitPriceTooLarge { max: MAX_LIMIT_PRICE });
                }
                Some(p)
            }
        };

        Ok(OrderRequest {
            symbol,
            side,
            order_type,
            quantity,
            price,
        })
    }

    pub fn market(symbol: &str, side: Side, quantity: f64) -> Result<Self, ValidationError> {
        Self::new(symbol, side, OrderType::Market, quantity, None)
    }

    pub fn limit(symbol: &str, side: Side, quantity: f64, price: f64) -> Result<Self, ValidationError> {
        Self::new(symbol, side, OrderType::Limit, quantity, Some(price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_is_trimmed_and_uppercased() {
        let req = OrderRequest::market(" btcusdt ", Side::Buy, 0.01).unwrap();
        assert_eq!(req.symbol, "BTCUSDT");
    }

    #[test]
    fn empty_symbol_is_rejected() {
        assert_eq!(
            OrderRequest::market("  ", Side::Buy, 1.0),
            Err(ValidationError::MissingSymbol)
        );
    }

    #[test]
    fn non_positive_quantities_are_rejected() {
        for q in [0.0, -0.01, -5.0, f64::NAN] {
            assert_eq!(
                OrderRequest::market("BTCUSDT", Side::Sell, q),
                Err(ValidationError::NonPositiveQuantity),
                "quantity {q} should be rejected"
            );
        }
    }

    #[test]
    fn quantity_above_bound_is_rejected() {
        assert!(matches!(
            OrderRequest::market("BTCUSDT", Side::Buy, 100_000.5),
            Err(ValidationError::QuantityTooLarge { .. })
        ));
        assert!(OrderRequest::market("BTCUSDT", Side::Buy, MAX_QUANTITY).is_ok());
    }

    #[test]
    fn market_order_drops_inert_price() {
        let req = OrderRequest::new("BTCUSDT", Side::Buy, OrderType::Market, 1.0, Some(123.0)).unwrap();
        assert_eq!(req.price, None);
    }

    #[test]
    fn limit_order_requires_positive_price() {
        assert_eq!(
            OrderRequest::new("BTCUSDT", Side::Buy, OrderType::Limit, 1.0, None),
            Err(ValidationError::MissingLimitPrice)
        );
        assert_eq!(
            OrderRequest::limit("BTCUSDT", Side::Buy, 1.0, 0.0),
            Err(ValidationError::MissingLimitPrice)
        );
        assert!(matches!(
            OrderRequest::limit("BTCUSDT", Side::Buy, 1.0, 2_000_000.0),
            Err(ValidationError::LimitPriceTooLarge { .. })
        ));

        let req = OrderRequest::limit("ethusdt", Side::Sell, 2.5, 3100.25).unwrap();
        assert_eq!(req.price, Some(3100.25));
        assert_eq!(req.order_type, OrderType::Limit);
    }
}
