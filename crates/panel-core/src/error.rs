//! Local input validation errors.
//!
//! These never reach the exchange: a request that fails validation is
//! rejected before any network call, and the message is what the operator
//! sees in the warning dialog.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please select a Symbol.")]
    MissingSymbol,

    #[error("Quantity must be greater than 0.")]
    NonPositiveQuantity,

    #[error("Quantity must not exceed {max}.")]
    QuantityTooLarge { max: f64 },

    #[error("Limit price must be greater than 0.")]
    MissingLimitPrice,

    #[error("Limit price must not exceed {max}.")]
    LimitPriceTooLarge { max: f64 },
}
