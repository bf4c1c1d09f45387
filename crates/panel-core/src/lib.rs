//! panel-core
//!
//! Pure order-entry logic:
//! - sides and order types
//! - validated order requests
//! - order results as returned across the exchange boundary
//! - the ticket text appended to the order output log

pub mod side;
pub mod order_type;
pub mod order;
pub mod result;
pub mod error;
pub mod ticket;

pub use side::Side;
pub use order_type::OrderType;

pub use order::{OrderRequest, MAX_LIMIT_PRICE, MAX_QUANTITY};
pub use result::{OrderAck, OrderResult};
pub use error::ValidationError;
pub use ticket::{format_amount, format_ticket, TICKET_RULE};
