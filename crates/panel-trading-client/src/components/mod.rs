// crates/panel-trading-client/src/components/mod.rs

pub mod help;
pub mod order_entry;
pub mod order_output;
pub mod status_bar;
pub mod warning;
