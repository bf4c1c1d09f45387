// crates/panel-trading-client/src/app.rs

use panel_core::{format_amount, format_ticket, OrderRequest, OrderResult, OrderType, Side, ValidationError};
use panel_exchange::{ConnectionStatus, Exchange};
use tracing::info;

/// Shown in place of a price that could not be fetched.
pub const PRICE_NOT_AVAILABLE: &str = "N/A";

/// Shown in the symbol selector when the exchange returned no symbols.
pub const NO_SYMBOLS_PLACEHOLDER: &str = "Error Fetching Symbols";

pub const WARNING_TITLE: &str = "Input Error";

pub enum InputMode {
    Normal,
    Editing,
}

/// Form fields, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Symbol,
    Quantity,
    OrderType,
    Price,
}

/// What the input buffer is being typed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Quantity,
    Price,
    SymbolSearch,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PriceDisplay {
    Loading,
    Price(f64),
    NotAvailable,
}

impl PriceDisplay {
    pub fn render(&self) -> String {
        match self {
            PriceDisplay::Loading => "Loading...".to_string(),
            PriceDisplay::Price(price) => format!("{:.2}", price),
            PriceDisplay::NotAvailable => PRICE_NOT_AVAILABLE.to_string(),
        }
    }
}

/// Modal warning dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub title: &'static str,
    pub message: String,
}

pub struct App {
    // Connection state
    pub connection: ConnectionStatus,

    // UI state
    pub input_mode: InputMode,
    pub focus: Field,
    pub editing: Option<EditTarget>,
    pub should_quit: bool,
    pub show_help: bool,
    pub warning: Option<Warning>,

    // Market state
    pub symbols: Vec<String>,
    pub selected_symbol: Option<usize>,
    pub live_price: PriceDisplay,

    // Order entry
    pub quantity_input: String,
    pub price_input: String,
    pub order_type: OrderType,

    // Input buffer
    pub input_buffer: String,
    pub input_cursor: usize,

    // Order output, one ticket per submission
    pub output_log: Vec<String>,
}

impl App {
    pub fn new(symbols: Vec<String>, default_symbol: &str, connection: ConnectionStatus) -> Self {
        let selected_symbol = if symbols.is_empty() {
            None
        } else {
            symbols
                .iter()
                .position(|s| s.eq_ignore_ascii_case(default_symbol))
                .or(Some(0))
        };

        Self {
            connection,
            input_mode: InputMode::Normal,
            focus: Field::Symbol,
            editing: None,
            should_quit: false,
            show_help: false,
            warning: None,
            symbols,
            selected_symbol,
            live_price: PriceDisplay::Loading,
            quantity_input: "0.01".to_string(),
            price_input: String::new(),
            order_type: OrderType::Market,
            input_buffer: String::new(),
            input_cursor: 0,
            output_log: Vec::new(),
        }
    }

    pub fn selected_symbol(&self) -> Option<&str> {
        self.selected_symbol
            .and_then(|i| self.symbols.get(i))
            .map(String::as_str)
    }

    // ------------------------------------------------------------------
    // Symbol selection. Each returns true when the selection changed, in
    // which case the caller refreshes the price.
    // ------------------------------------------------------------------

    pub fn select_next_symbol(&mut self) -> bool {
        match self.selected_symbol {
            Some(i) if i + 1 < self.symbols.len() => {
                self.selected_symbol = Some(i + 1);
                true
            }
            _ => false,
        }
    }

    pub fn select_prev_symbol(&mut self) -> bool {
        match self.selected_symbol {
            Some(i) if i > 0 => {
                self.selected_symbol = Some(i - 1);
                true
            }
            _ => false,
        }
    }

    /// Select the first symbol starting with `prefix`, case-insensitive.
    pub fn select_symbol_by_prefix(&mut self, prefix: &str) -> bool {
        let prefix = prefix.trim().to_ascii_uppercase();
        if prefix.is_empty() {
            return false;
        }

        let exact = self.symbols.iter().position(|s| *s == prefix);
        let found = exact.or_else(|| self.symbols.iter().position(|s| s.starts_with(&prefix)));
        match found {
            Some(i) if Some(i) != self.selected_symbol => {
                self.selected_symbol = Some(i);
                true
            }
            _ => false,
        }
    }

    // ------------------------------------------------------------------
    // Order type. The price field follows the selected type.
    // ------------------------------------------------------------------

    pub fn set_order_type(&mut self, order_type: OrderType) {
        self.order_type = order_type;
        if !self.price_enabled() && self.focus == Field::Price {
            self.focus = Field::OrderType;
        }
    }

    pub fn price_enabled(&self) -> bool {
        self.order_type.requires_price()
    }

    // ------------------------------------------------------------------
    // Focus
    // ------------------------------------------------------------------

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Field::Symbol => Field::Quantity,
            Field::Quantity => Field::OrderType,
            Field::OrderType if self.price_enabled() => Field::Price,
            Field::OrderType => Field::Symbol,
            Field::Price => Field::Symbol,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Field::Symbol if self.price_enabled() => Field::Price,
            Field::Symbol => Field::OrderType,
            Field::Quantity => Field::Symbol,
            Field::OrderType => Field::Quantity,
            Field::Price => Field::OrderType,
        };
    }

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    /// Begin editing the focused numeric field, pre-filled with its value.
    pub fn start_editing(&mut self) {
        let (target, current) = match self.focus {
            Field::Quantity => (EditTarget::Quantity, self.quantity_input.clone()),
            Field::Price if self.price_enabled() => (EditTarget::Price, self.price_input.clone()),
            _ => return,
        };
        self.begin_input(target, current);
    }

    pub fn start_symbol_search(&mut self) {
        self.focus = Field::Symbol;
        self.begin_input(EditTarget::SymbolSearch, String::new());
    }

    fn begin_input(&mut self, target: EditTarget, initial: String) {
        self.editing = Some(target);
        self.input_mode = InputMode::Editing;
        self.input_cursor = initial.chars().count();
        self.input_buffer = initial;
    }

    pub fn enter_char(&mut self, c: char) {
        let accepted = match self.editing {
            Some(EditTarget::Quantity) | Some(EditTarget::Price) => {
                c.is_ascii_digit() || (c == '.' && !self.input_buffer.contains('.'))
            }
            Some(EditTarget::SymbolSearch) => c.is_ascii_alphanumeric(),
            None => false,
        };
        if !accepted {
            return;
        }

        let c = c.to_ascii_uppercase();
        let byte_idx = self.byte_index();
        self.input_buffer.insert(byte_idx, c);
        self.input_cursor += 1;
    }

    pub fn delete_char(&mut self) {
        if self.input_cursor > 0 {
            self.input_cursor -= 1;
            let byte_idx = self.byte_index();
            self.input_buffer.remove(byte_idx);
        }
    }

    fn byte_index(&self) -> usize {
        self.input_buffer
            .char_indices()
            .nth(self.input_cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.input_buffer.len())
    }

    /// Commit the input buffer. Returns true if the symbol changed.
    pub fn submit_input(&mut self) -> bool {
        if !matches!(self.input_mode, InputMode::Editing) {
            return false;
        }

        let value = std::mem::take(&mut self.input_buffer);
        let changed = match self.editing {
            Some(EditTarget::Quantity) => {
                self.quantity_input = value;
                false
            }
            Some(EditTarget::Price) => {
                self.price_input = value;
                false
            }
            Some(EditTarget::SymbolSearch) => self.select_symbol_by_prefix(&value),
            None => false,
        };

        self.finish_input();
        changed
    }

    pub fn cancel_input(&mut self) {
        self.input_buffer.clear();
        self.finish_input();
    }

    fn finish_input(&mut self) {
        self.input_cursor = 0;
        self.editing = None;
        self.input_mode = InputMode::Normal;
    }

    // ------------------------------------------------------------------
    // Overlays
    // ------------------------------------------------------------------

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warning = Some(Warning {
            title: WARNING_TITLE,
            message: message.into(),
        });
    }

    pub fn dismiss_warning(&mut self) {
        self.warning = None;
    }

    // ------------------------------------------------------------------
    // Exchange-facing operations
    // ------------------------------------------------------------------

    /// Fetch the latest price for the selected symbol.
    pub async fn refresh_price(&mut self, exchange: &dyn Exchange) {
        let Some(symbol) = self.selected_symbol().map(str::to_owned) else {
            return;
        };

        self.live_price = match exchange.get_price(&symbol).await {
            Some(price) => PriceDisplay::Price(price),
            None => PriceDisplay::NotAvailable,
        };
    }

    /// Build an order request from the current form state.
    pub fn build_request(&self, side: Side) -> Result<OrderRequest, ValidationError> {
        let symbol = self.selected_symbol().unwrap_or_default();
        let quantity = parse_amount(&self.quantity_input).unwrap_or(0.0);
        let price = parse_amount(&self.price_input);

        OrderRequest::new(symbol, side, self.order_type, quantity, price)
    }

    /// Validate, place the order and append the outcome to the output log.
    ///
    /// Invalid input raises the warning dialog instead; the exchange is not
    /// called and the output log is left untouched.
    pub async fn submit(&mut self, exchange: &dyn Exchange, side: Side) {
        let request = match self.build_request(side) {
            Ok(request) => request,
            Err(e) => {
                self.warn(e.to_string());
                return;
            }
        };

        info!(
            "Placing {} | {} | qty={}",
            side,
            request.symbol,
            format_amount(request.quantity)
        );

        let result = exchange.place_order(&request).await;
        self.record_result(&request, &result);
    }

    pub fn record_result(&mut self, request: &OrderRequest, result: &OrderResult) {
        self.output_log.push(format_ticket(request, result));
    }
}

fn parse_amount(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok()
}
