// crates/panel-trading-client/src/input.rs

//! Keyboard dispatch.
//!
//! Exchange calls triggered by a key (submit, price refresh after a symbol
//! change) are awaited inline on the UI loop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use panel_core::{OrderType, Side};
use panel_exchange::Exchange;

use crate::app::{App, Field, InputMode};

pub async fn handle_key(app: &mut App, exchange: &dyn Exchange, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // The warning dialog is modal.
    if app.warning.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_warning();
        }
        return;
    }

    if app.show_help {
        if matches!(key.code, KeyCode::F(1) | KeyCode::Esc) {
            app.toggle_help();
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                app.should_quit = true;
            }
            KeyCode::Tab => {
                app.focus_next();
            }
            KeyCode::BackTab => {
                app.focus_prev();
            }

            // Order entry hotkeys
            KeyCode::Char('b') | KeyCode::Char('B') => {
                app.submit(exchange, Side::Buy).await;
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                app.submit(exchange, Side::Sell).await;
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                app.set_order_type(OrderType::Market);
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                app.set_order_type(OrderType::Limit);
            }
            KeyCode::Enter => {
                app.start_editing();
            }

            // Navigation
            KeyCode::Up | KeyCode::Char('k') => {
                if app.focus == Field::Symbol && app.select_prev_symbol() {
                    app.refresh_price(exchange).await;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if app.focus == Field::Symbol && app.select_next_symbol() {
                    app.refresh_price(exchange).await;
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if app.focus == Field::OrderType {
                    app.set_order_type(OrderType::Market);
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if app.focus == Field::OrderType {
                    app.set_order_type(OrderType::Limit);
                }
            }

            // Symbol switching
            KeyCode::Char('/') => {
                app.start_symbol_search();
            }

            KeyCode::F(1) => {
                app.toggle_help();
            }

            _ => {}
        },

        InputMode::Editing => match key.code {
            KeyCode::Enter => {
                if app.submit_input() {
                    app.refresh_price(exchange).await;
                }
            }
            KeyCode::Esc => {
                app.cancel_input();
            }
            KeyCode::Backspace => {
                app.delete_char();
            }
            KeyCode::Char(c) => {
                app.enter_char(c);
            }
            _ => {}
        },
    }
}
