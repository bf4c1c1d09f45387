// crates/panel-trading-client/src/components/order_entry.rs

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use panel_core::OrderType;

use crate::app::{App, EditTarget, Field, PriceDisplay, NO_SYMBOLS_PLACEHOLDER};

pub fn draw_order_entry(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Order Entry ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Symbol
            Constraint::Length(2), // Market price
            Constraint::Length(2), // Quantity
            Constraint::Length(2), // Order type
            Constraint::Length(2), // Price
            Constraint::Min(0),
            Constraint::Length(3), // Buy / Sell
        ])
        .split(inner);

    // Symbol
    let symbol_value = match app.selected_symbol() {
        Some(symbol) => Span::styled(
            format!("< {} >", symbol),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(NO_SYMBOLS_PLACEHOLDER, Style::default().fg(Color::Red)),
    };
    let symbol_value = if app.editing == Some(EditTarget::SymbolSearch) {
        editing_span(&app.input_buffer)
    } else {
        symbol_value
    };
    render_row(f, chunks[0], app, Field::Symbol, "Symbol", vec![symbol_value]);

    // Market price
    let price_style = match app.live_price {
        PriceDisplay::Price(_) => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        PriceDisplay::Loading => Style::default().fg(Color::Gray),
        PriceDisplay::NotAvailable => Style::default().fg(Color::Red),
    };
    let market_price = Paragraph::new(Line::from(vec![
        Span::raw(label("Market Price")),
        Span::styled(app.live_price.render(), price_style),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(market_price, chunks[1]);

    // Quantity
    let qty_value = if app.editing == Some(EditTarget::Quantity) {
        editing_span(&app.input_buffer)
    } else {
        Span::styled(app.quantity_input.as_str(), Style::default().fg(Color::Cyan))
    };
    render_row(f, chunks[2], app, Field::Quantity, "Quantity", vec![qty_value]);

    // Order type, radio style
    let type_spans = [OrderType::Market, OrderType::Limit]
        .into_iter()
        .map(|ty| {
            let (mark, style) = if app.order_type == ty {
                ("(•) ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            } else {
                ("( ) ", Style::default().fg(Color::Gray))
            };
            Span::styled(format!("{}{}  ", mark, ty), style)
        })
        .collect();
    render_row(f, chunks[3], app, Field::OrderType, "Order Type", type_spans);

    // Price, inert for market orders
    let price_value = if !app.price_enabled() {
        Span::styled(
            if app.price_input.is_empty() { "-" } else { app.price_input.as_str() },
            Style::default().fg(Color::DarkGray),
        )
    } else if app.editing == Some(EditTarget::Price) {
        editing_span(&app.input_buffer)
    } else {
        Span::styled(app.price_input.as_str(), Style::default().fg(Color::Cyan))
    };
    render_row(f, chunks[4], app, Field::Price, "Price", vec![price_value]);

    // Actions
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[6]);

    let buy = Paragraph::new("[B] BUY")
        .style(Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(buy, buttons[0]);

    let sell = Paragraph::new("[S] SELL")
        .style(Style::default().fg(Color::Black).bg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(sell, buttons[1]);
}

fn render_row(f: &mut Frame, area: Rect, app: &App, field: Field, name: &str, value: Vec<Span>) {
    let label_style = if app.focus == field {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if field == Field::Price && !app.price_enabled() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let mut spans = vec![Span::styled(label(name), label_style)];
    spans.extend(value);

    let row = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(row, area);
}

fn label(name: &str) -> String {
    format!("{:<14}", format!("{}:", name))
}

fn editing_span(buffer: &str) -> Span<'_> {
    Span::styled(
        format!("{}_", buffer),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::SLOW_BLINK),
    )
}
