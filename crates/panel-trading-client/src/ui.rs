// crates/panel-trading-client/src/ui.rs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use panel_exchange::ConnectionStatus;

use crate::app::App;
use crate::components::{
    help::draw_help, order_entry::draw_order_entry, order_output::draw_order_output,
    status_bar::draw_status_bar, warning::draw_warning,
};

pub const WINDOW_TITLE: &str = "Order Entry Window";

pub fn draw(f: &mut Frame, app: &App) {
    // Main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    draw_header(f, chunks[0], app);
    draw_main_content(f, chunks[1], app);
    draw_status_bar(f, chunks[2], app);

    // Overlays, warning on top
    if app.show_help {
        draw_help(f, centered_rect(60, 70, f.size()));
    }
    if let Some(warning) = &app.warning {
        draw_warning(f, centered_rect(50, 30, f.size()), warning);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    // Left: title and connection status
    let (connection_symbol, connection_color, connection_text) = match &app.connection {
        ConnectionStatus::Connected => ("✓", Color::Green, "Connected"),
        ConnectionStatus::Failed(_) => ("✗", Color::Red, "Disconnected"),
        ConnectionStatus::Unknown => ("?", Color::Gray, "Connecting"),
    };

    let left_text = vec![
        Span::styled(WINDOW_TITLE, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(" - "),
        Span::raw(format!("{} ", connection_text)),
        Span::styled(connection_symbol, Style::default().fg(connection_color)),
    ];

    let left_paragraph =
        Paragraph::new(Line::from(left_text)).block(Block::default().borders(Borders::ALL));
    f.render_widget(left_paragraph, header_chunks[0]);

    // Right: help hints
    let help_text = "[F1]Help [Tab]Field [/]Search";
    let right_paragraph = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(right_paragraph, header_chunks[1]);
}

fn draw_main_content(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Order form
            Constraint::Percentage(55), // Order output
        ])
        .split(area);

    draw_order_entry(f, chunks[0], app);
    draw_order_output(f, chunks[1], app);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
