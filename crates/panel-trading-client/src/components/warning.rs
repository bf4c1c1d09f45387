// crates/panel-trading-client/src/components/warning.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::Warning;

/// Modal dialog for rejected input.
pub fn draw_warning(f: &mut Frame, area: Rect, warning: &Warning) {
    f.render_widget(Clear, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            warning.message.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("[Enter] OK", Style::default().fg(Color::Gray))),
    ];

    let dialog = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", warning.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );

    f.render_widget(dialog, area);
}
