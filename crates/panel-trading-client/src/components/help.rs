// crates/panel-trading-client/src/components/help.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

const SHORTCUTS: &[(&str, Color, &str)] = &[
    ("B/b", Color::Green, " - Place Buy Order"),
    ("S/s", Color::Red, " - Place Sell Order"),
    ("M/m", Color::Yellow, " - Market Order"),
    ("T/t", Color::Blue, " - Limit Order"),
    ("Tab", Color::Blue, " - Next Field"),
    ("Shift+Tab", Color::Blue, " - Previous Field"),
    ("↑/k ↓/j", Color::White, " - Change Symbol"),
    ("←/h →/l", Color::White, " - Change Order Type"),
    ("Enter", Color::Cyan, " - Edit Quantity / Price"),
    ("/", Color::Yellow, " - Search Symbol"),
    ("F1", Color::Gray, " - Toggle Help"),
    ("Q/q", Color::Red, " - Quit"),
];

pub fn draw_help(f: &mut Frame, area: Rect) {
    // Clear the area first for the overlay
    f.render_widget(Clear, area);

    let help_items: Vec<ListItem> = SHORTCUTS
        .iter()
        .map(|(key, color, action)| {
            ListItem::new(Line::from(vec![
                Span::styled(*key, Style::default().fg(*color).add_modifier(Modifier::BOLD)),
                Span::raw(*action),
            ]))
        })
        .collect();

    let help_list = List::new(help_items).block(
        Block::default()
            .title(" Help - Keyboard Shortcuts ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(help_list, area);

    if area.height < 3 {
        return;
    }

    let footer = Paragraph::new("Press F1 or ESC to close help")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    let footer_area = Rect {
        x: area.x + 1,
        y: area.y + area.height - 2,
        width: area.width.saturating_sub(2),
        height: 1,
    };

    f.render_widget(footer, footer_area);
}
