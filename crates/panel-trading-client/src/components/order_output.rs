// crates/panel-trading-client/src/components/order_output.rs

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub const OUTPUT_PLACEHOLDER: &str = "Order details will appear here...";

pub fn draw_order_output(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Order Output ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    if app.output_log.is_empty() {
        let placeholder = Paragraph::new(OUTPUT_PLACEHOLDER)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let lines: Vec<Line> = app
        .output_log
        .iter()
        .flat_map(|ticket| ticket.lines())
        .map(|line| {
            if line.starts_with("Order Fail") {
                Line::styled(line, Style::default().fg(Color::Red))
            } else {
                Line::raw(line)
            }
        })
        .collect();

    let scroll = scroll_to_bottom(lines.len(), area.height);
    let paragraph = Paragraph::new(lines).block(block).scroll((scroll, 0));
    f.render_widget(paragraph, area);
}

/// Rows to skip so the last line sits on the bottom border. Saturates at
/// `u16::MAX`.
fn scroll_to_bottom(line_count: usize, area_height: u16) -> u16 {
    let visible = area_height.saturating_sub(2) as usize;
    u16::try_from(line_count.saturating_sub(visible)).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_log_does_not_scroll() {
        assert_eq!(scroll_to_bottom(0, 30), 0);
        assert_eq!(scroll_to_bottom(28, 30), 0);
        assert_eq!(scroll_to_bottom(5, 1), 5);
    }

    #[test]
    fn long_log_scrolls_to_newest_line() {
        assert_eq!(scroll_to_bottom(29, 30), 1);
        assert_eq!(scroll_to_bottom(1_000, 30), 972);
    }

    #[test]
    fn huge_log_saturates_instead_of_wrapping() {
        assert_eq!(scroll_to_bottom(70_000, 30), u16::MAX);
        assert_eq!(scroll_to_bottom(usize::MAX, 0), u16::MAX);
    }
}
