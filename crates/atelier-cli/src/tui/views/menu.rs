use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::centered_rect;

pub(crate) fn draw(f: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::from(""),
        Line::styled(
            "[Enter] Tool catalog",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled("        Quiz (coming soon)", Style::default().fg(Color::DarkGray)),
        Line::from(""),
        Line::styled("[Esc]   Back to start", Style::default().fg(Color::DarkGray)),
    ]);
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Menu"));
    f.render_widget(paragraph, centered_rect(50, 50, area));
}
