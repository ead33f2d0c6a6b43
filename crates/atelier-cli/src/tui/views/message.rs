use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use atelier_engine::{MissLevel, Route};

use super::centered_rect;

pub(crate) fn draw_loading(f: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::from("Loading catalog..."),
        Line::from(""),
        Line::styled("q to quit", Style::default().fg(Color::DarkGray)),
    ]);
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    f.render_widget(paragraph, centered_rect(50, 30, area));
}

pub(crate) fn draw_load_failed(f: &mut Frame, area: Rect, message: &str) {
    let text = Text::from(vec![
        Line::styled(
            "Could not load the catalog",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::styled(
            "[Esc] Back to menu    q to quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, centered_rect(70, 40, area));
}

pub(crate) fn draw_not_found(f: &mut Frame, area: Rect, level: MissLevel, back: &Route) {
    let text = Text::from(vec![
        Line::styled(
            level.message(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("[Esc] Back to {}", back.to_path())),
    ]);
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, centered_rect(60, 30, area));
}
