use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::Paragraph,
    Frame,
};

use super::centered_rect;

pub(crate) fn draw(f: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::from(""),
        Line::styled(
            "THE SCULPTOR'S ATELIER",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("A catalog of sculpting tools"),
        Line::from(""),
        Line::styled(
            "press any key to begin",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    f.render_widget(paragraph, centered_rect(60, 40, area));
}
