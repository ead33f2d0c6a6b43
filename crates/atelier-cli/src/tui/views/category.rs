use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use atelier_engine::carousel::slide_image;
use atelier_engine::resolve::CategoryView;
use atelier_engine::Cursor;
use atelier_types::Catalog;

use crate::config::Config;

use super::{centered_rect, draw_sidebar};

/// Category screen: sidebar on the left, subgroup carousel on the right.
pub(crate) fn draw(
    f: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    view: Option<&CategoryView>,
    config: &Config,
    cursor: &Cursor,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(0)])
        .split(area);

    draw_sidebar(f, chunks[0], catalog, view.map(|v| v.category_index));

    let Some(view) = view else {
        let paragraph = Paragraph::new("The catalog is empty.").alignment(Alignment::Center);
        f.render_widget(paragraph, centered_rect(60, 20, chunks[1]));
        return;
    };

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(chunks[1]);

    let header = Paragraph::new(Line::styled(
        view.category.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, main[0]);

    draw_carousel(f, main[1], view, config, cursor);

    let hints = Paragraph::new(Line::styled(
        "←/→ subgroup   ↑/↓ category   Enter open   Esc back   q quit",
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    f.render_widget(hints, main[2]);
}

fn draw_carousel(f: &mut Frame, area: Rect, view: &CategoryView, config: &Config, cursor: &Cursor) {
    let subgroups = &view.category.subgroups;
    let Some(window) = cursor.window3(subgroups.len()) else {
        let paragraph =
            Paragraph::new("No subgroups in this category yet.").alignment(Alignment::Center);
        f.render_widget(paragraph, centered_rect(60, 20, area));
        return;
    };

    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(area);

    let placeholder = config.placeholder_for(&view.category.id);
    for (i, (&slot, &index)) in slots.iter().zip(window.iter()).enumerate() {
        draw_slide(f, slot, view, index, placeholder, i == 1);
    }
}

fn draw_slide(
    f: &mut Frame,
    area: Rect,
    view: &CategoryView,
    index: usize,
    placeholder: Option<&str>,
    center: bool,
) {
    let subgroup = &view.category.subgroups[index];
    let image = slide_image(subgroup.image.as_deref(), placeholder);

    let border_style = if center {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title_style = if center {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut lines = vec![
        Line::from(""),
        Line::styled(subgroup.title.clone(), title_style),
        Line::from(""),
    ];
    lines.push(match image {
        Some(image) => Line::styled(format!("[{}]", image), Style::default().fg(Color::DarkGray)),
        None => Line::styled("(no image)", Style::default().fg(Color::DarkGray)),
    });
    if center {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("{} items", subgroup.items.len()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    f.render_widget(paragraph, area);
}
