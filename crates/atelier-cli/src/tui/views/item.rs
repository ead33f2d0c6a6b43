use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use atelier_engine::compose::{compose, photos};
use atelier_engine::resolve::ItemView;
use atelier_engine::{Cursor, TextPager};

use super::{centered_rect, wrap_lines};

/// Item screen: paginated text panel on the left, photo panel on the
/// right, with an optional fullscreen photo overlay.
pub(crate) fn draw(
    f: &mut Frame,
    area: Rect,
    view: &ItemView,
    pager: &mut TextPager,
    photo_cursor: &Cursor,
    fullscreen: bool,
) {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let breadcrumb = format!("{} / {}", view.category.title, view.subgroup.title);
    let header = Paragraph::new(Line::from(vec![
        Span::styled(breadcrumb, Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(
            view.item.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, main[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(main[1]);

    draw_text_panel(f, columns[0], view, pager);
    draw_photo_panel(f, columns[1], view, photo_cursor);

    let hints = Paragraph::new(Line::styled(
        "←/→ photo   ↑/↓ page   Tab next item   f fullscreen   Esc back",
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    f.render_widget(hints, main[2]);

    if fullscreen {
        draw_fullscreen(f, area, view, photo_cursor);
    }
}

fn draw_text_panel(f: &mut Frame, area: Rect, view: &ItemView, pager: &mut TextPager) {
    let text = compose(view.item);

    let mut block = Block::default().borders(Borders::ALL).title("About");

    let inner = block.inner(area);
    let width = inner.width as usize;

    let mut lines: Vec<String> = Vec::new();
    if text.is_empty() {
        lines.push("No description available.".to_string());
    } else {
        if !text.description_points.is_empty() {
            lines.push("Description".to_string());
            for point in &text.description_points {
                push_bullet(&mut lines, point, width);
            }
        }
        if !text.feature_points.is_empty() {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push("Features".to_string());
            for point in &text.feature_points {
                push_bullet(&mut lines, point, width);
            }
        }
        if let Some(purpose) = &text.purpose {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push("Purpose".to_string());
            for line in wrap_lines(purpose, width.saturating_sub(2)) {
                lines.push(format!("  {}", line));
            }
        }
    }

    // Measured content feeds the pager before the paragraph is drawn, so
    // the page count always matches what is on screen.
    pager.recompute(lines.len(), inner.height as usize);
    if pager.nav_enabled() {
        block = block.title_bottom(
            Line::styled(
                format!(" page {}/{} ", pager.current_page() + 1, pager.page_count()),
                Style::default().fg(Color::DarkGray),
            )
            .alignment(Alignment::Right),
        );
    }

    let text_lines: Vec<Line> = lines.into_iter().map(Line::from).collect();
    let paragraph = Paragraph::new(Text::from(text_lines))
        .block(block)
        .scroll((pager.scroll_offset(inner.height as usize) as u16, 0));
    f.render_widget(paragraph, area);
}

fn push_bullet(lines: &mut Vec<String>, point: &str, width: usize) {
    for (i, line) in wrap_lines(point, width.saturating_sub(2)).into_iter().enumerate() {
        if i == 0 {
            lines.push(format!("• {}", line));
        } else {
            lines.push(format!("  {}", line));
        }
    }
}

fn draw_photo_panel(f: &mut Frame, area: Rect, view: &ItemView, photo_cursor: &Cursor) {
    let photos = photos(view.item);

    if photos.is_empty() {
        let paragraph = Paragraph::new("No images")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Photos"));
        f.render_widget(paragraph, area);
        return;
    }

    let index = photo_cursor.index(photos.len());
    let text = Text::from(vec![
        Line::from(""),
        Line::styled(
            format!("[{}]", photos[index]),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Photo {}/{}", index + 1, photos.len())),
    );
    f.render_widget(paragraph, area);
}

fn draw_fullscreen(f: &mut Frame, area: Rect, view: &ItemView, photo_cursor: &Cursor) {
    let photos = photos(view.item);
    if photos.is_empty() {
        return;
    }
    let index = photo_cursor.index(photos.len());

    f.render_widget(Clear, area);
    let text = Text::from(vec![
        Line::from(""),
        Line::styled(
            format!("[{}]", photos[index]),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(
            "←/→ photo   Esc close",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Photo {}/{}", index + 1, photos.len())),
    );
    f.render_widget(paragraph, centered_rect(90, 90, area));
}
