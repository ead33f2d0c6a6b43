use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use atelier_engine::filter::facet_blocks;
use atelier_engine::resolve::SubgroupView;
use atelier_engine::{FacetFolds, FilterSelection, OpenPanel};
use atelier_types::Catalog;

use crate::tui::app::{filter_rows, FilterRow};

use super::{centered_rect, draw_sidebar};

/// Subgroup screen: the item grid plus the filters and search dropdowns.
#[allow(clippy::too_many_arguments)]
pub(crate) fn draw(
    f: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    view: &SubgroupView,
    filters: &FilterSelection,
    folds: &FacetFolds,
    panel: OpenPanel,
    filter_cursor: usize,
    grid_cursor: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(0)])
        .split(area);

    draw_sidebar(f, chunks[0], catalog, Some(view.category_index));

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(chunks[1]);

    draw_header(f, main[0], view, filters);
    draw_grid(f, main[1], view, filters, grid_cursor);

    let hints = Paragraph::new(Line::styled(
        "←/→ subgroup   ↑/↓ select   Enter open   / search   f filters   Esc back",
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    f.render_widget(hints, main[2]);

    match panel {
        OpenPanel::Filters => draw_filters_panel(f, main[1], view, filters, folds, filter_cursor),
        OpenPanel::Search => draw_search_panel(f, main[1], filters),
        OpenPanel::None => {}
    }
}

fn draw_header(f: &mut Frame, area: Rect, view: &SubgroupView, filters: &FilterSelection) {
    let mut spans = vec![
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            view.subgroup.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
    ];
    if !filters.is_empty() {
        spans.push(Span::styled(
            "  [filtered]",
            Style::default().fg(Color::Yellow),
        ));
    }
    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_grid(
    f: &mut Frame,
    area: Rect,
    view: &SubgroupView,
    filters: &FilterSelection,
    grid_cursor: usize,
) {
    let visible = filters.apply(&view.subgroup.items);

    if visible.is_empty() {
        let message = if view.subgroup.items.is_empty() {
            "No items in this subgroup yet."
        } else {
            "No items match the selected filters."
        };
        let paragraph = Paragraph::new(message).alignment(Alignment::Center);
        f.render_widget(paragraph, centered_rect(60, 20, area));
        return;
    }

    let rows: Vec<ListItem> = visible
        .iter()
        .map(|item| {
            let mut spans = vec![Span::raw(item.name.clone())];
            if let Some(kind) = item.kind.as_deref() {
                spans.push(Span::styled(
                    format!("  ({})", kind),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Items ({})", visible.len())),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut list_state = ListState::default();
    list_state.select(Some(grid_cursor.min(visible.len() - 1)));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_filters_panel(
    f: &mut Frame,
    area: Rect,
    view: &SubgroupView,
    filters: &FilterSelection,
    folds: &FacetFolds,
    filter_cursor: usize,
) {
    let blocks = facet_blocks(view.category, &view.subgroup.items, filters, folds);
    let rows = filter_rows(&blocks);

    let height = (rows.len() as u16 + 2).min(area.height);
    let width = 32.min(area.width);
    let panel_area = Rect {
        x: area.right().saturating_sub(width),
        y: area.y,
        width,
        height,
    };
    f.render_widget(Clear, panel_area);

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| match row {
            FilterRow::Header { facet } => {
                let block = blocks
                    .iter()
                    .find(|b| b.id == *facet)
                    .map(|b| (b.label, b.collapsed));
                let (label, collapsed) = block.unwrap_or(("?", false));
                let marker = if collapsed { "▸" } else { "▾" };
                ListItem::new(Line::styled(
                    format!("{} {}", marker, label),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
            }
            FilterRow::Option { facet, value } => {
                let selected = blocks
                    .iter()
                    .find(|b| b.id == *facet)
                    .is_some_and(|b| b.selected.contains(value));
                let mark = if selected { "x" } else { " " };
                ListItem::new(Line::from(format!("  [{}] {}", mark, value)))
            }
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Filters"))
        .highlight_style(Style::default().fg(Color::Yellow))
        .highlight_symbol("▸ ");

    let mut list_state = ListState::default();
    if !rows.is_empty() {
        list_state.select(Some(filter_cursor.min(rows.len() - 1)));
    }
    f.render_stateful_widget(list, panel_area, &mut list_state);
}

fn draw_search_panel(f: &mut Frame, area: Rect, filters: &FilterSelection) {
    let width = 40.min(area.width);
    let panel_area = Rect {
        x: area.right().saturating_sub(width),
        y: area.y,
        width,
        height: 3.min(area.height),
    };
    f.render_widget(Clear, panel_area);

    let line = Line::from(vec![
        Span::raw(filters.query.clone()),
        Span::styled("▏", Style::default().fg(Color::Yellow)),
    ]);
    let paragraph =
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Search"));
    f.render_widget(paragraph, panel_area);
}
