use crossterm::event::KeyCode;

use atelier_engine::filter::{facet_blocks, FacetBlock, FACET_MATERIALS, FACET_TYPES};
use atelier_engine::{
    resolve, Cursor, FacetFolds, FilterSelection, History, OpenPanel, Resolution, Route, TextPager,
};
use atelier_types::Catalog;

use crate::config::Config;
use crate::loader::LoadEvent;

/// Everything the kiosk knows, owned by the running view. Derived view
/// state (resolution, filter results, carousel windows, pagination) is
/// recomputed from this snapshot on every render, never cached.
pub struct AppState {
    pub config: Config,
    pub catalog: Option<Catalog>,
    pub load_error: Option<String>,
    pub history: History,

    // Category screen
    pub subgroup_cursor: Cursor,

    // Subgroup screen
    pub filters: FilterSelection,
    pub folds: FacetFolds,
    pub panel: OpenPanel,
    pub filter_cursor: usize,
    pub grid_cursor: usize,

    // Item screen
    pub photo_cursor: Cursor,
    pub pager: TextPager,
    pub fullscreen: bool,

    pub should_quit: bool,

    // Last-seen route segments, for the per-level reset rules.
    seen_category: Option<String>,
    seen_subgroup: Option<String>,
    seen_item: Option<String>,
}

impl AppState {
    pub fn new(config: Config, start: &str) -> Self {
        // An unknown start path redirects to the menu, same as the URL
        // surface.
        let initial = Route::parse(start).unwrap_or(Route::Menu);
        Self {
            config,
            catalog: None,
            load_error: None,
            history: History::new(initial),
            subgroup_cursor: Cursor::new(),
            filters: FilterSelection::default(),
            folds: FacetFolds::default(),
            panel: OpenPanel::None,
            filter_cursor: 0,
            grid_cursor: 0,
            photo_cursor: Cursor::new(),
            pager: TextPager::new(),
            fullscreen: false,
            should_quit: false,
            seen_category: None,
            seen_subgroup: None,
            seen_item: None,
        }
    }

    pub fn on_load(&mut self, event: LoadEvent) {
        match event {
            LoadEvent::Loaded(catalog) => {
                self.catalog = Some(catalog);
                self.load_error = None;
            }
            LoadEvent::Failed(message) => {
                self.load_error = Some(message);
            }
        }
    }

    /// User-initiated move: new history entry.
    pub fn navigate(&mut self, route: Route) {
        self.history.push(route);
        self.sync_route_state();
    }

    /// Programmatic redirect: replaces the current entry.
    pub fn redirect(&mut self, route: Route) {
        self.history.replace(route);
        self.sync_route_state();
    }

    /// Go back one entry; at the bottom of the stack fall back to the
    /// given route (the screen's contextual back target).
    pub fn back_or(&mut self, fallback: Route) {
        if !self.history.back() {
            self.history.replace(fallback);
        }
        self.sync_route_state();
    }

    /// Apply the item-local and subgroup-local reset rules after any route
    /// change: a different category resets the subgroup cursor, a
    /// different subgroup resets the filters, a different item resets the
    /// text page and photo index.
    fn sync_route_state(&mut self) {
        let (category, subgroup, item) = match self.history.current() {
            Route::Catalog { category } => (category.clone(), None, None),
            Route::Subgroup { category, subgroup } => {
                (Some(category.clone()), Some(subgroup.clone()), None)
            }
            Route::Item {
                category,
                subgroup,
                item,
            } => (
                Some(category.clone()),
                Some(subgroup.clone()),
                Some(item.clone()),
            ),
            Route::Splash | Route::Menu => (None, None, None),
        };

        if category != self.seen_category {
            self.subgroup_cursor.reset();
            self.seen_category = category;
        }
        if subgroup != self.seen_subgroup {
            self.filters.clear();
            self.folds = FacetFolds::default();
            self.panel.dismiss();
            self.filter_cursor = 0;
            self.grid_cursor = 0;
            self.seen_subgroup = subgroup;
        }
        if item != self.seen_item {
            self.pager.reset();
            self.photo_cursor.reset();
            self.fullscreen = false;
            self.seen_item = item;
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        // Splash and menu render without catalog data; only the catalog
        // screens wait for the load.
        match self.history.current().clone() {
            Route::Splash => match code {
                KeyCode::Char('q') => self.should_quit = true,
                // Any other key enters the menu, replacing history.
                _ => self.redirect(Route::Menu),
            },
            Route::Menu => match code {
                KeyCode::Enter | KeyCode::Char('c') => {
                    self.redirect(Route::Catalog { category: None })
                }
                KeyCode::Esc | KeyCode::Backspace => self.redirect(Route::Splash),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            _ if self.catalog.is_none() => self.handle_pre_catalog_key(code),
            Route::Catalog { .. } => self.handle_category_key(code),
            Route::Subgroup { .. } => self.handle_subgroup_key(code),
            Route::Item { .. } => self.handle_item_key(code),
        }
    }

    /// Keys while loading or after a load failure. The failure screen has
    /// a single recovery action: back to the menu. No retry.
    fn handle_pre_catalog_key(&mut self, code: KeyCode) {
        if code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }
        if self.load_error.is_some()
            && matches!(code, KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace)
        {
            self.navigate(Route::Menu);
        }
    }

    fn handle_category_key(&mut self, code: KeyCode) {
        struct Snapshot {
            miss_back: Option<Route>,
            category_index: usize,
            category_id: String,
            category_ids: Vec<String>,
            subgroup_ids: Vec<String>,
        }

        let snap = {
            let Some(catalog) = self.catalog.as_ref() else {
                return;
            };
            match resolve(catalog, self.history.current()) {
                Resolution::Catalog(Some(view)) => Snapshot {
                    miss_back: None,
                    category_index: view.category_index,
                    category_id: view.category.id.clone(),
                    category_ids: catalog.categories.iter().map(|c| c.id.clone()).collect(),
                    subgroup_ids: view.category.subgroups.iter().map(|s| s.id.clone()).collect(),
                },
                Resolution::Catalog(None) => Snapshot {
                    miss_back: None,
                    category_index: 0,
                    category_id: String::new(),
                    category_ids: Vec::new(),
                    subgroup_ids: Vec::new(),
                },
                Resolution::NotFound { back, .. } => Snapshot {
                    miss_back: Some(back),
                    category_index: 0,
                    category_id: String::new(),
                    category_ids: Vec::new(),
                    subgroup_ids: Vec::new(),
                },
                _ => return,
            }
        };

        if let Some(back) = snap.miss_back {
            match code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => self.navigate(back),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        let subgroup_count = snap.subgroup_ids.len();
        match code {
            KeyCode::Left => self.subgroup_cursor.prev(subgroup_count),
            KeyCode::Right => self.subgroup_cursor.next(subgroup_count),
            KeyCode::Up | KeyCode::Down => {
                if snap.category_ids.is_empty() {
                    return;
                }
                let target = match code {
                    KeyCode::Up => snap.category_index.saturating_sub(1),
                    _ => (snap.category_index + 1).min(snap.category_ids.len() - 1),
                };
                if target != snap.category_index {
                    // Index 0 is addressed as the bare /catalog path.
                    let route = if target == 0 {
                        Route::Catalog { category: None }
                    } else {
                        Route::Catalog {
                            category: Some(snap.category_ids[target].clone()),
                        }
                    };
                    self.navigate(route);
                }
            }
            KeyCode::Enter => {
                if subgroup_count > 0 {
                    let subgroup =
                        snap.subgroup_ids[self.subgroup_cursor.index(subgroup_count)].clone();
                    self.navigate(Route::Subgroup {
                        category: snap.category_id,
                        subgroup,
                    });
                }
            }
            KeyCode::Esc | KeyCode::Backspace => self.back_or(Route::Menu),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_subgroup_key(&mut self, code: KeyCode) {
        struct Snapshot {
            miss_back: Option<Route>,
            category_id: String,
            subgroup_id: String,
            subgroup_index: usize,
            subgroup_ids: Vec<String>,
            visible_item_ids: Vec<String>,
            filter_rows: Vec<FilterRow>,
        }

        let snap = {
            let Some(catalog) = self.catalog.as_ref() else {
                return;
            };
            match resolve(catalog, self.history.current()) {
                Resolution::Subgroup(view) => {
                    let blocks = facet_blocks(
                        view.category,
                        &view.subgroup.items,
                        &self.filters,
                        &self.folds,
                    );
                    Snapshot {
                        miss_back: None,
                        category_id: view.category.id.clone(),
                        subgroup_id: view.subgroup.id.clone(),
                        subgroup_index: view.subgroup_index,
                        subgroup_ids: view
                            .category
                            .subgroups
                            .iter()
                            .map(|s| s.id.clone())
                            .collect(),
                        visible_item_ids: self
                            .filters
                            .apply(&view.subgroup.items)
                            .iter()
                            .map(|i| i.id.clone())
                            .collect(),
                        filter_rows: filter_rows(&blocks),
                    }
                }
                Resolution::NotFound { back, .. } => Snapshot {
                    miss_back: Some(back),
                    category_id: String::new(),
                    subgroup_id: String::new(),
                    subgroup_index: 0,
                    subgroup_ids: Vec::new(),
                    visible_item_ids: Vec::new(),
                    filter_rows: Vec::new(),
                },
                _ => return,
            }
        };

        if let Some(back) = snap.miss_back {
            match code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => self.navigate(back),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match self.panel {
            OpenPanel::Search => self.handle_search_key(code),
            OpenPanel::Filters => self.handle_filter_panel_key(code, &snap.filter_rows),
            OpenPanel::None => {
                match code {
                    KeyCode::Char('/') => self.panel.toggle_search(),
                    KeyCode::Char('f') => self.panel.toggle_filters(),
                    KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                        // Header arrows: cyclic move to the adjacent
                        // subgroup, as a pushed navigation.
                        let len = snap.subgroup_ids.len();
                        if len == 0 {
                            return;
                        }
                        let next = match code {
                            KeyCode::Left | KeyCode::BackTab => {
                                (snap.subgroup_index + len - 1) % len
                            }
                            _ => (snap.subgroup_index + 1) % len,
                        };
                        self.navigate(Route::Subgroup {
                            category: snap.category_id,
                            subgroup: snap.subgroup_ids[next].clone(),
                        });
                    }
                    KeyCode::Up => self.grid_cursor = self.grid_cursor.saturating_sub(1),
                    KeyCode::Down => {
                        let len = snap.visible_item_ids.len();
                        if len > 0 {
                            self.grid_cursor = (self.grid_cursor + 1).min(len - 1);
                        }
                    }
                    KeyCode::Enter => {
                        let len = snap.visible_item_ids.len();
                        if len > 0 {
                            let item = snap.visible_item_ids[self.grid_cursor.min(len - 1)].clone();
                            self.navigate(Route::Item {
                                category: snap.category_id,
                                subgroup: snap.subgroup_id,
                                item,
                            });
                        }
                    }
                    KeyCode::Esc | KeyCode::Backspace => {
                        self.back_or(Route::Catalog { category: None })
                    }
                    KeyCode::Char('q') => self.should_quit = true,
                    _ => {}
                }
            }
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.filters.query.push(c),
            KeyCode::Backspace => {
                self.filters.query.pop();
            }
            // Enter confirms and closes the dropdown, as does Esc.
            KeyCode::Enter | KeyCode::Esc => self.panel.dismiss(),
            // Anything else lands outside the search box.
            _ => self.panel.press(false),
        }
    }

    fn handle_filter_panel_key(&mut self, code: KeyCode, rows: &[FilterRow]) {
        match code {
            KeyCode::Up => self.filter_cursor = self.filter_cursor.saturating_sub(1),
            KeyCode::Down => {
                if !rows.is_empty() {
                    self.filter_cursor = (self.filter_cursor + 1).min(rows.len() - 1);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let Some(row) = rows.get(self.filter_cursor.min(rows.len().saturating_sub(1)))
                else {
                    return;
                };
                match row {
                    FilterRow::Header { facet } => self.folds.toggle(*facet),
                    FilterRow::Option { facet, value } => match *facet {
                        FACET_TYPES => self.filters.toggle_type(value),
                        FACET_MATERIALS => self.filters.toggle_material(value),
                        _ => {}
                    },
                }
            }
            KeyCode::Esc | KeyCode::Char('f') => self.panel.dismiss(),
            KeyCode::Char('q') => self.should_quit = true,
            // Anything else lands outside the dropdown.
            _ => self.panel.press(false),
        }
    }

    fn handle_item_key(&mut self, code: KeyCode) {
        struct Snapshot {
            miss_back: Option<Route>,
            category_id: String,
            subgroup_id: String,
            item_index: usize,
            item_ids: Vec<String>,
            photo_count: usize,
        }

        let snap = {
            let Some(catalog) = self.catalog.as_ref() else {
                return;
            };
            match resolve(catalog, self.history.current()) {
                Resolution::Item(view) => Snapshot {
                    miss_back: None,
                    category_id: view.category.id.clone(),
                    subgroup_id: view.subgroup.id.clone(),
                    item_index: view.item_index,
                    item_ids: view.subgroup.items.iter().map(|i| i.id.clone()).collect(),
                    photo_count: atelier_engine::compose::photos(view.item).len(),
                },
                Resolution::NotFound { back, .. } => Snapshot {
                    miss_back: Some(back),
                    category_id: String::new(),
                    subgroup_id: String::new(),
                    item_index: 0,
                    item_ids: Vec::new(),
                    photo_count: 0,
                },
                _ => return,
            }
        };

        if let Some(back) = snap.miss_back {
            match code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => self.navigate(back),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        if self.fullscreen {
            match code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('f') => self.fullscreen = false,
                KeyCode::Left => self.photo_cursor.prev(snap.photo_count),
                KeyCode::Right => self.photo_cursor.next(snap.photo_count),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Left => self.photo_cursor.prev(snap.photo_count),
            KeyCode::Right => self.photo_cursor.next(snap.photo_count),
            KeyCode::Up | KeyCode::PageUp => self.pager.prev(),
            KeyCode::Down | KeyCode::PageDown => self.pager.next(),
            KeyCode::Tab | KeyCode::Char('n') | KeyCode::BackTab | KeyCode::Char('p') => {
                // Cyclic move to the adjacent item in the subgroup.
                let len = snap.item_ids.len();
                if len == 0 {
                    return;
                }
                let next = match code {
                    KeyCode::BackTab | KeyCode::Char('p') => (snap.item_index + len - 1) % len,
                    _ => (snap.item_index + 1) % len,
                };
                self.navigate(Route::Item {
                    category: snap.category_id,
                    subgroup: snap.subgroup_id,
                    item: snap.item_ids[next].clone(),
                });
            }
            KeyCode::Char('f') => {
                if snap.photo_count > 0 {
                    self.fullscreen = true;
                }
            }
            KeyCode::Esc | KeyCode::Backspace => self.back_or(Route::Subgroup {
                category: snap.category_id,
                subgroup: snap.subgroup_id,
            }),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }
}

/// A row of the filters dropdown, in display order: each facet header
/// followed by its options when the block is expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRow {
    Header { facet: &'static str },
    Option { facet: &'static str, value: String },
}

pub fn filter_rows(blocks: &[FacetBlock]) -> Vec<FilterRow> {
    let mut rows = Vec::new();
    for block in blocks {
        rows.push(FilterRow::Header { facet: block.id });
        if !block.collapsed {
            for option in &block.options {
                rows.push(FilterRow::Option {
                    facet: block.id,
                    value: option.clone(),
                });
            }
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_types::{Category, Item, Subgroup};

    fn sample_catalog() -> Catalog {
        Catalog {
            categories: vec![Category {
                id: "clay-tools".to_string(),
                title: "Clay tools".to_string(),
                subgroups: vec![
                    Subgroup {
                        id: "pots".to_string(),
                        title: "Pots".to_string(),
                        image: None,
                        items: vec![
                            Item {
                                id: "loop-tool".to_string(),
                                name: "Loop tool".to_string(),
                                kind: Some("loop".to_string()),
                                ..Item::default()
                            },
                            Item {
                                id: "rib".to_string(),
                                name: "Wooden rib".to_string(),
                                kind: Some("rib".to_string()),
                                ..Item::default()
                            },
                        ],
                    },
                    Subgroup {
                        id: "wires".to_string(),
                        title: "Wires".to_string(),
                        image: None,
                        items: vec![],
                    },
                ],
            }],
        }
    }

    fn ready_state(start: &str) -> AppState {
        let mut state = AppState::new(Config::default(), start);
        state.on_load(LoadEvent::Loaded(sample_catalog()));
        state
    }

    #[test]
    fn test_unknown_start_path_redirects_to_menu() {
        let state = ready_state("/definitely/not/a/route");
        assert_eq!(state.history.current(), &Route::Menu);
    }

    #[test]
    fn test_splash_any_key_enters_menu() {
        let mut state = ready_state("/");
        state.handle_key(KeyCode::Char('x'));
        assert_eq!(state.history.current(), &Route::Menu);
        // Replace, not push: there is no splash entry to go back to.
        assert!(!state.history.back());
    }

    #[test]
    fn test_drill_down_to_item() {
        let mut state = ready_state("/catalog");
        state.handle_key(KeyCode::Enter);
        assert_eq!(
            state.history.current(),
            &Route::Subgroup {
                category: "clay-tools".to_string(),
                subgroup: "pots".to_string(),
            }
        );
        state.handle_key(KeyCode::Enter);
        assert_eq!(
            state.history.current(),
            &Route::Item {
                category: "clay-tools".to_string(),
                subgroup: "pots".to_string(),
                item: "loop-tool".to_string(),
            }
        );
    }

    #[test]
    fn test_search_narrows_grid_then_enter_opens_the_match() {
        let mut state = ready_state("/catalog/clay-tools/pots");
        state.handle_key(KeyCode::Char('/'));
        for c in "rib".chars() {
            state.handle_key(KeyCode::Char(c));
        }
        state.handle_key(KeyCode::Enter);
        assert_eq!(state.panel, OpenPanel::None);

        // "rib" matches only the Wooden rib; Enter opens it from slot 0.
        state.handle_key(KeyCode::Enter);
        assert_eq!(
            state.history.current(),
            &Route::Item {
                category: "clay-tools".to_string(),
                subgroup: "pots".to_string(),
                item: "rib".to_string(),
            }
        );
    }

    #[test]
    fn test_type_filter_narrows_grid_then_enter_opens_the_match() {
        let mut state = ready_state("/catalog/clay-tools/pots");
        state.handle_key(KeyCode::Char('f'));
        assert_eq!(state.panel, OpenPanel::Filters);

        // Rows: types header, "loop", "rib", materials header. Move to
        // the first option and toggle it.
        state.handle_key(KeyCode::Down);
        state.handle_key(KeyCode::Enter);
        assert_eq!(state.filters.types, vec!["loop".to_string()]);

        state.handle_key(KeyCode::Esc);
        assert_eq!(state.panel, OpenPanel::None);

        // The loop tool is the only item left in the grid.
        state.handle_key(KeyCode::Enter);
        assert_eq!(
            state.history.current(),
            &Route::Item {
                category: "clay-tools".to_string(),
                subgroup: "pots".to_string(),
                item: "loop-tool".to_string(),
            }
        );

        // Item-to-item cycling still walks the whole subgroup: Tab twice
        // wraps through the rib back to the loop tool.
        state.handle_key(KeyCode::Tab);
        state.handle_key(KeyCode::Tab);
        assert_eq!(
            state.history.current(),
            &Route::Item {
                category: "clay-tools".to_string(),
                subgroup: "pots".to_string(),
                item: "loop-tool".to_string(),
            }
        );
    }

    #[test]
    fn test_item_next_wraps_around() {
        let mut state = ready_state("/catalog/clay-tools/pots/item/rib");
        state.handle_key(KeyCode::Tab);
        assert_eq!(
            state.history.current(),
            &Route::Item {
                category: "clay-tools".to_string(),
                subgroup: "pots".to_string(),
                item: "loop-tool".to_string(),
            }
        );
    }

    #[test]
    fn test_subgroup_change_resets_filters() {
        let mut state = ready_state("/catalog/clay-tools/pots");
        state.handle_key(KeyCode::Char('/'));
        state.handle_key(KeyCode::Char('r'));
        state.handle_key(KeyCode::Enter);
        assert_eq!(state.filters.query, "r");

        // Move to the adjacent subgroup: filters must not carry over.
        state.handle_key(KeyCode::Right);
        assert_eq!(
            state.history.current(),
            &Route::Subgroup {
                category: "clay-tools".to_string(),
                subgroup: "wires".to_string(),
            }
        );
        assert!(state.filters.is_empty());
    }

    #[test]
    fn test_item_change_resets_photo_and_page() {
        let mut state = ready_state("/catalog/clay-tools/pots/item/loop-tool");
        state.pager.recompute(30, 10);
        state.handle_key(KeyCode::Down);
        assert_eq!(state.pager.current_page(), 1);

        state.handle_key(KeyCode::Tab);
        assert_eq!(state.pager.current_page(), 0);
        assert_eq!(state.photo_cursor.index(5), 0);
    }

    #[test]
    fn test_load_failure_offers_menu_recovery() {
        let mut state = AppState::new(Config::default(), "/catalog");
        state.on_load(LoadEvent::Failed("Unexpected HTTP status: 500".to_string()));
        state.handle_key(KeyCode::Esc);
        assert_eq!(state.history.current(), &Route::Menu);
    }

    #[test]
    fn test_not_found_back_targets_deepest_ancestor() {
        let mut state = ready_state("/catalog/clay-tools/pots/item/mallet");
        state.handle_key(KeyCode::Esc);
        assert_eq!(
            state.history.current(),
            &Route::Subgroup {
                category: "clay-tools".to_string(),
                subgroup: "pots".to_string(),
            }
        );
    }

    #[test]
    fn test_filter_rows_skip_collapsed_options() {
        let catalog = sample_catalog();
        let category = &catalog.categories[0];
        let mut folds = FacetFolds::default();
        folds.toggle(FACET_TYPES);
        let blocks = facet_blocks(
            category,
            &category.subgroups[0].items,
            &FilterSelection::default(),
            &folds,
        );
        let rows = filter_rows(&blocks);
        // Types header (collapsed, options hidden) + Materials header.
        assert_eq!(
            rows,
            vec![
                FilterRow::Header { facet: FACET_TYPES },
                FilterRow::Header {
                    facet: FACET_MATERIALS
                },
            ]
        );
    }
}
