use ratatui::Frame;

use atelier_engine::{resolve, Resolution, Route};

use super::app::AppState;
use super::views;

/// Resolve the current route and hand the frame to the matching screen.
/// All view state is derived here, every frame; nothing is cached between
/// draws.
pub(crate) fn draw(f: &mut Frame, state: &mut AppState) {
    let area = f.area();

    // Splash and menu never wait for data; the catalog screens show the
    // loading or failure state until the background fetch lands.
    let Some(catalog) = state.catalog.as_ref() else {
        match state.history.current() {
            Route::Splash => views::splash::draw(f, area),
            Route::Menu => views::menu::draw(f, area),
            _ => match &state.load_error {
                Some(message) => views::message::draw_load_failed(f, area, message),
                None => views::message::draw_loading(f, area),
            },
        }
        return;
    };

    match resolve(catalog, state.history.current()) {
        Resolution::Splash => views::splash::draw(f, area),
        Resolution::Menu => views::menu::draw(f, area),
        Resolution::Catalog(view) => views::category::draw(
            f,
            area,
            catalog,
            view.as_ref(),
            &state.config,
            &state.subgroup_cursor,
        ),
        Resolution::Subgroup(view) => views::subgroup::draw(
            f,
            area,
            catalog,
            &view,
            &state.filters,
            &state.folds,
            state.panel,
            state.filter_cursor,
            state.grid_cursor,
        ),
        Resolution::Item(view) => views::item::draw(
            f,
            area,
            &view,
            &mut state.pager,
            &state.photo_cursor,
            state.fullscreen,
        ),
        Resolution::NotFound { level, back } => {
            views::message::draw_not_found(f, area, level, &back)
        }
    }
}
