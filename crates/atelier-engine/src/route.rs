use std::fmt;

/// Parsed form of the kiosk URL surface.
///
/// Entities are referenced by their `id` fields, never by position, so a
/// route resolves to the same place for the same loaded catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` — splash/entry screen.
    Splash,
    /// `/menu` — main menu.
    Menu,
    /// `/catalog` or `/catalog/:categoryId`. `None` means the first
    /// category, index 0.
    Catalog { category: Option<String> },
    /// `/catalog/:categoryId/:subgroupId` — item grid with filters.
    Subgroup { category: String, subgroup: String },
    /// `/catalog/:categoryId/:subgroupId/item/:itemId` — item detail.
    Item {
        category: String,
        subgroup: String,
        item: String,
    },
}

impl Route {
    /// Parse a URL path. Returns `None` for paths outside the surface;
    /// callers redirect those to `/menu` with a history replace.
    pub fn parse(path: &str) -> Option<Route> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Route::Splash),
            ["menu"] => Some(Route::Menu),
            ["catalog"] => Some(Route::Catalog { category: None }),
            ["catalog", category] => Some(Route::Catalog {
                category: Some((*category).to_string()),
            }),
            ["catalog", category, subgroup] => Some(Route::Subgroup {
                category: (*category).to_string(),
                subgroup: (*subgroup).to_string(),
            }),
            ["catalog", category, subgroup, "item", item] => Some(Route::Item {
                category: (*category).to_string(),
                subgroup: (*subgroup).to_string(),
                item: (*item).to_string(),
            }),
            _ => None,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Splash => "/".to_string(),
            Route::Menu => "/menu".to_string(),
            Route::Catalog { category: None } => "/catalog".to_string(),
            Route::Catalog {
                category: Some(category),
            } => format!("/catalog/{}", category),
            Route::Subgroup { category, subgroup } => {
                format!("/catalog/{}/{}", category, subgroup)
            }
            Route::Item {
                category,
                subgroup,
                item,
            } => format!("/catalog/{}/{}/item/{}", category, subgroup, item),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// Navigation history: every user-initiated move pushes an entry,
/// programmatic redirects replace the current one.
#[derive(Debug, Clone)]
pub struct History {
    stack: Vec<Route>,
}

impl History {
    pub fn new(initial: Route) -> Self {
        Self {
            stack: vec![initial],
        }
    }

    pub fn current(&self) -> &Route {
        // Invariant: the stack is never empty.
        self.stack.last().expect("history stack is never empty")
    }

    /// User-initiated move: new history entry.
    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Programmatic redirect: swap the current entry without growing the
    /// stack.
    pub fn replace(&mut self, route: Route) {
        *self.stack.last_mut().expect("history stack is never empty") = route;
    }

    /// Go back one entry. Returns false when already at the first entry.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Open a raw path: known routes are pushed, anything else redirects
    /// (history-replacing) to the menu.
    pub fn open(&mut self, path: &str) {
        match Route::parse(path) {
            Some(route) => self.push(route),
            None => self.replace(Route::Menu),
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Route::Splash)
    }
}
