use atelier_types::{Catalog, Category, Item, Subgroup};

use crate::route::Route;

/// Resolved category screen position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryView<'a> {
    pub category_index: usize,
    pub category: &'a Category,
}

/// Resolved subgroup grid position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubgroupView<'a> {
    pub category_index: usize,
    pub category: &'a Category,
    pub subgroup_index: usize,
    pub subgroup: &'a Subgroup,
}

/// Resolved item detail position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemView<'a> {
    pub category_index: usize,
    pub category: &'a Category,
    pub subgroup_index: usize,
    pub subgroup: &'a Subgroup,
    pub item_index: usize,
    pub item: &'a Item,
}

/// The level at which id lookup failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissLevel {
    Category,
    Subgroup,
    Item,
}

impl MissLevel {
    pub fn label(&self) -> &'static str {
        match self {
            MissLevel::Category => "category",
            MissLevel::Subgroup => "subgroup",
            MissLevel::Item => "item",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            MissLevel::Category => "Category not found.",
            MissLevel::Subgroup => "Subgroup not found.",
            MissLevel::Item => "Item not found.",
        }
    }
}

/// Outcome of resolving a route against the loaded catalog.
///
/// A miss is a normal, representable state, not an error: it carries a back
/// route scoped to the deepest ancestor that did resolve.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    Splash,
    Menu,
    /// `None` when the catalog has no categories at all; the category
    /// screen renders its empty state.
    Catalog(Option<CategoryView<'a>>),
    Subgroup(SubgroupView<'a>),
    Item(ItemView<'a>),
    NotFound { level: MissLevel, back: Route },
}

/// Resolve a route by id lookup, level by level. Idempotent for a given
/// loaded catalog.
pub fn resolve<'a>(catalog: &'a Catalog, route: &Route) -> Resolution<'a> {
    match route {
        Route::Splash => Resolution::Splash,
        Route::Menu => Resolution::Menu,
        Route::Catalog { category: None } => {
            Resolution::Catalog(catalog.categories.first().map(|category| CategoryView {
                category_index: 0,
                category,
            }))
        }
        Route::Catalog {
            category: Some(id),
        } => match catalog.category_by_id(id) {
            Some((category_index, category)) => Resolution::Catalog(Some(CategoryView {
                category_index,
                category,
            })),
            None => miss_at_category(),
        },
        Route::Subgroup { category, subgroup } => {
            let Some((category_index, cat)) = catalog.category_by_id(category) else {
                return miss_at_category();
            };
            match cat.subgroup_by_id(subgroup) {
                Some((subgroup_index, sg)) => Resolution::Subgroup(SubgroupView {
                    category_index,
                    category: cat,
                    subgroup_index,
                    subgroup: sg,
                }),
                None => miss_at_subgroup(cat),
            }
        }
        Route::Item {
            category,
            subgroup,
            item,
        } => {
            let Some((category_index, cat)) = catalog.category_by_id(category) else {
                return miss_at_category();
            };
            let Some((subgroup_index, sg)) = cat.subgroup_by_id(subgroup) else {
                return miss_at_subgroup(cat);
            };
            match sg.item_by_id(item) {
                Some((item_index, it)) => Resolution::Item(ItemView {
                    category_index,
                    category: cat,
                    subgroup_index,
                    subgroup: sg,
                    item_index,
                    item: it,
                }),
                None => Resolution::NotFound {
                    level: MissLevel::Item,
                    back: Route::Subgroup {
                        category: cat.id.clone(),
                        subgroup: sg.id.clone(),
                    },
                },
            }
        }
    }
}

fn miss_at_category<'a>() -> Resolution<'a> {
    Resolution::NotFound {
        level: MissLevel::Category,
        back: Route::Catalog { category: None },
    }
}

fn miss_at_subgroup(category: &Category) -> Resolution<'_> {
    Resolution::NotFound {
        level: MissLevel::Subgroup,
        back: Route::Catalog {
            category: Some(category.id.clone()),
        },
    }
}
