use std::collections::HashSet;

use atelier_types::{Category, Item};

/// Free-text query plus selected facet values for the item grid.
///
/// Reset whenever the active subgroup changes; filters never carry over
/// between subgroups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub query: String,
    pub types: Vec<String>,
    pub materials: Vec<String>,
}

impl FilterSelection {
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.types.is_empty() && self.materials.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn toggle_type(&mut self, value: &str) {
        toggle(&mut self.types, value);
    }

    pub fn toggle_material(&mut self, value: &str) {
        toggle(&mut self.materials, value);
    }

    /// The matching predicate: query AND type AND material. Facets are
    /// independent (AND across facets, OR within a facet's values).
    pub fn matches(&self, item: &Item) -> bool {
        let matches_query = self.query.is_empty()
            || item
                .name
                .to_lowercase()
                .contains(&self.query.to_lowercase());
        let matches_type = self.types.is_empty()
            || item
                .kind
                .as_deref()
                .is_some_and(|kind| self.types.iter().any(|t| t == kind));
        let matches_material = self.materials.is_empty()
            || item
                .material
                .as_deref()
                .is_some_and(|material| self.materials.iter().any(|m| m == material));
        matches_query && matches_type && matches_material
    }

    /// Visible subset of the grid, preserving the original item order.
    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

fn toggle(selected: &mut Vec<String>, value: &str) {
    if let Some(pos) = selected.iter().position(|v| v == value) {
        selected.remove(pos);
    } else {
        selected.push(value.to_string());
    }
}

pub const FACET_TYPES: &str = "types";
pub const FACET_MATERIALS: &str = "materials";

/// A facet (filter dimension) as shown in the filters dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetBlock {
    pub id: &'static str,
    pub label: &'static str,
    pub options: Vec<String>,
    pub selected: Vec<String>,
    pub collapsed: bool,
}

/// Options for the "type" facet: distinct non-empty `type` values in item
/// order. When no item declares a type, the titles of all subgroups in the
/// parent category stand in as a degraded option list.
pub fn type_options(category: &Category, items: &[Item]) -> Vec<String> {
    let from_items = distinct(items.iter().filter_map(|i| i.kind.as_deref()));
    if !from_items.is_empty() {
        return from_items;
    }
    category.subgroups.iter().map(|s| s.title.clone()).collect()
}

/// Options for the "material" facet: distinct non-empty `material` values.
/// No fallback.
pub fn material_options(items: &[Item]) -> Vec<String> {
    distinct(items.iter().filter_map(|i| i.material.as_deref()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| !v.is_empty() && seen.insert(*v))
        .map(str::to_string)
        .collect()
}

/// Assemble the facet blocks for the filters dropdown.
pub fn facet_blocks(
    category: &Category,
    items: &[Item],
    selection: &FilterSelection,
    folds: &FacetFolds,
) -> Vec<FacetBlock> {
    vec![
        FacetBlock {
            id: FACET_TYPES,
            label: "Types",
            options: type_options(category, items),
            selected: selection.types.clone(),
            collapsed: folds.is_collapsed(FACET_TYPES),
        },
        FacetBlock {
            id: FACET_MATERIALS,
            label: "Materials",
            options: material_options(items),
            selected: selection.materials.clone(),
            collapsed: folds.is_collapsed(FACET_MATERIALS),
        },
    ]
}

/// Collapsed/expanded state per facet block, keyed by facet id. Every block
/// defaults to expanded.
#[derive(Debug, Clone, Default)]
pub struct FacetFolds {
    collapsed: HashSet<&'static str>,
}

impl FacetFolds {
    pub fn is_collapsed(&self, id: &str) -> bool {
        self.collapsed.contains(id)
    }

    pub fn toggle(&mut self, id: &'static str) {
        if !self.collapsed.insert(id) {
            self.collapsed.remove(id);
        }
    }
}

/// Which header dropdown is open. Opening one closes the other; a press
/// outside the panel boundary dismisses whichever is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenPanel {
    #[default]
    None,
    Filters,
    Search,
}

impl OpenPanel {
    pub fn toggle_filters(&mut self) {
        *self = match self {
            OpenPanel::Filters => OpenPanel::None,
            _ => OpenPanel::Filters,
        };
    }

    pub fn toggle_search(&mut self) {
        *self = match self {
            OpenPanel::Search => OpenPanel::None,
            _ => OpenPanel::Search,
        };
    }

    pub fn dismiss(&mut self) {
        *self = OpenPanel::None;
    }

    /// Boundary hit test: `inside` is whether the press landed within the
    /// open panel. Outside presses close it.
    pub fn press(&mut self, inside: bool) {
        if !inside {
            self.dismiss();
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, OpenPanel::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_types::{Category, Item, Subgroup};

    fn item(name: &str, kind: Option<&str>, material: Option<&str>) -> Item {
        Item {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            kind: kind.map(str::to_string),
            material: material.map(str::to_string),
            ..Item::default()
        }
    }

    fn grid() -> Vec<Item> {
        vec![
            item("Loop tool", Some("loop"), Some("steel")),
            item("Wooden rib", Some("rib"), Some("wood")),
            item("Steel rib", Some("rib"), Some("steel")),
            item("Sponge", None, None),
        ]
    }

    #[test]
    fn test_empty_selection_returns_all_in_order() {
        let items = grid();
        let selection = FilterSelection::default();
        let visible = selection.apply(&items);
        let names: Vec<&str> = visible.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Loop tool", "Wooden rib", "Steel rib", "Sponge"]);
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let items = grid();
        let selection = FilterSelection {
            query: "RIB".to_string(),
            ..FilterSelection::default()
        };
        let names: Vec<&str> = selection
            .apply(&items)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, ["Wooden rib", "Steel rib"]);
    }

    #[test]
    fn test_facets_are_and_across_or_within() {
        let items = grid();
        let mut selection = FilterSelection::default();
        selection.toggle_type("rib");
        selection.toggle_type("loop");
        selection.toggle_material("steel");
        let names: Vec<&str> = selection
            .apply(&items)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, ["Loop tool", "Steel rib"]);
    }

    #[test]
    fn test_undeclared_facet_never_matches_a_selection() {
        let items = grid();
        let mut selection = FilterSelection::default();
        selection.toggle_material("steel");
        // "Sponge" declares no material, so it cannot match.
        assert!(!selection.matches(&items[3]));
    }

    #[test]
    fn test_selection_is_monotonic() {
        let items = grid();
        let mut selection = FilterSelection::default();
        let all = selection.apply(&items).len();

        selection.toggle_type("rib");
        let typed = selection.apply(&items).len();
        assert!(typed <= all);

        selection.toggle_material("wood");
        let narrowed = selection.apply(&items).len();
        assert!(narrowed <= typed);

        selection.clear();
        assert_eq!(selection.apply(&items).len(), all);
    }

    #[test]
    fn test_toggle_twice_restores_full_grid() {
        let items = grid();
        let mut selection = FilterSelection::default();
        selection.toggle_type("rib");
        selection.toggle_type("rib");
        assert!(selection.is_empty());
        assert_eq!(selection.apply(&items).len(), items.len());
    }

    #[test]
    fn test_type_options_in_observation_order() {
        let items = grid();
        let category = Category {
            id: "clay-tools".to_string(),
            title: "Clay tools".to_string(),
            subgroups: vec![],
        };
        assert_eq!(type_options(&category, &items), ["loop", "rib"]);
        assert_eq!(material_options(&items), ["steel", "wood"]);
    }

    #[test]
    fn test_type_facet_falls_back_to_subgroup_titles() {
        // Observed catalog behavior: when no item declares a type, subgroup
        // titles stand in as the option list. Such an option can never
        // match an item, so selecting it empties the grid.
        let items = vec![item("Sponge", None, Some("cellulose"))];
        let category = Category {
            id: "auxiliary-tools".to_string(),
            title: "Auxiliary tools".to_string(),
            subgroups: vec![
                Subgroup {
                    id: "sponges".to_string(),
                    title: "Sponges".to_string(),
                    image: None,
                    items: vec![],
                },
                Subgroup {
                    id: "wires".to_string(),
                    title: "Wires".to_string(),
                    image: None,
                    items: vec![],
                },
            ],
        };

        assert_eq!(type_options(&category, &items), ["Sponges", "Wires"]);

        let mut selection = FilterSelection::default();
        selection.toggle_type("Sponges");
        assert!(selection.apply(&items).is_empty());
    }

    #[test]
    fn test_material_facet_has_no_fallback() {
        let items = vec![item("Sponge", Some("sponge"), None)];
        assert!(material_options(&items).is_empty());
    }

    #[test]
    fn test_facet_blocks_default_expanded() {
        let items = grid();
        let category = Category {
            id: "clay-tools".to_string(),
            title: "Clay tools".to_string(),
            subgroups: vec![],
        };
        let blocks = facet_blocks(
            &category,
            &items,
            &FilterSelection::default(),
            &FacetFolds::default(),
        );
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| !b.collapsed));

        let mut folds = FacetFolds::default();
        folds.toggle(FACET_MATERIALS);
        let blocks = facet_blocks(&category, &items, &FilterSelection::default(), &folds);
        assert!(!blocks[0].collapsed);
        assert!(blocks[1].collapsed);
        folds.toggle(FACET_MATERIALS);
        assert!(!folds.is_collapsed(FACET_MATERIALS));
    }

    #[test]
    fn test_panel_toggles_are_mutually_exclusive() {
        let mut panel = OpenPanel::default();
        panel.toggle_filters();
        assert_eq!(panel, OpenPanel::Filters);
        panel.toggle_search();
        assert_eq!(panel, OpenPanel::Search);
        panel.toggle_search();
        assert_eq!(panel, OpenPanel::None);
    }

    #[test]
    fn test_outside_press_dismisses() {
        let mut panel = OpenPanel::Filters;
        panel.press(true);
        assert_eq!(panel, OpenPanel::Filters);
        panel.press(false);
        assert_eq!(panel, OpenPanel::None);
    }
}
