use serde::{Deserialize, Serialize};

/// Root catalog document: `{ "categories": [...] }`.
///
/// Loaded once per session and treated as immutable afterwards. All CRUD
/// happens on the companion data server and is not reflected live.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Top-level catalog grouping, shown in the sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique, stable, used in URL paths.
    pub id: String,
    pub title: String,
    /// May be empty; an empty category renders a "no subgroups" state.
    #[serde(default)]
    pub subgroups: Vec<Subgroup>,
}

/// Second-level grouping within a category, browsed via carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subgroup {
    /// Unique within its category.
    pub id: String,
    pub title: String,
    /// Falls back to a category-keyed placeholder when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Leaf catalog entry with descriptive text and photos.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique within its subgroup.
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    /// Facet value; `type` in the wire format.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Takes precedence over `image` as the photo source when non-empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

impl Catalog {
    /// Look up a category by id, returning its position as well.
    pub fn category_by_id(&self, id: &str) -> Option<(usize, &Category)> {
        self.categories
            .iter()
            .enumerate()
            .find(|(_, c)| c.id == id)
    }
}

impl Category {
    pub fn subgroup_by_id(&self, id: &str) -> Option<(usize, &Subgroup)> {
        self.subgroups.iter().enumerate().find(|(_, s)| s.id == id)
    }
}

impl Subgroup {
    pub fn item_by_id(&self, id: &str) -> Option<(usize, &Item)> {
        self.items.iter().enumerate().find(|(_, i)| i.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sparse_document() {
        let doc = r#"{
            "categories": [
                { "id": "clay-tools", "title": "Clay tools" },
                {
                    "id": "stone-tools",
                    "title": "Stone tools",
                    "subgroups": [
                        {
                            "id": "chisels",
                            "title": "Chisels",
                            "items": [
                                { "id": "point-chisel", "name": "Point chisel", "type": "chisel" }
                            ]
                        }
                    ]
                }
            ]
        }"#;

        let catalog: Catalog = serde_json::from_str(doc).unwrap();
        assert_eq!(catalog.categories.len(), 2);
        assert!(catalog.categories[0].subgroups.is_empty());

        let (idx, category) = catalog.category_by_id("stone-tools").unwrap();
        assert_eq!(idx, 1);
        let (_, subgroup) = category.subgroup_by_id("chisels").unwrap();
        let (_, item) = subgroup.item_by_id("point-chisel").unwrap();
        assert_eq!(item.kind.as_deref(), Some("chisel"));
        assert!(item.images.is_empty());
    }

    #[test]
    fn test_reparsed_document_compares_equal() {
        let doc = r#"{ "categories": [{ "id": "clay-tools", "title": "Clay tools" }] }"#;
        let first: Catalog = serde_json::from_str(doc).unwrap();
        let second: Catalog = serde_json::from_str(doc).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_lookup_miss_returns_none() {
        let catalog = Catalog::default();
        assert!(catalog.category_by_id("missing").is_none());
    }
}
