use std::collections::HashSet;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde_json::json;

use atelier_types::Catalog;

use crate::args::OutputFormat;
use crate::loader::{self, DataSource};

pub fn handle(source: &DataSource, format: OutputFormat) -> Result<()> {
    let catalog = loader::load(source)
        .with_context(|| format!("Failed to load catalog from {}", source.describe()))?;

    let problems = validate(&catalog);
    let subgroup_count: usize = catalog.categories.iter().map(|c| c.subgroups.len()).sum();
    let item_count: usize = catalog
        .categories
        .iter()
        .flat_map(|c| &c.subgroups)
        .map(|s| s.items.len())
        .sum();

    match format {
        OutputFormat::Json => {
            let output = json!({
                "source": source.describe(),
                "categories": catalog.categories.len(),
                "subgroups": subgroup_count,
                "items": item_count,
                "problems": problems,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Source: {}", source.describe());
            println!(
                "Counts: {} categories, {} subgroups, {} items",
                catalog.categories.len(),
                subgroup_count,
                item_count
            );
            println!();
            if problems.is_empty() {
                println!("Status: {}", "✓ Valid".green().bold());
            } else {
                println!("Status: {}", "✗ Invalid".red().bold());
                println!();
                for problem in &problems {
                    println!("  {}", problem.red());
                }
            }
        }
    }

    if !problems.is_empty() {
        anyhow::bail!("{} problem(s) found", problems.len());
    }

    Ok(())
}

/// Structural checks over the loaded document. Ids must be non-empty and
/// unique within their scope (category ids globally, subgroup ids per
/// category, item ids per subgroup), since every route segment is an id
/// lookup.
fn validate(catalog: &Catalog) -> Vec<String> {
    let mut problems = Vec::new();

    let mut category_ids = HashSet::new();
    for category in &catalog.categories {
        if category.id.is_empty() {
            problems.push(format!("category {:?} has an empty id", category.title));
        } else if !category_ids.insert(category.id.as_str()) {
            problems.push(format!("duplicate category id {:?}", category.id));
        }

        let mut subgroup_ids = HashSet::new();
        for subgroup in &category.subgroups {
            if subgroup.id.is_empty() {
                problems.push(format!(
                    "subgroup {:?} in category {:?} has an empty id",
                    subgroup.title, category.id
                ));
            } else if !subgroup_ids.insert(subgroup.id.as_str()) {
                problems.push(format!(
                    "duplicate subgroup id {:?} in category {:?}",
                    subgroup.id, category.id
                ));
            }

            let mut item_ids = HashSet::new();
            for item in &subgroup.items {
                if item.id.is_empty() {
                    problems.push(format!(
                        "item {:?} in subgroup {:?} has an empty id",
                        item.name, subgroup.id
                    ));
                } else if !item_ids.insert(item.id.as_str()) {
                    problems.push(format!(
                        "duplicate item id {:?} in subgroup {:?}",
                        item.id, subgroup.id
                    ));
                }
                if item.name.is_empty() {
                    problems.push(format!("item {:?} has an empty name", item.id));
                }
            }
        }
    }

    problems
}
