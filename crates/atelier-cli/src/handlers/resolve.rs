use anyhow::{Context, Result};
use serde_json::json;

use atelier_engine::{resolve, Resolution, Route};

use crate::args::OutputFormat;
use crate::loader::{self, DataSource};

/// Resolve a kiosk path against the catalog and print the position it
/// lands on, applying the same redirect rule as the browser: an unknown
/// path becomes /menu.
pub fn handle(source: &DataSource, path: &str, format: OutputFormat) -> Result<()> {
    let catalog = loader::load(source)
        .with_context(|| format!("Failed to load catalog from {}", source.describe()))?;

    let (route, redirected) = match Route::parse(path) {
        Some(route) => (route, false),
        None => (Route::Menu, true),
    };
    let resolution = resolve(&catalog, &route);

    match format {
        OutputFormat::Json => {
            let output = json!({
                "path": route.to_path(),
                "redirected": redirected,
                "resolution": resolution_json(&resolution),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if redirected {
                println!("Redirected to {}", route.to_path());
            } else {
                println!("Path: {}", route.to_path());
            }
            print_plain(&resolution);
        }
    }

    Ok(())
}

fn print_plain(resolution: &Resolution) {
    match resolution {
        Resolution::Splash => println!("Screen: splash"),
        Resolution::Menu => println!("Screen: menu"),
        Resolution::Catalog(None) => {
            println!("Screen: category (catalog is empty)");
        }
        Resolution::Catalog(Some(view)) => {
            println!("Screen: category");
            println!(
                "Category: {} ({}) at index {}",
                view.category.title, view.category.id, view.category_index
            );
        }
        Resolution::Subgroup(view) => {
            println!("Screen: subgroup");
            println!(
                "Category: {} ({}) at index {}",
                view.category.title, view.category.id, view.category_index
            );
            println!(
                "Subgroup: {} ({}) at index {}, {} items",
                view.subgroup.title,
                view.subgroup.id,
                view.subgroup_index,
                view.subgroup.items.len()
            );
        }
        Resolution::Item(view) => {
            println!("Screen: item");
            println!(
                "Category: {} ({}) at index {}",
                view.category.title, view.category.id, view.category_index
            );
            println!(
                "Subgroup: {} ({}) at index {}",
                view.subgroup.title, view.subgroup.id, view.subgroup_index
            );
            println!(
                "Item: {} ({}) at index {}",
                view.item.name, view.item.id, view.item_index
            );
        }
        Resolution::NotFound { level, back } => {
            println!("Screen: not-found");
            println!("{} Back leads to {}", level.message(), back.to_path());
        }
    }
}

fn resolution_json(resolution: &Resolution) -> serde_json::Value {
    match resolution {
        Resolution::Splash => json!({ "screen": "splash" }),
        Resolution::Menu => json!({ "screen": "menu" }),
        Resolution::Catalog(None) => json!({
            "screen": "category",
            "category": serde_json::Value::Null,
        }),
        Resolution::Catalog(Some(view)) => json!({
            "screen": "category",
            "category": {
                "id": view.category.id,
                "title": view.category.title,
                "index": view.category_index,
            },
        }),
        Resolution::Subgroup(view) => json!({
            "screen": "subgroup",
            "category": {
                "id": view.category.id,
                "title": view.category.title,
                "index": view.category_index,
            },
            "subgroup": {
                "id": view.subgroup.id,
                "title": view.subgroup.title,
                "index": view.subgroup_index,
                "items": view.subgroup.items.len(),
            },
        }),
        Resolution::Item(view) => json!({
            "screen": "item",
            "category": {
                "id": view.category.id,
                "title": view.category.title,
                "index": view.category_index,
            },
            "subgroup": {
                "id": view.subgroup.id,
                "title": view.subgroup.title,
                "index": view.subgroup_index,
            },
            "item": {
                "id": view.item.id,
                "name": view.item.name,
                "index": view.item_index,
            },
        }),
        Resolution::NotFound { level, back } => json!({
            "screen": "not-found",
            "level": level.label(),
            "back": back.to_path(),
        }),
    }
}
