//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

pub struct TestFixture {
    temp_dir: TempDir,
    catalog_path: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    /// A fixture with the sample catalog already on disk.
    pub fn new() -> Self {
        let fixture = Self::empty();
        fixture.write_catalog(SAMPLE_CATALOG);
        fixture
    }

    pub fn empty() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let catalog_path = temp_dir.path().join("catalog.json");
        Self {
            temp_dir,
            catalog_path,
        }
    }

    pub fn write_catalog(&self, content: &str) {
        fs::write(&self.catalog_path, content).expect("Failed to write catalog");
    }

    pub fn catalog_path(&self) -> &PathBuf {
        &self.catalog_path
    }

    /// A command with HOME pointed at the temp dir, so no real config file
    /// leaks into the test, and --data pointed at the fixture catalog.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("atelier").expect("Binary not built");
        cmd.env("HOME", self.temp_dir.path());
        cmd.arg("--data").arg(&self.catalog_path);
        cmd
    }
}

pub const SAMPLE_CATALOG: &str = r#"{
    "categories": [
        {
            "id": "clay-tools",
            "title": "Clay tools",
            "subgroups": [
                {
                    "id": "pots",
                    "title": "Pots",
                    "image": "pots.png",
                    "items": [
                        {
                            "id": "loop-tool",
                            "name": "Loop tool",
                            "description": "Shapes soft clay. Removes material in curls; leaves a smooth surface.",
                            "features": "steel loop, wooden handle",
                            "purpose": "Hollowing and trimming leather-hard pots.",
                            "type": "loop",
                            "material": "steel",
                            "image": "loop.png",
                            "images": ["loop_front.png", "loop_side.png"]
                        },
                        {
                            "id": "rib",
                            "name": "Wooden rib",
                            "type": "rib",
                            "material": "wood"
                        }
                    ]
                },
                {
                    "id": "wires",
                    "title": "Cutting wires",
                    "items": []
                }
            ]
        },
        {
            "id": "stone-tools",
            "title": "Stone tools"
        }
    ]
}"#;
