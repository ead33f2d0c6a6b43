mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_check_valid_catalog_succeeds() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Valid"))
        .stdout(predicate::str::contains(
            "2 categories, 2 subgroups, 2 items",
        ));
}

#[test]
fn test_check_reports_duplicate_ids_and_fails() {
    let fixture = TestFixture::empty();
    fixture.write_catalog(
        r#"{
            "categories": [
                {
                    "id": "clay-tools",
                    "title": "Clay tools",
                    "subgroups": [
                        {
                            "id": "pots",
                            "title": "Pots",
                            "items": [
                                { "id": "rib", "name": "Wooden rib" },
                                { "id": "rib", "name": "Steel rib" }
                            ]
                        }
                    ]
                }
            ]
        }"#,
    );

    fixture
        .command()
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ Invalid"))
        .stdout(predicate::str::contains("duplicate item id"))
        .stderr(predicate::str::contains("1 problem(s) found"));
}

#[test]
fn test_check_json_format() {
    let fixture = TestFixture::new();
    let output = fixture
        .command()
        .arg("--format")
        .arg("json")
        .arg("check")
        .output()
        .expect("Failed to run check");

    assert!(output.status.success());
    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Expected JSON output");
    assert_eq!(result["categories"], 2);
    assert_eq!(result["subgroups"], 2);
    assert_eq!(result["items"], 2);
    assert_eq!(result["problems"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_check_missing_file_fails() {
    let fixture = TestFixture::empty();
    fixture
        .command()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
}

#[test]
fn test_check_empty_catalog_is_valid() {
    let fixture = TestFixture::empty();
    fixture.write_catalog(r#"{ "categories": [] }"#);
    fixture
        .command()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Valid"));
}
