//! Unit tests for the template registry

use std::fs;

use mdpress::pipeline::{templates, InstallLayout, TemplateRegistry};

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_one_entry_per_registered_template() {
    let dir = common::full_install();
    let registry = TemplateRegistry::new(&InstallLayout::new(dir.path()));

    let availability = registry.availability();
    let expected: Vec<&str> = templates::registered_names().collect();

    assert_eq!(availability.len(), expected.len());
    for ((name, _), expected_name) in availability.iter().zip(expected) {
        assert_eq!(name, expected_name, "Entries must keep registration order");
    }
}

#[test]
fn test_availability_reflects_filesystem_state() {
    let dir = common::full_install();
    let registry = TemplateRegistry::new(&InstallLayout::new(dir.path()));

    for (name, available) in registry.availability() {
        assert!(available, "Template '{}' should be present in full fixture", name);
    }

    // Removing one backing file flips only that entry
    fs::remove_file(dir.path().join("templates/report.tex")).unwrap();
    for (name, available) in registry.availability() {
        if name == "report" {
            assert!(!available, "Deleted template should be flagged missing");
        } else {
            assert!(available, "Template '{}' should remain available", name);
        }
    }
}

#[test]
fn test_resolve_registered_and_unknown_names() {
    let dir = common::bare_install();
    let registry = TemplateRegistry::new(&InstallLayout::new(dir.path()));

    let path = registry.resolve("tufte2").expect("tufte2 is registered");
    assert_eq!(path, dir.path().join("templates/tufte2.tex"));

    assert!(registry.resolve("formal").is_none());
    assert!(registry.resolve("").is_none());
}

#[test]
fn test_registry_construction_does_not_require_files() {
    // Backing files are checked lazily; an empty root is fine to build from
    let dir = tempfile::TempDir::new().unwrap();
    let registry = TemplateRegistry::new(&InstallLayout::new(dir.path()));

    assert!(registry.resolve("professional").is_some());
    assert!(registry.availability().iter().all(|(_, available)| !available));
}
