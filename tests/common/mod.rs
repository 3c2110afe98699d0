//! Shared test fixtures: fake install trees on disk

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use mdpress::pipeline::templates;

/// Create an install tree with every template file, all three content
/// filters, and the logo asset present
pub fn full_install() -> TempDir {
    let dir = bare_install();
    for filter in [
        "remove-wikilinks.lua",
        "remove-checkboxes.lua",
        "actions-to-margin.lua",
    ] {
        touch(&dir.path().join("filters").join(filter));
    }
    touch(&dir.path().join("assets").join("logo.png"));
    dir
}

/// Create an install tree with template files only, no filters or logo
pub fn bare_install() -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in templates::registered_names() {
        touch(&dir.path().join("templates").join(format!("{name}.tex")));
    }
    dir
}

/// Create a file (and any missing parent directories) with placeholder content
pub fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"fixture").unwrap();
}
