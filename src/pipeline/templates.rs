//! Fixed template registry mapping template names to LaTeX files

use std::path::{Path, PathBuf};

use super::layout::InstallLayout;

/// Registered template names, in listing order
const TEMPLATE_NAMES: [&str; 7] = [
    "professional",
    "minimal",
    "report",
    "tufte1",
    "tufte2",
    "tufte3",
    "tufte",
];

/// Template used when -t/--template is not given
pub const DEFAULT_TEMPLATE: &str = "professional";

/// Whether a template name is in the fixed registered set
pub fn is_registered(name: &str) -> bool {
    TEMPLATE_NAMES.contains(&name)
}

/// All registered template names, in registration order
pub fn registered_names() -> impl Iterator<Item = &'static str> {
    TEMPLATE_NAMES.iter().copied()
}

/// Immutable mapping from template name to its backing `.tex` file.
///
/// Built once per process from the fixed name list; whether a backing file
/// actually exists is checked lazily at use time, never at construction.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    entries: Vec<(String, PathBuf)>,
}

impl TemplateRegistry {
    /// Build the registry rooted at the given install layout
    pub fn new(layout: &InstallLayout) -> Self {
        let templates_dir = layout.templates_dir();
        let entries = TEMPLATE_NAMES
            .iter()
            .map(|name| (name.to_string(), templates_dir.join(format!("{name}.tex"))))
            .collect();
        Self { entries }
    }

    /// Backing file for a registered template name, None if unregistered
    pub fn resolve(&self, name: &str) -> Option<&Path> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, path)| path.as_path())
    }

    /// Template name and whether its backing file currently exists,
    /// one entry per registered template in registration order
    pub fn availability(&self) -> Vec<(String, bool)> {
        self.entries
            .iter()
            .map(|(name, path)| (name.clone(), path.exists()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_is_registered() {
        assert!(is_registered(DEFAULT_TEMPLATE));
    }

    #[test]
    fn test_unknown_name_is_not_registered() {
        assert!(!is_registered("formal"));
        assert!(!is_registered(""));
    }

    #[test]
    fn test_resolve_maps_into_templates_dir() {
        let layout = InstallLayout::new("/opt/mdpress");
        let registry = TemplateRegistry::new(&layout);

        let path = registry.resolve("minimal").expect("minimal is registered");
        assert_eq!(path, Path::new("/opt/mdpress/templates/minimal.tex"));
        assert!(registry.resolve("nonexistent").is_none());
    }
}
