//! Install layout - where templates, filters, and assets live on disk

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Directory layout the auxiliary resources hang off.
///
/// In production the root is the directory containing the running
/// executable; tests construct layouts rooted at temporary directories.
#[derive(Debug, Clone)]
pub struct InstallLayout {
    root: PathBuf,
}

impl InstallLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Layout rooted at the running executable's directory
    pub fn detect() -> Result<Self> {
        let exe = std::env::current_exe().context("Failed to locate the running executable")?;
        let root = exe
            .parent()
            .context("Executable path has no parent directory")?
            .to_path_buf();
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one LaTeX template file per registered name
    pub fn templates_dir(&self) -> PathBuf {
        self.root.join("templates")
    }

    /// Directory holding the Lua content filters consumed by pandoc
    pub fn filters_dir(&self) -> PathBuf {
        self.root.join("filters")
    }

    /// Optional logo image passed to non-tufte templates
    pub fn logo_path(&self) -> PathBuf {
        self.root.join("assets").join("logo.png")
    }

    /// Filter stripping wikilink syntax the templates cannot render
    pub fn wikilink_filter(&self) -> PathBuf {
        self.filters_dir().join("remove-wikilinks.lua")
    }

    /// Filter stripping checkbox list markers
    pub fn checkbox_filter(&self) -> PathBuf {
        self.filters_dir().join("remove-checkboxes.lua")
    }

    /// Filter moving action items into the margin, tufte layouts only
    pub fn margin_filter(&self) -> PathBuf {
        self.filters_dir().join("actions-to-margin.lua")
    }
}
