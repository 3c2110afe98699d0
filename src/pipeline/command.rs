//! Pandoc command assembly
//!
//! Building the argv is a pure function of the conversion request, the
//! resolved template file, and a snapshot of which auxiliary resources
//! exist, so it can be tested without spawning anything.

use std::path::{Path, PathBuf};

use super::layout::InstallLayout;

/// External converter binary, expected on PATH
pub const PANDOC_BIN: &str = "pandoc";

/// Resolved parameters for a single conversion run
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub template: String,
}

impl ConversionRequest {
    /// Resolve a request from caller-supplied arguments.
    ///
    /// When no output path is given, the output is the input path with its
    /// extension replaced by `.pdf`, in the same directory.
    pub fn new(input: PathBuf, output: Option<PathBuf>, template: &str) -> Self {
        let output = output.unwrap_or_else(|| input.with_extension("pdf"));
        Self {
            input,
            output,
            template: template.to_string(),
        }
    }
}

/// Whether a template belongs to the tufte family of narrow-margin layouts.
/// The match is on the substring anywhere in the name, so `tufte1`,
/// `tufte2`, and plain `tufte` all qualify.
pub fn is_tufte_family(template: &str) -> bool {
    template.contains("tufte")
}

/// Snapshot of which optional resources exist on disk, taken once per run
#[derive(Debug, Clone, Default)]
pub struct AuxResources {
    pub logo: Option<PathBuf>,
    pub wikilink_filter: Option<PathBuf>,
    pub checkbox_filter: Option<PathBuf>,
    pub margin_filter: Option<PathBuf>,
}

impl AuxResources {
    /// Probe the install layout for the optional logo and filters
    pub fn probe(layout: &InstallLayout) -> Self {
        Self {
            logo: existing(layout.logo_path()),
            wikilink_filter: existing(layout.wikilink_filter()),
            checkbox_filter: existing(layout.checkbox_filter()),
            margin_filter: existing(layout.margin_filter()),
        }
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.exists().then_some(path)
}

/// Ordered argv for one converter invocation, built fresh per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

/// Assemble the pandoc invocation for a request.
///
/// Argument order is fixed: input, output, engine, template, geometry,
/// disabled task-list extension, then content filters (wikilink, checkbox,
/// margin-annotation for tufte layouts), then the logo variable for
/// non-tufte layouts when the asset exists.
pub fn build_command(
    request: &ConversionRequest,
    template_file: &Path,
    aux: &AuxResources,
) -> CommandSpec {
    let mut args = vec![
        request.input.display().to_string(),
        "-o".to_string(),
        request.output.display().to_string(),
        "--pdf-engine=pdflatex".to_string(),
        "--template".to_string(),
        template_file.display().to_string(),
        "--variable".to_string(),
        "geometry:margin=1in".to_string(),
        "-f".to_string(),
        "markdown-task_lists".to_string(),
    ];

    if let Some(filter) = &aux.wikilink_filter {
        args.push("--lua-filter".to_string());
        args.push(filter.display().to_string());
    }

    if let Some(filter) = &aux.checkbox_filter {
        args.push("--lua-filter".to_string());
        args.push(filter.display().to_string());
    }

    if is_tufte_family(&request.template) {
        if let Some(filter) = &aux.margin_filter {
            args.push("--lua-filter".to_string());
            args.push(filter.display().to_string());
        }
    } else if let Some(logo) = &aux.logo {
        // pdflatex wants forward slashes, whatever the host convention
        let logo = logo.display().to_string().replace('\\', "/");
        args.push("--variable".to_string());
        args.push(format!("logo={logo}"));
    }

    CommandSpec {
        program: PANDOC_BIN.to_string(),
        args,
    }
}
