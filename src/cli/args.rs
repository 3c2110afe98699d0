//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::templates::{self, DEFAULT_TEMPLATE};

/// Generate polished PDFs from Markdown files using Pandoc and LaTeX
#[derive(Parser, Debug)]
#[command(name = "mdpress")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:
  mdpress document.md
  mdpress document.md --template minimal
  mdpress document.md -o output.pdf --template report")]
pub struct Cli {
    /// Input Markdown file
    pub input: Option<PathBuf>,

    /// Output PDF file (default: input file name with a .pdf extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// LaTeX template to use
    #[arg(short, long, default_value = DEFAULT_TEMPLATE, value_parser = validate_template)]
    pub template: String,

    /// List available templates and exit
    #[arg(long, default_value = "false")]
    pub list_templates: bool,
}

/// Validator for the template name, rejecting unregistered names at parse time
fn validate_template(s: &str) -> Result<String, String> {
    if templates::is_registered(s) {
        Ok(s.to_string())
    } else {
        Err(format!(
            "'{}' is not a registered template. Use --list-templates to see available templates",
            s
        ))
    }
}
