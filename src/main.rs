//! Mdpress: Markdown to PDF conversion CLI
//!
//! Validates the request, assembles a pandoc command line for the selected
//! LaTeX template, runs it, and reports the outcome.

mod cli;
mod pipeline;
mod utils;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::Cli;
use pipeline::{
    is_tufte_family, run_convert, AuxResources, ConversionRequest, InstallLayout, SystemRunner,
    TemplateRegistry,
};
use utils::{create_spinner, print_error, print_run_header, print_success, print_template_table};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let layout = InstallLayout::detect()?;
    let registry = TemplateRegistry::new(&layout);

    if cli.list_templates {
        print_template_table(&registry.availability());
        return Ok(());
    }

    // Plain `mdpress` with no input behaves like `mdpress --help`
    let Some(input) = cli.input else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let request = ConversionRequest::new(input, cli.output, &cli.template);
    let aux = AuxResources::probe(&layout);

    let logo_in_use = aux.logo.is_some() && !is_tufte_family(&request.template);
    print_run_header(&request.input, &request.template, &request.output, logo_in_use);

    let spinner = create_spinner("Running pandoc...");
    match run_convert(&request, &registry, &aux, &SystemRunner) {
        Ok(output) => {
            spinner.finish_and_clear();
            print_success(&format!("Successfully generated: {}", output.display()));
            Ok(())
        }
        Err(err) => {
            spinner.finish_and_clear();
            print_error(&err.to_string());
            std::process::exit(1);
        }
    }
}
