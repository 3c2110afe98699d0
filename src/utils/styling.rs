//! Terminal styling helpers for status output

use std::path::Path;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

/// Print the header echoed before a conversion starts
pub fn print_run_header(input: &Path, template: &str, output: &Path, logo_in_use: bool) {
    println!("{}", style("Generating PDF...").cyan().bold());
    println!("  Input:    {}", style(input.display()).dim());
    println!("  Template: {}", style(template).dim());
    println!("  Output:   {}", style(output.display()).dim());
    if logo_in_use {
        println!("  Logo:     {}", style("Using bundled logo").dim());
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("\n{} {}", style("✓").green().bold(), style(message).green());
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("\n{} {}", style("✗").red().bold(), style(message).red());
}

/// Render the template availability table for --list-templates
pub fn print_template_table(availability: &[(String, bool)]) {
    println!("\n{}", style("Available templates:").cyan().bold());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Template").add_attribute(Attribute::Bold),
        Cell::new("Status").add_attribute(Attribute::Bold),
    ]);

    for (name, available) in availability {
        let status = if *available {
            Cell::new("✓ available").fg(Color::Green)
        } else {
            Cell::new("✗ missing").fg(Color::Red)
        };
        table.add_row(vec![Cell::new(name), status]);
    }

    println!("{table}");
}
