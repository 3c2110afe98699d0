//! Mdpress: Markdown to PDF conversion CLI
//!
//! A thin orchestration layer over Pandoc and a LaTeX engine: validates
//! inputs, selects a template, assembles the pandoc command line, runs it,
//! and reports the outcome. All parsing, typesetting, and PDF production
//! happens in the external toolchain.

pub mod cli;
pub mod pipeline;
pub mod utils;
