//! Error types for the conversion pipeline.
//!
//! Every variant is terminal for the current invocation: the binary prints
//! the message and exits nonzero. Nothing is retried.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while validating a request or running pandoc
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Requested input file does not exist
    #[error("Input file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    /// Requested template identifier is not in the registry
    #[error("Template '{0}' not found. Use --list-templates to see available templates")]
    UnknownTemplate(String),

    /// Registered template's backing file is absent from disk
    #[error("Template file '{}' not found", .0.display())]
    TemplateFileMissing(PathBuf),

    /// Pandoc ran and exited nonzero; its stderr is relayed verbatim
    #[error("Error generating PDF:\n{stderr}")]
    ToolFailed { stderr: String },

    /// Pandoc could not be launched at all
    #[error("Pandoc not found in PATH. Please ensure Pandoc is installed and accessible")]
    ToolNotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_not_found_names_the_file() {
        let err = ConvertError::InputNotFound(PathBuf::from("missing.md"));
        assert_eq!(err.to_string(), "Input file 'missing.md' not found");
    }

    #[test]
    fn test_unknown_template_points_at_listing() {
        let err = ConvertError::UnknownTemplate("formal".to_string());
        assert!(err.to_string().contains("'formal'"));
        assert!(err.to_string().contains("--list-templates"));
    }

    #[test]
    fn test_tool_failed_relays_stderr_verbatim() {
        let err = ConvertError::ToolFailed {
            stderr: "! Undefined control sequence.".to_string(),
        };
        assert!(err.to_string().contains("! Undefined control sequence."));
    }
}
