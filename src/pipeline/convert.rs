//! Conversion driver: validate, assemble the pandoc command, execute

use std::path::PathBuf;

use super::command::{build_command, AuxResources, ConversionRequest};
use super::error::ConvertError;
use super::runner::ToolRunner;
use super::templates::TemplateRegistry;

/// Run one conversion end to end.
///
/// Preconditions are checked in order (input exists, template registered,
/// template file present) and each failure short-circuits before anything
/// is spawned. On success returns the path of the written PDF.
///
/// No cleanup is attempted on failure: if pandoc leaves a partial output
/// file behind, it stays on disk.
pub fn run_convert(
    request: &ConversionRequest,
    registry: &TemplateRegistry,
    aux: &AuxResources,
    runner: &dyn ToolRunner,
) -> Result<PathBuf, ConvertError> {
    if !request.input.exists() {
        return Err(ConvertError::InputNotFound(request.input.clone()));
    }

    let template_file = registry
        .resolve(&request.template)
        .ok_or_else(|| ConvertError::UnknownTemplate(request.template.clone()))?;

    if !template_file.exists() {
        return Err(ConvertError::TemplateFileMissing(template_file.to_path_buf()));
    }

    let spec = build_command(request, template_file, aux);
    let output = runner.run(&spec)?;

    if !output.success {
        return Err(ConvertError::ToolFailed {
            stderr: output.stderr,
        });
    }

    Ok(request.output.clone())
}
