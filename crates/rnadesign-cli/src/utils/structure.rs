use crate::cli::StructureSource;
use crate::error::{CliError, Result};
use std::path::Path;
use tracing::debug;

/// Returns the dot-bracket pattern given inline or read from a file.
pub fn resolve(source: &StructureSource) -> Result<String> {
    match (&source.structure, &source.structure_file) {
        (Some(pattern), None) => Ok(pattern.trim().to_string()),
        (None, Some(path)) => read_structure_file(path),
        _ => Err(CliError::Argument(
            "exactly one of --structure or --structure-file is required".to_string(),
        )),
    }
}

fn read_structure_file(path: &Path) -> Result<String> {
    debug!("Reading structure from file: {:?}", path);
    let content = std::fs::read_to_string(path)?;
    content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
        .ok_or_else(|| CliError::FileParsing {
            path: path.to_path_buf(),
            source: anyhow::anyhow!("file contains no structure line"),
        })
}
