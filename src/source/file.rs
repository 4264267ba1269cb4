//! File-based export loading.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use ratewatch_types::Series;

use super::ExportDocument;

/// Errors that can occur while loading a metrics export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The export file could not be read.
    #[error("Failed to get content from file: {0}")]
    Read(#[from] std::io::Error),

    /// The file content is not valid JSON.
    #[error("Failed to parse metrics export: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but contains no usable sample series.
    #[error("Metrics data not found in file. Make sure that the file content and format are valid")]
    DatasetNotFound,
}

/// Load the sample series from an export file.
pub fn load_export(path: &Path) -> Result<Series, ExportError> {
    let content = fs::read_to_string(path)?;
    let series = parse_export(&content)?;
    debug!(path = %path.display(), samples = series.len(), "loaded metrics export");
    Ok(series)
}

/// Parse the sample series out of an export document string.
pub fn parse_export(content: &str) -> Result<Series, ExportError> {
    let document: ExportDocument = serde_json::from_str(content)?;
    document.into_series().ok_or(ExportError::DatasetNotFound)
}
