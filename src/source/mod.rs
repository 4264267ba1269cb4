//! Loading metrics exports from disk.
//!
//! The exporter writes a JSON document wrapping the sample series; this
//! module reads that document, validates its shape, and flattens it into the
//! series the analysis engine consumes.

mod export;
mod file;

pub use export::{ExportDocument, MetricSeries};
pub use file::{load_export, parse_export, ExportError};
