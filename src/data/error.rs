//! Error types for the analysis engine.

use thiserror::Error;

use ratewatch_types::UnitError;

/// Errors surfaced by the analysis engine.
///
/// All variants are terminal for the current analysis call; the engine
/// performs no recovery and no logging, leaving presentation to the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// A unit lookup or conversion failed.
    #[error(transparent)]
    Unit(#[from] UnitError),

    /// The series contains no samples; statistics and detection are
    /// undefined over an empty series.
    #[error("Cannot analyse an empty metric series")]
    EmptyDataset,
}
