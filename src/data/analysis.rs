//! The analysis facade.
//!
//! This is the sole entry point the report layer calls: it resolves the unit
//! pair, computes the converted summary statistics, and pairs the detector's
//! boundary timestamps into under-performing periods. Pure computation, no
//! I/O; identical inputs always produce identical results.

use serde::Serialize;

use ratewatch_types::{RateUnit, Sample, StatisticsSummary, UnderperformancePeriod};

use super::detector;
use super::error::AnalysisError;
use super::stats;

/// The complete result of analysing a series for a unit pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Statistics converted to the output unit, rounded to 2 decimals.
    pub summary: StatisticsSummary,
    /// Under-performing periods in series order.
    pub periods: Vec<UnderperformancePeriod>,
}

/// Analyse a series recorded in `input_symbol`, reporting statistics in
/// `output_symbol`.
///
/// Both unit symbols are resolved before the series is inspected, so unit
/// errors surface even for an empty series. Detection runs against the input
/// unit's threshold in the raw sample scale; a trailing unmatched boundary
/// is dropped when pairing.
pub fn analyse(
    series: &[Sample],
    input_symbol: &str,
    output_symbol: &str,
) -> Result<AnalysisReport, AnalysisError> {
    let input_unit = RateUnit::new(input_symbol);
    let output_unit = RateUnit::new(output_symbol);

    let factor = input_unit.conversion_to(&output_unit)?;
    let threshold = input_unit.threshold()?;

    let values: Vec<f64> = series.iter().map(|sample| sample.value).collect();
    let summary = stats::compute_summary(&values, factor)?;

    let boundaries = detector::detect(series, threshold);
    let periods = detector::pair_periods(&boundaries);

    Ok(AnalysisReport { summary, periods })
}
