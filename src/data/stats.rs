//! Summary statistics over a metric series.
//!
//! Average, min, and max are computed over the values in their original
//! order; the median sorts a private copy. Each statistic is computed on the
//! raw value, multiplied by the conversion factor, and only then rounded -
//! the order is observable for factors that land on a rounding boundary.

use std::cmp::Ordering;

use ratewatch_types::StatisticsSummary;

use super::error::AnalysisError;

/// Round to 2 decimal places, half away from zero (`f64::round` semantics).
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute summary statistics over raw input-unit values.
///
/// `conversion_factor` multiplies a raw value to produce the output-unit
/// value. Fails with [`AnalysisError::EmptyDataset`] when `values` is empty.
pub fn compute_summary(
    values: &[f64],
    conversion_factor: f64,
) -> Result<StatisticsSummary, AnalysisError> {
    if values.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    let average = values.iter().sum::<f64>() / values.len() as f64;

    let min = values
        .iter()
        .copied()
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .unwrap_or(0.0);
    let max = values
        .iter()
        .copied()
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .unwrap_or(0.0);

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let mid = (sorted.len() - 1) / 2;
    let median = if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid] + sorted[mid + 1]) / 2.0
    };

    Ok(StatisticsSummary {
        average: round2(average * conversion_factor),
        min: round2(min * conversion_factor),
        max: round2(max * conversion_factor),
        median: round2(median * conversion_factor),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_with_even_count() {
        let summary = compute_summary(&[10.0, 20.0, 30.0, 40.0], 2.0).unwrap();

        assert_eq!(summary.average, 50.0);
        assert_eq!(summary.min, 20.0);
        assert_eq!(summary.max, 80.0);
        // sorted mid pair is (20, 30): (20 + 30) / 2 * 2 = 50
        assert_eq!(summary.median, 50.0);
    }

    #[test]
    fn test_median_with_odd_count_picks_middle_of_sorted_copy() {
        let summary = compute_summary(&[5.0, 1.0, 9.0], 1.0).unwrap();
        assert_eq!(summary.median, 5.0);
    }

    #[test]
    fn test_min_max_ignore_input_order() {
        let summary = compute_summary(&[30.0, 10.0, 40.0, 20.0], 1.0).unwrap();
        assert_eq!(summary.min, 10.0);
        assert_eq!(summary.max, 40.0);
    }

    #[test]
    fn test_single_sample() {
        let summary = compute_summary(&[7.0], 1.0).unwrap();
        assert_eq!(summary.average, 7.0);
        assert_eq!(summary.min, 7.0);
        assert_eq!(summary.max, 7.0);
        assert_eq!(summary.median, 7.0);
    }

    #[test]
    fn test_conversion_applied_before_rounding() {
        // Raw 0.123 with factor 10: convert-then-round gives 1.23, while
        // round-then-convert would give 1.2.
        let summary = compute_summary(&[0.123], 10.0).unwrap();
        assert_eq!(summary.average, 1.23);
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        // 0.125 is exactly representable in binary, so this pins the
        // tie-breaking rule rather than floating-point noise.
        let summary = compute_summary(&[0.125], 1.0).unwrap();
        assert_eq!(summary.average, 0.13);

        let summary = compute_summary(&[-0.125], 1.0).unwrap();
        assert_eq!(summary.average, -0.13);
    }

    #[test]
    fn test_byte_to_megabit_conversion() {
        let summary = compute_summary(&[1_000_000.0, 2_000_000.0], 8.0e-6).unwrap();
        assert_eq!(summary.average, 12.0);
        assert_eq!(summary.min, 8.0);
        assert_eq!(summary.max, 16.0);
        assert_eq!(summary.median, 12.0);
    }

    #[test]
    fn test_empty_series_fails() {
        let err = compute_summary(&[], 1.0).unwrap_err();
        assert_eq!(err, AnalysisError::EmptyDataset);
    }
}
