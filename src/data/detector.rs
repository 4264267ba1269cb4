//! Threshold-based under-performance boundary detection.
//!
//! A boundary is recorded whenever the absolute delta between two
//! consecutive samples strictly exceeds the input unit's threshold. The
//! threshold and the sample values share the input unit's native scale;
//! neither is converted.

use ratewatch_types::{Sample, UnderperformancePeriod};

/// Scan a chronologically ordered series and collect boundary timestamps of
/// under-performing periods.
///
/// The returned list alternates period starts and ends and is consumed in
/// pairs: `[t0, t1, t2, t3]` means periods `(t0, t1)` and `(t2, t3)`. A
/// start boundary carries the current sample's timestamp, an end boundary
/// the previous sample's. Timestamps are the raw, unparsed strings from the
/// input samples.
///
/// The series is scanned in its given order, which must be chronological for
/// the alternating start/end semantics to be meaningful; nothing is re-sorted
/// here.
pub fn detect(series: &[Sample], threshold: f64) -> Vec<String> {
    let mut boundaries = Vec::new();
    let mut expecting_start = true;

    for (i, sample) in series.iter().enumerate() {
        // The first sample compares against itself and can never trigger.
        let previous = if i == 0 { sample } else { &series[i - 1] };

        if (sample.value - previous.value).abs() > threshold {
            if expecting_start {
                boundaries.push(sample.dtime.clone());
            } else {
                boundaries.push(previous.dtime.clone());
            }
            expecting_start = !expecting_start;
        }
    }

    boundaries
}

/// Pair boundary timestamps into periods.
///
/// A trailing unmatched start (odd-length input) denotes an incomplete final
/// period and is dropped.
pub fn pair_periods(boundaries: &[String]) -> Vec<UnderperformancePeriod> {
    boundaries
        .chunks_exact(2)
        .map(|pair| UnderperformancePeriod::new(pair[0].clone(), pair[1].clone()))
        .collect()
}
