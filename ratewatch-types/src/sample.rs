//! Raw metric samples as they appear in a metrics export.

/// A single data-rate measurement.
///
/// The timestamp is kept exactly as the exporter wrote it. The analysis core
/// treats it as an opaque string; only report rendering parses it into a
/// calendar date. The value is in the *input* unit's native scale.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// Timestamp as written by the exporter, e.g. "2018-02-26 12:00:00".
    pub dtime: String,

    /// Measured rate in the input unit's native scale.
    #[cfg_attr(feature = "serde", serde(rename = "metricValue"))]
    pub value: f64,
}

impl Sample {
    /// Create a sample from a timestamp and a raw value.
    pub fn new(dtime: impl Into<String>, value: f64) -> Self {
        Self {
            dtime: dtime.into(),
            value,
        }
    }
}

/// A chronologically ordered series of samples.
///
/// Ordering is caller-guaranteed; the analysis core never re-sorts the
/// series itself (detection is order-sensitive) and only sorts a private
/// copy of the values when computing the median.
pub type Series = Vec<Sample>;
