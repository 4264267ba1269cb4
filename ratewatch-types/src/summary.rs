//! Analysis result types.

/// Summary statistics over a metric series.
///
/// Every field is already converted to the requested output unit and rounded
/// to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatisticsSummary {
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

/// A contiguous span during which the measured rate changed abruptly.
///
/// Both timestamps are taken verbatim from the samples that triggered the
/// boundary detection - not reformatted, not converted. A period may be
/// zero-width (`start == end`) when a spike reverts within one sample.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnderperformancePeriod {
    pub start: String,
    pub end: String,
}

impl UnderperformancePeriod {
    /// Create a period from its boundary timestamps.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_keeps_boundaries_verbatim() {
        let period = UnderperformancePeriod::new("2018-02-26 12:00:00", "2018-02-26 20:00:00");
        assert_eq!(period.start, "2018-02-26 12:00:00");
        assert_eq!(period.end, "2018-02-26 20:00:00");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn summary_serializes_with_plain_field_names() {
        let summary = StatisticsSummary {
            average: 55.7,
            min: 35.2,
            max: 88.8,
            median: 36.6,
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(
            json,
            r#"{"average":55.7,"min":35.2,"max":88.8,"median":36.6}"#
        );
    }
}
