//! Wire format of a metrics export document.
//!
//! These types match the JSON produced by the metrics exporter:
//!
//! ```json
//! {"data": [{"metricData": [{"dtime": "...", "metricValue": 0}, ...]}]}
//! ```
//!
//! Missing wrapper fields default to empty collections so that a
//! structurally hollow document surfaces as "no dataset" rather than a parse
//! error; only malformed JSON fails at the serde layer.

use serde::{Deserialize, Serialize};

use ratewatch_types::{Sample, Series};

/// Top-level export document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Exported series. Only the first one is analysed.
    #[serde(default)]
    pub data: Vec<MetricSeries>,
}

/// A single exported series of samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSeries {
    #[serde(rename = "metricData", default)]
    pub metric_data: Vec<Sample>,
}

impl ExportDocument {
    /// Take the first series out of the document, if present and non-empty.
    pub fn into_series(self) -> Option<Series> {
        self.data
            .into_iter()
            .next()
            .map(|series| series.metric_data)
            .filter(|samples| !samples.is_empty())
    }
}
