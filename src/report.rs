//! Plain-text report assembly.
//!
//! Renders the operator-facing summary: report header, the date range
//! covered by the samples, the converted statistics, and an "Investigate"
//! section listing any under-performing periods.

use anyhow::{Context, Result};

use ratewatch_types::Sample;

use crate::data::timestamp::parse_timestamp;
use crate::data::AnalysisReport;

/// Report header metadata, supplied by the environment.
#[derive(Debug, Clone)]
pub struct ReportMeta {
    pub owner: String,
    pub version: String,
}

impl ReportMeta {
    /// Read metadata from the `SUMMARY_OWNER` and `SUMMARY_VERSION`
    /// environment variables. Both are required.
    pub fn from_env() -> Result<Self> {
        let owner = std::env::var("SUMMARY_OWNER")
            .context("SUMMARY_OWNER environment variable is not defined")?;
        let version = std::env::var("SUMMARY_VERSION")
            .context("SUMMARY_VERSION environment variable is not defined")?;
        Ok(Self { owner, version })
    }
}

/// Render the full text report for an analysed series.
///
/// `unit_label` is the output unit's display name ("Megabits per second").
/// Statistics print with PHP-style float formatting: `50.0` renders as `50`.
pub fn render(
    meta: &ReportMeta,
    series: &[Sample],
    unit_label: &str,
    report: &AnalysisReport,
) -> Result<String> {
    let (from, to) = period_checked(series)?;

    let mut out = String::new();
    out.push_str(&format!("{} Metric Analyser {}\n", meta.owner, meta.version));
    out.push_str("===============================\n\n");
    out.push_str("Period checked:\n\n");
    out.push_str(&format!("    From: {from}\n"));
    out.push_str(&format!("    To:   {to}\n\n"));
    out.push_str("Statistics:\n\n");
    out.push_str(&format!("    Unit: {unit_label}\n\n"));
    out.push_str(&format!("    Average: {}\n", report.summary.average));
    out.push_str(&format!("    Min: {}\n", report.summary.min));
    out.push_str(&format!("    Max: {}\n", report.summary.max));
    out.push_str(&format!("    Median: {}", report.summary.median));

    if !report.periods.is_empty() {
        out.push_str("\n\nInvestigate:\n\n");
        for period in &report.periods {
            out.push_str(&format!(
                "    * The period between {} and {}\n      was under-performing.\n",
                period.start, period.end
            ));
        }
    }

    Ok(out)
}

/// Min and max sample timestamps, formatted as dates.
fn period_checked(series: &[Sample]) -> Result<(String, String)> {
    let mut times = Vec::with_capacity(series.len());
    for sample in series {
        let parsed = parse_timestamp(&sample.dtime)
            .with_context(|| format!("Bad sample timestamp {:?}", sample.dtime))?;
        times.push(parsed);
    }

    let from = times.iter().min().context("Metric series is empty")?;
    let to = times.iter().max().context("Metric series is empty")?;

    Ok((
        from.format("%Y-%m-%d").to_string(),
        to.format("%Y-%m-%d").to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::analyse;
    use ratewatch_types::RateUnit;

    fn meta() -> ReportMeta {
        ReportMeta {
            owner: "Acme".to_string(),
            version: "v1.0".to_string(),
        }
    }

    fn quiet_series() -> Vec<Sample> {
        vec![
            Sample::new("2018-02-26 00:00:00", 1_000_000.0),
            Sample::new("2018-02-27 00:00:00", 2_000_000.0),
        ]
    }

    #[test]
    fn test_report_without_periods_ends_at_median() {
        let series = quiet_series();
        let report = analyse(&series, "B", "Mbit").unwrap();
        let unit_label = RateUnit::new("Mbit").display_name().unwrap();

        let text = render(&meta(), &series, &unit_label, &report).unwrap();

        let expected = "\
Acme Metric Analyser v1.0
===============================

Period checked:

    From: 2018-02-26
    To:   2018-02-27

Statistics:

    Unit: Megabits per second

    Average: 12
    Min: 8
    Max: 16
    Median: 12";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_report_lists_each_period() {
        let series = vec![
            Sample::new("2018-02-26 00:00:00", 1_000_000.0),
            Sample::new("2018-02-26 06:00:00", 8_000_000.0),
            Sample::new("2018-02-26 12:00:00", 1_000_000.0),
            Sample::new("2018-02-26 18:00:00", 1_000_000.0),
            Sample::new("2018-02-27 00:00:00", 8_000_000.0),
            Sample::new("2018-02-27 06:00:00", 1_000_000.0),
        ];
        let report = analyse(&series, "B", "Mbit").unwrap();
        assert_eq!(report.periods.len(), 2);

        let unit_label = RateUnit::new("Mbit").display_name().unwrap();
        let text = render(&meta(), &series, &unit_label, &report).unwrap();

        assert!(text.contains("Investigate:\n"));
        assert!(text.contains(
            "    * The period between 2018-02-26 06:00:00 and 2018-02-26 06:00:00\n      was under-performing.\n"
        ));
        assert!(text.contains(
            "    * The period between 2018-02-27 00:00:00 and 2018-02-27 00:00:00\n      was under-performing.\n"
        ));
    }

    #[test]
    fn test_period_checked_uses_min_and_max_dates() {
        // Range is min/max over parsed timestamps, not first/last position.
        let series = vec![
            Sample::new("2018-02-27 00:00:00", 1.0),
            Sample::new("2018-02-25 00:00:00", 1.0),
            Sample::new("2018-02-26 00:00:00", 1.0),
        ];

        let (from, to) = period_checked(&series).unwrap();
        assert_eq!(from, "2018-02-25");
        assert_eq!(to, "2018-02-27");
    }

    #[test]
    fn test_render_fails_on_unparseable_timestamp() {
        let series = vec![Sample::new("not a timestamp", 1.0)];
        let report = analyse(&quiet_series(), "B", "Mbit").unwrap();

        assert!(render(&meta(), &series, "Bytes per second", &report).is_err());
    }
}
