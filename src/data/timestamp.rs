//! Sample timestamp parsing for report date ranges.
//!
//! The analysis core treats timestamps as opaque strings; only the report's
//! "Period checked" range needs calendar dates.

use anyhow::{bail, Result};
use chrono::NaiveDateTime;

/// Accepted timestamp layouts (order matters: most common first).
const FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse an exporter timestamp like "2018-02-26 12:00:00".
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();

    for format in FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(parsed);
        }
    }

    bail!("Unrecognized timestamp format: {}", s)
}
