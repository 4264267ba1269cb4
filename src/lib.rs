//! # ratewatch
//!
//! Analyses a data-rate metrics export and produces an operator report:
//! summary statistics (average/min/max/median, converted between units) and
//! the under-performing periods where the rate changed abruptly.
//!
//! ## Architecture
//!
//! The crate is organized into three main modules:
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                         CLI (main)                        │
//! │  ┌─────────┐      ┌──────────┐      ┌─────────┐           │
//! │  │ source  │─────▶│   data   │─────▶│ report  │──▶ stdout │
//! │  │ (input) │      │(analysis)│      │ (text)  │           │
//! │  └─────────┘      └──────────┘      └─────────┘           │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`source`]**: loads and validates the exporter's JSON document and
//!   flattens it into a [`ratewatch_types::Series`]
//! - **[`data`]**: the analysis engine - summary statistics with unit
//!   conversion, under-performance boundary detection, and the
//!   [`data::analyse`] facade tying them together
//! - **[`report`]**: renders the plain-text operator report, including the
//!   "Period checked" date range and the "Investigate" section
//!
//! Unit definitions (symbols, conversion factors, thresholds) live in the
//! `ratewatch-types` crate.
//!
//! ## Usage
//!
//! ```bash
//! # Analyse a metrics export recorded in bytes, reporting in megabits
//! ratewatch --path-to-file export.json --input-unit-symbol B --output-unit-symbol Mbit
//! ```
//!
//! As a library:
//!
//! ```no_run
//! use ratewatch::{analyse, load_export};
//!
//! # fn run() -> anyhow::Result<()> {
//! let series = load_export(std::path::Path::new("export.json"))?;
//! let report = analyse(&series, "B", "Mbit")?;
//! println!("average: {}", report.summary.average);
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod report;
pub mod source;

// Re-export main types for convenience
pub use data::{analyse, AnalysisError, AnalysisReport};
pub use report::{render, ReportMeta};
pub use source::{load_export, parse_export, ExportError};
