//! Analysis of metric series.
//!
//! This module turns a raw sample series and a unit pair into summary
//! statistics and a list of under-performing periods.
//!
//! ## Submodules
//!
//! - [`stats`]: summary statistics (average/min/max/median) with unit
//!   conversion and rounding
//! - [`detector`]: threshold-based under-performance boundary detection
//! - [`analysis`]: the [`analyse`] facade tying the two together
//! - [`timestamp`]: parsing of sample timestamps for report date ranges
//!
//! ## Data Flow
//!
//! ```text
//! Series (raw samples)
//!        │
//!        ▼
//! analyse(series, input unit, output unit)
//!        │
//!        ├──▶ stats::compute_summary() (converted, rounded statistics)
//!        │
//!        └──▶ detector::detect() ──▶ detector::pair_periods()
//! ```

pub mod analysis;
pub mod detector;
mod error;
pub mod stats;
pub mod timestamp;

pub use analysis::{analyse, AnalysisReport};
pub use error::AnalysisError;
