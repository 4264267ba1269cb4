//! # ratewatch-types
//!
//! Core types for data-rate metrics analysis. This crate defines the unit
//! registry, the raw sample schema emitted by metrics exporters, and the
//! result types produced by the analysis engine in the `ratewatch` crate.
//!
//! ## Design Goals
//!
//! - **Fixed unit registry**: units, conversion factors, and significance
//!   thresholds live in an immutable built-in table - no runtime registration
//! - **Optional serialization**: enable the `serde` feature to read/write the
//!   exporter's JSON schema
//! - **Pure data**: no I/O anywhere; concurrent readers need no
//!   synchronization
//!
//! ## Features
//!
//! - `serde`: JSON serialization of samples and analysis results via serde
//!
//! ## Example
//!
//! ```rust
//! use ratewatch_types::RateUnit;
//!
//! let bytes = RateUnit::new("B");
//! let megabits = RateUnit::new("Mbit");
//!
//! assert!(bytes.is_valid());
//! assert_eq!(bytes.conversion_to(&megabits).unwrap(), 8.0e-6);
//! assert_eq!(bytes.threshold().unwrap(), 5_000_000.0);
//! assert_eq!(megabits.display_name().unwrap(), "Megabits per second");
//! ```

mod error;
mod sample;
mod summary;
mod unit;

pub use error::*;
pub use sample::*;
pub use summary::*;
pub use unit::*;
