//! # aih-builder
//!
//! Builds and verifies AIH (hospital admission authorization) numbers.
//!
//! An AIH number is 13 digits: region code, year, kind digit, a fixed
//! `0000`/`9999` suffix, a fixed `000`/`999` prefix and a modulo-11 check
//! digit.
//!
//! ```rust
//! use aih_builder::{build, build_range, verify, BuildConfig};
//!
//! let initial = build(26, 24, 1, true).unwrap();
//! assert_eq!(initial, "2624100000006");
//! assert!(verify::is_valid(&initial));
//!
//! let range = build_range(26, 24, 5, &BuildConfig::default()).unwrap();
//! assert_eq!(range.last.as_str(), "2624599999990");
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): builds batches in parallel with rayon.

#![warn(missing_docs)]

pub mod batch;
mod builder;
mod types;
pub mod verify;

pub use batch::{build_batch, build_csv, BatchOutcome, BatchReport, BuildRequest, RequestReader};
pub use builder::{build, build_number, build_range, build_with_config, AihRange};
pub use types::{AihError, AihResult, BatchStats, BuildConfig, Validation};

// Re-export aih-types for convenience
pub use aih_types;
