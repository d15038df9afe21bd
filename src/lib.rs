//! Missing Value Imputation Library
//!
//! A deterministic missing-value imputation library built with Rust and Polars.
//!
//! # Overview
//!
//! This library fills missing cells in numeric datasets:
//!
//! - **Median Imputation**: Replace each missing cell with its column median
//! - **Raw Matrix Surface**: Operate directly on `Vec<Vec<f64>>` row matrices with NaN as the missing sentinel
//! - **DataFrame Adapter**: Impute polars DataFrames column-by-column without touching non-numeric data
//! - **Pluggable Strategies**: All strategies implement the [`Imputer`] trait and can be held as trait objects
//! - **Opt-In Diagnostics**: Per-column replacement reports through tracing and pluggable sinks
//! - **Deterministic**: Seeded configuration; the imputed output is a pure function of the input
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fillna::{Imputer, MedianImputer};
//!
//! // Rows are observations; NaN marks a missing cell.
//! let data = vec![
//!     vec![1.0, f64::NAN],
//!     vec![3.0, 5.0],
//!     vec![5.0, f64::NAN],
//! ];
//!
//! let imputer = MedianImputer::new();
//! let filled = imputer.operate(&data)?;
//!
//! // Column 1 had observed values [5]; both NaN cells become 5.
//! assert_eq!(filled, vec![
//!     vec![1.0, 5.0],
//!     vec![3.0, 5.0],
//!     vec![5.0, 5.0],
//! ]);
//! ```
//!
//! DataFrames go through the adapter in [`frame`], which treats nulls and
//! NaN values as missing and leaves non-numeric columns untouched:
//!
//! ```rust,ignore
//! use fillna::{MedianImputer, impute_frame};
//! use polars::prelude::*;
//!
//! let df = df![
//!     "age" => [Some(30.0), None, Some(40.0)],
//!     "name" => ["ann", "bo", "cy"],
//! ]?;
//!
//! let filled = impute_frame(&MedianImputer::new(), &df)?;
//! ```
//!
//! # Configuration
//!
//! Use [`ImputerConfig`] to customize imputation behavior:
//!
//! ```rust,ignore
//! use fillna::{ImputerConfig, MedianImputer};
//!
//! let config = ImputerConfig::default()
//!     .with_verbose(true)   // emit per-column diagnostics
//!     .with_seed(42);       // deterministic randomness source
//!
//! let imputer = MedianImputer::with_config(config);
//! ```
//!
//! # Diagnostics
//!
//! Verbose imputers report what they replaced. Diagnostics flow through the
//! `tracing` ecosystem and, optionally, a [`DiagnosticSink`]:
//!
//! ```rust,ignore
//! use fillna::{CollectedDiagnostics, Imputer, ImputerConfig, MedianImputer};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(CollectedDiagnostics::new());
//! let imputer = MedianImputer::with_config(ImputerConfig::default().with_verbose(true))
//!     .with_sink(sink.clone());
//!
//! imputer.operate(&data)?;
//!
//! for line in sink.lines() {
//!     println!("{line}");
//! }
//! // (Median imputation) performing median imputation on 3 x 2 dataset
//! // (Median imputation) 2 NaNs identified in column 1 (column median=5)
//! ```

// Core modules
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod frame;
pub mod imputers;
pub mod matrix;
pub mod stats;

// Re-exports for convenient access
pub use config::ImputerConfig;
pub use diagnostics::{ClosureSink, CollectedDiagnostics, DiagnosticEvent, DiagnosticSink};
pub use error::{ImputeError, Result as ImputeResult, ResultExt};
pub use frame::{impute_frame, impute_frame_columns, is_numeric_dtype, numeric_column_names};
pub use imputers::{Imputer, MedianImputer};
pub use stats::{nan_count, nan_median};
