//! Custom error types for the imputation library.
//!
//! This module provides the error hierarchy using `thiserror` for precise
//! error handling throughout the crate.
//!
//! Errors are serializable so they can cross process or IPC boundaries as a
//! `{code, message}` pair.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

/// The main error type for imputation operations.
#[derive(Error, Debug)]
pub enum ImputeError {
    /// The dataset has zero rows.
    #[error("Dataset is empty")]
    EmptyDataset,

    /// The dataset has rows but zero columns.
    #[error("Dataset has no columns")]
    NoColumns,

    /// The dataset is not rectangular.
    #[error("Ragged dataset: row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A named column was not found in the DataFrame.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// A column selected for imputation does not hold numeric data.
    #[error("Column '{column}' is not numeric ({dtype})")]
    NonNumericColumn { column: String, dtype: String },

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ImputeError>,
    },
}

impl ImputeError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ImputeError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Get a stable error code.
    ///
    /// These codes let callers branch on specific error classes without
    /// matching on message text.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyDataset => "EMPTY_DATASET",
            Self::NoColumns => "NO_COLUMNS",
            Self::RaggedRows { .. } => "RAGGED_ROWS",
            Self::ColumnNotFound(_) => "COLUMN_NOT_FOUND",
            Self::NonNumericColumn { .. } => "NON_NUMERIC_COLUMN",
            Self::Polars(_) => "POLARS_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Check if this error is an input-shape precondition failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyDataset | Self::NoColumns | Self::RaggedRows { .. }
        )
    }
}

/// Serialize implementation for IPC compatibility.
///
/// Errors are serialized as a struct with `code` and `message` fields,
/// making them easy to handle on the receiving side.
impl Serialize for ImputeError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("ImputeError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for imputation operations.
pub type Result<T> = std::result::Result<T, ImputeError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ImputeError::Polars(e).with_context(context))
    }
}
