//! Helpers for row-major `f64` matrices.
//!
//! Datasets are plain slices of row vectors. These helpers enforce the
//! rectangular-shape precondition shared by every imputation strategy and
//! provide column access in row order.

use crate::error::{ImputeError, Result};

/// Validate that a dataset is non-empty and rectangular.
///
/// Checked in order: zero rows, zero columns, rows of unequal length. The
/// first violation is returned and no further rows are inspected.
pub fn validate(data: &[Vec<f64>]) -> Result<()> {
    let Some(first) = data.first() else {
        return Err(ImputeError::EmptyDataset);
    };
    if first.is_empty() {
        return Err(ImputeError::NoColumns);
    }

    let expected = first.len();
    for (row, values) in data.iter().enumerate().skip(1) {
        if values.len() != expected {
            return Err(ImputeError::RaggedRows {
                row,
                expected,
                found: values.len(),
            });
        }
    }

    Ok(())
}

/// Shape of a dataset as `(rows, columns)`.
///
/// The column count is taken from the first row; call [`validate`] first if
/// the dataset may be ragged.
pub fn shape(data: &[Vec<f64>]) -> (usize, usize) {
    (data.len(), data.first().map(Vec::len).unwrap_or(0))
}

/// Extract one column of a rectangular dataset, preserving row order.
///
/// # Panics
///
/// Panics if `index` is out of bounds for any row. Intended for use after
/// [`validate`] has accepted the dataset.
pub fn column(data: &[Vec<f64>], index: usize) -> Vec<f64> {
    data.iter().map(|row| row[index]).collect()
}
