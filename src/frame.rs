//! DataFrame adapter for imputation strategies.
//!
//! The [`Imputer`](crate::Imputer) trait works on raw row matrices; this
//! module bridges polars DataFrames to that surface. Selected columns are
//! extracted into an `f64` matrix (null entries and NaN values both become
//! the missing sentinel), run through the strategy, and written back as
//! `Float64` columns. Cells still missing after imputation come back as
//! nulls, and columns outside the selection pass through untouched.

use crate::error::{ImputeError, Result, ResultExt};
use crate::imputers::Imputer;
use crate::stats;
use polars::prelude::*;
use tracing::debug;

/// Check if a data type is numeric.
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Names of all numeric columns in the frame, in frame order.
pub fn numeric_column_names(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|col| is_numeric_dtype(col.dtype()))
        .map(|col| col.name().to_string())
        .collect()
}

/// Extract the named columns into a row-major `f64` matrix.
///
/// Null entries and NaN values are both mapped to NaN. Every named column
/// must exist and be numeric.
pub fn to_matrix(df: &DataFrame, columns: &[&str]) -> Result<Vec<Vec<f64>>> {
    let n_rows = df.height();
    let n_cols = columns.len();
    let mut matrix = vec![vec![f64::NAN; n_cols]; n_rows];

    for (col_idx, &col_name) in columns.iter().enumerate() {
        let column = df
            .column(col_name)
            .map_err(|_| ImputeError::ColumnNotFound(col_name.to_string()))?;

        if !is_numeric_dtype(column.dtype()) {
            return Err(ImputeError::NonNumericColumn {
                column: col_name.to_string(),
                dtype: column.dtype().to_string(),
            });
        }

        let float_column = column
            .cast(&DataType::Float64)
            .context(format!("casting column '{col_name}' to f64"))?;
        let values = float_column.f64().map_err(ImputeError::Polars)?;

        for (row_idx, row) in matrix.iter_mut().enumerate().take(n_rows) {
            row[col_idx] = values.get(row_idx).unwrap_or(f64::NAN);
        }
    }

    Ok(matrix)
}

/// Write a row matrix back over the named columns of a frame.
///
/// Returns a new frame; the input is not modified. Replaced columns come
/// back as `Float64`, with NaN cells stored as nulls. Every matrix row must
/// hold exactly one value per named column; ragged input is rejected before
/// any column is written.
pub fn from_matrix(df: &DataFrame, columns: &[&str], matrix: &[Vec<f64>]) -> Result<DataFrame> {
    let expected = columns.len();
    for (row, values) in matrix.iter().enumerate() {
        if values.len() != expected {
            return Err(ImputeError::RaggedRows {
                row,
                expected,
                found: values.len(),
            });
        }
    }

    let mut output = df.clone();

    for (col_idx, &col_name) in columns.iter().enumerate() {
        let values: Vec<Option<f64>> = matrix
            .iter()
            .map(|row| {
                let value = row[col_idx];
                if value.is_nan() { None } else { Some(value) }
            })
            .collect();

        let series = Series::new(col_name.into(), values);
        output
            .replace(col_name, series)
            .context(format!("replacing column '{col_name}'"))?;
    }

    Ok(output)
}

/// Impute the named columns of a frame with the given strategy.
///
/// Each named column must exist and be numeric. An empty selection returns
/// the frame unchanged; a frame with zero rows fails the strategy's shape
/// validation.
pub fn impute_frame_columns(
    imputer: &dyn Imputer,
    df: &DataFrame,
    columns: &[&str],
) -> Result<DataFrame> {
    if columns.is_empty() {
        debug!("no columns selected; frame returned unchanged");
        return Ok(df.clone());
    }

    let matrix = to_matrix(df, columns)?;
    let missing: usize = matrix.iter().map(|row| stats::nan_count(row)).sum();
    debug!(
        "imputing {} columns ({} missing cells) with {}",
        columns.len(),
        missing,
        imputer.name()
    );

    let imputed = imputer.operate(&matrix)?;
    from_matrix(df, columns, &imputed)
}

/// Impute every numeric column of a frame with the given strategy.
///
/// Non-numeric columns pass through untouched. A frame without numeric
/// columns is returned unchanged.
pub fn impute_frame(imputer: &dyn Imputer, df: &DataFrame) -> Result<DataFrame> {
    let names = numeric_column_names(df);
    if names.is_empty() {
        debug!("no numeric columns; frame returned unchanged");
        return Ok(df.clone());
    }

    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    impute_frame_columns(imputer, df, &refs)
}
