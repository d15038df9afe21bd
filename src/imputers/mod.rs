//! Imputation strategies.
//!
//! Every strategy implements the [`Imputer`] trait, so callers can hold and
//! invoke strategies as trait objects without knowing which one they have.

mod median;

pub use median::MedianImputer;

use crate::error::Result;

/// Capability shared by all imputation strategies.
///
/// A strategy transforms a rectangular dataset into a new dataset of the
/// same shape with missing cells filled in, and reports a display name used
/// in diagnostics. Strategies are stateless across calls and safe to share
/// between threads.
///
/// # Example
///
/// ```rust,ignore
/// use fillna::{Imputer, MedianImputer};
///
/// let strategies: Vec<Box<dyn Imputer>> = vec![Box::new(MedianImputer::new())];
/// for strategy in &strategies {
///     println!("running {}", strategy.name());
///     let filled = strategy.operate(&data)?;
/// }
/// ```
pub trait Imputer: Send + Sync {
    /// Display name for logging and reporting.
    fn name(&self) -> &'static str;

    /// Fill the missing cells of `data` and return the result.
    ///
    /// `data` is a row-major rectangular matrix with NaN marking missing
    /// cells. The input is never mutated; the returned matrix has the same
    /// shape, with every non-missing cell carried over unchanged.
    ///
    /// # Errors
    ///
    /// Fails before any computation if `data` is empty, has zero columns,
    /// or has rows of unequal length.
    fn operate(&self, data: &[Vec<f64>]) -> Result<Vec<Vec<f64>>>;
}
