//! Median imputation.
//!
//! Replaces each missing cell with the median of the observed values in its
//! column.

use crate::config::ImputerConfig;
use crate::diagnostics::{ClosureSink, DiagnosticEvent, DiagnosticSink};
use crate::error::Result;
use crate::imputers::Imputer;
use crate::{matrix, stats};
use std::sync::Arc;
use tracing::{debug, info};

/// Imputes missing values with per-column medians.
///
/// The median is computed fresh for every call, per column, from that
/// column's observed values only; columns are independent of each other. A
/// column with no observed values keeps its missing sentinel rather than
/// failing the whole run.
///
/// Cloning produces an equivalent strategy that can be reconfigured without
/// affecting the original; an attached diagnostic sink is shared between
/// the clones.
///
/// # Example
///
/// ```rust,ignore
/// use fillna::{Imputer, ImputerConfig, MedianImputer};
///
/// let imputer = MedianImputer::with_config(ImputerConfig::default().with_verbose(true));
/// let data = vec![vec![1.0, f64::NAN], vec![3.0, 5.0], vec![5.0, f64::NAN]];
/// let filled = imputer.operate(&data)?;
/// assert_eq!(filled, vec![vec![1.0, 5.0], vec![3.0, 5.0], vec![5.0, 5.0]]);
/// ```
#[derive(Clone)]
pub struct MedianImputer {
    config: ImputerConfig,
    sink: Option<Arc<dyn DiagnosticSink>>,
}

// A configured strategy may be handed to a worker thread.
static_assertions::assert_impl_all!(MedianImputer: Send, Sync);

impl Default for MedianImputer {
    fn default() -> Self {
        Self::new()
    }
}

impl MedianImputer {
    /// Display name reported by [`Imputer::name`].
    pub const NAME: &'static str = "Median imputation";

    /// Creates a median imputer with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ImputerConfig::default())
    }

    /// Creates a median imputer from a configuration.
    pub fn with_config(config: ImputerConfig) -> Self {
        Self { config, sink: None }
    }

    /// The configuration this strategy was built with.
    pub fn config(&self) -> &ImputerConfig {
        &self.config
    }

    /// Attach a diagnostic sink.
    ///
    /// The sink receives the diagnostic lines only while the configuration
    /// has verbose output enabled.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Attach a diagnostic callback closure.
    ///
    /// Convenience over [`with_sink`](Self::with_sink) for simple handlers.
    pub fn on_diagnostic<F>(self, callback: F) -> Self
    where
        F: Fn(DiagnosticEvent) + Send + Sync + 'static,
    {
        self.with_sink(Arc::new(ClosureSink::new(callback)))
    }

    /// Emit one diagnostic line when verbose output is enabled.
    fn diag(&self, message: String) {
        if !self.config.verbose() {
            return;
        }
        let event = DiagnosticEvent::new(Self::NAME, message);
        info!("{event}");
        if let Some(sink) = &self.sink {
            sink.emit(event);
        }
    }
}

impl Imputer for MedianImputer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn operate(&self, data: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        matrix::validate(data)?;

        let (rows, cols) = matrix::shape(data);
        debug!(rows, cols, "validated input matrix");

        let mut output = data.to_vec();
        self.diag(format!(
            "performing median imputation on {rows} x {cols} dataset"
        ));

        for index in 0..cols {
            let median = stats::nan_median(&matrix::column(data, index));

            let mut replaced = 0usize;
            for row in output.iter_mut() {
                if row[index].is_nan() {
                    row[index] = median;
                    replaced += 1;
                }
            }

            let plural = if replaced == 1 { "" } else { "s" };
            self.diag(format!(
                "{replaced} NaN{plural} identified in column {index} (column median={median})"
            ));
        }

        Ok(output)
    }
}
