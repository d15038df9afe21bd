//! Diagnostic reporting for imputation strategies.
//!
//! Strategies never install a global logger. A caller that wants the
//! diagnostic lines attaches a sink to the strategy at construction time;
//! the strategy writes to it only when its configuration enables verbose
//! output.
//!
//! # Example
//!
//! ```rust,ignore
//! use fillna::{CollectedDiagnostics, ImputerConfig, Imputer, MedianImputer};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(CollectedDiagnostics::new());
//! let imputer = MedianImputer::with_config(ImputerConfig::default().with_verbose(true))
//!     .with_sink(sink.clone());
//!
//! imputer.operate(&data)?;
//! for line in sink.lines() {
//!     println!("{line}");
//! }
//! ```

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One diagnostic message produced during imputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticEvent {
    /// Display name of the strategy that produced the message.
    pub source: String,

    /// Human-readable message.
    pub message: String,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event.
    pub fn new(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for DiagnosticEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.source, self.message)
    }
}

/// Trait for receiving diagnostic events from an imputation strategy.
///
/// Implementations must be `Send + Sync`: a configured strategy may be
/// shared across threads, and its sink with it.
pub trait DiagnosticSink: Send + Sync {
    /// Called once per diagnostic line while a strategy runs verbose.
    ///
    /// May be called once per column of the dataset; implementations should
    /// be cheap and non-blocking.
    fn emit(&self, event: DiagnosticEvent);
}

/// Wrapper that implements [`DiagnosticSink`] using a closure.
///
/// A convenient way to route diagnostics without implementing the trait
/// manually.
pub struct ClosureSink<F>
where
    F: Fn(DiagnosticEvent) + Send + Sync,
{
    callback: F,
}

impl<F> ClosureSink<F>
where
    F: Fn(DiagnosticEvent) + Send + Sync,
{
    /// Creates a new closure-based sink.
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> DiagnosticSink for ClosureSink<F>
where
    F: Fn(DiagnosticEvent) + Send + Sync,
{
    fn emit(&self, event: DiagnosticEvent) {
        (self.callback)(event);
    }
}

/// Sink that accumulates every event in memory.
///
/// Useful when the caller wants the full diagnostic trail after the run,
/// and in tests that assert on exact output.
#[derive(Debug, Default)]
pub struct CollectedDiagnostics {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl CollectedDiagnostics {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events collected so far.
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events.lock().clone()
    }

    /// Collected events rendered as `(source) message` lines.
    pub fn lines(&self) -> Vec<String> {
        self.events.lock().iter().map(|e| e.to_string()).collect()
    }

    /// True if nothing has been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl DiagnosticSink for CollectedDiagnostics {
    fn emit(&self, event: DiagnosticEvent) {
        self.events.lock().push(event);
    }
}

// Sinks travel with strategies across threads.
static_assertions::assert_impl_all!(DiagnosticEvent: Send, Sync);
static_assertions::assert_impl_all!(CollectedDiagnostics: Send, Sync);
