//! Configuration shared by imputation strategies.
//!
//! Every strategy is constructed from the same small value object so the
//! surrounding pipeline can build and configure any of them uniformly.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Configuration for an imputation strategy.
///
/// A plain value object with fluent setters. No validation is performed:
/// any flag and any seed are accepted.
///
/// The seed exists for strategies that sample (bootstrap, k-NN tie
/// breaking, ...). Deterministic strategies such as median imputation carry
/// it without ever drawing from it, so their output never depends on it.
///
/// # Example
///
/// ```rust,ignore
/// use fillna::ImputerConfig;
///
/// let config = ImputerConfig::default()
///     .with_verbose(true)
///     .with_seed(42);
///
/// assert!(config.verbose());
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImputerConfig {
    /// Whether diagnostic messages are produced during imputation.
    /// Default: false
    verbose: bool,

    /// Seed for strategies that need randomness.
    /// If None, an entropy-backed generator is used.
    /// Default: None
    seed: Option<u64>,
}

impl Default for ImputerConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            seed: None,
        }
    }
}

impl ImputerConfig {
    /// Whether diagnostic output is enabled.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// The configured seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Enable or disable diagnostic output.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the seed used by sampling strategies.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Materialize the random number generator described by this
    /// configuration: seeded when a seed is set, entropy-backed otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
