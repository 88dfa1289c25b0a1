//! Evaluation configuration.

use serde::{Deserialize, Serialize};

/// How Monte Carlo estimates are computed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Calls averaged per estimate.
    pub num_samples: usize,

    /// Root seed; trial `i` always gets the same dice.
    pub seed: u64,

    /// Spread independent trials across the rayon thread pool.
    /// Results are identical to the sequential path.
    pub parallel: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            num_samples: 1000,
            seed: 42,
            parallel: false,
        }
    }
}

impl EvalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_samples(mut self, num_samples: usize) -> Self {
        self.num_samples = num_samples;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
