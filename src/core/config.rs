use serde::{Serialize, Deserialize};

/// What index construction does when two rows share a document id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DuplicatePolicy {
    /// Later rows replace earlier ones in the primary-key index
    #[default]
    LastWriteWins,
    /// Construction fails on the first repeated id
    Reject,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub duplicate_policy: DuplicatePolicy,

    // Benchmark harness
    pub trials: usize,                 // Calls per operation when averaging
    pub sizes: Vec<usize>,             // Dataset sizes for the sweep
    pub seed: Option<u64>,             // Fixed RNG seed for probe sampling
}

impl Default for Config {
    fn default() -> Self {
        Config {
            duplicate_policy: DuplicatePolicy::LastWriteWins,
            trials: 10,
            sizes: vec![100, 1000, 10000],
            seed: None,
        }
    }
}

impl Config {
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }
}
