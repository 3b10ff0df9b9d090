//! Solver configuration.

use serde::Deserialize;

/// Largest destination count still routed by exhaustive search.
pub const DEFAULT_EXACT_THRESHOLD: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SolveOptions {
    /// Requests with at most this many destinations are solved exactly.
    pub exact_threshold: usize,
    /// Evaluate heuristic seeds on the rayon thread pool.
    pub parallel_seeds: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            exact_threshold: DEFAULT_EXACT_THRESHOLD,
            parallel_seeds: true,
        }
    }
}
