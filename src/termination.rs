use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Monotonically increasing run counters consulted by termination
/// predicates and copied into every published event.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Progress {
    pub evaluations: u64,
    pub generations: u64,
    pub computing_time: Duration,
}

/// Pluggable stopping condition, checked once per generation.
pub trait Termination {
    fn is_met(&self, progress: &Progress) -> bool;
}

/// Stop once the evaluation counter reaches the budget. The default
/// criterion.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MaxEvaluations(pub u64);

impl Termination for MaxEvaluations {
    fn is_met(&self, progress: &Progress) -> bool {
        progress.evaluations >= self.0
    }
}

/// Stop once the run has consumed the given wall-clock budget.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MaxComputingTime(pub Duration);

impl Termination for MaxComputingTime {
    fn is_met(&self, progress: &Progress) -> bool {
        progress.computing_time >= self.0
    }
}
