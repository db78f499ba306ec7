use serde::{Deserialize, Serialize};

/// A candidate solution: decision variables plus the scores attached to them.
///
/// The variable encoding `V` is opaque to the engine; problems create and
/// decode it, operators transform it. Objectives follow the lower-is-better
/// convention and are written only during evaluation. A constraint value
/// less than or equal to zero is satisfied.
///
/// `crowding_distance` and `rank` are bookkeeping fields owned by the
/// archive, the density estimator and the ranking algorithms. Problems must
/// never touch them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Solution<V> {
    pub variables: V,
    pub objectives: Vec<f64>,
    pub constraints: Vec<f64>,
    pub crowding_distance: Option<f64>,
    pub rank: Option<usize>,
}

impl<V> Solution<V> {
    /// Creates a solution with zeroed objective and constraint vectors.
    pub fn new(variables: V, objectives: usize, constraints: usize) -> Self {
        Self {
            variables,
            objectives: vec![0.0; objectives],
            constraints: vec![0.0; constraints],
            crowding_distance: None,
            rank: None,
        }
    }

    /// Creates an unconstrained solution with the given objective values.
    pub fn with_objectives(variables: V, objectives: Vec<f64>) -> Self {
        Self {
            variables,
            objectives,
            constraints: Vec::new(),
            crowding_distance: None,
            rank: None,
        }
    }

    /// Aggregate constraint violation: the sum of every positive constraint
    /// value. Zero means feasible.
    pub fn overall_constraint_violation(&self) -> f64 {
        self.constraints.iter().filter(|&&c| c > 0.0).sum()
    }

    pub fn is_feasible(&self) -> bool {
        self.overall_constraint_violation() == 0.0
    }
}
