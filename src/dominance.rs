use crate::error::IncompatibleSolutions;
use crate::solution::Solution;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Comparison strategy shared by the archive and the replacement/selection
/// steps. `Ordering::Less` means the first solution dominates; `Equal` means
/// no ordering information exists and must never be coerced into a
/// tie-break.
pub trait Compare {
    fn compare<V>(
        &self,
        a: &Solution<V>,
        b: &Solution<V>,
    ) -> Result<Ordering, IncompatibleSolutions>;
}

/// Pure Pareto dominance over objective vectors.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct DominanceComparator;

impl Compare for DominanceComparator {
    fn compare<V>(
        &self,
        a: &Solution<V>,
        b: &Solution<V>,
    ) -> Result<Ordering, IncompatibleSolutions> {
        if a.objectives.len() != b.objectives.len() {
            return Err(IncompatibleSolutions {
                left: a.objectives.len(),
                right: b.objectives.len(),
            });
        }
        let mut a_better = false;
        let mut b_better = false;
        for (oa, ob) in a.objectives.iter().zip(&b.objectives) {
            if oa < ob {
                a_better = true;
            } else if ob < oa {
                b_better = true;
            }
        }
        Ok(match (a_better, b_better) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        })
    }
}

/// Dominance with constraint handling layered on top: a smaller aggregate
/// violation wins outright, before objectives are consulted. Feasible beats
/// infeasible; equally infeasible solutions fall through to dominance.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct ConstraintDominanceComparator {
    dominance: DominanceComparator,
}

impl Compare for ConstraintDominanceComparator {
    fn compare<V>(
        &self,
        a: &Solution<V>,
        b: &Solution<V>,
    ) -> Result<Ordering, IncompatibleSolutions> {
        let va = a.overall_constraint_violation();
        let vb = b.overall_constraint_violation();
        if va > 0.0 || vb > 0.0 {
            if va < vb {
                return Ok(Ordering::Less);
            }
            if vb < va {
                return Ok(Ordering::Greater);
            }
        }
        self.dominance.compare(a, b)
    }
}

/// Total order for single-objective replacement: feasibility first, then the
/// first objective ascending. NaN objectives sort last so they are always
/// discarded first, mirroring how NaN fitness is pushed to the back of a
/// sorted population.
pub(crate) fn single_objective_cmp<V>(a: &Solution<V>, b: &Solution<V>) -> Ordering {
    let violation = a
        .overall_constraint_violation()
        .partial_cmp(&b.overall_constraint_violation())
        .unwrap_or(Ordering::Equal);
    if violation != Ordering::Equal {
        return violation;
    }
    let oa = a.objectives.first().copied().unwrap_or(f64::NAN);
    let ob = b.objectives.first().copied().unwrap_or(f64::NAN);
    match (oa.is_nan(), ob.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => oa.partial_cmp(&ob).unwrap_or(Ordering::Equal),
    }
}
