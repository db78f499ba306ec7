use crate::solution::Solution;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Crowding-distance density estimator.
///
/// Assigns each solution the sum, across objectives, of the normalized gap
/// between its two neighbors along that objective. Extremes of every
/// dimension get infinite distance, so boundary solutions are always
/// preferred when dominance ties. Larger means more isolated.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct CrowdingDistance;

impl CrowdingDistance {
    /// Writes `crowding_distance` on every solution in the set.
    ///
    /// Sets of size two or less have no interior points, so every member is
    /// infinitely distant.
    pub fn assign<V>(&self, solutions: &mut [Solution<V>]) {
        let n = solutions.len();
        if n == 0 {
            return;
        }
        if n <= 2 {
            for s in solutions {
                s.crowding_distance = Some(f64::INFINITY);
            }
            return;
        }

        let objectives = solutions.iter().map(|s| s.objectives.len()).min().unwrap_or(0);
        if objectives == 0 {
            for s in solutions {
                s.crowding_distance = Some(f64::INFINITY);
            }
            return;
        }

        let mut distance = vec![0.0_f64; n];
        let mut order: Vec<usize> = (0..n).collect();

        for m in 0..objectives {
            order.sort_by(|&a, &b| {
                solutions[a].objectives[m]
                    .partial_cmp(&solutions[b].objectives[m])
                    .unwrap_or(Ordering::Equal)
            });
            let low = solutions[order[0]].objectives[m];
            let high = solutions[order[n - 1]].objectives[m];
            let range = high - low;
            distance[order[0]] = f64::INFINITY;
            distance[order[n - 1]] = f64::INFINITY;
            if range > 0.0 {
                for k in 1..(n - 1) {
                    if distance[order[k]].is_finite() {
                        distance[order[k]] += (solutions[order[k + 1]].objectives[m]
                            - solutions[order[k - 1]].objectives[m])
                            / range;
                    }
                }
            }
        }

        for (s, d) in solutions.iter_mut().zip(distance) {
            s.crowding_distance = Some(d);
        }
    }
}
