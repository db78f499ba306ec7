//! Bounded, diversity-preserving archive of non-dominated solutions.
//!
//! The archive is the long-term memory of a multi-objective run: every
//! solution the search discovers is offered to it, and it keeps a bounded,
//! mutually non-dominated subset that stays spread out along the front.
//!
//! # Admission and eviction
//!
//! Admission is dominance-filtered: a candidate dominated by any member is
//! rejected, and a candidate that dominates members evicts exactly those
//! members. When the archive then exceeds its capacity, crowding distances
//! are recomputed and the most crowded member is dropped, so eviction favors
//! keeping the boundary and sparse regions of the front. Ties are broken by
//! insertion order, which keeps runs reproducible.
//!
//! # Leaders
//!
//! Swarm-style algorithms draw their global guides from the archive with
//! [`CrowdingArchive::select_leader`], a binary tournament biased toward
//! larger crowding distance. Uniform sampling would collapse the swarm onto
//! dense regions of the front; the tournament preserves spread.
//!
//! # Example
//!
//! ```rust
//! use pareto_engine::{CrowdingArchive, Solution};
//!
//! let mut archive = CrowdingArchive::new(2);
//! archive.add(Solution::with_objectives((), vec![0.0, 1.0])).unwrap();
//! archive.add(Solution::with_objectives((), vec![1.0, 0.0])).unwrap();
//!
//! // Dominated by both members: rejected.
//! let kept = archive.add(Solution::with_objectives((), vec![2.0, 2.0])).unwrap();
//! assert!(!kept);
//! assert_eq!(archive.len(), 2);
//! ```

use crate::density::CrowdingDistance;
use crate::dominance::{Compare, ConstraintDominanceComparator};
use crate::error::IncompatibleSolutions;
use crate::solution::Solution;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Capacity-bounded antichain of solutions under constraint-aware dominance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CrowdingArchive<V> {
    capacity: usize,
    members: Vec<Solution<V>>,
    comparator: ConstraintDominanceComparator,
    density: CrowdingDistance,
}

impl<V: Clone> CrowdingArchive<V> {
    /// Creates an empty archive holding at most `capacity` solutions.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be greater than 0");
        Self {
            capacity,
            members: Vec::new(),
            comparator: ConstraintDominanceComparator::default(),
            density: CrowdingDistance,
        }
    }

    /// Offers a solution to the archive. Returns whether it was retained.
    ///
    /// A candidate dominated by any member leaves the archive untouched.
    /// Otherwise the members it dominates are removed, the candidate is
    /// inserted, and if the archive overflows the most crowded member is
    /// evicted.
    pub fn add(&mut self, candidate: Solution<V>) -> Result<bool, IncompatibleSolutions> {
        // Collect all verdicts before mutating, so a length mismatch cannot
        // leave the archive half-updated.
        let mut verdicts = Vec::with_capacity(self.members.len());
        for member in &self.members {
            verdicts.push(self.comparator.compare(&candidate, member)?);
        }
        if verdicts.contains(&Ordering::Greater) {
            return Ok(false);
        }

        let mut verdicts = verdicts.into_iter();
        self.members
            .retain(|_| verdicts.next() != Some(Ordering::Less));
        self.members.push(candidate);

        while self.members.len() > self.capacity {
            self.density.assign(&mut self.members);
            let worst = self
                .members
                .iter()
                .enumerate()
                .min_by(|(_, a), (_, b)| {
                    let da = a.crowding_distance.unwrap_or(f64::INFINITY);
                    let db = b.crowding_distance.unwrap_or(f64::INFINITY);
                    da.partial_cmp(&db).unwrap_or(Ordering::Equal)
                })
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.members.remove(worst);
        }

        // Keep distances fresh for leader selection.
        self.density.assign(&mut self.members);
        Ok(true)
    }

    /// Picks a leader by binary tournament on crowding distance: two members
    /// drawn at random, the more isolated one wins. Returns `None` while the
    /// archive is empty.
    pub fn select_leader<R: Rng>(&self, rng: &mut R) -> Option<&Solution<V>> {
        if self.members.is_empty() {
            return None;
        }
        if self.members.len() == 1 {
            return self.members.first();
        }
        let i = rng.random_range(0..self.members.len());
        let j = rng.random_range(0..self.members.len());
        let di = self.members[i].crowding_distance.unwrap_or(f64::INFINITY);
        let dj = self.members[j].crowding_distance.unwrap_or(f64::INFINITY);
        Some(if di >= dj {
            &self.members[i]
        } else {
            &self.members[j]
        })
    }

    pub fn solutions(&self) -> &[Solution<V>] {
        &self.members
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
