//! SMPSO: speed-constrained multi-objective particle swarm optimization.
//!
//! Particles fly through the decision space guided by a personal best and a
//! leader drawn from a bounded crowding-distance archive. The constriction
//! coefficient and per-dimension speed limits keep velocities from
//! exploding, which is the defining trait of SMPSO compared to plain MOPSO.
//!
//! # References
//!
//! Nebro, A. J., Durillo, J. J., García-Nieto, J., Coello Coello, C. A.,
//! Luna, F., & Alba, E. (2009). SMPSO: A new PSO-based metaheuristic for
//! multi-objective optimization.

use crate::archive::CrowdingArchive;
use crate::dominance::{Compare, ConstraintDominanceComparator};
use crate::engine::RunResult;
use crate::error::EngineError;
use crate::evaluate::{Evaluate, SequentialEvaluator};
use crate::operator::MutationOperator;
use crate::solution::Solution;
use crate::{BoundedProblem, Evolver};
use rand::prelude::SeedableRng;
use rand::Rng;
use rand_pcg::Pcg64;
use std::cmp::Ordering;

/// Inertia weight of the velocity update.
const WEIGHT: f64 = 0.1;
/// Velocity sign change applied when a particle is pushed back in bounds.
const CHANGE_VELOCITY: f64 = -1.0;
/// Every sixth particle is perturbed by the mutation operator.
const PERTURBATION_PERIOD: usize = 6;

/// Speed-constrained multi-objective PSO with an external leader archive.
pub struct Smpso<P: BoundedProblem, M, E = SequentialEvaluator> {
    swarm_size: usize,
    mutation: M,
    evaluator: E,
    leaders: CrowdingArchive<Vec<f64>>,
    swarm: Vec<Solution<Vec<f64>>>,
    speed: Vec<Vec<f64>>,
    personal_best: Vec<Solution<Vec<f64>>>,
    max_speed: Vec<f64>,
    comparator: ConstraintDominanceComparator,
    rng: Pcg64,
    marker: std::marker::PhantomData<P>,
}

impl<P: BoundedProblem, M: MutationOperator<Vec<f64>>> Smpso<P, M> {
    pub fn new(swarm_size: usize, leaders_capacity: usize, mutation: M, seed: u64) -> Self {
        Self::with_evaluator(swarm_size, leaders_capacity, mutation, SequentialEvaluator, seed)
    }
}

impl<P, M, E> Smpso<P, M, E>
where
    P: BoundedProblem,
    M: MutationOperator<Vec<f64>>,
    E: Evaluate<P>,
{
    pub fn with_evaluator(
        swarm_size: usize,
        leaders_capacity: usize,
        mutation: M,
        evaluator: E,
        seed: u64,
    ) -> Self {
        assert!(swarm_size > 0, "swarm_size must be greater than 0");
        Self {
            swarm_size,
            mutation,
            evaluator,
            leaders: CrowdingArchive::new(leaders_capacity),
            swarm: Vec::new(),
            speed: Vec::new(),
            personal_best: Vec::new(),
            max_speed: Vec::new(),
            comparator: ConstraintDominanceComparator::default(),
            rng: Pcg64::seed_from_u64(seed),
            marker: std::marker::PhantomData,
        }
    }

    pub fn swarm_size(&self) -> usize {
        self.swarm_size
    }

    /// The leader archive, i.e. the front discovered so far.
    pub fn leaders(&self) -> &CrowdingArchive<Vec<f64>> {
        &self.leaders
    }

    fn constriction_coefficient(c1: f64, c2: f64) -> f64 {
        let rho = c1 + c2;
        if rho <= 4.0 {
            1.0
        } else {
            2.0 / (2.0 - rho - (rho * rho - 4.0 * rho).sqrt()).abs()
        }
    }

    fn update_positions(&mut self, problem: &P) {
        let lower = problem.lower_bounds();
        let upper = problem.upper_bounds();
        let variables = problem.number_of_variables();

        for i in 0..self.swarm.len() {
            let leader = match self.leaders.select_leader(&mut self.rng) {
                Some(l) => l.variables.clone(),
                None => self.personal_best[i].variables.clone(),
            };
            let r1 = self.rng.random::<f64>();
            let r2 = self.rng.random::<f64>();
            let c1 = self.rng.random_range(1.5..2.5);
            let c2 = self.rng.random_range(1.5..2.5);
            let chi = Self::constriction_coefficient(c1, c2);

            for d in 0..variables {
                let x = self.swarm[i].variables[d];
                let best = self.personal_best[i].variables[d];
                let v = chi
                    * (WEIGHT * self.speed[i][d]
                        + c1 * r1 * (best - x)
                        + c2 * r2 * (leader[d] - x));
                self.speed[i][d] = v.clamp(-self.max_speed[d], self.max_speed[d]);
            }

            for d in 0..variables {
                let mut x = self.swarm[i].variables[d] + self.speed[i][d];
                if x < lower[d] {
                    x = lower[d];
                    self.speed[i][d] *= CHANGE_VELOCITY;
                } else if x > upper[d] {
                    x = upper[d];
                    self.speed[i][d] *= CHANGE_VELOCITY;
                }
                self.swarm[i].variables[d] = x;
            }

            if i % PERTURBATION_PERIOD == 0 {
                self.mutation.execute(&mut self.swarm[i], &mut self.rng);
            }
        }
    }
}

impl<P, M, E> Evolver<P> for Smpso<P, M, E>
where
    P: BoundedProblem,
    M: MutationOperator<Vec<f64>>,
    E: Evaluate<P>,
{
    fn name(&self) -> &'static str {
        "SMPSO"
    }

    fn initialize(&mut self, problem: &P) -> Result<u64, EngineError> {
        self.swarm = (0..self.swarm_size)
            .map(|_| problem.create_solution(&mut self.rng))
            .collect();
        self.evaluator.evaluate(&mut self.swarm, problem)?;

        self.max_speed = problem
            .lower_bounds()
            .iter()
            .zip(problem.upper_bounds())
            .map(|(l, u)| (u - l) / 2.0)
            .collect();
        self.speed = vec![vec![0.0; problem.number_of_variables()]; self.swarm_size];
        self.personal_best = self.swarm.clone();
        for particle in &self.swarm {
            self.leaders.add(particle.clone())?;
        }
        Ok(self.swarm_size as u64)
    }

    fn evolve(&mut self, problem: &P) -> Result<u64, EngineError> {
        self.update_positions(problem);
        self.evaluator.evaluate(&mut self.swarm, problem)?;

        for i in 0..self.swarm.len() {
            self.leaders.add(self.swarm[i].clone())?;
            // Keep the old personal best only if it strictly dominates the
            // new position.
            if self.comparator.compare(&self.personal_best[i], &self.swarm[i])? != Ordering::Less {
                self.personal_best[i] = self.swarm[i].clone();
            }
        }
        Ok(self.swarm_size as u64)
    }

    fn solutions(&self) -> &[Solution<Vec<f64>>] {
        &self.swarm
    }

    fn result(&self) -> RunResult<Vec<f64>> {
        RunResult::Front(self.leaders.solutions().to_vec())
    }
}
