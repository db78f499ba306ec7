use crate::dominance::single_objective_cmp;
use crate::engine::RunResult;
use crate::error::EngineError;
use crate::evaluate::{Evaluate, SequentialEvaluator};
use crate::operator::MutationOperator;
use crate::solution::Solution;
use crate::{Evolver, Problem};
use rand::prelude::SeedableRng;
use rand_pcg::Pcg64;

/// Elitist (mu + lambda) evolution strategy for single-objective problems.
///
/// Each generation clones lambda offspring from the mu parents (cyclically),
/// mutates and scores them, then keeps the best mu of the combined
/// mu + lambda set. The population is always sorted best-first, and the sort
/// is stable, so parents win ties against equal offspring.
pub struct EvolutionStrategy<P: Problem, M, E = SequentialEvaluator> {
    mu: usize,
    lambda: usize,
    mutation: M,
    evaluator: E,
    population: Vec<Solution<P::Variables>>,
    rng: Pcg64,
}

impl<P: Problem, M: MutationOperator<P::Variables>> EvolutionStrategy<P, M> {
    pub fn new(mu: usize, lambda: usize, mutation: M, seed: u64) -> Self {
        Self::with_evaluator(mu, lambda, mutation, SequentialEvaluator, seed)
    }
}

impl<P: Problem, M: MutationOperator<P::Variables>, E: Evaluate<P>> EvolutionStrategy<P, M, E> {
    pub fn with_evaluator(mu: usize, lambda: usize, mutation: M, evaluator: E, seed: u64) -> Self {
        assert!(mu > 0, "mu must be greater than 0");
        assert!(lambda > 0, "lambda must be greater than 0");
        Self {
            mu,
            lambda,
            mutation,
            evaluator,
            population: Vec::new(),
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    pub fn mu(&self) -> usize {
        self.mu
    }

    pub fn lambda(&self) -> usize {
        self.lambda
    }
}

impl<P, M, E> Evolver<P> for EvolutionStrategy<P, M, E>
where
    P: Problem,
    M: MutationOperator<P::Variables>,
    E: Evaluate<P>,
{
    fn name(&self) -> &'static str {
        "(mu + lambda) evolution strategy"
    }

    fn initialize(&mut self, problem: &P) -> Result<u64, EngineError> {
        self.population = (0..self.mu)
            .map(|_| problem.create_solution(&mut self.rng))
            .collect();
        self.evaluator.evaluate(&mut self.population, problem)?;
        self.population.sort_by(single_objective_cmp);
        Ok(self.mu as u64)
    }

    fn evolve(&mut self, problem: &P) -> Result<u64, EngineError> {
        let mut offspring = Vec::with_capacity(self.lambda);
        for k in 0..self.lambda {
            let mut child = self.population[k % self.mu].clone();
            self.mutation.execute(&mut child, &mut self.rng);
            offspring.push(child);
        }
        self.evaluator.evaluate(&mut offspring, problem)?;

        self.population.extend(offspring);
        self.population.sort_by(single_objective_cmp);
        self.population.truncate(self.mu);
        Ok(self.lambda as u64)
    }

    fn solutions(&self) -> &[Solution<P::Variables>] {
        &self.population
    }

    fn result(&self) -> RunResult<P::Variables> {
        RunResult::Best(self.population[0].clone())
    }
}
