use crate::dominance::single_objective_cmp;
use crate::engine::RunResult;
use crate::error::EngineError;
use crate::evaluate::{Evaluate, SequentialEvaluator};
use crate::operator::{CrossoverOperator, MutationOperator, SelectionOperator};
use crate::solution::Solution;
use crate::{Evolver, Problem};
use rand::prelude::SeedableRng;
use rand_pcg::Pcg64;

/// Generational genetic algorithm for single-objective problems.
///
/// Every generation the non-elite part of the population is replaced
/// wholesale: parents are drawn with the selection operator, recombined,
/// mutated and scored, and the top `elitism` solutions of the previous
/// generation carry over unchanged.
pub struct GenerationalGa<P: Problem, S, X, M, E = SequentialEvaluator> {
    population_size: usize,
    elitism: usize,
    selection: S,
    crossover: X,
    mutation: M,
    evaluator: E,
    population: Vec<Solution<P::Variables>>,
    rng: Pcg64,
}

impl<P, S, X, M> GenerationalGa<P, S, X, M>
where
    P: Problem,
    S: SelectionOperator<P::Variables>,
    X: CrossoverOperator<P::Variables>,
    M: MutationOperator<P::Variables>,
{
    pub fn new(
        population_size: usize,
        elitism: usize,
        selection: S,
        crossover: X,
        mutation: M,
        seed: u64,
    ) -> Self {
        Self::with_evaluator(
            population_size,
            elitism,
            selection,
            crossover,
            mutation,
            SequentialEvaluator,
            seed,
        )
    }
}

impl<P, S, X, M, E> GenerationalGa<P, S, X, M, E>
where
    P: Problem,
    S: SelectionOperator<P::Variables>,
    X: CrossoverOperator<P::Variables>,
    M: MutationOperator<P::Variables>,
    E: Evaluate<P>,
{
    pub fn with_evaluator(
        population_size: usize,
        elitism: usize,
        selection: S,
        crossover: X,
        mutation: M,
        evaluator: E,
        seed: u64,
    ) -> Self {
        assert!(population_size > 0, "population_size must be greater than 0");
        assert!(
            elitism < population_size,
            "elitism must leave room for offspring"
        );
        Self {
            population_size,
            elitism,
            selection,
            crossover,
            mutation,
            evaluator,
            population: Vec::new(),
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }
}

impl<P, S, X, M, E> Evolver<P> for GenerationalGa<P, S, X, M, E>
where
    P: Problem,
    S: SelectionOperator<P::Variables>,
    X: CrossoverOperator<P::Variables>,
    M: MutationOperator<P::Variables>,
    E: Evaluate<P>,
{
    fn name(&self) -> &'static str {
        "generational genetic algorithm"
    }

    fn initialize(&mut self, problem: &P) -> Result<u64, EngineError> {
        self.population = (0..self.population_size)
            .map(|_| problem.create_solution(&mut self.rng))
            .collect();
        self.evaluator.evaluate(&mut self.population, problem)?;
        self.population.sort_by(single_objective_cmp);
        Ok(self.population_size as u64)
    }

    fn evolve(&mut self, problem: &P) -> Result<u64, EngineError> {
        let replacements = self.population_size - self.elitism;
        let mut offspring = Vec::with_capacity(replacements + 1);
        while offspring.len() < replacements {
            let p1 = self.selection.execute(&self.population, &mut self.rng)?;
            let p2 = self.selection.execute(&self.population, &mut self.rng)?;
            let (mut c1, mut c2) = self.crossover.execute(p1, p2, &mut self.rng);
            self.mutation.execute(&mut c1, &mut self.rng);
            self.mutation.execute(&mut c2, &mut self.rng);
            offspring.push(c1);
            if offspring.len() < replacements {
                offspring.push(c2);
            }
        }
        self.evaluator.evaluate(&mut offspring, problem)?;

        // Population is sorted best-first, so the elites are its prefix.
        self.population.truncate(self.elitism);
        self.population.extend(offspring);
        self.population.sort_by(single_objective_cmp);
        Ok(replacements as u64)
    }

    fn solutions(&self) -> &[Solution<P::Variables>] {
        &self.population
    }

    fn result(&self) -> RunResult<P::Variables> {
        RunResult::Best(self.population[0].clone())
    }
}
