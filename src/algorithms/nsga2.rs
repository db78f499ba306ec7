use crate::density::CrowdingDistance;
use crate::dominance::{Compare, ConstraintDominanceComparator};
use crate::engine::RunResult;
use crate::error::{EngineError, IncompatibleSolutions};
use crate::evaluate::{Evaluate, SequentialEvaluator};
use crate::operator::{CrossoverOperator, MutationOperator};
use crate::solution::Solution;
use crate::{Evolver, Problem};
use rand::prelude::SeedableRng;
use rand::Rng;
use rand_pcg::Pcg64;
use std::cmp::Ordering;

/// NSGA-II: elitist multi-objective search by non-dominated sorting.
///
/// Parents are picked by binary tournament on (rank, crowding distance),
/// offspring are merged with the current population, and the next generation
/// is filled front by front, truncating the split front by descending
/// crowding distance.
pub struct Nsga2<P: Problem, X, M, E = SequentialEvaluator> {
    population_size: usize,
    crossover: X,
    mutation: M,
    evaluator: E,
    comparator: ConstraintDominanceComparator,
    density: CrowdingDistance,
    population: Vec<Solution<P::Variables>>,
    rng: Pcg64,
}

impl<P, X, M> Nsga2<P, X, M>
where
    P: Problem,
    X: CrossoverOperator<P::Variables>,
    M: MutationOperator<P::Variables>,
{
    pub fn new(population_size: usize, crossover: X, mutation: M, seed: u64) -> Self {
        Self::with_evaluator(population_size, crossover, mutation, SequentialEvaluator, seed)
    }
}

impl<P, X, M, E> Nsga2<P, X, M, E>
where
    P: Problem,
    X: CrossoverOperator<P::Variables>,
    M: MutationOperator<P::Variables>,
    E: Evaluate<P>,
{
    pub fn with_evaluator(
        population_size: usize,
        crossover: X,
        mutation: M,
        evaluator: E,
        seed: u64,
    ) -> Self {
        assert!(population_size > 1, "population_size must be greater than 1");
        Self {
            population_size,
            crossover,
            mutation,
            evaluator,
            comparator: ConstraintDominanceComparator::default(),
            density: CrowdingDistance,
            population: Vec::new(),
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Partitions `set` into successive non-dominated fronts (indices into
    /// `set`, front 0 first).
    fn fast_non_dominated_sort(
        &self,
        set: &[Solution<P::Variables>],
    ) -> Result<Vec<Vec<usize>>, IncompatibleSolutions> {
        let n = set.len();
        let mut domination_count = vec![0_usize; n];
        let mut dominated_indices = vec![Vec::new(); n];

        for i in 0..n {
            for j in (i + 1)..n {
                match self.comparator.compare(&set[i], &set[j])? {
                    Ordering::Less => {
                        dominated_indices[i].push(j);
                        domination_count[j] += 1;
                    }
                    Ordering::Greater => {
                        dominated_indices[j].push(i);
                        domination_count[i] += 1;
                    }
                    Ordering::Equal => {}
                }
            }
        }

        let mut fronts = vec![Vec::new()];
        for i in 0..n {
            if domination_count[i] == 0 {
                fronts[0].push(i);
            }
        }

        let mut current = 0;
        while current < fronts.len() && !fronts[current].is_empty() {
            let mut next_front = Vec::new();
            for &i in &fronts[current] {
                for &j in &dominated_indices[i] {
                    domination_count[j] -= 1;
                    if domination_count[j] == 0 {
                        next_front.push(j);
                    }
                }
            }
            if next_front.is_empty() {
                break;
            }
            fronts.push(next_front);
            current += 1;
        }
        Ok(fronts)
    }

    /// Rebuilds the population from `combined`, front by front, writing rank
    /// and crowding distance on every survivor.
    fn replace(
        &mut self,
        combined: Vec<Solution<P::Variables>>,
    ) -> Result<(), IncompatibleSolutions> {
        let fronts = self.fast_non_dominated_sort(&combined)?;
        let mut next = Vec::with_capacity(self.population_size);

        for (rank, front) in fronts.iter().enumerate() {
            let mut members: Vec<_> = front.iter().map(|&i| combined[i].clone()).collect();
            for m in &mut members {
                m.rank = Some(rank);
            }
            self.density.assign(&mut members);

            if next.len() + members.len() <= self.population_size {
                next.extend(members);
            } else {
                members.sort_by(|a, b| {
                    let da = a.crowding_distance.unwrap_or(f64::INFINITY);
                    let db = b.crowding_distance.unwrap_or(f64::INFINITY);
                    db.partial_cmp(&da).unwrap_or(Ordering::Equal)
                });
                next.extend(members.into_iter().take(self.population_size - next.len()));
                break;
            }
        }
        self.population = next;
        Ok(())
    }

    /// Binary tournament: better rank wins, crowding distance breaks ties.
    fn tournament(&mut self) -> usize {
        let n = self.population.len();
        let i = self.rng.random_range(0..n);
        let j = self.rng.random_range(0..n);
        let rank_i = self.population[i].rank.unwrap_or(usize::MAX);
        let rank_j = self.population[j].rank.unwrap_or(usize::MAX);
        match rank_i.cmp(&rank_j) {
            Ordering::Less => i,
            Ordering::Greater => j,
            Ordering::Equal => {
                let di = self.population[i].crowding_distance.unwrap_or(0.0);
                let dj = self.population[j].crowding_distance.unwrap_or(0.0);
                if di >= dj {
                    i
                } else {
                    j
                }
            }
        }
    }
}

impl<P, X, M, E> Evolver<P> for Nsga2<P, X, M, E>
where
    P: Problem,
    X: CrossoverOperator<P::Variables>,
    M: MutationOperator<P::Variables>,
    E: Evaluate<P>,
{
    fn name(&self) -> &'static str {
        "NSGA-II"
    }

    fn initialize(&mut self, problem: &P) -> Result<u64, EngineError> {
        let mut population: Vec<_> = (0..self.population_size)
            .map(|_| problem.create_solution(&mut self.rng))
            .collect();
        self.evaluator.evaluate(&mut population, problem)?;
        self.replace(population)?;
        Ok(self.population_size as u64)
    }

    fn evolve(&mut self, problem: &P) -> Result<u64, EngineError> {
        let mut offspring = Vec::with_capacity(self.population_size + 1);
        while offspring.len() < self.population_size {
            let a = self.tournament();
            let b = self.tournament();
            let (mut c1, mut c2) =
                self.crossover
                    .execute(&self.population[a], &self.population[b], &mut self.rng);
            self.mutation.execute(&mut c1, &mut self.rng);
            self.mutation.execute(&mut c2, &mut self.rng);
            offspring.push(c1);
            if offspring.len() < self.population_size {
                offspring.push(c2);
            }
        }
        self.evaluator.evaluate(&mut offspring, problem)?;

        let mut combined = std::mem::take(&mut self.population);
        combined.extend(offspring);
        self.replace(combined)?;
        Ok(self.population_size as u64)
    }

    fn solutions(&self) -> &[Solution<P::Variables>] {
        &self.population
    }

    fn result(&self) -> RunResult<P::Variables> {
        RunResult::Front(
            self.population
                .iter()
                .filter(|s| s.rank == Some(0))
                .cloned()
                .collect(),
        )
    }
}
