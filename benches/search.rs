use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pareto_engine::algorithms::nsga2::Nsga2;
use pareto_engine::algorithms::smpso::Smpso;
use pareto_engine::error::EvaluationError;
use pareto_engine::operator::{PolynomialMutation, SbxCrossover};
use pareto_engine::{
    BoundedProblem, CrowdingArchive, Engine, MaxEvaluations, Problem, Solution,
};
use rand::prelude::SeedableRng;
use rand::Rng;
use rand_pcg::Pcg64;
use std::hint::black_box;

// =============================================================================
// Benchmark problem
// =============================================================================

/// ZDT1-style two-objective problem over a real vector in [0, 1]^n.
struct Zdt1 {
    variables: usize,
}

impl Problem for Zdt1 {
    type Variables = Vec<f64>;

    fn name(&self) -> &str {
        "ZDT1"
    }

    fn number_of_objectives(&self) -> usize {
        2
    }

    fn number_of_variables(&self) -> usize {
        self.variables
    }

    fn create_solution<R: Rng>(&self, rng: &mut R) -> Solution<Vec<f64>> {
        let vars = (0..self.variables).map(|_| rng.random::<f64>()).collect();
        Solution::new(vars, 2, 0)
    }

    fn evaluate(&self, solution: &mut Solution<Vec<f64>>) -> Result<(), EvaluationError> {
        let x = &solution.variables;
        let n = x.len() as f64;
        let f1 = x[0];
        let g = 1.0 + 9.0 * x[1..].iter().sum::<f64>() / (n - 1.0).max(1.0);
        let f2 = g * (1.0 - (f1 / g).sqrt());
        solution.objectives[0] = f1;
        solution.objectives[1] = f2;
        Ok(())
    }
}

const LOWER: [f64; 32] = [0.0; 32];
const UPPER: [f64; 32] = [1.0; 32];

impl BoundedProblem for Zdt1 {
    fn lower_bounds(&self) -> &[f64] {
        &LOWER[..self.variables]
    }

    fn upper_bounds(&self) -> &[f64] {
        &UPPER[..self.variables]
    }
}

// =============================================================================
// Archive pressure
// =============================================================================

fn bench_archive_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("archive_add");
    for capacity in [50_usize, 100, 200] {
        group.throughput(Throughput::Elements(1000));
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            &capacity,
            |b, &capacity| {
                b.iter(|| {
                    let mut rng = Pcg64::seed_from_u64(3);
                    let mut archive = CrowdingArchive::new(capacity);
                    for _ in 0..1000 {
                        let x: f64 = rng.random();
                        let solution = Solution::with_objectives(vec![x], vec![x, 1.0 - x]);
                        black_box(archive.add(solution).unwrap());
                    }
                    archive.len()
                })
            },
        );
    }
    group.finish();
}

// =============================================================================
// Full short runs
// =============================================================================

fn bench_nsga2_run(c: &mut Criterion) {
    c.bench_function("nsga2_zdt1_2000_evals", |b| {
        b.iter(|| {
            let bounds = vec![0.0; 8];
            let upper = vec![1.0; 8];
            let crossover = SbxCrossover::new(0.9, 20.0, &bounds, &upper);
            let mutation = PolynomialMutation::new(1.0 / 8.0, 20.0, &bounds, &upper);
            let nsga2 = Nsga2::new(40, crossover, mutation, 17);
            let mut engine = Engine::new(Zdt1 { variables: 8 }, nsga2, MaxEvaluations(2000));
            engine.run().unwrap();
            black_box(engine.result().unwrap())
        })
    });
}

fn bench_smpso_run(c: &mut Criterion) {
    c.bench_function("smpso_zdt1_2000_evals", |b| {
        b.iter(|| {
            let bounds = vec![0.0; 8];
            let upper = vec![1.0; 8];
            let mutation = PolynomialMutation::new(1.0 / 8.0, 20.0, &bounds, &upper);
            let smpso = Smpso::new(40, 40, mutation, 17);
            let mut engine = Engine::new(Zdt1 { variables: 8 }, smpso, MaxEvaluations(2000));
            engine.run().unwrap();
            black_box(engine.result().unwrap())
        })
    });
}

criterion_group!(benches, bench_archive_add, bench_nsga2_run, bench_smpso_run);
criterion_main!(benches);
