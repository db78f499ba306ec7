//! Elitist (mu + lambda) evolution strategy on a 512-bit OneMax.
//!
//! Run with: `cargo run --example onemax_evolution_strategy`

use pareto_engine::algorithms::evolution_strategy::EvolutionStrategy;
use pareto_engine::error::EvaluationError;
use pareto_engine::operator::BitFlipMutation;
use pareto_engine::{Engine, MaxEvaluations, Problem, Solution};
use rand::Rng;

/// OneMax as minimization: the objective counts the zero bits.
struct OneMax {
    bits: usize,
}

impl Problem for OneMax {
    type Variables = Vec<bool>;

    fn name(&self) -> &str {
        "OneMax"
    }

    fn number_of_objectives(&self) -> usize {
        1
    }

    fn number_of_variables(&self) -> usize {
        self.bits
    }

    fn create_solution<R: Rng>(&self, rng: &mut R) -> Solution<Vec<bool>> {
        let bits = (0..self.bits).map(|_| rng.random::<bool>()).collect();
        Solution::new(bits, 1, 0)
    }

    fn evaluate(&self, solution: &mut Solution<Vec<bool>>) -> Result<(), EvaluationError> {
        solution.objectives[0] = solution.variables.iter().filter(|&&b| !b).count() as f64;
        Ok(())
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let bits = 512;
    let problem = OneMax { bits };
    let mutation = BitFlipMutation {
        probability: 1.0 / bits as f64,
    };
    let strategy = EvolutionStrategy::new(1, 10, mutation, 42);
    let mut engine = Engine::new(problem, strategy, MaxEvaluations(25_000));

    engine.run().expect("run failed");
    let result = engine.result().expect("result after termination");
    let best = result.best().expect("single-objective best");

    let ones = best.variables.iter().filter(|&&b| b).count();
    println!("Algorithm: {}", engine.name());
    println!("Ones: {ones}/{bits}");
    println!("Objective: {}", best.objectives[0]);
    println!("Computing time: {:?}", engine.computing_time());
}
