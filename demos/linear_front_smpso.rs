//! SMPSO on a toy two-objective problem with a known Pareto front.
//!
//! Run with: `cargo run --example linear_front_smpso`

use pareto_engine::algorithms::smpso::Smpso;
use pareto_engine::error::EvaluationError;
use pareto_engine::operator::PolynomialMutation;
use pareto_engine::{
    BoundedProblem, Engine, FrontCaptureObserver, MaxEvaluations, Problem, ProgressObserver,
    Solution,
};
use rand::Rng;

/// Minimize (x, 1 - x) over x in [0, 1]: the entire segment is the front.
struct LinearFront;

impl Problem for LinearFront {
    type Variables = Vec<f64>;

    fn name(&self) -> &str {
        "linear front"
    }

    fn number_of_objectives(&self) -> usize {
        2
    }

    fn number_of_variables(&self) -> usize {
        1
    }

    fn create_solution<R: Rng>(&self, rng: &mut R) -> Solution<Vec<f64>> {
        Solution::new(vec![rng.random::<f64>()], 2, 0)
    }

    fn evaluate(&self, solution: &mut Solution<Vec<f64>>) -> Result<(), EvaluationError> {
        let x = solution.variables[0];
        solution.objectives[0] = x;
        solution.objectives[1] = 1.0 - x;
        Ok(())
    }
}

impl BoundedProblem for LinearFront {
    fn lower_bounds(&self) -> &[f64] {
        &[0.0]
    }

    fn upper_bounds(&self) -> &[f64] {
        &[1.0]
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let problem = LinearFront;
    let mutation = PolynomialMutation::new(
        1.0 / problem.number_of_variables() as f64,
        20.0,
        problem.lower_bounds(),
        problem.upper_bounds(),
    );
    let smpso = Smpso::new(100, 100, mutation, 42);
    let mut engine = Engine::new(problem, smpso, MaxEvaluations(25_000));

    engine
        .observable_mut()
        .register(Box::new(ProgressObserver::new(1000)));
    let capture: FrontCaptureObserver<Vec<f64>> = FrontCaptureObserver::new();
    engine.observable_mut().register(Box::new(capture.clone()));

    engine.run().expect("run failed");
    let result = engine.result().expect("result after termination");

    println!("Algorithm: {}", engine.name());
    println!("Computing time: {:?}", engine.computing_time());
    println!("Front size: {}", result.solutions().len());
    for solution in result.solutions() {
        println!("{:.6}  {:.6}", solution.objectives[0], solution.objectives[1]);
    }
}
