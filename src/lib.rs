use crate::error::{EngineError, EvaluationError};
use rand::Rng;

/// An optimization problem: a factory for solutions and the scoring logic
/// that fills in their objectives and constraints. The engine only calls
/// through this interface; it never inspects problem internals.
pub trait Problem: Send + Sync {
    type Variables: Clone + Send + Sync;

    fn name(&self) -> &str;
    fn number_of_objectives(&self) -> usize;
    fn number_of_variables(&self) -> usize;
    fn number_of_constraints(&self) -> usize {
        0
    }

    /// Builds one (typically random) unevaluated solution.
    fn create_solution<R: Rng>(&self, rng: &mut R) -> Solution<Self::Variables>;

    /// Scores a solution in place: objectives, and constraints if any.
    fn evaluate(&self, solution: &mut Solution<Self::Variables>) -> Result<(), EvaluationError>;
}

/// A real-coded problem with box constraints on its variables. Needed by
/// the swarm (speed limits) and by the bounded real-vector operators.
pub trait BoundedProblem: Problem<Variables = Vec<f64>> {
    fn lower_bounds(&self) -> &[f64];
    fn upper_bounds(&self) -> &[f64];
}

/// The algorithm plugged into an [`engine::Engine`]: it owns its population,
/// operators, evaluator and randomness, and reports how many evaluations
/// each phase consumed so the engine can track the budget.
pub trait Evolver<P: Problem> {
    fn name(&self) -> &'static str;

    /// Creates and scores the initial population or swarm.
    fn initialize(&mut self, problem: &P) -> Result<u64, EngineError>;

    /// Runs one generation: select, vary, evaluate, replace.
    fn evolve(&mut self, problem: &P) -> Result<u64, EngineError>;

    /// The current working set, published with every event.
    fn solutions(&self) -> &[Solution<P::Variables>];

    /// The outcome exposed after termination.
    fn result(&self) -> RunResult<P::Variables>;
}

pub mod archive;
pub mod density;
pub mod dominance;
pub mod engine;
pub mod error;
pub mod evaluate;
pub mod observer;
pub mod operator;
pub mod solution;
pub mod termination;

pub mod algorithms {
    pub mod evolution_strategy;
    pub mod generational;
    pub mod nsga2;
    pub mod smpso;
}

pub use archive::CrowdingArchive;
pub use density::CrowdingDistance;
pub use dominance::{Compare, ConstraintDominanceComparator, DominanceComparator};
pub use engine::{Engine, EngineState, RunResult};
#[cfg(feature = "parallel")]
pub use evaluate::ParallelEvaluator;
pub use evaluate::{Evaluate, SequentialEvaluator};
pub use observer::{
    EventKind, FrontCaptureObserver, Observable, ObservableEvent, Observer, ProgressObserver,
};
pub use solution::Solution;
pub use termination::{MaxComputingTime, MaxEvaluations, Progress, Termination};
