use crate::error::EvaluationError;
use crate::solution::Solution;
use crate::Problem;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Batch evaluation strategy.
///
/// Implementations score every solution in place, so the same solution
/// objects come back mutated and input order is preserved regardless of how
/// the work is scheduled. The first scoring failure aborts the batch; the
/// engine treats that as fatal for the run.
pub trait Evaluate<P: Problem>: Send + Sync {
    fn evaluate(
        &self,
        solutions: &mut [Solution<P::Variables>],
        problem: &P,
    ) -> Result<(), EvaluationError>;
}

/// Scores the batch one solution at a time on the engine thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialEvaluator;

impl<P: Problem> Evaluate<P> for SequentialEvaluator {
    fn evaluate(
        &self,
        solutions: &mut [Solution<P::Variables>],
        problem: &P,
    ) -> Result<(), EvaluationError> {
        solutions.iter_mut().try_for_each(|s| problem.evaluate(s))
    }
}

/// Distributes the batch across the rayon worker pool and blocks until every
/// solution is scored. Objective functions are assumed pure per solution, so
/// completion order cannot change the result.
#[cfg(feature = "parallel")]
#[derive(Clone, Copy, Debug, Default)]
pub struct ParallelEvaluator;

#[cfg(feature = "parallel")]
impl<P: Problem> Evaluate<P> for ParallelEvaluator {
    fn evaluate(
        &self,
        solutions: &mut [Solution<P::Variables>],
        problem: &P,
    ) -> Result<(), EvaluationError> {
        solutions
            .par_iter_mut()
            .try_for_each(|s| problem.evaluate(s))
    }
}
