use crate::engine::EngineState;

/// Two solutions were compared whose objective vectors have different lengths.
///
/// This is a problem-definition bug, not a runtime condition: within a run
/// every solution must carry the same number of objectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("solutions have incompatible objective vectors: {left} vs {right}")]
pub struct IncompatibleSolutions {
    pub left: usize,
    pub right: usize,
}

/// A problem's scoring logic failed. Fatal to the current run; the engine
/// accepts no partial generation.
#[derive(Debug, Clone, thiserror::Error)]
#[error("evaluation failed for problem `{problem}`: {message}")]
pub struct EvaluationError {
    pub problem: String,
    pub message: String,
}

impl EvaluationError {
    pub fn new(problem: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            problem: problem.into(),
            message: message.into(),
        }
    }
}

/// An observer's `update` failed. Contained at the bus: logged, never
/// propagated to the engine or to other observers.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct ObserverError(pub String);

impl From<&str> for ObserverError {
    fn from(message: &str) -> Self {
        Self(message.to_owned())
    }
}

impl From<String> for ObserverError {
    fn from(message: String) -> Self {
        Self(message)
    }
}

/// Errors surfaced by [`Engine::run`](crate::engine::Engine::run) and
/// [`Engine::result`](crate::engine::Engine::result).
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    #[error(transparent)]
    Comparison(#[from] IncompatibleSolutions),
    #[error("invalid engine state: expected {expected:?}, found {found:?}")]
    InvalidState {
        expected: EngineState,
        found: EngineState,
    },
}
