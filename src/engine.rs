//! Search driver: owns the algorithm, the termination predicate and the
//! observable bus, and runs the generation loop as a small state machine.

use crate::error::EngineError;
use crate::observer::{EventKind, Observable, ObservableEvent};
use crate::solution::Solution;
use crate::termination::{Progress, Termination};
use crate::{Evolver, Problem};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Lifecycle of a single run. The engine only moves forward:
/// `Created → Running → {Terminated, Failed}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Created,
    Running,
    Terminated,
    Failed,
}

/// Final outcome of a run: the best solution for single-objective searches,
/// or the discovered front for multi-objective ones.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum RunResult<V> {
    Best(Solution<V>),
    Front(Vec<Solution<V>>),
}

impl<V> RunResult<V> {
    /// The single best solution, if this run produced one.
    pub fn best(&self) -> Option<&Solution<V>> {
        match self {
            RunResult::Best(s) => Some(s),
            RunResult::Front(_) => None,
        }
    }

    /// The result as a slice of solutions, whatever its shape.
    pub fn solutions(&self) -> &[Solution<V>] {
        match self {
            RunResult::Best(s) => std::slice::from_ref(s),
            RunResult::Front(front) => front,
        }
    }
}

/// Drives an [`Evolver`] against a [`Problem`] until the termination
/// predicate holds, publishing an event after initialization, after every
/// generation, and once at the end.
pub struct Engine<P: Problem, A: Evolver<P>> {
    problem: P,
    algorithm: A,
    termination: Box<dyn Termination>,
    observable: Observable<P::Variables>,
    progress: Progress,
    state: EngineState,
}

impl<P: Problem, A: Evolver<P>> Engine<P, A> {
    pub fn new(problem: P, algorithm: A, termination: impl Termination + 'static) -> Self {
        Self {
            problem,
            algorithm,
            termination: Box::new(termination),
            observable: Observable::new(),
            progress: Progress::default(),
            state: EngineState::Created,
        }
    }

    /// The bus observers subscribe to. Register before calling [`run`].
    ///
    /// [`run`]: Engine::run
    pub fn observable_mut(&mut self) -> &mut Observable<P::Variables> {
        &mut self.observable
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn name(&self) -> &str {
        self.algorithm.name()
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Wall-clock time the run has consumed so far.
    pub fn computing_time(&self) -> std::time::Duration {
        self.progress.computing_time
    }

    /// Executes the run to completion.
    ///
    /// Fails with [`EngineError::InvalidState`] when invoked a second time.
    /// An evaluation failure moves the engine to `Failed`, publishes a
    /// failure event and surfaces the error; no partial result is exposed.
    pub fn run(&mut self) -> Result<(), EngineError> {
        if self.state != EngineState::Created {
            return Err(EngineError::InvalidState {
                expected: EngineState::Created,
                found: self.state,
            });
        }
        self.state = EngineState::Running;
        tracing::debug!(algorithm = self.algorithm.name(), "starting run");

        let started = Instant::now();
        match self.drive(started) {
            Ok(()) => {
                self.state = EngineState::Terminated;
                self.publish(EventKind::Terminated);
                tracing::debug!(
                    algorithm = self.algorithm.name(),
                    evaluations = self.progress.evaluations,
                    generations = self.progress.generations,
                    "run terminated"
                );
                Ok(())
            }
            Err(err) => {
                self.progress.computing_time = started.elapsed();
                self.state = EngineState::Failed;
                self.publish(EventKind::Failed);
                tracing::debug!(algorithm = self.algorithm.name(), error = %err, "run failed");
                Err(err)
            }
        }
    }

    fn drive(&mut self, started: Instant) -> Result<(), EngineError> {
        let evaluations = self.algorithm.initialize(&self.problem)?;
        self.progress.evaluations += evaluations;
        self.progress.computing_time = started.elapsed();
        self.publish(EventKind::Started);

        while !self.termination.is_met(&self.progress) {
            let evaluations = self.algorithm.evolve(&self.problem)?;
            self.progress.evaluations += evaluations;
            self.progress.generations += 1;
            self.progress.computing_time = started.elapsed();
            self.publish(EventKind::Progress);
        }
        Ok(())
    }

    fn publish(&mut self, kind: EventKind) {
        let event = ObservableEvent {
            kind,
            evaluations: self.progress.evaluations,
            generations: self.progress.generations,
            computing_time: self.progress.computing_time,
            solutions: self.algorithm.solutions(),
        };
        self.observable.notify_all(&event);
    }

    /// The run's outcome. Only valid once the engine has terminated.
    pub fn result(&self) -> Result<RunResult<P::Variables>, EngineError> {
        if self.state != EngineState::Terminated {
            return Err(EngineError::InvalidState {
                expected: EngineState::Terminated,
                found: self.state,
            });
        }
        Ok(self.algorithm.result())
    }
}
