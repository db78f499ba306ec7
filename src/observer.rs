//! Publish/subscribe bus for engine progress.
//!
//! The engine constructs a fresh [`ObservableEvent`] at every notification
//! point and hands it to each registered observer in registration order.
//! Delivery is synchronous and fire-and-forget: a failing observer is logged
//! and skipped, never allowed to starve later observers or abort the run.
//! The observer set cannot be mutated from inside an `update` callback;
//! `notify_all` holds the exclusive borrow for the whole pass.

use crate::error::ObserverError;
use crate::solution::Solution;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Which point of the run produced an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// Initial population evaluated, loop about to start.
    Started,
    /// One generation completed.
    Progress,
    /// Termination predicate satisfied, final state published.
    Terminated,
    /// Evaluation failed, run aborted.
    Failed,
}

/// Immutable progress snapshot delivered to observers.
#[derive(Debug)]
pub struct ObservableEvent<'a, V> {
    pub kind: EventKind,
    pub evaluations: u64,
    pub generations: u64,
    pub computing_time: Duration,
    pub solutions: &'a [Solution<V>],
}

/// A progress subscriber. Observers may block or do slow work; the engine
/// simply pauses until the notification pass finishes.
pub trait Observer<V> {
    fn update(&mut self, event: &ObservableEvent<'_, V>) -> Result<(), ObserverError>;
}

/// Handle returned by [`Observable::register`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionKey(u64);

/// Observer registry with defined (registration) delivery order.
pub struct Observable<V> {
    observers: Vec<(SubscriptionKey, Box<dyn Observer<V>>)>,
    next_key: u64,
}

impl<V> Default for Observable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Observable<V> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            next_key: 0,
        }
    }

    pub fn register(&mut self, observer: Box<dyn Observer<V>>) -> SubscriptionKey {
        let key = SubscriptionKey(self.next_key);
        self.next_key += 1;
        self.observers.push((key, observer));
        key
    }

    /// Removes a subscription. Returns whether the key was registered.
    pub fn unregister(&mut self, key: SubscriptionKey) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(k, _)| *k != key);
        self.observers.len() != before
    }

    /// Delivers `event` to every observer in registration order. A failing
    /// observer is logged and the pass continues.
    pub fn notify_all(&mut self, event: &ObservableEvent<'_, V>) {
        for (key, observer) in &mut self.observers {
            if let Err(err) = observer.update(event) {
                tracing::warn!(subscription = key.0, error = %err, "observer update failed");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

/// Logs progress through `tracing` every `step` evaluations.
#[derive(Clone, Copy, Debug)]
pub struct ProgressObserver {
    step: u64,
    last_logged: u64,
}

impl ProgressObserver {
    pub fn new(step: u64) -> Self {
        assert!(step > 0, "step must be greater than 0");
        Self {
            step,
            last_logged: 0,
        }
    }
}

impl<V> Observer<V> for ProgressObserver {
    fn update(&mut self, event: &ObservableEvent<'_, V>) -> Result<(), ObserverError> {
        let due = event.evaluations >= self.last_logged + self.step;
        if due || event.kind != EventKind::Progress {
            self.last_logged = event.evaluations;
            tracing::info!(
                kind = ?event.kind,
                evaluations = event.evaluations,
                generations = event.generations,
                computing_time_ms = event.computing_time.as_millis() as u64,
                solutions = event.solutions.len(),
                "search progress"
            );
        }
        Ok(())
    }
}

/// Retains the most recent solution snapshot for external consumers such as
/// a plotting front end. The handle is cheaply cloneable; register one clone
/// and read the front from another.
#[derive(Clone, Debug, Default)]
pub struct FrontCaptureObserver<V> {
    snapshot: Arc<Mutex<Vec<Solution<V>>>>,
}

impl<V: Clone> FrontCaptureObserver<V> {
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The solutions from the latest event, empty before the first one.
    pub fn front(&self) -> Vec<Solution<V>> {
        self.snapshot
            .lock()
            .map(|snapshot| snapshot.clone())
            .unwrap_or_default()
    }
}

impl<V: Clone> Observer<V> for FrontCaptureObserver<V> {
    fn update(&mut self, event: &ObservableEvent<'_, V>) -> Result<(), ObserverError> {
        let mut snapshot = self
            .snapshot
            .lock()
            .map_err(|_| ObserverError::from("snapshot lock poisoned"))?;
        *snapshot = event.solutions.to_vec();
        Ok(())
    }
}
