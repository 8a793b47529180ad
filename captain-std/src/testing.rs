//! Testing utilities for Captain.
//!
//! This module provides utilities to make testing orders and inspections easier.
//!
//! # Features
//!
//! - [`RecordingOrder`]: An order that records every argument vector it receives
//! - [`CountingOrder`]: An order that counts invocations
//! - [`RecordingInspection`]: An inspection that records every response it sees
//! - [`EchoOrder`]: An order that answers with its own argument vector

use captain_core::{Inspection, Order};
use std::sync::{
    Arc, Mutex, MutexGuard,
    atomic::{AtomicUsize, Ordering},
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// ============================================================================
// Recording Order
// ============================================================================

/// An order that records the argument vectors it receives and answers with a
/// fixed response.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingOrder::new("done");
///
/// let captain = Captain::new().add_configs(Config::from_order(None, recorder.clone()));
/// captain.command("echo hi")?;
///
/// assert_eq!(recorder.calls(), vec![vec!["echo", "hi"]]);
/// ```
pub struct RecordingOrder<R> {
    calls: Arc<Mutex<Vec<Vec<String>>>>,
    response: R,
}

impl<R: Clone> RecordingOrder<R> {
    /// Create a recording order answering with `response`.
    pub fn new(response: R) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            response,
        }
    }

    /// Get a clone of the recorded argument vectors.
    pub fn calls(&self) -> Vec<Vec<String>> {
        lock(&self.calls).clone()
    }

    /// Get the number of recorded invocations.
    pub fn count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Check whether the order has been invoked.
    pub fn was_called(&self) -> bool {
        self.count() > 0
    }
}

impl<R: Clone> Clone for RecordingOrder<R> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
            response: self.response.clone(),
        }
    }
}

impl<C, R> Order<C, R> for RecordingOrder<R>
where
    R: Clone + Send + Sync + 'static,
{
    fn call(&self, args: &[String], _context: &C) -> R {
        lock(&self.calls).push(args.to_vec());
        self.response.clone()
    }
}

// ============================================================================
// Counting Order
// ============================================================================

/// An order that counts invocations and answers with `R::default()`.
pub struct CountingOrder {
    count: Arc<AtomicUsize>,
}

impl CountingOrder {
    /// Create a new counting order.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Default for CountingOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingOrder {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl<C, R: Default> Order<C, R> for CountingOrder {
    fn call(&self, _args: &[String], _context: &C) -> R {
        self.count.fetch_add(1, Ordering::SeqCst);
        R::default()
    }
}

// ============================================================================
// Recording Inspection
// ============================================================================

/// An inspection that records every response it receives and passes it on.
pub struct RecordingInspection<R> {
    responses: Arc<Mutex<Vec<R>>>,
}

impl<R: Clone> RecordingInspection<R> {
    /// Create a new recording inspection.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded responses.
    pub fn responses(&self) -> Vec<R> {
        lock(&self.responses).clone()
    }

    /// Get the number of recorded responses.
    pub fn count(&self) -> usize {
        lock(&self.responses).len()
    }
}

impl<R: Clone> Default for RecordingInspection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for RecordingInspection<R> {
    fn clone(&self) -> Self {
        Self {
            responses: self.responses.clone(),
        }
    }
}

impl<R> Inspection<R> for RecordingInspection<R>
where
    R: Clone + Send + 'static,
{
    fn inspect(&self, response: R) -> R {
        lock(&self.responses).push(response.clone());
        response
    }
}

// ============================================================================
// Echo Order
// ============================================================================

/// An order answering with the argument vector it was given.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoOrder;

impl<C> Order<C, Vec<String>> for EchoOrder {
    fn call(&self, args: &[String], _context: &C) -> Vec<String> {
        args.to_vec()
    }
}
