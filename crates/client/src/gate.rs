// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loader gate: external preemption of remote operations.
//!
//! Every remote-affecting operation runs as a race between the operation and
//! the gate. Whichever settles first wins and the other is dropped. The gate
//! is not a timeout; whoever holds the [`GateHandle`] decides when to fire
//! (a global loading indicator, a Ctrl-C handler, a view being torn down).
//!
//! A fire preempts only operations already in flight. Preemption is a normal
//! completion, not an error: the operation's result, including a failure, is
//! discarded and its local side effects never run. Once every handle is
//! dropped the gate can no longer fire and operations run to completion.

use std::future::Future;

use tokio::sync::watch;

/// Outcome of an operation raced against the loader gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gated<T> {
    /// The operation settled first.
    Completed(T),
    /// The gate fired first; the operation was dropped.
    Preempted,
}

impl<T> Gated<T> {
    pub fn is_preempted(&self) -> bool {
        matches!(self, Gated::Preempted)
    }

    /// Returns the completed value, if any.
    pub fn completed(self) -> Option<T> {
        match self {
            Gated::Completed(value) => Some(value),
            Gated::Preempted => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Gated<U> {
        match self {
            Gated::Completed(value) => Gated::Completed(f(value)),
            Gated::Preempted => Gated::Preempted,
        }
    }
}

impl<T, E> Gated<Result<T, E>> {
    /// Moves an operation failure outward: `Completed(Err(e))` becomes `Err(e)`.
    pub fn transpose(self) -> Result<Gated<T>, E> {
        match self {
            Gated::Completed(Ok(value)) => Ok(Gated::Completed(value)),
            Gated::Completed(Err(e)) => Err(e),
            Gated::Preempted => Ok(Gated::Preempted),
        }
    }
}

/// Fires the gate.
#[derive(Debug, Clone)]
pub struct GateHandle {
    tx: watch::Sender<u64>,
}

impl GateHandle {
    /// Preempts every operation currently racing this gate.
    pub fn fire(&self) {
        self.tx.send_modify(|generation| *generation = generation.wrapping_add(1));
    }

    /// Number of times the gate has fired.
    pub fn fired(&self) -> u64 {
        *self.tx.borrow()
    }
}

/// The preemption signal operations race against.
#[derive(Debug, Clone, Default)]
pub struct LoaderGate {
    signal: Option<watch::Receiver<u64>>,
}

impl LoaderGate {
    /// A gate that never fires.
    pub fn never() -> Self {
        LoaderGate { signal: None }
    }

    /// Creates a gate together with the handle that fires it.
    pub fn channel() -> (GateHandle, LoaderGate) {
        let (tx, rx) = watch::channel(0);
        (GateHandle { tx }, LoaderGate { signal: Some(rx) })
    }

    /// Runs `op` unless the gate fires first.
    pub async fn race<F>(&self, op: F) -> Gated<F::Output>
    where
        F: Future,
    {
        let Some(signal) = &self.signal else {
            return Gated::Completed(op.await);
        };

        // Only fires after this point count.
        let mut signal = signal.clone();
        signal.borrow_and_update();

        tokio::pin!(op);
        tokio::select! {
            biased;
            output = &mut op => Gated::Completed(output),
            changed = signal.changed() => match changed {
                Ok(()) => Gated::Preempted,
                // Every handle is gone.
                Err(_) => Gated::Completed(op.await),
            },
        }
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
