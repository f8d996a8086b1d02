//! Deterministic step functions for cycle-detection tests.
//!
//! - [`Rho`]: walks `0, 1, ..., mu + lam - 1` and loops back to `mu`,
//!   so its cycle structure is known exactly.
//! - [`CountingStep`]: wraps any step function and counts calls.

use std::sync::atomic::{AtomicU64, Ordering};

/// A rho-shaped sequence over `u64` with tail length `mu` and cycle
/// length `lam`, starting from state `0`.
#[derive(Clone, Copy, Debug)]
pub struct Rho {
    pub mu: u64,
    pub lam: u64,
}

impl Rho {
    /// # Panics
    ///
    /// Panics if `lam == 0`.
    pub fn new(mu: u64, lam: u64) -> Self {
        assert!(lam > 0, "a rho sequence needs a cycle of length >= 1");
        Self { mu, lam }
    }

    /// The successor of `state`.
    pub fn step(&self, state: &u64) -> u64 {
        let next = state + 1;
        if next < self.mu + self.lam {
            next
        } else {
            self.mu
        }
    }

    /// The state after `t` steps from `0`, computed arithmetically.
    pub fn at(&self, t: u64) -> u64 {
        if t < self.mu {
            t
        } else {
            self.mu + (t - self.mu) % self.lam
        }
    }
}

/// Wraps a step function and counts how many times it is called.
pub struct CountingStep<F> {
    inner: F,
    calls: AtomicU64,
}

impl<F> CountingStep<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            calls: AtomicU64::new(0),
        }
    }

    /// Total calls so far.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    /// Call the wrapped function once.
    pub fn call<S>(&self, state: &S) -> S
    where
        F: Fn(&S) -> S,
    {
        self.calls.fetch_add(1, Ordering::Relaxed);
        (self.inner)(state)
    }
}
