//! Cycle detection for deterministic simulations.
//!
//! Given an initial state and a pure `step` function over a finite
//! domain, the trajectory `x0, step(x0), step(step(x0)), ...` is
//! eventually periodic. [`Cycle`] records its shape: `mu` steps of tail,
//! then a loop of `lam` states. With it, the state after any step count
//! `t` (even `10^9`) is reached in at most `mu + lam` calls to `step`.
//!
//! Two detectors produce the same [`Cycle`]:
//!
//! - [`detect`]: Floyd's tortoise and hare, O(1) extra memory
//! - [`History`]: hashes every state as it is produced, so the states
//!   themselves can be read back by index without re-simulating
//!
//! [`CycleDetector`] bundles a state and step function and memoises the
//! detection.
//!
//! # Contract
//!
//! `step` must be deterministic and the reachable domain finite.
//! Otherwise detection never terminates. This is not checked.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cycle;
pub mod detector;
pub mod floyd;
pub mod history;

pub use cycle::Cycle;
pub use detector::CycleDetector;
pub use floyd::{advance, detect, fast_forward};
pub use history::{detect_by_history, History};
