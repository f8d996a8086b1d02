//! Floyd's tortoise-and-hare detection and direct simulation.

use tracing::debug;

use crate::cycle::Cycle;

/// Find the tail length and loop length of the trajectory from `initial`.
///
/// Three phases:
/// 1. tortoise moves one step, hare two, until they meet inside the loop;
/// 2. tortoise restarts from `initial`, both move one step until they
///    meet again, at index `mu`;
/// 3. hare walks the loop once from there, counting `lam`.
///
/// Calls `step` O(mu + lam) times. States are compared with `==`.
///
/// Does not terminate if `step` is non-deterministic or the reachable
/// domain is infinite.
pub fn detect<S, F>(initial: &S, step: F) -> Cycle
where
    S: Clone + PartialEq,
    F: Fn(&S) -> S,
{
    let mut step_calls: u64 = 0;
    let mut next = |s: &S| {
        step_calls += 1;
        step(s)
    };

    let mut tortoise = next(initial);
    let first = next(initial);
    let mut hare = next(&first);
    while tortoise != hare {
        tortoise = next(&tortoise);
        let mid = next(&hare);
        hare = next(&mid);
    }

    let mut mu = 0;
    tortoise = initial.clone();
    while tortoise != hare {
        tortoise = next(&tortoise);
        hare = next(&hare);
        mu += 1;
    }

    let mut lam = 1;
    hare = next(&tortoise);
    while tortoise != hare {
        hare = next(&hare);
        lam += 1;
    }

    debug!(mu, lam, step_calls, "cycle detected");
    Cycle { mu, lam }
}

/// Apply `step` to a clone of `initial` exactly `n` times.
pub fn advance<S, F>(initial: &S, step: F, n: u64) -> S
where
    S: Clone,
    F: Fn(&S) -> S,
{
    let mut state = initial.clone();
    for _ in 0..n {
        state = step(&state);
    }
    state
}

/// The state after `t` steps, simulating at most `mu + lam` of them after
/// detection.
pub fn fast_forward<S, F>(initial: &S, step: F, t: u64) -> S
where
    S: Clone + PartialEq,
    F: Fn(&S) -> S,
{
    let cycle = detect(initial, &step);
    advance(initial, step, cycle.reduce(t))
}
