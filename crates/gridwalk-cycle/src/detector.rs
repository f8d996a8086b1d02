//! A simulation bundled with its step function and memoised cycle.

use crate::cycle::Cycle;
use crate::floyd::{advance, detect};

/// Owns an initial state and a step function, and answers "what is the
/// state after `t` steps" for arbitrarily large `t`.
///
/// Detection runs at most once per detector.
///
/// # Examples
///
/// ```
/// use gridwalk_cycle::{Cycle, CycleDetector};
///
/// // 0 -> 1 -> 2 -> 3 -> 4 -> 2 -> ...
/// let mut d = CycleDetector::new(0u32, |s: &u32| if *s == 4 { 2 } else { s + 1 });
/// assert_eq!(d.detect(), Cycle { mu: 2, lam: 3 });
/// assert_eq!(d.state_at(100), 4);
/// ```
pub struct CycleDetector<S, F> {
    initial: S,
    step: F,
    cycle: Option<Cycle>,
}

impl<S, F> CycleDetector<S, F>
where
    S: Clone + PartialEq,
    F: Fn(&S) -> S,
{
    /// Create a detector. No steps are taken yet.
    pub fn new(initial: S, step: F) -> Self {
        Self {
            initial,
            step,
            cycle: None,
        }
    }

    /// The starting state.
    pub fn initial(&self) -> &S {
        &self.initial
    }

    /// The detected cycle, if [`detect`](Self::detect) has run.
    pub fn cycle(&self) -> Option<Cycle> {
        self.cycle
    }

    /// Detect the cycle, or return the memoised result.
    pub fn detect(&mut self) -> Cycle {
        if let Some(c) = self.cycle {
            return c;
        }
        let c = detect(&self.initial, &self.step);
        self.cycle = Some(c);
        c
    }

    /// The state after exactly `t` steps.
    ///
    /// Simulates at most `mu + lam - 1` steps once the cycle is known.
    pub fn state_at(&mut self, t: u64) -> S {
        let n = self.detect().reduce(t);
        advance(&self.initial, &self.step, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk_test_utils::fixtures::{CountingStep, Rho};

    #[test]
    fn detection_is_memoised() {
        let rho = Rho::new(6, 4);
        let counter = CountingStep::new(|s: &u64| rho.step(s));
        let mut d = CycleDetector::new(0u64, |s: &u64| counter.call(s));
        assert_eq!(d.cycle(), None);
        let first = d.detect();
        let calls = counter.calls();
        assert_eq!(d.detect(), first);
        assert_eq!(d.cycle(), Some(first));
        assert_eq!(counter.calls(), calls);
    }

    #[test]
    fn state_at_matches_rho() {
        let rho = Rho::new(2, 3);
        let mut d = CycleDetector::new(0u64, |s: &u64| rho.step(s));
        for t in [0, 1, 2, 3, 4, 5, 99, 100, 1_000_000_000] {
            assert_eq!(d.state_at(t), rho.at(t), "t = {t}");
        }
        assert_eq!(*d.initial(), 0);
    }

    #[test]
    fn hundredth_state_of_short_rho_is_4() {
        // 0 1 2 3 4 2 3 4 ...: t = 100 reduces to 2 + 98 % 3 = 4.
        let step = |s: &u32| if *s == 4 { 2 } else { s + 1 };
        let mut d = CycleDetector::new(0u32, step);
        assert_eq!(d.detect(), Cycle { mu: 2, lam: 3 });
        assert_eq!(d.state_at(100), 4);
        assert_eq!(advance(&0u32, step, 100), 4);
    }

    #[test]
    fn state_at_detects_lazily() {
        let rho = Rho::new(1, 2);
        let mut d = CycleDetector::new(0u64, |s: &u64| rho.step(s));
        let _ = d.state_at(7);
        assert_eq!(d.cycle(), Some(Cycle { mu: 1, lam: 2 }));
    }
}
