//! The shape of an eventually periodic trajectory.

use std::fmt;

/// Tail length and loop length of a trajectory.
///
/// State `t` of the trajectory equals state `reduce(t)`, and
/// `reduce(t) < mu + lam` for every `t`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cycle {
    /// Index of the first state on the loop.
    pub mu: u64,
    /// Number of distinct states on the loop. Always at least 1.
    pub lam: u64,
}

impl Cycle {
    /// Map step count `t` onto the earliest equivalent step count.
    pub fn reduce(&self, t: u64) -> u64 {
        if t < self.mu {
            t
        } else {
            self.mu + (t - self.mu) % self.lam
        }
    }

    /// Whether step `t` lies on the loop.
    pub fn in_loop(&self, t: u64) -> bool {
        t >= self.mu
    }

    /// Number of distinct states in the trajectory.
    pub fn distinct_states(&self) -> u64 {
        self.mu + self.lam
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mu={} lam={}", self.mu, self.lam)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_leaves_tail_alone() {
        let c = Cycle { mu: 5, lam: 3 };
        for t in 0..5 {
            assert_eq!(c.reduce(t), t);
            assert!(!c.in_loop(t));
        }
    }

    #[test]
    fn reduce_wraps_loop() {
        let c = Cycle { mu: 2, lam: 3 };
        assert_eq!(c.reduce(2), 2);
        assert_eq!(c.reduce(4), 4);
        assert_eq!(c.reduce(5), 2);
        assert_eq!(c.reduce(100), 2 + 98 % 3);
        assert_eq!(c.reduce(1_000_000_000), 2 + (1_000_000_000 - 2) % 3);
    }

    #[test]
    fn reduce_stays_below_distinct_states() {
        let c = Cycle { mu: 7, lam: 11 };
        for t in [0, 6, 7, 17, 18, 12345, u64::MAX] {
            assert!(c.reduce(t) < c.distinct_states());
        }
    }

    #[test]
    fn display() {
        assert_eq!(Cycle { mu: 2, lam: 3 }.to_string(), "mu=2 lam=3");
    }
}
