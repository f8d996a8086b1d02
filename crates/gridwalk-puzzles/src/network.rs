//! Walking a left/right desert network (day 8).
//!
//! A walker's state is its node plus its position in the instruction
//! list. There are finitely many such states, so every walk is eventually
//! periodic, and the [`History`] detector yields both the cycle and every
//! state on the way. The simultaneous ghost walk is then a system of
//! congruences, one per walker.

use indexmap::IndexMap;
use tracing::debug;

use gridwalk_cycle::{detect_by_history, Cycle, History};

use crate::error::PuzzleError;
use crate::input::numbered_lines;

/// One instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// `L`: take the first link.
    Left,
    /// `R`: take the second link.
    Right,
}

/// `(node index, instruction index)`.
type Walker = (usize, usize);

/// Instructions plus the node graph, in input order.
#[derive(Clone, Debug)]
pub struct Network {
    turns: Vec<Turn>,
    nodes: IndexMap<String, [usize; 2]>,
}

impl Network {
    /// Parse the instruction line, then one `AAA = (BBB, CCC)` line per
    /// node. Every link must name a defined node.
    pub fn parse(text: &str) -> Result<Self, PuzzleError> {
        let mut lines = numbered_lines(text);
        let (n, first) = lines
            .next()
            .ok_or_else(|| PuzzleError::parse(1, "missing instruction line"))?;
        let turns = first
            .trim()
            .chars()
            .map(|c| match c {
                'L' => Ok(Turn::Left),
                'R' => Ok(Turn::Right),
                other => Err(PuzzleError::parse(n, format!("bad instruction '{other}'"))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut raw: Vec<(usize, &str, &str, &str)> = Vec::new();
        for (n, line) in lines {
            let (label, links) = line
                .split_once('=')
                .ok_or_else(|| PuzzleError::parse(n, "missing '='"))?;
            let (left, right) = links
                .trim()
                .strip_prefix('(')
                .and_then(|s| s.strip_suffix(')'))
                .and_then(|s| s.split_once(','))
                .ok_or_else(|| PuzzleError::parse(n, "expected '(LEFT, RIGHT)'"))?;
            raw.push((n, label.trim(), left.trim(), right.trim()));
        }

        let mut nodes: IndexMap<String, [usize; 2]> = IndexMap::with_capacity(raw.len());
        for &(n, label, _, _) in &raw {
            if nodes.insert(label.to_string(), [0, 0]).is_some() {
                return Err(PuzzleError::parse(n, format!("node {label} defined twice")));
            }
        }
        for (i, &(n, _, left, right)) in raw.iter().enumerate() {
            let resolve = |name: &str| {
                nodes
                    .get_index_of(name)
                    .ok_or_else(|| PuzzleError::parse(n, format!("link to unknown node {name}")))
            };
            let links = [resolve(left)?, resolve(right)?];
            nodes[i] = links;
        }

        Ok(Self { turns, nodes })
    }

    /// The instruction list.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn label(&self, node: usize) -> &str {
        self.nodes.get_index(node).map_or("", |(k, _)| k.as_str())
    }

    fn advance(&self, (node, i): Walker) -> Walker {
        let link = match self.turns[i] {
            Turn::Left => 0,
            Turn::Right => 1,
        };
        (self.nodes[node][link], (i + 1) % self.turns.len())
    }

    /// Steps from `from` until the walker first stands on a node for which
    /// `is_end` holds. The starting node itself does not count.
    ///
    /// Fails with [`PuzzleError::NoAnswer`] if `from` is not a node or the
    /// walk loops without ever reaching an end node.
    #[tracing::instrument(skip(self, is_end))]
    pub fn steps(&self, from: &str, is_end: impl Fn(&str) -> bool) -> Result<u64, PuzzleError> {
        let start = self
            .nodes
            .get_index_of(from)
            .ok_or_else(|| PuzzleError::no_answer(format!("no node named {from}")))?;
        let mut history = History::new();
        let mut walker = (start, 0);
        let mut count = 0;
        loop {
            if let Some(cycle) = history.observe(walker) {
                debug!(%cycle, "walk loops");
                return Err(PuzzleError::no_answer(format!(
                    "walk from {from} loops without reaching an end node"
                )));
            }
            walker = self.advance(walker);
            count += 1;
            if is_end(self.label(walker.0)) {
                return Ok(count);
            }
        }
    }

    /// Steps until walkers started on every `..A` node all stand on `..Z`
    /// nodes at once.
    #[tracing::instrument(skip_all)]
    pub fn ghost_steps(&self) -> Result<u64, PuzzleError> {
        let walks: Vec<(Cycle, History<Walker>)> = (0..self.nodes.len())
            .filter(|&n| self.label(n).ends_with('A'))
            .map(|n| detect_by_history((n, 0), |&w| self.advance(w)))
            .collect();
        if walks.is_empty() {
            return Err(PuzzleError::no_answer("no start nodes ending in 'A'"));
        }

        let at_end = |(cycle, history): &(Cycle, History<Walker>), t: u64| {
            history
                .state_at(*cycle, t)
                .is_some_and(|&(n, _)| self.label(n).ends_with('Z'))
        };

        // Before every walker is on its loop, check each step directly.
        let settle = walks.iter().map(|(c, _)| c.mu).max().unwrap_or(0);
        debug!(walkers = walks.len(), settle, "ghost walks");
        if let Some(t) = (1..settle).find(|&t| walks.iter().all(|w| at_end(w, t))) {
            return Ok(t);
        }

        // From `settle` on, walker i is at an end exactly when t falls in
        // one of its residue classes modulo its loop length.
        let mut classes: Vec<(u128, u128)> = vec![(0, 1)];
        for walk in &walks {
            let Cycle { mu, lam } = walk.0;
            let residues: Vec<u128> = (mu..mu + lam)
                .filter(|&t| at_end(walk, t))
                .map(|t| u128::from(t % lam))
                .collect();
            let mut merged: Vec<(u128, u128)> = Vec::new();
            for &(a, m) in &classes {
                for &r in &residues {
                    if let Some(class) = merge_congruences(a, m, r, u128::from(lam))? {
                        merged.push(class);
                    }
                }
            }
            merged.sort_unstable();
            merged.dedup();
            if merged.is_empty() {
                return Err(PuzzleError::no_answer(
                    "ghost walkers never stand on end nodes together",
                ));
            }
            classes = merged;
        }

        let lo = u128::from(settle.max(1));
        let best = classes
            .iter()
            .filter_map(|&(a, m)| {
                if a >= lo {
                    Some(a)
                } else {
                    (lo - a).div_ceil(m).checked_mul(m)?.checked_add(a)
                }
            })
            .min()
            .ok_or_else(|| PuzzleError::overflow("first common step exceeds u128"))?;
        u64::try_from(best).map_err(|_| PuzzleError::overflow("step count exceeds u64"))
    }
}

/// Extended Euclid: `(g, x)` with `a * x ≡ g (mod b)`.
fn ext_gcd(a: i128, b: i128) -> (i128, i128) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_x, mut x) = (1i128, 0i128);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_x, x) = (x, old_x - q * x);
    }
    (old_r, old_x)
}

/// Intersect `t ≡ a1 (mod m1)` with `t ≡ a2 (mod m2)`.
///
/// Returns the combined class `(a, lcm)` with `a < lcm`, or `Ok(None)` if
/// the classes are disjoint. A combined modulus that does not fit in
/// `u128` is [`PuzzleError::Overflow`].
fn merge_congruences(
    a1: u128,
    m1: u128,
    a2: u128,
    m2: u128,
) -> Result<Option<(u128, u128)>, PuzzleError> {
    let overflow = || PuzzleError::overflow("combined loop length exceeds u128");
    let signed = |v: u128| i128::try_from(v).map_err(|_| overflow());
    let (g, p) = ext_gcd(signed(m1)?, signed(m2)?);
    let diff = signed(a2)? - signed(a1)?;
    if diff % g != 0 {
        return Ok(None);
    }
    let step = signed(m2)? / g;
    let k = ((diff / g) % step)
        .checked_mul(p % step)
        .ok_or_else(overflow)?
        .rem_euclid(step);
    let lcm = (m1 / g as u128).checked_mul(m2).ok_or_else(overflow)?;
    let a = m1
        .checked_mul(k as u128)
        .and_then(|x| x.checked_add(a1))
        .ok_or_else(overflow)?
        % lcm;
    Ok(Some((a, lcm)))
}
