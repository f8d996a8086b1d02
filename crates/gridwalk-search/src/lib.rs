//! Constrained shortest-path search over grid cost tables.
//!
//! The search runs uniform-cost (Dijkstra) over an implicit graph whose
//! nodes are [`SearchState`]s: a grid position plus a caller-chosen run
//! descriptor. Edges are discovered lazily by a [`NeighbourRule`], which is
//! where directional constraints live (no U-turns, maximum straight runs,
//! minimum runs before turning). The search itself never inspects the run
//! descriptor.
//!
//! # Key types
//!
//! - [`SearchState`] / [`Run`]: value-typed states, hashed structurally
//! - [`NeighbourRule`]: the customization point, implemented for closures
//! - [`Unconstrained`] and [`RunLimited`]: the two stock rules
//! - [`SearchPolicy`] / [`RunLimits`]: configuration with validation
//! - [`search()`]: entry point returning a [`SearchReport`]
//!
//! # Example
//!
//! ```
//! use gridwalk_core::Pos;
//! use gridwalk_grid::parse_digits;
//! use gridwalk_search::{shortest_path_cost, SearchState, Unconstrained};
//!
//! let grid = parse_digits("111\n111\n111").unwrap();
//! let goal = grid.last_pos();
//! let cost = shortest_path_cost(
//!     &grid,
//!     SearchState::start(Pos::ORIGIN),
//!     &Unconstrained,
//!     |s: &SearchState<_>| s.pos == goal,
//! )
//! .unwrap();
//! assert_eq!(cost, Some(4));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod frontier;
pub mod policy;
pub mod rule;
pub mod search;
pub mod state;

pub use gridwalk_core::SearchError;
pub use policy::{RunLimits, SearchPolicy};
pub use rule::{NeighbourRule, Neighbours, RunLimited, Unconstrained};
pub use search::{search, shortest_path_cost, SearchOutcome, SearchReport, SearchStats};
pub use state::{Run, SearchState};
