//! Rectangular grids for Gridwalk.
//!
//! [`Grid<T>`] is an immutable, row-major table indexed by [`Pos`]. It is
//! the spatial input to every other crate: the path search reads a
//! [`CostGrid`], and the puzzle simulations snapshot their worlds as grids
//! of tiles.
//!
//! # Boundaries
//!
//! Grids never wrap. [`Grid::step`] returns `None` when a move would leave
//! the table, so edge cells simply have fewer neighbours.
//!
//! [`Pos`]: gridwalk_core::Pos

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cost;
pub mod grid;

pub use cost::{parse_digits, CostGrid};
pub use grid::Grid;
