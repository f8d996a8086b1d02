//! Core types for the Gridwalk workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate: cardinal [`Direction`]s,
//! grid positions ([`Pos`]), and the error enums for grid construction
//! and path search.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod pos;

pub use direction::Direction;
pub use error::{GridError, SearchError};
pub use pos::Pos;
