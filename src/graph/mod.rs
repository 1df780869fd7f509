//! The pyramid as a directed acyclic graph, and the algorithms run over it.
//!
//! Data flows strictly forward through the submodules:
//! - `builder`: integers → [`PyramidDag`]
//! - `topo`: [`PyramidDag`] → [`TopologicalOrder`]
//! - `resolve`: ([`PyramidDag`], [`TopologicalOrder`]) → optional [`MaximumSum`]
//!
//! `shape` centralizes the `(row, column) -> id` arithmetic all of them share.

pub mod builder;
pub mod dag;
pub mod resolve;
pub mod shape;
pub mod topo;

pub use builder::PyramidBuilder;
pub use dag::{Edge, PyramidDag};
pub use resolve::{MaximumSum, PathCell, Resolver};
pub use shape::{triangular, Location, PyramidShape, VertexId};
pub use topo::{topological_order, TopologicalOrder};
