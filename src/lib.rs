//! # `prime_pyramid` - Maximum Non-Prime Pyramid Paths
//!
//! Computes the maximum root-to-leaf path sum through a number pyramid where
//! no visited cell, the final one included, may hold a prime.
//!
//! ## Architecture
//!
//! The pyramid is mapped onto a directed acyclic graph with a synthetic source
//! above the apex and a synthetic sink below the bottom row. Each cell becomes
//! one vertex; each non-prime cell receives edges from the one or two cells
//! above it, weighted with its **negated** value.
//!
//! Data flows strictly forward:
//!
//! ```text
//! integers ─▶ PyramidBuilder ─▶ PyramidDag ─▶ topological_order ─▶ Resolver ─▶ Outcome
//! ```
//!
//! ### Core Components
//!
//! 1. **Primality Oracle** ([`is_prime`]): `6k ± 1` trial division.
//! 2. **Pyramid Graph Builder** ([`PyramidBuilder`]): reads `T(N)` values and
//!    filters edges through the oracle.
//! 3. **Topological Orderer** ([`topological_order`]): iterative DFS, reverse
//!    finishing order.
//! 4. **Maximum-Sum Resolver** ([`Resolver`]): one relaxation pass in
//!    topological order over the negated weights.
//!
//! ### Correctness
//!
//! **Negation duality**: with all cell values non-negative, minimizing the sum
//! of negated weights along a DAG path is the same as maximizing the sum of the
//! values, so the standard shortest-path recurrence suffices.
//!
//! **Prime avoidance**: a prime cell never receives an incoming edge, so no
//! path from the source can enter it.
//!
//! ## Example
//!
//! ```rust
//! use prime_pyramid::{Solver, source::Values};
//!
//! // [2]
//! // [4, 6]      the apex is prime, so nothing is reachable
//! let outcome = Solver::default().solve(2, Values::new([2, 4, 6])).unwrap();
//! assert!(!outcome.exists());
//!
//! // [4]
//! // [6, 8]
//! let outcome = Solver::default().solve(2, Values::new([4, 6, 8])).unwrap();
//! assert_eq!(outcome.maximum_sum, Some(12));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod graph;
pub mod prime;
pub mod solver;
pub mod source;

pub use config::{ApexPolicy, ReportPolicy, SolverConfig};
pub use error::{PyramidError, Result};
pub use graph::{
    topological_order, MaximumSum, PyramidBuilder, PyramidDag, PyramidShape, Resolver,
    TopologicalOrder,
};
pub use prime::is_prime;
pub use solver::{Outcome, Solver};

// Compile-time checks of the vertex-id arithmetic.
const _: () = {
    use graph::shape::triangular;

    assert!(triangular(0) == 0);
    assert!(triangular(1) == 1);
    assert!(triangular(4) == 10);

    // Source, one cell, sink.
    assert!(PyramidShape::new(1).vertex_count() == 3);
    assert!(PyramidShape::new(1).sink() == 2);
    assert!(PyramidShape::new(0).sink() == 1);
};
