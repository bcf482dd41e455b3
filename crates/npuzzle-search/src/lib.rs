//! **npuzzle-search** — informed search engine for sliding tile puzzles.
//!
//! This crate finds blank-slide sequences transforming one
//! [`Board`](npuzzle_core::Board) into another:
//!
//! - **A\*** best-first search ([`solve`] with [`Algorithm::AStar`]) —
//!   optimal move count under the Manhattan heuristic
//! - **Greedy Best-First** ([`solve`] with [`Algorithm::GreedyBestFirst`]) —
//!   faster on average, no optimality guarantee
//! - **Breadth-first** reference search ([`solve_bfs`]) — optimal but
//!   uninformed, practical only on small boards
//!
//! Both informed drivers share a single loop parameterized by the
//! [`Algorithm`] priority formula, over an arena of search states indexed
//! by handle. A search either returns the move sequence or exhausts the
//! reachable space (`None`); exhaustion is an expected outcome, not an
//! error.

pub mod bfs;
pub mod heuristic;
mod node;
pub mod search;

pub use bfs::solve_bfs;
pub use heuristic::{manhattan, misplaced};
pub use search::{Algorithm, ParseAlgorithmError, SolveError, solve};
