//! 0/1 knapsack solvers for project portfolio selection.
//!
//! Selects a subset of projects, each with a value and an hours cost, to
//! maximize total value under a fixed hours budget. Four strategies are
//! provided:
//!
//! - **Greedy**: ranks projects by value/hours and fills the budget in
//!   that order. Fast, feasible, not optimal.
//! - **Brute force**: explores every include/exclude decision. Optimal
//!   value only, exponential time.
//! - **Memoized**: the brute-force recurrence with a per-call cache of
//!   `(index, capacity)` subproblems. Optimal value only, `O(n x C)`.
//! - **Tabulating**: fills a `(n + 1) x (C + 1)` table bottom-up and walks
//!   it backward to recover the chosen projects. Optimal value and items.
//!
//! Every solver is a pure function of `(catalog, capacity)`: no shared
//! state, no I/O, no output. The [`harness`] module renders comparisons
//! through an injected [`harness::Reporter`].
//!
//! # Example
//!
//! ```
//! use u_knapsack::{BruteForce, Catalog, GreedySelector, MemoSolver, TableSolver};
//!
//! let catalog = Catalog::from_triples([
//!     ("Projeto A", 12, 4),
//!     ("Projeto B", 10, 3),
//!     ("Projeto C", 7, 2),
//!     ("Projeto D", 4, 3),
//! ])?;
//!
//! let greedy = GreedySelector::select(&catalog, 10);
//! let optimal = TableSolver::solve(&catalog, 10)?;
//!
//! assert_eq!(BruteForce::solve(&catalog, 10), optimal.total_value);
//! assert_eq!(MemoSolver::solve(&catalog, 10)?, optimal.total_value);
//! assert!(greedy.total_value <= optimal.total_value);
//! assert_eq!(optimal.selected, vec!["Projeto A", "Projeto B", "Projeto C"]);
//! # Ok::<(), u_knapsack::KnapsackError>(())
//! ```
//!
//! # Zero-cost items
//!
//! Items with zero cost are accepted in a catalog but never selected by
//! any solver. This keeps every exact strategy in agreement and keeps
//! zero capacity meaning "nothing fits". The reported optimum therefore
//! ignores free items, even when taking them would add value:
//!
//! ```
//! use u_knapsack::{BruteForce, Catalog, TableSolver};
//!
//! let catalog = Catalog::from_triples([("free", 50, 0), ("paid", 10, 2)])?;
//! assert_eq!(BruteForce::solve(&catalog, 5), 10);
//! assert_eq!(TableSolver::solve(&catalog, 5)?.selected, vec!["paid"]);
//! # Ok::<(), u_knapsack::KnapsackError>(())
//! ```

pub mod batch;
pub mod brute_force;
pub mod catalog;
mod config;
mod error;
pub mod greedy;
pub mod harness;
pub mod memo;
mod recurrence;
mod strategy;
pub mod tabulation;

pub use brute_force::BruteForce;
pub use catalog::{Catalog, Item, Selection, Value};
pub use config::{DpConfig, DEFAULT_MAX_TABLE_CELLS};
pub use error::{KnapsackError, Result};
pub use greedy::GreedySelector;
pub use memo::MemoSolver;
pub use strategy::{Outcome, Strategy};
pub use tabulation::TableSolver;
