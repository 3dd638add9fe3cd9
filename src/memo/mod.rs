//! Memoized (top-down) solver.
//!
//! Follows the brute-force recurrence but caches each
//! `(index, remaining capacity)` subproblem, collapsing the exponential
//! search into `O(n x capacity)` work.
//!
//! The cache is an explicit argument created at the top-level call
//! boundary. It is never a shared default, never pooled and never
//! reused across calls.

mod cache;
mod runner;

pub use cache::MemoCache;
pub use runner::{MemoResult, MemoSolver};
