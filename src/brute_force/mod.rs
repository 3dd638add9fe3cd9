//! Brute-force evaluator.
//!
//! Explores the full inclusion/exclusion decision tree. Exponential in
//! the number of items (branching factor 2, depth `n`); impractical
//! beyond roughly 20 items. Returns the optimal value only.

mod runner;

pub use runner::{BruteForce, BruteForceResult, BRUTE_FORCE_ITEM_WARNING};
