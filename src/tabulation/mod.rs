//! Tabulating (bottom-up) solver with solution reconstruction.
//!
//! # Algorithm
//!
//! 1. Allocate `T` of size `(n + 1) x (capacity + 1)`, all zero.
//! 2. For `i = 1..=n` and `c = 0..=capacity`:
//!    `T[i][c] = T[i-1][c]`, then if `0 < cost[i-1] <= c`,
//!    `T[i][c] = max(T[i][c], value[i-1] + T[i-1][c - cost[i-1]])`.
//! 3. The optimal value is `T[n][capacity]`.
//! 4. From `(n, capacity)`, while `i > 0 && c > 0`: when
//!    `T[i][c] != T[i-1][c]` item `i-1` was taken, so record it and
//!    subtract its cost; always step `i` down. Reverse the recorded items.
//!
//! `O(n x capacity)` time and space; no recursion.

mod runner;
mod table;

pub use runner::TableSolver;
pub use table::DpTable;
