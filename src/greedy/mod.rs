//! Greedy selector.
//!
//! Ranks items by value/cost ratio and accepts them in ranked order
//! while the accumulated cost stays within capacity. `O(n log n)`.
//!
//! The greedy answer is feasible but not optimal in general: with
//! `A(60, 10)`, `B(100, 20)`, `C(120, 30)` and capacity 50 it takes
//! `A + B = 160` while `B + C = 220` fits.

mod runner;

pub use runner::{GreedySelector, RankedItem};
