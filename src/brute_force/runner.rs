//! Exhaustive include/exclude search.

use crate::catalog::{Catalog, Value};
use crate::recurrence::{evaluate, Exhaustive};

/// Above this many items the exhaustive search is impractical.
pub const BRUTE_FORCE_ITEM_WARNING: usize = 20;

/// Result of a brute-force evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct BruteForceResult<V> {
    /// Best achievable value.
    pub value: V,
    /// Number of subproblems entered, base cases included.
    pub calls: u64,
}

/// Exhaustive evaluator of the knapsack recurrence.
///
/// ```text
/// solve(i, c) = 0                                       if i >= n or c <= 0
/// solve(i, c) = max(solve(i+1, c),
///                   value[i] + solve(i+1, c - cost[i])) if 0 < cost[i] <= c
/// solve(i, c) = solve(i+1, c)                           otherwise
/// ```
///
/// Explores up to `2^n` branches and returns the optimal value only.
/// The caller is responsible for keeping catalogs small. The walk keeps
/// its frames on the heap, so catalog length never exhausts the stack.
///
/// # Examples
///
/// ```
/// use u_knapsack::{BruteForce, Catalog};
///
/// let catalog = Catalog::from_triples([
///     ("Projeto A", 12, 4),
///     ("Projeto B", 10, 3),
///     ("Projeto C", 7, 2),
///     ("Projeto D", 4, 3),
/// ]).unwrap();
/// assert_eq!(BruteForce::solve(&catalog, 10), 29);
/// ```
pub struct BruteForce;

impl BruteForce {
    /// Best value over the whole catalog.
    pub fn solve<V: Value>(catalog: &Catalog<V>, capacity: i64) -> V {
        Self::solve_from(catalog, capacity, 0)
    }

    /// Best value considering only items from `index` onward.
    pub fn solve_from<V: Value>(catalog: &Catalog<V>, capacity: i64, index: usize) -> V {
        evaluate(catalog, index, capacity, &mut Exhaustive).0
    }

    /// Evaluates the whole catalog and reports the call count.
    pub fn run<V: Value>(catalog: &Catalog<V>, capacity: i64) -> BruteForceResult<V> {
        if catalog.len() > BRUTE_FORCE_ITEM_WARNING {
            log::warn!(
                "brute force over {} items explores up to 2^{} branches",
                catalog.len(),
                catalog.len()
            );
        }

        let (value, calls) = evaluate(catalog, 0, capacity, &mut Exhaustive);
        log::debug!("brute force: value {value} after {calls} calls");
        BruteForceResult { value, calls }
    }
}
