//! Top-down memoized search.

use super::cache::MemoCache;
use crate::catalog::{Catalog, Value};
use crate::config::DpConfig;
use crate::error::Result;
use crate::recurrence::evaluate;

/// Result of a memoized solve.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoResult<V> {
    /// Best achievable value.
    pub value: V,
    /// Distinct `(index, capacity)` subproblems computed.
    pub subproblems: usize,
    /// Subproblem requests served from the cache.
    pub cache_hits: u64,
}

/// Memoized evaluator of the knapsack recurrence.
///
/// Same recurrence as [`BruteForce`](crate::brute_force::BruteForce), but
/// each `(index, capacity)` pair is computed at most once per call. A
/// fresh [`MemoCache`] is created for every top-level call and passed
/// down explicitly, so nothing carries over between calls.
///
/// `O(n x capacity)` time and space.
///
/// # Examples
///
/// ```
/// use u_knapsack::{Catalog, MemoSolver};
///
/// let catalog = Catalog::from_triples([
///     ("Projeto X", 60, 10),
///     ("Projeto Y", 50, 8),
///     ("Projeto Z", 50, 8),
/// ]).unwrap();
/// assert_eq!(MemoSolver::solve(&catalog, 16).unwrap(), 100);
/// ```
pub struct MemoSolver;

impl MemoSolver {
    /// Best value with the default [`DpConfig`].
    pub fn solve<V: Value>(catalog: &Catalog<V>, capacity: i64) -> Result<V> {
        Self::solve_with(catalog, capacity, &DpConfig::default())
    }

    /// Best value under the given limits.
    pub fn solve_with<V: Value>(
        catalog: &Catalog<V>,
        capacity: i64,
        config: &DpConfig,
    ) -> Result<V> {
        Self::run(catalog, capacity, config).map(|result| result.value)
    }

    /// Solves and reports cache statistics.
    ///
    /// Fails with [`CapacityOverflow`](crate::KnapsackError::CapacityOverflow)
    /// when the `n x capacity` state space exceeds the configured limit.
    pub fn run<V: Value>(
        catalog: &Catalog<V>,
        capacity: i64,
        config: &DpConfig,
    ) -> Result<MemoResult<V>> {
        let (rows, columns) = config.check_table(catalog.len(), capacity)?;
        log::debug!("memo: state space bounded by {rows} x {columns}");

        let mut cache = MemoCache::new();
        let (value, _) = evaluate(catalog, 0, capacity, &mut cache);

        log::debug!(
            "memo: value {value}, {} subproblems, {} cache hits",
            cache.len(),
            cache.hits()
        );
        Ok(MemoResult {
            value,
            subproblems: cache.len(),
            cache_hits: cache.hits(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brute_force::BruteForce;
    use crate::catalog::{random_catalog, CatalogSpec};
    use crate::error::KnapsackError;
    use crate::tabulation::TableSolver;

    fn catalog(triples: &[(&str, i64, i64)]) -> Catalog {
        Catalog::from_triples(triples.iter().copied()).unwrap()
    }

    #[test]
    fn test_memo_enunciado() {
        let c = catalog(&[
            ("Projeto A", 12, 4),
            ("Projeto B", 10, 3),
            ("Projeto C", 7, 2),
            ("Projeto D", 4, 3),
        ]);
        assert_eq!(MemoSolver::solve(&c, 10).unwrap(), 29);
    }

    #[test]
    fn test_memo_matches_brute_force_on_random_catalogs() {
        let spec = CatalogSpec::default().with_items(12).with_cost_range(0, 8);
        for seed in 0..25 {
            let c = random_catalog(&spec, seed);
            for capacity in [0, 1, 7, 20, 45] {
                assert_eq!(
                    MemoSolver::solve(&c, capacity).unwrap(),
                    BruteForce::solve(&c, capacity),
                    "seed {seed}, capacity {capacity}"
                );
            }
        }
    }

    #[test]
    fn test_memo_reuses_subproblems() {
        // Identical items: many paths reach the same (index, capacity).
        let triples: Vec<(String, i64, i64)> =
            (0..10).map(|i| (format!("P{i}"), 3, 1)).collect();
        let c = Catalog::from_triples(triples).unwrap();
        let result = MemoSolver::run(&c, 5, &DpConfig::default()).unwrap();
        assert_eq!(result.value, 15);
        assert!(result.cache_hits > 0);
        assert!(result.subproblems <= 10 * 5);
    }

    #[test]
    fn test_memo_zero_capacity_and_empty() {
        let c = catalog(&[("A", 5, 1)]);
        assert_eq!(MemoSolver::solve(&c, 0).unwrap(), 0);
        assert_eq!(MemoSolver::solve(&c, -1).unwrap(), 0);
        assert_eq!(MemoSolver::solve(&Catalog::<i64>::empty(), 9).unwrap(), 0);
    }

    #[test]
    fn test_memo_fresh_cache_per_call() {
        let c = catalog(&[("A", 12, 4), ("B", 10, 3), ("C", 7, 2)]);
        let config = DpConfig::default();
        let small = MemoSolver::run(&c, 3, &config).unwrap();
        let large = MemoSolver::run(&c, 9, &config).unwrap();
        let small_again = MemoSolver::run(&c, 3, &config).unwrap();
        assert_eq!(small.value, 10);
        assert_eq!(large.value, 29);
        assert_eq!(small, small_again);
    }

    #[test]
    fn test_memo_long_catalog_small_capacity() {
        let triples: Vec<(String, i64, i64)> =
            (0..300_000).map(|i| (format!("P{i}"), 1, 2)).collect();
        let c = Catalog::from_triples(triples).unwrap();
        assert_eq!(MemoSolver::solve(&c, 1).unwrap(), 0);
        assert_eq!(TableSolver::solve(&c, 1).unwrap().total_value, 0);

        let triples: Vec<(String, i64, i64)> =
            (0..100_000).map(|i| (format!("Q{i}"), 1, 1)).collect();
        let c = Catalog::from_triples(triples).unwrap();
        assert_eq!(MemoSolver::solve(&c, 3).unwrap(), 3);
    }

    #[test]
    fn test_memo_capacity_overflow() {
        let c = catalog(&[("A", 5, 1), ("B", 6, 2)]);
        let config = DpConfig::default().with_max_table_cells(10);
        let err = MemoSolver::solve_with(&c, 100, &config).unwrap_err();
        assert!(matches!(err, KnapsackError::CapacityOverflow { rows: 3, columns: 101, .. }));
    }
}
