//! Property-based tests across the four solvers.
//!
//! # Invariants tested
//!
//! - **Agreement:** brute force, memoized and tabulating find the same value.
//! - **Greedy bound:** greedy never beats the optimum.
//! - **Reconstruction:** selected items fit and sum to the reported value.
//! - **Degenerate inputs:** zero capacity and empty catalogs give nothing.
//! - **Idempotence:** repeated calls return identical results.

use proptest::prelude::*;
use u_knapsack::batch::{cross_check, Instance};
use u_knapsack::{
    BruteForce, Catalog, DpConfig, GreedySelector, Item, MemoSolver, Selection, TableSolver,
};

fn catalog_strategy(max_items: usize) -> impl Strategy<Value = Catalog> {
    prop::collection::vec((0i64..60, 0i64..12), 0..=max_items).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (value, cost))| Item::new(format!("P{i}"), value, cost).unwrap())
            .collect::<Catalog>()
    })
}

fn selection_value(catalog: &Catalog, selection: &Selection) -> i64 {
    selection
        .indices
        .iter()
        .map(|&i| catalog.get(i).unwrap().value())
        .sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The three exact solvers agree on every input.
    #[test]
    fn exact_solvers_agree(catalog in catalog_strategy(10), capacity in -5i64..50) {
        let brute = BruteForce::solve(&catalog, capacity);
        let memo = MemoSolver::solve(&catalog, capacity).unwrap();
        let table = TableSolver::solve(&catalog, capacity).unwrap();
        prop_assert_eq!(brute, memo);
        prop_assert_eq!(brute, table.total_value);
    }

    /// Greedy is feasible and never exceeds the optimum.
    #[test]
    fn greedy_bounded_by_optimum(catalog in catalog_strategy(12), capacity in 0i64..60) {
        let greedy = GreedySelector::select(&catalog, capacity);
        let optimal = TableSolver::solve(&catalog, capacity).unwrap();
        prop_assert!(greedy.total_cost <= capacity);
        prop_assert_eq!(selection_value(&catalog, &greedy), greedy.total_value);
        prop_assert!(greedy.total_value <= optimal.total_value);
    }

    /// Reconstructed items fit the capacity and account for the whole value.
    #[test]
    fn reconstruction_is_consistent(catalog in catalog_strategy(15), capacity in 0i64..80) {
        let selection = TableSolver::solve(&catalog, capacity).unwrap();
        let cost: i64 = selection.indices.iter().map(|&i| catalog.get(i).unwrap().cost()).sum();
        prop_assert!(cost <= capacity);
        prop_assert_eq!(cost, selection.total_cost);
        prop_assert_eq!(selection_value(&catalog, &selection), selection.total_value);
        prop_assert!(selection.indices.windows(2).all(|w| w[0] < w[1]));
        for (index, name) in selection.indices.iter().zip(&selection.selected) {
            prop_assert_eq!(catalog.get(*index).unwrap().name(), name.as_str());
        }
    }

    /// Zero or negative capacity selects nothing.
    #[test]
    fn no_capacity_no_selection(catalog in catalog_strategy(10), capacity in -10i64..=0) {
        prop_assert_eq!(GreedySelector::select(&catalog, capacity), Selection::empty());
        prop_assert_eq!(BruteForce::solve(&catalog, capacity), 0);
        prop_assert_eq!(MemoSolver::solve(&catalog, capacity).unwrap(), 0);
        prop_assert_eq!(TableSolver::solve(&catalog, capacity).unwrap(), Selection::empty());
    }

    /// An empty catalog selects nothing at any capacity.
    #[test]
    fn empty_catalog_no_selection(capacity in -10i64..200) {
        let catalog = Catalog::<i64>::empty();
        prop_assert_eq!(GreedySelector::select(&catalog, capacity), Selection::empty());
        prop_assert_eq!(BruteForce::solve(&catalog, capacity), 0);
        prop_assert_eq!(MemoSolver::solve(&catalog, capacity).unwrap(), 0);
        prop_assert_eq!(TableSolver::solve(&catalog, capacity).unwrap(), Selection::empty());
    }

    /// Repeated calls return identical results.
    #[test]
    fn solvers_are_idempotent(catalog in catalog_strategy(10), capacity in 0i64..40) {
        prop_assert_eq!(
            GreedySelector::select(&catalog, capacity),
            GreedySelector::select(&catalog, capacity)
        );
        prop_assert_eq!(BruteForce::run(&catalog, capacity), BruteForce::run(&catalog, capacity));
        let config = DpConfig::default();
        prop_assert_eq!(
            MemoSolver::run(&catalog, capacity, &config).unwrap(),
            MemoSolver::run(&catalog, capacity, &config).unwrap()
        );
        prop_assert_eq!(
            TableSolver::solve(&catalog, capacity).unwrap(),
            TableSolver::solve(&catalog, capacity).unwrap()
        );
    }

    /// Batch cross-checking finds no disagreement.
    #[test]
    fn batch_cross_check_clean(
        catalogs in prop::collection::vec(catalog_strategy(8), 1..6),
        capacity in 0i64..30,
    ) {
        let instances: Vec<Instance> = catalogs
            .into_iter()
            .map(|catalog| Instance::new(catalog, capacity))
            .collect();
        prop_assert!(cross_check(&instances, &DpConfig::default()).is_empty());
    }
}

#[test]
fn greedy_strictly_suboptimal_example() {
    let catalog = Catalog::from_triples([("A", 60, 10), ("B", 100, 20), ("C", 120, 30)]).unwrap();
    let greedy = GreedySelector::select(&catalog, 50);
    let optimal = TableSolver::solve(&catalog, 50).unwrap();
    assert!(greedy.total_value < optimal.total_value);
    assert_eq!(optimal.selected, vec!["B", "C"]);
}

#[test]
fn reference_scenario_matches_exhaustive_search() {
    let catalog = Catalog::from_triples([
        ("Projeto A", 12, 4),
        ("Projeto B", 10, 3),
        ("Projeto C", 7, 2),
        ("Projeto D", 4, 3),
    ])
    .unwrap();
    let optimal = TableSolver::solve(&catalog, 10).unwrap();
    assert_eq!(optimal.total_value, BruteForce::solve(&catalog, 10));
    assert_eq!(optimal.total_value, 29);
    assert_eq!(optimal.selected, vec!["Projeto A", "Projeto B", "Projeto C"]);
}

#[test]
fn negative_cost_rejected() {
    let err = Catalog::from_triples([("ok", 1i64, 1), ("bad", 5, -2)]).unwrap_err();
    assert!(matches!(err, u_knapsack::KnapsackError::InvalidInput { .. }));
}
