//! Evaluation of many independent instances.
//!
//! Every instance gets its own table or cache; nothing is pooled or
//! shared. With the `parallel` feature instances are solved on the rayon
//! thread pool; results always come back in input order.

use crate::catalog::{Catalog, Value};
use crate::config::DpConfig;
use crate::error::Result;
use crate::strategy::{Outcome, Strategy};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One knapsack instance: a catalog and its capacity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(deserialize = "V: Value + serde::Deserialize<'de>"))
)]
pub struct Instance<V = i64> {
    pub catalog: Catalog<V>,
    pub capacity: i64,
}

impl<V: Value> Instance<V> {
    pub fn new(catalog: Catalog<V>, capacity: i64) -> Self {
        Self { catalog, capacity }
    }
}

/// Solves every instance with `strategy`.
///
/// A failing instance does not stop the others.
///
/// ```
/// use u_knapsack::batch::{solve_all, Instance};
/// use u_knapsack::{Catalog, DpConfig, Strategy};
///
/// let catalog = Catalog::from_triples([("A", 12, 4), ("B", 10, 3)]).unwrap();
/// let instances = vec![
///     Instance::new(catalog.clone(), 3),
///     Instance::new(catalog, 7),
/// ];
/// let outcomes = solve_all(&instances, Strategy::Tabulating, &DpConfig::default());
/// assert_eq!(outcomes[0].as_ref().unwrap().total_value, 10);
/// assert_eq!(outcomes[1].as_ref().unwrap().total_value, 22);
/// ```
pub fn solve_all<V: Value>(
    instances: &[Instance<V>],
    strategy: Strategy,
    config: &DpConfig,
) -> Vec<Result<Outcome<V>>> {
    log::debug!("batch: {} instance(s) with {strategy}", instances.len());
    let solve_one =
        |instance: &Instance<V>| strategy.solve(&instance.catalog, instance.capacity, config);

    #[cfg(feature = "parallel")]
    let outcomes: Vec<Result<Outcome<V>>> = instances.par_iter().map(solve_one).collect();
    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<Result<Outcome<V>>> = instances.iter().map(solve_one).collect();

    outcomes
}

/// Runs every exact strategy on every instance and returns the indices
/// of instances where they disagree on the optimal value.
///
/// Instances on which a strategy fails are reported as disagreeing.
pub fn cross_check<V: Value>(instances: &[Instance<V>], config: &DpConfig) -> Vec<usize> {
    let per_strategy: Vec<Vec<Result<Outcome<V>>>> = Strategy::ALL
        .into_iter()
        .filter(|s| s.is_exact())
        .map(|s| solve_all(instances, s, config))
        .collect();

    (0..instances.len())
        .filter(|&i| {
            let mut values = per_strategy.iter().map(|outcomes| match &outcomes[i] {
                Ok(outcome) => Some(outcome.total_value),
                Err(_) => None,
            });
            let first = values.next().flatten();
            first.is_none() || values.any(|v| v != first)
        })
        .collect()
}
