//! Seeded random catalogs for benchmarks and stress scenarios.

use super::item::{Catalog, Item};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shape of a randomly generated catalog.
///
/// # Examples
///
/// ```
/// use u_knapsack::catalog::{random_catalog, CatalogSpec};
///
/// let spec = CatalogSpec::default().with_items(12).with_cost_range(1, 9);
/// let catalog = random_catalog(&spec, 7);
/// assert_eq!(catalog.len(), 12);
/// assert!(catalog.iter().all(|item| (1..=9).contains(&item.cost())));
/// ```
#[derive(Debug, Clone)]
pub struct CatalogSpec {
    /// Number of items to generate.
    pub items: usize,
    /// Inclusive value range.
    pub min_value: i64,
    pub max_value: i64,
    /// Inclusive cost range. `min_cost` must be non-negative.
    pub min_cost: i64,
    pub max_cost: i64,
}

impl Default for CatalogSpec {
    fn default() -> Self {
        Self {
            items: 10,
            min_value: 1,
            max_value: 50,
            min_cost: 1,
            max_cost: 10,
        }
    }
}

impl CatalogSpec {
    pub fn with_items(mut self, n: usize) -> Self {
        self.items = n;
        self
    }

    pub fn with_value_range(mut self, min: i64, max: i64) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    pub fn with_cost_range(mut self, min: i64, max: i64) -> Self {
        self.min_cost = min;
        self.max_cost = max;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_value > self.max_value {
            return Err(format!(
                "min_value {} exceeds max_value {}",
                self.min_value, self.max_value
            ));
        }
        if self.min_cost < 0 {
            return Err(format!("min_cost must be non-negative, got {}", self.min_cost));
        }
        if self.min_cost > self.max_cost {
            return Err(format!(
                "min_cost {} exceeds max_cost {}",
                self.min_cost, self.max_cost
            ));
        }
        Ok(())
    }
}

/// Generates a catalog of `spec.items` items named `P01`, `P02`, ...
///
/// The same `(spec, seed)` pair always produces the same catalog.
///
/// # Panics
///
/// Panics if the spec is invalid (call [`CatalogSpec::validate`] first
/// to get a descriptive error).
pub fn random_catalog(spec: &CatalogSpec, seed: u64) -> Catalog<i64> {
    spec.validate().expect("invalid CatalogSpec");

    let mut rng = StdRng::seed_from_u64(seed);
    (0..spec.items)
        .map(|i| {
            let value = rng.random_range(spec.min_value..=spec.max_value);
            let cost = rng.random_range(spec.min_cost..=spec.max_cost);
            Item::new(format!("P{:02}", i + 1), value, cost)
                .expect("validated spec yields non-negative costs")
        })
        .collect()
}
