//! Fixed demonstration scenarios.

use crate::catalog::{random_catalog, Catalog, CatalogSpec, Value};
use crate::error::Result;
use crate::strategy::Strategy;

/// A catalog, a capacity and the strategies to compare on them.
#[derive(Debug, Clone)]
pub struct Scenario<V = i64> {
    /// Short identifier used for selection on the command line.
    pub key: String,
    /// Human-readable title.
    pub title: String,
    pub catalog: Catalog<V>,
    pub capacity: i64,
    pub strategies: Vec<Strategy>,
}

impl<V: Value> Scenario<V> {
    /// A scenario comparing all four strategies.
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        catalog: Catalog<V>,
        capacity: i64,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            catalog,
            capacity,
            strategies: Strategy::ALL.to_vec(),
        }
    }

    pub fn with_strategies(mut self, strategies: &[Strategy]) -> Self {
        self.strategies = strategies.to_vec();
        self
    }
}

impl Scenario<i64> {
    /// A seeded random scenario. Brute force is left out above 20 items.
    pub fn random(spec: &CatalogSpec, seed: u64, capacity: i64) -> Self {
        let catalog = random_catalog(spec, seed);
        let strategies: Vec<Strategy> = Strategy::ALL
            .into_iter()
            .filter(|&s| {
                s != Strategy::BruteForce
                    || catalog.len() <= crate::brute_force::BRUTE_FORCE_ITEM_WARNING
            })
            .collect();

        Self {
            key: format!("random-{seed}"),
            title: format!("Random portfolio ({} projects, seed {seed})", catalog.len()),
            catalog,
            capacity,
            strategies,
        }
    }
}

/// The built-in scenarios, in presentation order.
pub fn builtin_scenarios() -> Result<Vec<Scenario>> {
    use Strategy::{Greedy, Tabulating};

    Ok(vec![
        Scenario::new(
            "enunciado",
            "Reference portfolio",
            Catalog::from_triples([
                ("Projeto A", 12, 4),
                ("Projeto B", 10, 3),
                ("Projeto C", 7, 2),
                ("Projeto D", 4, 3),
            ])?,
            10,
        ),
        Scenario::new(
            "greedy-tie",
            "Greedy ranking by value/hours",
            Catalog::from_triples([
                ("Projeto X", 60, 10),
                ("Projeto Y", 50, 8),
                ("Projeto Z", 50, 8),
            ])?,
            16,
        )
        .with_strategies(&[Greedy, Tabulating]),
        Scenario::new(
            "greedy-gap",
            "Greedy falls short of the optimum",
            Catalog::from_triples([("A", 60, 10), ("B", 100, 20), ("C", 120, 30)])?,
            50,
        )
        .with_strategies(&[Greedy, Tabulating]),
        Scenario::new(
            "complex",
            "Complex portfolio",
            Catalog::from_triples([
                ("AI Platform", 25, 5),
                ("Mobile App", 15, 3),
                ("Web Dashboard", 20, 4),
                ("API Integration", 10, 2),
                ("Data Analytics", 18, 4),
            ])?,
            12,
        )
        .with_strategies(&[Tabulating]),
        Scenario::new(
            "high-capacity",
            "High capacity",
            Catalog::from_triples([
                ("Blockchain", 40, 8),
                ("IoT System", 35, 7),
                ("Cloud Migration", 30, 6),
                ("Security Audit", 25, 5),
            ])?,
            20,
        )
        .with_strategies(&[Tabulating]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_keys_unique() {
        let scenarios = builtin_scenarios().unwrap();
        let mut keys: Vec<&str> = scenarios.iter().map(|s| s.key.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), scenarios.len());
    }

    #[test]
    fn test_reference_scenario_runs_everything() {
        let scenarios = builtin_scenarios().unwrap();
        assert_eq!(scenarios[0].key, "enunciado");
        assert_eq!(scenarios[0].strategies, Strategy::ALL.to_vec());
        assert_eq!(scenarios[0].capacity, 10);
    }

    #[test]
    fn test_random_scenario_drops_brute_force_when_large() {
        let small = Scenario::random(&CatalogSpec::default().with_items(5), 1, 20);
        assert!(small.strategies.contains(&Strategy::BruteForce));

        let large = Scenario::random(&CatalogSpec::default().with_items(40), 1, 20);
        assert!(!large.strategies.contains(&Strategy::BruteForce));
        assert_eq!(large.catalog.len(), 40);
        assert_eq!(large.key, "random-1");
    }
}
