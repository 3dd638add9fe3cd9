//! Uniform dispatch over the four solvers.

use crate::brute_force::BruteForce;
use crate::catalog::{Catalog, Selection, Value};
use crate::config::DpConfig;
use crate::error::Result;
use crate::greedy::GreedySelector;
use crate::memo::MemoSolver;
use crate::tabulation::TableSolver;
use std::fmt;
use std::str::FromStr;

/// A knapsack solving strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Strategy {
    /// Ratio-ranked heuristic. Feasible, not optimal.
    Greedy,
    /// Exhaustive recursion. Optimal value only.
    BruteForce,
    /// Top-down recursion with a subproblem cache. Optimal value only.
    Memoized,
    /// Bottom-up table with reconstruction. Optimal value and items.
    Tabulating,
}

impl Strategy {
    /// All strategies, in presentation order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Greedy,
        Strategy::BruteForce,
        Strategy::Memoized,
        Strategy::Tabulating,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Greedy => "greedy",
            Strategy::BruteForce => "brute-force",
            Strategy::Memoized => "memoized",
            Strategy::Tabulating => "tabulating",
        }
    }

    /// Whether the strategy always finds the optimal value.
    pub fn is_exact(self) -> bool {
        !matches!(self, Strategy::Greedy)
    }

    /// Whether the strategy reports which items were chosen.
    pub fn reports_selection(self) -> bool {
        matches!(self, Strategy::Greedy | Strategy::Tabulating)
    }

    /// Asymptotic `(time, space)` cost for `n` items and capacity `C`.
    pub fn complexity(self) -> (&'static str, &'static str) {
        match self {
            Strategy::Greedy => ("O(n log n)", "O(n)"),
            Strategy::BruteForce => ("O(2^n)", "O(n)"),
            Strategy::Memoized => ("O(n x C)", "O(n x C)"),
            Strategy::Tabulating => ("O(n x C)", "O(n x C)"),
        }
    }

    /// Runs this strategy on one instance.
    ///
    /// `config` only applies to the DP strategies.
    ///
    /// ```
    /// use u_knapsack::{Catalog, DpConfig, Strategy};
    ///
    /// let catalog =
    ///     Catalog::from_triples([("A", 60, 10), ("B", 100, 20), ("C", 120, 30)]).unwrap();
    /// let config = DpConfig::default();
    /// let greedy = Strategy::Greedy.solve(&catalog, 50, &config).unwrap();
    /// let exact = Strategy::Memoized.solve(&catalog, 50, &config).unwrap();
    /// assert_eq!(greedy.total_value, 160);
    /// assert_eq!(exact.total_value, 220);
    /// assert!(exact.selection.is_none());
    /// ```
    pub fn solve<V: Value>(
        self,
        catalog: &Catalog<V>,
        capacity: i64,
        config: &DpConfig,
    ) -> Result<Outcome<V>> {
        let (total_value, selection) = match self {
            Strategy::Greedy => {
                let selection = GreedySelector::select(catalog, capacity);
                (selection.total_value, Some(selection))
            }
            Strategy::BruteForce => (BruteForce::run(catalog, capacity).value, None),
            Strategy::Memoized => (MemoSolver::solve_with(catalog, capacity, config)?, None),
            Strategy::Tabulating => {
                let selection = TableSolver::solve_with(catalog, capacity, config)?;
                (selection.total_value, Some(selection))
            }
        };

        Ok(Outcome {
            strategy: self,
            total_value,
            selection,
        })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown strategy {s:?}"))
    }
}

/// What a strategy produced for one instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome<V = i64> {
    /// The strategy that ran.
    pub strategy: Strategy,
    /// Total value found.
    pub total_value: V,
    /// Chosen items, for strategies that report them.
    pub selection: Option<Selection<V>>,
}
