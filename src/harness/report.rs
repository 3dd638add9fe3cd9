//! Scenario results and their rendering.

use super::scenario::Scenario;
use crate::catalog::{Catalog, Value};
use crate::config::DpConfig;
use crate::error::Result;
use crate::strategy::{Outcome, Strategy};
use std::io::{self, Write};

/// Everything a reporter needs to render one scenario.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(deserialize = "V: Value + serde::Deserialize<'de>"))
)]
pub struct Report<V = i64> {
    pub key: String,
    pub title: String,
    pub capacity: i64,
    pub catalog: Catalog<V>,
    /// One outcome per strategy, in the scenario's order.
    pub outcomes: Vec<Outcome<V>>,
}

impl<V: Value> Report<V> {
    /// Value found by the first exact strategy, if any ran.
    pub fn optimal_value(&self) -> Option<V> {
        self.outcomes
            .iter()
            .find(|o| o.strategy.is_exact())
            .map(|o| o.total_value)
    }

    /// How far greedy fell below the optimum, when both ran.
    pub fn greedy_gap(&self) -> Option<f64> {
        let greedy = self
            .outcomes
            .iter()
            .find(|o| o.strategy == Strategy::Greedy)?;
        Some(self.optimal_value()?.to_f64() - greedy.total_value.to_f64())
    }

    /// Whether every exact strategy found the same value.
    pub fn exact_strategies_agree(&self) -> bool {
        let mut exact = self.outcomes.iter().filter(|o| o.strategy.is_exact());
        match exact.next() {
            Some(first) => exact.all(|o| o.total_value == first.total_value),
            None => true,
        }
    }
}

/// Runs each of the scenario's strategies on its catalog.
pub fn run_scenario<V: Value>(scenario: &Scenario<V>, config: &DpConfig) -> Result<Report<V>> {
    let outcomes = scenario
        .strategies
        .iter()
        .map(|strategy| strategy.solve(&scenario.catalog, scenario.capacity, config))
        .collect::<Result<Vec<_>>>()?;

    let report = Report {
        key: scenario.key.clone(),
        title: scenario.title.clone(),
        capacity: scenario.capacity,
        catalog: scenario.catalog.clone(),
        outcomes,
    };
    if !report.exact_strategies_agree() {
        log::error!("scenario {:?}: exact strategies disagree", report.key);
    }
    Ok(report)
}

/// Renders reports somewhere.
///
/// The solvers never print; the harness hands finished [`Report`]s to a
/// reporter, which keeps the core free of output side effects.
pub trait Reporter<V: Value> {
    /// Renders one scenario.
    fn report(&mut self, report: &Report<V>) -> io::Result<()>;

    /// Called once after the last scenario.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

const RULE_WIDTH: usize = 80;

/// Plain-text tables for a terminal.
pub struct TextReporter<W: Write> {
    out: W,
    complexity_footer: bool,
    count: usize,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            complexity_footer: false,
            count: 0,
        }
    }

    /// Appends the complexity summary of every strategy on `finish`.
    pub fn with_complexity_footer(mut self, enabled: bool) -> Self {
        self.complexity_footer = enabled;
        self
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<V: Value, W: Write> Reporter<V> for TextReporter<W> {
    fn report(&mut self, report: &Report<V>) -> io::Result<()> {
        self.count += 1;
        let out = &mut self.out;

        writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(out, "[{}] {} ({})", self.count, report.title, report.key)?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(out, "Capacity: {} hours", report.capacity)?;
        writeln!(out, "Projects:")?;
        for item in &report.catalog {
            match item.ratio() {
                Some(ratio) => writeln!(
                    out,
                    "  {:<20} value={:<8} hours={:<6} ratio={ratio:.2}",
                    item.name(),
                    item.value().to_string(),
                    item.cost()
                )?,
                None => writeln!(
                    out,
                    "  {:<20} value={:<8} hours={:<6} ratio=-",
                    item.name(),
                    item.value().to_string(),
                    item.cost()
                )?,
            }
        }
        writeln!(out)?;

        for outcome in &report.outcomes {
            write!(
                out,
                "  {:<12} value={}",
                outcome.strategy.name(),
                outcome.total_value
            )?;
            if let Some(selection) = &outcome.selection {
                write!(
                    out,
                    "  hours={}  projects=[{}]",
                    selection.total_cost,
                    selection.selected.join(", ")
                )?;
            }
            writeln!(out)?;
        }

        if let Some(gap) = report.greedy_gap() {
            if gap > 0.0 {
                writeln!(out, "  greedy is {gap} below the optimum")?;
            } else {
                writeln!(out, "  greedy matches the optimum")?;
            }
        }
        if !report.exact_strategies_agree() {
            writeln!(out, "  WARNING: exact strategies disagree")?;
        }
        writeln!(out)
    }

    fn finish(&mut self) -> io::Result<()> {
        if self.complexity_footer {
            let out = &mut self.out;
            writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
            writeln!(out, "Complexity")?;
            writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
            for strategy in Strategy::ALL {
                let (time, space) = strategy.complexity();
                let note = if strategy.is_exact() {
                    "optimal"
                } else {
                    "not guaranteed optimal"
                };
                writeln!(
                    out,
                    "  {:<12} time {:<11} space {:<9} {note}",
                    strategy.name(),
                    time,
                    space
                )?;
            }
        }
        self.out.flush()
    }
}
