//! CLI entrypoint for the portfolio demonstration harness.
#![forbid(unsafe_code)]

use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::{fs, process};
use thiserror::Error;
use u_knapsack::catalog::CatalogSpec;
use u_knapsack::harness::{
    builtin_scenarios, run_scenario, Report, Reporter, Scenario, TextReporter,
};
use u_knapsack::{Catalog, DpConfig, KnapsackError, Strategy, Value, DEFAULT_MAX_TABLE_CELLS};

fn main() {
    init_logging();
    let args = Arguments::parse();
    if let Err(error) = run(args) {
        eprintln!("portfolio: {error}");
        process::exit(1);
    }
}

fn init_logging() {
    let env = env_logger::Env::new()
        .filter("KNAPSACK_LOG")
        .write_style("KNAPSACK_LOG_STYLE");
    env_logger::Builder::from_env(env).format_timestamp(None).init();
}

fn run(arguments: Arguments) -> Result<(), CliError> {
    let config = DpConfig::default().with_max_table_cells(arguments.max_table_cells);
    config.validate().map_err(CliError::InvalidConfig)?;

    let scenarios = select_scenarios(&arguments)?;
    log::debug!("running {} scenario(s)", scenarios.len());

    let stdout = io::stdout().lock();
    match arguments.format {
        Format::Text => {
            let reporter = TextReporter::new(stdout).with_complexity_footer(arguments.complexity);
            render(&scenarios, &config, reporter)
        }
        Format::Json => render(&scenarios, &config, JsonReporter::new(stdout)),
    }
}

fn render<R: Reporter<i64>>(
    scenarios: &[Scenario],
    config: &DpConfig,
    mut reporter: R,
) -> Result<(), CliError> {
    for scenario in scenarios {
        let report = run_scenario(scenario, config)?;
        reporter.report(&report)?;
    }
    reporter.finish()?;
    Ok(())
}

fn select_scenarios(arguments: &Arguments) -> Result<Vec<Scenario>, CliError> {
    let mut scenarios = if let Some(path) = &arguments.catalog {
        let capacity = arguments.capacity.ok_or(CliError::MissingCapacity)?;
        vec![Scenario::new("file", path.display().to_string(), load_catalog(path)?, capacity)]
    } else if let Some(items) = arguments.random {
        let capacity = arguments.capacity.unwrap_or(items as i64 * 3);
        let spec = CatalogSpec::default().with_items(items);
        vec![Scenario::random(&spec, arguments.seed, capacity)]
    } else {
        let builtin = builtin_scenarios()?;
        if arguments.scenario.is_empty() {
            builtin
        } else {
            arguments
                .scenario
                .iter()
                .map(|key| {
                    builtin
                        .iter()
                        .find(|s| &s.key == key)
                        .cloned()
                        .ok_or_else(|| CliError::UnknownScenario(key.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    if !arguments.strategy.is_empty() {
        for scenario in &mut scenarios {
            scenario.strategies = arguments.strategy.clone();
        }
    }
    Ok(scenarios)
}

fn load_catalog(path: &Path) -> Result<Catalog, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::ReadCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::ParseCatalog {
        path: path.to_path_buf(),
        source,
    })
}

/// Collects reports and writes them as one pretty JSON array.
struct JsonReporter<W: Write> {
    out: W,
    reports: Vec<serde_json::Value>,
}

impl<W: Write> JsonReporter<W> {
    fn new(out: W) -> Self {
        Self {
            out,
            reports: Vec::new(),
        }
    }
}

impl<V: Value + Serialize, W: Write> Reporter<V> for JsonReporter<W> {
    fn report(&mut self, report: &Report<V>) -> io::Result<()> {
        self.reports.push(serde_json::to_value(report).map_err(io::Error::from)?);
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, &self.reports).map_err(io::Error::from)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "portfolio", about = "Compare knapsack strategies on project portfolios")]
struct Arguments {
    /// Built-in scenario to run (repeatable; defaults to all)
    #[arg(short, long, value_name = "key")]
    scenario: Vec<String>,
    /// Strategy to run (repeatable; defaults to the scenario's own list)
    #[arg(long, value_name = "name")]
    strategy: Vec<Strategy>,
    /// JSON file with an array of {"name", "value", "cost"} items
    #[arg(short, long, value_name = "path", conflicts_with_all = ["scenario", "random"])]
    catalog: Option<PathBuf>,
    /// Generate a random catalog with this many items
    #[arg(long, value_name = "items", conflicts_with = "scenario")]
    random: Option<usize>,
    /// Seed for --random
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Capacity for --catalog or --random (in hours)
    #[arg(long, allow_hyphen_values = true)]
    capacity: Option<i64>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Upper bound on DP table cells
    #[arg(long, value_name = "cells", default_value_t = DEFAULT_MAX_TABLE_CELLS)]
    max_table_cells: usize,
    /// Print the complexity summary after the text report
    #[arg(long)]
    complexity: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("unknown scenario {0:?}")]
    UnknownScenario(String),
    #[error("--capacity is required with --catalog")]
    MissingCapacity,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to read catalog {path:?}: {source}")]
    ReadCatalog { path: PathBuf, source: io::Error },
    #[error("failed to parse catalog {path:?}: {source}")]
    ParseCatalog {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Solve(#[from] KnapsackError),
    #[error(transparent)]
    Output(#[from] io::Error),
}
