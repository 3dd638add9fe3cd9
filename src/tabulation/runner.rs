//! Bottom-up solve: fill, then backtrack.

use super::table::DpTable;
use crate::catalog::{Catalog, Selection, Value};
use crate::config::DpConfig;
use crate::error::Result;

/// Iterative DP solver with solution reconstruction.
///
/// Runs in two phases: fill the `(n + 1) x (capacity + 1)` table, then
/// walk it backward from `(n, capacity)` to recover the chosen items.
/// Both phases use a table allocated for this call only.
///
/// # Examples
///
/// ```
/// use u_knapsack::{Catalog, TableSolver};
///
/// let catalog = Catalog::from_triples([
///     ("Blockchain", 40, 8),
///     ("IoT System", 35, 7),
///     ("Cloud Migration", 30, 6),
///     ("Security Audit", 25, 5),
/// ]).unwrap();
///
/// let selection = TableSolver::solve(&catalog, 20).unwrap();
/// assert_eq!(selection.total_value, 100);
/// assert_eq!(selection.selected, vec!["Blockchain", "IoT System", "Security Audit"]);
/// ```
pub struct TableSolver;

impl TableSolver {
    /// Optimal selection with the default [`DpConfig`].
    pub fn solve<V: Value>(catalog: &Catalog<V>, capacity: i64) -> Result<Selection<V>> {
        Self::solve_with(catalog, capacity, &DpConfig::default())
    }

    /// Optimal selection under the given limits.
    pub fn solve_with<V: Value>(
        catalog: &Catalog<V>,
        capacity: i64,
        config: &DpConfig,
    ) -> Result<Selection<V>> {
        let table = Self::build(catalog, capacity, config)?;
        let selection = table.reconstruct(catalog);
        log::debug!(
            "tabulation: value {}, {} item(s) selected, cost {}/{}",
            selection.total_value,
            selection.len(),
            selection.total_cost,
            table.capacity()
        );
        Ok(selection)
    }

    /// Fills and returns the table without reconstructing.
    ///
    /// Negative capacities build a single-column table. Fails with
    /// [`CapacityOverflow`](crate::KnapsackError::CapacityOverflow) before
    /// allocating when the table exceeds `config.max_table_cells`.
    pub fn build<V: Value>(
        catalog: &Catalog<V>,
        capacity: i64,
        config: &DpConfig,
    ) -> Result<DpTable<V>> {
        let (rows, columns) = config.check_table(catalog.len(), capacity)?;
        log::debug!("tabulation: filling {rows} x {columns} table");

        let skipped = catalog.zero_cost_count();
        if skipped > 0 {
            log::debug!("tabulation: {skipped} zero-cost item(s) are never selected");
        }

        Ok(DpTable::fill(catalog, columns))
    }
}
