//! Resource limits for the dynamic-programming solvers.

use crate::error::{KnapsackError, Result};

/// Default upper bound on DP cells: 64M cells, 512 MiB of `i64` values.
pub const DEFAULT_MAX_TABLE_CELLS: usize = 1 << 26;

/// Configuration shared by [`MemoSolver`](crate::memo::MemoSolver) and
/// [`TableSolver`](crate::tabulation::TableSolver).
///
/// Both DP variants use `O(n x capacity)` memory. The core never shrinks a
/// request to fit; a table that would exceed `max_table_cells` is
/// rejected with [`KnapsackError::CapacityOverflow`] before anything is
/// allocated.
///
/// # Examples
///
/// ```
/// use u_knapsack::DpConfig;
///
/// let config = DpConfig::default().with_max_table_cells(10_000);
/// assert!(config.validate().is_ok());
/// assert!(config.check_table(9, 999).is_ok());
/// assert!(config.check_table(10, 1_000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DpConfig {
    /// Maximum number of cells (`(n + 1) * (capacity + 1)`) a solver may use.
    pub max_table_cells: usize,
}

impl Default for DpConfig {
    fn default() -> Self {
        Self {
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
        }
    }
}

impl DpConfig {
    pub fn with_max_table_cells(mut self, cells: usize) -> Self {
        self.max_table_cells = cells;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.max_table_cells == 0 {
            return Err("max_table_cells must be positive".into());
        }
        Ok(())
    }

    /// Checks that a table for `items` items and `capacity` fits the limit.
    ///
    /// Returns the `(rows, columns)` dimensions on success. Negative
    /// capacities are clamped to zero.
    pub fn check_table(&self, items: usize, capacity: i64) -> Result<(usize, usize)> {
        self.validate().map_err(KnapsackError::InvalidConfig)?;

        let rows = items.saturating_add(1);
        let columns = usize::try_from(capacity.max(0))
            .ok()
            .and_then(|c| c.checked_add(1))
            .unwrap_or(usize::MAX);

        match rows.checked_mul(columns) {
            Some(cells) if cells <= self.max_table_cells => Ok((rows, columns)),
            _ => Err(KnapsackError::CapacityOverflow {
                rows,
                columns,
                limit: self.max_table_cells,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DpConfig::default();
        assert_eq!(config.max_table_cells, 1 << 26);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_cells() {
        let config = DpConfig::default().with_max_table_cells(0);
        assert!(config.validate().is_err());
        assert!(matches!(
            config.check_table(1, 1),
            Err(KnapsackError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_check_table_dimensions() {
        let config = DpConfig::default();
        assert_eq!(config.check_table(4, 10).unwrap(), (5, 11));
        assert_eq!(config.check_table(0, 0).unwrap(), (1, 1));
    }

    #[test]
    fn test_check_table_negative_capacity_clamped() {
        let config = DpConfig::default();
        assert_eq!(config.check_table(3, -7).unwrap(), (4, 1));
    }

    #[test]
    fn test_check_table_limit_exceeded() {
        let config = DpConfig::default().with_max_table_cells(100);
        let err = config.check_table(9, 10).unwrap_err();
        assert_eq!(
            err,
            KnapsackError::CapacityOverflow {
                rows: 10,
                columns: 11,
                limit: 100
            }
        );
    }

    #[test]
    fn test_check_table_usize_overflow() {
        let config = DpConfig::default().with_max_table_cells(usize::MAX);
        assert!(matches!(
            config.check_table(usize::MAX, i64::MAX),
            Err(KnapsackError::CapacityOverflow { .. })
        ));
    }
}
