//! Error types shared by the solvers.

use thiserror::Error;

/// Errors raised while building catalogs or running the DP solvers.
///
/// Zero and negative capacities are never errors: every solver treats
/// them as the "no room" base case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnapsackError {
    /// An item could not be admitted into a catalog.
    #[error("invalid item {item:?}: {reason}")]
    InvalidInput {
        /// Name of the rejected item.
        item: String,
        /// Why the item was rejected.
        reason: String,
    },

    /// The DP table or memo cache would exceed the configured cell limit.
    #[error("dp table of {rows} x {columns} cells exceeds the limit of {limit} cells")]
    CapacityOverflow {
        /// Number of item rows (`n + 1`).
        rows: usize,
        /// Number of capacity columns (`capacity + 1`).
        columns: usize,
        /// Configured maximum number of cells.
        limit: usize,
    },

    /// A solver configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KnapsackError>;
