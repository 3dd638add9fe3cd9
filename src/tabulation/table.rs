//! The filled DP table and backward reconstruction.

use crate::catalog::{Catalog, Selection, Value};

/// Best value by item prefix and capacity: `T[i][c]` is the best value
/// using only the first `i` items under budget `c`.
///
/// Stored row-major in one allocation of `(n + 1) x (capacity + 1)`
/// cells. `T[0][c] = 0`, `T[i][0] = 0`, and values never decrease along
/// either axis. Cells are written once, during the fill.
#[derive(Debug, Clone, PartialEq)]
pub struct DpTable<V> {
    cells: Vec<V>,
    rows: usize,
    columns: usize,
}

impl<V: Value> DpTable<V> {
    /// Fills the table for `catalog` with `columns = capacity + 1`.
    ///
    /// Zero-cost items never enter a cell, so their rows copy the row
    /// above.
    pub(crate) fn fill(catalog: &Catalog<V>, columns: usize) -> Self {
        let rows = catalog.len() + 1;
        let mut cells = vec![V::zero(); rows * columns];

        for (i, item) in catalog.iter().enumerate().map(|(k, item)| (k + 1, item)) {
            let (above, rest) = cells.split_at_mut(i * columns);
            let prev = &above[(i - 1) * columns..];
            let row = &mut rest[..columns];

            let cost = usize::try_from(item.cost()).unwrap_or(usize::MAX);
            for c in 0..columns {
                // Exclude item i-1.
                row[c] = prev[c];
                // Include it if it fits and improves.
                if cost > 0 && cost <= c {
                    row[c] = row[c].max_of(item.value() + prev[c - cost]);
                }
            }
        }

        Self {
            cells,
            rows,
            columns,
        }
    }

    /// Number of rows, `n + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `capacity + 1`.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The capacity the table was built for.
    pub fn capacity(&self) -> usize {
        self.columns - 1
    }

    /// Cell `T[i][c]`, or `None` outside the table.
    pub fn get(&self, i: usize, c: usize) -> Option<V> {
        if i < self.rows && c < self.columns {
            Some(self.cells[i * self.columns + c])
        } else {
            None
        }
    }

    /// Row `T[i]`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()`.
    pub fn row(&self, i: usize) -> &[V] {
        &self.cells[i * self.columns..(i + 1) * self.columns]
    }

    /// The optimal value `T[n][capacity]`.
    pub fn optimal_value(&self) -> V {
        self.cells[self.cells.len() - 1]
    }

    /// Walks the table backward from `(n, capacity)` to recover the items.
    ///
    /// Item `i - 1` is reported when `T[i][c] != T[i-1][c]`; the walk
    /// stops once either `i` or `c` reaches zero. An item whose inclusion
    /// does not change the cell (zero marginal value) is not reported.
    /// Names come back in ascending catalog order.
    ///
    /// # Panics
    ///
    /// Panics if `catalog` is not the catalog the table was filled from.
    pub fn reconstruct(&self, catalog: &Catalog<V>) -> Selection<V> {
        assert_eq!(
            catalog.len() + 1,
            self.rows,
            "catalog does not match the table"
        );

        let mut picked = Vec::new();
        let mut i = self.rows - 1;
        let mut c = self.columns - 1;

        while i > 0 && c > 0 {
            if self.row(i)[c] != self.row(i - 1)[c] {
                picked.push(i - 1);
                c -= catalog.items()[i - 1].cost() as usize;
            }
            i -= 1;
        }
        picked.reverse();

        let mut selection = catalog.selection(picked);
        selection.total_value = self.optimal_value();
        selection
    }
}
