//! Ratio-ranked greedy selection.

use crate::catalog::{Catalog, Selection, Value};
use std::cmp::Ordering;

/// An item's position in the greedy ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedItem {
    /// Catalog index of the item.
    pub index: usize,
    /// Value per unit of cost.
    pub ratio: f64,
}

/// Greedy baseline: fill capacity by descending value/cost ratio.
///
/// The result is always feasible but not necessarily optimal. It exists
/// to contrast against the exact solvers and must never be used as
/// ground truth.
///
/// # Examples
///
/// ```
/// use u_knapsack::{Catalog, GreedySelector};
///
/// let catalog = Catalog::from_triples([
///     ("Projeto X", 60, 10),
///     ("Projeto Y", 50, 8),
///     ("Projeto Z", 50, 8),
/// ]).unwrap();
///
/// let selection = GreedySelector::select(&catalog, 16);
/// assert_eq!(selection.total_value, 100);
/// assert_eq!(selection.selected, vec!["Projeto Y", "Projeto Z"]);
/// ```
pub struct GreedySelector;

impl GreedySelector {
    /// Ranks items with positive cost by descending ratio.
    ///
    /// The sort is stable: items with equal ratios keep catalog order.
    /// Zero-cost items have no ratio and are left out of the ranking.
    pub fn rank<V: Value>(catalog: &Catalog<V>) -> Vec<RankedItem> {
        let mut ranked: Vec<RankedItem> = catalog
            .iter()
            .enumerate()
            .filter_map(|(index, item)| item.ratio().map(|ratio| RankedItem { index, ratio }))
            .collect();

        ranked.sort_by(|a, b| b.ratio.partial_cmp(&a.ratio).unwrap_or(Ordering::Equal));
        ranked
    }

    /// Greedily accepts ranked items while they fit.
    ///
    /// Items that do not fit are skipped and the scan continues, so a
    /// later, cheaper item can still be taken. Capacity `<= 0` yields
    /// the empty selection.
    pub fn select<V: Value>(catalog: &Catalog<V>, capacity: i64) -> Selection<V> {
        if capacity <= 0 || catalog.is_empty() {
            return Selection::empty();
        }

        let skipped = catalog.zero_cost_count();
        if skipped > 0 {
            log::debug!("greedy: excluding {skipped} zero-cost item(s) from ranking");
        }

        let mut used = 0i64;
        let mut accepted = Vec::new();

        for ranked in Self::rank(catalog) {
            let item = &catalog.items()[ranked.index];
            if item.cost() <= capacity - used {
                log::trace!(
                    "greedy: accept {:?} (ratio {:.4}, cost {})",
                    item.name(),
                    ranked.ratio,
                    item.cost()
                );
                used += item.cost();
                accepted.push(ranked.index);
            } else {
                log::trace!(
                    "greedy: skip {:?} (cost {} exceeds remaining {})",
                    item.name(),
                    item.cost(),
                    capacity - used
                );
            }
        }

        let selection = catalog.selection(accepted);
        log::debug!(
            "greedy: value {} using {}/{} capacity with {} item(s)",
            selection.total_value,
            selection.total_cost,
            capacity,
            selection.len()
        );
        selection
    }
}
