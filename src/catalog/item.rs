//! Items, catalogs and selections.

use super::types::Value;
use crate::error::{KnapsackError, Result};

/// A candidate project: a value gained and an hours cost consumed.
///
/// Items are immutable once constructed. Construction rejects negative
/// costs and invalid (non-finite) values, so every solver can rely on
/// `cost >= 0`.
///
/// # Examples
///
/// ```
/// use u_knapsack::Item;
///
/// let item = Item::new("Projeto A", 12, 4).unwrap();
/// assert_eq!(item.name(), "Projeto A");
/// assert_eq!(item.ratio(), Some(3.0));
/// assert!(Item::new("broken", 1, -1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "ItemFields<V>",
        bound(deserialize = "V: Value + serde::Deserialize<'de>")
    )
)]
pub struct Item<V = i64> {
    name: String,
    value: V,
    cost: i64,
}

impl<V: Value> Item<V> {
    /// Creates an item, validating its cost and value.
    pub fn new(name: impl Into<String>, value: V, cost: i64) -> Result<Self> {
        let name = name.into();
        if cost < 0 {
            return Err(KnapsackError::InvalidInput {
                item: name,
                reason: format!("cost must be non-negative, got {cost}"),
            });
        }
        if !value.is_valid() {
            return Err(KnapsackError::InvalidInput {
                item: name,
                reason: format!("value must be finite, got {value}"),
            });
        }
        Ok(Self { name, value, cost })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> V {
        self.value
    }

    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// Value per unit of cost, or `None` for zero-cost items.
    pub fn ratio(&self) -> Option<f64> {
        (self.cost > 0).then(|| self.value.to_f64() / self.cost as f64)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ItemFields<V> {
    name: String,
    value: V,
    cost: i64,
}

#[cfg(feature = "serde")]
impl<V: Value> TryFrom<ItemFields<V>> for Item<V> {
    type Error = KnapsackError;

    fn try_from(fields: ItemFields<V>) -> Result<Self> {
        Item::new(fields.name, fields.value, fields.cost)
    }
}

/// An ordered sequence of items.
///
/// Order matters: it defines the index positions used by the DP
/// recurrences and the tie-break order of the greedy ranking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        transparent,
        bound(deserialize = "V: Value + serde::Deserialize<'de>")
    )
)]
pub struct Catalog<V = i64> {
    items: Vec<Item<V>>,
}

impl<V: Value> Catalog<V> {
    /// Creates a catalog from already validated items.
    pub fn new(items: Vec<Item<V>>) -> Self {
        Self { items }
    }

    /// Creates an empty catalog.
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Builds a catalog from `(name, value, cost)` triples.
    ///
    /// Fails on the first invalid triple.
    ///
    /// ```
    /// use u_knapsack::Catalog;
    ///
    /// let catalog = Catalog::from_triples([("A", 12, 4), ("B", 10, 3)]).unwrap();
    /// assert_eq!(catalog.len(), 2);
    /// ```
    pub fn from_triples<I, S>(triples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, V, i64)>,
        S: Into<String>,
    {
        triples
            .into_iter()
            .map(|(name, value, cost)| Item::new(name, value, cost))
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item<V>> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[Item<V>] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item<V>> {
        self.items.iter()
    }

    /// Number of items with zero cost. Those items are never selected.
    pub fn zero_cost_count(&self) -> usize {
        self.items.iter().filter(|item| item.cost == 0).count()
    }

    /// Builds a [`Selection`] from item indices.
    ///
    /// Indices are sorted ascending so names follow catalog order; the
    /// totals are summed in that order.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds.
    pub fn selection(&self, mut indices: Vec<usize>) -> Selection<V> {
        indices.sort_unstable();
        indices.dedup();

        let mut total_value = V::zero();
        let mut total_cost = 0i64;
        let mut selected = Vec::with_capacity(indices.len());
        for &i in &indices {
            let item = &self.items[i];
            total_value = total_value + item.value;
            total_cost += item.cost;
            selected.push(item.name.clone());
        }

        Selection {
            total_value,
            selected,
            indices,
            total_cost,
        }
    }
}

impl<V: Value> Default for Catalog<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V: Value> FromIterator<Item<V>> for Catalog<V> {
    fn from_iter<I: IntoIterator<Item = Item<V>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, V> IntoIterator for &'a Catalog<V> {
    type Item = &'a Item<V>;
    type IntoIter = std::slice::Iter<'a, Item<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A chosen subset of a catalog.
///
/// `selected` and `indices` are parallel and in ascending catalog order,
/// regardless of the order in which a solver picked the items.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection<V = i64> {
    /// Total value of the selection.
    pub total_value: V,
    /// Names of the selected items.
    pub selected: Vec<String>,
    /// Catalog indices of the selected items.
    pub indices: Vec<usize>,
    /// Total cost of the selected items.
    pub total_cost: i64,
}

impl<V: Value> Selection<V> {
    /// The empty, zero-value selection.
    pub fn empty() -> Self {
        Self {
            total_value: V::zero(),
            selected: Vec::new(),
            indices: Vec::new(),
            total_cost: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
