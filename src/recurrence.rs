//! Iterative evaluation of the include/exclude recurrence.
//!
//! Brute force and the memoized solver walk the same decision tree. The
//! walk keeps its frames in a `Vec`, so depth is bounded by heap memory
//! instead of the thread stack and long catalogs never overflow it.

use crate::catalog::{Catalog, Value};
use crate::memo::MemoCache;

/// Where solved subproblems are looked up and recorded.
pub(crate) trait Subproblems<V> {
    fn lookup(&mut self, index: usize, capacity: i64) -> Option<V>;
    fn record(&mut self, index: usize, capacity: i64, value: V);
}

/// No storage: every subproblem is solved from scratch.
pub(crate) struct Exhaustive;

impl<V> Subproblems<V> for Exhaustive {
    fn lookup(&mut self, _index: usize, _capacity: i64) -> Option<V> {
        None
    }

    fn record(&mut self, _index: usize, _capacity: i64, _value: V) {}
}

impl<V: Copy> Subproblems<V> for MemoCache<V> {
    fn lookup(&mut self, index: usize, capacity: i64) -> Option<V> {
        self.get(index, capacity)
    }

    fn record(&mut self, index: usize, capacity: i64, value: V) {
        self.insert(index, capacity, value);
    }
}

enum Step<V> {
    Enter,
    Excluded,
    Included { exclude: V },
}

struct Frame<V> {
    index: usize,
    capacity: i64,
    step: Step<V>,
}

/// Best value for items from `index` onward under `capacity`.
///
/// ```text
/// best(i, c) = 0                                       if i >= n or c <= 0
/// best(i, c) = max(best(i+1, c),
///                  value[i] + best(i+1, c - cost[i]))  if 0 < cost[i] <= c
/// best(i, c) = best(i+1, c)                            otherwise
/// ```
///
/// Returns the value and the number of subproblems entered, base cases
/// and cache hits included.
pub(crate) fn evaluate<V: Value, S: Subproblems<V>>(
    catalog: &Catalog<V>,
    index: usize,
    capacity: i64,
    store: &mut S,
) -> (V, u64) {
    let mut calls = 0u64;
    let mut result = V::zero();
    let mut stack = vec![Frame {
        index,
        capacity,
        step: Step::Enter,
    }];

    while let Some(Frame {
        index,
        capacity,
        step,
    }) = stack.pop()
    {
        match step {
            Step::Enter => {
                calls += 1;
                if index >= catalog.len() || capacity <= 0 {
                    result = V::zero();
                } else if let Some(value) = store.lookup(index, capacity) {
                    result = value;
                } else {
                    stack.push(Frame {
                        index,
                        capacity,
                        step: Step::Excluded,
                    });
                    stack.push(Frame {
                        index: index + 1,
                        capacity,
                        step: Step::Enter,
                    });
                }
            }
            Step::Excluded => {
                let exclude = result;
                let cost = catalog.items()[index].cost();
                if cost > 0 && cost <= capacity {
                    stack.push(Frame {
                        index,
                        capacity,
                        step: Step::Included { exclude },
                    });
                    stack.push(Frame {
                        index: index + 1,
                        capacity: capacity - cost,
                        step: Step::Enter,
                    });
                } else {
                    store.record(index, capacity, exclude);
                }
            }
            Step::Included { exclude } => {
                let include = catalog.items()[index].value() + result;
                result = exclude.max_of(include);
                store.record(index, capacity, result);
            }
        }
    }

    (result, calls)
}
