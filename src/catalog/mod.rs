//! Item catalog: the data every solver consumes.
//!
//! A [`Catalog`] is an ordered sequence of immutable [`Item`]s, each
//! carrying a name, a [`Value`] and a non-negative integer cost. Solvers
//! identify items by position; names are only used for reporting.
//!
//! Solvers that produce a subset return a [`Selection`], always listed in
//! ascending catalog order.

mod generate;
mod item;
mod types;

pub use generate::{random_catalog, CatalogSpec};
pub use item::{Catalog, Item, Selection};
pub use types::Value;
