//! Product comparison.
//!
//! A shopper picks up to four products of one kind and views them side by
//! side. This crate holds the selection rules and builds the comparison
//! table; it never renders anything and keeps no global state.

pub mod compare_set;
pub mod item;
pub mod table;

pub use compare_set::{AddError, AddOutcome, CompareSet, MAX_COMPARE_ITEMS, ToggleOutcome};
pub use item::CompareProduct;
pub use table::{ComparisonColumn, ComparisonRow, ComparisonTable};
