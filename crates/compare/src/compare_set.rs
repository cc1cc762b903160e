//! Bounded, single-category comparison selection.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::item::CompareProduct;

/// Maximum number of products compared side by side.
pub const MAX_COMPARE_ITEMS: usize = 4;

/// Why a product was not added. The set is unchanged in every case.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddError {
    #[error("you can compare up to {max} products")]
    LimitReached { max: usize },

    #[error("you can only compare products from the same category (have {expected}, got {found})")]
    CategoryMismatch { expected: String, found: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// The id was already a member; nothing changed.
    AlreadyPresent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// Products selected for comparison.
///
/// Invariants:
/// - at most [`MAX_COMPARE_ITEMS`] members
/// - every member has the same `category` (fixed by the first member until the set empties)
/// - member ids are unique
///
/// Members keep insertion order. The set is owned by one browsing session and
/// lives only as long as it does.
///
/// Serialized as the plain member list. Deserializing replays every member
/// through [`CompareSet::add`], so a list breaking the size or category rules
/// is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CompareProduct>", into = "Vec<CompareProduct>")]
pub struct CompareSet {
    members: Vec<CompareProduct>,
}

impl CompareSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn members(&self) -> &[CompareProduct] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= MAX_COMPARE_ITEMS
    }

    /// Shared category of the current members.
    pub fn category(&self) -> Option<&str> {
        self.members.first().map(|p| p.category.as_str())
    }

    /// Add a product.
    ///
    /// Checks run in order: size limit, category, duplicate id. A duplicate is
    /// reported as [`AddOutcome::AlreadyPresent`], not as an error.
    pub fn add(&mut self, product: CompareProduct) -> Result<AddOutcome, AddError> {
        if self.is_full() {
            return Err(AddError::LimitReached {
                max: MAX_COMPARE_ITEMS,
            });
        }

        if let Some(expected) = self.category() {
            if !self.admits(&product.category) {
                return Err(AddError::CategoryMismatch {
                    expected: expected.to_string(),
                    found: product.category,
                });
            }
        }

        if self.contains(product.id.as_str()) {
            return Ok(AddOutcome::AlreadyPresent);
        }

        self.members.push(product);
        Ok(AddOutcome::Added)
    }

    /// Remove a member by id. Returns whether anything was removed.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let before = self.members.len();
        self.members.retain(|p| p.id != product_id);
        self.members.len() != before
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.members.iter().any(|p| p.id == product_id)
    }

    /// Whether a product of `category` may join the set (ignoring the size limit).
    pub fn can_accept(&self, category: &str) -> bool {
        self.admits(category)
    }

    /// Compare-button behaviour: drop the product if present, otherwise add it.
    pub fn toggle(&mut self, product: CompareProduct) -> Result<ToggleOutcome, AddError> {
        if self.remove(product.id.as_str()) {
            return Ok(ToggleOutcome::Removed);
        }
        self.add(product).map(|_| ToggleOutcome::Added)
    }

    // Single category predicate behind both `add` and `can_accept`.
    fn admits(&self, category: &str) -> bool {
        self.category().is_none_or(|shared| shared == category)
    }
}

impl TryFrom<Vec<CompareProduct>> for CompareSet {
    type Error = AddError;

    fn try_from(members: Vec<CompareProduct>) -> Result<Self, Self::Error> {
        let mut set = CompareSet::new();
        for member in members {
            set.add(member)?;
        }
        Ok(set)
    }
}

impl From<CompareSet> for Vec<CompareProduct> {
    fn from(set: CompareSet) -> Self {
        set.members
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: &str) -> CompareProduct {
        CompareProduct::new(id, format!("Product {id}"), format!("{id}.jpg"), category)
    }

    #[test]
    fn add_to_empty_set_succeeds() {
        let mut set = CompareSet::new();
        assert_eq!(set.add(item("p1", "sofa")), Ok(AddOutcome::Added));
        assert_eq!(set.len(), 1);
        assert_eq!(set.category(), Some("sofa"));
    }

    #[test]
    fn add_from_other_category_is_rejected() {
        let mut set = CompareSet::new();
        set.add(item("p1", "sofa")).unwrap();

        let err = set.add(item("p2", "chair")).unwrap_err();
        assert_eq!(
            err,
            AddError::CategoryMismatch {
                expected: "sofa".to_string(),
                found: "chair".to_string(),
            }
        );
        let ids: Vec<&str> = set.members().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1"]);
    }

    #[test]
    fn fifth_add_hits_limit() {
        let mut set = CompareSet::new();
        for id in ["p1", "p2", "p3", "p4"] {
            assert_eq!(set.add(item(id, "sofa")), Ok(AddOutcome::Added));
        }

        assert_eq!(
            set.add(item("p5", "sofa")),
            Err(AddError::LimitReached { max: MAX_COMPARE_ITEMS })
        );
        assert_eq!(set.len(), 4);
        assert!(set.is_full());
    }

    #[test]
    fn limit_is_checked_before_category_and_duplicates() {
        let mut set = CompareSet::new();
        for id in ["p1", "p2", "p3", "p4"] {
            set.add(item(id, "sofa")).unwrap();
        }

        assert!(matches!(set.add(item("p9", "chair")), Err(AddError::LimitReached { .. })));
        assert!(matches!(set.add(item("p1", "sofa")), Err(AddError::LimitReached { .. })));
    }

    #[test]
    fn duplicate_add_is_a_no_op() {
        let mut set = CompareSet::new();
        set.add(item("p1", "sofa")).unwrap();

        assert_eq!(set.add(item("p1", "sofa")), Ok(AddOutcome::AlreadyPresent));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn removing_unknown_id_changes_nothing() {
        let mut set = CompareSet::new();
        set.add(item("p1", "sofa")).unwrap();
        set.add(item("p2", "sofa")).unwrap();
        let before = set.clone();

        assert!(!set.remove("nonexistent"));
        assert_eq!(set, before);
    }

    #[test]
    fn emptying_the_set_releases_its_category() {
        let mut set = CompareSet::new();
        set.add(item("p1", "sofa")).unwrap();
        assert!(!set.can_accept("chair"));

        assert!(set.remove("p1"));
        assert!(set.can_accept("chair"));

        set.add(item("p2", "chair")).unwrap();
        set.clear();
        assert!(set.is_empty());
        assert!(set.can_accept("sofa"));
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut set = CompareSet::new();
        assert_eq!(set.toggle(item("p1", "sofa")), Ok(ToggleOutcome::Added));
        assert!(set.contains("p1"));
        assert_eq!(set.toggle(item("p1", "sofa")), Ok(ToggleOutcome::Removed));
        assert!(!set.contains("p1"));
    }

    #[test]
    fn toggle_surfaces_add_errors() {
        let mut set = CompareSet::new();
        set.add(item("p1", "sofa")).unwrap();
        assert!(matches!(
            set.toggle(item("p2", "bed")),
            Err(AddError::CategoryMismatch { .. })
        ));
    }

    #[test]
    fn deserializing_enforces_the_set_rules() {
        let json = |ids: &[(&str, &str)]| {
            let members: Vec<CompareProduct> = ids.iter().map(|(id, cat)| item(id, cat)).collect();
            serde_json::to_string(&members).unwrap()
        };

        let mixed = json(&[("p1", "sofa"), ("p2", "chair")]);
        assert!(serde_json::from_str::<CompareSet>(&mixed).is_err());

        let too_many = json(&[("p1", "sofa"), ("p2", "sofa"), ("p3", "sofa"), ("p4", "sofa"), ("p5", "sofa")]);
        assert!(serde_json::from_str::<CompareSet>(&too_many).is_err());

        let with_duplicate = json(&[("p1", "sofa"), ("p2", "sofa"), ("p1", "sofa")]);
        let set: CompareSet = serde_json::from_str(&with_duplicate).unwrap();
        assert_eq!(set.len(), 2);

        let round_trip: CompareSet = serde_json::from_str(&serde_json::to_string(&set).unwrap()).unwrap();
        assert_eq!(round_trip, set);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add(u8, u8),
            Remove(u8),
            Clear,
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                6 => (0u8..8, 0u8..3).prop_map(|(id, cat)| Op::Add(id, cat)),
                3 => (0u8..10).prop_map(Op::Remove),
                1 => Just(Op::Clear),
            ]
        }

        fn category_for(cat: u8) -> String {
            format!("cat-{cat}")
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: size bound, homogeneity and uniqueness hold after every operation.
            #[test]
            fn invariants_hold_for_any_sequence(ops in proptest::collection::vec(op(), 0..60)) {
                let mut set = CompareSet::new();
                for op in ops {
                    match op {
                        Op::Add(id, cat) => {
                            let _ = set.add(item(&format!("p{id}"), &category_for(cat)));
                        }
                        Op::Remove(id) => {
                            set.remove(&format!("p{id}"));
                        }
                        Op::Clear => set.clear(),
                    }

                    prop_assert!(set.len() <= MAX_COMPARE_ITEMS);
                    if let Some(shared) = set.category() {
                        prop_assert!(set.members().iter().all(|p| p.category == shared));
                    }
                    let mut ids: Vec<&str> = set.members().iter().map(|p| p.id.as_str()).collect();
                    ids.sort_unstable();
                    ids.dedup();
                    prop_assert_eq!(ids.len(), set.len());
                }
            }

            /// Property: removing a non-member leaves members and order unchanged.
            #[test]
            fn remove_of_non_member_is_identity(
                ids in proptest::collection::btree_set(0u8..20, 0..=4),
                missing in 20u8..40,
            ) {
                let mut set = CompareSet::new();
                for id in &ids {
                    set.add(item(&format!("p{id}"), "sofa")).unwrap();
                }
                let before = set.clone();

                let missing_id = format!("p{missing}");
                prop_assert!(!set.remove(&missing_id));
                prop_assert_eq!(set, before);
            }

            /// Property: re-adding a member never changes the size.
            #[test]
            fn re_adding_member_keeps_size(ids in proptest::collection::btree_set(0u8..20, 1..=4), pick in any::<proptest::sample::Index>()) {
                let mut set = CompareSet::new();
                for id in &ids {
                    set.add(item(&format!("p{id}"), "sofa")).unwrap();
                }
                let existing = set.members()[pick.index(set.len())].clone();
                let before = set.len();

                let _ = set.add(existing);
                prop_assert_eq!(set.len(), before);
            }

            /// Property: `can_accept` agrees with the category check in `add`.
            #[test]
            fn can_accept_predicts_category_mismatch(first in 0u8..3, next in 0u8..3) {
                let mut set = CompareSet::new();
                set.add(item("p1", &category_for(first))).unwrap();

                let predicted = set.can_accept(&category_for(next));
                let result = set.add(item("p2", &category_for(next)));
                prop_assert_eq!(predicted, !matches!(result, Err(AddError::CategoryMismatch { .. })));
            }
        }
    }
}
