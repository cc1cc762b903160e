//! Entity traits: identity plus the navigation attributes shared by every
//! level of the catalog tree (sections, categories, subcategories).

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + AsRef<str>;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// A navigable catalog node: addressable by slug or id, ordered, switchable.
pub trait CatalogNode: Entity {
    fn slug(&self) -> &str;

    fn name(&self) -> &str;

    /// Display position among siblings (ascending).
    fn order(&self) -> i64;

    fn is_active(&self) -> bool;
}

/// Resolve a route selector against a set of nodes.
///
/// Slugs win over ids: a node whose slug equals `selector` is returned even if
/// an earlier node has that string as its id.
pub fn resolve_slug_or_id<'a, T, I>(nodes: I, selector: &str) -> Option<&'a T>
where
    T: CatalogNode + 'a,
    I: IntoIterator<Item = &'a T>,
    I::IntoIter: Clone,
{
    let iter = nodes.into_iter();
    iter.clone()
        .find(|n| n.slug() == selector)
        .or_else(|| iter.into_iter().find(|n| n.id().as_ref() == selector))
}

/// Active nodes in ascending `order`; ties keep input order.
pub fn sorted_active<'a, T, I>(nodes: I) -> Vec<&'a T>
where
    T: CatalogNode + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut active: Vec<&T> = nodes.into_iter().filter(|n| n.is_active()).collect();
    active.sort_by_key(|n| n.order());
    active
}
