use serde::{Deserialize, Serialize};

use storefront_core::{CatalogNode, CategoryId, Entity, SectionId, SubcategoryId};

use crate::serde_ext::null_as_default;

/// Partition-key prefix that links a subcategory to its parent category.
pub const CATEGORY_KEY_PREFIX: &str = "CATEGORY#";

/// A category within a section (e.g. "Sofas").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: CategoryId,
    pub section_id: SectionId,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.category_id
    }
}

impl CatalogNode for Category {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn order(&self) -> i64 {
        self.order
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

/// A subcategory (e.g. "L-shaped sofas").
///
/// The parent reference is not a field of its own: storage keys subcategory
/// items under `PK = "CATEGORY#<categoryId>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub subcategory_id: SubcategoryId,
    #[serde(rename = "PK", default, deserialize_with = "null_as_default")]
    pub partition_key: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub is_active: bool,
}

impl Subcategory {
    /// Parent category id decoded from the partition key.
    pub fn category_id(&self) -> Option<&str> {
        self.partition_key
            .strip_prefix(CATEGORY_KEY_PREFIX)
            .filter(|id| !id.is_empty())
    }

    pub fn belongs_to(&self, category_id: &CategoryId) -> bool {
        self.category_id() == Some(category_id.as_str())
    }
}

impl Entity for Subcategory {
    type Id = SubcategoryId;

    fn id(&self) -> &Self::Id {
        &self.subcategory_id
    }
}

impl CatalogNode for Subcategory {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn order(&self) -> i64 {
        self.order
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
