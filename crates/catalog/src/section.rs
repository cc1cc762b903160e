use serde::{Deserialize, Serialize};

use storefront_core::{CatalogNode, Entity, SectionId};

use crate::serde_ext::null_as_default;

/// Top-level storefront grouping (e.g. "Furniture", "Home Appliances").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub section_id: SectionId,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub show_on_home: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}

impl Section {
    /// Whether the section appears on the landing page.
    pub fn is_home_visible(&self) -> bool {
        self.is_active && self.show_on_home
    }
}

impl Entity for Section {
    type Id = SectionId;

    fn id(&self) -> &Self::Id {
        &self.section_id
    }
}

impl CatalogNode for Section {
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
