use serde::{Deserialize, Serialize};

use storefront_core::{BannerId, CategoryId, Entity, SubcategoryId};

use crate::category::{Category, Subcategory};
use crate::serde_ext::null_as_default;

/// Where a banner is placed. Drafts without a position are `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BannerPosition {
    HomeHero,
    HomeOffer,
    HomeMiddle,
    HomeBottom,
    CategoryTop,
    SubcategoryTop,
    CategorySplit,
    ProductPromo,
    #[default]
    #[serde(other)]
    Unknown,
}

/// What a banner click navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RedirectType {
    Product,
    Category,
    Subcategory,
    Section,
    External,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub banner_id: BannerId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub redirect_type: RedirectType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub redirect_value: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: BannerPosition,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub subcategory_id: Option<SubcategoryId>,
}

impl Entity for Banner {
    type Id = BannerId;

    fn id(&self) -> &Self::Id {
        &self.banner_id
    }
}

impl Banner {
    fn shown_at(&self, position: BannerPosition) -> bool {
        self.is_active && self.position == position
    }

    fn redirects_to(&self, target: &str) -> bool {
        self.redirect_value == target
    }

    /// Header banner of a category page without a subcategory selected.
    pub fn targets_category(&self, category: &Category) -> bool {
        self.shown_at(BannerPosition::CategoryTop)
            && (self.category_id.as_ref() == Some(&category.category_id)
                || self.redirects_to(category.category_id.as_str())
                || self.redirects_to(&category.slug))
    }

    /// Header banner of a category page narrowed to a subcategory.
    ///
    /// `selector` is the raw route value; `resolved` is the subcategory it
    /// names, when known.
    pub fn targets_subcategory(&self, selector: &str, resolved: Option<&Subcategory>) -> bool {
        let resolved_id = resolved.map(|s| s.subcategory_id.as_str());
        let redirects_here =
            self.redirects_to(selector) || resolved_id.is_some_and(|id| self.redirects_to(id));

        let subcategory_banner = self.shown_at(BannerPosition::SubcategoryTop)
            && (redirects_here
                || resolved_id.is_some_and(|id| {
                    self.subcategory_id.as_ref().is_some_and(|own| own == id)
                }));

        let category_banner_linking_here = self.shown_at(BannerPosition::CategoryTop)
            && self.redirect_type == RedirectType::Subcategory
            && redirects_here;

        subcategory_banner || category_banner_linking_here
    }
}

/// Active banners at a fixed position, in display order.
pub fn banners_at(banners: &[Banner], position: BannerPosition) -> Vec<&Banner> {
    sort_by_order(banners.iter().filter(|b| b.shown_at(position)).collect())
}

pub fn banners_for_category<'a>(banners: &'a [Banner], category: &Category) -> Vec<&'a Banner> {
    sort_by_order(banners.iter().filter(|b| b.targets_category(category)).collect())
}

pub fn banners_for_subcategory<'a>(
    banners: &'a [Banner],
    selector: &str,
    resolved: Option<&Subcategory>,
) -> Vec<&'a Banner> {
    sort_by_order(
        banners
            .iter()
            .filter(|b| b.targets_subcategory(selector, resolved))
            .collect(),
    )
}

fn sort_by_order(mut banners: Vec<&Banner>) -> Vec<&Banner> {
    banners.sort_by_key(|b| b.order);
    banners
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::SectionId;

    fn banner(id: &str, position: BannerPosition, redirect: RedirectType, value: &str, order: i64) -> Banner {
        Banner {
            banner_id: BannerId::new(id),
            title: id.to_string(),
            subtitle: None,
            image: format!("{id}.jpg"),
            redirect_type: redirect,
            redirect_value: value.to_string(),
            position,
            order,
            is_active: true,
            category_id: None,
            subcategory_id: None,
        }
    }

    fn sofas() -> Category {
        Category {
            category_id: CategoryId::new("c1"),
            section_id: SectionId::new("s1"),
            slug: "sofas".to_string(),
            name: "Sofas".to_string(),
            order: 1,
            is_active: true,
            image: String::new(),
        }
    }

    fn recliners() -> Subcategory {
        Subcategory {
            subcategory_id: SubcategoryId::new("sub-9"),
            partition_key: "CATEGORY#c1".to_string(),
            slug: "recliners".to_string(),
            name: "Recliners".to_string(),
            order: 1,
            is_active: true,
        }
    }

    #[test]
    fn category_banners_match_id_slug_or_explicit_category() {
        let mut by_field = banner("b3", BannerPosition::CategoryTop, RedirectType::External, "https://x", 3);
        by_field.category_id = Some(CategoryId::new("c1"));
        let banners = vec![
            by_field,
            banner("b1", BannerPosition::CategoryTop, RedirectType::Category, "sofas", 1),
            banner("b2", BannerPosition::CategoryTop, RedirectType::Category, "c1", 2),
            banner("b4", BannerPosition::CategoryTop, RedirectType::Category, "beds", 0),
            banner("b5", BannerPosition::HomeHero, RedirectType::Category, "sofas", 0),
        ];

        let ids: Vec<&str> = banners_for_category(&banners, &sofas())
            .iter()
            .map(|b| b.banner_id.as_str())
            .collect();
        assert_eq!(ids, vec!["b1", "b2", "b3"]);
    }

    #[test]
    fn subcategory_banners_include_linking_category_banners() {
        let mut tagged = banner("t", BannerPosition::SubcategoryTop, RedirectType::Product, "p1", 5);
        tagged.subcategory_id = Some(SubcategoryId::new("sub-9"));
        let banners = vec![
            tagged,
            banner("by-slug", BannerPosition::SubcategoryTop, RedirectType::Subcategory, "recliners", 2),
            banner("by-id", BannerPosition::SubcategoryTop, RedirectType::Subcategory, "sub-9", 3),
            banner("cat-link", BannerPosition::CategoryTop, RedirectType::Subcategory, "recliners", 1),
            banner("cat-other", BannerPosition::CategoryTop, RedirectType::Category, "recliners", 0),
        ];

        let sub = recliners();
        let ids: Vec<&str> = banners_for_subcategory(&banners, "recliners", Some(&sub))
            .iter()
            .map(|b| b.banner_id.as_str())
            .collect();
        assert_eq!(ids, vec!["cat-link", "by-slug", "by-id", "t"]);
    }

    #[test]
    fn unresolved_subcategory_matches_raw_selector_only() {
        let mut tagged = banner("t", BannerPosition::SubcategoryTop, RedirectType::Product, "p1", 5);
        tagged.subcategory_id = Some(SubcategoryId::new("sub-9"));
        let banners = vec![
            tagged,
            banner("raw", BannerPosition::SubcategoryTop, RedirectType::Subcategory, "mystery", 1),
        ];

        let ids: Vec<&str> = banners_for_subcategory(&banners, "mystery", None)
            .iter()
            .map(|b| b.banner_id.as_str())
            .collect();
        assert_eq!(ids, vec!["raw"]);
    }

    #[test]
    fn inactive_banners_are_hidden() {
        let mut hidden = banner("h", BannerPosition::HomeHero, RedirectType::External, "", 0);
        hidden.is_active = false;
        let banners = vec![hidden, banner("v", BannerPosition::HomeHero, RedirectType::External, "", 1)];

        let shown = banners_at(&banners, BannerPosition::HomeHero);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].banner_id, "v");
    }

    #[test]
    fn unknown_positions_deserialize() {
        let json = r#"{
            "bannerId": "b1", "title": "Sale", "image": "x.jpg",
            "redirectType": "WHATSAPP", "redirectValue": "", "position": "FOOTER",
            "order": 1, "isActive": true
        }"#;

        let banner: Banner = serde_json::from_str(json).unwrap();
        assert_eq!(banner.position, BannerPosition::Unknown);
        assert_eq!(banner.redirect_type, RedirectType::Unknown);
    }

    #[test]
    fn draft_banners_do_not_break_the_list() {
        let json = r#"[
            {"bannerId": "b1", "title": "Sale", "image": "x.jpg", "redirectType": "CATEGORY",
             "redirectValue": "sofas", "position": "CATEGORY_TOP", "order": 1, "isActive": true},
            {"bannerId": "b2", "title": "Draft"},
            {"bannerId": "b3", "redirectType": null, "position": null}
        ]"#;

        let banners: Vec<Banner> = serde_json::from_str(json).unwrap();
        assert_eq!(banners.len(), 3);
        assert_eq!(banners[1].position, BannerPosition::Unknown);
        assert_eq!(banners[1].redirect_type, RedirectType::Unknown);
        assert_eq!(banners[2].position, BannerPosition::Unknown);
        assert!(banners_at(&banners, BannerPosition::Unknown).is_empty());
    }
}
