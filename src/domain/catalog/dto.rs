use serde::{Deserialize, Serialize};

use super::model::{Category, CategoryItem, CoverItem, SellingLink};
use crate::domain::listing::Slot;

/// Response for the home page
#[derive(Debug, Serialize, Deserialize)]
pub struct HomeResponse {
    pub covers: Vec<CoverItem>,
    pub categories: Vec<Category>,
}

/// One rendered entry of a product grid
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GridEntry {
    Product {
        key: String,
        item: CategoryItem,
    },
    Banner {
        key: String,
        position: usize,
        link: SellingLink,
    },
}

impl GridEntry {
    /// Map an interleaved slot to its wire form, dropping banners that
    /// cannot be rendered.
    pub fn from_slot(slot: Slot<CategoryItem, SellingLink>) -> Option<Self> {
        let key = slot.key();
        match slot {
            Slot::Content(item) => Some(GridEntry::Product { key, item }),
            Slot::Banner { position, promo } if promo.is_renderable() => {
                Some(GridEntry::Banner {
                    key,
                    position,
                    link: promo,
                })
            }
            Slot::Banner { .. } => None,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            GridEntry::Product { key, .. } | GridEntry::Banner { key, .. } => key,
        }
    }
}

/// Response for a single category page
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryPageResponse {
    pub category: Category,
    pub entries: Vec<GridEntry>,
}

/// One category with its grid, as listed by the sections endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct CategorySection {
    pub category: Category,
    pub entries: Vec<GridEntry>,
}

/// Public site settings
#[derive(Debug, Serialize, Deserialize)]
pub struct SiteResponse {
    pub analytics_tag_id: Option<String>,
}
