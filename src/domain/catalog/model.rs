use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::listing::Identified;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A product listed under a category.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CategoryItem {
    pub id: Uuid,
    pub category_id: Option<Uuid>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A hero image shown in the home carousel.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CoverItem {
    pub id: Uuid,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Promotional external link rendered as a banner inside a product grid.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SellingLink {
    pub id: Uuid,
    pub name: Option<String>,
    pub descrizione: Option<String>,
    pub img_url: Option<String>,
    pub link: Option<String>,
    pub calltoaction: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SellingLink {
    /// Banners without a target link are never shown.
    pub fn is_renderable(&self) -> bool {
        self.link.as_deref().is_some_and(|link| !link.trim().is_empty())
    }
}

/// Either kind of product a detail page can show.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentItem {
    CategoryProduct(CategoryItem),
    CoverProduct(CoverItem),
}

impl ContentItem {
    pub fn id(&self) -> Uuid {
        match self {
            ContentItem::CategoryProduct(item) => item.id,
            ContentItem::CoverProduct(item) => item.id,
        }
    }
}

impl Identified for CategoryItem {
    fn identity(&self) -> String {
        self.id.to_string()
    }
}

impl Identified for CoverItem {
    fn identity(&self) -> String {
        self.id.to_string()
    }
}

impl Identified for SellingLink {
    fn identity(&self) -> String {
        self.id.to_string()
    }
}
