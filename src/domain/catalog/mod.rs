pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::{CategoryPageResponse, CategorySection, GridEntry, HomeResponse, SiteResponse};
pub use error::CatalogServiceError;
pub use model::{Category, CategoryItem, ContentItem, CoverItem, SellingLink};
pub use service::{CatalogService, CatalogServiceApi, CatalogSnapshot, SnapshotCache};
