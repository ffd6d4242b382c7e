use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::domain::catalog::{
    CatalogService, CatalogServiceApi, Category, CategoryPageResponse, CategorySection,
    ContentItem, HomeResponse, SiteResponse,
};
use crate::error::AppResult;

pub struct CatalogController {
    catalog_service: Arc<CatalogService>,
    analytics_tag_id: Option<String>,
}

impl CatalogController {
    pub fn new(catalog_service: Arc<CatalogService>, analytics_tag_id: Option<String>) -> Self {
        Self {
            catalog_service,
            analytics_tag_id,
        }
    }

    /// GET /api/site - Public site settings
    pub async fn site(State(controller): State<Arc<CatalogController>>) -> Json<SiteResponse> {
        Json(SiteResponse {
            analytics_tag_id: controller.analytics_tag_id.clone(),
        })
    }

    /// GET /api/catalog/home - Cover carousel and categories
    pub async fn home(
        State(controller): State<Arc<CatalogController>>,
    ) -> AppResult<Json<HomeResponse>> {
        let home = controller.catalog_service.home().await?;
        Ok(Json(home))
    }

    /// GET /api/catalog/categories
    pub async fn list_categories(
        State(controller): State<Arc<CatalogController>>,
    ) -> AppResult<Json<Vec<Category>>> {
        let categories = controller.catalog_service.list_categories().await?;
        Ok(Json(categories))
    }

    /// GET /api/catalog/categories/{slug} - Category grid with banners
    pub async fn category_page(
        State(controller): State<Arc<CatalogController>>,
        Path(slug): Path<String>,
    ) -> AppResult<Json<CategoryPageResponse>> {
        let page = controller.catalog_service.category_page(&slug).await?;
        Ok(Json(page))
    }

    /// GET /api/catalog/sections - Every category with its grid
    pub async fn sections(
        State(controller): State<Arc<CatalogController>>,
    ) -> AppResult<Json<Vec<CategorySection>>> {
        let sections = controller.catalog_service.sections().await?;
        Ok(Json(sections))
    }

    /// GET /api/catalog/products/{slug} - Product detail
    pub async fn product(
        State(controller): State<Arc<CatalogController>>,
        Path(slug): Path<String>,
    ) -> AppResult<Json<ContentItem>> {
        let product = controller.catalog_service.find_product(&slug).await?;
        Ok(Json(product))
    }
}
