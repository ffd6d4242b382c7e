use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::admin::{
    AdminService, AdminServiceApi, CategoryRequest, CoverItemRequest, ItemListQuery, ItemRequest,
    SellingLinkRequest,
};
use crate::domain::catalog::{Category, CategoryItem, CoverItem, SellingLink};
use crate::error::AppResult;

pub struct AdminController {
    admin_service: Arc<AdminService>,
}

impl AdminController {
    pub fn new(admin_service: Arc<AdminService>) -> Self {
        Self { admin_service }
    }

    /// GET /admin/categories
    pub async fn list_categories(
        State(controller): State<Arc<AdminController>>,
    ) -> AppResult<Json<Vec<Category>>> {
        let categories = controller.admin_service.list_categories().await?;
        Ok(Json(categories))
    }

    /// POST /admin/categories
    pub async fn create_category(
        State(controller): State<Arc<AdminController>>,
        Json(request): Json<CategoryRequest>,
    ) -> AppResult<(StatusCode, Json<Category>)> {
        let category = controller.admin_service.create_category(request).await?;
        Ok((StatusCode::CREATED, Json(category)))
    }

    /// PUT /admin/categories/{id}
    pub async fn update_category(
        State(controller): State<Arc<AdminController>>,
        Path(id): Path<Uuid>,
        Json(request): Json<CategoryRequest>,
    ) -> AppResult<Json<Category>> {
        let category = controller.admin_service.update_category(id, request).await?;
        Ok(Json(category))
    }

    /// DELETE /admin/categories/{id}
    pub async fn delete_category(
        State(controller): State<Arc<AdminController>>,
        Path(id): Path<Uuid>,
    ) -> AppResult<StatusCode> {
        controller.admin_service.delete_category(id).await?;
        Ok(StatusCode::NO_CONTENT)
    }

    /// GET /admin/items?category_id=...
    pub async fn list_items(
        State(controller): State<Arc<AdminController>>,
        Query(query): Query<ItemListQuery>,
    ) -> AppResult<Json<Vec<CategoryItem>>> {
        let items = controller.admin_service.list_items(query.category_id).await?;
        Ok(Json(items))
    }

    /// POST /admin/items
    pub async fn create_item(
        State(controller): State<Arc<AdminController>>,
        Json(request): Json<ItemRequest>,
    ) -> AppResult<(StatusCode, Json<CategoryItem>)> {
        let item = controller.admin_service.create_item(request).await?;
        Ok((StatusCode::CREATED, Json(item)))
    }

    /// PUT /admin/items/{id}
    pub async fn update_item(
        State(controller): State<Arc<AdminController>>,
        Path(id): Path<Uuid>,
        Json(request): Json<ItemRequest>,
    ) -> AppResult<Json<CategoryItem>> {
        let item = controller.admin_service.update_item(id, request).await?;
        Ok(Json(item))
    }

    /// DELETE /admin/items/{id}
    pub async fn delete_item(
        State(controller): State<Arc<AdminController>>,
        Path(id): Path<Uuid>,
    ) -> AppResult<StatusCode> {
        controller.admin_service.delete_item(id).await?;
        Ok(StatusCode::NO_CONTENT)
    }

    /// GET /admin/covers
    pub async fn list_covers(
        State(controller): State<Arc<AdminController>>,
    ) -> AppResult<Json<Vec<CoverItem>>> {
        let covers = controller.admin_service.list_covers().await?;
        Ok(Json(covers))
    }

    /// POST /admin/covers
    pub async fn create_cover(
        State(controller): State<Arc<AdminController>>,
        Json(request): Json<CoverItemRequest>,
    ) -> AppResult<(StatusCode, Json<CoverItem>)> {
        let cover = controller.admin_service.create_cover(request).await?;
        Ok((StatusCode::CREATED, Json(cover)))
    }

    /// DELETE /admin/covers/{id}
    pub async fn delete_cover(
        State(controller): State<Arc<AdminController>>,
        Path(id): Path<Uuid>,
    ) -> AppResult<StatusCode> {
        controller.admin_service.delete_cover(id).await?;
        Ok(StatusCode::NO_CONTENT)
    }

    /// GET /admin/selling-links
    pub async fn list_selling_links(
        State(controller): State<Arc<AdminController>>,
    ) -> AppResult<Json<Vec<SellingLink>>> {
        let links = controller.admin_service.list_selling_links().await?;
        Ok(Json(links))
    }

    /// POST /admin/selling-links
    pub async fn create_selling_link(
        State(controller): State<Arc<AdminController>>,
        Json(request): Json<SellingLinkRequest>,
    ) -> AppResult<(StatusCode, Json<SellingLink>)> {
        let link = controller.admin_service.create_selling_link(request).await?;
        Ok((StatusCode::CREATED, Json(link)))
    }

    /// DELETE /admin/selling-links/{id}
    pub async fn delete_selling_link(
        State(controller): State<Arc<AdminController>>,
        Path(id): Path<Uuid>,
    ) -> AppResult<StatusCode> {
        controller.admin_service.delete_selling_link(id).await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
