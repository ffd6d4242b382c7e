use super::dto::{CategoryRequest, CoverItemRequest, ItemRequest, SellingLinkRequest};
use super::error::AdminServiceError;
use super::validation::{normalize, resolve_slug, validate_url};
use crate::domain::catalog::{
    CatalogService, CatalogServiceApi, Category, CategoryItem, CoverItem, SellingLink,
};
use crate::infrastructure::repositories::{
    CategoryItemRepository, CategoryRepository, CoverItemRepository, SellingLinkRepository,
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct AdminService {
    category_repo: Arc<CategoryRepository>,
    item_repo: Arc<CategoryItemRepository>,
    cover_repo: Arc<CoverItemRepository>,
    selling_link_repo: Arc<SellingLinkRepository>,
    catalog: Arc<CatalogService>,
}

impl AdminService {
    pub fn new(
        category_repo: Arc<CategoryRepository>,
        item_repo: Arc<CategoryItemRepository>,
        cover_repo: Arc<CoverItemRepository>,
        selling_link_repo: Arc<SellingLinkRepository>,
        catalog: Arc<CatalogService>,
    ) -> Self {
        Self {
            category_repo,
            item_repo,
            cover_repo,
            selling_link_repo,
            catalog,
        }
    }
}

#[async_trait]
pub trait AdminServiceApi: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, AdminServiceError>;
    async fn create_category(&self, request: CategoryRequest)
        -> Result<Category, AdminServiceError>;
    async fn update_category(
        &self,
        id: Uuid,
        request: CategoryRequest,
    ) -> Result<Category, AdminServiceError>;
    async fn delete_category(&self, id: Uuid) -> Result<(), AdminServiceError>;

    async fn list_items(
        &self,
        category_id: Option<Uuid>,
    ) -> Result<Vec<CategoryItem>, AdminServiceError>;
    async fn create_item(&self, request: ItemRequest) -> Result<CategoryItem, AdminServiceError>;
    async fn update_item(
        &self,
        id: Uuid,
        request: ItemRequest,
    ) -> Result<CategoryItem, AdminServiceError>;
    async fn delete_item(&self, id: Uuid) -> Result<(), AdminServiceError>;

    async fn list_covers(&self) -> Result<Vec<CoverItem>, AdminServiceError>;
    async fn create_cover(&self, request: CoverItemRequest)
        -> Result<CoverItem, AdminServiceError>;
    async fn delete_cover(&self, id: Uuid) -> Result<(), AdminServiceError>;

    async fn list_selling_links(&self) -> Result<Vec<SellingLink>, AdminServiceError>;
    async fn create_selling_link(
        &self,
        request: SellingLinkRequest,
    ) -> Result<SellingLink, AdminServiceError>;
    async fn delete_selling_link(&self, id: Uuid) -> Result<(), AdminServiceError>;
}

#[async_trait]
impl AdminServiceApi for AdminService {
    async fn list_categories(&self) -> Result<Vec<Category>, AdminServiceError> {
        Ok(self.category_repo.list_all().await?)
    }

    async fn create_category(
        &self,
        request: CategoryRequest,
    ) -> Result<Category, AdminServiceError> {
        let category = build_category(Uuid::new_v4(), Utc::now(), request)?;

        self.category_repo.create(&category).await?;
        tracing::info!(category_id = %category.id, slug = %category.slug, "Category created");

        self.catalog.invalidate().await;
        Ok(category)
    }

    async fn update_category(
        &self,
        id: Uuid,
        request: CategoryRequest,
    ) -> Result<Category, AdminServiceError> {
        let existing = self
            .category_repo
            .find_by_id(id)
            .await?
            .ok_or(AdminServiceError::NotFound("Category"))?;

        let category = build_category(existing.id, existing.created_at, request)?;
        if !self.category_repo.update(&category).await? {
            return Err(AdminServiceError::NotFound("Category"));
        }
        tracing::info!(category_id = %id, "Category updated");

        self.catalog.invalidate().await;
        Ok(category)
    }

    async fn delete_category(&self, id: Uuid) -> Result<(), AdminServiceError> {
        if !self.category_repo.delete(id).await? {
            return Err(AdminServiceError::NotFound("Category"));
        }
        tracing::info!(category_id = %id, "Category deleted");

        self.catalog.invalidate().await;
        Ok(())
    }

    async fn list_items(
        &self,
        category_id: Option<Uuid>,
    ) -> Result<Vec<CategoryItem>, AdminServiceError> {
        let items = match category_id {
            Some(category_id) => self.item_repo.list_by_category(category_id).await?,
            None => self.item_repo.list_all().await?,
        };
        Ok(items)
    }

    async fn create_item(&self, request: ItemRequest) -> Result<CategoryItem, AdminServiceError> {
        self.ensure_category_exists(request.category_id).await?;
        let item = build_item(Uuid::new_v4(), Utc::now(), request)?;

        self.item_repo.create(&item).await?;
        tracing::info!(item_id = %item.id, category_id = ?item.category_id, "Item created");

        self.catalog.invalidate().await;
        Ok(item)
    }

    async fn update_item(
        &self,
        id: Uuid,
        request: ItemRequest,
    ) -> Result<CategoryItem, AdminServiceError> {
        let existing = self
            .item_repo
            .find_by_id(id)
            .await?
            .ok_or(AdminServiceError::NotFound("Item"))?;
        self.ensure_category_exists(request.category_id).await?;

        let item = build_item(existing.id, existing.created_at, request)?;
        if !self.item_repo.update(&item).await? {
            return Err(AdminServiceError::NotFound("Item"));
        }
        tracing::info!(item_id = %id, "Item updated");

        self.catalog.invalidate().await;
        Ok(item)
    }

    async fn delete_item(&self, id: Uuid) -> Result<(), AdminServiceError> {
        if !self.item_repo.delete(id).await? {
            return Err(AdminServiceError::NotFound("Item"));
        }
        tracing::info!(item_id = %id, "Item deleted");

        self.catalog.invalidate().await;
        Ok(())
    }

    async fn list_covers(&self) -> Result<Vec<CoverItem>, AdminServiceError> {
        Ok(self.cover_repo.list_all().await?)
    }

    async fn create_cover(
        &self,
        request: CoverItemRequest,
    ) -> Result<CoverItem, AdminServiceError> {
        let name = normalize(request.name);
        let slug = resolve_slug(request.slug.as_deref(), name.as_deref())?;
        let image_url = normalize(request.image_url);
        let link = normalize(request.link);
        validate_url("image_url", image_url.as_deref())?;
        validate_url("link", link.as_deref())?;

        let cover = CoverItem {
            id: Uuid::new_v4(),
            name,
            slug,
            image_url,
            link,
            created_at: Utc::now(),
        };

        self.cover_repo.create(&cover).await?;
        tracing::info!(cover_id = %cover.id, "Cover item created");

        self.catalog.invalidate().await;
        Ok(cover)
    }

    async fn delete_cover(&self, id: Uuid) -> Result<(), AdminServiceError> {
        if !self.cover_repo.delete(id).await? {
            return Err(AdminServiceError::NotFound("Cover item"));
        }
        tracing::info!(cover_id = %id, "Cover item deleted");

        self.catalog.invalidate().await;
        Ok(())
    }

    async fn list_selling_links(&self) -> Result<Vec<SellingLink>, AdminServiceError> {
        Ok(self.selling_link_repo.list_all().await?)
    }

    async fn create_selling_link(
        &self,
        request: SellingLinkRequest,
    ) -> Result<SellingLink, AdminServiceError> {
        let img_url = normalize(request.img_url);
        let link = normalize(request.link);
        validate_url("img_url", img_url.as_deref())?;
        validate_url("link", link.as_deref())?;

        if link.is_none() {
            tracing::warn!("Selling link saved without a target; it will not be shown");
        }

        let selling_link = SellingLink {
            id: Uuid::new_v4(),
            name: normalize(request.name),
            descrizione: normalize(request.descrizione),
            img_url,
            link,
            calltoaction: normalize(request.calltoaction),
            created_at: Utc::now(),
        };

        self.selling_link_repo.create(&selling_link).await?;
        tracing::info!(selling_link_id = %selling_link.id, "Selling link created");

        self.catalog.invalidate().await;
        Ok(selling_link)
    }

    async fn delete_selling_link(&self, id: Uuid) -> Result<(), AdminServiceError> {
        if !self.selling_link_repo.delete(id).await? {
            return Err(AdminServiceError::NotFound("Selling link"));
        }
        tracing::info!(selling_link_id = %id, "Selling link deleted");

        self.catalog.invalidate().await;
        Ok(())
    }
}

impl AdminService {
    async fn ensure_category_exists(&self, category_id: Option<Uuid>) -> Result<(), AdminServiceError> {
        let Some(category_id) = category_id else {
            return Ok(());
        };

        self.category_repo
            .find_by_id(category_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AdminServiceError::Invalid("Unknown category_id".to_string()))
    }
}

fn build_category(
    id: Uuid,
    created_at: chrono::DateTime<Utc>,
    request: CategoryRequest,
) -> Result<Category, AdminServiceError> {
    let name = request.name.trim().to_string();
    if name.is_empty() {
        return Err(AdminServiceError::Invalid("Category name is required".to_string()));
    }

    let slug = resolve_slug(request.slug.as_deref(), Some(&name))?
        .ok_or_else(|| AdminServiceError::Invalid("Category slug is required".to_string()))?;
    let image_url = normalize(request.image_url);
    validate_url("image_url", image_url.as_deref())?;

    Ok(Category {
        id,
        name,
        slug,
        description: normalize(request.description),
        image_url,
        created_at,
    })
}

fn build_item(
    id: Uuid,
    created_at: chrono::DateTime<Utc>,
    request: ItemRequest,
) -> Result<CategoryItem, AdminServiceError> {
    let name = normalize(request.name);
    let slug = resolve_slug(request.slug.as_deref(), name.as_deref())?;
    let image_url = normalize(request.image_url);
    let link = normalize(request.link);
    validate_url("image_url", image_url.as_deref())?;
    validate_url("link", link.as_deref())?;

    Ok(CategoryItem {
        id,
        category_id: request.category_id,
        name,
        slug,
        description: normalize(request.description),
        image_url,
        link,
        created_at,
    })
}
