use super::map_write_error;
use crate::domain::catalog::CategoryItem;
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use std::sync::Arc;
use uuid::Uuid;

pub struct CategoryItemRepository {
    pool: Arc<DbPool>,
}

impl CategoryItemRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// All items, newest first
    pub async fn list_all(&self) -> AppResult<Vec<CategoryItem>> {
        let pool = self.pool.as_ref();
        let items = sqlx::query_as::<_, CategoryItem>(
            r#"
            SELECT id, category_id, name, slug, description, image_url, link, created_at
            FROM category_items
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(items)
    }

    pub async fn list_by_category(&self, category_id: Uuid) -> AppResult<Vec<CategoryItem>> {
        let pool = self.pool.as_ref();
        let items = sqlx::query_as::<_, CategoryItem>(
            r#"
            SELECT id, category_id, name, slug, description, image_url, link, created_at
            FROM category_items
            WHERE category_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(category_id)
        .fetch_all(pool)
        .await?;

        Ok(items)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<CategoryItem>> {
        let pool = self.pool.as_ref();
        let item = sqlx::query_as::<_, CategoryItem>(
            r#"
            SELECT id, category_id, name, slug, description, image_url, link, created_at
            FROM category_items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(item)
    }

    pub async fn create(&self, item: &CategoryItem) -> AppResult<()> {
        let pool = self.pool.as_ref();
        sqlx::query(
            r#"
            INSERT INTO category_items (
                id, category_id, name, slug, description, image_url, link, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(item.id)
        .bind(item.category_id)
        .bind(&item.name)
        .bind(&item.slug)
        .bind(&item.description)
        .bind(&item.image_url)
        .bind(&item.link)
        .bind(item.created_at)
        .execute(pool)
        .await
        .map_err(|e| map_write_error(e, "Item slug already exists"))?;

        Ok(())
    }

    pub async fn update(&self, item: &CategoryItem) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query(
            r#"
            UPDATE category_items
            SET category_id = $1, name = $2, slug = $3, description = $4,
                image_url = $5, link = $6
            WHERE id = $7
            "#,
        )
        .bind(item.category_id)
        .bind(&item.name)
        .bind(&item.slug)
        .bind(&item.description)
        .bind(&item.image_url)
        .bind(&item.link)
        .bind(item.id)
        .execute(pool)
        .await
        .map_err(|e| map_write_error(e, "Item slug already exists"))?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query(
            r#"
            DELETE FROM category_items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
