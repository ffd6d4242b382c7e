use super::map_write_error;
use crate::domain::catalog::Category;
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use std::sync::Arc;
use uuid::Uuid;

pub struct CategoryRepository {
    pool: Arc<DbPool>,
}

impl CategoryRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// All categories, oldest first
    pub async fn list_all(&self) -> AppResult<Vec<Category>> {
        let pool = self.pool.as_ref();
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, slug, description, image_url, created_at
            FROM categories
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(categories)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>> {
        let pool = self.pool.as_ref();
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, slug, description, image_url, created_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(category)
    }

    pub async fn create(&self, category: &Category) -> AppResult<()> {
        let pool = self.pool.as_ref();
        sqlx::query(
            r#"
            INSERT INTO categories (id, name, slug, description, image_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(&category.slug)
        .bind(&category.description)
        .bind(&category.image_url)
        .bind(category.created_at)
        .execute(pool)
        .await
        .map_err(|e| map_write_error(e, "Category slug already exists"))?;

        Ok(())
    }

    /// Overwrite the editable fields of a category
    pub async fn update(&self, category: &Category) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query(
            r#"
            UPDATE categories
            SET name = $1, slug = $2, description = $3, image_url = $4
            WHERE id = $5
            "#,
        )
        .bind(&category.name)
        .bind(&category.slug)
        .bind(&category.description)
        .bind(&category.image_url)
        .bind(category.id)
        .execute(pool)
        .await
        .map_err(|e| map_write_error(e, "Category slug already exists"))?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a category; its items keep existing without a category
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query(
            r#"
            DELETE FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
