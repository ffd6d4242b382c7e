use super::map_write_error;
use crate::domain::catalog::CoverItem;
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use std::sync::Arc;
use uuid::Uuid;

pub struct CoverItemRepository {
    pool: Arc<DbPool>,
}

impl CoverItemRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> AppResult<Vec<CoverItem>> {
        let pool = self.pool.as_ref();
        let covers = sqlx::query_as::<_, CoverItem>(
            r#"
            SELECT id, name, slug, image_url, link, created_at
            FROM cover_items
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(covers)
    }

    pub async fn create(&self, cover: &CoverItem) -> AppResult<()> {
        let pool = self.pool.as_ref();
        sqlx::query(
            r#"
            INSERT INTO cover_items (id, name, slug, image_url, link, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(cover.id)
        .bind(&cover.name)
        .bind(&cover.slug)
        .bind(&cover.image_url)
        .bind(&cover.link)
        .bind(cover.created_at)
        .execute(pool)
        .await
        .map_err(|e| map_write_error(e, "Cover slug already exists"))?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query("DELETE FROM cover_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
