use crate::domain::catalog::SellingLink;
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use std::sync::Arc;
use uuid::Uuid;

pub struct SellingLinkRepository {
    pool: Arc<DbPool>,
}

impl SellingLinkRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Oldest first, which is the order banners cycle through
    pub async fn list_all(&self) -> AppResult<Vec<SellingLink>> {
        let pool = self.pool.as_ref();
        let links = sqlx::query_as::<_, SellingLink>(
            r#"
            SELECT id, name, descrizione, img_url, link, calltoaction, created_at
            FROM selling_links
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(links)
    }

    pub async fn create(&self, link: &SellingLink) -> AppResult<()> {
        let pool = self.pool.as_ref();
        sqlx::query(
            r#"
            INSERT INTO selling_links (
                id, name, descrizione, img_url, link, calltoaction, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(link.id)
        .bind(&link.name)
        .bind(&link.descrizione)
        .bind(&link.img_url)
        .bind(&link.link)
        .bind(&link.calltoaction)
        .bind(link.created_at)
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query("DELETE FROM selling_links WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
