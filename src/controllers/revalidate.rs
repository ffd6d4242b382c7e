use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::catalog::{CatalogService, CatalogServiceApi};
use crate::error::{AppError, AppResult};
use crate::infrastructure::auth::middleware::constant_time_eq;

#[derive(Debug, Deserialize)]
pub struct RevalidateQuery {
    pub secret: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RevalidateResponse {
    pub revalidated: bool,
    pub now: DateTime<Utc>,
}

pub struct RevalidateController {
    catalog_service: Arc<CatalogService>,
    secret: String,
}

impl RevalidateController {
    pub fn new(catalog_service: Arc<CatalogService>, secret: String) -> Self {
        Self {
            catalog_service,
            secret,
        }
    }

    /// POST /api/revalidate?secret=... - Webhook that drops cached catalog data
    pub async fn revalidate(
        State(controller): State<Arc<RevalidateController>>,
        Query(query): Query<RevalidateQuery>,
    ) -> AppResult<Json<RevalidateResponse>> {
        let secret = query.secret.unwrap_or_default();
        if controller.secret.is_empty() || !constant_time_eq(secret.as_bytes(), controller.secret.as_bytes()) {
            return Err(AppError::Unauthorized("Invalid revalidation secret".to_string()));
        }

        controller.catalog_service.invalidate().await;

        Ok(Json(RevalidateResponse {
            revalidated: true,
            now: Utc::now(),
        }))
    }
}
