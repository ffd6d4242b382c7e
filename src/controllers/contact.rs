use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::domain::contact::{ContactRequest, ContactResponse, ContactService, ContactServiceApi};
use crate::error::AppResult;

pub struct ContactController {
    contact_service: Arc<ContactService>,
}

impl ContactController {
    pub fn new(contact_service: Arc<ContactService>) -> Self {
        Self { contact_service }
    }

    /// POST /api/contacts - Newsletter / SMS signup
    pub async fn subscribe(
        State(controller): State<Arc<ContactController>>,
        Json(request): Json<ContactRequest>,
    ) -> AppResult<(StatusCode, Json<ContactResponse>)> {
        let contact = controller.contact_service.subscribe(request).await?;
        Ok((StatusCode::CREATED, Json(contact)))
    }
}
