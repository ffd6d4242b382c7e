use super::dto::NewContact;
use crate::error::AppResult;
use async_trait::async_trait;

/// Third-party service that stores newsletter and SMS contacts.
///
/// Implementations return `AppError::Conflict` when the contact is already
/// known and `AppError::ExternalService` for any other upstream failure.
#[async_trait]
pub trait ContactGateway: Send + Sync {
    async fn create_contact(&self, contact: &NewContact) -> AppResult<()>;
}
