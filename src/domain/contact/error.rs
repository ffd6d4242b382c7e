use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ContactServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("contact already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for ContactServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => ContactServiceError::Invalid(msg),
            AppError::Conflict(_) => ContactServiceError::AlreadyExists,
            _ => ContactServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<ContactServiceError> for AppError {
    fn from(err: ContactServiceError) -> Self {
        match err {
            ContactServiceError::Invalid(msg) => AppError::BadRequest(msg),
            ContactServiceError::AlreadyExists => {
                AppError::Conflict("Contact already exists".to_string())
            }
            ContactServiceError::Dependency(msg) => AppError::ExternalService(msg),
            ContactServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
