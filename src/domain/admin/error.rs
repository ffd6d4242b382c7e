use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum AdminServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for AdminServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => AdminServiceError::Invalid(msg),
            AppError::NotFound(_) => AdminServiceError::NotFound("Resource"),
            AppError::Conflict(msg) => AdminServiceError::Conflict(msg),
            _ => AdminServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<AdminServiceError> for AppError {
    fn from(err: AdminServiceError) -> Self {
        match err {
            AdminServiceError::Invalid(msg) => AppError::BadRequest(msg),
            AdminServiceError::NotFound(what) => AppError::NotFound(format!("{} not found", what)),
            AdminServiceError::Conflict(msg) => AppError::Conflict(msg),
            AdminServiceError::Dependency(msg) => AppError::Internal(msg),
            AdminServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
