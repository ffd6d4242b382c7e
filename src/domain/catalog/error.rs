use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for CatalogServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound(_) => CatalogServiceError::NotFound("resource"),
            _ => CatalogServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<CatalogServiceError> for AppError {
    fn from(err: CatalogServiceError) -> Self {
        match err {
            CatalogServiceError::NotFound(what) => AppError::NotFound(format!("{} not found", what)),
            CatalogServiceError::Dependency(msg) => AppError::Internal(msg),
            CatalogServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
