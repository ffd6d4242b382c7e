pub mod category_item_repository;
pub mod category_repository;
pub mod cover_item_repository;
pub mod selling_link_repository;

pub use category_item_repository::CategoryItemRepository;
pub use category_repository::CategoryRepository;
pub use cover_item_repository::CoverItemRepository;
pub use selling_link_repository::SellingLinkRepository;

use crate::error::AppError;

/// Map an insert/update failure, turning unique violations into conflicts
pub(crate) fn map_write_error(e: sqlx::Error, conflict_message: &str) -> AppError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_unique_violation() {
            return AppError::Conflict(conflict_message.to_string());
        }
    }
    AppError::Database(e)
}
