pub mod dto;
pub mod error;
pub mod service;
pub mod validation;

pub use dto::{
    CategoryRequest, CoverItemRequest, ItemListQuery, ItemRequest, SellingLinkRequest,
};
pub use error::AdminServiceError;
pub use service::{AdminService, AdminServiceApi};
