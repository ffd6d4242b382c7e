pub mod dto;
pub mod error;
pub mod gateway;
pub mod service;

pub use dto::{ContactRequest, ContactResponse, NewContact};
pub use error::ContactServiceError;
pub use gateway::ContactGateway;
pub use service::{ContactService, ContactServiceApi};
