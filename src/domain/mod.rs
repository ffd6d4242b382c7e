pub mod admin;
pub mod catalog;
pub mod contact;
pub mod listing;
