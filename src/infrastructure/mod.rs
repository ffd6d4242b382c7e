pub mod auth;
pub mod config;
pub mod contacts;
pub mod db;
pub mod http;
pub mod repositories;
