pub mod auth_service;
pub mod data_stores;

pub use auth_service::AuthService;
