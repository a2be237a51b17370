#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_service;
pub mod error;
pub mod session_manager;

pub use app_services::AppServices;
pub use catalog_service::CatalogService;
pub use error::{AppServicesError, SessionError};
pub use session_manager::{SessionManager, SessionSnapshot, USER_STORAGE_KEY};
