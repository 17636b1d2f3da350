//! Bookshelf
//!
//! A small REST JSON server keeping an in-memory inventory of books, with
//! checkout and return of individual copies.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let services = services::Services::new(&config.inventory);
        Self {
            services: Arc::new(services),
        }
    }
}
