//! Bookshelf Book Catalog Manager
//!
//! A Rust REST API server for managing a catalog of books,
//! exposing list/create/update/delete over a single collection
//! and serving the web client from `public/`.

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
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
