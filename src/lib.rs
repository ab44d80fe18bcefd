pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;

use std::sync::Arc;

use crate::repository::MovieRepository;

#[derive(Clone)]
pub struct AppState {
    pub movies: Arc<dyn MovieRepository>,
}

impl AppState {
    pub fn new(movies: Arc<dyn MovieRepository>) -> Self {
        Self { movies }
    }
}
