pub mod booking;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod utils;

use std::sync::Arc;

use db::RideSession;

pub use config::Config;
pub use error::{AppError, AppResult};

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RideSession>,
    pub config: Config,
}

impl AppState {
    /// State backed by the built-in driver fixtures.
    pub fn new(config: Config) -> Self {
        Self {
            session: Arc::new(RideSession::with_mock_drivers()),
            config,
        }
    }
}
