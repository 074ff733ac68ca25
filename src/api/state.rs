//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and configuration.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{AdminRepository, Database};
use crate::services::{AdminService, ServiceContainer, Services, TokenService};

/// Application state shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Admin lifecycle and login
    pub admin_service: Arc<dyn AdminService>,
    /// Bearer token verification
    pub token_service: Arc<dyn TokenService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state backed by the database.
    pub fn from_config(database: &Database, config: Config) -> AppResult<Self> {
        let container = Services::from_connection(database.get_connection(), &config)?;
        Ok(Self::from_container(&container, config))
    }

    /// Create application state around any admin repository.
    pub fn with_repository(repo: Arc<dyn AdminRepository>, config: Config) -> AppResult<Self> {
        let container = Services::with_repository(repo, &config)?;
        Ok(Self::from_container(&container, config))
    }

    /// Create new application state with manually injected services.
    pub fn new(
        admin_service: Arc<dyn AdminService>,
        token_service: Arc<dyn TokenService>,
        config: Config,
    ) -> Self {
        Self {
            admin_service,
            token_service,
            config: Arc::new(config),
        }
    }

    fn from_container(container: &impl ServiceContainer, config: Config) -> Self {
        Self::new(container.admins(), container.tokens(), config)
    }
}
