//! Service Container - Centralized service construction and access.
//!
//! Everything is built once from the configuration and shared behind `Arc`.

use std::sync::Arc;

use super::{AdminManager, AdminService, JwtTokenService, TokenService};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{AdminRepository, AdminStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get admin service
    fn admins(&self) -> Arc<dyn AdminService>;

    /// Get token service
    fn tokens(&self) -> Arc<dyn TokenService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    admin_service: Arc<dyn AdminService>,
    token_service: Arc<dyn TokenService>,
}

impl Services {
    /// Wire services around an arbitrary admin repository.
    pub fn with_repository(repo: Arc<dyn AdminRepository>, config: &Config) -> AppResult<Self> {
        let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(config));
        let admin_service = Arc::new(AdminManager::new(
            repo,
            token_service.clone(),
            config.hashing,
        )?);

        Ok(Self {
            admin_service,
            token_service,
        })
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> AppResult<Self> {
        Self::with_repository(Arc::new(AdminStore::new(db)), config)
    }
}

impl ServiceContainer for Services {
    fn admins(&self) -> Arc<dyn AdminService> {
        self.admin_service.clone()
    }

    fn tokens(&self) -> Arc<dyn TokenService> {
        self.token_service.clone()
    }
}
