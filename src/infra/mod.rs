//! Infrastructure layer - External systems integration
//!
//! Database connection, migrations and the admin repository.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{AdminRepository, AdminStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockAdminRepository;
