//! uni-admin - Admin back-office API
//!
//! Admin accounts with soft delete, Argon2id password hashing and HS256
//! bearer tokens, served over axum with a PostgreSQL store via SeaORM.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Admin entity, password value object, record validation
//! - **services**: Admin lifecycle, login and token issuance
//! - **infra**: Database, migrations and the admin repository
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! uni-admin serve --port 8080
//!
//! # Run migrations
//! uni-admin migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Admin, Password};
pub use errors::{AppError, AppResult};
