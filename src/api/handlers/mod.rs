//! HTTP request handlers.

pub mod admin_handler;
pub mod health_handler;

pub use admin_handler::admin_routes;
pub use health_handler::health_routes;
