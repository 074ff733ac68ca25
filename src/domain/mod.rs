//! Domain layer - Core business entities and logic
//!
//! The admin entity, its request/response shapes, the password value
//! object and the record validator. Nothing here touches the database.

pub mod admin;
pub mod password;
pub mod validation;

pub use admin::{Admin, AdminPayload, AdminResponse, NewAdmin, Preferences, SocialProfiles};
pub use password::Password;
pub use validation::{is_valid_email, validate_admin};
