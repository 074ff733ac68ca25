//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod admin;

#[allow(unused_imports)]
pub use admin::{ActiveModel as AdminActiveModel, Entity as AdminEntity, Model as AdminModel};
