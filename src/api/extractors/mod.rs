//! Custom request extractors mapping rejections onto [`AppError`](crate::errors::AppError).

mod admin_id;
mod validated_json;

pub use admin_id::AdminId;
pub use validated_json::{JsonBody, ValidatedJson};
