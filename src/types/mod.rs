//! Shared types (pagination, response envelopes).

mod pagination;
mod response;

pub use pagination::{Paginated, PaginationParams, PaginationQuery};
pub use response::{ApiResponse, Created, NoContent};
