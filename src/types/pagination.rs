//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Raw pagination query. Values are kept as text so that malformed input
/// falls back to defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Page number, 1-indexed (default 1)
    #[param(value_type = Option<u64>, example = 1)]
    pub page: Option<String>,
    /// Items per page (default 10, max 100)
    #[param(value_type = Option<u64>, example = 10)]
    pub page_size: Option<String>,
}

/// Sanitized pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: u64,
    pub page_size: u64,
}

impl PaginationParams {
    /// Calculate offset for database query.
    ///
    /// Saturates at `i64::MAX`, the largest offset the store can bind, so a
    /// huge page number yields an empty page.
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .min(i64::MAX as u64)
    }

    /// Get limit for database query
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl From<PaginationQuery> for PaginationParams {
    fn from(query: PaginationQuery) -> Self {
        Self {
            page: positive_or(query.page.as_deref(), DEFAULT_PAGE_NUMBER),
            page_size: positive_or(query.page_size.as_deref(), DEFAULT_PAGE_SIZE)
                .min(MAX_PAGE_SIZE),
        }
    }
}

/// Non-positive and unparsable values fall back to the default.
fn positive_or(value: Option<&str>, default: u64) -> u64 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v >= 1)
        .map(|v| v as u64)
        .unwrap_or(default)
}

/// Paginated list payload
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub list: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub total_count: u64,
}

impl<T> Paginated<T> {
    pub fn new(list: Vec<T>, params: PaginationParams, total_count: u64) -> Self {
        Self {
            list,
            page: params.page,
            page_size: params.page_size,
            total_count,
        }
    }
}
