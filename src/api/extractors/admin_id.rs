//! Path extractor for admin identifiers.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

use crate::config::MSG_INVALID_ID;
use crate::errors::AppError;

/// The `:id` path segment parsed as a UUID; anything else is a 400 "Invalid ID".
#[derive(Debug, Clone, Copy)]
pub struct AdminId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for AdminId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request(MSG_INVALID_ID))?;

        Uuid::parse_str(&raw)
            .map(AdminId)
            .map_err(|_| AppError::bad_request(MSG_INVALID_ID))
    }
}
