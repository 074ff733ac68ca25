//! JWT authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_SCHEME;
use crate::errors::AppError;

/// Identity of the caller, taken from the token subject.
///
/// Inserted into the request extensions by [`auth_middleware`]; holds the
/// raw subject string, which handlers parse as needed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedAdmin(pub String);

/// JWT authentication middleware.
///
/// Extracts and validates the bearer token from the Authorization header,
/// then injects the [`AuthenticatedAdmin`] into the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| AppError::unauthorized("Authorization header required"))?;

    let token = auth_header
        .to_str()
        .ok()
        .and_then(bearer_token)
        .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

    let claims = state.token_service.verify_token(token)?;

    request
        .extensions_mut()
        .insert(AuthenticatedAdmin(claims.sub));

    Ok(next.run(request).await)
}

/// `Bearer <token>`: exactly two space separated parts.
fn bearer_token(header: &str) -> Option<&str> {
    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme == BEARER_SCHEME && !token.is_empty() => {
            Some(token)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(bearer_token("Bearer"), None);
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Basic abc"), None);
        assert_eq!(bearer_token("bearer abc"), None);
        assert_eq!(bearer_token("Bearer a b"), None);
    }
}
