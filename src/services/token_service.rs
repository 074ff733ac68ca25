//! Token service - HS256 JWT issuance and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{Config, DEFAULT_JWT_EXPIRATION_HOURS, MAX_JWT_EXPIRATION_HOURS};
use crate::errors::{AppError, AppResult};

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Admin identifier
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Shape used while decoding, so a token with a valid signature but a
/// missing or non-string subject can be told apart from a bad token.
#[derive(Debug, Deserialize)]
struct RawClaims {
    sub: Option<serde_json::Value>,
    iat: Option<i64>,
    exp: i64,
}

/// Token service trait for dependency injection.
pub trait TokenService: Send + Sync {
    /// Sign a token whose subject is the admin id
    fn generate_token(&self, admin_id: Uuid) -> AppResult<String>;

    /// Verify signature, algorithm and expiry, then extract the claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// HMAC-SHA256 implementation keyed by the configured secret.
pub struct JwtTokenService {
    secret: Option<Vec<u8>>,
    lifetime: Duration,
}

impl JwtTokenService {
    pub fn new(config: &Config) -> Self {
        Self {
            secret: config.jwt_secret_bytes().map(<[u8]>::to_vec),
            lifetime: Duration::hours(lifetime_hours(config.jwt_expiration_hours)),
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation
    }
}

/// Non-positive lifetimes fall back to the default; long ones are capped.
fn lifetime_hours(hours: i64) -> i64 {
    if hours < 1 {
        DEFAULT_JWT_EXPIRATION_HOURS
    } else {
        hours.min(MAX_JWT_EXPIRATION_HOURS)
    }
}

impl TokenService for JwtTokenService {
    fn generate_token(&self, admin_id: Uuid) -> AppResult<String> {
        let secret = self
            .secret
            .as_deref()
            .ok_or_else(|| AppError::config("JWT secret is not configured"))?;

        let now = Utc::now();
        let claims = Claims {
            sub: admin_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .map_err(|e| AppError::internal(format!("Failed to sign token: {}", e)))
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let Some(secret) = self.secret.as_deref() else {
            tracing::warn!("Rejecting bearer token: JWT secret is not configured");
            return Err(AppError::unauthorized("Invalid or expired token"));
        };

        let data = decode::<RawClaims>(
            token,
            &DecodingKey::from_secret(secret),
            &Self::validation(),
        )?;

        match data.claims.sub {
            Some(serde_json::Value::String(sub)) => Ok(Claims {
                sub,
                iat: data.claims.iat.unwrap_or_default(),
                exp: data.claims.exp,
            }),
            _ => Err(AppError::unauthorized("Invalid token claims")),
        }
    }
}
