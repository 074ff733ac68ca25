//! Admin service - Business rules for the admin lifecycle and login.
//!
//! Owns validation, email uniqueness, password hashing and token issuance;
//! persistence goes through [`AdminRepository`].

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::token_service::TokenService;
use crate::config::{HashingCost, MSG_EMAIL_EXISTS};
use crate::domain::{validate_admin, Admin, AdminPayload, NewAdmin, Password};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::AdminRepository;

/// Verified against when the email is unknown, so both login failures cost
/// one Argon2 verification.
const DUMMY_PASSWORD: &str = "uni-admin-dummy-password";

/// Successful login result
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub admin: Admin,
    pub token: String,
}

/// Admin service trait for dependency injection.
///
/// Soft-deleted admins are invisible to every operation.
#[async_trait]
pub trait AdminService: Send + Sync {
    /// Validate, check email uniqueness, hash the password and persist
    async fn create(&self, payload: AdminPayload) -> AppResult<Admin>;

    /// Get active admin by ID
    async fn read(&self, id: Uuid) -> AppResult<Admin>;

    /// Get active admin by email
    async fn read_by_email(&self, email: &str) -> AppResult<Admin>;

    /// Validate and merge the payload onto an active admin
    async fn update(&self, id: Uuid, payload: AdminPayload) -> AppResult<Admin>;

    /// Soft delete an active admin
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// One page of active admins (newest first) and the total active count
    async fn list(&self, limit: u64, offset: u64) -> AppResult<(Vec<Admin>, u64)>;

    /// Check credentials and issue a token
    async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome>;

    /// Issue a signed token for the admin id
    fn generate_token(&self, id: Uuid) -> AppResult<String>;
}

/// Concrete implementation of AdminService.
pub struct AdminManager {
    repo: Arc<dyn AdminRepository>,
    tokens: Arc<dyn TokenService>,
    hashing: HashingCost,
    dummy_hash: Password,
}

impl AdminManager {
    /// Build the service, hashing the dummy password up front.
    ///
    /// # Errors
    /// Fails when the Argon2 cost parameters are rejected.
    pub fn new(
        repo: Arc<dyn AdminRepository>,
        tokens: Arc<dyn TokenService>,
        hashing: HashingCost,
    ) -> AppResult<Self> {
        let dummy_hash = Password::hash(DUMMY_PASSWORD, &hashing)?;
        Ok(Self {
            repo,
            tokens,
            hashing,
            dummy_hash,
        })
    }

    /// Argon2 is CPU bound; keep it off the async workers.
    async fn hash_password(&self, plain_text: String) -> AppResult<Password> {
        let cost = self.hashing;
        tokio::task::spawn_blocking(move || Password::hash(&plain_text, &cost))
            .await
            .map_err(|e| AppError::internal(format!("Hashing task failed: {}", e)))?
    }

    async fn verify_password(&self, stored: Password, plain_text: &str) -> AppResult<bool> {
        let plain_text = plain_text.to_string();
        tokio::task::spawn_blocking(move || stored.verify(&plain_text))
            .await
            .map_err(|e| AppError::internal(format!("Verification task failed: {}", e)))
    }
}

#[async_trait]
impl AdminService for AdminManager {
    async fn create(&self, mut payload: AdminPayload) -> AppResult<Admin> {
        validate_admin(&payload)?;

        if self.repo.find_by_email(&payload.email_id).await?.is_some() {
            return Err(AppError::conflict(MSG_EMAIL_EXISTS));
        }

        let password = self
            .hash_password(std::mem::take(&mut payload.password))
            .await?;
        let admin = self
            .repo
            .create(NewAdmin::from_payload(payload, password))
            .await?;

        tracing::info!(admin_id = %admin.id, "Admin created");
        Ok(admin)
    }

    async fn read(&self, id: Uuid) -> AppResult<Admin> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn read_by_email(&self, email: &str) -> AppResult<Admin> {
        self.repo.find_by_email(email).await?.ok_or_not_found()
    }

    async fn update(&self, id: Uuid, mut payload: AdminPayload) -> AppResult<Admin> {
        validate_admin(&payload)?;

        let mut existing = self.repo.find_by_id(id).await?.ok_or_not_found()?;

        if payload.email_id != existing.email_id {
            if let Some(other) = self.repo.find_by_email(&payload.email_id).await? {
                if other.id != id {
                    return Err(AppError::conflict(MSG_EMAIL_EXISTS));
                }
            }
        }

        let password = self
            .hash_password(std::mem::take(&mut payload.password))
            .await?;
        existing.apply(payload, password);

        let updated = self.repo.update(existing).await?;
        tracing::info!(admin_id = %id, "Admin updated");
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        if self.repo.soft_delete(id).await? == 0 {
            return Err(AppError::admin_not_found());
        }
        tracing::info!(admin_id = %id, "Admin soft-deleted");
        Ok(())
    }

    async fn list(&self, limit: u64, offset: u64) -> AppResult<(Vec<Admin>, u64)> {
        let admins = self.repo.list(limit, offset).await?;
        let total = self.repo.count().await?;
        Ok((admins, total))
    }

    async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        let found = match self.read_by_email(email).await {
            Ok(admin) => Some(admin),
            Err(AppError::NotFound(_)) => None,
            Err(e) => return Err(e),
        };

        let stored = match &found {
            Some(admin) => admin.password.clone(),
            None => self.dummy_hash.clone(),
        };
        let password_valid = self.verify_password(stored, password).await?;

        let admin = match found {
            Some(admin) if password_valid => admin,
            _ => {
                tracing::debug!("Login rejected");
                return Err(AppError::InvalidCredentials);
            }
        };

        let token = self.generate_token(admin.id)?;
        tracing::info!(admin_id = %admin.id, "Admin logged in");
        Ok(LoginOutcome { admin, token })
    }

    fn generate_token(&self, id: Uuid) -> AppResult<String> {
        self.tokens.generate_token(id)
    }
}
