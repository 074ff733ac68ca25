//! Admin repository implementation with soft delete support.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, SqlErr,
};
use uuid::Uuid;

use super::entities::admin::{self, insert_model, update_model, Entity as AdminEntity};
use crate::config::MSG_EMAIL_EXISTS;
use crate::domain::{Admin, NewAdmin};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Admin repository trait for dependency injection.
///
/// Every method ignores soft-deleted rows.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Find active admin by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Admin>>;

    /// Find active admin by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>>;

    /// Insert a new admin; the store assigns both timestamps
    async fn create(&self, admin: NewAdmin) -> AppResult<Admin>;

    /// Write all mutable fields of an active admin and refresh `updated_at`.
    /// Returns the row as stored.
    async fn update(&self, admin: Admin) -> AppResult<Admin>;

    /// Flag an active admin as deleted. Returns the number of rows affected.
    async fn soft_delete(&self, id: Uuid) -> AppResult<u64>;

    /// Active admins, newest first
    async fn list(&self, limit: u64, offset: u64) -> AppResult<Vec<Admin>>;

    /// Number of active admins
    async fn count(&self) -> AppResult<u64>;
}

/// SeaORM implementation of AdminRepository
pub struct AdminStore {
    db: DatabaseConnection,
}

impl AdminStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// A unique-index hit on insert/update means the email is taken by another
/// active admin (the index is partial on `is_deleted = false`).
fn map_write_err(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!("Unique constraint violation: {}", detail);
            AppError::conflict(MSG_EMAIL_EXISTS)
        }
        _ => AppError::from(err),
    }
}

#[async_trait]
impl AdminRepository for AdminStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Admin>> {
        let result = AdminEntity::find_by_id(id)
            .filter(admin::Column::IsDeleted.eq(false))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Admin::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        let result = AdminEntity::find()
            .filter(admin::Column::EmailId.eq(email))
            .filter(admin::Column::IsDeleted.eq(false))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Admin::from))
    }

    async fn create(&self, record: NewAdmin) -> AppResult<Admin> {
        let model = insert_model(record, Utc::now())
            .insert(&self.db)
            .await
            .map_err(map_write_err)?;

        Ok(Admin::from(model))
    }

    async fn update(&self, record: Admin) -> AppResult<Admin> {
        let model = AdminEntity::update(update_model(record, Utc::now()))
            .filter(admin::Column::IsDeleted.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => AppError::admin_not_found(),
                other => map_write_err(other),
            })?;

        Ok(Admin::from(model))
    }

    async fn soft_delete(&self, id: Uuid) -> AppResult<u64> {
        let result = AdminEntity::update_many()
            .col_expr(admin::Column::IsDeleted, Expr::value(true))
            .col_expr(admin::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(admin::Column::Id.eq(id))
            .filter(admin::Column::IsDeleted.eq(false))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }

    async fn list(&self, limit: u64, offset: u64) -> AppResult<Vec<Admin>> {
        let models = AdminEntity::find()
            .filter(admin::Column::IsDeleted.eq(false))
            .order_by_desc(admin::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Admin::from).collect())
    }

    async fn count(&self) -> AppResult<u64> {
        AdminEntity::find()
            .filter(admin::Column::IsDeleted.eq(false))
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
