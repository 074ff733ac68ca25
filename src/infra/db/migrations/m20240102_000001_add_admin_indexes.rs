//! Migration: Email uniqueness among active admins and list ordering index.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

use super::m20240101_000001_create_admins_table::Admins;

/// Partial index: a soft-deleted admin's email may be registered again.
const UNIQUE_ACTIVE_EMAIL: &str = "CREATE UNIQUE INDEX IF NOT EXISTS idx_admins_active_email \
     ON admins (email_id) WHERE is_deleted = false";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(UNIQUE_ACTIVE_EMAIL)
            .await?;

        // Listing filters on the delete flag and sorts newest first
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_admins_is_deleted_created_at")
                    .table(Admins::Table)
                    .col(Admins::IsDeleted)
                    .col(Admins::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_admins_is_deleted_created_at")
                    .table(Admins::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_admins_active_email")
                    .table(Admins::Table)
                    .to_owned(),
            )
            .await
    }
}
