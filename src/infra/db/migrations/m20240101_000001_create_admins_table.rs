//! Migration: Create admins table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Admins::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Admins::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Admins::FirstName).string().not_null())
                    .col(ColumnDef::new(Admins::LastName).string().not_null())
                    .col(ColumnDef::new(Admins::UserName).string().null())
                    .col(ColumnDef::new(Admins::Mobile).string().null())
                    .col(ColumnDef::new(Admins::EmailId).string().not_null())
                    .col(ColumnDef::new(Admins::Password).string().not_null())
                    .col(ColumnDef::new(Admins::Photo).string().null())
                    .col(
                        ColumnDef::new(Admins::EmailVerificationStatus)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Admins::VerificationToken).string().null())
                    .col(
                        ColumnDef::new(Admins::VerificationTokenCreationTime)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Admins::DateOfBirth).date().null())
                    .col(ColumnDef::new(Admins::Gender).string().null())
                    .col(ColumnDef::new(Admins::Website).string().null())
                    .col(ColumnDef::new(Admins::Address).text().null())
                    .col(ColumnDef::new(Admins::FbId).string().null())
                    .col(ColumnDef::new(Admins::TwitterId).string().null())
                    .col(ColumnDef::new(Admins::InstagramId).string().null())
                    .col(ColumnDef::new(Admins::GithubId).string().null())
                    .col(ColumnDef::new(Admins::Codepen).string().null())
                    .col(ColumnDef::new(Admins::Slack).string().null())
                    .col(ColumnDef::new(Admins::CountryCode).string().null())
                    .col(ColumnDef::new(Admins::TimeZone).string().null())
                    .col(ColumnDef::new(Admins::DateFormat).string().null())
                    .col(ColumnDef::new(Admins::Currency).string().null())
                    .col(
                        ColumnDef::new(Admins::IsThemeDark)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Admins::TableColumnSettings).json_binary().null())
                    .col(ColumnDef::new(Admins::AddedBy).uuid().null())
                    .col(
                        ColumnDef::new(Admins::Status)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Admins::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Admins::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Admins::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_admins_added_by")
                            .from(Admins::Table, Admins::AddedBy)
                            .to(Admins::Table, Admins::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Admins::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(super) enum Admins {
    Table,
    Id,
    FirstName,
    LastName,
    UserName,
    Mobile,
    EmailId,
    Password,
    Photo,
    EmailVerificationStatus,
    VerificationToken,
    VerificationTokenCreationTime,
    DateOfBirth,
    Gender,
    Website,
    Address,
    FbId,
    TwitterId,
    InstagramId,
    GithubId,
    Codepen,
    Slack,
    CountryCode,
    TimeZone,
    DateFormat,
    Currency,
    IsThemeDark,
    TableColumnSettings,
    AddedBy,
    Status,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}
