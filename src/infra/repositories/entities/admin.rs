//! Admin database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::domain::{Admin, NewAdmin, Password, Preferences, SocialProfiles};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "admins")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub user_name: Option<String>,
    pub mobile: Option<String>,
    pub email_id: String,
    /// Argon2 PHC string
    pub password: String,
    pub photo: Option<String>,
    pub email_verification_status: bool,
    pub verification_token: Option<String>,
    pub verification_token_creation_time: Option<DateTimeUtc>,
    pub date_of_birth: Option<Date>,
    pub gender: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub fb_id: Option<String>,
    pub twitter_id: Option<String>,
    pub instagram_id: Option<String>,
    pub github_id: Option<String>,
    pub codepen: Option<String>,
    pub slack: Option<String>,
    pub country_code: Option<String>,
    pub time_zone: Option<String>,
    pub date_format: Option<String>,
    pub currency: Option<String>,
    pub is_theme_dark: bool,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub table_column_settings: Option<Json>,
    pub added_by: Option<Uuid>,
    pub status: bool,
    /// Soft delete flag (rows are never physically removed)
    pub is_deleted: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Admin {
    fn from(model: Model) -> Self {
        Admin {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            user_name: model.user_name,
            mobile: model.mobile,
            email_id: model.email_id,
            password: Password::from_hash(model.password),
            photo: model.photo,
            email_verification_status: model.email_verification_status,
            verification_token: model.verification_token,
            verification_token_creation_time: model.verification_token_creation_time,
            date_of_birth: model.date_of_birth,
            gender: model.gender,
            website: model.website,
            address: model.address,
            social: SocialProfiles {
                fb_id: model.fb_id,
                twitter_id: model.twitter_id,
                instagram_id: model.instagram_id,
                github_id: model.github_id,
                codepen: model.codepen,
                slack: model.slack,
            },
            preferences: Preferences {
                country_code: model.country_code,
                time_zone: model.time_zone,
                date_format: model.date_format,
                currency: model.currency,
                is_theme_dark: model.is_theme_dark,
                table_column_settings: model.table_column_settings,
            },
            added_by: model.added_by,
            status: model.status,
            is_deleted: model.is_deleted,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Insert model with store-assigned timestamps.
pub fn insert_model(admin: NewAdmin, now: DateTimeUtc) -> ActiveModel {
    ActiveModel {
        id: Set(admin.id),
        first_name: Set(admin.first_name),
        last_name: Set(admin.last_name),
        user_name: Set(admin.user_name),
        mobile: Set(admin.mobile),
        email_id: Set(admin.email_id),
        password: Set(admin.password.into_string()),
        photo: Set(admin.photo),
        email_verification_status: Set(admin.email_verification_status),
        verification_token: Set(admin.verification_token),
        verification_token_creation_time: Set(admin.verification_token_creation_time),
        date_of_birth: Set(admin.date_of_birth),
        gender: Set(admin.gender),
        website: Set(admin.website),
        address: Set(admin.address),
        fb_id: Set(admin.social.fb_id),
        twitter_id: Set(admin.social.twitter_id),
        instagram_id: Set(admin.social.instagram_id),
        github_id: Set(admin.social.github_id),
        codepen: Set(admin.social.codepen),
        slack: Set(admin.social.slack),
        country_code: Set(admin.preferences.country_code),
        time_zone: Set(admin.preferences.time_zone),
        date_format: Set(admin.preferences.date_format),
        currency: Set(admin.preferences.currency),
        is_theme_dark: Set(admin.preferences.is_theme_dark),
        table_column_settings: Set(admin.preferences.table_column_settings),
        added_by: Set(admin.added_by),
        status: Set(admin.status),
        is_deleted: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

/// Full-row update model. `created_at` and `is_deleted` are left out so an
/// update can never rewrite them.
pub fn update_model(admin: Admin, now: DateTimeUtc) -> ActiveModel {
    ActiveModel {
        id: Set(admin.id),
        first_name: Set(admin.first_name),
        last_name: Set(admin.last_name),
        user_name: Set(admin.user_name),
        mobile: Set(admin.mobile),
        email_id: Set(admin.email_id),
        password: Set(admin.password.into_string()),
        photo: Set(admin.photo),
        email_verification_status: Set(admin.email_verification_status),
        verification_token: Set(admin.verification_token),
        verification_token_creation_time: Set(admin.verification_token_creation_time),
        date_of_birth: Set(admin.date_of_birth),
        gender: Set(admin.gender),
        website: Set(admin.website),
        address: Set(admin.address),
        fb_id: Set(admin.social.fb_id),
        twitter_id: Set(admin.social.twitter_id),
        instagram_id: Set(admin.social.instagram_id),
        github_id: Set(admin.social.github_id),
        codepen: Set(admin.social.codepen),
        slack: Set(admin.social.slack),
        country_code: Set(admin.preferences.country_code),
        time_zone: Set(admin.preferences.time_zone),
        date_format: Set(admin.preferences.date_format),
        currency: Set(admin.preferences.currency),
        is_theme_dark: Set(admin.preferences.is_theme_dark),
        table_column_settings: Set(admin.preferences.table_column_settings),
        added_by: Set(admin.added_by),
        status: Set(admin.status),
        is_deleted: NotSet,
        created_at: NotSet,
        updated_at: Set(now),
    }
}
