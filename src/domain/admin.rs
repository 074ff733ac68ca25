//! Admin domain entity and related types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::password::Password;

/// Admin domain entity (a stored, possibly soft-deleted, row)
#[derive(Debug, Clone, PartialEq)]
pub struct Admin {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub user_name: Option<String>,
    pub mobile: Option<String>,
    pub email_id: String,
    pub password: Password,
    pub photo: Option<String>,
    pub email_verification_status: bool,
    pub verification_token: Option<String>,
    pub verification_token_creation_time: Option<DateTime<Utc>>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub social: SocialProfiles,
    pub preferences: Preferences,
    pub added_by: Option<Uuid>,
    pub status: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Social network handles shown on the admin profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialProfiles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fb_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codepen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack: Option<String>,
}

/// Back-office display preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default)]
    pub is_theme_dark: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub table_column_settings: Option<serde_json::Value>,
}

impl Admin {
    /// Merge an update payload onto this record.
    ///
    /// Empty text and absent fields leave the stored value untouched; the
    /// identifier, soft-delete flag and timestamps are never taken from the
    /// payload.
    pub fn apply(&mut self, payload: AdminPayload, password: Password) {
        merge_required(&mut self.first_name, payload.first_name);
        merge_required(&mut self.last_name, payload.last_name);
        merge_required(&mut self.email_id, payload.email_id);
        self.password = password;

        merge_text(&mut self.user_name, payload.user_name);
        merge_text(&mut self.mobile, payload.mobile);
        merge_text(&mut self.photo, payload.photo);
        merge_text(&mut self.verification_token, payload.verification_token);
        merge_text(&mut self.gender, payload.gender);
        merge_text(&mut self.website, payload.website);
        merge_text(&mut self.address, payload.address);

        merge_value(
            &mut self.verification_token_creation_time,
            payload.verification_token_creation_time,
        );
        merge_value(&mut self.date_of_birth, payload.date_of_birth);
        merge_value(&mut self.added_by, payload.added_by);

        if let Some(flag) = payload.email_verification_status {
            self.email_verification_status = flag;
        }
        if let Some(flag) = payload.status {
            self.status = flag;
        }

        let social = &mut self.social;
        merge_text(&mut social.fb_id, payload.fb_id);
        merge_text(&mut social.twitter_id, payload.twitter_id);
        merge_text(&mut social.instagram_id, payload.instagram_id);
        merge_text(&mut social.github_id, payload.github_id);
        merge_text(&mut social.codepen, payload.codepen);
        merge_text(&mut social.slack, payload.slack);

        let prefs = &mut self.preferences;
        merge_text(&mut prefs.country_code, payload.country_code);
        merge_text(&mut prefs.time_zone, payload.time_zone);
        merge_text(&mut prefs.date_format, payload.date_format);
        merge_text(&mut prefs.currency, payload.currency);
        merge_value(&mut prefs.table_column_settings, payload.table_column_settings);
        if let Some(flag) = payload.is_theme_dark {
            prefs.is_theme_dark = flag;
        }
    }
}

fn merge_required(target: &mut String, value: String) {
    if !value.is_empty() {
        *target = value;
    }
}

fn merge_text(target: &mut Option<String>, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        *target = Some(value);
    }
}

fn merge_value<T>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}

/// A record ready to be inserted. Built only through [`NewAdmin::from_payload`],
/// which is where the identifier gets assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAdmin {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub user_name: Option<String>,
    pub mobile: Option<String>,
    pub email_id: String,
    pub password: Password,
    pub photo: Option<String>,
    pub email_verification_status: bool,
    pub verification_token: Option<String>,
    pub verification_token_creation_time: Option<DateTime<Utc>>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub social: SocialProfiles,
    pub preferences: Preferences,
    pub added_by: Option<Uuid>,
    pub status: bool,
}

impl NewAdmin {
    /// Build an insertable record, keeping a caller-supplied identifier or
    /// generating a random one.
    pub fn from_payload(payload: AdminPayload, password: Password) -> Self {
        let id = payload
            .id
            .filter(|id| !id.is_nil())
            .unwrap_or_else(Uuid::new_v4);

        Self {
            id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            user_name: non_empty(payload.user_name),
            mobile: non_empty(payload.mobile),
            email_id: payload.email_id,
            password,
            photo: non_empty(payload.photo),
            email_verification_status: payload.email_verification_status.unwrap_or(true),
            verification_token: non_empty(payload.verification_token),
            verification_token_creation_time: payload.verification_token_creation_time,
            date_of_birth: payload.date_of_birth,
            gender: non_empty(payload.gender),
            website: non_empty(payload.website),
            address: non_empty(payload.address),
            social: SocialProfiles {
                fb_id: non_empty(payload.fb_id),
                twitter_id: non_empty(payload.twitter_id),
                instagram_id: non_empty(payload.instagram_id),
                github_id: non_empty(payload.github_id),
                codepen: non_empty(payload.codepen),
                slack: non_empty(payload.slack),
            },
            preferences: Preferences {
                country_code: non_empty(payload.country_code),
                time_zone: non_empty(payload.time_zone),
                date_format: non_empty(payload.date_format),
                currency: non_empty(payload.currency),
                is_theme_dark: payload.is_theme_dark.unwrap_or(false),
                table_column_settings: payload.table_column_settings,
            },
            added_by: payload.added_by,
            status: payload.status.unwrap_or(true),
        }
    }

    /// Attach store-assigned timestamps, producing the stored entity.
    pub fn into_admin(self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Admin {
        Admin {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            user_name: self.user_name,
            mobile: self.mobile,
            email_id: self.email_id,
            password: self.password,
            photo: self.photo,
            email_verification_status: self.email_verification_status,
            verification_token: self.verification_token,
            verification_token_creation_time: self.verification_token_creation_time,
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            website: self.website,
            address: self.address,
            social: self.social,
            preferences: self.preferences,
            added_by: self.added_by,
            status: self.status,
            is_deleted: false,
            created_at,
            updated_at,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Admin create/update request body
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminPayload {
    /// Optional client-chosen identifier (create only; ignored on update)
    #[serde(rename = "_id", default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    #[schema(example = "Ada")]
    pub first_name: String,
    #[serde(default)]
    #[schema(example = "Lovelace")]
    pub last_name: String,
    pub user_name: Option<String>,
    pub mobile: Option<String>,
    #[serde(default)]
    #[schema(example = "ada@example.com")]
    pub email_id: String,
    #[serde(default)]
    #[schema(example = "secret", write_only)]
    pub password: String,
    pub photo: Option<String>,
    pub email_verification_status: Option<bool>,
    pub verification_token: Option<String>,
    pub verification_token_creation_time: Option<DateTime<Utc>>,
    #[schema(value_type = Option<String>, format = Date, example = "1990-12-10")]
    pub date_of_birth: Option<NaiveDate>,
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
    pub is_theme_dark: Option<bool>,
    #[schema(value_type = Option<Object>)]
    pub table_column_settings: Option<serde_json::Value>,
    pub added_by: Option<Uuid>,
    pub status: Option<bool>,
}

/// Admin response (safe to return to client; carries no password)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminResponse {
    #[serde(rename = "_id")]
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    pub email_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub email_verification_status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_token_creation_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = Date)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(flatten)]
    pub social: SocialProfiles,
    #[serde(flatten)]
    pub preferences: Preferences,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_by: Option<Uuid>,
    pub status: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Admin> for AdminResponse {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            first_name: admin.first_name,
            last_name: admin.last_name,
            user_name: admin.user_name,
            mobile: admin.mobile,
            email_id: admin.email_id,
            photo: admin.photo,
            email_verification_status: admin.email_verification_status,
            verification_token: admin.verification_token,
            verification_token_creation_time: admin.verification_token_creation_time,
            date_of_birth: admin.date_of_birth,
            gender: admin.gender,
            website: admin.website,
            address: admin.address,
            social: admin.social,
            preferences: admin.preferences,
            added_by: admin.added_by,
            status: admin.status,
            is_deleted: admin.is_deleted,
            created_at: admin.created_at,
            updated_at: admin.updated_at,
        }
    }
}
