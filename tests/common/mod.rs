//! Shared helpers for integration tests.
//!
//! Routers are built around an in-memory [`AdminRepository`] so no database
//! is needed.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use uni_admin::api::{create_router, AppState};
use uni_admin::config::{Config, HashingCost, MSG_EMAIL_EXISTS};
use uni_admin::domain::{Admin, NewAdmin};
use uni_admin::errors::{AppError, AppResult};
use uni_admin::infra::AdminRepository;

pub const SECRET: &str = "test-secret-key-for-testing-only-32chars";

#[derive(Default)]
struct Table {
    rows: Vec<Admin>,
    ticks: i64,
}

impl Table {
    /// Strictly increasing timestamps so "newest first" is deterministic.
    fn now(&mut self) -> DateTime<Utc> {
        self.ticks += 1;
        Utc.timestamp_opt(1_700_000_000 + self.ticks, 0).unwrap()
    }

    fn email_taken(&self, email: &str, except: Option<Uuid>) -> bool {
        self.rows
            .iter()
            .any(|a| !a.is_deleted && a.email_id == email && Some(a.id) != except)
    }
}

/// In-memory admin store with the same soft delete and uniqueness rules as
/// the database.
#[derive(Default)]
pub struct InMemoryAdmins {
    table: Mutex<Table>,
}

impl InMemoryAdmins {
    /// Every row, including soft-deleted ones
    pub fn all_rows(&self) -> Vec<Admin> {
        self.table.lock().unwrap().rows.clone()
    }
}

#[async_trait]
impl AdminRepository for InMemoryAdmins {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Admin>> {
        let table = self.table.lock().unwrap();
        Ok(table
            .rows
            .iter()
            .find(|a| a.id == id && !a.is_deleted)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        let table = self.table.lock().unwrap();
        Ok(table
            .rows
            .iter()
            .find(|a| a.email_id == email && !a.is_deleted)
            .cloned())
    }

    async fn create(&self, record: NewAdmin) -> AppResult<Admin> {
        let mut table = self.table.lock().unwrap();
        if table.email_taken(&record.email_id, None) {
            return Err(AppError::conflict(MSG_EMAIL_EXISTS));
        }
        let now = table.now();
        let admin = record.into_admin(now, now);
        table.rows.push(admin.clone());
        Ok(admin)
    }

    async fn update(&self, mut record: Admin) -> AppResult<Admin> {
        let mut table = self.table.lock().unwrap();
        if table.email_taken(&record.email_id, Some(record.id)) {
            return Err(AppError::conflict(MSG_EMAIL_EXISTS));
        }
        let now = table.now();
        let row = table
            .rows
            .iter_mut()
            .find(|a| a.id == record.id && !a.is_deleted)
            .ok_or_else(AppError::admin_not_found)?;

        record.created_at = row.created_at;
        record.is_deleted = false;
        record.updated_at = now;
        *row = record.clone();
        Ok(record)
    }

    async fn soft_delete(&self, id: Uuid) -> AppResult<u64> {
        let mut table = self.table.lock().unwrap();
        let now = table.now();
        let mut affected = 0;
        for row in table.rows.iter_mut().filter(|a| a.id == id && !a.is_deleted) {
            row.is_deleted = true;
            row.updated_at = now;
            affected += 1;
        }
        Ok(affected)
    }

    async fn list(&self, limit: u64, offset: u64) -> AppResult<Vec<Admin>> {
        let table = self.table.lock().unwrap();
        let mut active: Vec<Admin> = table.rows.iter().filter(|a| !a.is_deleted).cloned().collect();
        active.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(active
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self) -> AppResult<u64> {
        let table = self.table.lock().unwrap();
        Ok(table.rows.iter().filter(|a| !a.is_deleted).count() as u64)
    }
}

/// Configuration with a signing secret, cheap hashing and no Swagger UI.
pub fn test_config() -> Config {
    let mut config = Config::default().with_jwt_secret(SECRET);
    config.hashing = HashingCost {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    };
    config.swagger_enabled = false;
    config
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryAdmins>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    pub fn with_config(config: Config) -> Self {
        let store = Arc::new(InMemoryAdmins::default());
        let state = AppState::with_repository(store.clone(), config).unwrap();
        Self {
            router: create_router(state),
            store,
        }
    }

    /// Send a request and decode the JSON body (`Null` when empty).
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        self.call(builder.body(body).unwrap()).await
    }

    pub async fn call(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    /// Create an admin through the API and return its `_id`.
    pub async fn create_admin(&self, first_name: &str, email: &str, password: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/admins",
                None,
                Some(serde_json::json!({
                    "firstName": first_name,
                    "lastName": "Tester",
                    "emailId": email,
                    "password": password,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {}", body);
        body["data"]["_id"].as_str().unwrap().to_string()
    }

    /// Log in through the API and return the bearer token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/admins/login",
                None,
                Some(serde_json::json!({ "emailId": email, "password": password })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", body);
        body["data"]["token"].as_str().unwrap().to_string()
    }
}
