//! Integration tests for API endpoints.
//!
//! The full router runs against an in-memory admin store, so no database
//! is required.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};

use common::TestApp;
use uni_admin::services::{AdminService, AdminManager, JwtTokenService};

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();
    let (status, body) = app.send(Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_root_welcome() {
    let app = TestApp::new();
    let (status, body) = app.send(Method::GET, "/", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Welcome to uni-admin");
}

#[tokio::test]
async fn test_create_admin_hides_password() {
    let app = TestApp::new();
    let (status, body) = app
        .send(
            Method::POST,
            "/api/admins",
            None,
            Some(json!({
                "firstName": "A",
                "lastName": "B",
                "emailId": "a@b.com",
                "password": "secret"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    let data = &body["data"];
    assert!(uuid::Uuid::parse_str(data["_id"].as_str().unwrap()).is_ok());
    assert_eq!(data["firstName"], "A");
    assert_eq!(data["emailId"], "a@b.com");
    assert_eq!(data["isDeleted"], false);
    assert!(data.get("password").is_none());

    // stored as an Argon2id hash, never the plain text
    let rows = app.store.all_rows();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].password.as_str().starts_with("$argon2id$"));
    assert_ne!(rows[0].password.as_str(), "secret");
}

#[tokio::test]
async fn test_create_then_read_returns_same_fields() {
    let app = TestApp::new();
    let id = app.create_admin("Ada", "ada@example.com", "secret").await;
    let token = app.login("ada@example.com", "secret").await;

    let (status, body) = app
        .send(Method::GET, &format!("/api/admins/{}", id), Some(&token), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["_id"], id.as_str());
    assert_eq!(body["data"]["firstName"], "Ada");
    assert_eq!(body["data"]["lastName"], "Tester");
    assert_eq!(body["data"]["emailId"], "ada@example.com");
    assert!(body["data"]["createdAt"].is_string());
    assert!(body["data"]["updatedAt"].is_string());
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let app = TestApp::new();
    app.create_admin("Ada", "ada@example.com", "secret").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/admins",
            None,
            Some(json!({
                "firstName": "Other",
                "lastName": "Admin",
                "emailId": "ada@example.com",
                "password": "secret"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Email already exists");
    assert_eq!(body["code"], "CONFLICT");
}

#[tokio::test]
async fn test_email_reusable_after_soft_delete() {
    let app = TestApp::new();
    let id = app.create_admin("Ada", "ada@example.com", "secret").await;
    let token = app.login("ada@example.com", "secret").await;

    let (status, _) = app
        .send(Method::DELETE, &format!("/api/admins/{}", id), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    app.create_admin("Ada", "ada@example.com", "secret").await;
    assert_eq!(app.store.all_rows().len(), 2);
}

#[tokio::test]
async fn test_create_validation_messages() {
    let app = TestApp::new();
    let cases = [
        (json!({ "lastName": "B", "emailId": "a@b.com", "password": "p" }), "firstName is required"),
        (json!({ "firstName": "A", "emailId": "a@b.com", "password": "p" }), "lastName is required"),
        (json!({ "firstName": "A", "lastName": "B", "password": "p" }), "emailId is required"),
        (
            json!({ "firstName": "A", "lastName": "B", "emailId": "not-an-email", "password": "p" }),
            "invalid email format",
        ),
        (json!({ "firstName": "A", "lastName": "B", "emailId": "a@b.com" }), "password is required"),
    ];

    for (payload, message) in cases {
        let (status, body) = app.send(Method::POST, "/api/admins", None, Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], message);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }
    assert!(app.store.all_rows().is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/admins")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = app.call(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_invalid_id_is_rejected() {
    let app = TestApp::new();
    app.create_admin("Ada", "ada@example.com", "secret").await;
    let token = app.login("ada@example.com", "secret").await;

    for method in [Method::GET, Method::DELETE] {
        let (status, body) = app
            .send(method, "/api/admins/not-a-uuid", Some(&token), None)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid ID");
    }
}

#[tokio::test]
async fn test_delete_then_read_is_not_found() {
    let app = TestApp::new();
    app.create_admin("Ada", "ada@example.com", "secret").await;
    let victim = app.create_admin("Bob", "bob@example.com", "secret").await;
    let token = app.login("ada@example.com", "secret").await;
    let uri = format!("/api/admins/{}", victim);

    let (status, body) = app.send(Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, body) = app.send(Method::GET, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Admin not found");

    let (status, _) = app.send(Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // the row is flagged, not removed
    let rows = app.store.all_rows();
    assert!(rows.iter().any(|a| a.id.to_string() == victim && a.is_deleted));
}

#[tokio::test]
async fn test_list_pagination_newest_first() {
    let app = TestApp::new();
    for i in 1..=5 {
        app.create_admin(&format!("Admin{}", i), &format!("a{}@example.com", i), "secret")
            .await;
    }

    let (status, body) = app
        .send(Method::GET, "/api/admins?page=1&page_size=2", None, None)
        .await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["page"], 1);
    assert_eq!(data["page_size"], 2);
    assert_eq!(data["total_count"], 5);
    let list = data["list"].as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["firstName"], "Admin5");
    assert_eq!(list[1]["firstName"], "Admin4");
    assert!(list.iter().all(|a| a.get("password").is_none()));

    let (_, body) = app
        .send(Method::GET, "/api/admins?page=3&page_size=2", None, None)
        .await;
    let list = body["data"]["list"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["firstName"], "Admin1");
}

#[tokio::test]
async fn test_list_falls_back_to_defaults() {
    let app = TestApp::new();
    app.create_admin("Ada", "ada@example.com", "secret").await;

    let (status, body) = app
        .send(Method::GET, "/api/admins?page=-1&page_size=abc", None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["page"], 1);
    assert_eq!(body["data"]["page_size"], 10);

    let (_, body) = app
        .send(Method::GET, "/api/admins?page_size=1000", None, None)
        .await;
    assert_eq!(body["data"]["page_size"], 100);
}

#[tokio::test]
async fn test_list_huge_page_is_empty() {
    let app = TestApp::new();
    app.create_admin("Ada", "ada@example.com", "secret").await;

    let (status, body) = app
        .send(
            Method::GET,
            "/api/admins?page=9223372036854775807&page_size=10",
            None,
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["list"], json!([]));
    assert_eq!(body["data"]["total_count"], 1);
}

#[tokio::test]
async fn test_list_excludes_deleted() {
    let app = TestApp::new();
    app.create_admin("Ada", "ada@example.com", "secret").await;
    let bob = app.create_admin("Bob", "bob@example.com", "secret").await;
    let token = app.login("ada@example.com", "secret").await;
    app.send(Method::DELETE, &format!("/api/admins/{}", bob), Some(&token), None)
        .await;

    let (_, body) = app.send(Method::GET, "/api/admins", None, None).await;
    assert_eq!(body["data"]["total_count"], 1);
    assert_eq!(body["data"]["list"][0]["firstName"], "Ada");
}

#[tokio::test]
async fn test_login_returns_admin_and_token() {
    let app = TestApp::new();
    let id = app.create_admin("Ada", "ada@example.com", "secret").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/admins/login",
            None,
            Some(json!({ "emailId": "ada@example.com", "password": "secret" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Logged in successfully");
    assert_eq!(body["data"]["admin"]["_id"], id.as_str());
    assert!(body["data"]["admin"].get("password").is_none());
    assert_eq!(body["data"]["token"].as_str().unwrap().split('.').count(), 3);
}

#[tokio::test]
async fn test_login_failures_are_identical() {
    let app = TestApp::new();
    app.create_admin("Ada", "ada@example.com", "secret").await;

    let (wrong_status, wrong_body) = app
        .send(
            Method::POST,
            "/api/admins/login",
            None,
            Some(json!({ "emailId": "ada@example.com", "password": "nope" })),
        )
        .await;
    let (unknown_status, unknown_body) = app
        .send(
            Method::POST,
            "/api/admins/login",
            None,
            Some(json!({ "emailId": "ghost@example.com", "password": "secret" })),
        )
        .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, unknown_body);
    assert_eq!(wrong_body["error"], "Invalid email or password");
}

#[tokio::test]
async fn test_login_requires_fields() {
    let app = TestApp::new();
    let (status, body) = app
        .send(
            Method::POST,
            "/api/admins/login",
            None,
            Some(json!({ "emailId": "ada@example.com" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "password is required");
}

#[tokio::test]
async fn test_update_preserves_id_and_rehashes_password() {
    let app = TestApp::new();
    let id = app.create_admin("Ada", "ada@example.com", "secret").await;
    let token = app.login("ada@example.com", "secret").await;
    let uri = format!("/api/admins/{}", id);

    let (status, body) = app
        .send(
            Method::PUT,
            &uri,
            Some(&token),
            Some(json!({
                "_id": uuid::Uuid::new_v4(),
                "firstName": "Grace",
                "lastName": "Hopper",
                "emailId": "ada@example.com",
                "password": "new-secret",
                "isThemeDark": true
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Updated successfully");
    assert_eq!(body["data"]["_id"], id.as_str());
    assert_eq!(body["data"]["firstName"], "Grace");
    assert_eq!(body["data"]["isThemeDark"], true);
    assert!(body["data"].get("password").is_none());

    app.login("ada@example.com", "new-secret").await;
    let (status, _) = app
        .send(
            Method::POST,
            "/api/admins/login",
            None,
            Some(json!({ "emailId": "ada@example.com", "password": "secret" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_missing_admin() {
    let app = TestApp::new();
    app.create_admin("Ada", "ada@example.com", "secret").await;
    let token = app.login("ada@example.com", "secret").await;

    let (status, _) = app
        .send(
            Method::PUT,
            &format!("/api/admins/{}", uuid::Uuid::new_v4()),
            Some(&token),
            Some(json!({
                "firstName": "A",
                "lastName": "B",
                "emailId": "x@example.com",
                "password": "p"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_profile_returns_caller() {
    let app = TestApp::new();
    let id = app.create_admin("Ada", "ada@example.com", "secret").await;
    app.create_admin("Bob", "bob@example.com", "secret").await;
    let token = app.login("ada@example.com", "secret").await;

    let (status, body) = app
        .send(Method::GET, "/api/admins/profile", Some(&token), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["_id"], id.as_str());
    assert_eq!(body["data"]["firstName"], "Ada");
}

#[tokio::test]
async fn test_custom_base_path() {
    let mut config = common::test_config();
    config.api_base_path = "/v1".to_string();
    let app = TestApp::with_config(config);

    let (status, _) = app.send(Method::GET, "/v1/admins", None, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.send(Method::GET, "/api/admins", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_service_layer_against_in_memory_store() {
    let config = common::test_config();
    let store = std::sync::Arc::new(common::InMemoryAdmins::default());
    let service = assert_ok!(AdminManager::new(
        store,
        std::sync::Arc::new(JwtTokenService::new(&config)),
        config.hashing,
    ));

    let payload: uni_admin::domain::AdminPayload = serde_json::from_value(json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "emailId": "ada@example.com",
        "password": "secret"
    }))
    .unwrap();

    let created = assert_ok!(service.create(payload.clone()).await);
    assert_err!(service.create(payload).await);
    assert_ok!(service.read_by_email("ada@example.com").await);
    assert_ok!(service.delete(created.id).await);
    assert_err!(service.read(created.id).await);
}
