//! Admin handlers.

use axum::{
    extract::{Query, State},
    middleware,
    routing::{get, post},
    Extension, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::{AdminId, JsonBody, ValidatedJson};
use crate::api::middleware::{auth_middleware, AuthenticatedAdmin};
use crate::api::AppState;
use crate::domain::{AdminPayload, AdminResponse};
use crate::errors::{AppError, AppResult};
use crate::types::{ApiResponse, Created, NoContent, Paginated, PaginationParams, PaginationQuery};

const MSG_DETAILS: &str = "Get details successfully.";

/// Admin login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "emailId is required"))]
    #[schema(example = "ada@example.com")]
    pub email_id: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "s3cret")]
    pub password: String,
}

/// Admin login result
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub admin: AdminResponse,
    /// HS256 bearer token
    pub token: String,
}

/// Create admin routes.
///
/// Creation, listing and login are public; everything addressing a single
/// admin requires a bearer token.
pub fn admin_routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/admins", post(create_admin).get(list_admins))
        .route("/admins/login", post(login));

    let protected = Router::new()
        .route("/admins/profile", get(get_profile))
        .route(
            "/admins/:id",
            get(get_admin).put(update_admin).delete(delete_admin),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}

/// Create a new admin
#[utoipa::path(
    post,
    path = "/admins",
    tag = "Admins",
    request_body = AdminPayload,
    responses(
        (status = 201, description = "Admin created", body = AdminResponse),
        (status = 400, description = "Invalid body, validation error or email already exists"),
        (status = 500, description = "Hashing or store failure")
    )
)]
pub async fn create_admin(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AdminPayload>,
) -> AppResult<Created<AdminResponse>> {
    let admin = state.admin_service.create(payload).await?;

    Ok(Created(ApiResponse::with_message(
        AdminResponse::from(admin),
        "Admin created successfully.",
    )))
}

/// List active admins, newest first
#[utoipa::path(
    get,
    path = "/admins",
    tag = "Admins",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of admins as {list, page, page_size, total_count}"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_admins(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> AppResult<ApiResponse<Paginated<AdminResponse>>> {
    let params = PaginationParams::from(query);
    let (admins, total) = state
        .admin_service
        .list(params.limit(), params.offset())
        .await?;

    let list = admins.into_iter().map(AdminResponse::from).collect();
    Ok(ApiResponse::with_message(
        Paginated::new(list, params, total),
        MSG_DETAILS,
    ))
}

/// Login and get JWT token
#[utoipa::path(
    post,
    path = "/admins/login",
    tag = "Admins",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Invalid body or missing fields"),
        (status = 401, description = "Invalid email or password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<ApiResponse<LoginResponse>> {
    let outcome = state
        .admin_service
        .login(&payload.email_id, &payload.password)
        .await?;

    Ok(ApiResponse::with_message(
        LoginResponse {
            admin: AdminResponse::from(outcome.admin),
            token: outcome.token,
        },
        "Logged in successfully",
    ))
}

/// Get admin by ID
#[utoipa::path(
    get,
    path = "/admins/{id}",
    tag = "Admins",
    params(("id" = Uuid, Path, description = "Admin ID")),
    responses(
        (status = 200, description = "Admin found", body = AdminResponse),
        (status = 400, description = "Invalid ID"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Admin not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_admin(
    State(state): State<AppState>,
    AdminId(id): AdminId,
) -> AppResult<ApiResponse<AdminResponse>> {
    let admin = state.admin_service.read(id).await?;
    Ok(ApiResponse::with_message(AdminResponse::from(admin), MSG_DETAILS))
}

/// Update admin by ID
#[utoipa::path(
    put,
    path = "/admins/{id}",
    tag = "Admins",
    params(("id" = Uuid, Path, description = "Admin ID")),
    request_body = AdminPayload,
    responses(
        (status = 200, description = "Admin updated", body = AdminResponse),
        (status = 400, description = "Invalid ID, body or validation error"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Admin not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_admin(
    State(state): State<AppState>,
    AdminId(id): AdminId,
    JsonBody(payload): JsonBody<AdminPayload>,
) -> AppResult<ApiResponse<AdminResponse>> {
    let admin = state.admin_service.update(id, payload).await?;
    Ok(ApiResponse::with_message(
        AdminResponse::from(admin),
        "Updated successfully",
    ))
}

/// Soft delete admin by ID
#[utoipa::path(
    delete,
    path = "/admins/{id}",
    tag = "Admins",
    params(("id" = Uuid, Path, description = "Admin ID")),
    responses(
        (status = 204, description = "Admin deleted"),
        (status = 400, description = "Invalid ID"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Admin not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_admin(
    State(state): State<AppState>,
    AdminId(id): AdminId,
) -> AppResult<NoContent> {
    state.admin_service.delete(id).await?;
    Ok(NoContent)
}

/// Get the authenticated admin's own record
#[utoipa::path(
    get,
    path = "/admins/profile",
    tag = "Admins",
    responses(
        (status = 200, description = "Current admin", body = AdminResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Admin no longer exists")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_profile(
    State(state): State<AppState>,
    identity: Option<Extension<AuthenticatedAdmin>>,
) -> AppResult<ApiResponse<AdminResponse>> {
    let Some(Extension(AuthenticatedAdmin(subject))) = identity else {
        return Err(AppError::unauthorized("Unauthorized"));
    };
    let id = Uuid::parse_str(&subject).map_err(|_| AppError::unauthorized("Invalid token claims"))?;

    let admin = state.admin_service.read(id).await?;
    Ok(ApiResponse::with_message(AdminResponse::from(admin), MSG_DETAILS))
}
