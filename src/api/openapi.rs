//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{admin_handler, health_handler};
use crate::domain::{AdminPayload, AdminResponse};

/// OpenAPI documentation for the admin API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "uni-admin",
        version = "0.1.0",
        description = "Admin back-office API: admin accounts, login and bearer-token access"
    ),
    paths(
        health_handler::health,
        admin_handler::create_admin,
        admin_handler::list_admins,
        admin_handler::login,
        admin_handler::get_profile,
        admin_handler::get_admin,
        admin_handler::update_admin,
        admin_handler::delete_admin,
    ),
    components(
        schemas(
            AdminPayload,
            AdminResponse,
            admin_handler::LoginRequest,
            admin_handler::LoginResponse,
            health_handler::HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Admins", description = "Admin management and login"),
        (name = "Health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Document with admin paths mounted under `base_path`.
    pub fn with_base_path(base_path: &str) -> utoipa::openapi::OpenApi {
        let mut doc = Self::openapi();
        if !base_path.is_empty() {
            doc.paths.paths = std::mem::take(&mut doc.paths.paths)
                .into_iter()
                .map(|(path, item)| {
                    if path.starts_with("/admins") {
                        (format!("{}{}", base_path, path), item)
                    } else {
                        (path, item)
                    }
                })
                .collect();
        }
        doc
    }
}

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /admins/login"))
                        .build(),
                ),
            );
        }
    }
}
