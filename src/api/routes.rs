//! Application route configuration.

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{admin_routes, health_routes};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::Config;

/// Builds one module's routes, relative to the API base path.
type RouteBuilder = fn(AppState) -> Router<AppState>;

/// Every module mounted under the API base path.
const API_MODULES: &[RouteBuilder] = &[admin_routes];

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let config = state.config.clone();

    let api = API_MODULES
        .iter()
        .fold(Router::new(), |router, build| router.merge(build(state.clone())));

    let mut router = health_routes();
    router = if config.api_base_path.is_empty() {
        router.merge(api)
    } else {
        router.nest(&config.api_base_path, api)
    };

    if config.swagger_enabled {
        router = router.merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::with_base_path(&config.api_base_path)),
        );
    }

    router
        .layer(cors_layer(&config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    match config.cors_origins() {
        None => layer.allow_origin(Any),
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                        None
                    }
                })
                .collect();
            layer.allow_origin(origins)
        }
    }
}
