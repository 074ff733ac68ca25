//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use super::constants::{
    DEFAULT_ALLOWED_ORIGINS, DEFAULT_API_BASE_PATH, DEFAULT_APP_NAME, DEFAULT_ARGON2_ITERATIONS,
    DEFAULT_ARGON2_MEMORY_KIB, DEFAULT_ARGON2_PARALLELISM, DEFAULT_DATABASE_URL,
    DEFAULT_ENVIRONMENT, DEFAULT_JWT_EXPIRATION_HOURS, DEFAULT_LOG_LEVEL, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, MAX_JWT_EXPIRATION_HOURS, MIN_JWT_SECRET_LENGTH,
};

/// Argon2 cost parameters used for every password hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingCost {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingCost {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_ARGON2_MEMORY_KIB,
            iterations: DEFAULT_ARGON2_ITERATIONS,
            parallelism: DEFAULT_ARGON2_PARALLELISM,
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub app_name: String,
    pub environment: String,
    pub database_url: String,
    /// Run pending migrations when the server starts
    pub auto_migrate: bool,
    jwt_secret: Option<String>,
    pub jwt_expiration_hours: i64,
    pub server_host: String,
    pub server_port: u16,
    /// Comma separated list, `*` allows any origin
    pub allowed_origins: String,
    pub log_level: String,
    pub api_base_path: String,
    pub swagger_enabled: bool,
    pub hashing: HashingCost,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("app_name", &self.app_name)
            .field("environment", &self.environment)
            .field("database_url", &"[REDACTED]")
            .field("auto_migrate", &self.auto_migrate)
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "[REDACTED]"))
            .field("jwt_expiration_hours", &self.jwt_expiration_hours)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("allowed_origins", &self.allowed_origins)
            .field("log_level", &self.log_level)
            .field("api_base_path", &self.api_base_path)
            .field("swagger_enabled", &self.swagger_enabled)
            .field("hashing", &self.hashing)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is applied first when present.
    /// A missing `JWT_SECRET` is not fatal here: token issuance reports it.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").ok().filter(|s| !s.is_empty());
        match &jwt_secret {
            None => tracing::warn!("JWT_SECRET not set, login will fail until it is configured"),
            Some(secret) if secret.len() < MIN_JWT_SECRET_LENGTH => tracing::warn!(
                "JWT_SECRET is shorter than {} characters",
                MIN_JWT_SECRET_LENGTH
            ),
            Some(_) => {}
        }

        let server_port = env::var("PORT")
            .or_else(|_| env::var("SERVER_PORT"))
            .ok()
            .and_then(|v| parse_port(&v))
            .unwrap_or(DEFAULT_SERVER_PORT);

        let defaults = HashingCost::default();

        Self {
            app_name: env::var("APP_NAME").unwrap_or_else(|_| DEFAULT_APP_NAME.to_string()),
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            auto_migrate: env_parse("DB_AUTO_MIGRATE").unwrap_or(true),
            jwt_secret,
            jwt_expiration_hours: token_lifetime_hours(env_parse("JWT_EXPIRATION_HOURS")),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port,
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            api_base_path: normalize_base_path(
                &env::var("API_BASE_PATH").unwrap_or_else(|_| DEFAULT_API_BASE_PATH.to_string()),
            ),
            swagger_enabled: env_parse("SWAGGER_ENABLED").unwrap_or(true),
            hashing: HashingCost {
                memory_kib: env_parse("ARGON2_MEMORY_KIB").unwrap_or(defaults.memory_kib),
                iterations: env_parse("ARGON2_ITERATIONS").unwrap_or(defaults.iterations),
                parallelism: env_parse("ARGON2_PARALLELISM").unwrap_or(defaults.parallelism),
            },
        }
    }

    /// Replace the signing secret (empty disables token issuance).
    pub fn with_jwt_secret(mut self, secret: impl Into<String>) -> Self {
        let secret = secret.into();
        self.jwt_secret = (!secret.is_empty()).then_some(secret);
        self
    }

    /// Get JWT secret bytes for token signing/verification, if configured.
    pub fn jwt_secret_bytes(&self) -> Option<&[u8]> {
        self.jwt_secret.as_deref().map(str::as_bytes)
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Origins accepted by the CORS layer. `None` means any origin.
    pub fn cors_origins(&self) -> Option<Vec<String>> {
        let origins: Vec<String> = self
            .allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        if origins.iter().any(|o| o == "*") {
            None
        } else {
            Some(origins)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            auto_migrate: true,
            jwt_secret: None,
            jwt_expiration_hours: DEFAULT_JWT_EXPIRATION_HOURS,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            api_base_path: DEFAULT_API_BASE_PATH.to_string(),
            swagger_enabled: true,
            hashing: HashingCost::default(),
        }
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Out-of-range lifetimes are replaced by the default.
fn token_lifetime_hours(raw: Option<i64>) -> i64 {
    match raw {
        None => DEFAULT_JWT_EXPIRATION_HOURS,
        Some(hours) if (1..=MAX_JWT_EXPIRATION_HOURS).contains(&hours) => hours,
        Some(hours) => {
            tracing::warn!(
                "JWT_EXPIRATION_HOURS={} is outside 1..={}, using {}",
                hours,
                MAX_JWT_EXPIRATION_HOURS,
                DEFAULT_JWT_EXPIRATION_HOURS
            );
            DEFAULT_JWT_EXPIRATION_HOURS
        }
    }
}

/// Accepts both `8080` and the `:8080` listen-address form.
fn parse_port(value: &str) -> Option<u16> {
    value.trim().trim_start_matches(':').parse().ok()
}

/// `""`, `"/"` → `""`; `"api/"` → `"/api"`.
fn normalize_base_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
