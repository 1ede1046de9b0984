//! Server Configuration
//!
//! Read from environment variables (a `.env` file is loaded first by `main`).
//! Empty values count as unset.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use auth::AuthConfig;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_JWT_TTL_HOURS: u64 = 24;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8787";

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "api=info,auth=info,qa=info,tower_http=info";

#[derive(Clone)]
pub struct ApiConfig {
    /// PostgreSQL URL; `None` selects the in-memory store
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub jwt_secret: Option<String>,
    pub jwt_ttl: Duration,
    pub password_pepper: Option<Vec<u8>>,
    pub frontend_origins: Vec<String>,
    pub bind_addr: SocketAddr,
}

impl ApiConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v
                .trim()
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {}", v))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let jwt_ttl_hours: u64 = match get("JWT_TTL_HOURS") {
            Some(v) => v
                .trim()
                .parse()
                .with_context(|| format!("JWT_TTL_HOURS is not a number: {}", v))?,
            None => DEFAULT_JWT_TTL_HOURS,
        };
        if jwt_ttl_hours == 0 {
            anyhow::bail!("JWT_TTL_HOURS must be at least 1");
        }
        let jwt_ttl_secs = jwt_ttl_hours
            .checked_mul(3600)
            .filter(|secs| i64::try_from(*secs).is_ok())
            .context("JWT_TTL_HOURS is too large")?;

        let bind_addr_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr_raw
            .trim()
            .parse()
            .with_context(|| format!("BIND_ADDR is not a socket address: {}", bind_addr_raw))?;

        let frontend_origins = get("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            database_url: get("DATABASE_URL"),
            database_max_connections,
            jwt_secret: get("JWT_SECRET"),
            jwt_ttl: Duration::from_secs(jwt_ttl_secs),
            password_pepper: get("PASSWORD_PEPPER").map(String::into_bytes),
            frontend_origins,
            bind_addr,
        })
    }

    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig {
            jwt_secret: self.jwt_secret.clone(),
            token_ttl: self.jwt_ttl,
            password_pepper: self.password_pepper.clone(),
        }
    }

    /// CORS for the configured frontend origins; unparsable origins are skipped
    pub fn cors_layer(&self) -> CorsLayer {
        let allowed_origins: Vec<HeaderValue> = self
            .frontend_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(allowed_origins)
            .allow_methods(AllowMethods::list([
                Method::GET,
                Method::POST,
                Method::OPTIONS,
            ]))
            .allow_headers(AllowHeaders::list([
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
                header::ACCEPT,
            ]))
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("database_url", &self.database_url.as_ref().map(|_| "[REDACTED]"))
            .field("database_max_connections", &self.database_max_connections)
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "[REDACTED]"))
            .field("jwt_ttl", &self.jwt_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .field("frontend_origins", &self.frontend_origins)
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}
