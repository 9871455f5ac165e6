use crate::error::{AppError, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub run_migrations: bool,
}

/// Empty `allowed_origins` means any origin is accepted.
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// Collapse repeated `(product_id, color_id)` links when reading.
    pub dedupe_colors: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so it can be exercised
    /// without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: ServerConfig {
                host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: parse_or(&lookup, "PORT", 3000)?,
                max_body_size: parse_or(&lookup, "MAX_BODY_SIZE", 1_048_576)?,
            },
            database: DatabaseConfig {
                url: database_url(&lookup)?,
                max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
                run_migrations: parse_or(&lookup, "DB_RUN_MIGRATIONS", true)?,
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|origins| {
                        origins
                            .split(',')
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty() && s != "*")
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            catalog: CatalogConfig {
                dedupe_colors: parse_or(&lookup, "CATALOG_DEDUPE_COLORS", false)?,
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("Invalid {} value", key))),
        None => Ok(default),
    }
}

fn database_url<F>(lookup: &F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("DB_URL") {
        return Ok(url);
    }

    let required = |key: &str| {
        lookup(key).ok_or_else(|| AppError::Config(format!("{} not set", key)))
    };

    let host = required("DB_HOST")?;
    let user = required("DB_USER")?;
    let password = required("DB_PASSWORD")?;
    let name = required("DB_NAME")?;
    let port: u16 = parse_or(lookup, "DB_PORT", 5432)?;

    Ok(format!(
        "postgres://{}:{}@{}:{}/{}",
        user, password, host, port, name
    ))
}
