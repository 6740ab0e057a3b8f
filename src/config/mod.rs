use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod database;
pub mod server;

pub use database::{DatabaseConfig, StoreBackend};
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// `LOG_FORMAT=json` switches the fmt layer to JSON lines
    pub log_json: bool,
    /// Attach the error chain to 500 response bodies
    pub expose_error_detail: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: "development".to_string(),
            log_level: "info".to_string(),
            log_json: false,
            expose_error_detail: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Origin allowed to call `/api/*`; `*` allows any
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "http://localhost:3000".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_json: parse_log_format()?,
                expose_error_detail: parse_bool("EXPOSE_ERROR_DETAIL", false)?,
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            cors: CorsConfig {
                allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                    .unwrap_or_else(|_| CorsConfig::default().allowed_origin),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.database.validate()?;

        if self.cors.allowed_origin.trim().is_empty() {
            return Err(AppError::Configuration(
                "CORS_ALLOWED_ORIGIN must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_log_format() -> Result<bool> {
    match env::var("LOG_FORMAT") {
        Err(_) => Ok(false),
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(true),
            "pretty" | "text" | "" => Ok(false),
            _ => Err(AppError::Configuration(format!("Invalid LOG_FORMAT: {}", raw))),
        },
    }
}

/// Reads a boolean flag; accepts true/false/1/0/yes/no in any case
pub(crate) fn parse_bool(key: &str, default: bool) -> Result<bool> {
    match env::var(key) {
        Err(_) => Ok(default),
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" | "" => Ok(false),
            _ => Err(AppError::Configuration(format!("Invalid {}: {}", key, raw))),
        },
    }
}
