// apps/unit_site/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
  Postgres,
  /// Process-local tables; everything is lost on restart.
  Memory,
}

impl FromStr for StorageBackend {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
      "memory" => Ok(StorageBackend::Memory),
      other => Err(AppError::Config(format!("Invalid STORAGE_BACKEND: '{}'", other))),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Text,
  Json,
}

impl FromStr for LogFormat {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "text" | "pretty" => Ok(LogFormat::Text),
      "json" => Ok(LogFormat::Json),
      other => Err(AppError::Config(format!("Invalid LOG_FORMAT: '{}'", other))),
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub storage_backend: StorageBackend,
  /// Required when `storage_backend` is Postgres.
  pub database_url: Option<String>,
  pub db_max_connections: u32,
  pub run_migrations: bool,
  pub seed_db: bool,
  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_vars(|name| env::var(name).ok())
  }

  /// Builds the config from any variable source; `from_env` passes the process environment.
  pub fn from_vars<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_or = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());
    let parse_bool = |name: &str, default: &str| {
      get_or(name, default)
        .trim()
        .parse::<bool>()
        .map_err(|e| AppError::Config(format!("Invalid {} value: {}", name, e)))
    };

    let server_host = get_or("SERVER_HOST", "127.0.0.1");
    let server_port = get_or("SERVER_PORT", "8080")
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let storage_backend = get_or("STORAGE_BACKEND", "postgres").parse::<StorageBackend>()?;
    let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
    if storage_backend == StorageBackend::Postgres && database_url.is_none() {
      return Err(AppError::Config(
        "Missing environment variable 'DATABASE_URL' (required for the postgres backend)".to_string(),
      ));
    }
    let db_max_connections = get_or("DB_MAX_CONNECTIONS", "5")
      .parse::<u32>()
      .map_err(|e| AppError::Config(format!("Invalid DB_MAX_CONNECTIONS: {}", e)))?;
    let run_migrations = parse_bool("RUN_MIGRATIONS", "true")?;
    let seed_db = parse_bool("SEED_DB", "false")?;
    let log_format = get_or("LOG_FORMAT", "text").parse::<LogFormat>()?;

    Ok(Self {
      server_host,
      server_port,
      storage_backend,
      database_url,
      db_max_connections,
      run_migrations,
      seed_db,
      log_format,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
