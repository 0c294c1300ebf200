// apps/unit_site/src/lib.rs

//! HTTP server for the unit community site: order intake, the admin order
//! listing, songs and editable site copy.

pub mod config;
pub mod errors;
pub mod models;
pub mod seed;
pub mod state;
pub mod storage;
pub mod web;

use std::sync::Arc;

use crate::config::{AppConfig, StorageBackend};
use crate::errors::{AppError, Result};
use crate::storage::{MemoryStorage, PgStorage, Storage};

/// Opens the storage backend named in the config.
pub async fn build_storage(config: &AppConfig) -> Result<Arc<dyn Storage>> {
  match config.storage_backend {
    StorageBackend::Postgres => {
      let url = config
        .database_url
        .as_deref()
        .ok_or_else(|| AppError::Config("DATABASE_URL is not set".to_string()))?;
      let storage = PgStorage::connect(url, config.db_max_connections, config.run_migrations).await?;
      Ok(Arc::new(storage))
    }
    StorageBackend::Memory => {
      tracing::warn!("Using in-memory storage; data is lost on restart.");
      Ok(Arc::new(MemoryStorage::new()))
    }
  }
}
