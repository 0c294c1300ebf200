// apps/unit_site/src/storage/postgres.rs

use super::Storage;
use crate::errors::{AppError, Result};
use crate::models::{NewSong, Order, SiteContent, Song};
use async_trait::async_trait;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::{error, info, instrument};
use unit_site_core::NewOrder;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const ORDER_COLUMNS: &str = "id, full_name, phone, items, total_amount, payment_method, is_paid, created_at";
const SONG_COLUMNS: &str = "id, title, lyrics, video_url, category, created_at";
const CONTENT_COLUMNS: &str = "id, key, value, updated_at";

#[derive(Clone)]
pub struct PgStorage {
  pool: PgPool,
}

impl PgStorage {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  /// Opens a pool and, when asked, brings the schema up to date.
  #[instrument(name = "storage::pg_connect", skip(database_url))]
  pub async fn connect(database_url: &str, max_connections: u32, run_migrations: bool) -> Result<Self> {
    let pool = PgPoolOptions::new()
      .max_connections(max_connections)
      .connect(database_url)
      .await
      .map_err(|e| {
        error!("Failed to connect to the database: {}", e);
        AppError::Sqlx(e)
      })?;
    info!("Successfully connected to the database.");

    if run_migrations {
      MIGRATOR.run(&pool).await?;
      info!("Database migrations applied.");
    }
    Ok(Self::new(pool))
  }

  pub fn pool(&self) -> &PgPool {
    &self.pool
  }
}

#[async_trait]
impl Storage for PgStorage {
  #[instrument(name = "storage::create_order", skip(self, order), fields(items = order.items.len()))]
  async fn create_order(&self, order: &NewOrder) -> Result<Order> {
    let sql = format!(
      "INSERT INTO orders (full_name, phone, items, total_amount, payment_method, is_paid) \
       VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
      ORDER_COLUMNS
    );
    let created: Order = sqlx::query_as(&sql)
      .bind(&order.full_name)
      .bind(&order.phone)
      .bind(Json(&order.items))
      .bind(order.total_amount)
      .bind(order.payment_method.as_str())
      .bind(order.is_paid)
      .fetch_one(&self.pool)
      .await
      .map_err(|e| {
        error!("Failed to insert order: {}", e);
        AppError::Sqlx(e)
      })?;

    info!(order_id = created.id, "Order stored.");
    Ok(created)
  }

  #[instrument(name = "storage::list_orders", skip(self))]
  async fn list_orders(&self) -> Result<Vec<Order>> {
    let sql = format!("SELECT {} FROM orders ORDER BY id", ORDER_COLUMNS);
    Ok(sqlx::query_as(&sql).fetch_all(&self.pool).await?)
  }

  #[instrument(name = "storage::list_songs", skip(self))]
  async fn list_songs(&self) -> Result<Vec<Song>> {
    let sql = format!("SELECT {} FROM songs ORDER BY id", SONG_COLUMNS);
    Ok(sqlx::query_as(&sql).fetch_all(&self.pool).await?)
  }

  #[instrument(name = "storage::create_song", skip(self, song), fields(title = %song.title))]
  async fn create_song(&self, song: &NewSong) -> Result<Song> {
    let sql = format!(
      "INSERT INTO songs (title, lyrics, video_url, category) VALUES ($1, $2, $3, $4) RETURNING {}",
      SONG_COLUMNS
    );
    let created: Song = sqlx::query_as(&sql)
      .bind(&song.title)
      .bind(&song.lyrics)
      .bind(song.video_url.as_deref())
      .bind(&song.category)
      .fetch_one(&self.pool)
      .await?;
    Ok(created)
  }

  #[instrument(name = "storage::list_content", skip(self))]
  async fn list_content(&self) -> Result<Vec<SiteContent>> {
    let sql = format!("SELECT {} FROM site_content ORDER BY id", CONTENT_COLUMNS);
    Ok(sqlx::query_as(&sql).fetch_all(&self.pool).await?)
  }

  #[instrument(name = "storage::upsert_content", skip(self, value), fields(key = %key))]
  async fn upsert_content(&self, key: &str, value: &str) -> Result<SiteContent> {
    let sql = format!(
      "INSERT INTO site_content (key, value, updated_at) VALUES ($1, $2, NOW()) \
       ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = NOW() \
       RETURNING {}",
      CONTENT_COLUMNS
    );
    let row: SiteContent = sqlx::query_as(&sql)
      .bind(key)
      .bind(value)
      .fetch_one(&self.pool)
      .await
      .map_err(|e| {
        error!("Failed to upsert content '{}': {}", key, e);
        AppError::Sqlx(e)
      })?;
    Ok(row)
  }
}
