// apps/unit_site/src/storage/mod.rs

//! Persistence seam for orders, songs and site content.
//!
//! Handlers only see `dyn Storage`. `PgStorage` is the production backend;
//! `MemoryStorage` keeps the same contract in process memory.

pub mod memory;
pub mod postgres;

pub use memory::MemoryStorage;
pub use postgres::PgStorage;

use crate::errors::Result;
use crate::models::{NewSong, Order, SiteContent, Song};
use async_trait::async_trait;
use unit_site_core::NewOrder;

#[async_trait]
pub trait Storage: Send + Sync {
  /// Inserts exactly one order row and returns it with its id and timestamp.
  async fn create_order(&self, order: &NewOrder) -> Result<Order>;

  /// All orders, oldest first. No paging.
  async fn list_orders(&self) -> Result<Vec<Order>>;

  async fn list_songs(&self) -> Result<Vec<Song>>;

  async fn create_song(&self, song: &NewSong) -> Result<Song>;

  async fn list_content(&self) -> Result<Vec<SiteContent>>;

  /// Sets `key` to `value`, inserting the row if the key is new.
  ///
  /// Implementations apply this as one atomic step, so concurrent writers on
  /// the same key never leave two rows behind.
  async fn upsert_content(&self, key: &str, value: &str) -> Result<SiteContent>;
}
