// apps/unit_site/src/storage/memory.rs

use super::Storage;
use crate::errors::Result;
use crate::models::{NewSong, Order, SiteContent, Song};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use sqlx::types::Json;
use tracing::{debug, instrument};
use unit_site_core::NewOrder;

#[derive(Default)]
struct Tables {
  orders: Vec<Order>,
  songs: Vec<Song>,
  content: Vec<SiteContent>,
  next_order_id: i32,
  next_song_id: i32,
  next_content_id: i32,
}

fn next_id(counter: &mut i32) -> i32 {
  *counter += 1;
  *counter
}

/// Storage held in process memory. Every operation runs under one lock, so
/// the content upsert is atomic here as well.
#[derive(Default)]
pub struct MemoryStorage {
  tables: Mutex<Tables>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl Storage for MemoryStorage {
  #[instrument(name = "memory::create_order", skip(self, order))]
  async fn create_order(&self, order: &NewOrder) -> Result<Order> {
    let mut tables = self.tables.lock();
    let created = Order {
      id: next_id(&mut tables.next_order_id),
      full_name: order.full_name.clone(),
      phone: order.phone.clone(),
      items: Json(order.items.clone()),
      total_amount: order.total_amount,
      payment_method: order.payment_method.as_str().to_string(),
      is_paid: order.is_paid,
      created_at: Utc::now(),
    };
    tables.orders.push(created.clone());
    debug!(order_id = created.id, "order stored in memory");
    Ok(created)
  }

  async fn list_orders(&self) -> Result<Vec<Order>> {
    Ok(self.tables.lock().orders.clone())
  }

  async fn list_songs(&self) -> Result<Vec<Song>> {
    Ok(self.tables.lock().songs.clone())
  }

  async fn create_song(&self, song: &NewSong) -> Result<Song> {
    let mut tables = self.tables.lock();
    let created = Song {
      id: next_id(&mut tables.next_song_id),
      title: song.title.clone(),
      lyrics: song.lyrics.clone(),
      video_url: song.video_url.clone(),
      category: song.category.clone(),
      created_at: Utc::now(),
    };
    tables.songs.push(created.clone());
    Ok(created)
  }

  async fn list_content(&self) -> Result<Vec<SiteContent>> {
    Ok(self.tables.lock().content.clone())
  }

  #[instrument(name = "memory::upsert_content", skip(self, value))]
  async fn upsert_content(&self, key: &str, value: &str) -> Result<SiteContent> {
    let mut tables = self.tables.lock();
    if let Some(row) = tables.content.iter_mut().find(|row| row.key == key) {
      row.value = value.to_string();
      row.updated_at = Utc::now();
      return Ok(row.clone());
    }

    let row = SiteContent {
      id: next_id(&mut tables.next_content_id),
      key: key.to_string(),
      value: value.to_string(),
      updated_at: Utc::now(),
    };
    tables.content.push(row.clone());
    Ok(row)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use unit_site_core::{OrderLine, PaymentMethod};

  fn order_with_items(n: usize) -> NewOrder {
    NewOrder {
      full_name: "Test Buyer".to_string(),
      phone: "050-0000000".to_string(),
      items: (0..n)
        .map(|i| OrderLine {
          name: format!("item {}", i),
          quantity: 1,
          size: None,
        })
        .collect(),
      total_amount: 20 * n as i32,
      payment_method: PaymentMethod::Bit,
      is_paid: false,
    }
  }

  #[tokio::test]
  async fn orders_get_fresh_ids_and_keep_items() {
    let storage = MemoryStorage::new();
    let first = storage.create_order(&order_with_items(3)).await.unwrap();
    let second = storage.create_order(&order_with_items(1)).await.unwrap();

    assert_eq!(first.items.0.len(), 3);
    assert_ne!(first.id, second.id);
    assert_eq!(storage.list_orders().await.unwrap().len(), 2);
  }

  #[tokio::test]
  async fn empty_tables_list_as_empty() {
    let storage = MemoryStorage::new();
    assert!(storage.list_orders().await.unwrap().is_empty());
    assert!(storage.list_songs().await.unwrap().is_empty());
    assert!(storage.list_content().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn upsert_same_key_updates_in_place() {
    let storage = MemoryStorage::new();
    let first = storage.upsert_content("site_title", "old").await.unwrap();
    let second = storage.upsert_content("site_title", "new").await.unwrap();

    let rows = storage.list_content().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].value, "new");
    assert_eq!(first.id, second.id);
    assert!(second.updated_at >= first.updated_at);
  }

  #[tokio::test]
  async fn upsert_distinct_keys_adds_rows() {
    let storage = MemoryStorage::new();
    storage.upsert_content("site_title", "a").await.unwrap();
    storage.upsert_content("site_subtitle", "b").await.unwrap();

    let keys: Vec<_> = storage.list_content().await.unwrap().into_iter().map(|r| r.key).collect();
    assert_eq!(keys, vec!["site_title", "site_subtitle"]);
  }
}
