// apps/unit_site/src/models/order.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;
use unit_site_core::OrderLine;

/// A persisted order. `id` and `created_at` are assigned by storage.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
  pub id: i32,
  pub full_name: String,
  pub phone: String,
  pub items: Json<Vec<OrderLine>>,
  /// Whole shekels, as computed by the buyer's cart.
  pub total_amount: i32,
  pub payment_method: String,
  pub is_paid: bool,
  pub created_at: DateTime<Utc>,
}
