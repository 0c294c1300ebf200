// apps/unit_site/src/models/content.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One editable piece of site copy, unique by `key`.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
  pub id: i32,
  pub key: String,
  pub value: String,
  pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentUpdate {
  pub key: String,
  pub value: String,
}
