// apps/unit_site/src/models/song.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Song {
  pub id: i32,
  pub title: String,
  pub lyrics: String,
  pub video_url: Option<String>,
  /// Free-text tag, e.g. commanders or platoons.
  pub category: String,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSong {
  pub title: String,
  pub lyrics: String,
  #[serde(default)]
  pub video_url: Option<String>,
  pub category: String,
}
