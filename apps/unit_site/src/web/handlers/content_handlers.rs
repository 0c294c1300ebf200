// apps/unit_site/src/web/handlers/content_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::ContentUpdate;
use crate::state::AppState;

#[instrument(name = "handler::list_content", skip(app_state))]
pub async fn list_content_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let entries = app_state.storage.list_content().await?;
  info!("Successfully fetched {} content entries.", entries.len());
  Ok(HttpResponse::Ok().json(entries))
}

#[instrument(name = "handler::update_content", skip(app_state, body), fields(key = %body.key))]
pub async fn update_content_handler(
  app_state: web::Data<AppState>,
  body: web::Json<ContentUpdate>,
) -> Result<HttpResponse, AppError> {
  let entry = app_state.storage.upsert_content(&body.key, &body.value).await?;
  info!(content_id = entry.id, "Content entry saved.");
  Ok(HttpResponse::Ok().json(entry))
}
