// apps/unit_site/src/web/handlers/song_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::NewSong;
use crate::state::AppState;

#[instrument(name = "handler::list_songs", skip(app_state))]
pub async fn list_songs_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let songs = app_state.storage.list_songs().await?;
  info!("Successfully fetched {} songs.", songs.len());
  Ok(HttpResponse::Ok().json(songs))
}

#[instrument(name = "handler::create_song", skip(app_state, body), fields(title = %body.title))]
pub async fn create_song_handler(
  app_state: web::Data<AppState>,
  body: web::Json<NewSong>,
) -> Result<HttpResponse, AppError> {
  let song = app_state.storage.create_song(&body).await?;
  info!(song_id = song.id, "Song created.");
  Ok(HttpResponse::Created().json(song))
}
