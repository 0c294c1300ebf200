// apps/unit_site/src/main.rs

use std::sync::Arc;

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

use unit_site::config::{AppConfig, LogFormat};
use unit_site::state::AppState;
use unit_site::{build_storage, seed, web};

fn init_tracing(format: LogFormat) {
  // RUST_LOG overrides the default level.
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  match format {
    LogFormat::Json => builder.json().init(),
    LogFormat::Text => builder.init(),
  }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  let app_config = Arc::new(AppConfig::from_env().context("Failed to load application configuration")?);
  init_tracing(app_config.log_format);

  tracing::info!(
    backend = ?app_config.storage_backend,
    seed_db = app_config.seed_db,
    "Starting unit site server..."
  );

  let storage = build_storage(&app_config)
    .await
    .context("Failed to initialise storage")?;

  if app_config.seed_db {
    seed::seed_defaults(storage.as_ref())
      .await
      .context("Failed to seed database")?;
  }

  let app_state = AppState::new(storage);

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("Failed to bind {}", server_address))?
  .run()
  .await
  .context("HTTP server terminated with an error")
}
