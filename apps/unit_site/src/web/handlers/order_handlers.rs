// apps/unit_site/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::Value;
use tracing::{info, instrument, warn};
use unit_site_core::validate_order;

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::create_order", skip(app_state, body))]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
  let new_order = validate_order(&body).map_err(|errors| {
    warn!(
      field = errors.first().map(|i| i.field.as_str()).unwrap_or_default(),
      "Order payload failed validation."
    );
    AppError::Validation(errors)
  })?;

  let order = app_state.storage.create_order(&new_order).await?;
  info!(
    order_id = order.id,
    items = order.items.0.len(),
    total_amount = order.total_amount,
    "Order created."
  );
  Ok(HttpResponse::Created().json(order))
}

#[instrument(name = "handler::list_orders", skip(app_state))]
pub async fn list_orders_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let orders = app_state.storage.list_orders().await?;
  info!("Successfully fetched {} orders.", orders.len());
  Ok(HttpResponse::Ok().json(orders))
}
