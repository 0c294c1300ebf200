// apps/unit_site/src/web/handlers/product_handlers.rs

use actix_web::HttpResponse;
use tracing::{info, instrument};
use unit_site_core::products;

/// The merchandise list the storefront renders. Served from the compiled-in catalog.
#[instrument(name = "handler::list_products")]
pub async fn list_products_handler() -> HttpResponse {
  let catalog = products();
  info!("Serving {} catalog products.", catalog.len());
  HttpResponse::Ok().json(catalog)
}
