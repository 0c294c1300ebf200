// apps/unit_site/src/web/routes.rs

use actix_web::{web, HttpRequest, HttpResponse};

use crate::errors::AppError;
use crate::web::handlers::{content_handlers, order_handlers, product_handlers, song_handlers};

async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Unreadable JSON bodies answer with the same `{message, field}` shape as validation failures.
fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| AppError::BadRequest(err.to_string()).into())
}

// Called from `main.rs` and from the API tests to configure the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.app_data(json_config()).service(
    web::scope("/api")
      .route("/health", web::get().to(health_check_handler))
      .service(web::scope("/products").route("", web::get().to(product_handlers::list_products_handler)))
      .service(
        web::scope("/orders")
          .route("", web::post().to(order_handlers::create_order_handler))
          .route("", web::get().to(order_handlers::list_orders_handler)),
      )
      .service(
        web::scope("/songs")
          .route("", web::get().to(song_handlers::list_songs_handler))
          .route("", web::post().to(song_handlers::create_song_handler)),
      )
      .service(
        web::scope("/content")
          .route("", web::get().to(content_handlers::list_content_handler))
          .route("", web::post().to(content_handlers::update_content_handler)),
      ),
  );
}
