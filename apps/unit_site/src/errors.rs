// apps/unit_site/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;
use unit_site_core::ValidationErrors;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(#[from] ValidationErrors),

  /// A body that could not be read as JSON of the expected shape.
  #[error("Bad Request: {0}")]
  BadRequest(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Migration Error: {0}")]
  Migrate(#[from] sqlx::migrate::MigrateError),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
      _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    match self {
      AppError::Validation(errors) => {
        tracing::warn!(application_error = %self, "Rejecting invalid payload");
        let (message, field) = errors
          .first()
          .map(|issue| (issue.message.as_str(), issue.field.as_str()))
          .unwrap_or(("Invalid request body", ""));
        HttpResponse::BadRequest().json(json!({ "message": message, "field": field }))
      }
      AppError::BadRequest(m) => {
        tracing::warn!(application_error = %self, "Rejecting unreadable payload");
        HttpResponse::BadRequest().json(json!({ "message": m, "field": null }))
      }
      // Everything else is a server fault; the cause stays in the logs.
      _ => {
        tracing::error!(application_error = %self, "Responding with error");
        HttpResponse::InternalServerError().json(json!({ "message": "Internal Server Error" }))
      }
    }
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::body::to_bytes;
  use unit_site_core::validate_order;

  async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
    let resp = err.error_response();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body()).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
  }

  #[actix_web::test]
  async fn validation_error_reports_first_field() {
    let errors = validate_order(&json!({ "phone": "050" })).unwrap_err();
    let (status, body) = body_json(AppError::from(errors)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "fullName");
    assert_eq!(body["message"], "Required");
  }

  #[actix_web::test]
  async fn server_faults_hide_detail() {
    let (status, body) = body_json(AppError::Internal("pool exhausted".into())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Internal Server Error" }));
  }
}
