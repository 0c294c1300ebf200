// src/error.rs
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// One failed rule on one field of an inbound payload.
///
/// `field` is a dotted path into the JSON body (`items.0.quantity`); the empty
/// string means the body itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
  pub field: String,
  pub message: String,
}

impl FieldIssue {
  pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      field: field.into(),
      message: message.into(),
    }
  }
}

impl fmt::Display for FieldIssue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.field.is_empty() {
      write!(f, "{}", self.message)
    } else {
      write!(f, "{}: {}", self.field, self.message)
    }
  }
}

/// Every rule an order payload broke, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid order payload: {}", summarize(.issues))]
pub struct ValidationErrors {
  issues: Vec<FieldIssue>,
}

impl ValidationErrors {
  pub(crate) fn new(issues: Vec<FieldIssue>) -> Self {
    Self { issues }
  }

  pub(crate) fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
    Self::new(vec![FieldIssue::new(field, message)])
  }

  /// The issue reported to callers; the first field that failed.
  pub fn first(&self) -> Option<&FieldIssue> {
    self.issues.first()
  }

  pub fn issues(&self) -> &[FieldIssue] {
    &self.issues
  }

  pub fn len(&self) -> usize {
    self.issues.len()
  }

  pub fn is_empty(&self) -> bool {
    self.issues.is_empty()
  }
}

fn summarize(issues: &[FieldIssue]) -> String {
  match issues {
    [] => "no issues recorded".to_string(),
    [only] => only.to_string(),
    [first, rest @ ..] => format!("{} (and {} more)", first, rest.len()),
  }
}

/// Problems caught on the buyer's side before an order is ever sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckoutError {
  #[error("The cart is empty")]
  EmptyCart,

  #[error("Please fill in all required fields")]
  MissingFields,

  #[error("Please choose a size for every item that requires one")]
  MissingSizes,

  #[error("An item quantity is larger than an order can carry")]
  QuantityOutOfRange,

  #[error("Order total does not fit the order amount range")]
  TotalOutOfRange,
}
