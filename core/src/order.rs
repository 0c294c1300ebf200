// src/order.rs

//! Order payload types and the validator that guards order creation.

use crate::error::{FieldIssue, ValidationErrors};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument};

/// How the buyer intends to pay. Settlement happens outside the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
  Bit,
  Paybox,
}

impl PaymentMethod {
  pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Bit, PaymentMethod::Paybox];

  pub fn as_str(&self) -> &'static str {
    match self {
      PaymentMethod::Bit => "bit",
      PaymentMethod::Paybox => "paybox",
    }
  }
}

impl fmt::Display for PaymentMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for PaymentMethod {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    PaymentMethod::ALL
      .into_iter()
      .find(|m| m.as_str() == s)
      .ok_or_else(|| format!("unknown payment method '{}'", s))
  }
}

/// One ordered item as stored with the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
  pub name: String,
  pub quantity: i32,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub size: Option<String>,
}

/// A validated order, ready to be inserted.
///
/// `total_amount` is taken as submitted; it is not recomputed from item prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
  pub full_name: String,
  pub phone: String,
  pub items: Vec<OrderLine>,
  pub total_amount: i32,
  pub payment_method: PaymentMethod,
  #[serde(default)]
  pub is_paid: bool,
}

/// Checks a raw order body field by field.
///
/// Fields are visited in the order `fullName`, `phone`, `items`, `totalAmount`,
/// `paymentMethod`, `isPaid`, and every failure is collected, so
/// [`ValidationErrors::first`] names the earliest offending field.
#[instrument(name = "order::validate", skip(payload))]
pub fn validate_order(payload: &Value) -> Result<NewOrder, ValidationErrors> {
  let Some(body) = payload.as_object() else {
    return Err(ValidationErrors::single(
      "",
      format!("Expected object, received {}", type_name(payload)),
    ));
  };

  let mut issues = Vec::new();
  let full_name = required_text(body, "fullName", &mut issues);
  let phone = required_text(body, "phone", &mut issues);
  let items = order_lines(body.get("items"), &mut issues);
  let total_amount = integer_in_range(body.get("totalAmount"), "totalAmount", i64::from(i32::MIN), &mut issues);
  let payment_method = payment_method(body.get("paymentMethod"), &mut issues);
  let is_paid = optional_bool(body.get("isPaid"), "isPaid", &mut issues);

  match (full_name, phone, items, total_amount, payment_method, is_paid) {
    (Some(full_name), Some(phone), Some(items), Some(total_amount), Some(payment_method), Some(is_paid))
      if issues.is_empty() =>
    {
      Ok(NewOrder {
        full_name,
        phone,
        items,
        total_amount,
        payment_method,
        is_paid,
      })
    }
    _ => {
      debug!(issues = issues.len(), "order payload rejected");
      Err(ValidationErrors::new(issues))
    }
  }
}

fn type_name(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

fn required_text(body: &Map<String, Value>, field: &str, issues: &mut Vec<FieldIssue>) -> Option<String> {
  text_at(body.get(field), field, issues)
}

fn text_at(value: Option<&Value>, field: &str, issues: &mut Vec<FieldIssue>) -> Option<String> {
  match value {
    None => {
      issues.push(FieldIssue::new(field, "Required"));
      None
    }
    Some(Value::String(s)) if s.trim().is_empty() => {
      issues.push(FieldIssue::new(field, "String must contain at least 1 character(s)"));
      None
    }
    Some(Value::String(s)) => Some(s.trim().to_string()),
    Some(other) => {
      issues.push(FieldIssue::new(
        field,
        format!("Expected string, received {}", type_name(other)),
      ));
      None
    }
  }
}

fn integer_in_range(value: Option<&Value>, field: &str, min: i64, issues: &mut Vec<FieldIssue>) -> Option<i32> {
  let number = match value {
    None => {
      issues.push(FieldIssue::new(field, "Required"));
      return None;
    }
    Some(Value::Number(n)) => n,
    Some(other) => {
      issues.push(FieldIssue::new(
        field,
        format!("Expected number, received {}", type_name(other)),
      ));
      return None;
    }
  };

  let n = if let Some(n) = number.as_i64() {
    n
  } else if number.is_u64() {
    // u64 beyond i64 is still an integer, just far out of range.
    issues.push(FieldIssue::new(
      field,
      format!("Number must be less than or equal to {}", i32::MAX),
    ));
    return None;
  } else {
    // JSON has one number type: `2.0` is the integer 2.
    match number.as_f64() {
      // The cast saturates; the range checks below reject anything that clipped.
      Some(f) if f.is_finite() && f.fract() == 0.0 => f as i64,
      _ => {
        issues.push(FieldIssue::new(field, "Expected integer, received float"));
        return None;
      }
    }
  };

  if n < min {
    issues.push(FieldIssue::new(
      field,
      format!("Number must be greater than or equal to {}", min),
    ));
    return None;
  }
  match i32::try_from(n) {
    Ok(n) => Some(n),
    Err(_) => {
      issues.push(FieldIssue::new(
        field,
        format!("Number must be less than or equal to {}", i32::MAX),
      ));
      None
    }
  }
}

fn order_lines(value: Option<&Value>, issues: &mut Vec<FieldIssue>) -> Option<Vec<OrderLine>> {
  let entries = match value {
    None => {
      issues.push(FieldIssue::new("items", "Required"));
      return None;
    }
    Some(Value::Array(entries)) => entries,
    Some(other) => {
      issues.push(FieldIssue::new(
        "items",
        format!("Expected array, received {}", type_name(other)),
      ));
      return None;
    }
  };

  if entries.is_empty() {
    issues.push(FieldIssue::new("items", "Array must contain at least 1 element(s)"));
    return None;
  }

  let before = issues.len();
  let mut lines = Vec::with_capacity(entries.len());
  for (idx, entry) in entries.iter().enumerate() {
    let path = format!("items.{}", idx);
    let Some(item) = entry.as_object() else {
      issues.push(FieldIssue::new(
        path,
        format!("Expected object, received {}", type_name(entry)),
      ));
      continue;
    };

    let name = text_at(item.get("name"), &format!("{}.name", path), issues);
    let quantity = integer_in_range(item.get("quantity"), &format!("{}.quantity", path), 1, issues);
    let size = optional_text(item.get("size"), &format!("{}.size", path), issues);
    if let (Some(name), Some(quantity), Some(size)) = (name, quantity, size) {
      lines.push(OrderLine { name, quantity, size });
    }
  }

  (issues.len() == before).then_some(lines)
}

/// `Some(None)` when absent or null, `None` when present with the wrong type.
fn optional_text(value: Option<&Value>, field: &str, issues: &mut Vec<FieldIssue>) -> Option<Option<String>> {
  match value {
    None | Some(Value::Null) => Some(None),
    Some(Value::String(s)) => Some(Some(s.clone())),
    Some(other) => {
      issues.push(FieldIssue::new(
        field,
        format!("Expected string, received {}", type_name(other)),
      ));
      None
    }
  }
}

fn payment_method(value: Option<&Value>, issues: &mut Vec<FieldIssue>) -> Option<PaymentMethod> {
  const FIELD: &str = "paymentMethod";
  match value {
    None => {
      issues.push(FieldIssue::new(FIELD, "Required"));
      None
    }
    Some(Value::String(s)) => match s.parse::<PaymentMethod>() {
      Ok(method) => Some(method),
      Err(_) => {
        let expected = PaymentMethod::ALL
          .iter()
          .map(|m| format!("'{}'", m))
          .collect::<Vec<_>>()
          .join(" | ");
        issues.push(FieldIssue::new(
          FIELD,
          format!("Invalid enum value. Expected {}, received '{}'", expected, s),
        ));
        None
      }
    },
    Some(other) => {
      issues.push(FieldIssue::new(
        FIELD,
        format!("Expected string, received {}", type_name(other)),
      ));
      None
    }
  }
}

fn optional_bool(value: Option<&Value>, field: &str, issues: &mut Vec<FieldIssue>) -> Option<bool> {
  match value {
    None | Some(Value::Null) => Some(false),
    Some(Value::Bool(b)) => Some(*b),
    Some(other) => {
      issues.push(FieldIssue::new(
        field,
        format!("Expected boolean, received {}", type_name(other)),
      ));
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn payment_method_round_trips_through_str() {
    for method in PaymentMethod::ALL {
      assert_eq!(method.as_str().parse::<PaymentMethod>(), Ok(method));
    }
    assert!("cash".parse::<PaymentMethod>().is_err());
  }

  #[test]
  fn float_quantity_is_not_an_integer() {
    let mut issues = Vec::new();
    assert_eq!(integer_in_range(Some(&json!(1.5)), "q", 1, &mut issues), None);
    assert_eq!(issues[0].message, "Expected integer, received float");
  }

  #[test]
  fn integral_float_counts_as_integer() {
    let mut issues = Vec::new();
    assert_eq!(integer_in_range(Some(&json!(2.0)), "q", 1, &mut issues), Some(2));
    assert_eq!(integer_in_range(Some(&json!(1e10)), "q", 1, &mut issues), None);
    assert_eq!(issues.len(), 1);
  }

  #[test]
  fn amount_above_i32_is_rejected() {
    let mut issues = Vec::new();
    let huge = json!(i64::from(i32::MAX) + 1);
    assert_eq!(integer_in_range(Some(&huge), "totalAmount", 0, &mut issues), None);
    assert_eq!(issues[0].message, "Number must be less than or equal to 2147483647");
  }

  #[test]
  fn null_size_is_treated_as_absent() {
    let mut issues = Vec::new();
    assert_eq!(optional_text(Some(&Value::Null), "items.0.size", &mut issues), Some(None));
    assert!(issues.is_empty());
  }
}
