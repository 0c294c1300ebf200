// src/cart.rs

//! The cart state manager.
//!
//! A `Cart` belongs to one browsing session and is never persisted. Mutations
//! are infallible: an id that matches no line is ignored.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Garment sizes offered for products that need one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
  S,
  M,
  L,
  #[serde(rename = "XL")]
  Xl,
  #[serde(rename = "XXL")]
  Xxl,
}

impl Size {
  pub const ALL: [Size; 5] = [Size::S, Size::M, Size::L, Size::Xl, Size::Xxl];

  pub fn as_str(&self) -> &'static str {
    match self {
      Size::S => "S",
      Size::M => "M",
      Size::L => "L",
      Size::Xl => "XL",
      Size::Xxl => "XXL",
    }
  }
}

impl fmt::Display for Size {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Size {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Size::ALL
      .into_iter()
      .find(|size| size.as_str().eq_ignore_ascii_case(s.trim()))
      .ok_or_else(|| format!("unknown size '{}'", s))
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
  pub product_id: String,
  pub name: String,
  pub unit_price: u32,
  /// Always at least 1.
  pub quantity: u32,
  pub size: Option<Size>,
  pub requires_size: bool,
}

impl CartLine {
  fn from_product(product: &Product) -> Self {
    Self {
      product_id: product.id.to_string(),
      name: product.name.to_string(),
      unit_price: product.price,
      quantity: 1,
      size: None,
      requires_size: product.requires_size,
    }
  }

  pub fn subtotal(&self) -> u64 {
    u64::from(self.unit_price) * u64::from(self.quantity)
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
  lines: Vec<CartLine>,
}

impl Cart {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds one unit of `product`, merging into its existing line if there is one.
  pub fn add(&mut self, product: &Product) {
    match self.line_mut(product.id) {
      Some(line) => {
        line.quantity = line.quantity.saturating_add(1);
        debug!(product_id = product.id, quantity = line.quantity, "cart line incremented");
      }
      None => {
        self.lines.push(CartLine::from_product(product));
        debug!(product_id = product.id, "cart line added");
      }
    }
  }

  /// Moves a line's quantity by `delta`, never below 1. Removing a line is
  /// [`Cart::remove_item`]'s job.
  pub fn update_quantity(&mut self, product_id: &str, delta: i32) {
    if let Some(line) = self.line_mut(product_id) {
      let next = (i64::from(line.quantity) + i64::from(delta)).clamp(1, i64::from(u32::MAX));
      line.quantity = u32::try_from(next).unwrap_or(1);
    }
  }

  pub fn update_size(&mut self, product_id: &str, size: Size) {
    if let Some(line) = self.line_mut(product_id) {
      line.size = Some(size);
    }
  }

  pub fn remove_item(&mut self, product_id: &str) {
    self.lines.retain(|line| line.product_id != product_id);
  }

  pub fn clear(&mut self) {
    self.lines.clear();
  }

  pub fn lines(&self) -> &[CartLine] {
    &self.lines
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  /// Sum of price × quantity over all lines.
  pub fn total(&self) -> u64 {
    self.lines.iter().map(CartLine::subtotal).sum()
  }

  /// Number of units, not lines.
  pub fn item_count(&self) -> u64 {
    self.lines.iter().map(|line| u64::from(line.quantity)).sum()
  }

  /// Lines that need a size and do not have one yet.
  pub fn missing_sizes(&self) -> impl Iterator<Item = &CartLine> {
    self.lines.iter().filter(|line| line.requires_size && line.size.is_none())
  }

  fn line_mut(&mut self, product_id: &str) -> Option<&mut CartLine> {
    self.lines.iter_mut().find(|line| line.product_id == product_id)
  }
}
