// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use serde_json::{json, Value};
use tracing::Level;
use unit_site_core::{find_product, Product};

// --- Catalog shortcuts ---
pub fn hoodie() -> &'static Product {
  find_product("1").expect("hoodie in catalog")
}

pub fn tshirt() -> &'static Product {
  find_product("2").expect("t-shirt in catalog")
}

pub fn cap() -> &'static Product {
  find_product("4").expect("cap in catalog")
}

pub fn patch() -> &'static Product {
  find_product("5").expect("patch in catalog")
}

// --- Payload builders ---
pub fn valid_order_payload() -> Value {
  json!({
    "fullName": "Israel Israeli",
    "phone": "050-1234567",
    "items": [
      { "name": "Hoodie", "quantity": 2, "size": "L" },
      { "name": "Cap", "quantity": 1 }
    ],
    "totalAmount": 280,
    "paymentMethod": "bit"
  })
}

pub fn without(mut payload: Value, field: &str) -> Value {
  if let Some(obj) = payload.as_object_mut() {
    obj.remove(field);
  }
  payload
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
