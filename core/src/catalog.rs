// src/catalog.rs

//! The merchandise list. It is compiled in; there is no inventory behind it.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: &'static str,
  pub name: &'static str,
  /// Whole shekels.
  pub price: u32,
  pub image_placeholder: &'static str,
  pub requires_size: bool,
}

const PRODUCTS: [Product; 5] = [
  Product {
    id: "1",
    name: "קפוצ'ון פלוגתי",
    price: 120,
    image_placeholder: "HOODIE",
    requires_size: true,
  },
  Product {
    id: "2",
    name: "חולצת טריקו",
    price: 50,
    image_placeholder: "T-SHIRT",
    requires_size: true,
  },
  Product {
    id: "3",
    name: "חולצת דרייפיט",
    price: 60,
    image_placeholder: "DRI-FIT",
    requires_size: true,
  },
  Product {
    id: "4",
    name: "כובע טקטי",
    price: 40,
    image_placeholder: "HAT",
    requires_size: false,
  },
  Product {
    id: "5",
    name: "פאצ' פלוגתי",
    price: 20,
    image_placeholder: "PATCH",
    requires_size: false,
  },
];

/// All products, in display order.
pub fn products() -> &'static [Product] {
  &PRODUCTS
}

pub fn find_product(id: &str) -> Option<&'static Product> {
  PRODUCTS.iter().find(|p| p.id == id)
}
