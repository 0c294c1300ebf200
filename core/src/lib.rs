// src/lib.rs

//! Domain rules for the unit community site.
//!
//! The crate carries everything that does not need a database:
//!  - The fixed merchandise catalog.
//!  - The per-session cart state manager (merge by product, clamped quantities, sizes).
//!  - Checkout, turning a cart and the buyer's form into an order payload.
//!  - Validation of inbound order payloads, reporting failures per field.
//!
//! The HTTP server in `apps/unit_site` persists what this crate validates.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod order;

// --- Re-exports for the Public API ---

pub use crate::cart::{Cart, CartLine, Size};
pub use crate::catalog::{find_product, products, Product};
pub use crate::checkout::CheckoutForm;
pub use crate::error::{CheckoutError, FieldIssue, ValidationErrors};
pub use crate::order::{validate_order, NewOrder, OrderLine, PaymentMethod};
