// src/checkout.rs

use crate::cart::Cart;
use crate::error::CheckoutError;
use crate::order::{NewOrder, OrderLine, PaymentMethod};
use tracing::{info, instrument, warn};

/// What the buyer types into the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
  pub full_name: String,
  pub phone: String,
  pub payment_method: Option<PaymentMethod>,
}

impl Cart {
  /// Builds the order payload for this cart, or says why the form cannot be sent.
  ///
  /// The cart is left untouched; clear it once the server has accepted the order.
  #[instrument(name = "cart::checkout", skip(self, form), fields(lines = self.lines().len()))]
  pub fn checkout(&self, form: &CheckoutForm) -> Result<NewOrder, CheckoutError> {
    if self.is_empty() {
      return Err(CheckoutError::EmptyCart);
    }

    let full_name = form.full_name.trim();
    let phone = form.phone.trim();
    let payment_method = match form.payment_method {
      Some(method) if !full_name.is_empty() && !phone.is_empty() => method,
      _ => {
        warn!("checkout blocked: required form fields missing");
        return Err(CheckoutError::MissingFields);
      }
    };

    if self.missing_sizes().next().is_some() {
      warn!("checkout blocked: size not chosen for every sized item");
      return Err(CheckoutError::MissingSizes);
    }

    let items = self
      .lines()
      .iter()
      .map(|line| {
        Ok(OrderLine {
          name: line.name.clone(),
          quantity: i32::try_from(line.quantity).map_err(|_| CheckoutError::QuantityOutOfRange)?,
          size: line.size.map(|s| s.to_string()),
        })
      })
      .collect::<Result<Vec<_>, CheckoutError>>()?;
    let total_amount = i32::try_from(self.total()).map_err(|_| CheckoutError::TotalOutOfRange)?;

    info!(total_amount, payment_method = %payment_method, "order payload prepared");
    Ok(NewOrder {
      full_name: full_name.to_string(),
      phone: phone.to_string(),
      items,
      total_amount,
      payment_method,
      is_paid: false,
    })
  }
}
