// apps/unit_site/src/state.rs
use crate::storage::Storage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub storage: Arc<dyn Storage>,
}

impl AppState {
  pub fn new(storage: Arc<dyn Storage>) -> Self {
    Self { storage }
  }
}
