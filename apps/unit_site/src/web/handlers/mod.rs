// apps/unit_site/src/web/handlers/mod.rs

pub mod content_handlers;
pub mod order_handlers;
pub mod product_handlers;
pub mod song_handlers;
