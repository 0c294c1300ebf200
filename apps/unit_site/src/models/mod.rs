// apps/unit_site/src/models/mod.rs

//! Row types for the three site tables.

pub mod content;
pub mod order;
pub mod song;

pub use content::{ContentUpdate, SiteContent};
pub use order::Order;
pub use song::{NewSong, Song};
