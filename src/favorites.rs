//! Favorites module
//!
//! In-memory favorites keyed by Chinese name, plus plain-text export.

mod export;
pub mod favorites_render;
mod favorites_state;

pub use export::{export_to_file, format_export};
pub use favorites_state::FavoritesState;
