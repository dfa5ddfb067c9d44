//! UI Components
//!
//! Reusable Leptos components.

mod tile_card;
mod tile_grid;

pub use tile_card::TileCard;
pub use tile_grid::TileGrid;
