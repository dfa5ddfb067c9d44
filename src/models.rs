//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// A shortcut tile on the board (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub id: u32,
    pub title: String,
    pub url: String,
}

impl Tile {
    pub fn new(id: u32, title: &str, url: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            url: url.to_string(),
        }
    }

    /// Shown when the backend is unavailable
    pub fn samples() -> Vec<Tile> {
        vec![
            Tile::new(1, "Docs", "https://docs.rs"),
            Tile::new(2, "Crates", "https://crates.io"),
            Tile::new(3, "Rust", "https://www.rust-lang.org"),
            Tile::new(4, "Leptos", "https://leptos.dev"),
            Tile::new(5, "Playground", "https://play.rust-lang.org"),
        ]
    }
}
