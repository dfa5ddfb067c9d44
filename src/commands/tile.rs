//! Tile Commands
//!
//! Frontend bindings for tile-related backend commands.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::invoke;
use crate::models::Tile;

#[derive(Serialize)]
struct ReorderTileArgs {
    #[serde(rename = "oldIndex")]
    old_index: usize,
    #[serde(rename = "newIndex")]
    new_index: usize,
}

pub async fn list_tiles() -> Result<Vec<Tile>, String> {
    let result = invoke("list_tiles", JsValue::NULL)
        .await
        .map_err(|e| format!("{:?}", e))?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Persist a move made on the board
pub async fn reorder_tile(old_index: usize, new_index: usize) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&ReorderTileArgs { old_index, new_index })
        .map_err(|e| e.to_string())?;
    invoke("reorder_tile", js_args)
        .await
        .map_err(|e| format!("{:?}", e))?;
    Ok(())
}
