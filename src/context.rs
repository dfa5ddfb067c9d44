//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_reorder::DomReorder;

use crate::models::Tile;

/// Drag reordering bound to the tile grid
pub type TileReorder = DomReorder<RwSignal<Vec<Tile>>>;

/// Board-wide state provided via context
#[derive(Clone, Copy)]
pub struct ReorderContext {
    /// Tiles in display order
    pub tiles: RwSignal<Vec<Tile>>,
    /// Reorder binding, present once the grid has mounted
    reorder: StoredValue<Option<TileReorder>, LocalStorage>,
}

impl ReorderContext {
    pub fn new(tiles: RwSignal<Vec<Tile>>) -> Self {
        Self {
            tiles,
            reorder: StoredValue::new_local(None),
        }
    }

    pub fn is_bound(&self) -> bool {
        self.reorder.with_value(|reorder| reorder.is_some())
    }

    pub fn bind(&self, reorder: TileReorder) {
        self.reorder.set_value(Some(reorder));
    }

    /// Detach the grid's listeners
    pub fn unbind(&self) {
        self.reorder.update_value(|reorder| {
            if let Some(reorder) = reorder.take() {
                reorder.clear_listeners();
            }
        });
    }

    /// Suspend dragging while the pointer is over an editable control
    pub fn set_drag_enabled(&self, enabled: bool) {
        self.reorder.with_value(|reorder| {
            if let Some(reorder) = reorder {
                reorder.toggle_drag(enabled);
            }
        });
    }

    /// Rename a tile in place
    pub fn rename(&self, id: u32, title: String) {
        self.tiles.update(|tiles| {
            if let Some(tile) = tiles.iter_mut().find(|tile| tile.id == id) {
                tile.title = title;
            }
        });
    }
}
