//! Tile Card Component
//!
//! A single draggable tile on the board.

use leptos::prelude::*;

use crate::context::ReorderContext;
use crate::models::Tile;

/// One tile. Must render as a single element: the grid's reorder binding
/// treats each element child as a tile.
#[component]
pub fn TileCard(tile: Tile) -> impl IntoView {
    let ctx = use_context::<ReorderContext>().expect("ReorderContext should be provided");

    let id = tile.id;
    let url = tile.url.clone();
    let href = url.clone();

    view! {
        <div class="tile" draggable="true">
            // Dragging from inside the text field would steal text selection
            <input
                class="tile-title"
                type="text"
                value=tile.title
                on:mouseenter=move |_| ctx.set_drag_enabled(false)
                on:mouseleave=move |_| ctx.set_drag_enabled(true)
                on:change=move |ev| ctx.rename(id, event_target_value(&ev))
            />
            <a class="tile-url" href=href draggable="false">{url}</a>
        </div>
    }
}
