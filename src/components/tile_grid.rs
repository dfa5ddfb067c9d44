//! Tile Grid Component
//!
//! Renders the tiles and binds drag reordering to the grid container.

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_reorder::{DomReorder, ReorderConfig};

use crate::commands;
use crate::components::TileCard;
use crate::context::ReorderContext;

/// Reorderable grid of tiles
#[component]
pub fn TileGrid(config: ReorderConfig) -> impl IntoView {
    let ctx = use_context::<ReorderContext>().expect("ReorderContext should be provided");
    let grid_ref = NodeRef::<Div>::new();

    // Bind once the container is in the DOM
    Effect::new(move |_| {
        let Some(grid) = grid_ref.get() else {
            return;
        };
        if ctx.is_bound() {
            return;
        }

        let on_commit = move |from: usize, to: usize| {
            spawn_local(async move {
                if let Err(e) = commands::reorder_tile(from, to).await {
                    log::error!("[TILES] Failed to save move {} -> {}: {}", from, to, e);
                }
            });
        };
        match DomReorder::initialize(grid.into(), ctx.tiles, config.clone(), on_commit) {
            Ok(reorder) => ctx.bind(reorder),
            Err(e) => log::error!("[TILES] Reordering unavailable: {}", e),
        }
    });

    on_cleanup(move || ctx.unbind());

    view! {
        <div class="tile-grid" node_ref=grid_ref>
            <For
                each=move || ctx.tiles.get()
                key=|tile| tile.id
                children=move |tile| view! { <TileCard tile=tile /> }
            />
        </div>
    }
}
