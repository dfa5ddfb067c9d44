//! Tile Board Frontend App

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_reorder::ReorderConfig;

use crate::commands;
use crate::components::TileGrid;
use crate::context::ReorderContext;
use crate::models::Tile;

/// Body attribute holding an optional JSON reorder config
const CONFIG_ATTRIBUTE: &str = "data-reorder-config";

#[component]
pub fn App() -> impl IntoView {
    let tiles = RwSignal::new(Vec::<Tile>::new());

    // Provide context to all children
    provide_context(ReorderContext::new(tiles));

    // Load tiles on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_tiles().await {
                Ok(loaded) => {
                    log::info!("[APP] Loaded {} tiles", loaded.len());
                    tiles.set(loaded);
                }
                Err(e) => {
                    log::warn!("[APP] Could not load tiles ({}), showing samples", e);
                    tiles.set(Tile::samples());
                }
            }
        });
    });

    view! {
        <main class="tile-board">
            <h1>"Tiles"</h1>
            <p class="hint">"Drag a tile to reorder the board"</p>

            <TileGrid config=load_config() />

            <p class="tile-count">{move || format!("{} tiles", tiles.get().len())}</p>
        </main>
    }
}

fn load_config() -> ReorderConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));
    let Some(raw) = raw else {
        return ReorderConfig::default();
    };
    ReorderConfig::from_json(&raw).unwrap_or_else(|e| {
        log::warn!("[APP] Ignoring {}: {}", CONFIG_ATTRIBUTE, e);
        ReorderConfig::default()
    })
}
