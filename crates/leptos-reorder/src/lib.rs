//! Leptos Reorder
//!
//! Drag-and-drop reordering for an ordered list of tiles.
//!
//! The core (`DragReorder`) knows nothing about the DOM: it tracks one drag
//! gesture, works out which tiles have to slide out of the way, and talks to
//! the page through the capability traits in [`host`]. The `dom` module binds
//! that core to a real list container using native HTML5 drag events.

mod animation;
mod config;
mod controller;
mod dom;
mod error;
mod geometry;
pub mod host;
mod session;
mod shift;
mod state;

#[cfg(test)]
mod testing;

pub use animation::{AnimationCoordinator, TransitionKind, TransitionTicket};
pub use config::ReorderConfig;
pub use controller::DragReorder;
pub use dom::{DomHost, DomReorder};
pub use error::{ReorderError, ReorderResult};
pub use geometry::Offset;
pub use host::{OrderedList, ReorderHost, TileSurface, TransitionScheduler};
pub use session::{DragSession, Reorder};
pub use shift::{plan_shifts, Shift, ShiftPlan};
pub use state::TileState;
