//! Host Capabilities
//!
//! What the reorder core needs from the page that renders the tiles and
//! owns the data. Implemented over real DOM elements in `dom`, and by a
//! recording fake in tests.

use std::time::Duration;

use leptos::prelude::*;

use crate::animation::TransitionTicket;
use crate::geometry::Offset;
use crate::state::TileState;

/// Rendered tiles, addressed by their current index
pub trait TileSurface {
    /// Number of rendered tiles
    fn tile_count(&self) -> usize;

    /// Untransformed position of a tile (`offsetLeft` / `offsetTop`)
    fn resting_offset(&self, index: usize) -> Offset;

    fn set_state(&mut self, index: usize, state: TileState);

    /// Apply (`Some`) or clear (`None`) a translation
    fn set_transform(&mut self, index: usize, translate: Option<Offset>);

    /// Animate transform changes over `duration`, or stop animating them (`None`)
    fn set_transition(&mut self, index: usize, duration: Option<Duration>);

    fn set_raised(&mut self, index: usize, raised: bool);

    /// Override (`Some`) or restore (`None`) opacity
    fn set_opacity(&mut self, index: usize, opacity: Option<f64>);
}

/// Timer service used to detect transition completion.
///
/// After `after` has elapsed the host hands the ticket back to
/// [`DragReorder::transition_finished`](crate::DragReorder::transition_finished).
pub trait TransitionScheduler {
    fn schedule(&mut self, ticket: TransitionTicket, after: Duration);
}

/// Everything the drag controller talks to
pub trait ReorderHost: TileSurface + TransitionScheduler {
    /// Called once per completed drag that moved a tile, after the list has been updated
    fn commit_reorder(&mut self, from: usize, to: usize);
}

/// The authoritative ordered data behind the tiles
pub trait OrderedList {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove the record at `from` and insert it at `to`
    fn move_item(&mut self, from: usize, to: usize);
}

impl<T> OrderedList for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn move_item(&mut self, from: usize, to: usize) {
        let item = self.remove(from);
        self.insert(to, item);
    }
}

/// Reactive list: one notification per move
impl<T: Send + Sync + 'static> OrderedList for RwSignal<Vec<T>> {
    fn len(&self) -> usize {
        self.with_untracked(|items| items.len())
    }

    fn move_item(&mut self, from: usize, to: usize) {
        self.update(|items| OrderedList::move_item(items, from, to));
    }
}
