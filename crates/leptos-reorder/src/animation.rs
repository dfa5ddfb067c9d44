//! Animation Coordinator
//!
//! Applies and removes shift transforms and tracks when each transition
//! completes. Completion is timer driven: a non-zero duration hands a ticket
//! to the host's scheduler, a zero duration completes inline. Both paths end
//! in [`AnimationCoordinator::finish`].

use std::time::Duration;

use crate::host::{ReorderHost, TileSurface};
use crate::state::TileState;

/// Which way a tile is animating
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionKind {
    /// Into a neighbour's slot
    Shift,
    /// Back to its own slot
    Reset,
}

/// Handle for one in-flight transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionTicket {
    pub index: usize,
    pub kind: TransitionKind,
    generation: u64,
}

#[derive(Clone, Copy, Debug, Default)]
struct TileSlot {
    state: TileState,
    generation: u64,
    in_flight: bool,
}

/// Per-tile animation state for the current list
#[derive(Debug)]
pub struct AnimationCoordinator {
    slots: Vec<TileSlot>,
    duration: Duration,
    next_generation: u64,
}

impl AnimationCoordinator {
    pub fn new(duration: Duration) -> Self {
        Self {
            slots: Vec::new(),
            duration,
            next_generation: 1,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn state(&self, index: usize) -> TileState {
        self.slots.get(index).map(|slot| slot.state).unwrap_or_default()
    }

    pub fn states(&self) -> Vec<TileState> {
        self.slots.iter().map(|slot| slot.state).collect()
    }

    /// Tiles whose transition has not completed yet
    pub fn pending_transitions(&self) -> usize {
        self.slots.iter().filter(|slot| slot.in_flight).count()
    }

    /// Size the slots for a new gesture and make every tile animate transforms
    pub fn prepare<S: TileSurface>(&mut self, surface: &mut S, tile_count: usize) {
        self.slots = vec![TileSlot::default(); tile_count];
        for index in 0..tile_count {
            surface.set_transition(index, Some(self.duration));
        }
    }

    pub fn mark_dragging<S: TileSurface>(&mut self, surface: &mut S, index: usize, ghost_opacity: f64) {
        self.set_state(surface, index, TileState::Dragging);
        surface.set_opacity(index, Some(ghost_opacity));
    }

    /// Slide `index` so it renders in the resting slot of `into`
    pub fn shift_tile<H: ReorderHost>(&mut self, host: &mut H, index: usize, into: usize) {
        self.set_state(host, index, TileState::Shifting);
        let delta = host.resting_offset(index).delta_to(host.resting_offset(into));
        host.set_transform(index, Some(delta));
        self.begin(host, index, TransitionKind::Shift);
    }

    /// Slide `index` back to its own slot
    pub fn reset_shifted_tile<H: ReorderHost>(&mut self, host: &mut H, index: usize) {
        host.set_transform(index, None);
        self.set_state(host, index, TileState::Shifting);
        self.begin(host, index, TransitionKind::Reset);
    }

    /// Complete a transition. Returns false for stale tickets.
    ///
    /// A shift that completes after its session ended leaves the tile idle.
    pub fn finish<S: TileSurface>(&mut self, surface: &mut S, ticket: TransitionTicket, session_active: bool) -> bool {
        let Some(slot) = self.slots.get_mut(ticket.index) else {
            return false;
        };
        if slot.generation != ticket.generation || !slot.in_flight {
            log::trace!("[REORDER] Ignoring stale transition on tile {}", ticket.index);
            return false;
        }
        slot.in_flight = false;

        match ticket.kind {
            TransitionKind::Shift if session_active => {
                self.set_state(surface, ticket.index, TileState::Shifted);
            }
            TransitionKind::Shift | TransitionKind::Reset => {
                self.set_state(surface, ticket.index, TileState::Idle);
            }
        }
        true
    }

    /// Snap every tile back to rest with no animation, invalidating all
    /// in-flight transitions.
    pub fn finalize_all_without_transition<S: TileSurface>(&mut self, surface: &mut S) {
        let count = surface.tile_count().max(self.slots.len());
        for index in 0..count {
            surface.set_transition(index, None);
            surface.set_transform(index, None);
            surface.set_raised(index, false);
            surface.set_state(index, TileState::Idle);
        }
        for slot in &mut self.slots {
            slot.state = TileState::Idle;
            slot.in_flight = false;
            slot.generation = self.next_generation;
        }
        self.next_generation += 1;
    }

    fn set_state<S: TileSurface>(&mut self, surface: &mut S, index: usize, state: TileState) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.state = state;
        }
        surface.set_state(index, state);
        surface.set_raised(index, state.is_raised());
    }

    fn begin<H: ReorderHost>(&mut self, host: &mut H, index: usize, kind: TransitionKind) {
        let generation = self.next_generation;
        self.next_generation += 1;
        let Some(slot) = self.slots.get_mut(index) else {
            return;
        };
        slot.generation = generation;
        slot.in_flight = true;

        let ticket = TransitionTicket {
            index,
            kind,
            generation,
        };
        if self.duration.is_zero() {
            // Nothing animates, so no timer would ever fire
            self.finish(host, ticket, true);
        } else {
            host.schedule(ticket, self.duration);
        }
    }
}
