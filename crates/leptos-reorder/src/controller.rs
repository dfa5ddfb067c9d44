//! Drag Lifecycle Controller
//!
//! Owns the single drag session and gates every other piece behind it.
//!
//! ```text
//! Idle --dragstart--> Dragging --dragenter/dragover--> Dragging --dragend--> Idle
//! ```

use crate::animation::{AnimationCoordinator, TransitionTicket};
use crate::config::ReorderConfig;
use crate::host::{OrderedList, ReorderHost};
use crate::session::{DragSession, Reorder};
use crate::shift::plan_shifts;
use crate::state::TileState;

/// Drag-and-drop reordering over an ordered list and its rendered tiles
pub struct DragReorder<L, H> {
    list: L,
    host: H,
    config: ReorderConfig,
    animations: AnimationCoordinator,
    session: Option<DragSession>,
    drag_enabled: bool,
}

impl<L: OrderedList, H: ReorderHost> DragReorder<L, H> {
    pub fn initialize(list: L, host: H, config: ReorderConfig) -> Self {
        let animations = AnimationCoordinator::new(config.transition_duration());
        Self {
            list,
            host,
            config,
            animations,
            session: None,
            drag_enabled: true,
        }
    }

    /// Allow or suppress starting new drags (e.g. while over an input inside a tile)
    pub fn toggle_drag(&mut self, enabled: bool) {
        if self.drag_enabled != enabled {
            log::debug!("[REORDER] Drag {}", if enabled { "enabled" } else { "disabled" });
        }
        self.drag_enabled = enabled;
    }

    pub fn drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn drop_target(&self) -> Option<usize> {
        self.session.as_ref().and_then(DragSession::drop_target)
    }

    pub fn tile_state(&self, index: usize) -> TileState {
        self.animations.state(index)
    }

    pub fn pending_transitions(&self) -> usize {
        self.animations.pending_transitions()
    }

    pub fn config(&self) -> &ReorderConfig {
        &self.config
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Begin a drag on `index`.
    ///
    /// Returns false when the drag must not start; the caller should then
    /// suppress the event's default action.
    pub fn drag_start(&mut self, index: usize) -> bool {
        if !self.drag_enabled {
            log::debug!("[REORDER] dragstart on tile {} while drag is disabled", index);
            return false;
        }
        if let Some(session) = &self.session {
            log::warn!(
                "[REORDER] dragstart on tile {} while tile {} is still being dragged",
                index,
                session.dragging_tile()
            );
            return false;
        }
        let tile_count = self.host.tile_count();
        if index >= tile_count {
            log::warn!("[REORDER] dragstart on unknown tile {} ({} tiles)", index, tile_count);
            return false;
        }
        if self.list.len() != tile_count {
            log::warn!(
                "[REORDER] List has {} records but {} tiles are rendered, refusing drag",
                self.list.len(),
                tile_count
            );
            return false;
        }

        self.animations.prepare(&mut self.host, tile_count);
        self.animations
            .mark_dragging(&mut self.host, index, self.config.ghost_opacity);
        self.session = Some(DragSession::new(index));
        log::debug!("[REORDER] Drag started on tile {}", index);
        true
    }

    /// Pointer entered `index` during a drag
    pub fn drag_enter(&mut self, index: usize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if index >= self.animations.len() || !self.animations.state(index).admits_hover() {
            return;
        }

        let plan = plan_shifts(session, index, &self.animations.states());
        if session.drop_target() != Some(plan.target) {
            log::debug!(
                "[REORDER] Drop target {:?} -> {} (start {})",
                session.drop_target(),
                plan.target,
                session.start_index()
            );
        }

        for &reset in &plan.resets {
            self.animations.reset_shifted_tile(&mut self.host, reset);
        }
        session.set_drop_target(plan.target);
        for shift in &plan.shifts {
            self.animations
                .shift_tile(&mut self.host, shift.index, shift.into);
        }
    }

    /// Pointer is still over `index`.
    ///
    /// Catches a tile that was mid-shift when the pointer entered it and so
    /// never produced a usable `dragenter`.
    pub fn drag_over(&mut self, index: usize) {
        self.drag_enter(index);
    }

    /// Finish the drag that started on `index`, committing the move if any.
    ///
    /// # Panics
    ///
    /// If no drag is active, or `index` is not the tile that started it.
    pub fn drag_end(&mut self, index: usize) -> Option<Reorder> {
        let Some(session) = self.session.take() else {
            panic!("dragend on tile {} with no drag in progress", index);
        };
        assert_eq!(
            index,
            session.dragging_tile(),
            "dragend fired on tile {} but the drag started on tile {}",
            index,
            session.dragging_tile()
        );

        // Snap, so no reverse animation plays before the list re-renders
        self.animations.finalize_all_without_transition(&mut self.host);
        self.host.set_opacity(session.dragging_tile(), None);

        let reorder = session.pending_reorder();
        match reorder {
            Some(Reorder { from, to }) => {
                self.list.move_item(from, to);
                self.host.commit_reorder(from, to);
                log::info!("[REORDER] Moved tile {} -> {}", from, to);
            }
            None => log::debug!("[REORDER] Drag on tile {} ended without a move", index),
        }
        reorder
    }

    /// Abort an active drag without committing. Returns whether one was active.
    pub fn cancel(&mut self) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        self.animations.finalize_all_without_transition(&mut self.host);
        self.host.set_opacity(session.dragging_tile(), None);
        log::debug!("[REORDER] Drag on tile {} cancelled", session.dragging_tile());
        true
    }

    /// Deliver a scheduled transition completion
    pub fn transition_finished(&mut self, ticket: TransitionTicket) {
        let active = self.session.is_some();
        self.animations.finish(&mut self.host, ticket, active);
    }
}
