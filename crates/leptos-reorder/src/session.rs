//! Drag Session
//!
//! State for one continuous drag gesture, created on `dragstart` and
//! dropped on `dragend`.

/// A committed move from one index to another
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reorder {
    pub from: usize,
    pub to: usize,
}

/// The single active drag gesture
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragSession {
    dragging_tile: usize,
    start_index: usize,
    drop_target: Option<usize>,
}

impl DragSession {
    pub fn new(index: usize) -> Self {
        Self {
            dragging_tile: index,
            start_index: index,
            drop_target: None,
        }
    }

    /// Tile that fired `dragstart`
    pub fn dragging_tile(&self) -> usize {
        self.dragging_tile
    }

    /// Index of the dragged tile when the session began
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Current candidate insertion index (None until a tile has been entered)
    pub fn drop_target(&self) -> Option<usize> {
        self.drop_target
    }

    pub(crate) fn set_drop_target(&mut self, target: usize) {
        self.drop_target = Some(target);
    }

    /// The move `dragend` would commit right now.
    ///
    /// Dropping back onto the start slot is not a move.
    pub fn pending_reorder(&self) -> Option<Reorder> {
        match self.drop_target {
            Some(to) if to != self.start_index => Some(Reorder {
                from: self.start_index,
                to,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_reorder() {
        let mut session = DragSession::new(2);
        assert_eq!(session.pending_reorder(), None);

        session.set_drop_target(2);
        assert_eq!(session.pending_reorder(), None);

        session.set_drop_target(4);
        assert_eq!(session.pending_reorder(), Some(Reorder { from: 2, to: 4 }));
        assert_eq!(session.dragging_tile(), 2);
    }
}
