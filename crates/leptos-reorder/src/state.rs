//! Tile State
//!
//! Transient classification of a tile during a drag gesture.

/// Where a tile is in the drag/shift lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileState {
    /// Resting in its nominal slot
    #[default]
    Idle,
    /// The tile being dragged (rendered as a near-invisible ghost)
    Dragging,
    /// A shift or un-shift animation is in flight
    Shifting,
    /// Settled one slot away from its nominal index
    Shifted,
}

impl TileState {
    /// CSS class carried by the tile element, if any
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            TileState::Idle => None,
            TileState::Dragging => Some("dragging"),
            TileState::Shifting => Some("shifting"),
            TileState::Shifted => Some("shifted"),
        }
    }

    /// All classes this crate may put on a tile
    pub const CLASSES: [&'static str; 3] = ["dragging", "shifting", "shifted"];

    /// Whether hovering a tile in this state may change the drop target.
    ///
    /// Mid-animation tiles and the dragged tile itself are ignored so a tile
    /// sliding under the pointer cannot retrigger the computation.
    pub fn admits_hover(&self) -> bool {
        match self {
            TileState::Idle | TileState::Shifted => true,
            TileState::Dragging | TileState::Shifting => false,
        }
    }

    /// Shifting and shifted tiles sit above their neighbours so they win drag hit-tests
    pub fn is_raised(&self) -> bool {
        matches!(self, TileState::Shifting | TileState::Shifted)
    }
}
