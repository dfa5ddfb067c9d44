//! Index & Shift Calculation
//!
//! Given the tile the pointer just entered, work out the new drop target,
//! which shifted tiles must slide back, and which tiles must slide over.
//!
//! Shifted tiles keep their nominal index but render one slot closer to the
//! drag start, so hovering one means hovering the slot next to it.

use crate::session::DragSession;
use crate::state::TileState;

/// One tile sliding into its neighbour's slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shift {
    pub index: usize,
    pub into: usize,
}

/// Result of one hover recomputation
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShiftPlan {
    /// New drop target
    pub target: usize,
    /// Tiles to animate back to their nominal slot, in visiting order
    pub resets: Vec<usize>,
    /// Tiles to shift, walking from the target toward the drag start
    pub shifts: Vec<Shift>,
}

/// Step that walks from `target` toward `start`
fn step_toward(start: usize, target: usize) -> isize {
    (start as isize - target as isize).signum()
}

/// Closed-interval membership, regardless of bound order
fn within(index: usize, a: usize, b: usize) -> bool {
    index >= a.min(b) && index <= a.max(b)
}

/// Plan the visual update for hovering `hovered`.
///
/// The shifted-tile correction and the reset pass use the direction toward
/// the previous target; the shift pass uses the direction toward the new
/// one. Only the previous direction can walk the old range back to the
/// start when the pointer crosses over it.
pub fn plan_shifts(session: &DragSession, hovered: usize, states: &[TileState]) -> ShiftPlan {
    let start = session.start_index();
    let previous = session.drop_target();
    let previous_step = previous.map_or(0, |prev| step_toward(start, prev));

    let mut target = hovered as isize;
    if states.get(hovered) == Some(&TileState::Shifted) {
        target += previous_step;
    }
    let target = target as usize;

    let mut resets = Vec::new();
    if let Some(prev) = previous {
        let mut i = prev as isize;
        while i != start as isize {
            let index = i as usize;
            if !within(index, start, target) {
                resets.push(index);
            }
            i += previous_step;
        }
    }

    let step = step_toward(start, target);
    let mut shifts = Vec::new();
    let mut i = target as isize;
    while i != start as isize {
        let index = i as usize;
        if states.get(index) != Some(&TileState::Shifted) {
            shifts.push(Shift {
                index,
                into: (i + step) as usize,
            });
        }
        i += step;
    }

    ShiftPlan {
        target,
        resets,
        shifts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(start: usize, target: Option<usize>) -> DragSession {
        let mut session = DragSession::new(start);
        if let Some(t) = target {
            session.set_drop_target(t);
        }
        session
    }

    fn states(len: usize, dragging: usize, shifted: &[usize]) -> Vec<TileState> {
        (0..len)
            .map(|i| {
                if i == dragging {
                    TileState::Dragging
                } else if shifted.contains(&i) {
                    TileState::Shifted
                } else {
                    TileState::Idle
                }
            })
            .collect()
    }

    #[test]
    fn test_first_hover_shifts_whole_gap() {
        let plan = plan_shifts(&session(0, None), 3, &states(5, 0, &[]));

        assert_eq!(plan.target, 3);
        assert!(plan.resets.is_empty());
        assert_eq!(
            plan.shifts,
            vec![
                Shift { index: 3, into: 2 },
                Shift { index: 2, into: 1 },
                Shift { index: 1, into: 0 },
            ]
        );
    }

    #[test]
    fn test_moving_further_keeps_existing_shifts() {
        // 1 already slid up for target 1; now hovering 2
        let plan = plan_shifts(&session(0, Some(1)), 2, &states(5, 0, &[1]));

        assert_eq!(plan.target, 2);
        assert!(plan.resets.is_empty());
        assert_eq!(plan.shifts, vec![Shift { index: 2, into: 1 }]);
    }

    #[test]
    fn test_hovering_shifted_tile_targets_its_visual_slot() {
        // Dragging 0 down to 3: tile 2 now renders in slot 1
        let plan = plan_shifts(&session(0, Some(3)), 2, &states(5, 0, &[1, 2, 3]));

        assert_eq!(plan.target, 1);
        assert_eq!(plan.resets, vec![3, 2]);
        assert!(plan.shifts.is_empty());
    }

    #[test]
    fn test_upward_drag_shifts_down() {
        let plan = plan_shifts(&session(4, None), 1, &states(5, 4, &[]));

        assert_eq!(plan.target, 1);
        assert_eq!(
            plan.shifts,
            vec![
                Shift { index: 1, into: 2 },
                Shift { index: 2, into: 3 },
                Shift { index: 3, into: 4 },
            ]
        );
    }

    #[test]
    fn test_start_slot_is_noop_target() {
        // Tile 3 is shifted into slot 2, which is the start slot
        let plan = plan_shifts(&session(2, Some(3)), 3, &states(5, 2, &[3]));

        assert_eq!(plan.target, 2);
        assert_eq!(plan.resets, vec![3]);
        assert!(plan.shifts.is_empty());
    }

    #[test]
    fn test_crossing_start_uses_previous_direction_for_resets() {
        // Start 2, was targeting 4 (3 and 4 shifted up), pointer jumps to 0.
        // Resets must walk 4 -> 3 (toward start from the old side), while the
        // new shifts walk 0 -> 1 (toward start from the new side).
        let plan = plan_shifts(&session(2, Some(4)), 0, &states(5, 2, &[3, 4]));

        assert_eq!(plan.target, 0);
        assert_eq!(plan.resets, vec![4, 3]);
        assert_eq!(
            plan.shifts,
            vec![Shift { index: 0, into: 1 }, Shift { index: 1, into: 2 }]
        );
    }

    #[test]
    fn test_shifting_tile_is_shifted_again() {
        let mut tiles = states(4, 0, &[]);
        tiles[1] = TileState::Shifting;

        let plan = plan_shifts(&session(0, Some(1)), 2, &tiles);
        assert_eq!(
            plan.shifts,
            vec![Shift { index: 2, into: 1 }, Shift { index: 1, into: 0 }]
        );
    }
}
