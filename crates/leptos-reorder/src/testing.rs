//! Recording host used by unit tests.

use std::time::Duration;

use crate::animation::TransitionTicket;
use crate::geometry::Offset;
use crate::host::{ReorderHost, TileSurface, TransitionScheduler};
use crate::state::TileState;

/// Tile height used by [`RecordingHost::vertical`]
pub const TILE_HEIGHT: f64 = 50.0;

/// Remembers the last value written for every tile
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub offsets: Vec<Offset>,
    pub states: Vec<TileState>,
    pub transforms: Vec<Option<Offset>>,
    pub transitions: Vec<Option<Duration>>,
    pub raised: Vec<bool>,
    pub opacity: Vec<Option<f64>>,
    pub scheduled: Vec<(TransitionTicket, Duration)>,
    pub commits: Vec<(usize, usize)>,
}

impl RecordingHost {
    /// `count` tiles stacked in a single column
    pub fn vertical(count: usize) -> Self {
        Self {
            offsets: (0..count).map(|i| Offset::new(0.0, i as f64 * TILE_HEIGHT)).collect(),
            states: vec![TileState::Idle; count],
            transforms: vec![None; count],
            transitions: vec![None; count],
            raised: vec![false; count],
            opacity: vec![None; count],
            ..Default::default()
        }
    }

    pub fn take_scheduled(&mut self) -> Vec<TransitionTicket> {
        self.scheduled.drain(..).map(|(ticket, _)| ticket).collect()
    }

    pub fn shifted(&self) -> Vec<usize> {
        (0..self.states.len())
            .filter(|&i| self.states[i] == TileState::Shifted)
            .collect()
    }
}

impl TileSurface for RecordingHost {
    fn tile_count(&self) -> usize {
        self.offsets.len()
    }

    fn resting_offset(&self, index: usize) -> Offset {
        self.offsets[index]
    }

    fn set_state(&mut self, index: usize, state: TileState) {
        self.states[index] = state;
    }

    fn set_transform(&mut self, index: usize, translate: Option<Offset>) {
        self.transforms[index] = translate;
    }

    fn set_transition(&mut self, index: usize, duration: Option<Duration>) {
        self.transitions[index] = duration;
    }

    fn set_raised(&mut self, index: usize, raised: bool) {
        self.raised[index] = raised;
    }

    fn set_opacity(&mut self, index: usize, opacity: Option<f64>) {
        self.opacity[index] = opacity;
    }
}

impl TransitionScheduler for RecordingHost {
    fn schedule(&mut self, ticket: TransitionTicket, after: Duration) {
        self.scheduled.push((ticket, after));
    }
}

impl ReorderHost for RecordingHost {
    fn commit_reorder(&mut self, from: usize, to: usize) {
        self.commits.push((from, to));
    }
}
