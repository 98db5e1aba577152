//! Edit cursor navigation.
//!
//! The cursor has two axes: which track is focused, and that track's
//! milestone. Track stepping wraps around the catalog order; milestone
//! stepping saturates at `0` and [`HIGHEST_MILESTONE`]. All changes go
//! through [`ProgressState`], so title reconciliation always runs.

use serde::{Deserialize, Serialize};
use snowflake_core::{TrackId, HIGHEST_MILESTONE};
use tracing::debug;

use crate::state::ProgressState;

/// Directional input mapped onto cursor moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavigationKey {
    /// Focus the next track
    NextTrack,
    /// Focus the previous track
    PrevTrack,
    /// Raise the focused track one milestone
    IncreaseMilestone,
    /// Lower the focused track one milestone
    DecreaseMilestone,
}

/// Cursor controller borrowing the live state for one or more moves.
pub struct Navigator<'a> {
    state: &'a mut ProgressState,
}

impl<'a> Navigator<'a> {
    /// Wrap the state.
    pub fn new(state: &'a mut ProgressState) -> Self {
        Self { state }
    }

    /// Move focus `delta` tracks through catalog order, wrapping both ways.
    pub fn shift_focused_track(&mut self, delta: i32) {
        let ids = self.state.catalog().track_ids();
        let current = self.state.snapshot().focused_track;
        let index = self.state.catalog().position(current).unwrap_or(0) as i64;
        let next = ids[(index + delta as i64).rem_euclid(ids.len() as i64) as usize];

        debug!("Focus {} -> {}", current, next);
        self.state.set_focused_track(next);
    }

    /// Move the focused track's milestone by `delta`, clamped to
    /// `0..=HIGHEST_MILESTONE`.
    pub fn shift_focused_track_milestone(&mut self, delta: i32) {
        let track = self.state.snapshot().focused_track;
        let current = self.state.milestone(track) as i64;
        let milestone = (current + delta as i64).clamp(0, HIGHEST_MILESTONE as i64) as u8;

        debug!("Milestone {} {} -> {}", track, current, milestone);
        self.state.set_milestone(track, milestone);
    }

    /// Direct selection of a milestone cell.
    pub fn handle_track_milestone_change(&mut self, track: TrackId, milestone: u8) {
        self.state.set_milestone(track, milestone);
    }

    /// Direct selection of a track.
    pub fn set_focused_track_id(&mut self, track: TrackId) {
        self.state.set_focused_track(track);
    }

    /// Apply one key press.
    pub fn apply(&mut self, key: NavigationKey) {
        match key {
            NavigationKey::NextTrack => self.shift_focused_track(1),
            NavigationKey::PrevTrack => self.shift_focused_track(-1),
            NavigationKey::IncreaseMilestone => self.shift_focused_track_milestone(1),
            NavigationKey::DecreaseMilestone => self.shift_focused_track_milestone(-1),
        }
    }

    /// Apply a sequence of key presses in order.
    pub fn apply_all(&mut self, keys: impl IntoIterator<Item = NavigationKey>) {
        for key in keys {
            self.apply(key);
        }
    }
}

impl ProgressState {
    /// Borrow a cursor controller over this state.
    pub fn navigator(&mut self) -> Navigator<'_> {
        Navigator::new(self)
    }
}
