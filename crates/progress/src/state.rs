//! Progress state - the live evaluation being edited.

use serde::Serialize;
use snowflake_core::{Catalog, TrackId, HIGHEST_MILESTONE};
use std::sync::Arc;
use tracing::debug;

use crate::scoring::{self, MilestoneMap, PointSummary};

/// Full state of one person's evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressSnapshot {
    /// Level per catalog track; every catalog track has an entry
    pub milestone_by_track: MilestoneMap,

    /// Display name
    pub name: String,

    /// Selected title, always one of the eligible titles
    pub title: String,

    /// Track under edit
    pub focused_track: TrackId,
}

/// Owner of the live [`ProgressSnapshot`].
///
/// Every mutation that touches milestones or the title re-runs title
/// eligibility, so readers never observe an ineligible title.
#[derive(Debug, Clone)]
pub struct ProgressState {
    catalog: Arc<Catalog>,
    snapshot: ProgressSnapshot,
}

impl ProgressState {
    /// Start an empty evaluation: every track at 0, junior title, default focus.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let milestone_by_track = zeroed(&catalog);
        let title = scoring::eligible_titles(&catalog, &milestone_by_track)
            .first()
            .map(|t| t.to_string())
            .unwrap_or_default();
        let focused_track = catalog.default_track();

        Self {
            catalog,
            snapshot: ProgressSnapshot {
                milestone_by_track,
                name: String::new(),
                title,
                focused_track,
            },
        }
    }

    /// Catalog this evaluation is scored against.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Read-only view of the snapshot.
    pub fn snapshot(&self) -> &ProgressSnapshot {
        &self.snapshot
    }

    /// Current level of a track.
    pub fn milestone(&self, track: TrackId) -> u8 {
        self.snapshot.milestone_by_track.get(&track).copied().unwrap_or(0)
    }

    /// Set a track's level and focus it.
    ///
    /// # Panics
    ///
    /// Panics if `track` is outside the catalog or `level` exceeds
    /// [`HIGHEST_MILESTONE`].
    pub fn set_milestone(&mut self, track: TrackId, level: u8) {
        self.assert_in_catalog(track);
        assert!(
            level <= HIGHEST_MILESTONE,
            "milestone {} out of range for track {}",
            level,
            track
        );

        self.snapshot.milestone_by_track.insert(track, level);
        self.snapshot.focused_track = track;
        self.reconcile_title();
    }

    /// Move the cursor without touching milestones or title.
    ///
    /// # Panics
    ///
    /// Panics if `track` is outside the catalog.
    pub fn set_focused_track(&mut self, track: TrackId) {
        self.assert_in_catalog(track);
        self.snapshot.focused_track = track;
    }

    /// Select a title. An ineligible candidate is replaced by the first
    /// eligible title rather than rejected.
    pub fn set_title(&mut self, candidate: &str) {
        let titles = scoring::eligible_titles(&self.catalog, &self.snapshot.milestone_by_track);
        let title = if titles.contains(&candidate) {
            candidate
        } else {
            debug!("Title '{}' is not eligible, using '{}'", candidate, titles[0]);
            titles[0]
        };
        self.snapshot.title = title.to_string();
    }

    /// Set the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.snapshot.name = name.into();
    }

    /// Replace every milestone at once. Tracks missing from `milestones`
    /// drop back to 0.
    ///
    /// # Panics
    ///
    /// Panics if an entry names a track outside the catalog or a level above
    /// [`HIGHEST_MILESTONE`].
    pub fn replace_milestones(&mut self, milestones: MilestoneMap) {
        let mut fresh = zeroed(&self.catalog);
        for (track, level) in milestones {
            self.assert_in_catalog(track);
            assert!(level <= HIGHEST_MILESTONE, "milestone {} out of range for track {}", level, track);
            fresh.insert(track, level);
        }
        self.snapshot.milestone_by_track = fresh;
        self.reconcile_title();
    }

    /// Titles currently reachable, most junior first.
    pub fn eligible_titles(&self) -> Vec<&str> {
        scoring::eligible_titles(&self.catalog, &self.snapshot.milestone_by_track)
    }

    /// Total points.
    pub fn total_points(&self) -> u32 {
        scoring::total_points(&self.catalog, &self.snapshot.milestone_by_track)
    }

    /// Points and level band.
    pub fn point_summary(&self) -> PointSummary {
        scoring::point_summary(&self.catalog, &self.snapshot.milestone_by_track)
    }

    /// Keep the title if still eligible, otherwise fall back to the first
    /// eligible title.
    fn reconcile_title(&mut self) {
        let titles = scoring::eligible_titles(&self.catalog, &self.snapshot.milestone_by_track);
        if !titles.contains(&self.snapshot.title.as_str()) {
            debug!("Title '{}' no longer eligible, reset to '{}'", self.snapshot.title, titles[0]);
            self.snapshot.title = titles[0].to_string();
        }
    }

    fn assert_in_catalog(&self, track: TrackId) {
        assert!(self.catalog.contains(track), "track {} is not part of the catalog", track);
    }
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new(Arc::new(Catalog::standard()))
    }
}

fn zeroed(catalog: &Catalog) -> MilestoneMap {
    catalog.track_ids().iter().map(|id| (*id, 0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use snowflake_core::{Category, MilestoneDefinition, TitleRule, TrackDefinition};

    fn ladder_catalog() -> Arc<Catalog> {
        let milestones = [0, 10, 10, 10, 10, 10]
            .iter()
            .map(|p| MilestoneDefinition::new("", *p))
            .collect();
        let catalog = Catalog::new(
            vec![TrackDefinition::new(TrackId::Frontend, "Frontend", Category::Building, "", milestones)],
            vec![
                TitleRule::new("Junior"),
                TitleRule::new("Senior").min_points(30),
                TitleRule::new("Staff").min_points(50),
            ],
        )
        .unwrap();
        Arc::new(catalog)
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = ProgressState::default();
        let snapshot = state.snapshot();
        assert_eq!(snapshot.milestone_by_track.len(), 16);
        assert!(snapshot.milestone_by_track.values().all(|l| *l == 0));
        assert_eq!(snapshot.title, "Engineer I");
        assert_eq!(snapshot.focused_track, TrackId::Frontend);
        assert!(snapshot.name.is_empty());
    }

    #[test]
    fn test_set_milestone_updates_points_and_focus() {
        let mut state = ProgressState::new(ladder_catalog());
        state.set_milestone(TrackId::Frontend, 3);
        assert_eq!(state.total_points(), 30);
        state.set_milestone(TrackId::Frontend, 5);
        assert_eq!(state.total_points(), 50);
        state.set_milestone(TrackId::Frontend, 0);
        assert_eq!(state.total_points(), 0);

        let mut state = ProgressState::default();
        state.set_milestone(TrackId::Craft, 2);
        assert_eq!(state.snapshot().focused_track, TrackId::Craft);
    }

    #[test]
    fn test_set_title_rejects_ineligible() {
        let mut state = ProgressState::new(ladder_catalog());
        state.set_milestone(TrackId::Frontend, 3);
        assert_eq!(state.eligible_titles(), vec!["Junior", "Senior"]);

        state.set_title("Senior");
        assert_eq!(state.snapshot().title, "Senior");

        state.set_title("Staff");
        assert_eq!(state.snapshot().title, "Junior");

        state.set_title("Not a title");
        assert_eq!(state.snapshot().title, "Junior");
    }

    #[test]
    fn test_lowering_milestone_reconciles_title() {
        let mut state = ProgressState::new(ladder_catalog());
        state.set_milestone(TrackId::Frontend, 5);
        state.set_title("Staff");
        assert_eq!(state.snapshot().title, "Staff");

        // Senior is still eligible but the rule is "first eligible"
        state.set_milestone(TrackId::Frontend, 4);
        assert_eq!(state.snapshot().title, "Junior");
    }

    #[test]
    fn test_raising_milestone_keeps_eligible_title() {
        let mut state = ProgressState::new(ladder_catalog());
        state.set_milestone(TrackId::Frontend, 3);
        state.set_title("Senior");
        state.set_milestone(TrackId::Frontend, 5);
        assert_eq!(state.snapshot().title, "Senior");
    }

    #[test]
    fn test_set_focused_track_leaves_progress_alone() {
        let mut state = ProgressState::default();
        state.set_milestone(TrackId::Frontend, 2);
        let before = state.snapshot().clone();

        state.set_focused_track(TrackId::Recruiting);
        assert_eq!(state.snapshot().focused_track, TrackId::Recruiting);
        assert_eq!(state.snapshot().milestone_by_track, before.milestone_by_track);
        assert_eq!(state.snapshot().title, before.title);
    }

    #[test]
    fn test_set_name() {
        let mut state = ProgressState::default();
        state.set_name("Ada Lovelace");
        assert_eq!(state.snapshot().name, "Ada Lovelace");
        state.set_name("");
        assert_eq!(state.snapshot().name, "");
    }

    #[test]
    fn test_replace_milestones_is_wholesale() {
        let mut state = ProgressState::default();
        state.set_milestone(TrackId::Backend, 4);

        let mut fresh = MilestoneMap::new();
        fresh.insert(TrackId::Frontend, 3);
        state.replace_milestones(fresh);

        assert_eq!(state.milestone(TrackId::Frontend), 3);
        assert_eq!(state.milestone(TrackId::Backend), 0);
        assert_eq!(state.snapshot().milestone_by_track.len(), 16);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_milestone_out_of_range_panics() {
        let mut state = ProgressState::default();
        state.set_milestone(TrackId::Frontend, HIGHEST_MILESTONE + 1);
    }

    #[test]
    #[should_panic(expected = "not part of the catalog")]
    fn test_set_milestone_outside_catalog_panics() {
        let mut state = ProgressState::new(ladder_catalog());
        state.set_milestone(TrackId::Backend, 1);
    }

    #[test]
    #[should_panic(expected = "not part of the catalog")]
    fn test_set_focused_track_outside_catalog_panics() {
        let mut state = ProgressState::new(ladder_catalog());
        state.set_focused_track(TrackId::Mentorship);
    }
}
