//! Track model - a competency axis with an ordered milestone ladder.

use serde::{Deserialize, Serialize};
use crate::id::{Category, TrackId};

/// Highest reachable milestone on every track.
pub const HIGHEST_MILESTONE: u8 = 5;

/// Number of entries in every milestone ladder (baseline included).
pub const LADDER_LEN: usize = HIGHEST_MILESTONE as usize + 1;

/// One rung of a track's ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneDefinition {
    /// Short summary of the level
    pub summary: String,

    /// Example behaviours that demonstrate the level
    pub signals: Vec<String>,

    /// Points awarded for reaching this level
    pub points: u32,
}

impl MilestoneDefinition {
    /// Create a milestone without example signals.
    pub fn new(summary: impl Into<String>, points: u32) -> Self {
        Self {
            summary: summary.into(),
            signals: Vec::new(),
            points,
        }
    }

    /// Add an example signal.
    pub fn with_signal(mut self, signal: impl Into<String>) -> Self {
        self.signals.push(signal.into());
        self
    }
}

/// A track together with its milestone ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackDefinition {
    /// Track identifier
    pub id: TrackId,

    /// Display name
    pub display_name: String,

    /// Category the track belongs to
    pub category: Category,

    /// What the track measures
    pub description: String,

    /// Ladder from index 0 (unattained) to [`HIGHEST_MILESTONE`]
    pub milestones: Vec<MilestoneDefinition>,
}

impl TrackDefinition {
    /// Create a track definition.
    pub fn new(
        id: TrackId,
        display_name: impl Into<String>,
        category: Category,
        description: impl Into<String>,
        milestones: Vec<MilestoneDefinition>,
    ) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            category,
            description: description.into(),
            milestones,
        }
    }

    /// Cumulative points for reaching `milestone`.
    ///
    /// # Panics
    ///
    /// Panics if `milestone` is above [`HIGHEST_MILESTONE`].
    pub fn points_at(&self, milestone: u8) -> u32 {
        assert!(
            milestone <= HIGHEST_MILESTONE,
            "milestone {} out of range for track {}",
            milestone,
            self.id
        );
        self.milestones[..=milestone as usize]
            .iter()
            .map(|m| m.points)
            .sum()
    }

    /// Definition of a single milestone, if in range.
    pub fn milestone(&self, milestone: u8) -> Option<&MilestoneDefinition> {
        self.milestones.get(milestone as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder(points: [u32; LADDER_LEN]) -> TrackDefinition {
        let milestones = points
            .iter()
            .enumerate()
            .map(|(i, p)| MilestoneDefinition::new(format!("level {}", i), *p))
            .collect();
        TrackDefinition::new(TrackId::Frontend, "Frontend", Category::Building, "", milestones)
    }

    #[test]
    fn test_points_are_cumulative() {
        let track = ladder([0, 1, 2, 3, 6, 8]);
        let totals: Vec<u32> = (0..=HIGHEST_MILESTONE).map(|m| track.points_at(m)).collect();
        assert_eq!(totals, vec![0, 1, 3, 6, 12, 20]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_points_at_rejects_out_of_range() {
        ladder([0; LADDER_LEN]).points_at(HIGHEST_MILESTONE + 1);
    }

    #[test]
    fn test_milestone_lookup() {
        let track = ladder([0, 1, 2, 3, 6, 8]);
        assert_eq!(track.milestone(3).map(|m| m.points), Some(3));
        assert!(track.milestone(6).is_none());
    }

    #[test]
    fn test_with_signal() {
        let m = MilestoneDefinition::new("Ships features", 1)
            .with_signal("Fixes bugs")
            .with_signal("Writes tests");
        assert_eq!(m.signals.len(), 2);
    }
}
