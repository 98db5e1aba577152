//! Title ladder - job titles unlocked by progress thresholds.

use serde::{Deserialize, Serialize};
use crate::id::{Category, TrackId};

/// Read-only view of the progress figures a threshold can test.
pub trait ProgressMetrics {
    /// Total points across all tracks.
    fn total_points(&self) -> u32;

    /// Points earned within one category.
    fn category_points(&self, category: Category) -> u32;

    /// Current milestone on a track.
    fn milestone(&self, track: TrackId) -> u8;
}

/// A single requirement of a title rule. Each threshold carries its own metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "metric", rename_all = "snake_case")]
pub enum Threshold {
    /// Minimum total points
    TotalPoints { points: u32 },

    /// Minimum points inside a category
    CategoryPoints { category: Category, points: u32 },

    /// Minimum milestone reached on a track
    TrackMilestone { track: TrackId, milestone: u8 },
}

impl Threshold {
    /// Whether the progress satisfies this threshold.
    pub fn is_met(&self, progress: &impl ProgressMetrics) -> bool {
        match self {
            Threshold::TotalPoints { points } => progress.total_points() >= *points,
            Threshold::CategoryPoints { category, points } => {
                progress.category_points(*category) >= *points
            }
            Threshold::TrackMilestone { track, milestone } => {
                progress.milestone(*track) >= *milestone
            }
        }
    }
}

/// A title and the thresholds required to hold it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRule {
    /// Title label
    pub label: String,

    /// All thresholds must be met
    pub thresholds: Vec<Threshold>,
}

impl TitleRule {
    /// Create a rule with no thresholds.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            thresholds: Vec::new(),
        }
    }

    /// Require a minimum total.
    pub fn min_points(mut self, points: u32) -> Self {
        self.thresholds.push(Threshold::TotalPoints { points });
        self
    }

    /// Require a minimum inside a category.
    pub fn min_category_points(mut self, category: Category, points: u32) -> Self {
        self.thresholds.push(Threshold::CategoryPoints { category, points });
        self
    }

    /// Require a minimum milestone on a track.
    pub fn min_milestone(mut self, track: TrackId, milestone: u8) -> Self {
        self.thresholds.push(Threshold::TrackMilestone { track, milestone });
        self
    }

    /// Whether every threshold is met.
    pub fn is_met_by(&self, progress: &impl ProgressMetrics) -> bool {
        self.thresholds.iter().all(|t| t.is_met(progress))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        total: u32,
        building: u32,
        frontend: u8,
    }

    impl ProgressMetrics for Fixed {
        fn total_points(&self) -> u32 {
            self.total
        }

        fn category_points(&self, category: Category) -> u32 {
            if category == Category::Building { self.building } else { 0 }
        }

        fn milestone(&self, track: TrackId) -> u8 {
            if track == TrackId::Frontend { self.frontend } else { 0 }
        }
    }

    #[test]
    fn test_rule_without_thresholds_always_met() {
        let rule = TitleRule::new("Engineer I");
        assert!(rule.is_met_by(&Fixed { total: 0, building: 0, frontend: 0 }));
    }

    #[test]
    fn test_all_thresholds_required() {
        let rule = TitleRule::new("Staff Engineer")
            .min_points(50)
            .min_category_points(Category::Building, 20)
            .min_milestone(TrackId::Frontend, 4);

        assert!(rule.is_met_by(&Fixed { total: 50, building: 20, frontend: 4 }));
        assert!(!rule.is_met_by(&Fixed { total: 49, building: 20, frontend: 4 }));
        assert!(!rule.is_met_by(&Fixed { total: 50, building: 19, frontend: 4 }));
        assert!(!rule.is_met_by(&Fixed { total: 50, building: 20, frontend: 3 }));
    }

    #[test]
    fn test_threshold_serialization_is_tagged() {
        let json = serde_json::to_value(Threshold::TotalPoints { points: 17 }).unwrap();
        assert_eq!(json, serde_json::json!({"metric": "total_points", "points": 17}));
    }
}
