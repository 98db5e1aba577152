//! Scoring and title eligibility.
//!
//! Every function here is a pure derivation over a [`Catalog`] and a
//! milestone map:
//! - Points per track and in total
//! - Points per category
//! - Eligible titles, walking the ladder junior to senior
//! - Level summary (current level band and distance to the next)

use serde::Serialize;
use snowflake_core::{Catalog, Category, ProgressMetrics, TrackId};
use std::collections::BTreeMap;

/// Milestone level per track.
pub type MilestoneMap = BTreeMap<TrackId, u8>;

/// Cumulative points for `milestone` on `track`.
///
/// # Panics
///
/// Panics if `track` is outside the catalog or `milestone` is above
/// [`snowflake_core::HIGHEST_MILESTONE`]. Clamping is the navigator's job.
pub fn points_for_track(catalog: &Catalog, track: TrackId, milestone: u8) -> u32 {
    catalog.definition_of(track).points_at(milestone)
}

/// Sum of track points over every catalog track. Missing entries count as 0.
pub fn total_points(catalog: &Catalog, milestones: &MilestoneMap) -> u32 {
    catalog
        .track_ids()
        .iter()
        .map(|id| points_for_track(catalog, *id, level_of(milestones, *id)))
        .sum()
}

/// Points per category. Every category appears, even with no catalog tracks.
pub fn category_points(catalog: &Catalog, milestones: &MilestoneMap) -> BTreeMap<Category, u32> {
    let mut totals: BTreeMap<Category, u32> = Category::ALL.iter().map(|c| (*c, 0)).collect();
    for track in catalog.tracks() {
        *totals.entry(track.category).or_insert(0) += track.points_at(level_of(milestones, track.id));
    }
    totals
}

/// Titles the milestones qualify for, most junior first.
///
/// Never empty for a validated catalog: the junior title is reachable from
/// the zero evaluation. Callers treat the first entry as the default title.
pub fn eligible_titles<'c>(catalog: &'c Catalog, milestones: &MilestoneMap) -> Vec<&'c str> {
    let scorecard = Scorecard::new(catalog, milestones);
    let titles: Vec<&str> = catalog
        .titles()
        .iter()
        .filter(|rule| rule.is_met_by(&scorecard))
        .map(|rule| rule.label.as_str())
        .collect();
    debug_assert!(!titles.is_empty(), "catalog has no reachable title");
    titles
}

/// Point totals and level band for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointSummary {
    /// Total points
    pub total_points: u32,

    /// Label of the current level band
    pub level: String,

    /// Label of the next band, if any
    pub next_level: Option<String>,

    /// Points still needed to reach the next band
    pub points_to_next_level: Option<u32>,

    /// Points available in the catalog
    pub max_points: u32,
}

/// Summarise total points against the catalog's level bands.
pub fn point_summary(catalog: &Catalog, milestones: &MilestoneMap) -> PointSummary {
    let total = total_points(catalog, milestones);
    let levels = catalog.levels();
    let current = levels.iter().rev().find(|band| band.min_points <= total);
    let next = levels.iter().find(|band| band.min_points > total);

    PointSummary {
        total_points: total,
        level: current.map(|band| band.label.clone()).unwrap_or_default(),
        next_level: next.map(|band| band.label.clone()),
        points_to_next_level: next.map(|band| band.min_points - total),
        max_points: catalog.max_points(),
    }
}

fn level_of(milestones: &MilestoneMap, track: TrackId) -> u8 {
    milestones.get(&track).copied().unwrap_or(0)
}

/// Precomputed figures that title thresholds are tested against.
#[derive(Debug, Clone)]
pub struct Scorecard<'a> {
    milestones: &'a MilestoneMap,
    total: u32,
    by_category: BTreeMap<Category, u32>,
}

impl<'a> Scorecard<'a> {
    /// Compute totals once for repeated threshold checks.
    pub fn new(catalog: &Catalog, milestones: &'a MilestoneMap) -> Self {
        Self {
            milestones,
            total: total_points(catalog, milestones),
            by_category: category_points(catalog, milestones),
        }
    }
}

impl ProgressMetrics for Scorecard<'_> {
    fn total_points(&self) -> u32 {
        self.total
    }

    fn category_points(&self, category: Category) -> u32 {
        self.by_category.get(&category).copied().unwrap_or(0)
    }

    fn milestone(&self, track: TrackId) -> u8 {
        level_of(self.milestones, track)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snowflake_core::{
        MilestoneDefinition, TitleRule, TrackDefinition, HIGHEST_MILESTONE,
    };

    /// One track whose cumulative totals read 0, 10, 20, 30, 40, 50.
    fn single_track_catalog() -> Catalog {
        let milestones = [0, 10, 10, 10, 10, 10]
            .iter()
            .enumerate()
            .map(|(i, p)| MilestoneDefinition::new(format!("Frontend {}", i), *p))
            .collect();
        Catalog::new(
            vec![TrackDefinition::new(
                TrackId::Frontend,
                "Frontend",
                Category::Building,
                "Web client work",
                milestones,
            )],
            vec![
                TitleRule::new("Junior").min_points(0),
                TitleRule::new("Senior").min_points(30),
                TitleRule::new("Staff").min_points(50),
            ],
        )
        .unwrap()
    }

    fn levels(pairs: &[(TrackId, u8)]) -> MilestoneMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_points_for_track_is_monotonic() {
        let catalog = Catalog::standard();
        for id in catalog.track_ids() {
            for m1 in 0..=HIGHEST_MILESTONE {
                for m2 in m1..=HIGHEST_MILESTONE {
                    assert!(points_for_track(&catalog, *id, m1) <= points_for_track(&catalog, *id, m2));
                }
            }
        }
    }

    #[test]
    fn test_total_points_single_track() {
        let catalog = single_track_catalog();
        assert_eq!(total_points(&catalog, &levels(&[(TrackId::Frontend, 3)])), 30);
        assert_eq!(total_points(&catalog, &levels(&[(TrackId::Frontend, 5)])), 50);
        assert_eq!(total_points(&catalog, &levels(&[(TrackId::Frontend, 0)])), 0);
    }

    #[test]
    fn test_total_points_standard_catalog() {
        let catalog = Catalog::standard();
        let map = levels(&[
            (TrackId::Frontend, 5),
            (TrackId::Communication, 3),
            (TrackId::Mentorship, 1),
        ]);
        assert_eq!(total_points(&catalog, &map), 20 + 6 + 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_points_for_track_rejects_out_of_range() {
        points_for_track(&Catalog::standard(), TrackId::Frontend, HIGHEST_MILESTONE + 1);
    }

    #[test]
    fn test_category_points() {
        let catalog = Catalog::standard();
        let map = levels(&[
            (TrackId::Frontend, 2),
            (TrackId::Backend, 2),
            (TrackId::OrgDesign, 4),
        ]);
        let totals = category_points(&catalog, &map);
        assert_eq!(totals[&Category::Building], 6);
        assert_eq!(totals[&Category::Supporting], 12);
        assert_eq!(totals[&Category::Executing], 0);
        assert_eq!(totals[&Category::Strengthening], 0);
    }

    #[test]
    fn test_eligible_titles_ladder() {
        let catalog = single_track_catalog();
        let titles = eligible_titles(&catalog, &levels(&[(TrackId::Frontend, 3)]));
        assert_eq!(titles, vec!["Junior", "Senior"]);

        let titles = eligible_titles(&catalog, &levels(&[(TrackId::Frontend, 5)]));
        assert_eq!(titles, vec!["Junior", "Senior", "Staff"]);
    }

    #[test]
    fn test_eligible_titles_never_empty_and_first_is_met() {
        let catalog = Catalog::standard();
        for id in catalog.track_ids() {
            for level in 0..=HIGHEST_MILESTONE {
                let map = levels(&[(*id, level)]);
                let titles = eligible_titles(&catalog, &map);
                assert!(!titles.is_empty());

                let scorecard = Scorecard::new(&catalog, &map);
                let first = catalog.titles().iter().find(|r| r.label == titles[0]).unwrap();
                assert!(first.is_met_by(&scorecard));
            }
        }
    }

    #[test]
    fn test_category_threshold_separates_tracks() {
        let catalog = Catalog::standard();

        // 40 points, all in Supporting
        let manager = levels(&[(TrackId::CareerDevelopment, 5), (TrackId::OrgDesign, 5)]);
        let titles = eligible_titles(&catalog, &manager);
        assert!(titles.contains(&"Group Lead"));
        assert!(!titles.contains(&"Senior Engineer"));

        // 40 points, all in Building
        let engineer = levels(&[(TrackId::Frontend, 5), (TrackId::Backend, 5)]);
        let titles = eligible_titles(&catalog, &engineer);
        assert!(titles.contains(&"Senior Engineer"));
        assert!(!titles.contains(&"Group Lead"));
    }

    #[test]
    fn test_point_summary_levels() {
        let catalog = Catalog::standard();

        let summary = point_summary(&catalog, &MilestoneMap::new());
        assert_eq!(summary.total_points, 0);
        assert_eq!(summary.level, "1.1");
        assert_eq!(summary.next_level.as_deref(), Some("1.2"));
        assert_eq!(summary.points_to_next_level, Some(5));
        assert_eq!(summary.max_points, 320);

        // 18 points sits inside the 2.1 band (17..23)
        let map = levels(&[(TrackId::Frontend, 4), (TrackId::Backend, 2), (TrackId::Craft, 2)]);
        let summary = point_summary(&catalog, &map);
        assert_eq!(summary.total_points, 18);
        assert_eq!(summary.level, "2.1");
        assert_eq!(summary.points_to_next_level, Some(5));
    }

    #[test]
    fn test_point_summary_top_level() {
        let catalog = Catalog::standard();
        let map: MilestoneMap = catalog
            .track_ids()
            .iter()
            .map(|id| (*id, HIGHEST_MILESTONE))
            .collect();
        let summary = point_summary(&catalog, &map);
        assert_eq!(summary.total_points, 320);
        assert_eq!(summary.level, "5.3");
        assert!(summary.next_level.is_none());
        assert!(summary.points_to_next_level.is_none());
    }
}
