//! Progress Tracking
//!
//! Scoring, title eligibility, the live evaluation state and cursor navigation.

#![warn(missing_docs)]

pub mod scoring;
pub mod state;
pub mod navigation;

pub use scoring::{
    category_points, eligible_titles, point_summary, points_for_track, total_points,
    MilestoneMap, PointSummary, Scorecard,
};
pub use state::{ProgressSnapshot, ProgressState};
pub use navigation::{NavigationKey, Navigator};
