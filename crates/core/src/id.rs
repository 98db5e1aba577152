//! Identifiers for tracks and the categories that group them.

use serde::{Deserialize, Serialize};

/// Stable identifier for a career track.
///
/// The key returned by [`TrackId::as_str`] is what gets persisted; display
/// names live on the catalog so they can change without breaking saved files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TrackId {
    Frontend,
    Backend,
    Mobile,
    Foundations,
    ProjectManagement,
    Communication,
    Craft,
    Initiative,
    CareerDevelopment,
    OrgDesign,
    Wellbeing,
    Accomplishment,
    Mentorship,
    Evangelism,
    Recruiting,
    Community,
}

impl TrackId {
    /// Every track identifier, in declaration order.
    pub const ALL: [TrackId; 16] = [
        TrackId::Frontend,
        TrackId::Backend,
        TrackId::Mobile,
        TrackId::Foundations,
        TrackId::ProjectManagement,
        TrackId::Communication,
        TrackId::Craft,
        TrackId::Initiative,
        TrackId::CareerDevelopment,
        TrackId::OrgDesign,
        TrackId::Wellbeing,
        TrackId::Accomplishment,
        TrackId::Mentorship,
        TrackId::Evangelism,
        TrackId::Recruiting,
        TrackId::Community,
    ];

    /// Persisted key for this track.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackId::Frontend => "Frontend",
            TrackId::Backend => "Backend",
            TrackId::Mobile => "Mobile",
            TrackId::Foundations => "Foundations",
            TrackId::ProjectManagement => "ProjectManagement",
            TrackId::Communication => "Communication",
            TrackId::Craft => "Craft",
            TrackId::Initiative => "Initiative",
            TrackId::CareerDevelopment => "CareerDevelopment",
            TrackId::OrgDesign => "OrgDesign",
            TrackId::Wellbeing => "Wellbeing",
            TrackId::Accomplishment => "Accomplishment",
            TrackId::Mentorship => "Mentorship",
            TrackId::Evangelism => "Evangelism",
            TrackId::Recruiting => "Recruiting",
            TrackId::Community => "Community",
        }
    }
}

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known track key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown track: {0}")]
pub struct UnknownTrack(pub String);

impl std::str::FromStr for TrackId {
    type Err = UnknownTrack;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrackId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownTrack(s.to_string()))
    }
}

/// Grouping of tracks, used for category point totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Hands-on technical work
    Building,
    /// Delivery and execution
    Executing,
    /// People and organisation
    Supporting,
    /// Growing the wider team
    Strengthening,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Building,
        Category::Executing,
        Category::Supporting,
        Category::Strengthening,
    ];

    /// Human readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Building => "Building",
            Category::Executing => "Executing",
            Category::Supporting => "Supporting",
            Category::Strengthening => "Strengthening",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
