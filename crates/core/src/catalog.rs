//! Track catalog - the closed set of tracks, titles and level bands.

use serde::{Deserialize, Serialize};
use crate::id::{Category, TrackId};
use crate::title::{ProgressMetrics, Threshold, TitleRule};
use crate::track::{TrackDefinition, HIGHEST_MILESTONE, LADDER_LEN};

/// Error type for catalog construction.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Configuration defects detected while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No tracks at all
    #[error("catalog has no tracks")]
    NoTracks,

    /// Same track listed twice
    #[error("track {0} is defined more than once")]
    DuplicateTrack(TrackId),

    /// Ladder does not cover 0..=HIGHEST_MILESTONE
    #[error("track {track} has {found} milestones, expected {expected}")]
    LadderLength {
        /// Offending track
        track: TrackId,
        /// Milestones found
        found: usize,
        /// Milestones required
        expected: usize,
    },

    /// Empty title ladder
    #[error("title ladder is empty")]
    NoTitles,

    /// The most junior title is out of reach for an empty evaluation
    #[error("title '{0}' is not reachable from an empty evaluation")]
    UnreachableBaseline(String),

    /// A threshold names a track the catalog does not define
    #[error("title '{title}' references track {track} outside the catalog")]
    UnknownTrackInTitle {
        /// Title label
        title: String,
        /// Missing track
        track: TrackId,
    },

    /// A threshold asks for a milestone above the ladder top
    #[error("title '{title}' requires milestone {milestone}, highest is {}", HIGHEST_MILESTONE)]
    MilestoneOutOfRange {
        /// Title label
        title: String,
        /// Requested milestone
        milestone: u8,
    },

    /// Level bands must start at zero and strictly ascend
    #[error("level bands must start at 0 points and strictly ascend")]
    InvalidLevels,
}

/// A named band of total points (e.g. "2.1" from 17 points).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelBand {
    /// Inclusive lower bound
    pub min_points: u32,

    /// Level label
    pub label: String,
}

impl LevelBand {
    /// Create a band.
    pub fn new(min_points: u32, label: impl Into<String>) -> Self {
        Self {
            min_points,
            label: label.into(),
        }
    }
}

/// Immutable catalog of tracks, titles and level bands.
///
/// Track order is stable and drives both cyclic navigation and iteration
/// during scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    tracks: Vec<TrackDefinition>,
    ids: Vec<TrackId>,
    titles: Vec<TitleRule>,
    levels: Vec<LevelBand>,
}

impl Catalog {
    /// Build and validate a catalog. The first track is the default focus.
    pub fn new(tracks: Vec<TrackDefinition>, titles: Vec<TitleRule>) -> Result<Self> {
        let catalog = Self::from_parts(tracks, titles, crate::definitions::standard_levels());
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in catalog.
    pub fn standard() -> Self {
        Self::from_parts(
            crate::definitions::standard_tracks(),
            crate::definitions::standard_titles(),
            crate::definitions::standard_levels(),
        )
    }

    /// Replace the level bands.
    pub fn with_levels(mut self, levels: Vec<LevelBand>) -> Result<Self> {
        let ascending = levels.windows(2).all(|w| w[0].min_points < w[1].min_points);
        if levels.first().map(|l| l.min_points) != Some(0) || !ascending {
            return Err(CatalogError::InvalidLevels);
        }
        self.levels = levels;
        Ok(self)
    }

    fn from_parts(
        tracks: Vec<TrackDefinition>,
        titles: Vec<TitleRule>,
        levels: Vec<LevelBand>,
    ) -> Self {
        let ids = tracks.iter().map(|t| t.id).collect();
        Self { tracks, ids, titles, levels }
    }

    fn validate(&self) -> Result<()> {
        if self.tracks.is_empty() {
            return Err(CatalogError::NoTracks);
        }

        for (i, track) in self.tracks.iter().enumerate() {
            if self.ids[..i].contains(&track.id) {
                return Err(CatalogError::DuplicateTrack(track.id));
            }
            if track.milestones.len() != LADDER_LEN {
                return Err(CatalogError::LadderLength {
                    track: track.id,
                    found: track.milestones.len(),
                    expected: LADDER_LEN,
                });
            }
        }

        for title in &self.titles {
            for threshold in &title.thresholds {
                if let Threshold::TrackMilestone { track, milestone } = threshold {
                    if !self.contains(*track) {
                        return Err(CatalogError::UnknownTrackInTitle {
                            title: title.label.clone(),
                            track: *track,
                        });
                    }
                    if *milestone > HIGHEST_MILESTONE {
                        return Err(CatalogError::MilestoneOutOfRange {
                            title: title.label.clone(),
                            milestone: *milestone,
                        });
                    }
                }
            }
        }

        let junior = self.titles.first().ok_or(CatalogError::NoTitles)?;
        if !junior.is_met_by(&Baseline(self)) {
            return Err(CatalogError::UnreachableBaseline(junior.label.clone()));
        }

        Ok(())
    }

    /// Track identifiers in stable catalog order.
    pub fn track_ids(&self) -> &[TrackId] {
        &self.ids
    }

    /// All track definitions in catalog order.
    pub fn tracks(&self) -> &[TrackDefinition] {
        &self.tracks
    }

    /// Title ladder, most junior first.
    pub fn titles(&self) -> &[TitleRule] {
        &self.titles
    }

    /// Level bands, lowest first.
    pub fn levels(&self) -> &[LevelBand] {
        &self.levels
    }

    /// Track focused when an evaluation starts.
    pub fn default_track(&self) -> TrackId {
        self.ids[0]
    }

    /// Whether the catalog defines `track`.
    pub fn contains(&self, track: TrackId) -> bool {
        self.ids.contains(&track)
    }

    /// Position of `track` in catalog order.
    pub fn position(&self, track: TrackId) -> Option<usize> {
        self.ids.iter().position(|id| *id == track)
    }

    /// Definition of a catalog track.
    ///
    /// # Panics
    ///
    /// Panics if `track` is not part of this catalog.
    pub fn definition_of(&self, track: TrackId) -> &TrackDefinition {
        match self.position(track) {
            Some(index) => &self.tracks[index],
            None => panic!("track {} is not part of the catalog", track),
        }
    }

    /// Resolve a persisted track key against this catalog.
    pub fn track_by_key(&self, key: &str) -> Option<TrackId> {
        key.parse::<TrackId>().ok().filter(|id| self.contains(*id))
    }

    /// Tracks belonging to a category, in catalog order.
    pub fn tracks_in(&self, category: Category) -> impl Iterator<Item = &TrackDefinition> {
        self.tracks.iter().filter(move |t| t.category == category)
    }

    /// Points available if every track sits at the top of its ladder.
    pub fn max_points(&self) -> u32 {
        self.tracks.iter().map(|t| t.points_at(HIGHEST_MILESTONE)).sum()
    }
}

/// Progress of an empty evaluation, used to check the junior title.
struct Baseline<'a>(&'a Catalog);

impl ProgressMetrics for Baseline<'_> {
    fn total_points(&self) -> u32 {
        self.0.tracks.iter().map(|t| t.points_at(0)).sum()
    }

    fn category_points(&self, category: Category) -> u32 {
        self.0.tracks_in(category).map(|t| t.points_at(0)).sum()
    }

    fn milestone(&self, _track: TrackId) -> u8 {
        0
    }
}
