//! Snapshot codec - portable evaluation format.
//!
//! Wire shape:
//! ```text
//! { "name": "...", "title": "...", "milestones": [["Frontend", 3], ...] }
//! ```
//! Every field is optional. Missing fields leave the live state untouched.

use serde::{Deserialize, Serialize};
use snowflake_core::{Catalog, HIGHEST_MILESTONE};
use snowflake_progress::{MilestoneMap, ProgressState};
use tracing::{info, warn};

use crate::trait_::Result;

/// Serialized evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Selected title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// `(track key, level)` pairs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestones: Option<Vec<(String, i64)>>,
}

impl Evaluation {
    /// Parse from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render as JSON text.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Capture the live state. Every catalog track is emitted, in catalog order.
pub fn export(state: &ProgressState) -> Evaluation {
    let snapshot = state.snapshot();
    let milestones = state
        .catalog()
        .track_ids()
        .iter()
        .map(|id| (id.as_str().to_string(), state.milestone(*id) as i64))
        .collect();

    Evaluation {
        name: Some(snapshot.name.clone()),
        title: Some(snapshot.title.clone()),
        milestones: Some(milestones),
    }
}

/// Load a serialized evaluation into the live state.
///
/// Order matters: milestones are replaced before the title is applied so the
/// eligibility check sees the loaded levels. Empty name and title strings are
/// treated as absent.
pub fn import(state: &mut ProgressState, evaluation: Evaluation) {
    if let Some(name) = evaluation.name.filter(|n| !n.is_empty()) {
        state.set_name(name);
    }

    if let Some(entries) = evaluation.milestones {
        let milestones = resolve_milestones(state.catalog(), &entries);
        info!("Imported {} of {} milestone entries", milestones.len(), entries.len());
        state.replace_milestones(milestones);
    }

    if let Some(title) = evaluation.title.filter(|t| !t.is_empty()) {
        state.set_title(&title);
    }
}

/// Resolve serialized entries against the catalog.
///
/// Entries naming an unknown track, or carrying a level outside
/// `0..=HIGHEST_MILESTONE`, are dropped. A repeated track keeps its last level.
pub fn resolve_milestones(catalog: &Catalog, entries: &[(String, i64)]) -> MilestoneMap {
    let mut milestones = MilestoneMap::new();
    for (key, level) in entries {
        let Some(track) = catalog.track_by_key(key) else {
            warn!("Dropping milestone for unknown track '{}'", key);
            continue;
        };
        let Some(level) = u8::try_from(*level).ok().filter(|l| *l <= HIGHEST_MILESTONE) else {
            warn!("Dropping out of range milestone {} for track {}", level, track);
            continue;
        };
        milestones.insert(track, level);
    }
    milestones
}
