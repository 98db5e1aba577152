//! Snowflake core data models.
//!
//! This crate defines the track catalog that every evaluation is scored
//! against: track identifiers, milestone ladders, the title ladder and the
//! level bands.

#![warn(missing_docs)]

// Identities
mod id;

// Catalog content
mod track;
mod title;
mod catalog;
mod definitions;

// Re-exports
pub use id::{Category, TrackId, UnknownTrack};
pub use track::{MilestoneDefinition, TrackDefinition, HIGHEST_MILESTONE, LADDER_LEN};
pub use title::{ProgressMetrics, Threshold, TitleRule};
pub use catalog::{Catalog, CatalogError, LevelBand, Result};
