//! Import/export boundary for Snowflake evaluations.
//!
//! This crate provides the portable evaluation format, the codec that
//! reconciles it against the catalog, and a trait-based store with a JSON
//! file implementation.

#![warn(missing_docs)]

pub mod trait_;
pub mod codec;
pub mod json_store;

pub use trait_::{EvaluationStore, StorageError, Result};
pub use codec::{export, import, resolve_milestones, Evaluation};
pub use json_store::{JsonFileStore, StoreConfig};
