//! Evaluation store abstraction.

use async_trait::async_trait;
use snowflake_progress::ProgressState;

use crate::codec::{self, Evaluation};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur at the import/export boundary.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Somewhere a serialized evaluation can be read from and written to.
#[async_trait]
pub trait EvaluationStore: Send + Sync {
    /// Read the stored evaluation, `None` if nothing has been saved yet.
    async fn load(&self) -> Result<Option<Evaluation>>;

    /// Persist an evaluation, replacing any previous one.
    async fn save(&mut self, evaluation: &Evaluation) -> Result<()>;

    /// Read then import into `state`. Returns whether anything was loaded.
    ///
    /// The file is fully decoded before `state` is touched, so a decoding
    /// failure leaves the state as it was.
    async fn import_into(&self, state: &mut ProgressState) -> Result<bool> {
        match self.load().await? {
            Some(evaluation) => {
                codec::import(state, evaluation);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Export `state` and persist it.
    async fn export_from(&mut self, state: &ProgressState) -> Result<()> {
        let evaluation = codec::export(state);
        self.save(&evaluation).await
    }
}
