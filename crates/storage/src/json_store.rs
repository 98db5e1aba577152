//! JSON file evaluation store.
//!
//! Keeps one evaluation per file. Next to it, an optional meta marker
//! (`<name>.meta.json`) records a save counter and the last update time.

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use super::{Evaluation, EvaluationStore, Result};

/// Configuration for the JSON file store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Pretty-print the evaluation file
    pub pretty: bool,
    /// Maintain the `.meta.json` marker
    pub write_meta: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            write_meta: true,
        }
    }
}

/// File-based JSON store.
pub struct JsonFileStore {
    path: PathBuf,
    config: StoreConfig,
}

impl JsonFileStore {
    /// Create a store for `path`. Nothing is touched on disk until the first save.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            config: StoreConfig::default(),
        }
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Evaluation file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Meta marker path.
    pub fn meta_path(&self) -> PathBuf {
        self.path.with_extension("meta.json")
    }

    /// Save counter from the meta marker, 0 if absent.
    pub async fn version(&self) -> Result<u64> {
        match fs::read_to_string(self.meta_path()).await {
            Ok(s) => {
                let json: serde_json::Value = serde_json::from_str(&s)?;
                Ok(json.get("version").and_then(|v| v.as_u64()).unwrap_or(0))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    /// Read and increment the save counter, return the new version.
    async fn bump_version(&self) -> Result<u64> {
        let version = self.version().await.unwrap_or(0) + 1;
        let meta = serde_json::json!({"version": version, "updated_at": chrono::Utc::now()});
        fs::write(self.meta_path(), serde_json::to_string_pretty(&meta)?.as_bytes()).await?;
        Ok(version)
    }
}

#[async_trait::async_trait]
impl EvaluationStore for JsonFileStore {
    async fn load(&self) -> Result<Option<Evaluation>> {
        match fs::read_to_string(&self.path).await {
            Ok(json) => {
                let evaluation = Evaluation::from_json(&json)?;
                debug!("Loaded evaluation from {}", self.path.display());
                Ok(Some(evaluation))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&mut self, evaluation: &Evaluation) -> Result<()> {
        let json = evaluation.to_json(self.config.pretty)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, json.as_bytes()).await?;

        if self.config.write_meta {
            let version = self.bump_version().await?;
            info!("Saved evaluation to {} (version {})", self.path.display(), version);
        } else {
            info!("Saved evaluation to {}", self.path.display());
        }
        Ok(())
    }
}
