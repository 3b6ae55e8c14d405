//! The process-wide store for the global topic/region defaults.
//!
//! The administrator sets these two values once; every job whose step
//! leaves its own topic or region blank falls back to them. The store is
//! loaded at startup and persisted synchronously on every update.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;
use tracing::info;

/// The two global defaults a step falls back to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GlobalDefaults {
    /// Default topic ARN for steps that do not set one.
    #[serde(default)]
    pub topic_arn: String,
    /// Default region name for steps that do not set one.
    #[serde(default)]
    pub region: String,
}

/// File-backed store for [`GlobalDefaults`].
///
/// Concurrent step executions read snapshots; mutation only happens on
/// the administrator's update path.
pub struct DefaultsStore {
    path: PathBuf,
    current: RwLock<GlobalDefaults>,
}

impl DefaultsStore {
    /// Opens the store, reading persisted defaults if present.
    ///
    /// An absent file is not an error: both defaults start out empty. A
    /// file that exists but cannot be read or parsed is.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let current = if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read defaults file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse defaults file {}", path.display()))?
        } else {
            GlobalDefaults::default()
        };
        Ok(Self {
            path,
            current: RwLock::new(current),
        })
    }

    /// Returns a snapshot of the current defaults.
    pub fn read(&self) -> GlobalDefaults {
        self.current.read().unwrap().clone()
    }

    /// Overwrites both defaults unconditionally and persists them.
    ///
    /// No validation or trimming is applied to either value. The new
    /// values are visible to subsequent reads as soon as this returns; a
    /// persistence failure is surfaced to the caller.
    pub fn update(&self, topic_arn: &str, region: &str) -> Result<()> {
        let snapshot = {
            let mut current = self.current.write().unwrap();
            current.topic_arn = topic_arn.to_string();
            current.region = region.to_string();
            current.clone()
        };
        let raw = serde_json::to_string_pretty(&snapshot)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("failed to persist defaults file {}", self.path.display()))?;
        info!(topic_arn, region, "global defaults updated");
        Ok(())
    }
}
