//! Storage directory for fetched documents
//!
//! API sources persist what they fetch (`stats.json`, `store.json`) so the
//! file sources can serve the same documents offline.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const STATS_FILE: &str = "stats.json";
pub const STORE_FILE: &str = "store.json";

/// Default storage directory: `<data_dir>/hackboard`
pub fn default_storage_dir() -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .context("Could not determine data directory")?
        .join("hackboard");
    Ok(dir)
}

/// Write a document as pretty JSON, creating the directory if needed
pub fn save_json<T: Serialize>(dir: &Path, file_name: &str, value: &T) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create storage directory: {}", dir.display()))?;

    let path = dir.join(file_name);
    let json = serde_json::to_string_pretty(value).context("Failed to serialize document")?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!("Saved {}", path.display());
    Ok(())
}
