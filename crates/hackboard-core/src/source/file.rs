//! File-backed sources with multi-candidate lookup and parse retry
//!
//! The documents may be produced by an external script, so reads try a list of
//! candidate paths in order and retry briefly on parse failure — the file
//! might be mid-write.

use crate::error::CoreError;
use crate::models::{StatsSnapshot, StoreItem, StorePayload};
use crate::source::{storage, StatsSource, StoreSource};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// First existing path among the candidates
fn pick_candidate(candidates: &[PathBuf]) -> Result<&Path, CoreError> {
    candidates
        .iter()
        .find(|p| p.exists())
        .map(PathBuf::as_path)
        .ok_or(CoreError::FileNotFound {
            tried: candidates.len(),
        })
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CoreError> {
    let content =
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CoreError::FileRead {
                path: path.to_path_buf(),
                source: e,
            })?;

    serde_json::from_str(&content).map_err(|e| CoreError::JsonParse {
        path: path.to_path_buf(),
        message: e.to_string(),
        source: e,
    })
}

async fn read_json_with_retry<T: DeserializeOwned>(
    path: &Path,
    max_retries: u32,
    retry_delay: Duration,
) -> Result<T, CoreError> {
    let mut last_error = None;

    for attempt in 0..=max_retries {
        if attempt > 0 {
            debug!(attempt, path = %path.display(), "Retrying read after delay");
            sleep(retry_delay).await;
        }

        match read_json(path).await {
            Ok(value) => return Ok(value),
            Err(e @ CoreError::JsonParse { .. }) => {
                warn!(attempt, error = %e, "Parse attempt failed");
                last_error = Some(e);
            }
            // IO errors will not heal within the retry window
            Err(e) => return Err(e),
        }
    }

    Err(last_error.unwrap_or(CoreError::FileNotFound { tried: 1 }))
}

/// Stats source reading a previously saved `stats.json`
pub struct FileStatsSource {
    candidates: Vec<PathBuf>,
    max_retries: u32,
    retry_delay: Duration,
}

impl FileStatsSource {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self {
            candidates,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    /// Candidates for a storage directory: `<dir>/stats.json`
    pub fn from_storage_dir(dir: &Path) -> Self {
        Self::new(vec![dir.join(storage::STATS_FILE)])
    }

    pub fn with_retries(mut self, max_retries: u32, retry_delay: Duration) -> Self {
        self.max_retries = max_retries;
        self.retry_delay = retry_delay;
        self
    }
}

#[async_trait]
impl StatsSource for FileStatsSource {
    async fn fetch(&self) -> Result<StatsSnapshot, CoreError> {
        let path = pick_candidate(&self.candidates)?;
        debug!(path = %path.display(), "Reading stats snapshot");
        read_json_with_retry(path, self.max_retries, self.retry_delay).await
    }
}

/// Store source reading a previously saved `store.json`
pub struct FileStoreSource {
    candidates: Vec<PathBuf>,
    max_retries: u32,
    retry_delay: Duration,
}

impl FileStoreSource {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self {
            candidates,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    /// Candidates for a storage directory: `<dir>/store.json`
    pub fn from_storage_dir(dir: &Path) -> Self {
        Self::new(vec![dir.join(storage::STORE_FILE)])
    }

    pub fn with_retries(mut self, max_retries: u32, retry_delay: Duration) -> Self {
        self.max_retries = max_retries;
        self.retry_delay = retry_delay;
        self
    }
}

#[async_trait]
impl StoreSource for FileStoreSource {
    async fn fetch(&self) -> Result<Vec<StoreItem>, CoreError> {
        let path = pick_candidate(&self.candidates)?;
        debug!(path = %path.display(), "Reading store items");
        let payload: StorePayload =
            read_json_with_retry(path, self.max_retries, self.retry_delay).await?;
        Ok(payload.into_items())
    }
}
