//! Data sources for stats and store documents
//!
//! The acquisition mechanism has changed over this project's life (direct API
//! calls, reading a file written by an external script), so the rest of the
//! crate depends only on these two capabilities and callers inject whichever
//! implementation fits the deployment.

pub mod api;
pub mod file;
pub mod storage;

use crate::error::CoreError;
use crate::models::{StatsSnapshot, StoreItem};
use async_trait::async_trait;

/// Capability: produce a fresh stats snapshot
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch(&self) -> Result<StatsSnapshot, CoreError>;
}

/// Capability: produce the raw store item list
#[async_trait]
pub trait StoreSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<StoreItem>, CoreError>;
}
