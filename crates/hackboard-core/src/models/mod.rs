//! Data models for hackboard-core

pub mod config;
pub mod stats;
pub mod store;

pub use config::FormulaConfig;
pub use stats::{HackatimeData, HackatimeResponse, LanguageTime, ProjectTime, StatsSnapshot};
pub use store::{StoreItem, StorePayload, TicketCost};
