//! hackboard-core - Core library for hackboard
//!
//! Provides models, the cookies progress calculator, store catalog, data
//! sources and settings for Hackatime coding-time tracking.

pub mod catalog;
pub mod error;
pub mod models;
pub mod normalize;
pub mod progress;
pub mod settings;
pub mod source;

pub use catalog::Catalog;
pub use error::CoreError;
pub use models::{FormulaConfig, StatsSnapshot, StoreItem};
pub use progress::{build_progress_report, compute_cookies, resolve_price, ProgressReport};
pub use settings::Settings;
