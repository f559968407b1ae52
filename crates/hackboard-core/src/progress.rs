//! Cookies-earned calculation and store-item progress
//!
//! Cookies model diminishing returns per unit of work with a logarithmic term.
//! Per project with `h` tracked hours:
//!
//! ```text
//! contribution = 88 × (quality / 15)^k × (1 + beta × ln(1 + h))
//! ```
//!
//! The total is summed **per project**, not computed on aggregate hours:
//! `ln(1+a) + ln(1+b) > ln(1+a+b)` for positive a and b, so splitting work
//! across projects earns more than one large aggregate would. Breadth pays.
//!
//! Everything here is pure and deterministic. Missing data never raises; it
//! collapses to `None` fields in the report, which is strictly more useful to
//! a renderer than an aborted computation.
//!
//! # Examples
//!
//! ```
//! use hackboard_core::models::{FormulaConfig, ProjectTime, StatsSnapshot};
//! use hackboard_core::progress::compute_cookies;
//!
//! let stats = StatsSnapshot {
//!     projects: vec![ProjectTime { name: "x".into(), hours: 5.0, seconds: 18000.0 }],
//!     ..Default::default()
//! };
//!
//! // quality=15, k=0, beta=0 reduces the formula to its base term
//! let cfg = FormulaConfig::new(15.0, 0.0, 0.0);
//! assert_eq!(compute_cookies(&stats, &cfg), 88.0);
//! ```

use crate::catalog::Catalog;
use crate::models::config::QUALITY_MAX;
use crate::models::{FormulaConfig, StatsSnapshot, StoreItem};
use serde::Serialize;

/// Base cookie rate per project before quality scaling and the log bonus
pub const BASE_RATE: f64 = 88.0;

/// Progress toward a configured target item
///
/// `price` may be `None` even though the item was found (no cost data for the
/// country and no base cost) — distinct from "item not found", which yields no
/// report at all. `cookies_earned` is always populated.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressReport {
    pub item_name: String,
    pub price: Option<f64>,
    pub country: String,
    pub cookies_earned: f64,
    pub cookies_needed: Option<f64>,
    pub progress_percent: Option<f64>,
}

/// Cookies earned for a single project's hours
///
/// An absent or non-finite hours value contributes the base term only
/// (`ln(1) = 0`).
fn project_cookies(hours: f64, cfg: &FormulaConfig) -> f64 {
    let hours = if hours.is_finite() && hours > 0.0 {
        hours
    } else {
        0.0
    };
    BASE_RATE * (cfg.quality() / QUALITY_MAX).powf(cfg.k()) * (1.0 + cfg.beta() * hours.ln_1p())
}

/// Total cookies earned for a snapshot
///
/// Summed per project when a breakdown exists; otherwise the total hours are
/// treated as a single project. `cfg` is already range-checked by
/// [`FormulaConfig::new`].
pub fn compute_cookies(stats: &StatsSnapshot, cfg: &FormulaConfig) -> f64 {
    if stats.has_projects() {
        stats
            .projects
            .iter()
            .map(|p| project_cookies(p.hours, cfg))
            .sum()
    } else {
        project_cookies(stats.total_hours(), cfg)
    }
}

/// Resolve an item's price for a country
///
/// Country-specific cost wins over the base cost; both absent (or unparsable)
/// is `None`. Country matching is trimmed and case-insensitive.
pub fn resolve_price(item: &StoreItem, country: &str) -> Option<f64> {
    item.ticket_cost
        .for_country(country)
        .or_else(|| item.ticket_cost.base())
}

/// Assemble the progress report for a configured target
///
/// Returns `None` when no target is configured or the catalog has no item
/// whose trimmed name equals the trimmed target (exact, case-sensitive).
pub fn build_progress_report(
    stats: &StatsSnapshot,
    catalog: &Catalog,
    target_name: &str,
    country: &str,
    cfg: &FormulaConfig,
) -> Option<ProgressReport> {
    let target = target_name.trim();
    if target.is_empty() {
        return None;
    }

    let item = catalog.find(target)?;
    let country = country.trim().to_lowercase();

    let price = resolve_price(item, &country);
    let cookies_earned = compute_cookies(stats, cfg);

    let cookies_needed = price.map(|p| (p - cookies_earned).max(0.0));
    let progress_percent = match price {
        Some(p) if p > 0.0 => Some((cookies_earned / p * 100.0).min(100.0)),
        _ => None,
    };

    Some(ProgressReport {
        item_name: item.name.trim().to_string(),
        price,
        country,
        cookies_earned,
        cookies_needed,
        progress_percent,
    })
}
