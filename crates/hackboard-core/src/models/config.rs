//! Tunables for the cookies formula

use serde::{Deserialize, Serialize};

/// Quality clamp bounds; the formula normalizes quality against the upper bound
pub const QUALITY_MIN: f64 = 1.0;
pub const QUALITY_MAX: f64 = 15.0;

pub const DEFAULT_QUALITY: f64 = 10.0;
/// Exponent default differs across deployments (1, 2 and 4 have all shipped);
/// 1 is the most recent. Treat as deployment-tunable, not canonical.
pub const DEFAULT_K: f64 = 1.0;
pub const DEFAULT_BETA: f64 = 2.0;

/// Parameters of the cookies-earned formula
///
/// `quality` is held in [1, 15] and `k`/`beta` at >= 0 by construction, so the
/// calculator can assume in-range inputs. Values deserialized from settings go
/// through [`FormulaConfig::new`], which also coerces NaN to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawFormulaConfig")]
pub struct FormulaConfig {
    quality: f64,
    k: f64,
    beta: f64,
}

impl Default for FormulaConfig {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            k: DEFAULT_K,
            beta: DEFAULT_BETA,
        }
    }
}

impl FormulaConfig {
    /// Build a config, clamping quality into [1, 15] and k/beta to >= 0.
    /// NaN inputs fall back to the defaults rather than erroring.
    pub fn new(quality: f64, k: f64, beta: f64) -> Self {
        let quality = if quality.is_nan() {
            DEFAULT_QUALITY
        } else {
            quality.clamp(QUALITY_MIN, QUALITY_MAX)
        };
        let k = if k.is_nan() { DEFAULT_K } else { k.max(0.0) };
        let beta = if beta.is_nan() {
            DEFAULT_BETA
        } else {
            beta.max(0.0)
        };
        Self { quality, k, beta }
    }

    pub fn quality(&self) -> f64 {
        self.quality
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }
}

/// Wire shape: every field optional so partial settings files work
#[derive(Deserialize)]
struct RawFormulaConfig {
    #[serde(default = "default_quality")]
    quality: f64,
    #[serde(default = "default_k")]
    k: f64,
    #[serde(default = "default_beta")]
    beta: f64,
}

fn default_quality() -> f64 {
    DEFAULT_QUALITY
}

fn default_k() -> f64 {
    DEFAULT_K
}

fn default_beta() -> f64 {
    DEFAULT_BETA
}

impl From<RawFormulaConfig> for FormulaConfig {
    fn from(raw: RawFormulaConfig) -> Self {
        FormulaConfig::new(raw.quality, raw.k, raw.beta)
    }
}
