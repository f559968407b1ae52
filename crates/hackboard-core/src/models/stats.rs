//! Hackatime stats models
//!
//! Two layers: the wire format returned by
//! `GET /api/v1/users/{username}/stats` (everything optional, Hackatime omits
//! fields freely) and the normalized [`StatsSnapshot`] the rest of the crate
//! works with. Snapshots are transient and rebuilt on every refresh.

use serde::{Deserialize, Serialize};

/// Top-level Hackatime API response envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HackatimeResponse {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub data: Option<HackatimeData>,
}

/// The `data` object of a Hackatime stats response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HackatimeData {
    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub total_seconds: f64,

    #[serde(default)]
    pub human_readable_total: Option<String>,

    #[serde(default)]
    pub daily_average: f64,

    #[serde(default)]
    pub human_readable_daily_average: Option<String>,

    #[serde(default)]
    pub languages: Vec<WireTimeEntry>,

    #[serde(default)]
    pub projects: Vec<WireTimeEntry>,
}

/// Per-language / per-project entry as Hackatime sends it
///
/// Languages and projects share the same shape on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WireTimeEntry {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub total_seconds: f64,

    #[serde(default)]
    pub percent: f64,

    #[serde(default)]
    pub digital: Option<String>,

    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub hours: u32,

    #[serde(default)]
    pub minutes: u32,
}

/// Normalized coding-time snapshot for one computation period
///
/// This is also the on-disk format of `stats.json` in the storage directory,
/// so a file source can round-trip what an API source persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsSnapshot {
    #[serde(default)]
    pub total_seconds: f64,

    #[serde(default)]
    pub human_readable: Option<String>,

    #[serde(default)]
    pub projects: Vec<ProjectTime>,

    #[serde(default)]
    pub languages: Vec<LanguageTime>,
}

/// Per-project time, in the unit the cookies formula consumes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectTime {
    pub name: String,

    #[serde(default)]
    pub hours: f64,

    #[serde(default)]
    pub seconds: f64,
}

/// Per-language display entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageTime {
    pub name: String,

    #[serde(default)]
    pub total_seconds: f64,

    #[serde(default)]
    pub percent: f64,

    /// Short display form, e.g. "3h 12m"
    #[serde(default)]
    pub text: String,

    /// Clock form, e.g. "03:12:07"
    #[serde(default)]
    pub digital: String,

    #[serde(default)]
    pub hours: u32,

    #[serde(default)]
    pub minutes: u32,
}

impl StatsSnapshot {
    /// Total tracked time in hours
    pub fn total_hours(&self) -> f64 {
        self.total_seconds / 3600.0
    }

    /// Whether a per-project breakdown is available
    pub fn has_projects(&self) -> bool {
        !self.projects.is_empty()
    }

    /// Get top N languages by tracked seconds
    pub fn top_languages(&self, n: usize) -> Vec<&LanguageTime> {
        let mut langs: Vec<_> = self
            .languages
            .iter()
            .filter(|l| l.total_seconds > 0.0)
            .collect();
        langs.sort_by(|a, b| b.total_seconds.total_cmp(&a.total_seconds));
        langs.truncate(n);
        langs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_defaults() {
        let snapshot = StatsSnapshot::default();
        assert_eq!(snapshot.total_seconds, 0.0);
        assert!(!snapshot.has_projects());
        assert!(snapshot.languages.is_empty());
    }

    #[test]
    fn test_total_hours() {
        let snapshot = StatsSnapshot {
            total_seconds: 36000.0,
            ..Default::default()
        };
        assert_eq!(snapshot.total_hours(), 10.0);
    }

    #[test]
    fn test_top_languages_sorted_and_filtered() {
        let snapshot = StatsSnapshot {
            languages: vec![
                LanguageTime {
                    name: "Rust".to_string(),
                    total_seconds: 500.0,
                    ..Default::default()
                },
                LanguageTime {
                    name: "Python".to_string(),
                    total_seconds: 1500.0,
                    ..Default::default()
                },
                LanguageTime {
                    name: "TOML".to_string(),
                    total_seconds: 0.0,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let top = snapshot.top_languages(5);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "Python");
        assert_eq!(top[1].name, "Rust");
    }

    #[test]
    fn test_parse_wire_format() {
        let json = r#"{
            "status": "ok",
            "data": {
                "username": "orpheus",
                "total_seconds": 36000,
                "human_readable_total": "10 hrs",
                "daily_average": 1200,
                "languages": [
                    {"name": "Rust", "total_seconds": 30000, "percent": 83.3, "text": "8h 20m"}
                ],
                "projects": [
                    {"name": "hackboard", "total_seconds": 36000}
                ]
            }
        }"#;

        let resp: HackatimeResponse = serde_json::from_str(json).unwrap();
        let data = resp.data.unwrap();
        assert_eq!(data.total_seconds, 36000.0);
        assert_eq!(data.languages.len(), 1);
        assert_eq!(data.projects[0].name.as_deref(), Some("hackboard"));
    }

    #[test]
    fn test_parse_empty_data() {
        // Hackatime returns a bare envelope for unknown users
        let resp: HackatimeResponse = serde_json::from_str(r#"{"status": "error"}"#).unwrap();
        assert!(resp.data.is_none());
    }
}
