//! Normalization of Hackatime wire data into a [`StatsSnapshot`]
//!
//! Projects are converted to hours for the cookies formula. Optionally, time
//! logged under the "Text" pseudo-language is folded into "Python" — a
//! deployment-local rule for editors that misattribute Python sessions, kept
//! as an explicit, opt-in step here rather than a property of the data.

use crate::models::stats::{HackatimeData, LanguageTime, ProjectTime, StatsSnapshot, WireTimeEntry};

/// Display forms of a duration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeParts {
    /// Short form: "3h 12m", "5m" or "42s"
    pub text: String,
    /// Clock form: "03:12:07"
    pub digital: String,
    pub hours: u32,
    pub minutes: u32,
}

/// Format a duration in seconds into its display forms
pub fn format_time(seconds: f64) -> TimeParts {
    let seconds = seconds.max(0.0);
    let hours = (seconds / 3600.0).floor() as u32;
    let minutes = ((seconds % 3600.0) / 60.0).floor() as u32;
    let secs = (seconds % 60.0).floor() as u32;

    let text = if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m")
    } else {
        format!("{secs}s")
    };

    TimeParts {
        text,
        digital: format!("{hours:02}:{minutes:02}:{secs:02}"),
        hours,
        minutes,
    }
}

/// Convert a Hackatime `data` object into a normalized snapshot
pub fn snapshot_from_wire(data: HackatimeData, fold_text_into_python: bool) -> StatsSnapshot {
    let total_seconds = data.total_seconds;

    let mut languages: Vec<LanguageTime> =
        data.languages.into_iter().map(language_from_wire).collect();
    if fold_text_into_python {
        fold_text(&mut languages, total_seconds);
    }

    let projects = data
        .projects
        .into_iter()
        .map(|entry| {
            let seconds = entry.total_seconds.max(0.0);
            ProjectTime {
                name: entry_name(&entry),
                hours: seconds / 3600.0,
                seconds,
            }
        })
        .collect();

    StatsSnapshot {
        total_seconds,
        human_readable: data.human_readable_total,
        projects,
        languages,
    }
}

fn entry_name(entry: &WireTimeEntry) -> String {
    match entry.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => "Unknown".to_string(),
    }
}

fn language_from_wire(entry: WireTimeEntry) -> LanguageTime {
    let name = entry_name(&entry);
    let seconds = entry.total_seconds.max(0.0);
    // Keep the wire's preformatted strings when present; derive the rest
    let fmt = format_time(seconds);
    LanguageTime {
        name,
        total_seconds: seconds,
        percent: entry.percent,
        text: entry.text.unwrap_or(fmt.text),
        digital: entry.digital.unwrap_or(fmt.digital),
        hours: fmt.hours,
        minutes: fmt.minutes,
    }
}

/// Fold "Text" time into "Python", creating the entry if needed
fn fold_text(languages: &mut Vec<LanguageTime>, total_seconds: f64) {
    let mut text_seconds = 0.0;
    languages.retain(|lang| {
        if lang.name.trim().eq_ignore_ascii_case("text") {
            text_seconds += lang.total_seconds;
            false
        } else {
            true
        }
    });

    if text_seconds <= 0.0 {
        return;
    }

    let percent_of = |seconds: f64| {
        if total_seconds > 0.0 {
            seconds / total_seconds * 100.0
        } else {
            0.0
        }
    };

    if let Some(python) = languages
        .iter_mut()
        .find(|l| l.name.trim().eq_ignore_ascii_case("python"))
    {
        let seconds = python.total_seconds + text_seconds;
        let fmt = format_time(seconds);
        python.total_seconds = seconds;
        python.percent = percent_of(seconds);
        python.text = fmt.text;
        python.digital = fmt.digital;
        python.hours = fmt.hours;
        python.minutes = fmt.minutes;
    } else {
        let fmt = format_time(text_seconds);
        languages.push(LanguageTime {
            name: "Python".to_string(),
            total_seconds: text_seconds,
            percent: percent_of(text_seconds),
            text: fmt.text,
            digital: fmt.digital,
            hours: fmt.hours,
            minutes: fmt.minutes,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire_lang(name: &str, seconds: f64) -> WireTimeEntry {
        WireTimeEntry {
            name: Some(name.to_string()),
            total_seconds: seconds,
            ..Default::default()
        }
    }

    #[test]
    fn test_format_time_forms() {
        assert_eq!(format_time(11527.0).text, "3h 12m");
        assert_eq!(format_time(11527.0).digital, "03:12:07");
        assert_eq!(format_time(300.0).text, "5m");
        assert_eq!(format_time(42.0).text, "42s");
        assert_eq!(format_time(0.0).digital, "00:00:00");
    }

    #[test]
    fn test_projects_converted_to_hours() {
        let data = HackatimeData {
            total_seconds: 36000.0,
            projects: vec![wire_lang("hackboard", 18000.0)],
            ..Default::default()
        };
        let snapshot = snapshot_from_wire(data, false);
        assert_eq!(snapshot.projects.len(), 1);
        assert_eq!(snapshot.projects[0].hours, 5.0);
        assert_eq!(snapshot.projects[0].seconds, 18000.0);
    }

    #[test]
    fn test_nameless_entry_becomes_unknown() {
        let data = HackatimeData {
            projects: vec![WireTimeEntry {
                total_seconds: 60.0,
                ..Default::default()
            }],
            ..Default::default()
        };
        let snapshot = snapshot_from_wire(data, false);
        assert_eq!(snapshot.projects[0].name, "Unknown");
    }

    #[test]
    fn test_fold_disabled_keeps_text() {
        let data = HackatimeData {
            total_seconds: 1000.0,
            languages: vec![wire_lang("Text", 400.0), wire_lang("Rust", 600.0)],
            ..Default::default()
        };
        let snapshot = snapshot_from_wire(data, false);
        assert!(snapshot.languages.iter().any(|l| l.name == "Text"));
    }

    #[test]
    fn test_fold_merges_into_existing_python() {
        let data = HackatimeData {
            total_seconds: 1000.0,
            languages: vec![wire_lang("Text", 400.0), wire_lang("Python", 600.0)],
            ..Default::default()
        };
        let snapshot = snapshot_from_wire(data, true);
        assert_eq!(snapshot.languages.len(), 1);
        let python = &snapshot.languages[0];
        assert_eq!(python.total_seconds, 1000.0);
        assert!((python.percent - 100.0).abs() < 1e-9);
        assert_eq!(python.text, "16m");
    }

    #[test]
    fn test_fold_creates_python_when_absent() {
        let data = HackatimeData {
            total_seconds: 1000.0,
            languages: vec![wire_lang("Text", 250.0), wire_lang("Rust", 750.0)],
            ..Default::default()
        };
        let snapshot = snapshot_from_wire(data, true);
        let python = snapshot
            .languages
            .iter()
            .find(|l| l.name == "Python")
            .unwrap();
        assert_eq!(python.total_seconds, 250.0);
        assert!((python.percent - 25.0).abs() < 1e-9);
    }
}
