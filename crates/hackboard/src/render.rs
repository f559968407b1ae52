//! Terminal output: tables, progress bar, JSON switches

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use hackboard_core::models::StatsSnapshot;
use hackboard_core::{Catalog, ProgressReport};
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while fetching remote data
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

fn header(table: &mut Table, titles: &[&str], no_color: bool) {
    if no_color {
        table.set_header(titles.to_vec());
    } else {
        table.set_header(
            titles
                .iter()
                .map(|t| Cell::new(t).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
    }
}

/// Format total time plus language/project tables, or the raw snapshot as JSON
pub fn print_stats(snapshot: &StatsSnapshot, json: bool, no_color: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(snapshot)?);
        return Ok(());
    }

    let total = snapshot
        .human_readable
        .clone()
        .unwrap_or_else(|| format!("{:.1} hrs", snapshot.total_hours()));
    println!("Total time: {total}");

    if snapshot.languages.is_empty() {
        println!("\nNo languages to show.");
    } else {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        header(&mut table, &["Language", "Time", "Percent"], no_color);
        for lang in snapshot.top_languages(usize::MAX) {
            table.add_row(Row::from(vec![
                lang.name.clone(),
                lang.text.clone(),
                format!("{:.1}%", lang.percent),
            ]));
        }
        println!("\n{table}");
    }

    if snapshot.has_projects() {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        header(&mut table, &["Project", "Hours"], no_color);
        for project in &snapshot.projects {
            table.add_row(Row::from(vec![
                project.name.clone(),
                format!("{:.2}", project.hours),
            ]));
        }
        println!("\n{table}");
    }

    Ok(())
}

/// Print earned cookies and, when a target is configured and found, progress
pub fn print_progress(
    cookies_earned: f64,
    report: Option<&ProgressReport>,
    json: bool,
) -> Result<()> {
    if json {
        let doc = serde_json::json!({
            "cookies_earned": cookies_earned,
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("Cookies earned (predicted): {cookies_earned:.1}");

    let Some(report) = report else {
        println!("Set a target item in settings to track progress.");
        return Ok(());
    };

    match report.price {
        Some(price) => println!(
            "Target: {} — {:.0} tickets ({})",
            report.item_name,
            price,
            report.country.to_uppercase()
        ),
        None => println!(
            "Target: {} — no price found for this item.",
            report.item_name
        ),
    }

    if let Some(percent) = report.progress_percent {
        println!("{} {percent:.1}%", text_bar(percent, 30));
        if let Some(needed) = report.cookies_needed {
            println!("{needed:.1} cookies remaining (estimate)");
        }
    }

    Ok(())
}

/// List catalog items with base and country pricing
pub fn print_store(catalog: &Catalog, country: &str, json: bool, no_color: bool) -> Result<()> {
    if json {
        let items: Vec<_> = catalog
            .iter()
            .map(|item| {
                serde_json::json!({
                    "name": item.name,
                    "base_cost": item.ticket_cost.base(),
                    "country_cost": item.ticket_cost.for_country(country),
                    "enabled": item.enabled,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if catalog.is_empty() {
        println!("No store items.");
        return Ok(());
    }

    let country_header = format!("Cost ({})", country.to_uppercase());
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    header(
        &mut table,
        &["Item", "Base cost", &country_header, "Enabled"],
        no_color,
    );

    for item in catalog.iter() {
        let fmt_cost = |c: Option<f64>| c.map_or("-".to_string(), |v| format!("{v:.0}"));
        table.add_row(Row::from(vec![
            item.name.clone(),
            fmt_cost(item.ticket_cost.base()),
            fmt_cost(item.ticket_cost.for_country(country)),
            if item.enabled { "yes" } else { "no" }.to_string(),
        ]));
    }
    println!("{table}");

    Ok(())
}

/// Fixed-width textual progress bar
fn text_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}
