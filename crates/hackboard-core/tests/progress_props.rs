//! End-to-end properties of the progress calculation through the public API

use hackboard_core::models::stats::ProjectTime;
use hackboard_core::models::store::StorePayload;
use hackboard_core::models::{FormulaConfig, StatsSnapshot};
use hackboard_core::{build_progress_report, compute_cookies, Catalog};

fn snapshot(hours: &[f64]) -> StatsSnapshot {
    StatsSnapshot {
        total_seconds: hours.iter().sum::<f64>() * 3600.0,
        projects: hours
            .iter()
            .enumerate()
            .map(|(i, h)| ProjectTime {
                name: format!("project-{i}"),
                hours: *h,
                seconds: h * 3600.0,
            })
            .collect(),
        ..Default::default()
    }
}

fn catalog_from_json(json: &str) -> Catalog {
    let payload: StorePayload = serde_json::from_str(json).unwrap();
    Catalog::build(payload.into_items())
}

#[test]
fn splitting_hours_across_projects_never_loses_cookies() {
    let cfg = FormulaConfig::default();
    for total in [1.0, 8.0, 40.0, 200.0] {
        for n in 1..8usize {
            let equal = vec![total / n as f64; n];
            let split = compute_cookies(&snapshot(&equal), &cfg);
            let whole = compute_cookies(&snapshot(&[total]), &cfg);
            assert!(
                split >= whole - 1e-9,
                "total={total} n={n}: {split} < {whole}"
            );
            if n > 1 {
                assert!(split > whole, "strict for n={n}, total={total}");
            }
        }
    }
}

#[test]
fn worked_example_from_the_store_docs() {
    // 36000s over two 5h projects, quality=10, k=1, beta=2:
    // per project 88 * (10/15) * (1 + 2 ln 6) ≈ 268.8, total ≈ 537.6.
    // Aggregate 10h single computation ≈ 340.3.
    let cfg = FormulaConfig::new(10.0, 1.0, 2.0);

    let split = compute_cookies(&snapshot(&[5.0, 5.0]), &cfg);
    assert!((split - 537.6).abs() < 0.5, "split={split}");

    let aggregate = compute_cookies(
        &StatsSnapshot {
            total_seconds: 36000.0,
            ..Default::default()
        },
        &cfg,
    );
    assert!((aggregate - 340.3).abs() < 0.5, "aggregate={aggregate}");
    assert!(split > aggregate);
}

#[test]
fn full_report_from_wire_shaped_store_document() {
    let catalog = catalog_from_json(
        r#"[
            {"name": "Framework Laptop", "ticket_cost": {"base_cost": 450, "us": 420}, "enabled": true},
            {"name": "Sticker Pack", "ticket_cost": {"base_cost": "5"}, "enabled": true},
            {"name": "Laptop Skin", "ticket_cost": {"base_cost": 20}, "enabled": true, "type": "Accessory"}
        ]"#,
    );

    // Accessory filtered, remainder sorted ascending by base cost
    assert_eq!(catalog.names(), vec!["Sticker Pack", "Framework Laptop"]);

    let cfg = FormulaConfig::new(10.0, 1.0, 2.0);
    let stats = snapshot(&[5.0, 5.0]);

    let report =
        build_progress_report(&stats, &catalog, "Framework Laptop", "US", &cfg).unwrap();
    assert_eq!(report.price, Some(420.0));
    assert_eq!(report.country, "us");
    assert!((report.cookies_earned - 537.6).abs() < 0.5);
    assert_eq!(report.progress_percent, Some(100.0));
    assert_eq!(report.cookies_needed, Some(0.0));
}

#[test]
fn missing_price_is_distinct_from_missing_item() {
    let catalog = catalog_from_json(r#"[{"name": "Mystery Box", "ticket_cost": {}}]"#);
    let cfg = FormulaConfig::default();
    let stats = snapshot(&[2.0]);

    // Unknown item: no report at all
    assert!(build_progress_report(&stats, &catalog, "Ghost", "us", &cfg).is_none());

    // Known item without cost data: report with None price fields
    let report = build_progress_report(&stats, &catalog, "Mystery Box", "us", &cfg).unwrap();
    assert!(report.price.is_none());
    assert!(report.cookies_needed.is_none());
    assert!(report.progress_percent.is_none());
    assert!(report.cookies_earned > 0.0);
}

#[test]
fn cookies_available_without_any_target() {
    // A caller can always display earned cookies, report or not
    let cfg = FormulaConfig::new(15.0, 0.0, 0.0);
    let earned = compute_cookies(&snapshot(&[123.0]), &cfg);
    assert_eq!(earned, 88.0);
}
