//! Basic usage example for aqdash-rs
//!
//! This example demonstrates how to:
//! - Classify AQI readings (including out-of-range ones)
//! - Load the city dataset and react to the load
//! - Inspect the pollutant table and its distribution

use aqdash_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== aqdash Basic Usage Example ===\n");

    // Example 1: Classify readings
    println!("--- Example 1: Classify AQI values ---");
    for aqi in [0.0, 50.0, 51.0, 87.0, 160.0, 500.0, -5.0, 600.0] {
        let strict = if try_classify(aqi).is_some() { "" } else { " (fallback)" };
        println!("{aqi:>6}: {}{strict}", classify(aqi).category);
    }
    println!();

    // Example 2: Load cities, then react
    println!("--- Example 2: Load the city dataset ---");
    let mut dashboard = Dashboard::new();
    dashboard.subscribe(|event| println!("event: {event:?}"));
    dashboard.load_from_path(aqdash_rs::loader::default_dataset_path());
    if let Some(city) = dashboard.selected() {
        let gauge = Gauge::new(city.aqi);
        println!(
            "Selected {} (AQI {}, {}, needle {:.1}°)",
            city.display_name(),
            city.aqi,
            gauge.band.category,
            gauge.rotation
        );
        println!("Advice panel: {}", gauge.advice_background()?);
    }
    for city in dashboard.search("california") {
        println!("- {} {}", city.city, city.band().category);
    }
    println!();

    // Example 3: Pollutants
    println!("--- Example 3: Pollutants ---");
    for p in by_hazard(POLLUTANTS) {
        println!("{:<24} {:<9} {}", p.label(), p.status(), p.status_text());
    }
    if let Some(d) = Distribution::from_records(POLLUTANTS) {
        println!(
            "Total measured: {}%, most hazardous: {} ({})",
            d.total_percentage,
            d.most_hazardous.name,
            d.hazard_note()
        );
    }

    Ok(())
}
