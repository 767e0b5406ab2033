//! aqdash — Command-line air-quality dashboard
//!
//! Prints the dashboard's views as text (or JSON with `--json`): the AQI
//! band table, a classification for any value, the city list with search,
//! a single city's snapshot with gauge and tips, the pollutant table, and
//! the pollutant distribution summary.
//!
//! Usage examples
//! --------------
//!
//! - Classify a reading
//!   $ aqdash classify 87
//!
//! - List cities, optionally filtered by city or state
//!   $ aqdash cities
//!   $ aqdash cities --search texas
//!
//! - Details for one city
//!   $ aqdash city bakersfield
//!
//! - Pollutants
//!   $ aqdash pollutants
//!   $ aqdash pollutant pm25
//!   $ aqdash distribution
//!
//! Data source
//! -----------
//!
//! By default, the CLI loads `cities.csv` shipped with `aqdash-core`. Use
//! `--input <path>` (or `AQDASH_INPUT`) to point to another CSV, optionally
//! gzipped (`.csv.gz`). An unreadable file shows up as "no data available".
mod args;

use crate::args::{CliArgs, Commands};
use aqdash_core::api::{bands_json, to_json_pretty, CityDetailView, CityView, PollutantView};
use aqdash_core::dashboard::{tips, Dashboard};
use aqdash_core::distribution::{by_hazard, slices, Distribution};
use aqdash_core::gauge::{Gauge, TICKS};
use aqdash_core::loader;
use aqdash_core::model::{classify, find_pollutant, try_classify, BANDS, POLLUTANTS};
use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    // Determine input file (default CSV inside aqdash-core)
    let input_path = args
        .input
        .unwrap_or_else(|| loader::default_dataset_path().to_string_lossy().to_string());

    match args.command {
        Commands::Bands => {
            if args.json {
                println!("{}", bands_json(BANDS)?);
            } else {
                for b in BANDS {
                    println!("{:>7}  {:<31} {}", b.range_label(), b.category, b.color);
                }
            }
        }

        Commands::Classify { aqi } => {
            let gauge = Gauge::new(aqi);
            let band = classify(aqi);
            if args.json {
                println!(
                    "{}",
                    to_json_pretty(&serde_json::json!({
                        "aqi": aqi,
                        "inDomain": try_classify(aqi).is_some(),
                        "band": band,
                        "gauge": gauge,
                    }))?
                );
            } else {
                if try_classify(aqi).is_none() {
                    eprintln!("note: {aqi} is outside every band, showing the default band");
                }
                println!("AQI {aqi}: {}", band.category);
                println!("  {}", band.description);
                println!("  Health advice: {}", band.health);
                println!(
                    "  Gauge: {} on a {}-{} dial, needle at {:.1}°",
                    gauge.value,
                    TICKS[0],
                    TICKS[TICKS.len() - 1],
                    gauge.rotation
                );
            }
        }

        Commands::Pollutants => {
            if args.json {
                let views: Vec<PollutantView> = POLLUTANTS.iter().map(PollutantView::from).collect();
                println!("{}", to_json_pretty(&views)?);
            } else {
                println!(
                    "{:<20} {:<7} {:>10}  {:<9} {:>6}  {}",
                    "Gas", "Formula", "ppm", "Status", "Limit%", "Current Status"
                );
                for p in POLLUTANTS {
                    println!(
                        "{:<20} {:<7} {:>10}  {:<9} {:>5.0}%  {}",
                        p.name,
                        p.formula,
                        p.ppm,
                        p.status().label(),
                        p.limit_bar_percent(),
                        p.status_text()
                    );
                }
            }
        }

        Commands::Pollutant { id } => match find_pollutant(&id) {
            Some(p) if args.json => println!("{}", to_json_pretty(&PollutantView::from(p))?),
            Some(p) => {
                println!("{}", p.label());
                println!("Concentration: {} ppm", p.ppm);
                println!("Safe limit: {} ppm", p.safe_limit);
                println!("Status: {} ({})", p.status(), p.status_text());
                println!("Potential hazards:");
                for h in p.hazards {
                    println!("- {h}");
                }
            }
            None => eprintln!("No pollutant found for: {id}"),
        },

        Commands::Distribution => {
            let Some(d) = Distribution::from_records(POLLUTANTS) else {
                println!("No pollutant data available");
                return Ok(());
            };
            if args.json {
                let hazard_order: Vec<&str> = by_hazard(POLLUTANTS).iter().map(|p| p.id).collect();
                println!(
                    "{}",
                    to_json_pretty(&serde_json::json!({
                        "summary": d,
                        "hazardNote": d.hazard_note(),
                        "slices": slices(POLLUTANTS),
                        "byHazard": hazard_order,
                    }))?
                );
            } else {
                for s in slices(POLLUTANTS) {
                    println!("{}", s.tooltip());
                }
                println!();
                println!(
                    "Total measured: {}% (unmeasured: {}%)",
                    d.total_percentage,
                    d.unmeasured_percentage()
                );
                println!(
                    "Most prevalent: {} at {}%",
                    d.most_prevalent.label(),
                    d.most_prevalent.percentage
                );
                println!(
                    "Most hazardous: {} at {:.1}x ({})",
                    d.most_hazardous.label(),
                    d.most_hazardous.ratio(),
                    d.hazard_note()
                );
            }
        }

        Commands::Stats => {
            let Some(dashboard) = load_dashboard(&input_path, &mut io::stdout())? else {
                return Ok(());
            };
            let stats = dashboard.stats();
            if args.json {
                println!("{}", to_json_pretty(&stats)?);
            } else {
                println!("Dataset statistics:");
                println!("  Cities: {}", stats.cities);
                println!("  States/Regions: {}", stats.states);
                println!("  Skipped rows: {}", stats.skipped_rows);
                if let Some(mean) = stats.mean_aqi {
                    println!("  Mean AQI: {mean:.1} ({})", classify(mean).category);
                }
            }
        }

        Commands::Cities { search } => {
            let Some(dashboard) = load_dashboard(&input_path, &mut io::stdout())? else {
                return Ok(());
            };
            let matches = dashboard.search(search.as_deref().unwrap_or(""));
            if args.json {
                let views: Vec<CityView> = matches.into_iter().map(CityView::from).collect();
                println!("{}", to_json_pretty(&views)?);
            } else if matches.is_empty() {
                println!("No cities found matching: {}", search.unwrap_or_default());
            } else {
                for c in matches {
                    println!(
                        "{:<28} AQI {:>4}  {}",
                        c.display_name(),
                        c.aqi,
                        c.band().category
                    );
                }
            }
        }

        Commands::City { name } => {
            let Some(mut dashboard) = load_dashboard(&input_path, &mut io::stdout())? else {
                return Ok(());
            };
            match dashboard.select(&name) {
                Some(c) if args.json => println!("{}", to_json_pretty(&CityDetailView::new(c)?)?),
                Some(c) => {
                    let gauge = Gauge::new(c.aqi);
                    println!("{}", c.display_name());
                    println!("  AQI: {} ({})", c.aqi, gauge.band.category);
                    println!("  {}", gauge.band.description);
                    println!("  Health advice: {}", gauge.band.health);
                    println!("  Temperature: {}°C", c.temperature);
                    println!("  Wind Speed: {} mph", c.wind_speed);
                    println!("  Humidity: {}%", c.humidity);
                    println!("  Location: {:.4}, {:.4}", c.latitude, c.longitude);
                    println!("Air Quality Tips:");
                    for tip in tips(c.aqi) {
                        println!("- {tip}");
                    }
                }
                None => eprintln!("City {name} not found"),
            }
        }
    }

    Ok(())
}

/// Loads the city dataset; `None` when there is nothing to show.
///
/// Skipped rows and unreadable files are already reported by the loader's
/// `tracing` events, so only the empty view is written to `out`.
fn load_dashboard(input_path: &str, out: &mut impl Write) -> io::Result<Option<Dashboard>> {
    let mut dashboard = Dashboard::new();
    dashboard.subscribe(|event| tracing::debug!(?event, "dashboard event"));
    dashboard.load_from_path(input_path);

    if !dashboard.has_data() {
        writeln!(out, "No city data available")?;
        return Ok(None);
    }
    Ok(Some(dashboard))
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const HEADER: &str = "city,state,aqi,temperature,windSpeed,humidity,latitude,longitude";

    #[test]
    fn skipped_rows_are_not_echoed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cities.csv");
        std::fs::write(&path, format!("{HEADER}\nReno,Nevada,37,15,8,22,39.5,-119.8\nbroken\n")).unwrap();

        let mut out = Vec::new();
        let dashboard = load_dashboard(path.to_str().unwrap(), &mut out)
            .unwrap()
            .expect("one valid row");
        assert_eq!(dashboard.cities().len(), 1);
        assert_eq!(dashboard.issues().len(), 1);
        assert!(out.is_empty(), "unexpected output: {}", String::from_utf8_lossy(&out));
    }

    #[test]
    fn missing_file_prints_only_the_empty_view() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.csv");

        let mut out = Vec::new();
        assert!(load_dashboard(path.to_str().unwrap(), &mut out).unwrap().is_none());
        assert_eq!(String::from_utf8(out).unwrap(), "No city data available\n");
    }
}
