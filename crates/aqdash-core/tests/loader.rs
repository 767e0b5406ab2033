//! On-disk loading: plain, gzipped, malformed and missing resources.

use aqdash_core::prelude::*;
use tempfile::TempDir;

const HEADER: &str = "city,state,aqi,temperature,windSpeed,humidity,latitude,longitude";

fn init_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn write_csv(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, body).expect("write fixture");
    path
}

#[test]
fn loads_well_formed_file_in_order() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "cities.csv",
        &format!("{HEADER}\nCityA,StateA,42,20,5,60,1.0,2.0\nCityB,StateB,160,30,10,40,3.0,4.0\n"),
    );

    let cities = load_cities(&path);
    assert_eq!(cities.len(), 2);
    assert_eq!(cities[0].city, "CityA");
    assert_eq!(cities[0].band().category, "Good");
    assert_eq!(cities[1].city, "CityB");
    assert_eq!(cities[1].band().category, "Unhealthy");
}

#[test]
fn malformed_rows_are_reported_not_fatal() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "cities.csv",
        &format!("{HEADER}\nCityA,StateA,42,20,5,60,1.0,2.0\nbroken row\nCityC,StateC,x,1,2,3,4,5\n\n"),
    );

    let parsed = try_load_cities(&path).expect("file is readable");
    assert_eq!(parsed.records.len(), 1);
    let lines: Vec<usize> = parsed.issues.iter().map(|i| i.line).collect();
    assert_eq!(lines, [3, 4]);

    assert_eq!(load_cities(&path).len(), 1);
}

#[test]
fn missing_resource_yields_empty_list() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.csv");
    assert!(load_cities(&path).is_empty());
    assert!(matches!(try_load_cities(&path), Err(AqError::NotFound(_))));
}

#[test]
fn invalid_utf8_yields_empty_list() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("binary.csv");
    std::fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();
    assert!(load_cities(&path).is_empty());
    assert!(matches!(try_load_cities(&path), Err(AqError::Io(_))));
}

#[test]
fn every_call_rereads_the_file() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "cities.csv", &format!("{HEADER}\nA,S,1,1,1,1,1,1\n"));
    assert_eq!(load_cities(&path).len(), 1);

    write_csv(&dir, "cities.csv", &format!("{HEADER}\nA,S,1,1,1,1,1,1\nB,S,2,2,2,2,2,2\n"));
    assert_eq!(load_cities(&path).len(), 2);
}

#[cfg(feature = "compact")]
#[test]
fn gzipped_file_is_decompressed() {
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cities.csv.gz");
    let file = std::fs::File::create(&path).unwrap();
    let mut enc = GzEncoder::new(file, Compression::default());
    write!(enc, "{HEADER}\nReno,Nevada,37,15,8,22,39.5,-119.8\n").unwrap();
    enc.finish().unwrap();

    let cities = load_cities(&path);
    assert_eq!(cities.len(), 1);
    assert_eq!(cities[0].state, "Nevada");
}

#[test]
fn shipped_dataset_loads_cleanly() {
    let parsed = try_load_cities(aqdash_core::loader::default_dataset_path()).unwrap();
    assert!(parsed.is_clean());
    assert_eq!(parsed.records, embedded_cities().records);
    let stats = DatasetStats::from(&parsed);
    assert_eq!(stats.cities, 20);
    assert!(stats.states > 1);
}

#[test]
fn fractional_aqi_lands_in_the_band_above_the_label() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "cities.csv",
        &format!("{HEADER}\nModesto,California,150.5,30,4,30,37.6,-121.0\nOgden,Utah,50.5,12,6,40,41.2,-111.9\n"),
    );

    let cities = load_cities(&path);
    assert_eq!(cities[0].band().category, "Unhealthy");
    assert_eq!(Gauge::new(cities[0].aqi).band.category, "Unhealthy");
    assert_eq!(cities[1].band().category, "Moderate");
}
