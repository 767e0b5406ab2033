// crates/aqdash-core/src/dashboard.rs

//! Session state for the dashboard view.
//!
//! A [`Dashboard`] is loaded once, then read. Subscribers registered with
//! [`Dashboard::subscribe`] are called synchronously, in registration order,
//! after a load completes and whenever the selected city changes.

use crate::common::DatasetStats;
use crate::loader::{self, CsvParse, RowIssue};
use crate::model::CityRecord;
use crate::text::fold_key;
use crate::traits::NameMatch;
use std::fmt;
use std::path::Path;
use tracing::{error, info};

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    /// A load finished. `count == 0` means no data is available.
    Loaded { count: usize, skipped: usize },
    Selected { city: String, state: String },
}

pub type Subscriber = Box<dyn Fn(&DashboardEvent)>;

#[derive(Default)]
pub struct Dashboard {
    cities: Vec<CityRecord>,
    issues: Vec<RowIssue>,
    selected: Option<usize>,
    subscribers: Vec<Subscriber>,
}

impl fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dashboard")
            .field("cities", &self.cities.len())
            .field("issues", &self.issues.len())
            .field("selected", &self.selected)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn(&DashboardEvent) + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    /// Load from disk. An unreadable resource loads as an empty dataset.
    pub fn load_from_path(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let parsed = loader::try_load_cities(path).unwrap_or_else(|e| {
            error!(path = %path.display(), error = %e, "city dataset unavailable");
            CsvParse::default()
        });
        self.load_parsed(parsed);
    }

    /// Load the dataset compiled into the crate.
    pub fn load_embedded(&mut self) {
        self.load_parsed(loader::embedded_cities());
    }

    pub fn load_records(&mut self, records: Vec<CityRecord>) {
        self.load_parsed(CsvParse {
            records,
            issues: Vec::new(),
        });
    }

    /// Replaces the city list, selects the first city, and notifies.
    pub fn load_parsed(&mut self, parsed: CsvParse) {
        self.cities = parsed.records;
        self.issues = parsed.issues;
        self.selected = if self.cities.is_empty() { None } else { Some(0) };
        info!(
            cities = self.cities.len(),
            skipped = self.issues.len(),
            "dashboard loaded"
        );
        self.notify(&DashboardEvent::Loaded {
            count: self.cities.len(),
            skipped: self.issues.len(),
        });
    }

    pub fn cities(&self) -> &[CityRecord] {
        &self.cities
    }

    pub fn issues(&self) -> &[RowIssue] {
        &self.issues
    }

    pub fn has_data(&self) -> bool {
        !self.cities.is_empty()
    }

    pub fn stats(&self) -> DatasetStats {
        DatasetStats::from_records(&self.cities, self.issues.len())
    }

    pub fn selected(&self) -> Option<&CityRecord> {
        self.selected.and_then(|i| self.cities.get(i))
    }

    /// Select a city by name (accent- and case-insensitive). The first
    /// match in load order wins. Unknown names leave the selection as is.
    pub fn select(&mut self, name: &str) -> Option<&CityRecord> {
        let idx = self.cities.iter().position(|c| c.is_named(name))?;
        self.select_index(idx)
    }

    pub fn select_index(&mut self, idx: usize) -> Option<&CityRecord> {
        let city = self.cities.get(idx)?;
        let event = DashboardEvent::Selected {
            city: city.city.clone(),
            state: city.state.clone(),
        };
        self.selected = Some(idx);
        self.notify(&event);
        self.cities.get(idx)
    }

    /// Cities whose name or state contains `query`. An empty query returns
    /// every city.
    pub fn search(&self, query: &str) -> Vec<&CityRecord> {
        let q = fold_key(query);
        self.cities
            .iter()
            .filter(|c| c.name_contains(&q) || fold_key(&c.state).contains(&q))
            .collect()
    }

    fn notify(&self, event: &DashboardEvent) {
        for subscriber in &self.subscribers {
            subscriber(event);
        }
    }
}

/// Three advice lines for the selected city's AQI.
pub fn tips(aqi: f64) -> [&'static str; 3] {
    [
        if aqi > 100.0 {
            "Limit outdoor activities, especially if you have respiratory issues."
        } else {
            "Air quality is suitable for outdoor activities."
        },
        if aqi > 150.0 {
            "Keep windows closed to prevent outdoor air pollution from entering your home."
        } else {
            "It's a good time to ventilate your home by opening windows."
        },
        if aqi > 100.0 {
            "Consider using an air purifier indoors."
        } else {
            "Regular indoor ventilation is recommended."
        },
    ]
}
