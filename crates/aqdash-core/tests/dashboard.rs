//! Load-then-notify flow over a real file.

use aqdash_core::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn load_notifies_then_views_read_the_selection() {
    let events: Rc<RefCell<Vec<DashboardEvent>>> = Rc::default();
    let mut dashboard = Dashboard::new();
    {
        let events = Rc::clone(&events);
        dashboard.subscribe(move |e| events.borrow_mut().push(e.clone()));
    }

    dashboard.load_from_path(aqdash_core::loader::default_dataset_path());
    assert_eq!(
        events.borrow().first(),
        Some(&DashboardEvent::Loaded {
            count: 20,
            skipped: 0
        })
    );

    let la = dashboard.selected().expect("first city selected");
    assert_eq!(la.city, "Los Angeles");
    let gauge = Gauge::new(la.aqi);
    assert_eq!(gauge.band.category, "Unhealthy for Sensitive Groups");
    assert!(tips(la.aqi)[0].starts_with("Limit outdoor activities"));

    let bakersfield = dashboard.select("bakersfield").expect("city in dataset");
    assert_eq!(bakersfield.band().category, "Unhealthy");
    assert_eq!(
        events.borrow().last(),
        Some(&DashboardEvent::Selected {
            city: "Bakersfield".into(),
            state: "California".into()
        })
    );

    let texas: Vec<&str> = dashboard
        .search("texas")
        .into_iter()
        .map(|c| c.city.as_str())
        .collect();
    assert_eq!(texas, ["Houston", "San Antonio", "Dallas"]);
}

#[test]
fn embedded_and_on_disk_datasets_agree() {
    let mut a = Dashboard::new();
    a.load_embedded();
    let mut b = Dashboard::new();
    b.load_from_path(aqdash_core::loader::default_dataset_path());
    assert_eq!(a.cities(), b.cities());
    assert_eq!(a.stats(), b.stats());
}
