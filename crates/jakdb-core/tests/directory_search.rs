//! End-to-end tests against the bundled directory dataset.

use jakdb_core::prelude::*;

fn db() -> DefaultJakDb {
    JakDb::<StandardBackend>::load().expect("bundled dataset loads")
}

#[test]
fn bundled_dataset_materializes() {
    let db = db();
    let stats = db.stats();
    assert_eq!(stats.facilities, 17);
    // One zero/zero marker and one record without coordinates
    assert_eq!(stats.geolocatable, 15);
    assert_eq!(stats.districts, KERALA_DISTRICTS.len());
}

#[test]
fn district_mode_search() {
    let db = db();

    let kollam = db.filter_entries("kollam", "");
    let names: Vec<_> = kollam.iter().map(|f| f.display_name()).collect();
    assert_eq!(names, ["JAK Eravipuram", "JAK Chavara"]);
    for f in &kollam {
        assert!(equals_folded(f.district(), "Kollam"));
    }

    // Free-text narrows within the district
    let narrowed = db.filter_entries("kollam", "chavara");
    assert_eq!(narrowed.len(), 1);
    assert_eq!(narrowed[0].jak_code(), "JAK-KLM-002");

    // Text alone searches names, institution names and codes
    assert_eq!(db.filter_entries("", "JAK-KLM-002").len(), 1);
    assert!(db.filter_entries("", "uphc").len() >= 5);

    // Unknown district is a normal empty outcome
    assert!(db.filter_entries("Madurai", "").is_empty());
}

#[test]
fn proximity_mode_search() {
    let db = db();

    // From Kollam city: Eravipuram (~4 km) then Chavara (~14 km), Adoor
    // (~32 km) falls outside the radius
    let hits = db.find_nearby(8.8932, 76.6141, 25.0).unwrap();
    let names: Vec<_> = hits.iter().map(|h| h.facility.display_name()).collect();
    assert_eq!(names, ["JAK Eravipuram", "JAK Chavara"]);

    assert!(hits[0].distance_km > 3.0 && hits[0].distance_km < 5.0);
    assert!(hits[1].distance_km > 13.0 && hits[1].distance_km < 16.0);
    for pair in hits.windows(2) {
        assert!(pair[0].distance_km <= pair[1].distance_km);
    }
    for h in &hits {
        assert!(h.distance_km <= 25.0);
    }
}

#[test]
fn unlocated_records_never_rank() {
    let db = db();
    let everything = db.find_nearby(10.0, 76.3, 2000.0).unwrap();
    assert_eq!(everything.len(), 15);
    assert!(everything
        .iter()
        .all(|h| h.facility.display_name() != "JAK Kalpetta"));
    assert!(everything
        .iter()
        .all(|h| h.facility.display_name() != "JAK Manjeshwaram"));
}

#[test]
fn record_lookups_and_display_fallbacks() {
    let db = db();

    let beypore = db.find_by_code("jak-kkd-001").unwrap();
    assert_eq!(beypore.display_name(), "JAK Beypore");
    assert_eq!(beypore.district(), "Kozhikode");
    assert!(beypore.maps_url().unwrap().contains("11.1752"));

    // Record 11 has a blank JAK name; the institution name steps in
    let ollukkara = db.find_by_id("11").unwrap();
    assert_eq!(ollukkara.display_name(), "UPHC Ollukkara");

    // The zero/zero marker means no directions link
    let kalpetta = db.find_by_code("JAK-WYD-001").unwrap();
    assert_eq!(kalpetta.maps_url(), None);
}

#[test]
fn district_restricted_load() {
    let db = JakDb::<StandardBackend>::load_filtered_by_district(&["Ernakulam"]).unwrap();
    assert_eq!(db.facility_count(), 2);
    assert!(db
        .facilities()
        .iter()
        .all(|f| f.district() == "Ernakulam"));
}
