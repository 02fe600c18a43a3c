//! Proximity search example for jakdb-rs
//!
//! This example demonstrates the radius search: every geolocatable facility
//! within a given distance of a reference point, nearest first.

use jakdb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== JakDB-RS Proximity Search Example ===\n");

    let db = JakDb::<StandardBackend>::load()?;

    // The reference point would normally come from the browser's geolocation
    // API; here we stand in central Kochi.
    let (lat, lon) = (9.9816, 76.2999);

    for radius_km in [10.0, 25.0, 100.0] {
        println!("--- Facilities within {radius_km} km of ({lat}, {lon}) ---");
        let hits = db.find_nearby(lat, lon, radius_km)?;
        if hits.is_empty() {
            println!("(no matches)");
        }
        for hit in &hits {
            println!(
                "{:>8}  {} — {}",
                hit.formatted_distance(),
                hit.facility.display_name(),
                hit.facility.district()
            );
        }
        println!();
    }

    // Records without usable coordinates can never rank
    println!("--- Coverage ---");
    let total = db.facility_count();
    let locatable = db.stats().geolocatable;
    println!("{locatable} of {total} facilities carry usable coordinates");

    println!("\n=== Example completed successfully ===");
    Ok(())
}
