//! Basic usage example for jakdb-rs
//!
//! This example demonstrates how to:
//! - Load the facility directory
//! - List districts and their facility counts
//! - Filter facilities by district and free-text query
//! - Use the caching mechanism

use jakdb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== JakDB-RS Basic Usage Example ===\n");

    // Load the directory
    println!("Loading facility directory...");
    let db = JakDb::<StandardBackend>::load()?;
    println!("✓ Directory loaded successfully\n");

    // Example 1: Directory statistics
    println!("--- Example 1: Directory statistics ---");
    let stats = db.stats();
    println!("Facilities: {}", stats.facilities);
    println!("Geolocatable: {}", stats.geolocatable);
    println!("Districts: {}", stats.districts);
    println!();

    // Example 2: Facility counts per district
    println!("--- Example 2: Facilities per district ---");
    for (district, count) in db.district_counts() {
        println!("{district}: {count}");
    }
    println!();

    // Example 3: District search
    println!("--- Example 3: Facilities in Kollam ---");
    let kollam = db.filter_entries("kollam", "");
    println!("Found {} facilities:", kollam.len());
    for jak in &kollam {
        println!(
            "- {} ({}) — {}, {}",
            jak.display_name(),
            jak.jak_code(),
            jak.health_block(),
            jak.district()
        );
    }
    println!();

    // Example 4: Free-text search across the whole directory
    println!("--- Example 4: Facilities matching 'uphc' ---");
    let matches = db.filter_entries("", "uphc");
    println!("Found {} facilities:", matches.len());
    for jak in matches.iter().take(5) {
        println!("- {} — {}", jak.display_name(), jak.district());
    }
    println!();

    // Example 5: Lookup by JAK code
    println!("--- Example 5: Lookup by code ---");
    if let Some(jak) = db.find_by_code("JAK-EKM-001") {
        println!("Found: {}", jak.display_name());
        println!("Institution: {}", jak.institution_name());
        println!("Constituency: {}", jak.constituency());
        println!("Email: {:?}", jak.email());
        println!("Directions: {:?}", jak.maps_url());
    }
    println!();

    // Example 6: Using the cache
    println!("--- Example 6: Cache usage ---");
    println!("First load (will cache):");
    let start = std::time::Instant::now();
    let _db1 = JakDb::<StandardBackend>::load()?;
    println!("Time: {:?}", start.elapsed());

    println!("Second load (from cache):");
    let start = std::time::Instant::now();
    let _db2 = JakDb::<StandardBackend>::load()?;
    println!("Time: {:?}", start.elapsed());

    println!("\n=== Example completed successfully ===");
    Ok(())
}
