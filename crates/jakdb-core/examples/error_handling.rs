//! Error handling example for jakdb-rs
//!
//! This example demonstrates proper error handling and edge cases

use jakdb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== JakDB-RS Error Handling Example ===\n");

    // Example 1: Handling directory load errors
    println!("--- Example 1: Loading the directory with error handling ---");
    match JakDb::<StandardBackend>::load() {
        Ok(db) => {
            println!("✓ Directory loaded successfully");
            println!("  Facilities: {}", db.facility_count());
        }
        Err(e) => {
            eprintln!("✗ Failed to load directory: {e}");
            return Err(e);
        }
    }
    println!();

    let db = JakDb::<StandardBackend>::load()?;

    // Example 2: A missing dataset is a NotFound error
    println!("--- Example 2: Missing dataset file ---");
    match JakDb::<StandardBackend>::load_from_path("/no/such/dataset.json", None) {
        Ok(_) => println!("  Unexpectedly loaded"),
        Err(e) => println!("  Error (expected): {e}"),
    }
    println!();

    // Example 3: Empty results are values, not errors
    println!("--- Example 3: Searches that match nothing ---");
    let none = db.filter_entries("Madurai", "");
    println!("  District outside the directory: {} results", none.len());
    let none = db.filter_entries("", "zzzzz");
    println!("  Text that matches nothing: {} results", none.len());
    println!();

    // Example 4: An out-of-range reference point is rejected up front
    println!("--- Example 4: Invalid proximity reference ---");
    match db.find_nearby(200.0, 76.0, 25.0) {
        Ok(_) => println!("  Unexpectedly ranked"),
        Err(e) => println!("  Error (expected): {e}"),
    }
    println!();

    // Example 5: A negative radius yields an empty sequence
    println!("--- Example 5: Negative radius ---");
    let hits = db.find_nearby(9.9816, 76.2999, -5.0)?;
    println!("  {} results (nothing is a negative distance away)", hits.len());

    Ok(())
}
