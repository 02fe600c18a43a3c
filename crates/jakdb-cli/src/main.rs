//! jakdb-cli — Command-line interface for jakdb-core
//!
//! This binary provides a simple way to inspect the bundled facility
//! directory from your terminal. It supports printing basic statistics,
//! listing districts, searching facilities by district and free text,
//! ranking facilities by distance from a coordinate, and showing one
//! facility in full.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ jakdb-cli stats
//!
//! - List districts with facility counts
//!   $ jakdb-cli districts
//!
//! - Search within a district (optionally narrowed by free text)
//!   $ jakdb-cli find --district kollam
//!   $ jakdb-cli find --district kollam --query chavara
//!
//! - Rank facilities by distance from a point (radius in km)
//!   $ jakdb-cli nearby 8.8932 76.6141 --radius 25
//!
//! - Show one facility by id or JAK code
//!   $ jakdb-cli show JAK-EKM-001
//!
//! Data source
//! -----------
//!
//! By default, the CLI loads the dataset bundled with the `jakdb-core` crate
//! and automatically caches a binary version next to it for fast subsequent
//! runs. Use `--input <path>` to point to a custom dataset and
//! `--filter <district,district,...>` to restrict loading to specific
//! districts.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use jakdb_core::{JakDb, StandardBackend};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Determine input file (default dataset inside jakdb-core)
    let input_path = args.input.unwrap_or_else(|| {
        let dir = JakDb::<StandardBackend>::default_data_dir();
        let filename = JakDb::<StandardBackend>::default_dataset_filename();
        dir.join(filename).to_string_lossy().to_string()
    });
    // Parse district filter if provided
    let district_filter: Option<Vec<&str>> = args.filter.as_ref().map(|s| {
        s.split(',')
            .map(|x| x.trim())
            .filter(|x| !x.is_empty())
            .collect()
    });

    // Load directory (with filter if any)
    let filter_slice = district_filter.as_deref();
    let db = JakDb::<StandardBackend>::load_from_path(&input_path, filter_slice)?;

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Directory statistics:");
            println!("  Facilities: {}", stats.facilities);
            println!("  Geolocatable: {}", stats.geolocatable);
            println!("  Districts: {}", stats.districts);
        }

        Commands::Districts => {
            for (district, count) in db.district_counts() {
                println!("{district}: {count}");
            }
        }

        Commands::Find {
            district,
            query,
            limit,
        } => {
            let matches = db.filter_entries(&district, &query);
            if matches.is_empty() {
                println!("No facilities found");
            } else {
                for jak in matches.iter().take(limit) {
                    println!(
                        "{} [{}] — {}, {}",
                        jak.display_name(),
                        jak.jak_code(),
                        jak.health_block(),
                        jak.district()
                    );
                }
                if matches.len() > limit {
                    println!("... and {} more (raise --limit to see them)", matches.len() - limit);
                }
            }
        }

        Commands::Nearby {
            lat,
            lon,
            radius,
            limit,
        } => {
            let hits = db.find_nearby(lat, lon, radius)?;
            if hits.is_empty() {
                println!("No facilities within {radius}km of ({lat}, {lon})");
            } else {
                for hit in hits.iter().take(limit) {
                    println!(
                        "{:>8}  {} — {}",
                        hit.formatted_distance(),
                        hit.facility.display_name(),
                        hit.facility.district()
                    );
                }
                if hits.len() > limit {
                    println!("... and {} more (raise --limit to see them)", hits.len() - limit);
                }
            }
        }

        Commands::Show { id } => {
            match db.find_by_id(&id).or_else(|| db.find_by_code(&id)) {
                Some(jak) => {
                    println!("Facility: {}", jak.display_name());
                    println!("Id: {}", jak.id());
                    println!("JAK Code: {}", jak.jak_code());
                    println!("Institution: {}", jak.institution_name());
                    println!("District: {}", jak.district());
                    println!("Health Block: {}", jak.health_block());
                    println!("Constituency: {}", jak.constituency());
                    println!("Email: {:?}", jak.email());
                    println!("NIN ID: {:?}", jak.ninid());
                    match jak.maps_url() {
                        Some(url) => println!("Directions: {url}"),
                        None => println!("Directions: (no usable coordinates)"),
                    }
                }
                None => {
                    eprintln!("No facility found for: {id}");
                }
            }
        }
    }

    Ok(())
}
