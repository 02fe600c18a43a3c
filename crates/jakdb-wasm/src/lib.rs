//! jakdb-wasm — WebAssembly bindings for jakdb-core
//!
//! This crate exposes a small, ergonomic JS/WASM API built on top of
//! `jakdb-core`. It embeds the facility directory in the WASM binary and
//! provides the search entry points the locator page calls from JavaScript.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Basic queries: `get_facility_count()`, `get_districts()`,
//!   `get_district_counts()`
//! - Search helpers returning JSON-serializable objects:
//!   - `search_facilities("kollam", "chavara")`: district + free-text mode
//!   - `find_nearby(8.89, 76.61, 25.0)`: proximity mode, nearest first
//! - Display utilities: `format_distance(3.21)`,
//!   `describe_position_error(code)` for the W3C geolocation error codes
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { get_facility_count, find_nearby } from 'jakdb-wasm';
//!
//! async function main() {
//!   await init(); // initializes the embedded directory
//!   console.log('Facilities:', get_facility_count());
//!
//!   navigator.geolocation.getCurrentPosition(
//!     (pos) => {
//!       const hits = find_nearby(pos.coords.latitude, pos.coords.longitude, 25.0);
//!       console.log(hits); // [{id, name, district, distanceKm, distanceLabel, ...}]
//!     },
//!     (err) => console.warn(describe_position_error(err.code)),
//!     { enableHighAccuracy: true, timeout: 10000, maximumAge: 0 }
//!   );
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - The geolocation request itself stays on the JS side; this module only
//!   ever receives a resolved coordinate pair.
//! - All exported functions are `wasm_bindgen` bindings and return plain
//!   types or `JsValue` containing JSON-serializable arrays/objects.

use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

// Core Imports
use jakdb_core::api::FacilityView;
use jakdb_core::prelude::*;
use serde_json::json;
use serde_wasm_bindgen::to_value;

// 1. Embed the Directory
// The source JSON ships inside the binary; no fetch, no fallback path.
static EMBEDDED_DATA: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../jakdb-core/data/jak_directory.json"));

// 2. Static Instance
static DB: OnceLock<DefaultJakDb> = OnceLock::new();

fn db() -> &'static DefaultJakDb {
    DB.get_or_init(|| {
        DefaultJakDb::from_json_str(EMBEDDED_DATA).expect("embedded dataset is valid JSON")
    })
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing JakDB WASM module...".into());

    let stats = db().stats();
    web_sys::console::log_1(
        &format!(
            "✓ Loaded {} facilities across {} districts",
            stats.facilities, stats.districts
        )
        .into(),
    );
}

/* --------------------------------------------------------------------------
   Basic Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_facility_count() -> usize {
    db().facility_count()
}

#[wasm_bindgen]
pub fn get_districts() -> JsValue {
    to_value(&db().districts()).unwrap()
}

#[wasm_bindgen]
pub fn get_district_counts() -> JsValue {
    to_value(&db().district_counts()).unwrap()
}

#[wasm_bindgen]
pub fn get_stats() -> JsValue {
    let stats = db().stats();
    let stats = json!({
        "facilities": stats.facilities,
        "geolocatable": stats.geolocatable,
        "districts": stats.districts
    });

    to_value(&stats).unwrap()
}

/* --------------------------------------------------------------------------
   District / Text Search
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn search_facilities(district: &str, query: &str) -> JsValue {
    let items: Vec<FacilityView> = db()
        .filter_entries(district, query)
        .into_iter()
        .map(|f| FacilityView::from_facility(f))
        .collect();

    to_value(&items).unwrap()
}

#[wasm_bindgen]
pub fn get_facility(id: &str) -> JsValue {
    let db = db();
    let hit = db.find_by_id(id).or_else(|| db.find_by_code(id));
    match hit {
        Some(f) => to_value(&FacilityView::from_facility(f)).unwrap(),
        None => JsValue::NULL,
    }
}

/* --------------------------------------------------------------------------
   Proximity Search
-------------------------------------------------------------------------- */

/// Rank facilities by distance from the resolved user position.
/// Throws (as a JS error string) if the reference point is out of range.
#[wasm_bindgen]
pub fn find_nearby(lat: f64, lon: f64, radius_km: f64) -> std::result::Result<JsValue, JsValue> {
    let hits = db()
        .find_nearby(lat, lon, radius_km)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    // Map to JS serializable views while preserving the ranked order
    let array = js_sys::Array::new();
    for hit in &hits {
        array.push(&to_value(&FacilityView::from_hit(hit)).unwrap());
    }
    Ok(array.into())
}

/* --------------------------------------------------------------------------
   Display Utilities
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn format_distance(km: f64) -> String {
    jakdb_core::geo::format_distance(km)
}

/// Classify a W3C GeolocationPositionError code for the UI. The request
/// itself lives on the JS side; every one of these is retryable.
#[wasm_bindgen]
pub fn describe_position_error(code: u16) -> String {
    match code {
        1 => "permission-denied",
        2 => "position-unavailable",
        3 => "timeout",
        _ => "unknown",
    }
    .to_string()
}
