// crates/jakdb-core/src/api.rs

//! Owned, JSON-serializable views of directory records.
//!
//! The model types are generic over the storage backend and borrow from the
//! directory; these views flatten them into plain owned fields so they can
//! cross the WASM boundary (via `serde-wasm-bindgen`) or be printed as JSON.

use crate::geo;
use crate::model::{Facility, NearbyHit};
use crate::traits::JakBackend;
use serde::Serialize;

/// One facility, rendered for the UI.
///
/// `distance_km`/`distance_label` are only present on proximity-search
/// results.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityView {
    pub id: String,
    /// Display name (JAK name, institution name, or the unnamed placeholder).
    pub name: String,
    pub institution_name: Option<String>,
    pub jak_code: Option<String>,
    pub district: Option<String>,
    pub health_block: Option<String>,
    pub constituency: Option<String>,
    pub email: Option<String>,
    pub ninid: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub maps_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_label: Option<String>,
}

impl FacilityView {
    pub fn from_facility<B: JakBackend>(f: &Facility<B>) -> Self {
        let coords = f.coordinates();
        FacilityView {
            id: f.id().to_string(),
            name: f.display_name().to_string(),
            institution_name: non_empty(f.institution_name()),
            jak_code: non_empty(f.jak_code()),
            district: non_empty(f.district()),
            health_block: non_empty(f.health_block()),
            constituency: non_empty(f.constituency()),
            email: f.email().map(str::to_string),
            ninid: f.ninid().map(str::to_string),
            latitude: coords.map(|(lat, _)| lat),
            longitude: coords.map(|(_, lon)| lon),
            maps_url: f.maps_url(),
            distance_km: None,
            distance_label: None,
        }
    }

    pub fn from_hit<B: JakBackend>(hit: &NearbyHit<'_, B>) -> Self {
        let mut view = Self::from_facility(hit.facility);
        view.distance_km = Some(hit.distance_km);
        view.distance_label = Some(geo::format_distance(hit.distance_km));
        view
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
