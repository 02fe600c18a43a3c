// crates/jakdb-core/src/geo.rs

//! # Geographic primitives
//!
//! Great-circle distance, coordinate range checks and the distance label
//! used by the display layer. Everything here is a pure function over plain
//! `f64` values.

/// Mean Earth radius used by the haversine computation.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distances below this cutoff are rendered with one decimal place;
/// at or above it the fraction is dropped.
pub const DISTANCE_PRECISION_CUTOFF_KM: f64 = 10.0;

/// Great-circle distance between two points in decimal degrees, in km.
///
/// Standard haversine formula. Inputs are not range-validated here; callers
/// filter records through the geolocatable check first, and NaN inputs
/// propagate NaN.
///
/// # Examples
///
/// ```rust
/// use jakdb_core::haversine_distance;
///
/// // Reflexive: distance to self is zero
/// assert!(haversine_distance(8.5241, 76.9366, 8.5241, 76.9366).abs() < 1e-9);
///
/// // Thiruvananthapuram -> Kollam is a bit over 50 km
/// let d = haversine_distance(8.5241, 76.9366, 8.8932, 76.6141);
/// assert!(d > 50.0 && d < 60.0);
/// ```
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// True if the pair is a finite coordinate within valid geographic ranges
/// (latitude in [-90, 90], longitude in [-180, 180]).
///
/// Note this does not apply the zero/zero rule: a (0, 0) pair is a valid
/// *point* but marks *missing data* at the record level; that check lives in
/// [`crate::model::Facility::coordinates`].
pub fn is_valid_point(lat: f64, lon: f64) -> bool {
    lat.is_finite() && lon.is_finite() && (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}

/// Render a distance for display: `"3.2km"` under the precision cutoff,
/// `"47km"` at or above it.
pub fn format_distance(km: f64) -> String {
    format_distance_with_cutoff(km, DISTANCE_PRECISION_CUTOFF_KM)
}

/// [`format_distance`] with a caller-chosen precision cutoff.
pub fn format_distance_with_cutoff(km: f64, cutoff_km: f64) -> String {
    if km < cutoff_km {
        format!("{km:.1}km")
    } else {
        format!("{km:.0}km")
    }
}
