// crates/jakdb-core/src/model.rs
use crate::geo;
use crate::raw::FacilitiesRaw;
use crate::traits::{JakBackend, NameMatch};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default backend: plain `String` + `f64`.
///
/// This backend is used by the convenient aliases
/// [`StandardBackend`] and [`DefaultJakDb`]. It provides the best
/// ergonomics and is suitable for most applications.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultBackend;

impl JakBackend for DefaultBackend {
    type Str = String;
    type Float = f64;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn float_from(f: f64) -> Self::Float {
        f
    }

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.clone()
    }

    fn float_to_f64(v: Self::Float) -> f64 {
        v
    }
}

/// The fourteen districts of Kerala, in the conventional north-to-south
/// listing order used by the dropdown of the locator page.
pub const KERALA_DISTRICTS: [&str; 14] = [
    "Thiruvananthapuram",
    "Kollam",
    "Pathanamthitta",
    "Alappuzha",
    "Kottayam",
    "Idukki",
    "Ernakulam",
    "Thrissur",
    "Palakkad",
    "Malappuram",
    "Kozhikode",
    "Wayanad",
    "Kannur",
    "Kasaragod",
];

/// Placeholder shown when a record carries neither a JAK name nor an
/// institution name.
pub const UNNAMED_FACILITY: &str = "Unnamed Facility";

/// One Janakeeya Arogya Kendram entry in the normalized directory.
///
/// Optional text fields that were empty or whitespace-only in the source are
/// stored as `None`; access string data via the accessor methods, which
/// return `""` for absent values.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Facility<B: JakBackend> {
    /// Unique within the directory, stable across searches.
    pub id: B::Str,
    pub jak_name: Option<B::Str>,
    /// May duplicate or extend `jak_name` (the hosting institution).
    pub institution_name: Option<B::Str>,
    pub jak_code: Option<B::Str>,
    pub district: Option<B::Str>,
    pub health_block: Option<B::Str>,
    pub constituency: Option<B::Str>,
    pub latitude: Option<B::Float>,
    pub longitude: Option<B::Float>,
    pub email: Option<B::Str>,
    pub ninid: Option<B::Str>,
}

/// Top-level directory structure.
///
/// Holds the full facility list and provides the search operations.
/// Constructed by the loader module from the bundled JSON dataset and
/// optionally filtered by district at load time; immutable afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JakDb<B: JakBackend> {
    pub facilities: Vec<Facility<B>>,
}

/// Convenient alias for the default backend.
pub type DefaultJakDb = JakDb<DefaultBackend>;
/// Convenient alias used in examples.
pub type StandardBackend = DefaultBackend;

/// Simple aggregate statistics for the directory.
///
/// Returned by [`JakDb::stats`]; the counts reflect the materialized
/// in-memory directory after any district filtering applied at load time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DbStats {
    pub facilities: usize,
    pub geolocatable: usize,
    pub districts: usize,
}

/// Result item of [`JakDb::find_nearby`]: a facility together with its
/// computed distance from the reference point.
///
/// Created fresh per search invocation and borrows from the directory;
/// nothing is cached across searches.
#[derive(Debug, Clone, Copy)]
pub struct NearbyHit<'a, B: JakBackend> {
    pub distance_km: f64,
    pub facility: &'a Facility<B>,
}

impl<'a, B: JakBackend> NearbyHit<'a, B> {
    /// Distance from the reference point, rendered for display
    /// (see [`geo::format_distance`]).
    pub fn formatted_distance(&self) -> String {
        geo::format_distance(self.distance_km)
    }
}

fn opt_str<B: JakBackend>(s: Option<&str>) -> Option<B::Str> {
    s.map(str::trim).filter(|s| !s.is_empty()).map(B::str_from)
}

/// Convert raw JSON data into a [`JakDb`] using the given backend.
///
/// Tolerant by contract: blank optional fields become absent, records with a
/// duplicate id keep their first occurrence, and a record with no id at all
/// gets its position in the source list as a fallback id. Source order is
/// preserved; the filter engine relies on it.
pub fn build_jakdb<B: JakBackend>(raw: FacilitiesRaw) -> JakDb<B> {
    let mut facilities = Vec::with_capacity(raw.len());
    let mut seen_ids: HashSet<String> = HashSet::new();

    for (position, r) in raw.into_iter().enumerate() {
        let id = r
            .id
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| position.to_string());
        if !seen_ids.insert(id.clone()) {
            continue;
        }

        facilities.push(Facility::<B> {
            id: B::str_from(&id),
            jak_name: opt_str::<B>(r.jak_name.as_deref()),
            institution_name: opt_str::<B>(r.institution_name.as_deref()),
            jak_code: opt_str::<B>(r.jak_code.as_deref()),
            district: opt_str::<B>(r.district.as_deref()),
            health_block: opt_str::<B>(r.health_block.as_deref()),
            constituency: opt_str::<B>(r.constituency.as_deref()),
            latitude: r.latitude.map(B::float_from),
            longitude: r.longitude.map(B::float_from),
            email: opt_str::<B>(r.email.as_deref()),
            ninid: opt_str::<B>(r.ninid.as_deref()),
        });
    }

    JakDb { facilities }
}

impl<B: JakBackend> Facility<B> {
    /// Stable unique identifier.
    pub fn id(&self) -> &str {
        self.id.as_ref()
    }

    /// JAK display name, or an empty string when absent.
    pub fn jak_name(&self) -> &str {
        self.jak_name.as_ref().map(|s| s.as_ref()).unwrap_or("")
    }

    /// Name of the hosting institution, or an empty string when absent.
    pub fn institution_name(&self) -> &str {
        self.institution_name
            .as_ref()
            .map(|s| s.as_ref())
            .unwrap_or("")
    }

    /// Short facility code (e.g. "JAK-KLM-002"), or an empty string.
    pub fn jak_code(&self) -> &str {
        self.jak_code.as_ref().map(|s| s.as_ref()).unwrap_or("")
    }

    /// District this facility belongs to, or an empty string.
    pub fn district(&self) -> &str {
        self.district.as_ref().map(|s| s.as_ref()).unwrap_or("")
    }

    /// Health block within the district, or an empty string.
    pub fn health_block(&self) -> &str {
        self.health_block.as_ref().map(|s| s.as_ref()).unwrap_or("")
    }

    /// Assembly constituency, or an empty string.
    pub fn constituency(&self) -> &str {
        self.constituency.as_ref().map(|s| s.as_ref()).unwrap_or("")
    }

    /// Contact email, if provided by the dataset.
    pub fn email(&self) -> Option<&str> {
        self.email.as_ref().map(|s| s.as_ref())
    }

    /// National Identification Number of the institution, if provided.
    pub fn ninid(&self) -> Option<&str> {
        self.ninid.as_ref().map(|s| s.as_ref())
    }

    /// The validated coordinate pair, if this record is geolocatable.
    ///
    /// A record is geolocatable iff both latitude and longitude are present,
    /// within valid geographic ranges, and not the (0, 0) pair. Zero/zero
    /// marks missing data in the source export, not a point off the coast of
    /// West Africa.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lat = self.latitude.map(B::float_to_f64)?;
        let lon = self.longitude.map(B::float_to_f64)?;
        if !geo::is_valid_point(lat, lon) {
            return None;
        }
        if lat == 0.0 && lon == 0.0 {
            return None;
        }
        Some((lat, lon))
    }

    /// True if this record can participate in proximity searches.
    pub fn is_geolocatable(&self) -> bool {
        self.coordinates().is_some()
    }

    /// Human-readable name: the JAK name, falling back to the institution
    /// name, falling back to [`UNNAMED_FACILITY`].
    pub fn display_name(&self) -> &str {
        let name = self.jak_name();
        if !name.is_empty() {
            return name;
        }
        let name = self.institution_name();
        if !name.is_empty() {
            return name;
        }
        UNNAMED_FACILITY
    }

    /// A map-provider deep link for the facility, if it is geolocatable.
    ///
    /// `None` signals the UI should omit its "get directions" action. The
    /// link's reachability is not validated here.
    pub fn maps_url(&self) -> Option<String> {
        self.coordinates()
            .map(|(lat, lon)| format!("https://www.google.com/maps/search/?api=1&query={lat},{lon}"))
    }
}

impl<B: JakBackend> NameMatch for Facility<B> {
    #[inline]
    fn name_str(&self) -> &str {
        self.display_name()
    }
}


#[cfg(test)]
mod tests {
    use super::testutil::facility;
    use super::*;
    use crate::raw::FacilityRaw;

    #[test]
    fn geolocatable_requires_both_coordinates_in_range() {
        assert!(facility("1", "A", "Kollam", Some(8.9), Some(76.6)).is_geolocatable());
        assert!(!facility("2", "B", "Kollam", None, Some(76.6)).is_geolocatable());
        assert!(!facility("3", "C", "Kollam", Some(8.9), None).is_geolocatable());
        assert!(!facility("4", "D", "Kollam", Some(200.0), Some(76.6)).is_geolocatable());
        assert!(!facility("5", "E", "Kollam", Some(8.9), Some(181.0)).is_geolocatable());
    }

    #[test]
    fn zero_zero_pair_is_missing_not_equatorial() {
        assert!(!facility("1", "A", "Kollam", Some(0.0), Some(0.0)).is_geolocatable());
        // A single zero component with a real partner is a legitimate point
        assert!(facility("2", "B", "", Some(0.0), Some(76.6)).is_geolocatable());
    }

    #[test]
    fn display_name_falls_back_through_names() {
        let named = facility("1", "JAK Eravipuram", "Kollam", None, None);
        assert_eq!(named.display_name(), "JAK Eravipuram");

        let mut institution_only = facility("2", "", "Kollam", None, None);
        institution_only.institution_name = Some("UPHC Eravipuram".to_string());
        assert_eq!(institution_only.display_name(), "UPHC Eravipuram");

        let anonymous = facility("3", "", "Kollam", None, None);
        assert_eq!(anonymous.display_name(), UNNAMED_FACILITY);
    }

    #[test]
    fn maps_url_only_for_geolocatable_records() {
        let located = facility("1", "A", "Kollam", Some(8.8932), Some(76.6141));
        let url = located.maps_url().unwrap();
        assert!(url.contains("8.8932,76.6141"));

        assert_eq!(facility("2", "B", "Kollam", None, None).maps_url(), None);
        assert_eq!(
            facility("3", "C", "Kollam", Some(0.0), Some(0.0)).maps_url(),
            None
        );
    }

    #[test]
    fn build_keeps_first_record_for_duplicate_ids() {
        let raw = vec![
            FacilityRaw {
                id: Some("7".to_string()),
                jak_name: Some("First".to_string()),
                ..Default::default()
            },
            FacilityRaw {
                id: Some("7".to_string()),
                jak_name: Some("Second".to_string()),
                ..Default::default()
            },
        ];
        let db = build_jakdb::<DefaultBackend>(raw);
        assert_eq!(db.facilities.len(), 1);
        assert_eq!(db.facilities[0].jak_name(), "First");
    }

    #[test]
    fn build_blanks_become_absent() {
        let raw = vec![FacilityRaw {
            id: Some("1".to_string()),
            jak_name: Some("   ".to_string()),
            district: Some("".to_string()),
            ..Default::default()
        }];
        let db = build_jakdb::<DefaultBackend>(raw);
        assert_eq!(db.facilities[0].jak_name, None);
        assert_eq!(db.facilities[0].district, None);
    }

    #[test]
    fn build_synthesizes_id_from_position() {
        let raw = vec![
            FacilityRaw {
                jak_name: Some("No id".to_string()),
                ..Default::default()
            },
            FacilityRaw {
                jak_name: Some("Also no id".to_string()),
                ..Default::default()
            },
        ];
        let db = build_jakdb::<DefaultBackend>(raw);
        assert_eq!(db.facilities[0].id(), "0");
        assert_eq!(db.facilities[1].id(), "1");
    }

    #[test]
    fn facility_name_matching_is_folded() {
        let f = facility("1", "JAK Chavara", "Kollam", None, None);
        assert!(f.is_named("jak chavara"));
        assert!(f.name_contains("CHAV"));
    }
}
