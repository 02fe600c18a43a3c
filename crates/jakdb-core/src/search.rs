// crates/jakdb-core/src/search.rs
use crate::error::{JakDbError, Result};
use crate::geo;
use crate::model::{DbStats, Facility, JakDb, NearbyHit};
use crate::text::{equals_folded, fold_key};
use crate::traits::{JakBackend, NameMatch};
use std::collections::{BTreeMap, HashSet};

impl<B: JakBackend> JakDb<B> {
    /// All facilities in the directory, in source order.
    pub fn facilities(&self) -> &[Facility<B>] {
        &self.facilities
    }

    /// Total number of facilities in the directory.
    ///
    /// Equivalent to `self.facilities().len()`; provided for convenience.
    pub fn facility_count(&self) -> usize {
        self.facilities.len()
    }

    /// Aggregate statistics for the directory.
    pub fn stats(&self) -> DbStats {
        DbStats {
            facilities: self.facilities.len(),
            geolocatable: self.facilities.iter().filter(|f| f.is_geolocatable()).count(),
            districts: self.districts().len(),
        }
    }

    /// Find a facility by its stable id (exact match, surrounding whitespace
    /// ignored).
    pub fn find_by_id(&self, id: &str) -> Option<&Facility<B>> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }
        self.facilities.iter().find(|f| f.id() == id)
    }

    /// Find a facility by its short JAK code, case-insensitive
    /// (e.g. "jak-klm-002").
    pub fn find_by_code(&self, code: &str) -> Option<&Facility<B>> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        self.facilities
            .iter()
            .find(|f| f.jak_code().eq_ignore_ascii_case(code))
    }

    /// Find all facilities whose display name matches `name` exactly
    /// (accent-insensitive, case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Vec<&Facility<B>> {
        if name.trim().is_empty() {
            return Vec::new();
        }
        self.facilities.iter().filter(|f| f.is_named(name)).collect()
    }

    /// Distinct districts present in the directory, sorted alphabetically.
    /// Spelling variants that fold to the same key count once, keeping the
    /// first spelling seen.
    pub fn districts(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for f in &self.facilities {
            let district = f.district();
            if district.is_empty() {
                continue;
            }
            if seen.insert(fold_key(district)) {
                out.push(district);
            }
        }
        out.sort_unstable();
        out
    }

    /// Facility counts per district, keyed by the district display name.
    /// Records without a district are grouped under `"Unknown"`.
    pub fn district_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for f in &self.facilities {
            let district = f.district();
            let key = if district.is_empty() { "Unknown" } else { district };
            *counts.entry(key.to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// District-mode search: exact district match combined with a free-text
    /// substring query.
    ///
    /// - An empty/blank `district` applies no district constraint; otherwise
    ///   the record's district must equal it (case- and accent-insensitive,
    ///   via [`equals_folded`]).
    /// - An empty/blank `text` applies no text constraint; otherwise the
    ///   trimmed, folded query must appear as a substring of the JAK name,
    ///   the institution name or the JAK code.
    /// - Both constraints AND together; both empty returns the full
    ///   directory (defined behavior, not an error).
    ///
    /// The result preserves source order (stable filter, no re-sort), and an
    /// empty result is a normal outcome the caller renders as "no matches",
    /// distinct from a not-yet-searched state.
    pub fn filter_entries(&self, district: &str, text: &str) -> Vec<&Facility<B>> {
        let district = district.trim();
        let text = fold_key(text.trim());

        self.facilities
            .iter()
            .filter(|f| {
                if !district.is_empty() && !equals_folded(f.district(), district) {
                    return false;
                }
                if text.is_empty() {
                    return true;
                }
                fold_key(f.jak_name()).contains(&text)
                    || fold_key(f.institution_name()).contains(&text)
                    || fold_key(f.jak_code()).contains(&text)
            })
            .collect()
    }

    /// Proximity-mode search: every geolocatable facility within `radius_km`
    /// of the reference point, sorted nearest first.
    ///
    /// - The reference point is validated up front; an out-of-range pair is
    ///   rejected with [`JakDbError::InvalidReference`] rather than ranked
    ///   into a meaningless ordering.
    /// - A negative radius returns an empty sequence (nothing is a negative
    ///   distance away). The radius boundary itself is inclusive: with
    ///   radius 0, a record at exactly the reference point is returned.
    /// - Records that are not geolocatable never appear, whatever the radius.
    /// - Ties in distance keep their source order (`sort_by` is stable), so
    ///   the ordering is deterministic without a secondary sort key.
    ///
    /// No result cap is applied here; truncation belongs to the display
    /// layer.
    pub fn find_nearby(&self, lat: f64, lon: f64, radius_km: f64) -> Result<Vec<NearbyHit<'_, B>>> {
        if !geo::is_valid_point(lat, lon) {
            return Err(JakDbError::InvalidReference { lat, lon });
        }

        let mut out = Vec::new();
        if radius_km < 0.0 {
            return Ok(out);
        }

        for facility in &self.facilities {
            let Some((flat, flon)) = facility.coordinates() else {
                continue;
            };
            let distance_km = geo::haversine_distance(lat, lon, flat, flon);
            if distance_km <= radius_km {
                out.push(NearbyHit { distance_km, facility });
            }
        }

        out.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::testutil::facility;
    use crate::model::{DefaultJakDb, JakDb};
    use crate::JakDbError;

    /// Alpha/Beta in Kollam ~15.6 km apart, Gamma in Ernakulam ~156 km out,
    /// Delta without coordinates, Epsilon with the zero/zero marker.
    fn sample_db() -> DefaultJakDb {
        JakDb {
            facilities: vec![
                facility("1", "Alpha", "Kollam", Some(10.0), Some(76.0)),
                facility("2", "Beta", "Kollam", Some(10.1), Some(76.1)),
                facility("3", "Gamma", "Ernakulam", Some(11.0), Some(77.0)),
                facility("4", "Delta", "Kollam", None, None),
                facility("5", "Epsilon", "Ernakulam", Some(0.0), Some(0.0)),
            ],
        }
    }

    #[test]
    fn district_filter_is_case_insensitive_and_order_preserving() {
        let db = sample_db();
        let hits = db.filter_entries("kollam", "");
        let names: Vec<_> = hits.iter().map(|f| f.display_name()).collect();
        assert_eq!(names, ["Alpha", "Beta", "Delta"]);
        for f in &hits {
            assert!(f.district().eq_ignore_ascii_case("kollam"));
        }
    }

    #[test]
    fn text_filter_matches_substring_in_any_name_field() {
        let db = sample_db();
        let hits = db.filter_entries("", "bet");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].display_name(), "Beta");

        // Institution name and JAK code participate too
        let mut db = sample_db();
        db.facilities[3].institution_name = Some("CHC Betelgeuse".to_string());
        db.facilities[4].jak_code = Some("JAK-BET-005".to_string());
        let hits = db.filter_entries("", "BET");
        let names: Vec<_> = hits.iter().map(|f| f.display_name()).collect();
        assert_eq!(names, ["Beta", "Delta", "Epsilon"]);
    }

    #[test]
    fn both_filters_combine_conjunctively() {
        let db = sample_db();
        let hits = db.filter_entries("Ernakulam", "eps");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].display_name(), "Epsilon");

        assert!(db.filter_entries("Kollam", "eps").is_empty());
    }

    #[test]
    fn empty_criteria_return_the_full_directory() {
        let db = sample_db();
        assert_eq!(db.filter_entries("", "").len(), db.facility_count());
        assert_eq!(db.filter_entries("  ", "  ").len(), db.facility_count());
    }

    #[test]
    fn filtering_is_idempotent() {
        let db = sample_db();
        let once = db.filter_entries("Kollam", "a");

        // Filtering the filtered subset with the same criteria yields the same set
        let subset = JakDb {
            facilities: once.iter().map(|f| (*f).clone()).collect(),
        };
        let twice = subset.filter_entries("Kollam", "a");
        assert_eq!(once.len(), twice.len());
        assert!(once.iter().zip(&twice).all(|(a, b)| a.id() == b.id()));
    }

    #[test]
    fn nearby_sorts_ascending_and_respects_radius() {
        let db = sample_db();
        let hits = db.find_nearby(10.0, 76.0, 20.0).unwrap();
        let names: Vec<_> = hits.iter().map(|h| h.facility.display_name()).collect();
        assert_eq!(names, ["Alpha", "Beta"]);

        assert!(hits[0].distance_km.abs() < 1e-9);
        assert!(hits[1].distance_km > 15.0 && hits[1].distance_km < 16.0);
        for pair in hits.windows(2) {
            assert!(pair[0].distance_km <= pair[1].distance_km);
        }
    }

    #[test]
    fn nearby_excludes_non_geolocatable_records_at_any_radius() {
        let db = sample_db();
        let hits = db.find_nearby(10.0, 76.0, 1.0e6).unwrap();
        let names: Vec<_> = hits.iter().map(|h| h.facility.display_name()).collect();
        // Delta has no coordinates, Epsilon carries the zero/zero marker
        assert_eq!(names, ["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn nearby_radius_boundary_is_inclusive() {
        let db = sample_db();
        // Radius zero still returns the record sitting exactly at the reference
        let hits = db.find_nearby(10.0, 76.0, 0.0).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].facility.display_name(), "Alpha");
        assert_eq!(hits[0].distance_km, 0.0);
    }

    #[test]
    fn nearby_negative_radius_returns_nothing() {
        let db = sample_db();
        assert!(db.find_nearby(10.0, 76.0, -1.0).unwrap().is_empty());
    }

    #[test]
    fn nearby_rejects_out_of_range_reference() {
        let db = sample_db();
        let err = db.find_nearby(200.0, 76.0, 20.0).unwrap_err();
        assert!(matches!(err, JakDbError::InvalidReference { .. }));
    }

    #[test]
    fn nearby_ties_keep_source_order() {
        let db = JakDb {
            facilities: vec![
                facility("first", "North Twin", "", Some(10.1), Some(76.0)),
                facility("second", "South Twin", "", Some(9.9), Some(76.0)),
            ],
        };
        // Both twins are equidistant from the midpoint
        let hits = db.find_nearby(10.0, 76.0, 50.0).unwrap();
        assert!((hits[0].distance_km - hits[1].distance_km).abs() < 1e-9);
        assert_eq!(hits[0].facility.id(), "first");
        assert_eq!(hits[1].facility.id(), "second");
    }

    #[test]
    fn lookup_by_id_and_code() {
        let mut db = sample_db();
        db.facilities[1].jak_code = Some("JAK-KLM-002".to_string());

        assert_eq!(db.find_by_id("2").unwrap().display_name(), "Beta");
        assert_eq!(db.find_by_id(" 2 ").unwrap().display_name(), "Beta");
        assert!(db.find_by_id("99").is_none());
        assert!(db.find_by_id("").is_none());

        assert_eq!(
            db.find_by_code("jak-klm-002").unwrap().display_name(),
            "Beta"
        );
        assert!(db.find_by_code("JAK-XXX-000").is_none());

        // Exact display-name lookup is folded, not substring
        assert_eq!(db.find_by_name("beta").len(), 1);
        assert!(db.find_by_name("bet").is_empty());
        assert!(db.find_by_name("").is_empty());
    }

    #[test]
    fn district_listing_and_counts() {
        let db = sample_db();
        assert_eq!(db.districts(), ["Ernakulam", "Kollam"]);

        let counts = db.district_counts();
        assert_eq!(counts.get("Kollam"), Some(&3));
        assert_eq!(counts.get("Ernakulam"), Some(&2));

        let stats = db.stats();
        assert_eq!(stats.facilities, 5);
        assert_eq!(stats.geolocatable, 3);
        assert_eq!(stats.districts, 2);
    }
}
