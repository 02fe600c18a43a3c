// crates/jakdb-core/src/text.rs

/// Convert a string into a folded key suitable for matching and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Genève` -> `Geneve`)
/// 2\) Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII, so transliterated Malayalam place
/// names match regardless of the diacritics a data-entry pass left behind.
///
/// # Examples
///
/// ```rust
/// use jakdb_core::fold_key;
///
/// assert_eq!(fold_key("Thiruvananthapuram"), "thiruvananthapuram");
/// assert_eq!(fold_key("Genève"), "geneve");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding and normalization.
///
/// Case-insensitive and accent-insensitive; this is the comparison used for
/// exact district matching.
///
/// # Examples
///
/// ```rust
/// use jakdb_core::equals_folded;
///
/// assert!(equals_folded("Kollam", "kollam"));
/// assert!(equals_folded("KOZHIKODE", "Kozhikode"));
/// assert!(!equals_folded("Kollam", "Kannur"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folding_is_case_insensitive() {
        assert_eq!(fold_key("ERNAKULAM"), fold_key("ernakulam"));
    }

    #[test]
    fn folding_strips_diacritics() {
        assert_eq!(fold_key("Genève"), "geneve");
        assert!(equals_folded("Genève", "geneve"));
    }

    #[test]
    fn folded_equality_rejects_different_names() {
        assert!(!equals_folded("Kollam", "Kollam North"));
    }
}
