//! String comparison for sorting display names.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Case- and accent-folded sort key: NFD decomposition with combining
/// marks removed, then Unicode lower-casing. "Álamo", "alamo" and
/// "A\u{301}lamo" share one key.
pub fn collation_key(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Locale-aware comparison: folded key first, raw text breaks ties so the
/// order is total and deterministic.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collation_key() {
        assert_eq!(collation_key("Torrontés"), "torrontes");
        assert_eq!(collation_key("ÑANDÚ"), "nandu");
        assert_eq!(collation_key("Ångström"), "angstrom");
    }

    #[test]
    fn test_locale_compare_ignores_case_and_accents() {
        let mut names = vec!["zeta", "Álamo", "bonarda", "Alamo", "Malbec"];
        names.sort_by(|a, b| locale_compare(a, b));
        assert_eq!(names, vec!["Alamo", "Álamo", "bonarda", "Malbec", "zeta"]);
    }

    #[test]
    fn test_decomposed_accents_sort_like_precomposed() {
        let mut precomposed = vec!["Ezequiel", "Éclair"];
        precomposed.sort_by(|a, b| locale_compare(a, b));
        assert_eq!(precomposed, vec!["Éclair", "Ezequiel"]);

        let mut decomposed = vec!["Ezequiel", "E\u{301}clair"];
        decomposed.sort_by(|a, b| locale_compare(a, b));
        assert_eq!(decomposed, vec!["E\u{301}clair", "Ezequiel"]);
    }

    #[test]
    fn test_accents_outside_spanish_fold_too() {
        let mut names = vec!["Bodega", "Ångström", "Čoka"];
        names.sort_by(|a, b| locale_compare(a, b));
        assert_eq!(names, vec!["Ångström", "Bodega", "Čoka"]);
    }
}
