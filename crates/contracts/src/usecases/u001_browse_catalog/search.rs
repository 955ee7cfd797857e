use crate::domain::a001_catalog::CatalogIndex;
use serde::{Deserialize, Serialize};

/// Types that can be matched against a search filter.
pub trait Searchable {
    /// `filter` is expected lower-cased and trimmed already.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// One matching item, flattened with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub name: String,

    #[serde(rename = "categoryName")]
    pub category_name: String,

    #[serde(rename = "displayPrice")]
    pub display_price: String,
}

impl Searchable for SearchHit {
    // The formatted price is matched as text, so "$5.0" finds "$5.000".
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(filter)
            || self.category_name.to_lowercase().contains(filter)
            || self.display_price.to_lowercase().contains(filter)
    }
}

/// What the search box hands to [`search`].
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Substring search over name, category and display price.
///
/// Results follow the index's insertion order (category, then item); there
/// is no ranking and no limit. An empty query is the caller's concern.
pub fn search(index: &CatalogIndex, query: &str) -> Vec<SearchHit> {
    let hits: Vec<SearchHit> = index
        .iter()
        .flat_map(|(category, items)| {
            items.iter().map(move |item| SearchHit {
                name: item.name.clone(),
                category_name: category.to_string(),
                display_price: item.display_price.clone(),
            })
        })
        .filter(|hit| hit.matches_filter(query))
        .collect();

    log::debug!("🎯 '{}': {} resultados", query, hits.len());
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_catalog::{group_by_category, CatalogItem};

    fn catalog() -> CatalogIndex {
        group_by_category(vec![
            CatalogItem::new("Malbec Reserva", "CatA", "$5.000"),
            CatalogItem::new("Torrontés", "CatB", "Consultar"),
        ])
    }

    fn hit(name: &str, category: &str, price: &str) -> SearchHit {
        SearchHit {
            name: name.to_string(),
            category_name: category.to_string(),
            display_price: price.to_string(),
        }
    }

    #[test]
    fn test_search_by_name() {
        assert_eq!(
            search(&catalog(), "malbec"),
            vec![hit("Malbec Reserva", "CatA", "$5.000")]
        );
    }

    #[test]
    fn test_search_by_price_sentinel() {
        assert_eq!(
            search(&catalog(), "consultar"),
            vec![hit("Torrontés", "CatB", "Consultar")]
        );
    }

    #[test]
    fn test_search_no_match() {
        assert!(search(&catalog(), "zzz").is_empty());
    }

    #[test]
    fn test_search_by_category_returns_all_items() {
        let index = group_by_category(vec![
            CatalogItem::new("Uno", "Bodega Norte", "$1"),
            CatalogItem::new("Dos", "Sur", "$2"),
            CatalogItem::new("Tres", "Bodega Norte", "$3"),
        ]);
        let names: Vec<String> = search(&index, "norte").into_iter().map(|h| h.name).collect();
        assert_eq!(names, vec!["Uno", "Tres"]);
    }

    #[test]
    fn test_search_matches_formatted_price_text() {
        assert_eq!(search(&catalog(), "$5.0").len(), 1);
        assert!(search(&catalog(), "5000").is_empty());
    }

    #[test]
    fn test_results_follow_insertion_order() {
        let index = group_by_category(vec![
            CatalogItem::new("Malbec Z", "Zeta", "$1"),
            CatalogItem::new("Malbec A", "Alfa", "$1"),
            CatalogItem::new("Malbec Y", "Zeta", "$1"),
        ]);
        let names: Vec<String> = search(&index, "malbec").into_iter().map(|h| h.name).collect();
        assert_eq!(names, vec!["Malbec Z", "Malbec Y", "Malbec A"]);
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  MALBEC "), "malbec");
        assert_eq!(normalize_query("   "), "");
    }
}
