//! Projections from catalog state to what the UI displays, and the sink
//! the UI implements to receive them.

use super::search::SearchHit;
use crate::domain::a001_catalog::{CatalogIndex, CatalogItem, FeaturedItem};
use crate::shared::collation::locale_compare;
use crate::shared::format::PriceFormatter;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub name: String,
    pub count: usize,
}

/// Search hits of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultGroup {
    pub category: String,
    pub items: Vec<SearchHit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedCard {
    pub name: String,
    #[serde(rename = "categoryName")]
    pub category_name: String,
    #[serde(rename = "displayPrice")]
    pub display_price: String,
}

/// Presentation surface. Implementations only display what they are given;
/// user intents go back through the coordinator.
pub trait RenderSink {
    fn set_loading(&mut self, loading: bool);

    /// Replaces the listing with `message`.
    fn set_error(&mut self, message: &str);

    /// Fills the home listing with categories and their item counts.
    fn render_home(&mut self, categories: Vec<CategorySummary>);

    /// Switches to the home page without changing its listing.
    fn show_home(&mut self);

    /// Switches to the detail page of `category`.
    fn render_detail(&mut self, category: &str, items: Vec<CatalogItem>);

    /// Fills the home listing with grouped search results.
    fn render_search_results(&mut self, groups: Vec<ResultGroup>, query: &str);

    /// An empty list hides the featured section.
    fn render_featured(&mut self, cards: Vec<FeaturedCard>);

    fn set_last_update(&mut self, timestamp: DateTime<Utc>);
}

/// Categories sorted by name, with item counts.
pub fn home_listing(index: &CatalogIndex) -> Vec<CategorySummary> {
    index
        .categories()
        .into_iter()
        .map(|name| CategorySummary {
            name: name.to_string(),
            count: index.items_in(name).len(),
        })
        .collect()
}

/// Items of one category sorted by name.
pub fn detail_listing(index: &CatalogIndex, category: &str) -> Vec<CatalogItem> {
    let mut items = index.items_in(category).to_vec();
    items.sort_by(|a, b| locale_compare(&a.name, &b.name));
    items
}

/// Groups hits by category in the order categories first appear.
pub fn group_results(hits: Vec<SearchHit>) -> Vec<ResultGroup> {
    let mut groups: IndexMap<String, Vec<SearchHit>> = IndexMap::new();
    for hit in hits {
        groups.entry(hit.category_name.clone()).or_default().push(hit);
    }
    groups
        .into_iter()
        .map(|(category, items)| ResultGroup { category, items })
        .collect()
}

pub fn featured_listing(featured: &[FeaturedItem], formatter: &PriceFormatter) -> Vec<FeaturedCard> {
    featured
        .iter()
        .map(|item| FeaturedCard {
            name: item.name.clone(),
            category_name: item.category_name.clone(),
            display_price: formatter.format(&item.raw_price),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_catalog::group_by_category;
    use serde_json::json;

    fn hit(name: &str, category: &str) -> SearchHit {
        SearchHit {
            name: name.to_string(),
            category_name: category.to_string(),
            display_price: "$1".to_string(),
        }
    }

    #[test]
    fn test_home_listing_sorted_with_counts() {
        let index = group_by_category(vec![
            CatalogItem::new("a", "Zuccardi", "$1"),
            CatalogItem::new("b", "Catena", "$1"),
            CatalogItem::new("c", "Zuccardi", "$1"),
        ]);
        assert_eq!(
            home_listing(&index),
            vec![
                CategorySummary { name: "Catena".to_string(), count: 1 },
                CategorySummary { name: "Zuccardi".to_string(), count: 2 },
            ]
        );
    }

    #[test]
    fn test_home_listing_empty_catalog() {
        assert!(home_listing(&CatalogIndex::new()).is_empty());
    }

    #[test]
    fn test_detail_listing_sorted_by_name() {
        let index = group_by_category(vec![
            CatalogItem::new("Syrah", "Catena", "$1"),
            CatalogItem::new("ángel", "Catena", "$1"),
            CatalogItem::new("Malbec", "Catena", "$1"),
            CatalogItem::new("bonarda", "Catena", "$1"),
        ]);
        let names: Vec<String> = detail_listing(&index, "Catena")
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["ángel", "bonarda", "Malbec", "Syrah"]);
        assert!(detail_listing(&index, "Nieto").is_empty());
    }

    #[test]
    fn test_group_results_first_seen_order() {
        let groups = group_results(vec![hit("1", "B"), hit("2", "A"), hit("3", "B")]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "B");
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[1].category, "A");
    }

    #[test]
    fn test_featured_listing_formats_price() {
        let featured = vec![FeaturedItem {
            name: "Malbec".to_string(),
            category_name: "Catena".to_string(),
            raw_price: json!(12500),
        }];
        let cards = featured_listing(&featured, &PriceFormatter::default());
        assert_eq!(cards[0].display_price, "$12.500");
    }
}
