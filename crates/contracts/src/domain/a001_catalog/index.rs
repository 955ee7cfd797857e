use super::aggregate::CatalogItem;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Items grouped by category name.
///
/// Buckets keep the order in which categories were first seen, and items keep
/// their input order inside a bucket. Buckets are never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogIndex {
    buckets: IndexMap<String, Vec<CatalogItem>>,
}

impl CatalogIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Category names sorted lexicographically (home view order).
    pub fn categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.buckets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Items of a category in input order; empty when the category is unknown.
    pub fn items_in(&self, category: &str) -> &[CatalogItem] {
        self.buckets
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.buckets.contains_key(category)
    }

    /// Iterates buckets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CatalogItem])> {
        self.buckets
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of items across all categories.
    pub fn item_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

impl FromIterator<CatalogItem> for CatalogIndex {
    fn from_iter<I: IntoIterator<Item = CatalogItem>>(iter: I) -> Self {
        let mut buckets: IndexMap<String, Vec<CatalogItem>> = IndexMap::new();
        for item in iter {
            buckets
                .entry(item.category_name.clone())
                .or_default()
                .push(item);
        }
        Self { buckets }
    }
}

/// Groups items by their literal category name, preserving input order.
pub fn group_by_category(items: Vec<CatalogItem>) -> CatalogIndex {
    items.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, category: &str) -> CatalogItem {
        CatalogItem::new(name, category, "Consultar")
    }

    #[test]
    fn test_grouping_is_order_preserving() {
        let index = group_by_category(vec![
            item("A", "cat1"),
            item("B", "cat2"),
            item("C", "cat1"),
        ]);

        let names: Vec<&str> = index.items_in("cat1").iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(index.items_in("cat2").len(), 1);
        assert_eq!(index.item_count(), 3);
    }

    #[test]
    fn test_categories_sorted_but_iteration_in_insertion_order() {
        let index = group_by_category(vec![
            item("x", "Zuccardi"),
            item("y", "Alamos"),
            item("z", "Norton"),
        ]);

        assert_eq!(index.categories(), vec!["Alamos", "Norton", "Zuccardi"]);
        let iter_order: Vec<&str> = index.iter().map(|(name, _)| name).collect();
        assert_eq!(iter_order, vec!["Zuccardi", "Alamos", "Norton"]);
    }

    #[test]
    fn test_keys_are_not_normalized() {
        let index = group_by_category(vec![item("a", "Catena"), item("b", "catena")]);
        assert_eq!(index.len(), 2);
        assert!(index.contains("Catena"));
        assert!(index.contains("catena"));
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let index = CatalogIndex::new();
        assert!(index.items_in("Nada").is_empty());
        assert!(index.is_empty());
        assert!(index.categories().is_empty());
    }
}
