use crate::domain::a001_catalog::{CatalogIndex, FeaturedItem, LoadedCatalog};
use chrono::{DateTime, Utc};

/// Process-wide catalog state, owned by the coordinator.
///
/// Only [`ApplicationState::replace`] mutates it; everything else reads.
#[derive(Debug, Clone, Default)]
pub struct ApplicationState {
    catalog_index: CatalogIndex,
    featured: Vec<FeaturedItem>,
    last_update: Option<DateTime<Utc>>,
    is_data_ready: bool,
}

impl ApplicationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog_index(&self) -> &CatalogIndex {
        &self.catalog_index
    }

    pub fn featured(&self) -> &[FeaturedItem] {
        &self.featured
    }

    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update
    }

    pub fn is_data_ready(&self) -> bool {
        self.is_data_ready
    }

    /// True when data is loaded and `category` is a key of the index.
    pub fn category_exists(&self, category: &str) -> bool {
        self.is_data_ready && self.catalog_index.contains(category)
    }

    /// Swaps in a freshly loaded catalog in one step; the ready flag goes up last.
    pub fn replace(&mut self, loaded: LoadedCatalog) {
        let LoadedCatalog {
            index,
            featured,
            last_update,
        } = loaded;

        self.catalog_index = index;
        self.featured = featured;
        self.last_update = Some(last_update);
        self.is_data_ready = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_catalog::{group_by_category, CatalogItem};
    use chrono::TimeZone;

    #[test]
    fn test_replace_sets_ready_and_replaces_everything() {
        let mut state = ApplicationState::new();
        assert!(!state.is_data_ready());
        assert!(!state.category_exists("Catena"));

        let ts = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        state.replace(LoadedCatalog {
            index: group_by_category(vec![CatalogItem::new("Malbec", "Catena", "$1")]),
            featured: Vec::new(),
            last_update: ts,
        });
        assert!(state.is_data_ready());
        assert!(state.category_exists("Catena"));
        assert_eq!(state.last_update(), Some(ts));

        state.replace(LoadedCatalog {
            index: group_by_category(vec![CatalogItem::new("Bonarda", "Nieto", "$2")]),
            featured: Vec::new(),
            last_update: ts,
        });
        assert!(!state.category_exists("Catena"));
        assert!(state.category_exists("Nieto"));
    }
}
