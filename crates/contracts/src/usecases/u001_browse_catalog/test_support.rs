//! In-memory doubles for the browser boundary.

use super::renderer::{CategorySummary, FeaturedCard, RenderSink, ResultGroup};
use super::router::AddressBar;
use crate::domain::a001_catalog::CatalogItem;
use chrono::{DateTime, Utc};

#[derive(Debug, Default)]
pub struct MemoryAddressBar {
    pub fragment: String,
    pub query: String,
    /// Fragments pushed as new history entries, oldest first.
    pub history: Vec<String>,
    pub replaced: usize,
}

impl MemoryAddressBar {
    pub fn with_fragment(fragment: &str) -> Self {
        Self {
            fragment: fragment.trim_start_matches('#').to_string(),
            ..Self::default()
        }
    }

    pub fn with_query(query: &str) -> Self {
        Self {
            query: query.to_string(),
            ..Self::default()
        }
    }
}

impl AddressBar for MemoryAddressBar {
    fn fragment(&self) -> String {
        self.fragment.clone()
    }

    fn query(&self) -> String {
        self.query.clone()
    }

    fn push_fragment(&mut self, fragment: &str) {
        self.fragment = fragment.to_string();
        self.history.push(fragment.to_string());
    }

    fn replace_fragment(&mut self, fragment: &str) {
        self.fragment = fragment.to_string();
        self.query.clear();
        self.replaced += 1;
    }
}

/// Keeps the last value handed to each sink method plus the call order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<&'static str>,
    pub loading: Option<bool>,
    pub error: Option<String>,
    pub home: Option<Vec<CategorySummary>>,
    pub home_shown: usize,
    pub detail: Option<(String, Vec<CatalogItem>)>,
    pub search: Option<(Vec<ResultGroup>, String)>,
    pub featured: Option<Vec<FeaturedCard>>,
    pub last_update: Option<DateTime<Utc>>,
}

impl RenderSink for RecordingSink {
    fn set_loading(&mut self, loading: bool) {
        self.calls.push("set_loading");
        self.loading = Some(loading);
    }

    fn set_error(&mut self, message: &str) {
        self.calls.push("set_error");
        self.error = Some(message.to_string());
    }

    fn render_home(&mut self, categories: Vec<CategorySummary>) {
        self.calls.push("render_home");
        self.home = Some(categories);
    }

    fn show_home(&mut self) {
        self.calls.push("show_home");
        self.home_shown += 1;
    }

    fn render_detail(&mut self, category: &str, items: Vec<CatalogItem>) {
        self.calls.push("render_detail");
        self.detail = Some((category.to_string(), items));
    }

    fn render_search_results(&mut self, groups: Vec<ResultGroup>, query: &str) {
        self.calls.push("render_search_results");
        self.search = Some((groups, query.to_string()));
    }

    fn render_featured(&mut self, cards: Vec<FeaturedCard>) {
        self.calls.push("render_featured");
        self.featured = Some(cards);
    }

    fn set_last_update(&mut self, timestamp: DateTime<Utc>) {
        self.calls.push("set_last_update");
        self.last_update = Some(timestamp);
    }
}
