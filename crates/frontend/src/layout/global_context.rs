use crate::shared::address_bar::BrowserAddressBar;
use crate::shared::api_utils::fetch_catalog;
use chrono::{DateTime, Utc};
use contracts::domain::a001_catalog::CatalogItem;
use contracts::shared::config::CatalogConfig;
use contracts::usecases::u001_browse_catalog::{
    CatalogBrowser, CategorySummary, FeaturedCard, Intent, RenderSink, ResultGroup,
};
use leptos::prelude::*;

/// Visible page.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Home,
    Detail {
        category: String,
        items: Vec<CatalogItem>,
    },
}

/// Content of the home listing area.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Categories(Vec<CategorySummary>),
    SearchResults {
        query: String,
        groups: Vec<ResultGroup>,
    },
}

/// Signals the components render from. Implements [`RenderSink`] so the
/// coordinator writes straight into them.
#[derive(Clone, Copy)]
pub struct CatalogSignals {
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub page: RwSignal<Page>,
    pub listing: RwSignal<Listing>,
    pub featured: RwSignal<Vec<FeaturedCard>>,
    pub last_update: RwSignal<Option<DateTime<Utc>>>,
}

impl CatalogSignals {
    pub fn new() -> Self {
        Self {
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            page: RwSignal::new(Page::Home),
            listing: RwSignal::new(Listing::Categories(Vec::new())),
            featured: RwSignal::new(Vec::new()),
            last_update: RwSignal::new(None),
        }
    }
}

impl Default for CatalogSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSink for CatalogSignals {
    fn set_loading(&mut self, loading: bool) {
        self.loading.set(loading);
    }

    fn set_error(&mut self, message: &str) {
        self.error.set(Some(message.to_string()));
    }

    fn render_home(&mut self, categories: Vec<CategorySummary>) {
        self.error.set(None);
        self.listing.set(Listing::Categories(categories));
    }

    fn show_home(&mut self) {
        self.page.set(Page::Home);
    }

    fn render_detail(&mut self, category: &str, items: Vec<CatalogItem>) {
        self.page.set(Page::Detail {
            category: category.to_string(),
            items,
        });
    }

    fn render_search_results(&mut self, groups: Vec<ResultGroup>, query: &str) {
        self.error.set(None);
        self.listing.set(Listing::SearchResults {
            query: query.to_string(),
            groups,
        });
    }

    fn render_featured(&mut self, cards: Vec<FeaturedCard>) {
        self.featured.set(cards);
    }

    fn set_last_update(&mut self, timestamp: DateTime<Utc>) {
        self.last_update.set(Some(timestamp));
    }
}

type Browser = CatalogBrowser<CatalogSignals, BrowserAddressBar>;

/// App-wide context: render signals plus the coordinator that drives them.
#[derive(Clone, Copy)]
pub struct CatalogContext {
    pub signals: CatalogSignals,
    pub search_text: RwSignal<String>,
    browser: StoredValue<Browser>,
    config: StoredValue<CatalogConfig>,
}

impl CatalogContext {
    pub fn new(config: CatalogConfig) -> Self {
        let signals = CatalogSignals::new();
        let browser = CatalogBrowser::new(&config, signals, BrowserAddressBar);
        Self {
            signals,
            search_text: RwSignal::new(String::new()),
            browser: StoredValue::new(browser),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> CatalogConfig {
        self.config.get_value()
    }

    /// Applies the deep link, hooks browser navigation and starts the first load.
    pub fn init(&self) {
        self.browser.update_value(|browser| browser.start());

        let this = *self;
        let _ = window_event_listener(leptos::ev::hashchange, move |_| {
            this.dispatch(Intent::AddressChanged);
        });
        let _ = window_event_listener(leptos::ev::popstate, move |_| {
            this.dispatch(Intent::AddressChanged);
        });

        self.reload();
    }

    pub fn dispatch(&self, intent: Intent) {
        log::debug!("🔷 dispatch: {:?}", intent);
        self.browser.update_value(|browser| browser.dispatch(intent));
    }

    pub fn open_detail(&self, category: &str) {
        self.dispatch(Intent::DetailRequested(category.to_string()));
    }

    pub fn go_home(&self) {
        self.dispatch(Intent::HomeRequested);
    }

    pub fn set_query(&self, text: String) {
        self.search_text.set(text.clone());
        self.dispatch(Intent::QueryChanged(text));
    }

    /// Fetches the catalog document. A request made while a load is
    /// outstanding is ignored.
    pub fn reload(&self) {
        let started = self
            .browser
            .try_update_value(|browser| browser.begin_load())
            .unwrap_or(false);
        if !started {
            return;
        }

        let url = self
            .config
            .with_value(|config| config.source.request_url(js_sys::Date::now() as i64));
        let browser = self.browser;

        wasm_bindgen_futures::spawn_local(async move {
            log::info!("📥 Cargando catálogo: {}", url);
            let fetched = fetch_catalog(&url).await;
            browser.update_value(|browser| browser.complete_load(fetched, Utc::now()));
        });
    }
}

/// Catalog context provided by [`crate::app::App`].
pub fn use_catalog() -> CatalogContext {
    leptos::context::use_context::<CatalogContext>().expect("CatalogContext context not found")
}
