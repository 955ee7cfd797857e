//! Coordinator: owns the application state and turns intents and load
//! results into router transitions and sink calls.

use super::renderer::{
    detail_listing, featured_listing, group_results, home_listing, RenderSink,
};
use super::router::{AddressBar, View, ViewRouter};
use super::search::{normalize_query, search};
use super::state::ApplicationState;
use crate::domain::a001_catalog::loader::CatalogLoader;
use crate::domain::a001_catalog::CatalogError;
use crate::shared::config::CatalogConfig;
use chrono::{DateTime, Utc};

/// User and browser events, processed in the order received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// hashchange / popstate, and the single re-check after a load.
    AddressChanged,
    /// Raw text of the search box.
    QueryChanged(String),
    DetailRequested(String),
    HomeRequested,
}

pub struct CatalogBrowser<S, A> {
    state: ApplicationState,
    router: ViewRouter,
    loader: CatalogLoader,
    deep_link_param: String,
    sink: S,
    address: A,
    query: String,
    load_in_flight: bool,
}

impl<S: RenderSink, A: AddressBar> CatalogBrowser<S, A> {
    pub fn new(config: &CatalogConfig, sink: S, address: A) -> Self {
        Self {
            state: ApplicationState::new(),
            router: ViewRouter::new(),
            loader: CatalogLoader::from_config(config),
            deep_link_param: config.navigation.deep_link_param.clone(),
            sink,
            address,
            query: String::new(),
            load_in_flight: false,
        }
    }

    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    pub fn view(&self) -> &View {
        self.router.current()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn address(&self) -> &A {
        &self.address
    }

    pub fn is_loading(&self) -> bool {
        self.load_in_flight
    }

    /// Startup: rewrites a deep link into the fragment form. Navigation
    /// itself waits for the first load.
    pub fn start(&mut self) {
        log::info!("🚀 Iniciando catálogo");
        self.router
            .apply_deep_link(&self.deep_link_param, &mut self.address);
    }

    /// Marks a load as started. Returns `false`, and changes nothing, while
    /// another load is still outstanding.
    pub fn begin_load(&mut self) -> bool {
        if self.load_in_flight {
            log::warn!("⚠️ Carga en curso, se ignora la nueva solicitud");
            return false;
        }
        self.load_in_flight = true;
        self.sink.set_loading(true);
        true
    }

    /// Finishes a load cycle with the fetched document text (or the fetch
    /// error). On success the state is replaced and the address re-checked
    /// once; on failure the state is left as it was.
    pub fn complete_load(&mut self, fetched: Result<String, CatalogError>, now: DateTime<Utc>) {
        self.load_in_flight = false;

        match fetched.and_then(|text| self.loader.load(&text, now)) {
            Ok(loaded) => {
                self.state.replace(loaded);

                let cards = featured_listing(self.state.featured(), self.loader.formatter());
                self.sink.render_featured(cards);
                if let Some(timestamp) = self.state.last_update() {
                    self.sink.set_last_update(timestamp);
                }
                self.render_listing();
                self.sink.set_loading(false);

                self.dispatch(Intent::AddressChanged);
            }
            Err(err) => {
                log::error!("❌ Error: {}", err);
                // Error is shown in place of the home listing
                if matches!(self.router.current(), View::Detail(_)) {
                    let view = self.router.navigate_home(&mut self.address);
                    self.show(view);
                }
                self.sink.set_error(&err.user_message());
                self.sink.set_loading(false);
            }
        }
    }

    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::AddressChanged => {
                if let Some(view) = self.router.on_address_changed(&self.state, &mut self.address) {
                    self.show(view);
                }
            }
            Intent::QueryChanged(text) => {
                self.query = normalize_query(&text);
                if self.state.is_data_ready() {
                    self.render_listing();
                }
            }
            Intent::DetailRequested(category) => {
                if let Some(view) =
                    self.router
                        .navigate_to_detail(&category, &self.state, &mut self.address)
                {
                    self.show(view);
                }
            }
            Intent::HomeRequested => {
                let view = self.router.navigate_home(&mut self.address);
                self.show(view);
            }
        }
    }

    fn show(&mut self, view: View) {
        match view {
            View::Home => self.sink.show_home(),
            View::Detail(category) => {
                let items = detail_listing(self.state.catalog_index(), &category);
                self.sink.render_detail(&category, items);
            }
        }
    }

    /// Home listing: all categories, or grouped hits when a query is set.
    fn render_listing(&mut self) {
        let index = self.state.catalog_index();
        if self.query.is_empty() {
            self.sink.render_home(home_listing(index));
        } else {
            let groups = group_results(search(index, &self.query));
            self.sink.render_search_results(groups, &self.query);
        }
    }
}
