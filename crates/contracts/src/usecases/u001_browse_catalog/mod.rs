//! Просмотр каталога: загрузка, навигация по bodegas, поиск

pub mod browser;
pub mod renderer;
pub mod router;
pub mod search;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use browser::{CatalogBrowser, Intent};
pub use renderer::{CategorySummary, FeaturedCard, RenderSink, ResultGroup};
pub use router::{AddressBar, NavigationToken, View, ViewRouter};
pub use search::{normalize_query, search, SearchHit, Searchable};
pub use state::ApplicationState;

use crate::usecases::common::UseCaseMetadata;

pub struct BrowseCatalog;

impl UseCaseMetadata for BrowseCatalog {
    fn usecase_index() -> &'static str {
        "u001"
    }

    fn usecase_name() -> &'static str {
        "browse_catalog"
    }

    fn display_name() -> &'static str {
        "Catálogo de vinos"
    }

    fn description() -> &'static str {
        "Listado de vinos agrupados por bodega, con búsqueda y enlaces directos"
    }
}
