use crate::layout::global_context::CatalogContext;
use crate::layout::Shell;
use contracts::shared::config::{load_config, CatalogConfig};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u001_browse_catalog::BrowseCatalog;
use leptos::prelude::*;

/// Overrides layered on top of the embedded defaults.
const CONFIG_OVERRIDES: &str = include_str!("../catalog.toml");

#[component]
pub fn App() -> impl IntoView {
    let config = load_config(Some(CONFIG_OVERRIDES)).unwrap_or_else(|e| {
        log::error!("❌ catalog.toml inválido, usando valores por defecto: {:#}", e);
        CatalogConfig::default()
    });

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(BrowseCatalog::display_name());
    }

    // Provide the catalog context to the whole app, then start loading.
    let ctx = CatalogContext::new(config);
    provide_context(ctx);
    ctx.init();

    view! { <Shell /> }
}
