use crate::layout::global_context::use_catalog;
use crate::shared::list_utils::highlight_matches;
use contracts::usecases::u001_browse_catalog::ResultGroup;
use leptos::prelude::*;

/// Search hits grouped by bodega; a group header opens that bodega.
#[component]
pub fn SearchResults(query: String, groups: Vec<ResultGroup>) -> impl IntoView {
    let ctx = use_catalog();
    let total: usize = groups.iter().map(|group| group.items.len()).sum();

    if total == 0 {
        return view! {
            <div class="search-empty">
                <div class="search-empty__icon">"🔍"</div>
                <p>"No se encontraron resultados"</p>
                <p class="search-empty__hint">"Probá con otro nombre de vino, bodega o precio"</p>
                <p class="search-empty__query">{format!("Buscaste: \"{}\"", query)}</p>
            </div>
        }
        .into_any();
    }

    let sections = groups
        .into_iter()
        .map(|group| {
            let category = group.category.clone();
            let count = group.items.len();
            let title = highlight_matches(&group.category, &query);
            let items = group
                .items
                .into_iter()
                .map(|hit| {
                    view! {
                        <div class="vino-card">
                            <div class="vino-name">{highlight_matches(&hit.name, &query)}</div>
                            <div class="vino-price">{hit.display_price}</div>
                        </div>
                    }
                })
                .collect_view();

            view! {
                <div class="search-result-group">
                    <div class="bodega-card search-header" on:click=move |_| ctx.open_detail(&category)>
                        <h3>{title}</h3>
                        <div class="wine-count-badge">{format!("{} productos", count)}</div>
                    </div>
                    <div class="search-items-grid">{items}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="search-summary">
            <h2>{format!("🔍 {} resultados encontrados", total)}</h2>
            <p>{format!("Buscaste: \"{}\"", query)}</p>
        </div>
        {sections}
    }
    .into_any()
}
