use super::featured::FeaturedSection;
use super::search_results::SearchResults;
use crate::layout::global_context::{use_catalog, Listing};
use contracts::usecases::u001_browse_catalog::CategorySummary;
use leptos::prelude::*;

/// Главная страница: destacados + список bodegas (или результаты поиска)
#[component]
pub fn HomePage() -> impl IntoView {
    let signals = use_catalog().signals;

    view! {
        <section class="page page--home">
            <FeaturedSection />

            <Show when=move || signals.loading.get()>
                <div id="loading" class="loading">"Cargando catálogo..."</div>
            </Show>

            <div
                id="bodegas-container"
                class="bodegas-grid"
                style:display=move || if signals.loading.get() { "none" } else { "grid" }
            >
                {move || match signals.error.get() {
                    Some(message) => view! { <div class="error">{message}</div> }.into_any(),
                    None => match signals.listing.get() {
                        Listing::Categories(categories) => {
                            view! { <CategoryGrid categories=categories /> }.into_any()
                        }
                        Listing::SearchResults { query, groups } => {
                            view! { <SearchResults query=query groups=groups /> }.into_any()
                        }
                    },
                }}
            </div>
        </section>
    }
}

#[component]
fn CategoryGrid(categories: Vec<CategorySummary>) -> impl IntoView {
    let ctx = use_catalog();

    if categories.is_empty() {
        return view! { <div class="empty">"No hay bodegas en el catálogo"</div> }.into_any();
    }

    categories
        .into_iter()
        .map(|summary| {
            let name = summary.name.clone();
            view! {
                <div class="bodega-card" on:click=move |_| ctx.open_detail(&name)>
                    <h3>{summary.name}</h3>
                    <p class="wine-count">{format!("{} vinos disponibles", summary.count)}</p>
                </div>
            }
        })
        .collect_view()
        .into_any()
}
