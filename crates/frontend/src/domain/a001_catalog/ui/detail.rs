use crate::layout::global_context::use_catalog;
use contracts::domain::a001_catalog::CatalogItem;
use leptos::prelude::*;
use thaw::*;

/// Страница bodega: вина уже отсортированы по имени.
#[component]
pub fn DetailPage(category: String, items: Vec<CatalogItem>) -> impl IntoView {
    let ctx = use_catalog();

    let body = if items.is_empty() {
        view! { <div class="error">"No hay vinos disponibles para esta bodega"</div> }.into_any()
    } else {
        items
            .into_iter()
            .map(|item| {
                view! {
                    <div class="vino-card">
                        <div class="vino-name">{item.name}</div>
                        <div class="vino-price">{item.display_price}</div>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="page page--detail">
            <div class="detail-header">
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| ctx.go_home()>
                    "← Volver"
                </Button>
                <h2 id="bodega-name">{category}</h2>
            </div>
            <div id="vinos-container" class="vinos-grid">{body}</div>
        </section>
    }
}
