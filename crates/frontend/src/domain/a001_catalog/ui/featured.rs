use crate::layout::global_context::use_catalog;
use leptos::prelude::*;
use thaw::Card;

/// Полоса "Destacados". Скрыта, пока список пуст.
#[component]
pub fn FeaturedSection() -> impl IntoView {
    let ctx = use_catalog();
    let featured = ctx.signals.featured;

    view! {
        <Show when=move || featured.with(|cards| !cards.is_empty())>
            <section id="featured-section" class="featured-section">
                <h2 class="featured-section__title">"Destacados"</h2>
                <div id="featured-grid" class="featured-grid">
                    {move || {
                        featured
                            .get()
                            .into_iter()
                            .map(|card| {
                                let category = card.category_name.clone();
                                view! {
                                    <div class="featured-card" on:click=move |_| ctx.open_detail(&category)>
                                        <Card>
                                            <div class="featured-badge">"🔥 Top Ventas"</div>
                                            <h3 class="featured-name">{card.name}</h3>
                                            <p class="featured-bodega">{card.category_name}</p>
                                            <div class="featured-price">{card.display_price}</div>
                                        </Card>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>
        </Show>
    }
}
