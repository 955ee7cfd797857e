pub mod footer;
pub mod global_context;
pub mod header;

use crate::domain::a001_catalog::ui::{DetailPage, HomePage};
use global_context::{use_catalog, Page};
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |        Header (title, search, reload)     |
/// +------------------------------------------+
/// |        HomePage  |  DetailPage            |
/// +------------------------------------------+
/// |        Footer (load status, update time)  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let page = use_catalog().signals.page;

    view! {
        <div class="app-layout">
            <header::Header />

            <main class="app-main">
                {move || match page.get() {
                    Page::Home => view! { <HomePage /> }.into_any(),
                    Page::Detail { category, items } => {
                        view! { <DetailPage category=category items=items /> }.into_any()
                    }
                }}
            </main>

            <footer::Footer />
        </div>
    }
}
