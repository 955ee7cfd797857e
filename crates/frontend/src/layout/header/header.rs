use crate::layout::global_context::use_catalog;
use crate::shared::list_utils::SearchInput;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u001_browse_catalog::BrowseCatalog;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_catalog();
    let debounce_ms = ctx.config().navigation.search_debounce_ms;
    let loading = ctx.signals.loading;

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title" on:click=move |_| ctx.go_home()>
                    {BrowseCatalog::display_name()}
                </span>
                <SearchInput
                    value=ctx.search_text
                    debounce_ms=debounce_ms
                    on_change=move |text: String| ctx.set_query(text)
                />
            </div>
            <div class="header__actions">
                <Button
                    appearance=ButtonAppearance::Subtle
                    disabled=Signal::derive(move || loading.get())
                    on_click=move |_| ctx.reload()
                >
                    "↻ Actualizar"
                </Button>
            </div>
        </header>
    }
}
