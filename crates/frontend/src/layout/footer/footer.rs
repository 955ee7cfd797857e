use crate::layout::global_context::use_catalog;
use crate::shared::date_utils::format_local;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
enum LoadStatus {
    Loading,
    Ready,
    Failed,
    Idle,
}

impl LoadStatus {
    fn display_text(&self) -> &'static str {
        match self {
            LoadStatus::Loading => "Catálogo: cargando...",
            LoadStatus::Ready => "Catálogo: actualizado",
            LoadStatus::Failed => "Catálogo: sin conexión",
            LoadStatus::Idle => "Catálogo: pendiente",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            LoadStatus::Loading | LoadStatus::Idle => "status-checking",
            LoadStatus::Ready => "status-online",
            LoadStatus::Failed => "status-offline",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let signals = use_catalog().signals;

    let status = Memo::new(move |_| {
        if signals.loading.get() {
            LoadStatus::Loading
        } else if signals.error.with(Option::is_some) {
            LoadStatus::Failed
        } else if signals.last_update.with(Option::is_some) {
            LoadStatus::Ready
        } else {
            LoadStatus::Idle
        }
    });

    view! {
        <footer data-zone="footer" class="status-bar">
            <span class=move || status.get().css_class()>
                {move || status.get().display_text()}
            </span>
            <span class="update-time">
                "Última actualización: "
                <span id="update-time">
                    {move || signals.last_update.get().map(format_local).unwrap_or_else(|| "-".to_string())}
                </span>
            </span>
        </footer>
    }
}
