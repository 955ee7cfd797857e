//! Утилиты для списков: подсветка совпадений и поле поиска
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Байтовые диапазоны совпадений `filter` в `text` без учёта регистра.
///
/// Пусто, если lowercase меняет ширину хотя бы одного символа `text`
/// (смещения перестают совпадать с исходной строкой).
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let filter_lower = filter.trim().to_lowercase();
    if filter_lower.is_empty() || !lowercase_keeps_widths(text) {
        return Vec::new();
    }
    let text_lower = text.to_lowercase();

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        ranges.push((start, end));
        last_pos = end;
    }
    ranges
}

fn lowercase_keeps_widths(text: &str) -> bool {
    text.chars()
        .all(|c| c.to_lowercase().map(char::len_utf8).sum::<usize>() == c.len_utf8())
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <mark class="search-match">{text[start..end].to_string()}</mark> }.into_any(),
        );
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Поле поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Вызывается после паузы в наборе текста
    #[prop(into)]
    on_change: Callback<String>,
    /// Задержка debounce в миллисекундах
    #[prop(default = 150)]
    debounce_ms: u32,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar vino, bodega o precio...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());

    // Замена таймера отменяет предыдущий (drop)
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(debounce_ms, move || on_change.run(new_value));
        pending.update_value(|slot| *slot = Some(timeout));
    };

    let clear_filter = move |_| {
        pending.update_value(|slot| *slot = None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-box">
            <input
                id="search-input"
                type="search"
                placeholder=placeholder
                class:search-box__input--active=move || !value.get().trim().is_empty()
                class="search-box__input"
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-box__clear" title="Limpiar" on:click=clear_filter>
                    "✕"
                </button>
            </Show>
        </div>
    }
}
