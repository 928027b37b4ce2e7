//! Dashboard counter tile.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    label: &'static str,
    value: Signal<String>,
    #[prop(optional)] href: Option<&'static str>,
    #[prop(optional)] warn: Option<Signal<bool>>,
) -> impl IntoView {
    let warn = move || warn.is_some_and(|w| w.get());
    view! {
        <a class="stat-card" class:stat-card--warn=warn href=href.unwrap_or("#")>
            <span class="stat-card__value">{move || value.get()}</span>
            <span class="stat-card__label">{label}</span>
        </a>
    }
}
