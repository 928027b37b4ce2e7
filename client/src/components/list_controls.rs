//! Search box and pagination controls for record tables.
//!
//! DESIGN
//! ======
//! Controls only write the query/page signals; pages derive the visible slice
//! with `util::listing`. Typing in the search box resets to page 1.

use leptos::prelude::*;

use crate::util::listing::page_window;

const PAGE_WINDOW: usize = 5;

#[component]
pub fn SearchBox(
    query: RwSignal<String>,
    page: RwSignal<usize>,
    #[prop(default = "Search…")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <input
            class="search-box"
            type="search"
            placeholder=placeholder
            prop:value=move || query.get()
            on:input=move |ev| {
                query.set(event_target_value(&ev));
                page.set(1);
            }
        />
    }
}

/// Prev/next plus a window of page numbers and a "Showing x–y of n" label.
#[component]
pub fn Pager(
    page: RwSignal<usize>,
    total_pages: Signal<usize>,
    range: Signal<(usize, usize)>,
    total: Signal<usize>,
) -> impl IntoView {
    let numbers = move || page_window(page.get(), total_pages.get(), PAGE_WINDOW);
    let summary = move || {
        let (first, last) = range.get();
        let total = total.get();
        if total == 0 { "No results".to_owned() } else { format!("Showing {first}–{last} of {total}") }
    };

    view! {
        <div class="pager">
            <span class="pager__summary">{summary}</span>
            <button
                class="btn pager__prev"
                disabled=move || page.get() <= 1
                on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
            >
                "‹"
            </button>
            {move || {
                numbers()
                    .into_iter()
                    .map(|n| {
                        view! {
                            <button
                                class="btn pager__page"
                                class:pager__page--active=move || page.get() == n
                                on:click=move |_| page.set(n)
                            >
                                {n}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <button
                class="btn pager__next"
                disabled=move || page.get() >= total_pages.get()
                on:click=move |_| page.update(|p| *p = (*p + 1).min(total_pages.get_untracked()))
            >
                "›"
            </button>
        </div>
    }
}
