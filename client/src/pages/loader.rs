//! Fetch/mutate helpers shared by route pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page follows the same cycle: fetch when a session exists (and again
//! whenever `reload` is bumped), show a toast on failure, and run mutations
//! that refresh the list on success. These helpers keep that cycle in one
//! place. Under SSR they never issue requests; pages render their loading
//! placeholders and hydrate fetches.

use std::future::Future;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::state::auth::AuthState;
use crate::util::listing::{DEFAULT_PER_PAGE, Page, Searchable, filter_by_text, paginate};
use crate::state::ui::{ToastKind, UiState, notify, report_error};

/// Signals a page reads to render one fetched value.
pub struct Loaded<T: Send + Sync + 'static> {
    pub value: RwSignal<T>,
    pub loading: RwSignal<bool>,
    pub reload: RwSignal<u32>,
}

impl<T: Send + Sync + 'static> Clone for Loaded<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Loaded<T> {}

impl<T: Send + Sync + 'static> Loaded<T> {
    pub fn new(initial: T) -> Self {
        Self { value: RwSignal::new(initial), loading: RwSignal::new(true), reload: RwSignal::new(0) }
    }

    /// Ask the loader to fetch again.
    pub fn refresh(&self) {
        self.reload.update(|n| *n = n.wrapping_add(1));
    }
}

/// Run `fetch` whenever the session changes or `loaded.refresh()` is called.
pub fn install_loader<T, F, Fut>(loaded: Loaded<T>, fetch: F)
where
    T: Send + Sync + 'static,
    F: Fn(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    Effect::new(move || {
        loaded.reload.track();
        let state = auth.get();
        if state.session.is_none() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let request = fetch(state.api());
            loaded.loading.set(true);
            leptos::task::spawn_local(async move {
                match request.await {
                    Ok(value) => loaded.value.set(value),
                    Err(err) => report_error(ui, auth, &err),
                }
                loaded.loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&fetch, ui);
        }
    });
}

/// Session and toast handles captured at component construction, so event
/// handlers can run requests without a reactive owner.
#[derive(Clone, Copy)]
pub struct Actions {
    pub auth: RwSignal<AuthState>,
    pub ui: RwSignal<UiState>,
}

impl Actions {
    pub fn from_context() -> Self {
        Self { auth: expect_context::<RwSignal<AuthState>>(), ui: expect_context::<RwSignal<UiState>>() }
    }

    /// Run one mutation with the current session; `on_ok` sees the result,
    /// failures become toasts.
    pub fn run<T, F, Fut, K>(self, action: F, on_ok: K)
    where
        T: 'static,
        F: FnOnce(ApiClient) -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
        K: FnOnce(T) + 'static,
    {
        self.run_then(action, move |result| match result {
            Ok(value) => on_ok(value),
            Err(err) => self.report(&err),
        });
    }

    /// Like [`Actions::run`], but the caller handles both outcomes.
    pub fn run_then<T, F, Fut, K>(self, action: F, on_done: K)
    where
        T: 'static,
        F: FnOnce(ApiClient) -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
        K: FnOnce(Result<T, ApiError>) + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            let request = action(self.auth.get_untracked().api());
            leptos::task::spawn_local(async move {
                on_done(request.await);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (action, on_done);
        }
    }

    pub fn report(self, err: &ApiError) {
        report_error(self.ui, self.auth, err);
    }

    pub fn success(self, text: impl Into<String>) {
        notify(self.ui, ToastKind::Success, text);
    }

    pub fn error(self, text: impl Into<String>) {
        notify(self.ui, ToastKind::Error, text);
    }
}

/// Search query, current page, and the visible slice of a record list.
pub struct Listing<T: Send + Sync + 'static> {
    pub query: RwSignal<String>,
    pub page: RwSignal<usize>,
    pub visible: Memo<Page<T>>,
}

impl<T: Send + Sync + 'static> Clone for Listing<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Listing<T> {}

impl<T> Listing<T>
where
    T: Searchable + Clone + PartialEq + Send + Sync + 'static,
{
    /// Page through `source` after the search box filter.
    pub fn new(source: impl Fn() -> Vec<T> + Send + Sync + 'static) -> Self {
        let query = RwSignal::new(String::new());
        let page = RwSignal::new(1);
        let visible = Memo::new(move |_| paginate(&filter_by_text(&source(), &query.get()), page.get(), DEFAULT_PER_PAGE));
        Self { query, page, visible }
    }

    pub fn total_pages(self) -> Signal<usize> {
        Signal::derive(move || self.visible.get().total_pages)
    }

    pub fn range(self) -> Signal<(usize, usize)> {
        Signal::derive(move || self.visible.get().range())
    }

    pub fn total(self) -> Signal<usize> {
        Signal::derive(move || self.visible.get().total)
    }

    pub fn items(self) -> Vec<T> {
        self.visible.get().items
    }
}
