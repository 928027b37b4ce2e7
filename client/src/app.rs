//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_stack::ToastStack;
use crate::pages::{
    admin_dashboard::AdminDashboardPage,
    client_dashboard::ClientDashboardPage,
    clients::ClientsPage,
    feedback::FeedbackPage,
    inventory::InventoryPage,
    login::LoginPage,
    notifications::NotificationsPage,
    root::{NotFoundPage, RootRedirect},
    site_detail::SiteDetailPage,
    sites::SitesPage,
    task_detail::TaskDetailPage,
    tasks::TasksPage,
    worker_dashboard::WorkerDashboardPage,
    workers::WorkersPage,
};
use crate::state::{
    auth::{AuthState, restore_session},
    notifications::NotificationsState,
    ui::UiState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, restores the stored session once the
/// app is running in the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restoring());
    let ui = RwSignal::new(UiState::default());
    let notifications = RwSignal::new(NotificationsState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(notifications);

    // Effects only run after hydration, so SSR renders the loading state.
    Effect::new(move || restore_session(auth));

    view! {
        <Title text="Verdant"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=RootRedirect/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("admin") view=AdminDashboardPage/>
                <Route path=StaticSegment("worker") view=WorkerDashboardPage/>
                <Route path=StaticSegment("client") view=ClientDashboardPage/>
                <Route path=StaticSegment("clients") view=ClientsPage/>
                <Route path=StaticSegment("workers") view=WorkersPage/>
                <Route path=StaticSegment("sites") view=SitesPage/>
                <Route path=(StaticSegment("sites"), ParamSegment("id")) view=SiteDetailPage/>
                <Route path=StaticSegment("tasks") view=TasksPage/>
                <Route path=(StaticSegment("tasks"), ParamSegment("id")) view=TaskDetailPage/>
                <Route path=StaticSegment("inventory") view=InventoryPage/>
                <Route path=StaticSegment("feedback") view=FeedbackPage/>
                <Route path=StaticSegment("notifications") view=NotificationsPage/>
            </Routes>
        </Router>
        <ToastStack/>
    }
}
