//! Client home: each site with its task progress, plus finished work that
//! is waiting for the client's rating.

#[cfg(test)]
#[path = "client_dashboard_test.rs"]
mod client_dashboard_test;

use leptos::prelude::*;

use crate::components::page_frame::PageFrame;
use crate::components::task_card::TaskCard;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{Role, Site, Task, TaskFilter};
use crate::pages::loader::{Loaded, install_loader};
use crate::state::auth::AuthState;
use crate::util::task_flow::{can_leave_feedback, completion_percent, is_open};

const CLIENT_ONLY: [Role; 1] = [Role::Client];

/// One site's row on the client dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteProgress {
    pub site_id: String,
    pub name: String,
    pub open_tasks: usize,
    pub percent: u8,
}

/// Progress per site, in site order.
#[must_use]
pub fn site_progress(sites: &[Site], tasks: &[Task]) -> Vec<SiteProgress> {
    sites
        .iter()
        .map(|site| {
            let own: Vec<Task> = tasks.iter().filter(|t| t.site_id == site.id).cloned().collect();
            SiteProgress {
                site_id: site.id.clone(),
                name: site.name.clone(),
                open_tasks: own.iter().filter(|t| is_open(t.status)).count(),
                percent: completion_percent(&own),
            }
        })
        .collect()
}

/// Finished tasks the client has not rated yet.
#[must_use]
pub fn awaiting_feedback(tasks: &[Task]) -> Vec<Task> {
    tasks.iter().filter(|t| can_leave_feedback(t, Role::Client)).cloned().collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
struct ClientOverview {
    sites: Vec<SiteProgress>,
    awaiting: Vec<Task>,
}

async fn load_overview(api: ApiClient, client_id: Option<String>) -> Result<ClientOverview, ApiError> {
    let filter = TaskFilter { client_id: client_id.clone(), ..TaskFilter::default() };
    let sites = api::list_sites(&api, client_id.as_deref()).await?;
    let tasks = api::list_tasks(&api, &filter).await?;
    Ok(ClientOverview { sites: site_progress(&sites, &tasks), awaiting: awaiting_feedback(&tasks) })
}

#[component]
pub fn ClientDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let overview = Loaded::new(ClientOverview::default());
    install_loader(overview, move |client| {
        load_overview(client, auth.get_untracked().user().map(|u| u.id.clone()))
    });

    view! {
        <PageFrame title="Overview" allowed=&CLIENT_ONLY>
            <Show when=move || !overview.value.get().awaiting.is_empty()>
                <section class="panel panel--prompt">
                    <h2>"How did we do?"</h2>
                    <p>"These visits are finished. Open one to leave a rating."</p>
                    {move || {
                        overview
                            .value
                            .get()
                            .awaiting
                            .into_iter()
                            .map(|task| view! { <TaskCard task=task note="Awaiting your feedback".to_owned()/> })
                            .collect::<Vec<_>>()
                    }}
                </section>
            </Show>
            <section class="panel">
                <h2>"Your sites"</h2>
                {move || {
                    let sites = overview.value.get().sites;
                    if sites.is_empty() && !overview.loading.get() {
                        return view! { <p class="empty">"No sites on record yet."</p> }.into_any();
                    }
                    sites
                        .into_iter()
                        .map(|site| {
                            let href = format!("/sites/{}", site.site_id);
                            let width = format!("width: {}%", site.percent);
                            view! {
                                <a class="site-progress" href=href>
                                    <span class="site-progress__name">{site.name}</span>
                                    <span class="site-progress__bar">
                                        <span class="site-progress__fill" style=width></span>
                                    </span>
                                    <span class="site-progress__pct">{format!("{}% done", site.percent)}</span>
                                    <span class="site-progress__open">{format!("{} open", site.open_tasks)}</span>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </section>
        </PageFrame>
    }
}
