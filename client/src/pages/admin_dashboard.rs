//! Admin home: headline counts, open work, and what needs reordering.
//!
//! SYSTEM CONTEXT
//! ==============
//! Four list endpoints feed this page. They are fetched concurrently and
//! folded into one `AdminOverview` so the tiles never show a mix of fresh
//! and stale numbers.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;

use crate::components::page_frame::PageFrame;
use crate::components::stat_card::StatCard;
use crate::components::status_badge::StockBadge;
use crate::components::task_card::TaskCard;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{Client, InventoryItem, Task, TaskFilter, Worker};
use crate::pages::loader::{Loaded, install_loader};
use crate::util::auth::ADMIN_ONLY;
use crate::util::stock::{item_status, reorder_list, reorder_quantity};
use crate::util::task_flow::{is_open, sort_by_schedule};

const RECENT_TASKS: usize = 5;

/// Numbers and lists rendered by the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminOverview {
    pub clients: usize,
    pub active_workers: usize,
    pub open_tasks: usize,
    pub unassigned_tasks: usize,
    pub low_stock: usize,
    pub recent_open: Vec<Task>,
    pub reorder: Vec<InventoryItem>,
}

/// Fold fetched records into dashboard figures.
#[must_use]
pub fn summarize(clients: &[Client], workers: &[Worker], tasks: &[Task], inventory: &[InventoryItem]) -> AdminOverview {
    let mut open: Vec<Task> = tasks.iter().filter(|t| is_open(t.status)).cloned().collect();
    sort_by_schedule(&mut open);
    let reorder = reorder_list(inventory);
    AdminOverview {
        clients: clients.len(),
        active_workers: workers.iter().filter(|w| w.active).count(),
        open_tasks: open.len(),
        unassigned_tasks: open.iter().filter(|t| t.worker_id.is_none()).count(),
        low_stock: reorder.len(),
        recent_open: open.into_iter().take(RECENT_TASKS).collect(),
        reorder,
    }
}

async fn load_overview(api: ApiClient) -> Result<AdminOverview, ApiError> {
    let filter = TaskFilter::default();
    #[cfg(feature = "hydrate")]
    let (clients, workers, tasks, inventory) = futures::try_join!(
        api::list_clients(&api),
        api::list_workers(&api),
        api::list_tasks(&api, &filter),
        api::list_inventory(&api),
    )?;
    #[cfg(not(feature = "hydrate"))]
    let (clients, workers, tasks, inventory) = (
        api::list_clients(&api).await?,
        api::list_workers(&api).await?,
        api::list_tasks(&api, &filter).await?,
        api::list_inventory(&api).await?,
    );
    Ok(summarize(&clients, &workers, &tasks, &inventory))
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let overview = Loaded::new(AdminOverview::default());
    install_loader(overview, load_overview);

    let stat = move |pick: fn(&AdminOverview) -> usize| Signal::derive(move || pick(&overview.value.get()).to_string());

    view! {
        <PageFrame title="Dashboard" allowed=&ADMIN_ONLY>
            <section class="stat-grid">
                <StatCard label="Clients" value=stat(|o| o.clients) href="/clients"/>
                <StatCard label="Active workers" value=stat(|o| o.active_workers) href="/workers"/>
                <StatCard label="Open tasks" value=stat(|o| o.open_tasks) href="/tasks"/>
                <StatCard
                    label="Unassigned"
                    value=stat(|o| o.unassigned_tasks)
                    href="/tasks"
                    warn=Signal::derive(move || overview.value.get().unassigned_tasks > 0)
                />
                <StatCard
                    label="Low stock"
                    value=stat(|o| o.low_stock)
                    href="/inventory"
                    warn=Signal::derive(move || overview.value.get().low_stock > 0)
                />
            </section>
            <div class="dashboard-columns">
                <section class="panel">
                    <h2>"Upcoming open tasks"</h2>
                    {move || {
                        let recent = overview.value.get().recent_open;
                        if recent.is_empty() {
                            return view! { <p class="empty">"No open tasks."</p> }.into_any();
                        }
                        recent
                            .into_iter()
                            .map(|task| view! { <TaskCard task=task/> })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </section>
                <section class="panel">
                    <h2>"Reorder list"</h2>
                    {move || {
                        let items = overview.value.get().reorder;
                        if items.is_empty() {
                            return view! { <p class="empty">"Stock levels are healthy."</p> }.into_any();
                        }
                        view! {
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Item"</th>
                                        <th>"On hand"</th>
                                        <th>"Order"</th>
                                        <th>"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {items
                                        .into_iter()
                                        .map(|item| {
                                            let order = format!("{} {}", reorder_quantity(&item), item.unit);
                                            let on_hand = format!("{} {}", item.quantity, item.unit);
                                            let status = item_status(&item);
                                            view! {
                                                <tr>
                                                    <td>{item.name}</td>
                                                    <td>{on_hand}</td>
                                                    <td>{order}</td>
                                                    <td><StockBadge status=status/></td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    }}
                </section>
            </div>
            <Show when=move || overview.loading.get()>
                <p class="page__placeholder">"Loading..."</p>
            </Show>
        </PageFrame>
    }
}
