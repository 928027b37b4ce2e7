//! Worker home: the signed-in worker's tasks in three columns.

use leptos::prelude::*;

use crate::components::page_frame::PageFrame;
use crate::components::task_card::TaskCard;
use crate::net::api;
use crate::net::types::{Role, Task, TaskFilter};
use crate::pages::loader::{Loaded, install_loader};
use crate::state::auth::AuthState;
use crate::util::format::count_label;
use crate::util::task_flow::{WorkerBoard, worker_board};

const WORKER_ONLY: [Role; 1] = [Role::Worker];

fn column(title: &'static str, tasks: Vec<Task>) -> impl IntoView {
    let count = count_label(tasks.len(), "task", "tasks");
    view! {
        <section class="board-column">
            <h2>{title} <span class="board-column__count">{count}</span></h2>
            {tasks.into_iter().map(|task| view! { <TaskCard task=task/> }).collect::<Vec<_>>()}
        </section>
    }
}

#[component]
pub fn WorkerDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let tasks = Loaded::new(Vec::<Task>::new());
    install_loader(tasks, move |client| {
        let filter = TaskFilter {
            worker_id: auth.get_untracked().user().map(|u| u.id.clone()),
            ..TaskFilter::default()
        };
        async move { api::list_tasks(&client, &filter).await }
    });

    let board = Memo::new(move |_| worker_board(&tasks.value.get()));

    view! {
        <PageFrame title="My work" allowed=&WORKER_ONLY>
            {move || {
                let WorkerBoard { to_start, in_progress, done } = board.get();
                view! {
                    <div class="board">
                        {column("To start", to_start)}
                        {column("In progress", in_progress)}
                        {column("Done", done)}
                    </div>
                }
            }}
        </PageFrame>
    }
}
