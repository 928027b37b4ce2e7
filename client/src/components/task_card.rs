//! Compact task summary linking to the task page.

use leptos::prelude::*;

use crate::components::status_badge::TaskStatusBadge;
use crate::net::types::Task;

#[component]
pub fn TaskCard(task: Task, #[prop(optional)] note: Option<String>) -> impl IntoView {
    let href = format!("/tasks/{}", task.id);
    let when = task.scheduled_for.clone().unwrap_or_else(|| "Unscheduled".to_owned());
    view! {
        <a class="task-card" href=href>
            <span class="task-card__title">{task.title}</span>
            <TaskStatusBadge status=task.status/>
            <span class="task-card__when">{when}</span>
            {note.map(|text| view! { <span class="task-card__note">{text}</span> })}
        </a>
    }
}
