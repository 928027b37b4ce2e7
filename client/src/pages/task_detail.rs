//! Single task: details, lifecycle actions, assignment, photos, feedback.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every mutation answers with the updated task, which replaces the loaded
//! value, so the page never re-derives server state on its own. Which
//! controls appear is decided by `util::task_flow` from the task and the
//! signed-in role.

#[cfg(test)]
#[path = "task_detail_test.rs"]
mod task_detail_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::form_field::{SelectField, TextArea};
use crate::components::page_frame::PageFrame;
use crate::components::photo_slots_view::PhotoSlotGrid;
use crate::components::photo_upload::{PhotoUpload, UploadResult, UploadTarget};
use crate::components::status_badge::TaskStatusBadge;
use crate::net::api;
use crate::net::types::{PhotoKind, Role, Task, Worker};
use crate::pages::loader::{Actions, Loaded, install_loader};
use crate::state::auth::AuthState;
use crate::util::auth::ALL_ROLES;
use crate::util::forms;
use crate::util::task_flow::{
    TaskAction, action_blocker, available_actions, can_assign, can_leave_feedback, can_upload_photos,
};

/// An action button and, when it cannot run yet, the reason shown beside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionState {
    pub action: TaskAction,
    pub blocker: Option<String>,
}

#[must_use]
pub fn action_states(task: &Task, role: Role) -> Vec<ActionState> {
    available_actions(task, role)
        .into_iter()
        .map(|action| ActionState { action, blocker: action_blocker(task, action) })
        .collect()
}

/// # Errors
///
/// A message when the rating is outside 1 to 5.
pub fn feedback_input(rating: &str, comment: &str) -> Result<(u8, Option<String>), &'static str> {
    Ok((forms::parse_rating(rating)?, forms::optional(comment)))
}

fn photo_section(
    kind: PhotoKind,
    task: &Task,
    role: Role,
    on_done: Callback<UploadResult>,
) -> impl IntoView + use<> {
    let (title, photos, upload_label) = match kind {
        PhotoKind::Before => ("Before", task.before_photos.clone(), "Upload before photos"),
        PhotoKind::After => ("After", task.after_photos.clone(), "Upload after photos"),
    };
    let upload = can_upload_photos(role, task.status, kind).then(|| {
        let target = UploadTarget::TaskPhotos { task_id: task.id.clone(), kind };
        view! { <PhotoUpload label=upload_label target=target on_done=on_done/> }
    });
    view! {
        <section class="panel">
            <PhotoSlotGrid title=title photos=photos references=task.reference_images.clone()/>
            {upload}
        </section>
    }
}

#[component]
pub fn TaskDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let actions = Actions::from_context();
    let params = use_params_map();
    let task_id = move || params.read().get("id").unwrap_or_default();
    let role = move || auth.get().role();

    let task = Loaded::new(None::<Task>);
    install_loader(task, move |client| {
        let id = task_id();
        async move { api::get_task(&client, &id).await.map(Some) }
    });
    let workers = Loaded::new(Vec::<Worker>::new());
    install_loader(workers, move |client| {
        let admin = auth.get_untracked().role() == Some(Role::Admin);
        async move { if admin { api::list_workers(&client).await } else { Ok(Vec::new()) } }
    });

    let replace = move |updated: Task| task.value.set(Some(updated));
    let on_photos = Callback::new(move |result: UploadResult| {
        if let UploadResult::Task(updated) = result {
            replace(updated);
        }
    });

    // Status changes.
    let confirming = RwSignal::new(None::<TaskAction>);
    let run_action = move |action: TaskAction| {
        confirming.set(None);
        let id = task_id();
        actions.run(
            move |client| async move { api::set_task_status(&client, &id, action.target()).await },
            move |updated| {
                actions.success(format!("Task is now {}", updated.status.label().to_lowercase()));
                replace(updated);
            },
        );
    };
    let on_action = move |action: TaskAction| {
        if action.needs_confirmation() {
            confirming.set(Some(action));
        } else {
            run_action(action);
        }
    };

    // Assignment.
    let chosen_worker = RwSignal::new(String::new());
    Effect::new(move || {
        let current = task.value.get().and_then(|t| t.worker_id).unwrap_or_default();
        chosen_worker.set(current);
    });
    let worker_options = Signal::derive(move || {
        workers.value.get().into_iter().filter(|w| w.active).map(|w| (w.id, w.name)).collect::<Vec<_>>()
    });
    let on_assign = move |_| {
        let worker_id = chosen_worker.get_untracked();
        if worker_id.is_empty() {
            actions.error("Choose a worker first.");
            return;
        }
        let id = task_id();
        actions.run(
            move |client| async move { api::assign_task(&client, &id, &worker_id).await },
            move |updated| {
                actions.success("Worker assigned");
                replace(updated);
            },
        );
    };

    // Feedback.
    let rating = RwSignal::new("5".to_owned());
    let comment = RwSignal::new(String::new());
    let on_feedback = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (stars, text) = match feedback_input(&rating.get_untracked(), &comment.get_untracked()) {
            Ok(pair) => pair,
            Err(msg) => {
                actions.error(msg);
                return;
            }
        };
        let id = task_id();
        actions.run(
            move |client| async move { api::submit_feedback(&client, &id, stars, text).await },
            move |_| {
                actions.success("Thanks for your feedback");
                comment.set(String::new());
                task.value.update(|t| {
                    if let Some(t) = t {
                        t.has_feedback = true;
                    }
                });
            },
        );
    };

    // Deletion.
    let deleting = RwSignal::new(false);
    let deleted = RwSignal::new(false);
    let navigate = use_navigate();
    Effect::new(move || {
        if deleted.get() {
            navigate("/tasks", NavigateOptions::default());
        }
    });
    let confirm_delete = Callback::new(move |()| {
        deleting.set(false);
        let id = task_id();
        actions.run(
            move |client| async move { api::delete_task(&client, &id).await },
            move |()| {
                actions.success("Task deleted");
                deleted.set(true);
            },
        );
    });

    view! {
        <PageFrame title="Task" allowed=&ALL_ROLES>
            {move || {
                let Some(current) = task.value.get() else {
                    let text = if task.loading.get() { "Loading..." } else { "Task not found." };
                    return view! { <p class="page__placeholder">{text}</p> }.into_any();
                };
                let Some(role) = role() else {
                    return ().into_any();
                };
                let states = action_states(&current, role);
                let assignable = can_assign(role, current.status);
                let feedback_open = can_leave_feedback(&current, role);
                let site_link = (role != Role::Worker).then(|| {
                    let href = format!("/sites/{}", current.site_id);
                    view! { <a href=href>"View site"</a> }
                });
                view! {
                    <section class="panel task-summary">
                        <h2>
                            {current.title.clone()} " " <TaskStatusBadge status=current.status/>
                        </h2>
                        {current.description.clone().map(|d| view! { <p class="task-summary__description">{d}</p> })}
                        <dl class="task-summary__facts">
                            <dt>"Scheduled"</dt>
                            <dd>{current.scheduled_for.clone().unwrap_or_else(|| "Not scheduled".to_owned())}</dd>
                            <dt>"Site"</dt>
                            <dd>{site_link}</dd>
                        </dl>
                        <div class="task-summary__actions">
                            {states
                                .into_iter()
                                .map(|state| {
                                    let ActionState { action, blocker } = state;
                                    let blocked = blocker.is_some();
                                    view! {
                                        <button
                                            class="btn btn--primary"
                                            disabled=blocked
                                            on:click=move |_| on_action(action)
                                        >
                                            {action.label()}
                                        </button>
                                        {blocker.map(|why| view! { <span class="task-summary__hint">{why}</span> })}
                                    }
                                })
                                .collect::<Vec<_>>()}
                            {(role == Role::Admin)
                                .then(|| {
                                    view! {
                                        <button class="btn btn--danger" on:click=move |_| deleting.set(true)>
                                            "Delete task"
                                        </button>
                                    }
                                })}
                        </div>
                    </section>
                    {assignable
                        .then(|| {
                            view! {
                                <section class="panel">
                                    <h2>"Assignment"</h2>
                                    <SelectField
                                        label="Worker"
                                        value=chosen_worker
                                        options=worker_options
                                        blank="Choose a worker"
                                    />
                                    <button class="btn btn--primary" on:click=on_assign>
                                        "Assign"
                                    </button>
                                </section>
                            }
                        })}
                    {photo_section(PhotoKind::Before, &current, role, on_photos)}
                    {photo_section(PhotoKind::After, &current, role, on_photos)}
                    {feedback_open
                        .then(|| {
                            view! {
                                <section class="panel">
                                    <h2>"Rate this visit"</h2>
                                    <form class="feedback-form" on:submit=on_feedback>
                                        <SelectField
                                            label="Rating"
                                            value=rating
                                            options=Signal::derive(|| {
                                                (1..=5u8)
                                                    .rev()
                                                    .map(|n| (n.to_string(), crate::util::format::stars(n)))
                                                    .collect::<Vec<_>>()
                                            })
                                        />
                                        <TextArea label="Comment" value=comment/>
                                        <button class="btn btn--primary" type="submit">
                                            "Send feedback"
                                        </button>
                                    </form>
                                </section>
                            }
                        })}
                }
                    .into_any()
            }}
            {move || {
                confirming
                    .get()
                    .map(|action| {
                        view! {
                            <ConfirmDialog
                                title=action.label().to_owned()
                                message=format!("{}? The task will move to {}.", action.label(), action.target().label())
                                confirm_label=action.label()
                                on_confirm=Callback::new(move |()| run_action(action))
                                on_cancel=Callback::new(move |()| confirming.set(None))
                            />
                        }
                    })
            }}
            <Show when=move || deleting.get()>
                <ConfirmDialog
                    title="Delete task".to_owned()
                    message="Delete this task and its photos?".to_owned()
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |()| deleting.set(false))
                />
            </Show>
        </PageFrame>
    }
}
