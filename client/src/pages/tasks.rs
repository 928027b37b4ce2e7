//! Task list with status filter; admins create tasks here.
//!
//! DESIGN
//! ======
//! The status filter narrows server-side (`GET /tasks?status=`) and scopes the
//! request to the signed-in worker or client. The search box narrows the
//! fetched page locally. Reference images are uploaded first and attached to
//! the new task by media id, each with the quantity of items it stands for.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use leptos::prelude::*;

use crate::components::form_dialog::FormDialog;
use crate::components::form_field::{SelectField, TextArea, TextField};
use crate::components::list_controls::{Pager, SearchBox};
use crate::components::page_frame::PageFrame;
use crate::components::photo_upload::{PhotoUpload, UploadResult, UploadTarget};
use crate::components::status_badge::TaskStatusBadge;
use crate::net::api;
use crate::net::types::{MediaAsset, ReferenceImageDraft, Role, Site, Task, TaskDraft, TaskFilter, TaskStatus, Worker};
use crate::pages::loader::{Actions, Listing, Loaded, install_loader};
use crate::state::auth::AuthState;
use crate::util::auth::ALL_ROLES;
use crate::util::forms;

/// Server-side filter for the signed-in user: workers see their own tasks,
/// clients the tasks at their sites, admins everything.
#[must_use]
pub fn scoped_filter(state: &AuthState, status: Option<TaskStatus>) -> TaskFilter {
    let user_id = state.user().map(|u| u.id.clone());
    match state.role() {
        Some(Role::Worker) => TaskFilter { status, worker_id: user_id, ..TaskFilter::default() },
        Some(Role::Client) => TaskFilter { status, client_id: user_id, ..TaskFilter::default() },
        _ => TaskFilter { status, ..TaskFilter::default() },
    }
}

/// An uploaded reference image waiting to be attached to a new task.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceRow {
    pub media: MediaAsset,
    pub label: String,
    pub quantity: String,
}

impl From<MediaAsset> for ReferenceRow {
    fn from(media: MediaAsset) -> Self {
        Self { media, label: String::new(), quantity: "1".to_owned() }
    }
}

/// # Errors
///
/// A message naming the first row whose quantity is not a whole number of
/// at least one.
pub fn reference_drafts(rows: &[ReferenceRow]) -> Result<Vec<ReferenceImageDraft>, String> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let label = format!("Quantity for reference {}", i + 1);
            match forms::parse_quantity(&label, &row.quantity)? {
                0 => Err(format!("{label} must be at least 1.")),
                quantity => Ok(ReferenceImageDraft {
                    media_id: row.media.id.clone(),
                    label: forms::optional(&row.label),
                    quantity,
                }),
            }
        })
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
    pub site_id: String,
    pub section_id: String,
    pub worker_id: String,
    pub scheduled_for: String,
    pub references: Vec<ReferenceRow>,
}

impl TaskInput {
    /// # Errors
    ///
    /// The first field message.
    pub fn to_draft(&self) -> Result<TaskDraft, String> {
        let title = forms::required("Title", &self.title)?;
        if self.site_id.trim().is_empty() {
            return Err("Choose a site.".to_owned());
        }
        Ok(TaskDraft {
            title,
            description: forms::optional(&self.description),
            site_id: self.site_id.trim().to_owned(),
            section_id: forms::optional(&self.section_id),
            worker_id: forms::optional(&self.worker_id),
            scheduled_for: forms::optional(&self.scheduled_for),
            reference_images: reference_drafts(&self.references)?,
        })
    }
}

/// `(id, name)` pairs of the sections of `site_id`.
#[must_use]
pub fn section_options(sites: &[Site], site_id: &str) -> Vec<(String, String)> {
    sites
        .iter()
        .find(|s| s.id == site_id)
        .map(|s| s.sections.iter().map(|sec| (sec.id.clone(), sec.name.clone())).collect())
        .unwrap_or_default()
}

/// Worker name for a task row.
#[must_use]
pub fn worker_label(workers: &[Worker], worker_id: Option<&str>) -> String {
    match worker_id {
        None => "Unassigned".to_owned(),
        Some(id) => workers
            .iter()
            .find(|w| w.id == id)
            .map_or_else(|| id.to_owned(), |w| w.name.clone()),
    }
}

#[component]
fn TaskCreator(
    sites: Signal<Vec<Site>>,
    workers: Signal<Vec<Worker>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let actions = Actions::from_context();
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let site_id = RwSignal::new(String::new());
    let section_id = RwSignal::new(String::new());
    let worker_id = RwSignal::new(String::new());
    let scheduled_for = RwSignal::new(String::new());
    let references = RwSignal::new(Vec::<ReferenceRow>::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let site_options =
        Signal::derive(move || sites.get().into_iter().map(|s| (s.id, s.name)).collect::<Vec<_>>());
    let sections = Signal::derive(move || section_options(&sites.get(), &site_id.get()));
    let worker_options = Signal::derive(move || {
        workers.get().into_iter().filter(|w| w.active).map(|w| (w.id, w.name)).collect::<Vec<_>>()
    });
    Effect::new(move || {
        site_id.track();
        section_id.set(String::new());
    });

    let on_uploaded = Callback::new(move |result: UploadResult| {
        if let UploadResult::Media(assets) = result {
            references.update(|rows| rows.extend(assets.into_iter().map(ReferenceRow::from)));
        }
    });

    let on_submit = Callback::new(move |()| {
        let input = TaskInput {
            title: title.get_untracked(),
            description: description.get_untracked(),
            site_id: site_id.get_untracked(),
            section_id: section_id.get_untracked(),
            worker_id: worker_id.get_untracked(),
            scheduled_for: scheduled_for.get_untracked(),
            references: references.get_untracked(),
        };
        let draft = match input.to_draft() {
            Ok(draft) => draft,
            Err(msg) => {
                error.set(msg);
                return;
            }
        };
        error.set(String::new());
        busy.set(true);
        actions.run_then(
            move |client| async move { api::create_task(&client, &draft).await },
            move |result| {
                busy.set(false);
                match result {
                    Ok(task) => {
                        actions.success(format!("Created {}", task.title));
                        on_saved.run(());
                    }
                    Err(err) => {
                        error.set(err.user_message());
                        actions.report(&err);
                    }
                }
            },
        );
    });

    view! {
        <FormDialog
            title="New task".to_owned()
            error=error
            busy=busy
            on_submit=on_submit
            on_cancel=on_cancel
        >
            <TextField label="Title" value=title/>
            <TextArea label="Description" value=description/>
            <SelectField label="Site" value=site_id options=site_options blank="Choose a site"/>
            <SelectField label="Section" value=section_id options=sections blank="Whole site"/>
            <SelectField label="Worker" value=worker_id options=worker_options blank="Unassigned"/>
            <TextField label="Scheduled for" value=scheduled_for kind="date"/>
            <fieldset class="references">
                <legend>"Reference images"</legend>
                {move || {
                    references
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, row)| {
                            view! {
                                <div class="references__row">
                                    <img class="references__thumb" src=row.media.url alt="Reference"/>
                                    <input
                                        class="field__input"
                                        placeholder="Label"
                                        prop:value=row.label
                                        on:input=move |ev| {
                                            let text = event_target_value(&ev);
                                            references.update(|rows| {
                                                if let Some(r) = rows.get_mut(index) {
                                                    r.label = text;
                                                }
                                            });
                                        }
                                    />
                                    <input
                                        class="field__input field__input--narrow"
                                        type="number"
                                        min="1"
                                        prop:value=row.quantity
                                        on:input=move |ev| {
                                            let text = event_target_value(&ev);
                                            references.update(|rows| {
                                                if let Some(r) = rows.get_mut(index) {
                                                    r.quantity = text;
                                                }
                                            });
                                        }
                                    />
                                    <button
                                        class="btn"
                                        type="button"
                                        on:click=move |_| {
                                            references.update(|rows| {
                                                if index < rows.len() {
                                                    rows.remove(index);
                                                }
                                            });
                                        }
                                    >
                                        "Remove"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <PhotoUpload label="Add reference images" target=UploadTarget::Media on_done=on_uploaded/>
            </fieldset>
        </FormDialog>
    }
}

#[component]
pub fn TasksPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let is_admin = move || auth.get().role() == Some(Role::Admin);
    let status = RwSignal::new(None::<TaskStatus>);

    let tasks = Loaded::new(Vec::<Task>::new());
    install_loader(tasks, move |client| {
        let filter = scoped_filter(&auth.get_untracked(), status.get());
        async move { api::list_tasks(&client, &filter).await }
    });
    let sites = Loaded::new(Vec::<Site>::new());
    install_loader(sites, move |client| {
        let admin = auth.get_untracked().role() == Some(Role::Admin);
        async move { if admin { api::list_sites(&client, None).await } else { Ok(Vec::new()) } }
    });
    let workers = Loaded::new(Vec::<Worker>::new());
    install_loader(workers, move |client| {
        let admin = auth.get_untracked().role() == Some(Role::Admin);
        async move { if admin { api::list_workers(&client).await } else { Ok(Vec::new()) } }
    });
    let listing = Listing::new(move || tasks.value.get());

    let creating = RwSignal::new(false);
    let close_creator = Callback::new(move |()| creating.set(false));
    let after_create = Callback::new(move |()| {
        creating.set(false);
        tasks.refresh();
    });

    view! {
        <PageFrame title="Tasks" allowed=&ALL_ROLES>
            <div class="toolbar-row">
                <SearchBox query=listing.query page=listing.page placeholder="Search tasks…"/>
                <select
                    class="field__input"
                    on:change=move |ev| {
                        status.set(TaskStatus::parse(&event_target_value(&ev)));
                        listing.page.set(1);
                    }
                >
                    <option value="">"All statuses"</option>
                    {TaskStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <Show when=is_admin>
                    <button class="btn btn--primary" on:click=move |_| creating.set(true)>
                        "New task"
                    </button>
                </Show>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Task"</th>
                        <th>"Status"</th>
                        <th>"Scheduled"</th>
                        <Show when=is_admin>
                            <th>"Worker"</th>
                        </Show>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let admin = is_admin();
                        let known_workers = workers.value.get();
                        listing
                            .items()
                            .into_iter()
                            .map(|task| {
                                let href = format!("/tasks/{}", task.id);
                                let worker = worker_label(&known_workers, task.worker_id.as_deref());
                                view! {
                                    <tr>
                                        <td>
                                            <a href=href>{task.title}</a>
                                        </td>
                                        <td>
                                            <TaskStatusBadge status=task.status/>
                                        </td>
                                        <td>{task.scheduled_for.unwrap_or_default()}</td>
                                        {admin.then(|| view! { <td>{worker}</td> })}
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
            <Pager
                page=listing.page
                total_pages=listing.total_pages()
                range=listing.range()
                total=listing.total()
            />
            <Show when=move || creating.get()>
                <TaskCreator
                    sites=Signal::derive(move || sites.value.get())
                    workers=Signal::derive(move || workers.value.get())
                    on_saved=after_create
                    on_cancel=close_creator
                />
            </Show>
        </PageFrame>
    }
}
