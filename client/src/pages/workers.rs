//! Admin worker roster: search, page, create, edit, delete.
//!
//! New workers need an initial password; on edit a blank password leaves the
//! current one unchanged.

#[cfg(test)]
#[path = "workers_test.rs"]
mod workers_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::form_dialog::FormDialog;
use crate::components::form_field::{CheckField, TextField};
use crate::components::list_controls::{Pager, SearchBox};
use crate::components::page_frame::PageFrame;
use crate::net::api;
use crate::net::types::{Worker, WorkerDraft};
use crate::pages::loader::{Actions, Listing, Loaded, install_loader};
use crate::util::auth::ADMIN_ONLY;
use crate::util::forms;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkerInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialty: String,
    pub password: String,
    pub active: bool,
}

impl WorkerInput {
    pub fn blank() -> Self {
        Self { active: true, ..Self::default() }
    }

    /// `is_new` makes the password mandatory.
    ///
    /// # Errors
    ///
    /// The first field message.
    pub fn to_draft(&self, is_new: bool) -> Result<WorkerDraft, String> {
        let name = forms::required("Name", &self.name)?;
        let email = forms::email(&self.email)?;
        let password = match (is_new, self.password.is_empty()) {
            (true, true) => return Err("Password is required.".to_owned()),
            (false, true) => None,
            (_, false) if self.password.chars().count() < MIN_PASSWORD_LEN => {
                return Err(format!("Password must be at least {MIN_PASSWORD_LEN} characters."));
            }
            (_, false) => Some(self.password.clone()),
        };
        Ok(WorkerDraft {
            name,
            email,
            phone: forms::optional(&self.phone),
            specialty: forms::optional(&self.specialty),
            active: self.active,
            password,
        })
    }
}

impl From<&Worker> for WorkerInput {
    fn from(worker: &Worker) -> Self {
        Self {
            name: worker.name.clone(),
            email: worker.email.clone(),
            phone: worker.phone.clone().unwrap_or_default(),
            specialty: worker.specialty.clone().unwrap_or_default(),
            password: String::new(),
            active: worker.active,
        }
    }
}

#[derive(Clone, Copy)]
struct WorkerFields {
    name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    specialty: RwSignal<String>,
    password: RwSignal<String>,
    active: RwSignal<bool>,
}

impl WorkerFields {
    fn new(input: WorkerInput) -> Self {
        Self {
            name: RwSignal::new(input.name),
            email: RwSignal::new(input.email),
            phone: RwSignal::new(input.phone),
            specialty: RwSignal::new(input.specialty),
            password: RwSignal::new(input.password),
            active: RwSignal::new(input.active),
        }
    }

    fn read(self) -> WorkerInput {
        WorkerInput {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
            specialty: self.specialty.get_untracked(),
            password: self.password.get_untracked(),
            active: self.active.get_untracked(),
        }
    }
}

#[component]
fn WorkerEditor(existing: Option<Worker>, on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let actions = Actions::from_context();
    let title = existing.as_ref().map_or_else(|| "New worker".to_owned(), |w| format!("Edit {}", w.name));
    let id = existing.as_ref().map(|w| w.id.clone());
    let fields = WorkerFields::new(existing.as_ref().map_or_else(WorkerInput::blank, WorkerInput::from));
    let password_label = if id.is_some() { "New password (optional)" } else { "Password" };
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = Callback::new(move |()| {
        let draft = match fields.read().to_draft(id.is_none()) {
            Ok(draft) => draft,
            Err(msg) => {
                error.set(msg);
                return;
            }
        };
        error.set(String::new());
        busy.set(true);
        let id = id.clone();
        actions.run_then(
            move |client| async move {
                match id {
                    Some(id) => api::update_worker(&client, &id, &draft).await,
                    None => api::create_worker(&client, &draft).await,
                }
            },
            move |result| {
                busy.set(false);
                match result {
                    Ok(saved) => {
                        fields.password.set(String::new());
                        actions.success(format!("Saved {}", saved.name));
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
        <FormDialog title=title error=error busy=busy on_submit=on_submit on_cancel=on_cancel>
            <TextField label="Name" value=fields.name/>
            <TextField label="Email" value=fields.email kind="email"/>
            <TextField label="Phone" value=fields.phone kind="tel"/>
            <TextField label="Specialty" value=fields.specialty placeholder="Hedges, irrigation…"/>
            <TextField label=password_label value=fields.password kind="password"/>
            <CheckField label="Active" value=fields.active/>
        </FormDialog>
    }
}

#[component]
pub fn WorkersPage() -> impl IntoView {
    let actions = Actions::from_context();
    let workers = Loaded::new(Vec::<Worker>::new());
    install_loader(workers, |client| async move { api::list_workers(&client).await });
    let listing = Listing::new(move || workers.value.get());

    // Some(None) while creating, Some(Some(worker)) while editing.
    let editing = RwSignal::new(None::<Option<Worker>>);
    let deleting = RwSignal::new(None::<Worker>);

    let close_editor = Callback::new(move |()| editing.set(None));
    let after_save = Callback::new(move |()| {
        editing.set(None);
        workers.refresh();
    });
    let confirm_delete = Callback::new(move |()| {
        let Some(target) = deleting.get_untracked() else {
            return;
        };
        deleting.set(None);
        let id = target.id.clone();
        actions.run(
            move |client| async move { api::delete_worker(&client, &id).await },
            move |()| {
                actions.success(format!("Deleted {}", target.name));
                workers.refresh();
            },
        );
    });

    view! {
        <PageFrame title="Workers" allowed=&ADMIN_ONLY>
            <div class="toolbar-row">
                <SearchBox query=listing.query page=listing.page placeholder="Search workers…"/>
                <button class="btn btn--primary" on:click=move |_| editing.set(Some(None))>
                    "New worker"
                </button>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Phone"</th>
                        <th>"Specialty"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        listing
                            .items()
                            .into_iter()
                            .map(|row| {
                                let edit_row = row.clone();
                                let delete_row = row.clone();
                                view! {
                                    <tr class:table__row--inactive=!row.active>
                                        <td>{row.name}</td>
                                        <td>{row.email}</td>
                                        <td>{row.phone.unwrap_or_default()}</td>
                                        <td>{row.specialty.unwrap_or_default()}</td>
                                        <td>{if row.active { "Active" } else { "Inactive" }}</td>
                                        <td class="table__actions">
                                            <button class="btn" on:click=move |_| editing.set(Some(Some(edit_row.clone())))>
                                                "Edit"
                                            </button>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| deleting.set(Some(delete_row.clone()))
                                            >
                                                "Delete"
                                            </button>
                                        </td>
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
            {move || {
                editing
                    .get()
                    .map(|existing| {
                        view! { <WorkerEditor existing=existing on_saved=after_save on_cancel=close_editor/> }
                    })
            }}
            {move || {
                deleting
                    .get()
                    .map(|target| {
                        view! {
                            <ConfirmDialog
                                title="Delete worker".to_owned()
                                message=format!("Delete {}? Tasks assigned to them become unassigned.", target.name)
                                on_confirm=confirm_delete
                                on_cancel=Callback::new(move |()| deleting.set(None))
                            />
                        }
                    })
            }}
        </PageFrame>
    }
}
