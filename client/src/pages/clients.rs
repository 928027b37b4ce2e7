//! Admin client directory: search, page, create, edit, delete.

#[cfg(test)]
#[path = "clients_test.rs"]
mod clients_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::form_dialog::FormDialog;
use crate::components::form_field::{CheckField, TextArea, TextField};
use crate::components::list_controls::{Pager, SearchBox};
use crate::components::page_frame::PageFrame;
use crate::net::api;
use crate::net::types::{Client, ClientDraft};
use crate::pages::loader::{Actions, Listing, Loaded, install_loader};
use crate::util::auth::ADMIN_ONLY;
use crate::util::forms;

/// Raw text of the client form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub notes: String,
    pub active: bool,
}

impl ClientInput {
    pub fn blank() -> Self {
        Self { active: true, ..Self::default() }
    }

    /// # Errors
    ///
    /// The first field message: missing name or malformed email.
    pub fn to_draft(&self) -> Result<ClientDraft, String> {
        Ok(ClientDraft {
            name: forms::required("Name", &self.name)?,
            email: forms::email(&self.email)?,
            phone: forms::optional(&self.phone),
            address: forms::optional(&self.address),
            notes: forms::optional(&self.notes),
            active: self.active,
        })
    }
}

impl From<&Client> for ClientInput {
    fn from(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            email: client.email.clone(),
            phone: client.phone.clone().unwrap_or_default(),
            address: client.address.clone().unwrap_or_default(),
            notes: client.notes.clone().unwrap_or_default(),
            active: client.active,
        }
    }
}

#[derive(Clone, Copy)]
struct ClientFields {
    name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    address: RwSignal<String>,
    notes: RwSignal<String>,
    active: RwSignal<bool>,
}

impl ClientFields {
    fn new(input: ClientInput) -> Self {
        Self {
            name: RwSignal::new(input.name),
            email: RwSignal::new(input.email),
            phone: RwSignal::new(input.phone),
            address: RwSignal::new(input.address),
            notes: RwSignal::new(input.notes),
            active: RwSignal::new(input.active),
        }
    }

    fn read(self) -> ClientInput {
        ClientInput {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
            address: self.address.get_untracked(),
            notes: self.notes.get_untracked(),
            active: self.active.get_untracked(),
        }
    }
}

#[component]
fn ClientEditor(existing: Option<Client>, on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let actions = Actions::from_context();
    let title = existing.as_ref().map_or_else(|| "New client".to_owned(), |c| format!("Edit {}", c.name));
    let id = existing.as_ref().map(|c| c.id.clone());
    let fields = ClientFields::new(existing.as_ref().map_or_else(ClientInput::blank, ClientInput::from));
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = Callback::new(move |()| {
        let draft = match fields.read().to_draft() {
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
                    Some(id) => api::update_client(&client, &id, &draft).await,
                    None => api::create_client(&client, &draft).await,
                }
            },
            move |result| {
                busy.set(false);
                match result {
                    Ok(saved) => {
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
            <TextField label="Address" value=fields.address/>
            <TextArea label="Notes" value=fields.notes/>
            <CheckField label="Active" value=fields.active/>
        </FormDialog>
    }
}

#[component]
pub fn ClientsPage() -> impl IntoView {
    let actions = Actions::from_context();
    let clients = Loaded::new(Vec::<Client>::new());
    install_loader(clients, |client| async move { api::list_clients(&client).await });
    let listing = Listing::new(move || clients.value.get());

    // Some(None) while creating, Some(Some(client)) while editing.
    let editing = RwSignal::new(None::<Option<Client>>);
    let deleting = RwSignal::new(None::<Client>);

    let close_editor = Callback::new(move |()| editing.set(None));
    let after_save = Callback::new(move |()| {
        editing.set(None);
        clients.refresh();
    });
    let confirm_delete = Callback::new(move |()| {
        let Some(target) = deleting.get_untracked() else {
            return;
        };
        deleting.set(None);
        let id = target.id.clone();
        actions.run(
            move |client| async move { api::delete_client(&client, &id).await },
            move |()| {
                actions.success(format!("Deleted {}", target.name));
                clients.refresh();
            },
        );
    });

    view! {
        <PageFrame title="Clients" allowed=&ADMIN_ONLY>
            <div class="toolbar-row">
                <SearchBox query=listing.query page=listing.page placeholder="Search clients…"/>
                <button class="btn btn--primary" on:click=move |_| editing.set(Some(None))>
                    "New client"
                </button>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Phone"</th>
                        <th>"Address"</th>
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
                                        <td>{row.address.unwrap_or_default()}</td>
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
                        view! { <ClientEditor existing=existing on_saved=after_save on_cancel=close_editor/> }
                    })
            }}
            {move || {
                deleting
                    .get()
                    .map(|target| {
                        view! {
                            <ConfirmDialog
                                title="Delete client".to_owned()
                                message=format!("Delete {} and all of their records?", target.name)
                                on_confirm=confirm_delete
                                on_cancel=Callback::new(move |()| deleting.set(None))
                            />
                        }
                    })
            }}
        </PageFrame>
    }
}
