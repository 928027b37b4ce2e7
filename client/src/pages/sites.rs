//! Site list. Admins see and manage every site; clients see their own.

#[cfg(test)]
#[path = "sites_test.rs"]
mod sites_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::form_dialog::FormDialog;
use crate::components::form_field::{SelectField, TextArea, TextField};
use crate::components::list_controls::{Pager, SearchBox};
use crate::components::page_frame::PageFrame;
use crate::net::api;
use crate::net::types::{Client, Role, Site, SiteDraft};
use crate::pages::loader::{Actions, Listing, Loaded, install_loader};
use crate::state::auth::AuthState;
use crate::util::format::count_label;
use crate::util::forms;

const SITE_ROLES: [Role; 2] = [Role::Admin, Role::Client];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteInput {
    pub client_id: String,
    pub name: String,
    pub address: String,
    pub notes: String,
}

impl SiteInput {
    /// # Errors
    ///
    /// The first missing required field.
    pub fn to_draft(&self) -> Result<SiteDraft, String> {
        if self.client_id.trim().is_empty() {
            return Err("Choose a client.".to_owned());
        }
        Ok(SiteDraft {
            client_id: self.client_id.trim().to_owned(),
            name: forms::required("Name", &self.name)?,
            address: forms::required("Address", &self.address)?,
            notes: forms::optional(&self.notes),
        })
    }
}

impl From<&Site> for SiteInput {
    fn from(site: &Site) -> Self {
        Self {
            client_id: site.client_id.clone(),
            name: site.name.clone(),
            address: site.address.clone(),
            notes: site.notes.clone().unwrap_or_default(),
        }
    }
}

/// Client name for a site row, falling back to the raw id.
#[must_use]
pub fn client_name(clients: &[Client], client_id: &str) -> String {
    clients
        .iter()
        .find(|c| c.id == client_id)
        .map_or_else(|| client_id.to_owned(), |c| c.name.clone())
}

#[component]
fn SiteEditor(
    existing: Option<Site>,
    clients: Signal<Vec<(String, String)>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let actions = Actions::from_context();
    let title = existing.as_ref().map_or_else(|| "New site".to_owned(), |s| format!("Edit {}", s.name));
    let id = existing.as_ref().map(|s| s.id.clone());
    let input = existing.as_ref().map(SiteInput::from).unwrap_or_default();
    let client_id = RwSignal::new(input.client_id);
    let name = RwSignal::new(input.name);
    let address = RwSignal::new(input.address);
    let notes = RwSignal::new(input.notes);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = Callback::new(move |()| {
        let input = SiteInput {
            client_id: client_id.get_untracked(),
            name: name.get_untracked(),
            address: address.get_untracked(),
            notes: notes.get_untracked(),
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
        let id = id.clone();
        actions.run_then(
            move |client| async move {
                match id {
                    Some(id) => api::update_site(&client, &id, &draft).await,
                    None => api::create_site(&client, &draft).await,
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
            <SelectField label="Client" value=client_id options=clients blank="Choose a client"/>
            <TextField label="Name" value=name/>
            <TextField label="Address" value=address/>
            <TextArea label="Notes" value=notes/>
        </FormDialog>
    }
}

#[component]
pub fn SitesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let actions = Actions::from_context();
    let is_admin = move || auth.get().role() == Some(Role::Admin);

    let sites = Loaded::new(Vec::<Site>::new());
    install_loader(sites, move |client| {
        let state = auth.get_untracked();
        let own = (state.role() == Some(Role::Client)).then(|| state.user().map(|u| u.id.clone())).flatten();
        async move { api::list_sites(&client, own.as_deref()).await }
    });
    let clients = Loaded::new(Vec::<Client>::new());
    install_loader(clients, move |client| {
        let admin = auth.get_untracked().role() == Some(Role::Admin);
        async move { if admin { api::list_clients(&client).await } else { Ok(Vec::new()) } }
    });
    let client_options = Signal::derive(move || {
        clients.value.get().into_iter().map(|c| (c.id, c.name)).collect::<Vec<_>>()
    });
    let listing = Listing::new(move || sites.value.get());

    let editing = RwSignal::new(None::<Option<Site>>);
    let deleting = RwSignal::new(None::<Site>);
    let close_editor = Callback::new(move |()| editing.set(None));
    let after_save = Callback::new(move |()| {
        editing.set(None);
        sites.refresh();
    });
    let confirm_delete = Callback::new(move |()| {
        let Some(target) = deleting.get_untracked() else {
            return;
        };
        deleting.set(None);
        let id = target.id.clone();
        actions.run(
            move |client| async move { api::delete_site(&client, &id).await },
            move |()| {
                actions.success(format!("Deleted {}", target.name));
                sites.refresh();
            },
        );
    });

    view! {
        <PageFrame title="Sites" allowed=&SITE_ROLES>
            <div class="toolbar-row">
                <SearchBox query=listing.query page=listing.page placeholder="Search sites…"/>
                <Show when=is_admin>
                    <button class="btn btn--primary" on:click=move |_| editing.set(Some(None))>
                        "New site"
                    </button>
                </Show>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Site"</th>
                        <th>"Address"</th>
                        <Show when=is_admin>
                            <th>"Client"</th>
                        </Show>
                        <th>"Sections"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let admin = is_admin();
                        let known_clients = clients.value.get();
                        listing
                            .items()
                            .into_iter()
                            .map(|row| {
                                let href = format!("/sites/{}", row.id);
                                let owner = client_name(&known_clients, &row.client_id);
                                let sections = count_label(row.sections.len(), "section", "sections");
                                let edit_row = row.clone();
                                let delete_row = row.clone();
                                view! {
                                    <tr>
                                        <td>
                                            <a href=href>{row.name}</a>
                                        </td>
                                        <td>{row.address}</td>
                                        {admin.then(|| view! { <td>{owner}</td> })}
                                        <td>{sections}</td>
                                        <td class="table__actions">
                                            {admin
                                                .then(|| {
                                                    view! {
                                                        <button
                                                            class="btn"
                                                            on:click=move |_| editing.set(Some(Some(edit_row.clone())))
                                                        >
                                                            "Edit"
                                                        </button>
                                                        <button
                                                            class="btn btn--danger"
                                                            on:click=move |_| deleting.set(Some(delete_row.clone()))
                                                        >
                                                            "Delete"
                                                        </button>
                                                    }
                                                })}
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
                        view! {
                            <SiteEditor
                                existing=existing
                                clients=client_options
                                on_saved=after_save
                                on_cancel=close_editor
                            />
                        }
                    })
            }}
            {move || {
                deleting
                    .get()
                    .map(|target| {
                        view! {
                            <ConfirmDialog
                                title="Delete site".to_owned()
                                message=format!("Delete {} with its sections?", target.name)
                                on_confirm=confirm_delete
                                on_cancel=Callback::new(move |()| deleting.set(None))
                            />
                        }
                    })
            }}
        </PageFrame>
    }
}
