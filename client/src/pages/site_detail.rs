//! One site: its sections (managed by admins) and the tasks scheduled there.

#[cfg(test)]
#[path = "site_detail_test.rs"]
mod site_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::form_dialog::FormDialog;
use crate::components::form_field::{TextArea, TextField};
use crate::components::page_frame::PageFrame;
use crate::components::task_card::TaskCard;
use crate::net::api;
use crate::net::types::{Role, Section, SectionDraft, Site, Task, TaskFilter};
use crate::pages::loader::{Actions, Loaded, install_loader};
use crate::state::auth::AuthState;
use crate::util::forms;
use crate::util::task_flow::sort_by_schedule;

const SITE_ROLES: [Role; 2] = [Role::Admin, Role::Client];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionInput {
    pub name: String,
    pub area: String,
    pub notes: String,
}

impl SectionInput {
    /// # Errors
    ///
    /// Missing name or a non-positive area.
    pub fn to_draft(&self) -> Result<SectionDraft, String> {
        Ok(SectionDraft {
            name: forms::required("Name", &self.name)?,
            area_sqm: forms::parse_area(&self.area)?,
            notes: forms::optional(&self.notes),
        })
    }
}

impl From<&Section> for SectionInput {
    fn from(section: &Section) -> Self {
        Self {
            name: section.name.clone(),
            area: section.area_sqm.map(|a| a.to_string()).unwrap_or_default(),
            notes: section.notes.clone().unwrap_or_default(),
        }
    }
}

/// `"120 m²"`, or a dash when unsurveyed.
#[must_use]
pub fn area_label(area_sqm: Option<f64>) -> String {
    area_sqm.map_or_else(|| "—".to_owned(), |a| format!("{a} m²"))
}

/// Tasks per section id, for the section table's task column.
#[must_use]
pub fn tasks_in_section(tasks: &[Task], section_id: &str) -> usize {
    tasks.iter().filter(|t| t.section_id.as_deref() == Some(section_id)).count()
}

#[component]
fn SectionEditor(
    site_id: String,
    existing: Option<Section>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let actions = Actions::from_context();
    let title = existing.as_ref().map_or_else(|| "New section".to_owned(), |s| format!("Edit {}", s.name));
    let id = existing.as_ref().map(|s| s.id.clone());
    let input = existing.as_ref().map(SectionInput::from).unwrap_or_default();
    let name = RwSignal::new(input.name);
    let area = RwSignal::new(input.area);
    let notes = RwSignal::new(input.notes);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = Callback::new(move |()| {
        let input = SectionInput { name: name.get_untracked(), area: area.get_untracked(), notes: notes.get_untracked() };
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
        let site_id = site_id.clone();
        actions.run_then(
            move |client| async move {
                match id {
                    Some(id) => api::update_section(&client, &id, &draft).await,
                    None => api::create_section(&client, &site_id, &draft).await,
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
            <TextField label="Name" value=name/>
            <TextField label="Area (m²)" value=area kind="number"/>
            <TextArea label="Notes" value=notes/>
        </FormDialog>
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct SiteView {
    site: Option<Site>,
    tasks: Vec<Task>,
}

#[component]
pub fn SiteDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let actions = Actions::from_context();
    let params = use_params_map();
    let site_id = move || params.read().get("id").unwrap_or_default();
    let is_admin = move || auth.get().role() == Some(Role::Admin);

    let detail = Loaded::new(SiteView::default());
    install_loader(detail, move |client| {
        let id = site_id();
        async move {
            let site = api::get_site(&client, &id).await?;
            let filter = TaskFilter { site_id: Some(id), ..TaskFilter::default() };
            let mut tasks = api::list_tasks(&client, &filter).await?;
            sort_by_schedule(&mut tasks);
            Ok(SiteView { site: Some(site), tasks })
        }
    });

    let editing = RwSignal::new(None::<Option<Section>>);
    let deleting = RwSignal::new(None::<Section>);
    let close_editor = Callback::new(move |()| editing.set(None));
    let after_save = Callback::new(move |()| {
        editing.set(None);
        detail.refresh();
    });
    let confirm_delete = Callback::new(move |()| {
        let Some(target) = deleting.get_untracked() else {
            return;
        };
        deleting.set(None);
        let id = target.id.clone();
        actions.run(
            move |client| async move { api::delete_section(&client, &id).await },
            move |()| {
                actions.success(format!("Deleted {}", target.name));
                detail.refresh();
            },
        );
    });

    view! {
        <PageFrame title="Site" allowed=&SITE_ROLES>
            {move || {
                let SiteView { site, tasks } = detail.value.get();
                let Some(site) = site else {
                    let text = if detail.loading.get() { "Loading..." } else { "Site not found." };
                    return view! { <p class="page__placeholder">{text}</p> }.into_any();
                };
                let admin = is_admin();
                let sections = site.sections.clone();
                view! {
                    <section class="panel">
                        <h2>{site.name.clone()}</h2>
                        <p class="site__address">{site.address.clone()}</p>
                        {site.notes.clone().map(|notes| view! { <p class="site__notes">{notes}</p> })}
                    </section>
                    <section class="panel">
                        <div class="toolbar-row">
                            <h2>"Sections"</h2>
                            {admin
                                .then(|| {
                                    view! {
                                        <button class="btn btn--primary" on:click=move |_| editing.set(Some(None))>
                                            "Add section"
                                        </button>
                                    }
                                })}
                        </div>
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Area"</th>
                                    <th>"Tasks"</th>
                                    <th>"Notes"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {sections
                                    .into_iter()
                                    .map(|section| {
                                        let task_count = tasks_in_section(&tasks, &section.id);
                                        let edit_row = section.clone();
                                        let delete_row = section.clone();
                                        view! {
                                            <tr>
                                                <td>{section.name}</td>
                                                <td>{area_label(section.area_sqm)}</td>
                                                <td>{task_count}</td>
                                                <td>{section.notes.unwrap_or_default()}</td>
                                                <td class="table__actions">
                                                    {admin
                                                        .then(|| {
                                                            view! {
                                                                <button
                                                                    class="btn"
                                                                    on:click=move |_| {
                                                                        editing.set(Some(Some(edit_row.clone())));
                                                                    }
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
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    </section>
                    <section class="panel">
                        <h2>"Tasks at this site"</h2>
                        {if tasks.is_empty() {
                            view! { <p class="empty">"No tasks yet."</p> }.into_any()
                        } else {
                            tasks
                                .into_iter()
                                .map(|task| view! { <TaskCard task=task/> })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </section>
                }
                    .into_any()
            }}
            {move || {
                editing
                    .get()
                    .map(|existing| {
                        view! {
                            <SectionEditor
                                site_id=site_id()
                                existing=existing
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
                                title="Delete section".to_owned()
                                message=format!("Delete section {}?", target.name)
                                on_confirm=confirm_delete
                                on_cancel=Callback::new(move |()| deleting.set(None))
                            />
                        }
                    })
            }}
        </PageFrame>
    }
}
