//! Inventory: stock levels with threshold badges, create/edit, and
//! adjustments recorded with a reason.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::form_dialog::FormDialog;
use crate::components::form_field::{CheckField, TextField};
use crate::components::list_controls::{Pager, SearchBox};
use crate::components::page_frame::PageFrame;
use crate::components::status_badge::StockBadge;
use crate::net::api;
use crate::net::types::{InventoryDraft, InventoryItem};
use crate::pages::loader::{Actions, Listing, Loaded, install_loader};
use crate::util::auth::ADMIN_ONLY;
use crate::util::forms;
use crate::util::stock::{apply_adjustment, item_status};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InventoryInput {
    pub name: String,
    pub unit: String,
    pub quantity: String,
    pub min_threshold: String,
    pub max_threshold: String,
    pub category: String,
}

impl InventoryInput {
    /// # Errors
    ///
    /// The first field message, or a ceiling below the reorder threshold.
    pub fn to_draft(&self) -> Result<InventoryDraft, String> {
        let name = forms::required("Name", &self.name)?;
        let unit = forms::required("Unit", &self.unit)?;
        let quantity = forms::parse_quantity("Quantity", &self.quantity)?;
        let min_threshold = forms::parse_quantity("Reorder threshold", &self.min_threshold)?;
        let max_threshold = forms::parse_optional_quantity("Maximum", &self.max_threshold)?;
        if max_threshold.is_some_and(|max| max < min_threshold) {
            return Err("Maximum cannot be below the reorder threshold.".to_owned());
        }
        Ok(InventoryDraft { name, unit, quantity, min_threshold, max_threshold, category: forms::optional(&self.category) })
    }
}

impl From<&InventoryItem> for InventoryInput {
    fn from(item: &InventoryItem) -> Self {
        Self {
            name: item.name.clone(),
            unit: item.unit.clone(),
            quantity: item.quantity.to_string(),
            min_threshold: item.min_threshold.to_string(),
            max_threshold: item.max_threshold.map(|m| m.to_string()).unwrap_or_default(),
            category: item.category.clone().unwrap_or_default(),
        }
    }
}

/// Validated adjustment: the signed delta, the reason, and the resulting
/// quantity for the confirmation line.
///
/// # Errors
///
/// A message for a zero/non-numeric delta, a blank reason, or stock that
/// would go negative.
pub fn adjustment_input(current: i64, delta: &str, reason: &str) -> Result<(i64, String, i64), String> {
    let delta = forms::parse_delta(delta)?;
    let reason = forms::required("Reason", reason)?;
    let next = apply_adjustment(current, delta)?;
    Ok((delta, reason, next))
}

/// Items to show given the low-stock toggle.
#[must_use]
pub fn visible_items(items: &[InventoryItem], low_only: bool) -> Vec<InventoryItem> {
    items
        .iter()
        .filter(|item| !low_only || item_status(item).needs_reorder())
        .cloned()
        .collect()
}

#[component]
fn ItemEditor(existing: Option<InventoryItem>, on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let actions = Actions::from_context();
    let title = existing.as_ref().map_or_else(|| "New item".to_owned(), |i| format!("Edit {}", i.name));
    let id = existing.as_ref().map(|i| i.id.clone());
    let input = existing
        .as_ref()
        .map_or_else(|| InventoryInput { quantity: "0".to_owned(), min_threshold: "0".to_owned(), ..InventoryInput::default() }, InventoryInput::from);
    let name = RwSignal::new(input.name);
    let unit = RwSignal::new(input.unit);
    let quantity = RwSignal::new(input.quantity);
    let min_threshold = RwSignal::new(input.min_threshold);
    let max_threshold = RwSignal::new(input.max_threshold);
    let category = RwSignal::new(input.category);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = Callback::new(move |()| {
        let input = InventoryInput {
            name: name.get_untracked(),
            unit: unit.get_untracked(),
            quantity: quantity.get_untracked(),
            min_threshold: min_threshold.get_untracked(),
            max_threshold: max_threshold.get_untracked(),
            category: category.get_untracked(),
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
                    Some(id) => api::update_inventory_item(&client, &id, &draft).await,
                    None => api::create_inventory_item(&client, &draft).await,
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
            <TextField label="Unit" value=unit placeholder="bag, kg, roll…"/>
            <TextField label="Quantity" value=quantity kind="number"/>
            <TextField label="Reorder threshold" value=min_threshold kind="number"/>
            <TextField label="Maximum (optional)" value=max_threshold kind="number"/>
            <TextField label="Category" value=category/>
        </FormDialog>
    }
}

#[component]
fn AdjustDialog(item: InventoryItem, on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let actions = Actions::from_context();
    let delta = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let current = item.quantity;
    let unit = item.unit.clone();
    let preview = move || match adjustment_input(current, &delta.get(), "-") {
        Ok((_, _, next)) => format!("New stock: {next} {unit}"),
        Err(_) => String::new(),
    };
    let id = item.id.clone();

    let on_submit = Callback::new(move |()| {
        let (change, why) = match adjustment_input(current, &delta.get_untracked(), &reason.get_untracked()) {
            Ok((change, why, _)) => (change, why),
            Err(msg) => {
                error.set(msg);
                return;
            }
        };
        error.set(String::new());
        busy.set(true);
        let id = id.clone();
        actions.run_then(
            move |client| async move { api::adjust_stock(&client, &id, change, &why).await },
            move |result| {
                busy.set(false);
                match result {
                    Ok(updated) => {
                        actions.success(format!("{} now at {} {}", updated.name, updated.quantity, updated.unit));
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
            title=format!("Adjust {} ({} {})", item.name, item.quantity, item.unit)
            error=error
            busy=busy
            on_submit=on_submit
            on_cancel=on_cancel
        >
            <TextField label="Change" value=delta placeholder="+10 or -3"/>
            <TextField label="Reason" value=reason placeholder="Delivery, used at site…"/>
            <p class="dialog__hint">{preview}</p>
        </FormDialog>
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Dialog {
    Create,
    Edit(InventoryItem),
    Adjust(InventoryItem),
    Delete(InventoryItem),
}

#[component]
pub fn InventoryPage() -> impl IntoView {
    let actions = Actions::from_context();
    let items = Loaded::new(Vec::<InventoryItem>::new());
    install_loader(items, |client| async move { api::list_inventory(&client).await });
    let low_only = RwSignal::new(false);
    let listing = Listing::new(move || visible_items(&items.value.get(), low_only.get()));

    let dialog = RwSignal::new(None::<Dialog>);
    let close = Callback::new(move |()| dialog.set(None));
    let after_save = Callback::new(move |()| {
        dialog.set(None);
        items.refresh();
    });
    let confirm_delete = Callback::new(move |()| {
        let Some(Dialog::Delete(target)) = dialog.get_untracked() else {
            return;
        };
        dialog.set(None);
        let id = target.id.clone();
        actions.run(
            move |client| async move { api::delete_inventory_item(&client, &id).await },
            move |()| {
                actions.success(format!("Deleted {}", target.name));
                items.refresh();
            },
        );
    });
    Effect::new(move || {
        low_only.track();
        listing.page.set(1);
    });

    view! {
        <PageFrame title="Inventory" allowed=&ADMIN_ONLY>
            <div class="toolbar-row">
                <SearchBox query=listing.query page=listing.page placeholder="Search inventory…"/>
                <CheckField label="Low stock only" value=low_only/>
                <button class="btn btn--primary" on:click=move |_| dialog.set(Some(Dialog::Create))>
                    "New item"
                </button>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Item"</th>
                        <th>"Category"</th>
                        <th>"On hand"</th>
                        <th>"Reorder at"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        listing
                            .items()
                            .into_iter()
                            .map(|item| {
                                let status = item_status(&item);
                                let on_hand = format!("{} {}", item.quantity, item.unit);
                                let reorder_at = format!("{} {}", item.min_threshold, item.unit);
                                let for_edit = item.clone();
                                let for_adjust = item.clone();
                                let for_delete = item.clone();
                                view! {
                                    <tr>
                                        <td>{item.name}</td>
                                        <td>{item.category.unwrap_or_default()}</td>
                                        <td>{on_hand}</td>
                                        <td>{reorder_at}</td>
                                        <td>
                                            <StockBadge status=status/>
                                        </td>
                                        <td class="table__actions">
                                            <button
                                                class="btn"
                                                on:click=move |_| dialog.set(Some(Dialog::Adjust(for_adjust.clone())))
                                            >
                                                "Adjust"
                                            </button>
                                            <button
                                                class="btn"
                                                on:click=move |_| dialog.set(Some(Dialog::Edit(for_edit.clone())))
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| dialog.set(Some(Dialog::Delete(for_delete.clone())))
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
                dialog
                    .get()
                    .map(|open| match open {
                        Dialog::Create => {
                            view! { <ItemEditor existing=None on_saved=after_save on_cancel=close/> }.into_any()
                        }
                        Dialog::Edit(item) => {
                            view! { <ItemEditor existing=Some(item) on_saved=after_save on_cancel=close/> }
                                .into_any()
                        }
                        Dialog::Adjust(item) => {
                            view! { <AdjustDialog item=item on_saved=after_save on_cancel=close/> }.into_any()
                        }
                        Dialog::Delete(item) => {
                            view! {
                                <ConfirmDialog
                                    title="Delete item".to_owned()
                                    message=format!("Delete {} from inventory?", item.name)
                                    on_confirm=confirm_delete
                                    on_cancel=close
                                />
                            }
                                .into_any()
                        }
                    })
            }}
        </PageFrame>
    }
}
