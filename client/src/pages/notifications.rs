//! Notification inbox with mark-read and mark-all-read.
//!
//! Items live in the shared `NotificationsState` so the nav badge updates as
//! soon as something is marked read here.

use leptos::prelude::*;

use crate::components::list_controls::{Pager, SearchBox};
use crate::components::page_frame::PageFrame;
use crate::net::api;
use crate::pages::loader::{Actions, Listing};
use crate::state::auth::AuthState;
use crate::state::notifications::NotificationsState;
use crate::util::auth::ALL_ROLES;
use crate::util::format::{count_label, short_datetime};

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let actions = Actions::from_context();

    Effect::new(move || {
        if auth.get().session.is_none() {
            return;
        }
        notifications.update(|n| n.loading = true);
        actions.run_then(
            |client| async move { api::list_notifications(&client).await },
            move |result| match result {
                Ok(items) => notifications.update(|n| n.replace(items)),
                Err(err) => {
                    notifications.update(|n| n.loading = false);
                    actions.report(&err);
                }
            },
        );
    });

    let listing = Listing::new(move || notifications.get().items);
    let unread = move || notifications.get().unread_count();

    let mark_read = move |id: String| {
        let local_id = id.clone();
        actions.run(
            move |client| async move { api::mark_notification_read(&client, &id).await },
            move |()| notifications.update(|n| n.mark_read(&local_id)),
        );
    };
    let mark_all = move |_| {
        actions.run(
            |client| async move { api::mark_all_notifications_read(&client).await },
            move |()| {
                notifications.update(NotificationsState::mark_all_read);
                actions.success("All notifications marked read");
            },
        );
    };

    view! {
        <PageFrame title="Notifications" allowed=&ALL_ROLES>
            <div class="toolbar-row">
                <SearchBox query=listing.query page=listing.page placeholder="Search notifications…"/>
                <span class="toolbar-row__meta">{move || count_label(unread(), "unread", "unread")}</span>
                <button class="btn" disabled=move || unread() == 0 on:click=mark_all>
                    "Mark all read"
                </button>
            </div>
            <ul class="notification-list">
                {move || {
                    let page = listing.visible.get();
                    if page.total == 0 && !notifications.get().loading {
                        return view! { <li class="empty">"Nothing here yet."</li> }.into_any();
                    }
                    page.items
                        .into_iter()
                        .map(|item| {
                            let id = item.id.clone();
                            let is_read = item.read;
                            view! {
                                <li class="notification" class:notification--unread=!is_read>
                                    <span class="notification__time">{short_datetime(&item.created_at)}</span>
                                    {match item.link {
                                        Some(href) => view! { <a href=href>{item.message}</a> }.into_any(),
                                        None => view! { <span>{item.message}</span> }.into_any(),
                                    }}
                                    {(!is_read)
                                        .then(|| {
                                            view! {
                                                <button class="btn btn--small" on:click=move |_| mark_read(id.clone())>
                                                    "Mark read"
                                                </button>
                                            }
                                        })}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </ul>
            <Pager
                page=listing.page
                total_pages=listing.total_pages()
                range=listing.range()
                total=listing.total()
            />
        </PageFrame>
    }
}
