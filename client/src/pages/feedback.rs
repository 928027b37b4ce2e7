//! Admin view of client ratings.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use leptos::prelude::*;

use crate::components::list_controls::{Pager, SearchBox};
use crate::components::page_frame::PageFrame;
use crate::components::stat_card::StatCard;
use crate::net::api;
use crate::net::types::{Feedback, Task, TaskFilter};
use crate::pages::loader::{Listing, Loaded, install_loader};
use crate::util::auth::ADMIN_ONLY;
use crate::util::format::{average_rating, count_label, short_datetime, stars};

/// Count of ratings per star value; index 0 holds one-star ratings.
#[must_use]
pub fn rating_histogram(feedback: &[Feedback]) -> [usize; 5] {
    let mut counts = [0; 5];
    for entry in feedback {
        if let Some(slot) = usize::from(entry.rating).checked_sub(1).and_then(|i| counts.get_mut(i)) {
            *slot += 1;
        }
    }
    counts
}

/// Task title for a feedback row, falling back to the task id.
#[must_use]
pub fn task_title(tasks: &[Task], task_id: &str) -> String {
    tasks
        .iter()
        .find(|t| t.id == task_id)
        .map_or_else(|| task_id.to_owned(), |t| t.title.clone())
}

#[component]
pub fn FeedbackPage() -> impl IntoView {
    let feedback = Loaded::new(Vec::<Feedback>::new());
    install_loader(feedback, |client| async move { api::list_feedback(&client).await });
    let tasks = Loaded::new(Vec::<Task>::new());
    install_loader(tasks, |client| async move { api::list_tasks(&client, &TaskFilter::default()).await });
    let listing = Listing::new(move || {
        let mut entries = feedback.value.get();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries
    });

    let average = Signal::derive(move || {
        average_rating(&feedback.value.get()).map_or_else(|| "–".to_owned(), |avg| format!("{avg:.1} / 5"))
    });
    let total = Signal::derive(move || count_label(feedback.value.get().len(), "review", "reviews"));
    let low = Signal::derive(move || feedback.value.get().iter().any(|f| f.rating <= 2));

    view! {
        <PageFrame title="Feedback" allowed=&ADMIN_ONLY>
            <section class="stat-grid">
                <StatCard label="Average rating" value=average warn=low/>
                <StatCard label="Received" value=total/>
            </section>
            <section class="panel rating-histogram">
                {move || {
                    let counts = rating_histogram(&feedback.value.get());
                    (1..=5u8)
                        .rev()
                        .map(|star| {
                            let count = counts[usize::from(star) - 1];
                            view! {
                                <div class="rating-histogram__row">
                                    <span>{stars(star)}</span>
                                    <span>{count}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </section>
            <div class="toolbar-row">
                <SearchBox query=listing.query page=listing.page placeholder="Search comments…"/>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Task"</th>
                        <th>"Rating"</th>
                        <th>"Comment"</th>
                        <th>"Received"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let known_tasks = tasks.value.get();
                        listing
                            .items()
                            .into_iter()
                            .map(|entry| {
                                let href = format!("/tasks/{}", entry.task_id);
                                let title = task_title(&known_tasks, &entry.task_id);
                                view! {
                                    <tr>
                                        <td>
                                            <a href=href>{title}</a>
                                        </td>
                                        <td class="rating">{stars(entry.rating)}</td>
                                        <td>{entry.comment.unwrap_or_default()}</td>
                                        <td>{short_datetime(&entry.created_at)}</td>
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
        </PageFrame>
    }
}
