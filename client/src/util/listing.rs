//! Client-side search and pagination over already-fetched record lists.
//!
//! DESIGN
//! ======
//! The backend returns whole collections; tables narrow and page them locally.
//! Pages are 1-based and always clamped, so a stale page number after a
//! search or delete still renders the last real page.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::net::types::{Client, Feedback, InventoryItem, Notification, Site, Task, Worker};

pub const DEFAULT_PER_PAGE: usize = 10;

/// Records that can be matched by the search box.
pub trait Searchable {
    /// Lowercased text the search terms are matched against.
    fn haystack(&self) -> String;
}

fn join_lower(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .flatten()
        .map(|p| p.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Searchable for Client {
    fn haystack(&self) -> String {
        join_lower(&[
            Some(self.name.as_str()),
            Some(self.email.as_str()),
            self.phone.as_deref(),
            self.address.as_deref(),
        ])
    }
}

impl Searchable for Worker {
    fn haystack(&self) -> String {
        join_lower(&[
            Some(self.name.as_str()),
            Some(self.email.as_str()),
            self.phone.as_deref(),
            self.specialty.as_deref(),
        ])
    }
}

impl Searchable for Site {
    fn haystack(&self) -> String {
        join_lower(&[Some(self.name.as_str()), Some(self.address.as_str()), self.notes.as_deref()])
    }
}

impl Searchable for Task {
    fn haystack(&self) -> String {
        join_lower(&[
            Some(self.title.as_str()),
            self.description.as_deref(),
            Some(self.status.label()),
            self.scheduled_for.as_deref(),
        ])
    }
}

impl Searchable for InventoryItem {
    fn haystack(&self) -> String {
        join_lower(&[Some(self.name.as_str()), Some(self.unit.as_str()), self.category.as_deref()])
    }
}

impl Searchable for Feedback {
    fn haystack(&self) -> String {
        join_lower(&[self.comment.as_deref(), Some(self.task_id.as_str())])
    }
}

impl Searchable for Notification {
    fn haystack(&self) -> String {
        self.message.to_lowercase()
    }
}

/// True when every whitespace-separated term of `query` occurs in `haystack`.
#[must_use]
pub fn matches_query(haystack: &str, query: &str) -> bool {
    query
        .split_whitespace()
        .map(str::to_lowercase)
        .all(|term| haystack.contains(&term))
}

/// Keep the items matching `query`. An empty query keeps everything.
#[must_use]
pub fn filter_by_text<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    if query.trim().is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| matches_query(&item.haystack(), query))
        .cloned()
        .collect()
}

/// One page of a list.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number after clamping.
    pub page: usize,
    pub per_page: usize,
    /// Item count across all pages.
    pub total: usize,
    /// At least 1, even for an empty list.
    pub total_pages: usize,
}

impl<T> Page<T> {
    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based positions of the first and last item shown, for
    /// "Showing 11–20 of 42". `(0, 0)` when the list is empty.
    #[must_use]
    pub fn range(&self) -> (usize, usize) {
        if self.total == 0 {
            return (0, 0);
        }
        let first = (self.page - 1) * self.per_page + 1;
        (first, first + self.items.len() - 1)
    }
}

/// Slice out page `page` (1-based, clamped) of `per_page` items.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = if per_page == 0 { DEFAULT_PER_PAGE } else { per_page };
    let total = items.len();
    let total_pages = total.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total);
    Page { items: items[start..end].to_vec(), page, per_page, total, total_pages }
}

/// Up to `width` consecutive page numbers centred on `page`, for pagination
/// controls.
#[must_use]
pub fn page_window(page: usize, total_pages: usize, width: usize) -> Vec<usize> {
    let total_pages = total_pages.max(1);
    let width = width.clamp(1, total_pages);
    let page = page.clamp(1, total_pages);
    let mut start = page.saturating_sub(width / 2).max(1);
    if start + width - 1 > total_pages {
        start = total_pages + 1 - width;
    }
    (start..start + width).collect()
}
