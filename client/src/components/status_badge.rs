//! Colour-coded badges for task and stock status.

use leptos::prelude::*;

use crate::net::types::TaskStatus;
use crate::util::stock::StockStatus;

#[component]
pub fn TaskStatusBadge(status: TaskStatus) -> impl IntoView {
    let class = format!("badge badge--task-{}", status.as_str());
    view! { <span class=class>{status.label()}</span> }
}

#[component]
pub fn StockBadge(status: StockStatus) -> impl IntoView {
    let class = format!("badge badge--stock-{}", status.css_modifier());
    view! { <span class=class>{status.label()}</span> }
}
